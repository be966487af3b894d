use thiserror::Error;

/// Failure reported by a certificate authority client.
#[derive(Error, Debug)]
pub enum CaServiceError {
    #[error("CA rejected the request (code {code}): {message}")]
    Rejected { code: u32, message: String },

    #[error("CA service is unreachable")]
    Unreachable(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("CA service returned a malformed response: {0}")]
    MalformedResponse(String),
}
