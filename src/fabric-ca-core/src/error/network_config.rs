use crate::error::identity::validate_name::ValidateNameError;
use crate::error::structured_file::StructuredFileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkConfigError {
    #[error("Organization '{0}' lists no certificate authority")]
    NoCertificateAuthority(String),

    #[error("Organization '{0}' refers to certificate authority '{1}', which is not defined")]
    CertificateAuthorityNotFound(String, String),

    #[error("Organization '{0}' has an empty MSP id")]
    EmptyMspId(String),

    #[error("Organization name '{0}' cannot be used")]
    InvalidOrganizationName(String, #[source] ValidateNameError),

    #[error("Failed to load network configuration")]
    LoadNetworkConfigFailed(#[source] StructuredFileError),

    #[error("Failed to parse network configuration")]
    ParseNetworkConfigFailed(#[source] serde_json::Error),

    #[error(transparent)]
    OrganizationConfig(#[from] OrganizationConfigError),
}

#[derive(Error, Debug)]
pub enum OrganizationConfigError {
    #[error("Organization '{0}' is not defined in the network configuration")]
    OrganizationNotFound(String),
}
