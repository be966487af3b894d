//! The certificate authority seen from the bootstrapper.
//!
//! Enrollment and registration are performed by a remote Fabric CA. Key
//! generation, CSR construction and the wire protocol live in the
//! implementation of [`CaService`], never in this crate.
use crate::error::ca_service::CaServiceError;
use crate::identity::{Enrollment, Identity};
use serde::{Deserialize, Serialize};

pub const DEFAULT_IDENTITY_TYPE: &str = "client";

/// Request to register a new identity with the CA.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub enrollment_id: String,

    pub affiliation: String,

    #[serde(rename = "type")]
    pub identity_type: String,
}

impl RegistrationRequest {
    pub fn new(enrollment_id: &str, affiliation: &str) -> Self {
        Self {
            enrollment_id: enrollment_id.to_string(),
            affiliation: affiliation.to_string(),
            identity_type: DEFAULT_IDENTITY_TYPE.to_string(),
        }
    }
}

pub trait CaService: Send + Sync {
    /// Exchanges an enrollment id and secret for a signed credential.
    fn enroll(&self, name: &str, secret: &str) -> Result<Enrollment, CaServiceError>;

    /// Registers a new identity on behalf of `registrar` and returns its enrollment secret.
    fn register(
        &self,
        request: &RegistrationRequest,
        registrar: &Identity,
    ) -> Result<String, CaServiceError>;
}
