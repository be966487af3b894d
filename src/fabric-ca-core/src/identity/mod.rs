//! Identity type and the bootstrap workflow that produces it.
//!
//! An [`Identity`] is only ever created from the result of a successful CA
//! enrollment and is never mutated afterwards.
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod bootstrapper;
pub mod names;

pub use bootstrapper::IdentityBootstrapper;

/// Enrollment material issued by the certificate authority.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// PEM encoded signed certificate.
    certificate: String,

    /// PEM encoded private key matching the certificate.
    private_key: String,
}

impl Enrollment {
    pub fn new(certificate: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            certificate: certificate.into(),
            private_key: private_key.into(),
        }
    }

    pub fn certificate(&self) -> &str {
        &self.certificate
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enrollment")
            .field("certificate", &self.certificate)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// The name of this Identity, unique within its organization.
    name: String,

    /// The organization (affiliation) the identity belongs to.
    organization_id: String,

    /// The membership service provider the credential is validated against.
    msp_id: String,

    enrollment: Enrollment,
}

impl Identity {
    pub fn new(
        name: impl Into<String>,
        organization_id: impl Into<String>,
        msp_id: impl Into<String>,
        enrollment: Enrollment,
    ) -> Self {
        Self {
            name: name.into(),
            organization_id: organization_id.into(),
            msp_id: msp_id.into(),
            enrollment,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    pub fn enrollment(&self) -> &Enrollment {
        &self.enrollment
    }
}
