use crate::error::ca_service::CaServiceError;
use crate::error::credential_store::{ReadIdentityError, WriteIdentityError};
use crate::error::identity::validate_name::ValidateNameError;
use crate::identity::Identity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrollAdminError {
    #[error("Invalid admin name")]
    InvalidName(#[source] ValidateNameError),

    #[error("Enrollment secret for '{0}' is empty")]
    EmptySecret(String),

    #[error("Failed to look up stored identity '{0}'")]
    ReadIdentityFailed(String, #[source] ReadIdentityError),

    #[error("Failed to enroll '{0}' with the CA")]
    EnrollmentFailed(String, #[source] CaServiceError),

    /// The CA issued the credential, but it is not cached locally.
    #[error("'{}' was enrolled by the CA but could not be saved locally", .identity.name())]
    PersistenceFailed {
        identity: Box<Identity>,
        #[source]
        source: WriteIdentityError,
    },
}
