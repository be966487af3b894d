use crate::error::credential_store::ReadIdentityError;
use crate::error::identity::validate_name::ValidateNameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GetIdentityError {
    #[error("Invalid identity name")]
    InvalidName(#[source] ValidateNameError),

    #[error("Identity '{1}' of organization '{0}' is not enrolled. Register the user first.")]
    IdentityNotFound(String, String),

    #[error("Failed to look up stored identity '{0}'")]
    ReadIdentityFailed(String, #[source] ReadIdentityError),
}

impl GetIdentityError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GetIdentityError::IdentityNotFound(..))
    }
}
