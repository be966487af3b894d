use crate::error::fs::FsError;
use crate::error::identity::validate_name::ValidateNameError;
use crate::error::structured_file::StructuredFileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadIdentityError {
    #[error("Invalid identity key")]
    InvalidKey(#[source] ValidateNameError),

    #[error("Failed to load credentials for '{name}' of organization '{organization}'")]
    LoadCredentialsFailed {
        organization: String,
        name: String,
        #[source]
        source: StructuredFileError,
    },

    #[error("Credentials at {0} belong to '{1}' of organization '{2}'")]
    CredentialsMismatch(Box<PathBuf>, String, String),
}

#[derive(Error, Debug)]
pub enum WriteIdentityError {
    #[error("Invalid identity key")]
    InvalidKey(#[source] ValidateNameError),

    #[error("Failed to ensure credential directory for organization '{0}' exists")]
    EnsureOrganizationDirFailed(String, #[source] FsError),

    #[error("Failed to save credentials for '{0}'")]
    SaveCredentialsFailed(String, #[source] StructuredFileError),
}
