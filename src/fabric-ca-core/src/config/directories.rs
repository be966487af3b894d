use crate::error::config::ConfigError;
use crate::error::config::ConfigError::DetermineCredentialRootFailed;
use crate::error::foundation::FoundationError;
use crate::error::foundation::FoundationError::NoHomeInEnvironment;

use directories_next::ProjectDirs;
use std::path::PathBuf;

/// Overrides the directory credentials are cached in.
pub const CREDENTIAL_ROOT_ENV_VAR: &str = "FABRIC_CA_CRED_ROOT";

pub fn project_dirs() -> Result<&'static ProjectDirs, FoundationError> {
    lazy_static::lazy_static! {
        static ref DIRS: Option<ProjectDirs> =
            ProjectDirs::from("org", "hyperledger", "fabric-ca-core");
    }
    DIRS.as_ref().ok_or(NoHomeInEnvironment())
}

pub fn get_credential_root() -> Result<PathBuf, ConfigError> {
    if let Some(root) = std::env::var_os(CREDENTIAL_ROOT_ENV_VAR) {
        return Ok(PathBuf::from(root));
    }
    let project_dirs = project_dirs().map_err(DetermineCredentialRootFailed)?;
    Ok(project_dirs.data_local_dir().join("credentials"))
}

