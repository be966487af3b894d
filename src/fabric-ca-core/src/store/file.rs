use crate::config::directories::get_credential_root;
use crate::error::config::ConfigError;
use crate::error::credential_store::ReadIdentityError::{
    CredentialsMismatch, LoadCredentialsFailed,
};
use crate::error::credential_store::WriteIdentityError::{
    EnsureOrganizationDirFailed, SaveCredentialsFailed,
};
use crate::error::credential_store::{ReadIdentityError, WriteIdentityError};
use crate::fs::composite::ensure_dir_exists;
use crate::identity::names::validate_name;
use crate::identity::Identity;
use crate::json::{load_json_file, save_new_json_file};
use crate::store::credential_file_locations::CredentialFileLocations;
use crate::store::{CredentialStore, InsertOutcome};
use std::path::{Path, PathBuf};

/// Stores each identity as `<root>/<organization>/<name>.json`.
#[derive(Clone, Debug)]
pub struct FileCredentialStore {
    locations: CredentialFileLocations,
}

impl FileCredentialStore {
    pub fn new(root_dir: PathBuf) -> Self {
        Self {
            locations: CredentialFileLocations::new(root_dir),
        }
    }

    /// Opens the store at `$FABRIC_CA_CRED_ROOT`, or the platform data directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Ok(Self::new(get_credential_root()?))
    }

    pub fn root(&self) -> &Path {
        self.locations.root()
    }

    pub fn identity_path(&self, organization: &str, name: &str) -> PathBuf {
        self.locations.get_identity_path(organization, name)
    }
}

impl CredentialStore for FileCredentialStore {
    fn read(&self, organization: &str, name: &str) -> Result<Option<Identity>, ReadIdentityError> {
        validate_name(organization).map_err(ReadIdentityError::InvalidKey)?;
        validate_name(name).map_err(ReadIdentityError::InvalidKey)?;

        let path = self.locations.get_identity_path(organization, name);
        if !path.exists() {
            return Ok(None);
        }
        let identity: Identity = load_json_file(&path).map_err(|source| LoadCredentialsFailed {
            organization: organization.to_string(),
            name: name.to_string(),
            source,
        })?;
        if identity.organization_id() != organization || identity.name() != name {
            return Err(CredentialsMismatch(
                Box::new(path),
                identity.name().to_string(),
                identity.organization_id().to_string(),
            ));
        }
        Ok(Some(identity))
    }

    fn insert(&self, identity: &Identity) -> Result<InsertOutcome, WriteIdentityError> {
        let organization = identity.organization_id();
        let name = identity.name();
        validate_name(organization).map_err(WriteIdentityError::InvalidKey)?;
        validate_name(name).map_err(WriteIdentityError::InvalidKey)?;

        ensure_dir_exists(&self.locations.get_organization_dir_path(organization))
            .map_err(|err| EnsureOrganizationDirFailed(organization.to_string(), err))?;

        let path = self.locations.get_identity_path(organization, name);
        match save_new_json_file(&path, identity) {
            Ok(()) => {}
            Err(err) if err.is_already_exists() => {
                return match self.read(organization, name) {
                    Ok(Some(existing)) => Ok(InsertOutcome::AlreadyExists(existing)),
                    Ok(None) | Err(_) => Err(SaveCredentialsFailed(name.to_string(), err)),
                };
            }
            Err(err) => return Err(SaveCredentialsFailed(name.to_string(), err)),
        }
        Ok(InsertOutcome::Inserted)
    }
}
