use std::path::{Path, PathBuf};

pub const CREDENTIAL_FILE_EXTENSION: &str = "json";

#[derive(Clone, Debug)]
pub(crate) struct CredentialFileLocations {
    root_dir: PathBuf,
}

impl CredentialFileLocations {
    pub fn new(root_dir: PathBuf) -> Self {
        Self { root_dir }
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    pub fn get_organization_dir_path(&self, organization: &str) -> PathBuf {
        self.root_dir.join(organization)
    }

    /// Determines the path of the credential file of one identity.
    pub fn get_identity_path(&self, organization: &str, name: &str) -> PathBuf {
        self.get_organization_dir_path(organization)
            .join(format!("{name}.{CREDENTIAL_FILE_EXTENSION}"))
    }
}
