use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsErrorKind {
    #[error("File {0} already exists")]
    AlreadyExists(PathBuf),

    #[error("Failed to create {0}: {1}")]
    CreateDirectoryFailed(PathBuf, std::io::Error),

    #[error("Failed to create file {0}: {1}")]
    CreateFileFailed(PathBuf, std::io::Error),

    #[error("Failed to create a temporary file in {0}: {1}")]
    CreateTempFileFailed(PathBuf, std::io::Error),

    #[error("Cannot determine parent folder for {0}")]
    NoParent(PathBuf),

    #[error("Path {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Failed to move temporary file into place at {0}: {1}")]
    PersistFileFailed(PathBuf, std::io::Error),

    #[error("Failed to read {0}: {1}")]
    ReadFileFailed(PathBuf, std::io::Error),

    #[error("Failed to read permissions of {0}: {1}")]
    ReadPermissionsFailed(PathBuf, std::io::Error),

    #[error("Failed to write to {0}: {1}")]
    WriteFileFailed(PathBuf, std::io::Error),

    #[error("Failed to set permissions of {0}: {1}")]
    WritePermissionsFailed(PathBuf, std::io::Error),
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct FsError(pub Box<FsErrorKind>);

impl FsError {
    pub fn new(kind: FsErrorKind) -> Self {
        FsError(Box::new(kind))
    }

    pub fn kind(&self) -> &FsErrorKind {
        &self.0
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(*self.0, FsErrorKind::AlreadyExists(_))
    }
}
