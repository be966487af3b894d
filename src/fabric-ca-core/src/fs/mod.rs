pub mod composite;
use crate::error::fs::FsError;
use crate::error::fs::FsErrorKind::{
    AlreadyExists, CreateDirectoryFailed, CreateFileFailed, CreateTempFileFailed, NoParent,
    PersistFileFailed, ReadFileFailed, ReadPermissionsFailed, WriteFileFailed,
    WritePermissionsFailed,
};

use std::fs::{File, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn create_dir_all(path: &Path) -> Result<(), FsError> {
    std::fs::create_dir_all(path)
        .map_err(|err| FsError::new(CreateDirectoryFailed(path.to_path_buf(), err)))
}

pub fn create_file(path: &Path) -> Result<File, FsError> {
    File::create(path).map_err(|err| FsError::new(CreateFileFailed(path.to_path_buf(), err)))
}

pub fn parent(path: &Path) -> Result<PathBuf, FsError> {
    match path.parent() {
        None => Err(FsError::new(NoParent(path.to_path_buf()))),
        Some(parent) => Ok(parent.to_path_buf()),
    }
}

pub fn read(path: &Path) -> Result<Vec<u8>, FsError> {
    std::fs::read(path).map_err(|err| FsError::new(ReadFileFailed(path.to_path_buf(), err)))
}

pub fn read_permissions(path: &Path) -> Result<Permissions, FsError> {
    std::fs::metadata(path)
        .map_err(|err| FsError::new(ReadPermissionsFailed(path.to_path_buf(), err)))
        .map(|x| x.permissions())
}

pub fn set_permissions(path: &Path, permissions: Permissions) -> Result<(), FsError> {
    std::fs::set_permissions(path, permissions)
        .map_err(|err| FsError::new(WritePermissionsFailed(path.to_path_buf(), err)))
}

/// Writes `contents` to a new owner-read-only file at `path`, only if nothing
/// exists there yet.
///
/// The contents go to a temporary file in the same directory first, which gets
/// its final permissions and is then linked into place without replacing an
/// existing file. Publishing is the last step: on error nothing is at `path`.
pub fn write_new_private<C: AsRef<[u8]>>(path: &Path, contents: C) -> Result<(), FsError> {
    let dir = parent(path)?;
    let mut temp = tempfile::NamedTempFile::new_in(&dir)
        .map_err(|err| FsError::new(CreateTempFileFailed(dir, err)))?;
    temp.write_all(contents.as_ref())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|err| FsError::new(WriteFileFailed(temp.path().to_path_buf(), err)))?;
    set_owner_read_only(temp.path())?;

    temp.persist_noclobber(path).map_err(|err| {
        if err.error.kind() == std::io::ErrorKind::AlreadyExists {
            FsError::new(AlreadyExists(path.to_path_buf()))
        } else {
            FsError::new(PersistFileFailed(path.to_path_buf(), err.error))
        }
    })?;
    Ok(())
}

/// Makes a file read-only; on *nix, readable by the owner only.
pub fn set_owner_read_only(path: &Path) -> Result<(), FsError> {
    let mut permissions = read_permissions(path)?;

    permissions.set_readonly(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(0o400);
    }

    set_permissions(path, permissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_new_refuses_to_replace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.json");

        write_new_private(&path, b"first").unwrap();
        let err = write_new_private(&path, b"second").unwrap_err();

        assert!(err.is_already_exists(), "unexpected error: {err}");
        assert_eq!(read(&path).unwrap(), b"first");
    }

    #[test]
    fn write_new_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.json");

        write_new_private(&path, b"first").unwrap();
        let _ = write_new_private(&path, b"second");

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_new_requires_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("entry.json");

        let err = write_new_private(&path, b"first").unwrap_err();
        assert!(matches!(err.kind(), CreateTempFileFailed(..)));
    }

    #[cfg(unix)]
    #[test]
    fn published_file_is_owner_read_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret");
        write_new_private(&path, b"key").unwrap();

        let mode = read_permissions(&path).unwrap().mode();
        assert_eq!(mode & 0o777, 0o400);
    }
}
