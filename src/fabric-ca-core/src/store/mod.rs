//! Local persistence of enrolled identities, keyed by (organization, name).
use crate::error::credential_store::{ReadIdentityError, WriteIdentityError};
use crate::identity::Identity;

mod credential_file_locations;
pub mod file;
pub mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

/// Result of a create-only insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,

    /// An identity with the same key was stored first; it is left untouched.
    AlreadyExists(Identity),
}

pub trait CredentialStore: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under the key.
    fn read(&self, organization: &str, name: &str) -> Result<Option<Identity>, ReadIdentityError>;

    /// Stores `identity` unless its key is already taken.
    ///
    /// Must be atomic with respect to other inserts of the same key.
    fn insert(&self, identity: &Identity) -> Result<InsertOutcome, WriteIdentityError>;
}
