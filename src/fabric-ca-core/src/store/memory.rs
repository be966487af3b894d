use crate::error::credential_store::{ReadIdentityError, WriteIdentityError};
use crate::identity::Identity;
use crate::store::{CredentialStore, InsertOutcome};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

type Key = (String, String);

/// Credential store that keeps identities in process memory.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    identities: Mutex<BTreeMap<Key, Identity>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<Key, Identity>> {
        // Entries are inserted whole, so a poisoned map is still consistent.
        self.identities.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn read(&self, organization: &str, name: &str) -> Result<Option<Identity>, ReadIdentityError> {
        Ok(self
            .lock()
            .get(&(organization.to_string(), name.to_string()))
            .cloned())
    }

    fn insert(&self, identity: &Identity) -> Result<InsertOutcome, WriteIdentityError> {
        let key = (
            identity.organization_id().to_string(),
            identity.name().to_string(),
        );
        match self.lock().entry(key) {
            Entry::Occupied(existing) => Ok(InsertOutcome::AlreadyExists(existing.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(identity.clone());
                Ok(InsertOutcome::Inserted)
            }
        }
    }
}
