//! Identity bootstrap for a Hyperledger Fabric style network.
//!
//! [`IdentityBootstrapper`] enrolls an organization's admin with its
//! certificate authority, registers and enrolls users with that admin as
//! registrar, and caches every issued credential in a [`store::CredentialStore`].
pub mod ca;
pub mod config;
pub mod error;
pub mod fs;
pub mod identity;
pub mod json;
pub mod logger;
pub mod store;

pub use identity::{Enrollment, Identity, IdentityBootstrapper};
