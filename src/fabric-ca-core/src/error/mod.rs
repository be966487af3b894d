pub mod ca_service;
pub mod config;
pub mod credential_store;
pub mod foundation;
pub mod fs;
pub mod identity;
pub mod network_config;
pub mod structured_file;
