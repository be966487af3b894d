pub mod directories;
pub mod network;

pub use network::{CaInfo, NetworkConfig, OrganizationConfig, OrganizationInfo};
