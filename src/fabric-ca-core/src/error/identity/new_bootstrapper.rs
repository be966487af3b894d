use crate::error::identity::validate_name::ValidateNameError;
use crate::error::network_config::OrganizationConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewBootstrapperError {
    #[error("Invalid organization name")]
    InvalidOrganizationName(#[source] ValidateNameError),

    #[error("Failed to load configuration of organization '{0}'")]
    LoadOrganizationFailed(String, #[source] OrganizationConfigError),
}
