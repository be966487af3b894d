use crate::ca::{CaService, RegistrationRequest};
use crate::config::{OrganizationConfig, OrganizationInfo};
use crate::error::credential_store::WriteIdentityError;
use crate::error::identity::enroll_admin::EnrollAdminError;
use crate::error::identity::get_identity::GetIdentityError;
use crate::error::identity::new_bootstrapper::NewBootstrapperError;
use crate::error::identity::register_user::RegisterUserError;
use crate::identity::names::validate_name;
use crate::identity::Identity;
use crate::store::{CredentialStore, InsertOutcome};
use slog::{debug, error, info, warn, Logger};
use std::sync::Arc;

/// Enrolls and registers identities of one organization, caching them in a
/// credential store.
///
/// Every identity is enrolled at most once per (organization, name): stored
/// identities are returned as-is and the CA is not contacted.
pub struct IdentityBootstrapper {
    organization: String,
    organization_info: OrganizationInfo,
    ca: Arc<dyn CaService>,
    store: Arc<dyn CredentialStore>,
    logger: Logger,
}

impl IdentityBootstrapper {
    pub fn new(
        organization: &str,
        config: &dyn OrganizationConfig,
        ca: Arc<dyn CaService>,
        store: Arc<dyn CredentialStore>,
        logger: &Logger,
    ) -> Result<Self, NewBootstrapperError> {
        validate_name(organization).map_err(NewBootstrapperError::InvalidOrganizationName)?;
        let organization_info = config.organization(organization).map_err(|err| {
            NewBootstrapperError::LoadOrganizationFailed(organization.to_string(), err)
        })?;
        let logger = logger.new(slog::o!("organization" => organization.to_string()));
        debug!(logger, "Loaded organization"; "msp_id" => &organization_info.msp_id);

        Ok(Self {
            organization: organization.to_string(),
            organization_info,
            ca,
            store,
            logger,
        })
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn msp_id(&self) -> &str {
        &self.organization_info.msp_id
    }

    /// Enroll the admin. The admin is used as a registrar to register other users.
    pub fn enroll_admin(&self, name: &str, secret: &str) -> Result<Identity, EnrollAdminError> {
        validate_name(name).map_err(EnrollAdminError::InvalidName)?;
        if secret.is_empty() {
            return Err(EnrollAdminError::EmptySecret(name.to_string()));
        }

        let existing = self
            .store
            .read(&self.organization, name)
            .map_err(|err| EnrollAdminError::ReadIdentityFailed(name.to_string(), err))?;
        if let Some(admin) = existing {
            warn!(self.logger, "Admin is already enrolled, skipping enrollment"; "name" => name);
            return Ok(admin);
        }

        let enrollment = self
            .ca
            .enroll(name, secret)
            .map_err(|err| EnrollAdminError::EnrollmentFailed(name.to_string(), err))?;
        info!(self.logger, "Admin enrolled"; "name" => name);

        let admin = Identity::new(
            name,
            &self.organization,
            &self.organization_info.msp_id,
            enrollment,
        );
        self.persist(admin)
            .map_err(|(identity, source)| EnrollAdminError::PersistenceFailed {
                identity: Box::new(identity),
                source,
            })
    }

    /// Register and enroll a user of this organization, authorized by `registrar_name`.
    ///
    /// The registrar must already be enrolled.
    pub fn register_user(
        &self,
        user_name: &str,
        registrar_name: &str,
    ) -> Result<Identity, RegisterUserError> {
        validate_name(user_name).map_err(RegisterUserError::InvalidName)?;
        validate_name(registrar_name).map_err(RegisterUserError::InvalidName)?;

        let existing = self
            .store
            .read(&self.organization, user_name)
            .map_err(|err| RegisterUserError::ReadIdentityFailed(user_name.to_string(), err))?;
        if let Some(user) = existing {
            warn!(
                self.logger,
                "User is already registered, skipping registration";
                "name" => user_name
            );
            return Ok(user);
        }

        let registrar = self
            .store
            .read(&self.organization, registrar_name)
            .map_err(|err| RegisterUserError::ReadIdentityFailed(registrar_name.to_string(), err))?
            .ok_or_else(|| {
                error!(self.logger, "Registrar is not enrolled"; "registrar" => registrar_name);
                RegisterUserError::RegistrarNotEnrolled(registrar_name.to_string())
            })?;

        let request = RegistrationRequest::new(user_name, &self.organization);
        let secret = match self.ca.register(&request, &registrar) {
            Ok(secret) => secret,
            Err(err) => {
                // Another caller may have registered and stored the user first.
                if let Ok(Some(user)) = self.store.read(&self.organization, user_name) {
                    warn!(
                        self.logger,
                        "User was registered concurrently, keeping the stored credentials";
                        "name" => user_name,
                        "error" => %err
                    );
                    return Ok(user);
                }
                return Err(RegisterUserError::RegistrationFailed(
                    user_name.to_string(),
                    err,
                ));
            }
        };
        let enrollment = self
            .ca
            .enroll(user_name, &secret)
            .map_err(|err| RegisterUserError::EnrollmentFailed(user_name.to_string(), err))?;

        let user = Identity::new(
            user_name,
            &self.organization,
            &self.organization_info.msp_id,
            enrollment,
        );
        let user = self
            .persist(user)
            .map_err(|(identity, source)| RegisterUserError::PersistenceFailed {
                identity: Box::new(identity),
                source,
            })?;
        info!(
            self.logger,
            "User registered and enrolled";
            "name" => user_name,
            "registrar" => registrar_name
        );
        Ok(user)
    }

    /// Look up a previously enrolled identity of this organization.
    pub fn get_identity(&self, name: &str) -> Result<Identity, GetIdentityError> {
        validate_name(name).map_err(GetIdentityError::InvalidName)?;
        match self.store.read(&self.organization, name) {
            Ok(Some(identity)) => Ok(identity),
            Ok(None) => {
                error!(
                    self.logger,
                    "User is not enrolled, register the user first";
                    "name" => name
                );
                Err(GetIdentityError::IdentityNotFound(
                    self.organization.clone(),
                    name.to_string(),
                ))
            }
            Err(err) => Err(GetIdentityError::ReadIdentityFailed(name.to_string(), err)),
        }
    }

    /// Stores a freshly enrolled identity. If another caller stored the same
    /// identity in the meantime, theirs is kept and returned.
    fn persist(&self, identity: Identity) -> Result<Identity, (Identity, WriteIdentityError)> {
        match self.store.insert(&identity) {
            Ok(InsertOutcome::Inserted) => {
                debug!(self.logger, "Saved credentials"; "name" => identity.name());
                Ok(identity)
            }
            Ok(InsertOutcome::AlreadyExists(existing)) => {
                warn!(
                    self.logger,
                    "Identity was stored concurrently, keeping the stored credentials";
                    "name" => identity.name()
                );
                Ok(existing)
            }
            Err(err) => {
                error!(
                    self.logger,
                    "Enrolled identity could not be saved";
                    "name" => identity.name(),
                    "error" => %err
                );
                Err((identity, err))
            }
        }
    }
}
