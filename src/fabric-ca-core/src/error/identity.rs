pub mod enroll_admin;
pub mod get_identity;
pub mod new_bootstrapper;
pub mod register_user;
pub mod validate_name;
