use crate::error::identity::validate_name::ValidateNameError;
use crate::error::identity::validate_name::ValidateNameError::{
    Empty, IllegalCharacter, Reserved, TooLong,
};

pub const MAX_NAME_LENGTH: usize = 64;

/// Checks that an identity or organization name can be used as a storage key.
///
/// Names end up as file and directory names in the credential store, so only
/// ASCII alphanumerics and `.`, `_`, `@`, `-` are accepted.
pub fn validate_name(name: &str) -> Result<(), ValidateNameError> {
    if name.is_empty() {
        return Err(Empty());
    }
    if name == "." || name == ".." {
        return Err(Reserved(name.to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(TooLong(name.to_string(), MAX_NAME_LENGTH));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '@' | '-')))
    {
        return Err(IllegalCharacter(name.to_string(), c));
    }
    Ok(())
}
