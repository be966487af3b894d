use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateNameError {
    #[error("Name is empty.")]
    Empty(),

    #[error("Name '{0}' is longer than {1} characters.")]
    TooLong(String, usize),

    #[error("Name '{0}' contains the character {1:?}, which is not allowed.")]
    IllegalCharacter(String, char),

    #[error("Name '{0}' is reserved.")]
    Reserved(String),
}
