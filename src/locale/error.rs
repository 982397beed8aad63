// Error types for locale parsing

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The identifier matched none of the accepted forms. Carries the input as given.
    #[error("Invalid locale format: {0}")]
    InvalidFormat(String),
}

impl LocaleError {
    pub(crate) fn invalid(input: &str) -> Self {
        LocaleError::InvalidFormat(input.to_string())
    }

    /// The rejected input string.
    pub fn input(&self) -> &str {
        match self {
            LocaleError::InvalidFormat(input) => input,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocaleError>;
