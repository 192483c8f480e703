//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Domain(e) => match e {
                DomainError::NegativeNumber(_) => crate::exitcode::DATAERR,
                DomainError::UnknownTraversal(_) => crate::exitcode::USAGE,
            },
            CliError::Settings(_) => crate::exitcode::CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(DomainError::NegativeNumber(-5)).exit_code(), 65);
        assert_eq!(
            CliError::from(DomainError::UnknownTraversal("x".into())).exit_code(),
            64
        );
        let settings = SettingsError::Config {
            message: "bad".into(),
        };
        assert_eq!(CliError::from(settings).exit_code(), 78);
        assert_eq!(CliError::InvalidArgs("no values".into()).exit_code(), 64);
    }

    #[test]
    fn test_domain_error_message_passes_through() {
        let err = CliError::from(DomainError::NegativeNumber(-121));
        assert_eq!(err.to_string(), "negative numbers are not supported: -121");
    }
}
