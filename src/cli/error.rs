//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),

    /// The input decoded but does not satisfy a tree invariant.
    #[error("{0}")]
    Data(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Data(_) => crate::exitcode::DATAERR,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(e) => match e {
                    ApplicationError::Domain(_) | ApplicationError::InvalidInput { .. } => {
                        crate::exitcode::DATAERR
                    }
                    ApplicationError::InputNotFound(_) => crate::exitcode::NOINPUT,
                    ApplicationError::OutputExists(_) => crate::exitcode::CANTCREAT,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_structural_violation_when_mapping_exit_code_then_dataerr() {
        let err: CliError = ApplicationError::Domain(DomainError::StructuralViolation {
            path: "root-yes".into(),
            found: "array",
        })
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_missing_input_when_mapping_exit_code_then_noinput() {
        let err: CliError = ApplicationError::InputNotFound(PathBuf::from("acorn.json")).into();
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
        assert_eq!(err.to_string(), "clue tree not found: acorn.json");
    }

    #[test]
    fn given_existing_output_when_mapping_exit_code_then_cantcreat() {
        let err: CliError = ApplicationError::OutputExists(PathBuf::from("index.html")).into();
        assert_eq!(err.exit_code(), crate::exitcode::CANTCREAT);
    }

    #[test]
    fn given_invalid_layout_config_when_mapping_exit_code_then_config() {
        let project = tempfile::TempDir::new().unwrap();
        std::fs::write(
            crate::config::local_config_path(project.path()),
            "[layout]\nsmall_chunk = 0\n",
        )
        .unwrap();

        let err: CliError = crate::config::Settings::load(Some(project.path()))
            .unwrap_err()
            .into();

        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }
}
