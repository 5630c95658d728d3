//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Wraps application errors and adds process-level I/O failures
/// (working directory lookup, `config init` writes).
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn given_io_failure_when_wrapped_then_keeps_context_and_source() {
        let err = InfraError::io(
            "write .acornle.toml",
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        );

        assert_eq!(err.to_string(), "I/O error: write .acornle.toml");
        assert!(err.source().is_some());
    }

    #[test]
    fn given_application_error_when_converted_then_message_is_unchanged() {
        let app = ApplicationError::OutputExists(PathBuf::from("index_link.html"));
        let expected = app.to_string();

        let err = InfraError::from(app);

        assert_eq!(err.to_string(), expected);
    }
}
