use std::{io, path::PathBuf};

use crate::error::EvaluationError;

#[derive(Debug)]
/// Represents all errors a session command can report to the user.
pub enum SessionError {
    /// Evaluating an expression failed.
    Evaluation(EvaluationError),
    /// A command was written in a form it does not accept.
    Usage {
        /// How the command is meant to be used.
        message: String,
    },
    /// `set` was asked to assign to something that cannot be a variable.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// Writing the history file failed.
    Export {
        /// The file that could not be written.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

impl From<EvaluationError> for SessionError {
    fn from(e: EvaluationError) -> Self {
        Self::Evaluation(e)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::Usage { message } => write!(f, "Error: Usage: {message}"),
            Self::InvalidName { name } => {
                write!(f, "Error: '{name}' is not a valid variable name.")
            },
            Self::Export { path, source } => write!(f,
                                                    "Error: Failed to write history to '{}': {source}.",
                                                    path.display()),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Evaluation(e) => Some(e),
            Self::Export { source, .. } => Some(source),
            Self::Usage { .. } | Self::InvalidName { .. } => None,
        }
    }
}
