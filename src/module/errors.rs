/// Errors from the module domain layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving and loading a module.
///
/// Every variant surfaces to the user through the same two-line failure
/// report, so the messages here are the whole user-visible story.
#[derive(Debug, Error)]
pub enum InspectError {
    /// No module identifier was supplied on the command line.
    #[error("no module identifier was provided")]
    MissingIdentifier,

    /// The identifier matched neither a built-in nor a file in the search path.
    #[error("module '{identifier}' was not found{}", suggestion.as_deref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
    NotFound {
        /// The identifier that failed to resolve.
        identifier: String,
        /// Closest known module name, if any scored well enough.
        suggestion: Option<String>,
    },

    /// The file exists but its extension names no supported format.
    #[error("unsupported module format '.{extension}' for {}", path.display())]
    UnsupportedFormat {
        /// Path of the rejected file.
        path: PathBuf,
        /// The unrecognized extension (without the leading dot).
        extension: String,
    },

    /// The file exists and has a supported format but failed to parse.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parser message, already flattened to one line.
        reason: String,
    },

    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl InspectError {
    /// Return the CLI exit code for this error.
    ///
    /// Every load failure exits 1: the failure report shape is identical
    /// across variants, so the exit code is too.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingIdentifier
            | Self::NotFound { .. }
            | Self::UnsupportedFormat { .. }
            | Self::Parse { .. }
            | Self::Io { .. } => 1,
        }
    }
}
