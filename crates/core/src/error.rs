use std::io;
use std::path::PathBuf;

/// Errors raised around the emitter: reading host input, resolving
/// configuration and writing the generated file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid generator configuration.
    #[error("invalid generator config: {0}")]
    Config(String),
    /// The output location names an environment variable that is not set.
    #[error("output location refers to env({0}) but it is not set")]
    MissingEnvVar(String),
    /// The output location carries neither a value nor a variable.
    #[error("generator output location is not set")]
    MissingOutput,
    /// Malformed request JSON.
    #[error("invalid generator request: {0}")]
    Json(#[from] serde_json::Error),
    /// The working directory could not be read to anchor relative paths.
    #[error("failed to read the working directory: {0}")]
    WorkingDir(#[source] io::Error),
    /// Filesystem failure.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted ("write", "read", "create").
        action: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}
