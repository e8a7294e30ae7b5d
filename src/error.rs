//! Error types for scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting values, rendering, or cleaning up
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Template id is not part of the active template set
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template body could not be parsed or rendered
    #[error("Failed to render template {name}: {detail}")]
    Render {
        name: String,
        /// Every message in the tera error chain, outermost first
        detail: String,
        #[source]
        source: tera::Error,
    },

    /// Mapped destination directory does not exist
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// Template directory could not be scanned
    #[error("Cannot read template directory {}: {message}", path.display())]
    TemplateDir { path: PathBuf, message: String },

    /// Description argument names a file that cannot be read
    #[error("Failed to read description file {}: {source}", path.display())]
    DescriptionFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is not valid TOML for our schema
    #[error("Failed to parse config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Interactive input ended before every field was answered
    #[error("Input closed before all fields were answered")]
    InputClosed,

    /// IO error on a specific path
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error on the terminal streams
    #[error("IO error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl ScaffoldError {
    pub(crate) fn render(name: impl Into<String>, source: tera::Error) -> Self {
        let mut detail = source.to_string();
        let mut cause = std::error::Error::source(&source);
        while let Some(err) = cause {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            cause = std::error::Error::source(err);
        }
        Self::Render {
            name: name.into(),
            detail,
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
