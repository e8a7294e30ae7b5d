//! The value mapping fed to every template

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::fields::FieldValue;

/// Scaffold parameters for one invocation
///
/// Serializes to the flat mapping templates see:
/// `name`, `repository`, `author_name`, `author_email`, `description`,
/// `console_script`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldValues {
    pub name: String,
    pub repository: String,
    pub author_name: String,
    pub author_email: String,
    pub description: String,
    pub console_script: bool,
}

/// Raw `manual` subcommand arguments
#[derive(Debug, Clone, Default)]
pub struct ManualInput {
    pub name: String,
    pub author_name: String,
    pub author_email: String,
    pub repository: String,
    /// Literal text, or the path of a file holding the description
    pub description: String,
    /// Always read the description from this file
    pub description_file: Option<PathBuf>,
    pub no_cli: bool,
}

impl ScaffoldValues {
    /// Build from answers keyed by field name; missing keys fall back to empty / `true`
    pub fn from_answers(mut answers: BTreeMap<&'static str, FieldValue>) -> Self {
        let mut text = |key: &str| {
            answers
                .remove(key)
                .map(FieldValue::into_text)
                .unwrap_or_default()
        };

        let name = text("name");
        let repository = text("repository");
        let author_name = text("author_name");
        let author_email = text("author_email");
        let description = text("description");
        let console_script = answers
            .get("console_script")
            .and_then(FieldValue::as_bool)
            .unwrap_or(true);

        Self {
            name,
            repository,
            author_name,
            author_email,
            description,
            console_script,
        }
    }

    /// Build from `manual` arguments, resolving the description
    pub fn from_manual(input: ManualInput) -> Result<Self> {
        let description = match &input.description_file {
            Some(path) => read_description(path)?,
            None => resolve_description(&input.description)?,
        };

        Ok(Self {
            name: input.name,
            repository: input.repository,
            author_name: input.author_name,
            author_email: input.author_email,
            description,
            console_script: !input.no_cli,
        })
    }
}

/// Replace `arg` with the file's content when it names an existing file
pub fn resolve_description(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if !arg.is_empty() && path.is_file() {
        tracing::debug!(path = %path.display(), "reading description from file");
        read_description(path)
    } else {
        Ok(arg.to_string())
    }
}

fn read_description(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ScaffoldError::DescriptionFile {
        path: path.to_path_buf(),
        source,
    })
}
