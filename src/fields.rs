//! Field specs and validation
//!
//! Every scaffold field is one of {Required, Optional} × {Text, Boolean}.
//! [`FieldSpec::parse`] turns one raw input line into a [`FieldValue`] or a
//! [`FieldError`]; the prompt loop just retries on errors.

use thiserror::Error;

use crate::config::DefaultsSection;

/// Tokens accepted as `true` (case-insensitive)
pub const TRUTHY: &[&str] = &["yes", "y", "true", "1"];
/// Tokens accepted as `false` (case-insensitive)
pub const FALSY: &[&str] = &["no", "n", "false", "0"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Boolean,
}

/// Which ends of the input are trimmed before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strip {
    #[default]
    All,
    Left,
    Right,
    None,
}

impl Strip {
    pub fn apply<'a>(&self, raw: &'a str) -> &'a str {
        match self {
            Strip::All => raw.trim(),
            Strip::Left => raw.trim_start(),
            Strip::Right => raw.trim_end(),
            Strip::None => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Bool(b) => b.to_string(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field required")]
    Required,
    #[error("must be a boolean response")]
    NotBoolean(String),
}

/// Parse a yes/no style token
pub fn parse_bool(token: &str) -> Result<bool, FieldError> {
    let lowered = token.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(FieldError::NotBoolean(token.to_string()))
    }
}

/// One prompted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the value mapping
    pub key: &'static str,
    /// Text shown to the user
    pub label: String,
    pub presence: Presence,
    pub ty: FieldType,
    /// Substituted when the stripped input is empty
    pub default: String,
    pub strip: Strip,
}

impl FieldSpec {
    pub fn text(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            presence: Presence::Required,
            ty: FieldType::Text,
            default: String::new(),
            strip: Strip::All,
        }
    }

    pub fn boolean(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            ty: FieldType::Boolean,
            ..Self::text(key, label)
        }
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_strip(mut self, strip: Strip) -> Self {
        self.strip = strip;
        self
    }

    /// Prompt terminator: `"? "` for yes/no questions, `": "` otherwise
    pub fn prompt_end(&self) -> &'static str {
        match self.ty {
            FieldType::Boolean => "? ",
            FieldType::Text => ": ",
        }
    }

    /// Full prompt line, showing a text default in brackets when one exists
    pub fn prompt_text(&self) -> String {
        if self.ty == FieldType::Text && !self.default.is_empty() {
            format!("{} [{}]{}", self.label, self.default, self.prompt_end())
        } else {
            format!("{}{}", self.label, self.prompt_end())
        }
    }

    /// Validate one raw input line
    pub fn parse(&self, raw: &str) -> Result<FieldValue, FieldError> {
        let stripped = self.strip.apply(raw);
        let value = if stripped.is_empty() {
            self.default.as_str()
        } else {
            stripped
        };

        if value.is_empty() {
            return match (self.presence, self.ty) {
                (Presence::Required, _) => Err(FieldError::Required),
                (Presence::Optional, FieldType::Text) => Ok(FieldValue::Text(String::new())),
                (Presence::Optional, FieldType::Boolean) => Ok(FieldValue::Bool(false)),
            };
        }

        match self.ty {
            FieldType::Text => Ok(FieldValue::Text(value.to_string())),
            FieldType::Boolean => parse_bool(value).map(FieldValue::Bool),
        }
    }
}

/// Fields asked by interactive mode, in prompt order
pub fn interactive_fields(defaults: &DefaultsSection) -> Vec<FieldSpec> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();

    vec![
        FieldSpec::text("name", "Package name"),
        FieldSpec::text("repository", "Repository URL")
            .optional()
            .with_default(opt(&defaults.repository)),
        FieldSpec::text("author_name", "Author name").with_default(opt(&defaults.author_name)),
        FieldSpec::text("author_email", "Author email").with_default(opt(&defaults.author_email)),
        FieldSpec::text("description", "Description").optional(),
        FieldSpec::boolean(
            "console_script",
            format!(
                "Is this a console script [{}]",
                if defaults.console_script { "yes" } else { "no" }
            ),
        )
        .with_default(if defaults.console_script { "yes" } else { "no" }),
    ]
}
