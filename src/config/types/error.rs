//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Invalid(ConfigDiagnostics),

    #[error("configuration is already initialized for this process")]
    AlreadyInitialized,
}

impl ConfigError {
    /// Validation errors carried by this error (empty for non-validation errors).
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(diag) => diag.errors(),
            _ => &[],
        }
    }

    /// Whether any validation error points at `field`.
    pub fn cites(&self, field: FieldPath) -> bool {
        self.validation_errors().iter().any(|e| e.field == field)
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// Why a config value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("value must not be empty")]
    Empty,

    #[error("invalid URL: {0}")]
    MalformedUrl(String),

    #[error("scheme '{scheme}' not supported, must be {expected}")]
    UnsupportedScheme {
        scheme: String,
        expected: String,
    },

    #[error("URL must have a valid host")]
    MissingHost,

    #[error("duplicate name '{0}'")]
    Duplicate(String),

    #[error("value {value} is out of range, must be {expected}")]
    OutOfRange { value: u64, expected: &'static str },
}

/// A single rejected config value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field path (e.g., "site.website")
    pub field: FieldPath,
    /// Entry index for array sections like `[[socials]]`
    pub index: Option<usize>,
    pub reason: Reason,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ValidationError {
    pub fn new(field: FieldPath, reason: Reason) -> Self {
        Self {
            field,
            index: None,
            reason,
            hint: None,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Display path including the entry index, if any.
    pub fn location(&self) -> String {
        match self.index {
            Some(i) => self.field.indexed(i),
            None => self.field.as_str().to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.location().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.reason)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected during one validation pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ValidationError>,
    /// Non-fatal findings, printed but never failing the load.
    warnings: Vec<(String, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, reason: Reason) {
        self.errors.push(ValidationError::new(field, reason));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(&mut self, field: FieldPath, reason: Reason, hint: impl Into<String>) {
        self.errors
            .push(ValidationError::new(field, reason).with_hint(hint));
    }

    /// Add a fully built error (used for indexed entries).
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning for `location` (collected for batch display).
    pub fn warn(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.warnings.push((location.into(), message.into()));
    }

    /// Print collected warnings.
    pub fn print_warnings(&self) {
        for (location, message) in &self.warnings {
            crate::log!("warning"; "[{}] {}", location, message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(String, String)] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Like [`into_result`](Self::into_result), wrapped as a [`ConfigError`].
    pub fn into_config_result(self) -> Result<(), ConfigError> {
        self.into_result().map_err(ConfigError::Invalid)
    }

    /// Print warnings, then fail if any error was collected.
    ///
    /// Every loader ends its pass here so no warning is dropped.
    pub fn finish(self) -> Result<(), ConfigError> {
        self.print_warnings();
        self.into_config_result()
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
