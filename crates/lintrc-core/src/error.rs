//! Error types for configuration loading and resolution

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lintrc operations
///
/// Resolution never produces a partial result: every failure below reaches
/// the caller of [`crate::Resolver::resolve`] unchanged.
#[derive(Debug, Error)]
pub enum LintrcError {
    /// An `extends` reference names a preset that is not registered
    #[error("Unknown preset '{name}' referenced by '{referrer}'")]
    UnknownPreset { name: String, referrer: String },

    /// A configured rule is not provided by the base catalog or a loaded plugin
    #[error("Unknown rule '{rule}' configured in '{source_label}'")]
    UnknownRule { rule: String, source_label: String },

    /// A rule's configured options do not satisfy its option schema
    #[error("Invalid options for rule '{rule}': {message}")]
    InvalidOptions { rule: String, message: String },

    /// An `extends` chain references itself
    #[error("Cyclic extends detected: {}", format_chain(.chain))]
    CyclicExtends { chain: Vec<String> },

    /// Two loaded providers declare the same rule name
    #[error("Rule '{rule}' is provided by both {first} and {second}")]
    DuplicateRule {
        rule: String,
        first: String,
        second: String,
    },

    /// A plugin listed in `plugins` is not registered
    #[error("Unknown plugin '{name}' listed in '{source_label}'")]
    UnknownPlugin { name: String, source_label: String },

    /// An environment is not known to the base set or a loaded plugin
    #[error("Unknown environment '{name}' listed in '{source_label}'")]
    UnknownEnvironment { name: String, source_label: String },

    /// `resolve` was called without any fragment
    #[error("Cannot resolve an empty configuration chain")]
    EmptyChain,

    /// Two presets registered under the same name
    #[error("Preset '{name}' is already registered")]
    DuplicatePreset { name: String },

    /// Two plugins registered under the same name
    #[error("Plugin '{name}' is already registered")]
    DuplicatePlugin { name: String },

    /// Two environments registered under the same name
    #[error("Environment '{name}' is already registered")]
    DuplicateEnvironment { name: String },

    /// A plugin requires a newer lintrc than the one running
    #[error("Plugin '{name}' requires lintrc >= {required}, running {running}")]
    IncompatiblePlugin {
        name: String,
        required: String,
        running: String,
    },

    /// Configuration parsing or format errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_chain(chain: &[String]) -> String {
    chain.join(" → ")
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reference to a preset, plugin or environment that does not exist
    Reference,
    /// Rule catalog problems (unknown or duplicate rules)
    Rule,
    /// Option schema mismatch
    Options,
    /// Cyclic extends chain
    Cycle,
    /// Registry construction problems
    Registry,
    /// Malformed input
    Config,
    Io,
}

impl LintrcError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LintrcError::UnknownPreset { .. }
            | LintrcError::UnknownPlugin { .. }
            | LintrcError::UnknownEnvironment { .. } => ErrorKind::Reference,
            LintrcError::UnknownRule { .. } | LintrcError::DuplicateRule { .. } => ErrorKind::Rule,
            LintrcError::InvalidOptions { .. } => ErrorKind::Options,
            LintrcError::CyclicExtends { .. } => ErrorKind::Cycle,
            LintrcError::DuplicatePreset { .. }
            | LintrcError::DuplicatePlugin { .. }
            | LintrcError::DuplicateEnvironment { .. }
            | LintrcError::IncompatiblePlugin { .. } => ErrorKind::Registry,
            LintrcError::EmptyChain | LintrcError::ConfigError { .. } => ErrorKind::Config,
            LintrcError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Create an unknown preset error
    pub fn unknown_preset(name: impl Into<String>, referrer: impl Into<String>) -> Self {
        Self::UnknownPreset {
            name: name.into(),
            referrer: referrer.into(),
        }
    }

    /// Create an unknown rule error
    pub fn unknown_rule(rule: impl Into<String>, source_label: impl Into<String>) -> Self {
        Self::UnknownRule {
            rule: rule.into(),
            source_label: source_label.into(),
        }
    }

    /// Create an invalid options error
    pub fn invalid_options(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Create a cyclic extends error from the chain that closed the loop
    pub fn cyclic_extends(chain: Vec<String>) -> Self {
        Self::CyclicExtends { chain }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}
