//! Error types for tasktriage

/// Result type alias using tasktriage's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tasktriage operations
///
/// Configuration variants are raised while a rule table is loaded and
/// compiled. They are fatal: a classifier is never built from a table that
/// failed validation. `Precondition` is the only error the classification
/// path itself can return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed rule table or configuration file
    #[error("configuration error: {0}")]
    Config(String),

    /// Two categories share the same id
    #[error("configuration error: duplicate category id '{0}'")]
    DuplicateCategory(String),

    /// A category pattern failed to compile
    #[error("configuration error: invalid pattern {pattern:?} in category '{category}': {reason}")]
    InvalidPattern {
        category: String,
        pattern: String,
        reason: String,
    },

    /// Caller passed input the classifier refuses to score
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Filesystem errors while reading configuration
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new precondition error
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(
        category: impl Into<String>,
        pattern: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidPattern {
            category: category.into(),
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error was raised while loading configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::DuplicateCategory(_)
                | Self::InvalidPattern { .. }
                | Self::Io(_)
                | Self::Yaml(_)
        )
    }

    /// Whether this error is a rejected classification precondition
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}
