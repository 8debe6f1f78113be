use thiserror::Error;

/// Errors raised while building or resolving a guide configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// An option name that the guide type does not have.
    #[error("{kind} does not understand attribute '{name}'")]
    UnknownAttribute { kind: String, name: String },

    /// A recognized option whose value has the wrong shape.
    #[error("invalid value for '{name}': expected {expected}, got {got}")]
    InvalidValue {
        name: String,
        expected: String,
        got: String,
    },

    /// The title position is unset (or unusable) after resolution.
    #[error("title position \"{0}\" is invalid")]
    InvalidTitlePosition(String),

    /// The label position is unset or not orthogonal to the direction.
    #[error("label position {0} is invalid")]
    InvalidLabelPosition(String),

    /// A guide order outside `[0, 99]`.
    #[error("guide order {0} is outside the range [0, 99]")]
    OrderOutOfRange(i64),
}

impl ConfigurationError {
    pub(crate) fn invalid_value(
        name: &str,
        expected: impl Into<String>,
        got: &serde_json::Value,
    ) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            expected: expected.into(),
            got: got.to_string(),
        }
    }
}

/// Shorthand for results carrying a [`ConfigurationError`].
pub type Result<T, E = ConfigurationError> = std::result::Result<T, E>;
