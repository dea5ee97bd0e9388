/// Result alias that carries the custom [`MotionError`] type.
pub type Result<T> = std::result::Result<T, MotionError>;

/// Common error type for the core crate.
///
/// The descriptor factories themselves are total and never return this type;
/// it only surfaces at the edges where configuration and preset names come
/// from the outside world.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    /// Free-form message for failures that do not warrant their own variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Configuration or descriptor JSON that failed to parse or serialise.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// A configuration value outside its documented range.
    #[error("invalid configuration value for `{field}`: {reason}")]
    Config { field: String, reason: String },
    /// A preset name that does not match any known preset.
    #[error("unknown {kind} preset `{name}`")]
    UnknownPreset { kind: &'static str, name: String },
}

impl MotionError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<&str> for MotionError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for MotionError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
