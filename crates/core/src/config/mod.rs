use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    preference::{PreferenceMode, DEFAULT_ENV_VAR},
    viewport::ViewportConfig,
    Result,
};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub motion: MotionConfig,
    pub viewport: ViewportConfig,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "loading motion configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        self.motion.validate()?;
        self.viewport.validate()
    }
}

/// How the reduced-motion preference is obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub preference: PreferenceMode,
    /// Variable read when `preference` is `auto`.
    pub env_var: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            preference: PreferenceMode::Auto,
            env_var: DEFAULT_ENV_VAR.to_string(),
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.env_var.trim().is_empty() {
            return Err(crate::MotionError::config("motion.env_var", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.motion.env_var, DEFAULT_ENV_VAR);
        assert_eq!(config.viewport, ViewportConfig::reveal_once());
    }

    #[test]
    fn partial_sections_are_filled_in() {
        let config = AppConfig::from_json_str(
            r#"{
                "motion": { "preference": "reduce" },
                "viewport": { "once": false, "margin": "0px", "amount": 0.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.motion.preference, PreferenceMode::Reduce);
        assert_eq!(config.motion.env_var, DEFAULT_ENV_VAR);
        assert!(!config.viewport.once);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_json_str(
            r#"{ "viewport": { "once": true, "margin": "0px", "amount": 2.0 } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("viewport.amount"));

        assert!(AppConfig::from_json_str(r#"{ "motion": { "env_var": "" } }"#).is_err());
        assert!(AppConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load("/definitely/not/here/motion.json").unwrap_err();
        assert!(matches!(err, crate::MotionError::Io(_)));
    }
}
