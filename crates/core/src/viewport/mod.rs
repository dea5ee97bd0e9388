use serde::{Deserialize, Serialize};

use crate::{MotionError, Result};

/// When a scroll reveal should fire, expressed the way the host's viewport
/// observer takes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Animate only the first time the element enters the viewport.
    pub once: bool,
    /// CSS margin applied to the viewport box before intersection testing.
    pub margin: String,
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub amount: f64,
}

impl ViewportConfig {
    /// Fires once, a little before the element is fully on screen.
    pub fn reveal_once() -> Self {
        Self {
            once: true,
            margin: "0px 0px -100px 0px".to_string(),
            amount: 0.3,
        }
    }

    /// Fires every time the element re-enters the viewport.
    pub fn repeating() -> Self {
        Self {
            once: false,
            margin: "0px 0px -50px 0px".to_string(),
            amount: 0.5,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.amount) {
            return Err(MotionError::config(
                "viewport.amount",
                format!("{} is outside [0, 1]", self.amount),
            ));
        }
        if self.margin.split_whitespace().count() == 0 {
            return Err(MotionError::config("viewport.margin", "must not be empty"));
        }
        Ok(())
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::reveal_once()
    }
}
