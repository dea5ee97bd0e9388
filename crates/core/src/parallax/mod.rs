use serde::{Deserialize, Serialize};

use crate::{factory::MotionFactory, preference::MotionPreference};

pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const DEFAULT_PARALLAX_DISTANCE: f64 = 10.0;
/// Hard bound on [`MotionFactory::create_parallax_variants`] output, pixels.
pub const PARALLAX_MAX_MOVEMENT: f64 = 10.0;

/// Vertical offset of a parallax layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParallaxOffset {
    pub y: f64,
}

impl<P: MotionPreference> MotionFactory<P> {
    /// `(scroll_y - offset) * speed`, clamped to ±[`PARALLAX_MAX_MOVEMENT`].
    pub fn create_parallax_variants(
        &self,
        scroll_y: f64,
        offset: f64,
        speed: f64,
    ) -> ParallaxOffset {
        if self.reduced_motion() {
            return ParallaxOffset::default();
        }
        let movement =
            ((scroll_y - offset) * speed).clamp(-PARALLAX_MAX_MOVEMENT, PARALLAX_MAX_MOVEMENT);
        ParallaxOffset { y: movement }
    }

    /// CSS `translateY` for a scroll progress value, clamped to ±`max_distance`.
    pub fn parallax_transform(&self, scroll_progress: f64, max_distance: f64) -> String {
        if self.reduced_motion() {
            return "translateY(0)".to_string();
        }
        let distance = clamp_symmetric(scroll_progress * max_distance, max_distance);
        format!("translateY({}px)", css_number(distance))
    }
}

// `f64::clamp` panics when min > max; a negative `max_distance` is not rejected.
fn clamp_symmetric(value: f64, bound: f64) -> f64 {
    value.min(bound).max(-bound)
}

/// Formats like a JS number: no trailing `.0`, no negative zero, and
/// exponent form below `1e-6` or from `1e21` upwards (`1e-7`, `1e+21`).
fn css_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if magnitude < 1e-6 {
        format!("{value:e}")
    } else if magnitude >= 1e21 {
        format!("{value:e}").replacen('e', "e+", 1)
    } else {
        format!("{value}")
    }
}
