//! Spring and easing presets shared by every descriptor.
//!
//! Values are serialised in the shape the motion host expects: springs as
//! `{stiffness, damping, mass}` and easings either as a four element cubic
//! bezier array or a camelCase keyword.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::MotionError;

/// Physical parameters of a spring driven interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParameters {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringParameters {
    pub const GENTLE: Self = Self {
        stiffness: 80.0,
        damping: 20.0,
        mass: 0.5,
    };

    pub const SMOOTH: Self = Self {
        stiffness: 100.0,
        damping: 15.0,
        mass: 0.8,
    };

    pub const SNAPPY: Self = Self {
        stiffness: 200.0,
        damping: 20.0,
        mass: 1.0,
    };
}

/// Named spring presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpringPreset {
    Gentle,
    #[default]
    Smooth,
    Snappy,
}

impl SpringPreset {
    pub const ALL: [SpringPreset; 3] = [Self::Gentle, Self::Smooth, Self::Snappy];

    pub fn params(self) -> SpringParameters {
        match self {
            SpringPreset::Gentle => SpringParameters::GENTLE,
            SpringPreset::Smooth => SpringParameters::SMOOTH,
            SpringPreset::Snappy => SpringParameters::SNAPPY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpringPreset::Gentle => "gentle",
            SpringPreset::Smooth => "smooth",
            SpringPreset::Snappy => "snappy",
        }
    }
}

impl fmt::Display for SpringPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpringPreset {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MotionError::UnknownPreset {
                kind: "spring",
                name: s.to_string(),
            })
    }
}

/// Timing keywords understood by the motion host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingKeyword {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Timing curve attached to a tween transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Easing {
    /// Control points `(x1, y1, x2, y2)` of a CSS style cubic bezier.
    CubicBezier([f64; 4]),
    Keyword(EasingKeyword),
}

impl Easing {
    pub const EASE_OUT: Self = Self::CubicBezier([0.16, 1.0, 0.3, 1.0]);
    pub const EASE_IN_OUT: Self = Self::CubicBezier([0.87, 0.0, 0.13, 1.0]);
    /// Soft deceleration used by every scroll reveal.
    pub const PREMIUM: Self = Self::CubicBezier([0.4, 0.0, 0.2, 1.0]);
}

impl From<EasingKeyword> for Easing {
    fn from(keyword: EasingKeyword) -> Self {
        Self::Keyword(keyword)
    }
}
