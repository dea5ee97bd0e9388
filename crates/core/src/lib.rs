//! Core library for the portfolio site's motion layer.
//!
//! The crate turns a handful of numeric parameters into declarative animation
//! descriptors (scroll reveals, stagger containers, interaction responses,
//! parallax offsets) that a motion host interpolates and paints. Every
//! descriptor honours the user's reduced-motion preference, which is read
//! through an injectable [`MotionPreference`] provider rather than a global.

pub mod config;
pub mod easing;
pub mod error;
pub mod factory;
pub mod host;
pub mod interaction;
pub mod parallax;
pub mod preference;
pub mod reveal;
pub mod stagger;
pub mod variants;
pub mod viewport;

pub use config::{AppConfig, MotionConfig};
pub use easing::{Easing, EasingKeyword, SpringParameters, SpringPreset};
pub use error::{MotionError, Result};
pub use factory::{MotionFactory, ENTRY_DURATION, REDUCED_DURATION};
pub use host::{AnimationHost, SnapshotHost};
pub use parallax::ParallaxOffset;
pub use preference::{
    EnvPreference, FixedPreference, MotionPreference, NoPreference, PreferenceMode,
};
pub use stagger::stagger_schedule;
pub use variants::{
    MotionValue, Repeat, StaggerDescriptor, Timing, Transition, VariantState, VariantStyle,
    Variants,
};
pub use viewport::ViewportConfig;
