//! Responses to pointer interaction plus the idle floating loop.
//!
//! These are mobile-safe: rotations and lifts stay small. Under reduced
//! motion every delta collapses to its neutral value. The lift shadow and the
//! glow filter are the only visual feedback kept.

use crate::{
    factory::{unless_reduced, MotionFactory},
    preference::MotionPreference,
    EasingKeyword, Repeat, SpringParameters, Timing, Transition, VariantState, VariantStyle,
    Variants,
};

pub const RESTING_SHADOW: &str = "0 4px 6px -1px rgb(0 0 0 / 0.1)";
pub const RAISED_SHADOW: &str = "0 20px 25px -5px rgb(0 0 0 / 0.2)";

pub const GLOW_NONE: &str = "brightness(1) drop-shadow(0 0 0px rgba(255, 107, 107, 0))";
pub const GLOW_HOVER: &str = "brightness(1.1) drop-shadow(0 0 20px rgba(255, 107, 107, 0.4))";
pub const GLOW_TAP: &str = "brightness(1.2) drop-shadow(0 0 30px rgba(255, 107, 107, 0.6))";

/// Full cycle of the floating loop, seconds.
pub const FLOAT_PERIOD: f64 = 6.0;

impl<P: MotionPreference> MotionFactory<P> {
    /// Slight 3D tilt while pressed.
    pub fn tilt_3d(&self) -> Variants {
        let tilt = unless_reduced(self.reduced_motion(), 5.0, 0.0);
        Variants::new()
            .with_state(
                VariantState::Initial,
                VariantStyle::new().with_rotate_xy(0.0, 0.0),
            )
            .with_state(
                VariantState::Tap,
                VariantStyle::new()
                    .with_rotate_xy(tilt, tilt)
                    .with_transition(Transition::spring(SpringParameters::GENTLE)),
            )
    }

    /// Card lift: raised on hover, half raised and slightly squeezed on tap.
    pub fn lift(&self) -> Variants {
        let reduced = self.reduced_motion();
        Variants::new()
            .with_state(
                VariantState::Initial,
                VariantStyle::new()
                    .with_y(0.0)
                    .with_scale(1.0)
                    .with_box_shadow(RESTING_SHADOW),
            )
            .with_state(
                VariantState::Hover,
                VariantStyle::new()
                    .with_y(unless_reduced(reduced, -8.0, 0.0))
                    .with_scale(unless_reduced(reduced, 1.02, 1.0))
                    .with_box_shadow(unless_reduced(reduced, RAISED_SHADOW, RESTING_SHADOW))
                    .with_transition(Transition::spring(SpringParameters::SMOOTH)),
            )
            .with_state(
                VariantState::Tap,
                VariantStyle::new()
                    .with_y(unless_reduced(reduced, -4.0, 0.0))
                    .with_scale(unless_reduced(reduced, 0.98, 1.0))
                    .with_transition(Transition::spring(SpringParameters::SNAPPY)),
            )
    }

    pub fn glow(&self) -> Variants {
        let reduced = self.reduced_motion();
        Variants::new()
            .with_state(VariantState::Initial, VariantStyle::new().with_filter(GLOW_NONE))
            .with_state(
                VariantState::Hover,
                VariantStyle::new()
                    .with_filter(unless_reduced(reduced, GLOW_HOVER, GLOW_NONE))
                    .with_transition(Transition::new(Timing::duration(0.3))),
            )
            .with_state(
                VariantState::Tap,
                VariantStyle::new()
                    .with_filter(unless_reduced(reduced, GLOW_TAP, GLOW_NONE))
                    .with_transition(Transition::new(Timing::duration(0.1))),
            )
    }

    /// Style applied while a button is pressed.
    pub fn button_tap(&self) -> VariantStyle {
        VariantStyle::new()
            .with_scale(unless_reduced(self.reduced_motion(), 0.95, 1.0))
            .with_transition(Transition::new(Timing::duration(0.1)))
    }

    /// Style applied while a button is hovered.
    pub fn button_hover(&self) -> VariantStyle {
        VariantStyle::new()
            .with_scale(unless_reduced(self.reduced_motion(), 1.05, 1.0))
            .with_transition(Transition::spring(SpringParameters::GENTLE))
    }

    /// Endless drift for hero artwork. Static and non-looping when motion is reduced.
    pub fn floating(&self) -> Variants {
        let animate = if self.reduced_motion() {
            VariantStyle::new().with_y(0.0).with_x(0.0).with_rotate(0.0)
        } else {
            VariantStyle::new()
                .with_y(vec![0.0, -10.0, 0.0])
                .with_x(vec![0.0, 5.0, 0.0])
                .with_rotate(vec![0.0, 2.0, 0.0])
                .with_transition(
                    Transition::new(Timing::tween(FLOAT_PERIOD, EasingKeyword::EaseInOut.into()))
                        .with_repeat(Repeat::Infinite),
                )
        };
        Variants::new().with_state(VariantState::Animate, animate)
    }
}
