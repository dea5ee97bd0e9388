//! Scroll reveal descriptors: a `hidden` state the element starts in and a
//! `visible` state it animates to once it enters the viewport.
//!
//! Offset signs are literal: fade-up starts below its resting place
//! (`+distance` on y), fade-down above it, slide-in-left to the left and
//! slide-in-right to the right. Reduced motion keeps the opacity reveal but
//! drops every offset and scale change.

use crate::{
    factory::{reveal_transition, unless_reduced, MotionFactory, ENTRY_DURATION},
    preference::MotionPreference,
    VariantStyle, Variants,
};

pub const DEFAULT_FADE_DISTANCE: f64 = 30.0;
pub const DEFAULT_SLIDE_DISTANCE: f64 = 50.0;
pub const DEFAULT_INITIAL_SCALE: f64 = 0.8;

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl<P: MotionPreference> MotionFactory<P> {
    pub fn fade_in(&self, delay: f64) -> Variants {
        let reduced = self.reduced_motion();
        Variants::reveal(
            VariantStyle::new().with_opacity(0.0),
            visible(reduced, delay),
        )
    }

    pub fn fade_up(&self, delay: f64, distance: f64) -> Variants {
        self.offset_reveal(Axis::Y, distance, delay)
    }

    pub fn fade_down(&self, delay: f64, distance: f64) -> Variants {
        self.offset_reveal(Axis::Y, -distance, delay)
    }

    pub fn slide_in_left(&self, delay: f64, distance: f64) -> Variants {
        self.offset_reveal(Axis::X, -distance, delay)
    }

    pub fn slide_in_right(&self, delay: f64, distance: f64) -> Variants {
        self.offset_reveal(Axis::X, distance, delay)
    }

    /// Grows from `initial_scale` (expected in `(0, 1]`) to full size.
    pub fn scale_in(&self, delay: f64, initial_scale: f64) -> Variants {
        let reduced = self.reduced_motion();
        Variants::reveal(
            VariantStyle::new()
                .with_opacity(0.0)
                .with_scale(unless_reduced(reduced, initial_scale, 1.0)),
            visible(reduced, delay).with_scale(1.0),
        )
    }

    fn offset_reveal(&self, axis: Axis, offset: f64, delay: f64) -> Variants {
        let reduced = self.reduced_motion();
        let offset = unless_reduced(reduced, offset, 0.0);
        let hidden = VariantStyle::new().with_opacity(0.0);
        let visible = visible(reduced, delay);
        match axis {
            Axis::X => Variants::reveal(hidden.with_x(offset), visible.with_x(0.0)),
            Axis::Y => Variants::reveal(hidden.with_y(offset), visible.with_y(0.0)),
        }
    }
}

fn visible(reduced: bool, delay: f64) -> VariantStyle {
    VariantStyle::new()
        .with_opacity(1.0)
        .with_transition(reveal_transition(reduced, ENTRY_DURATION, delay))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        factory::REDUCED_DURATION,
        preference::FixedPreference,
        MotionValue, VariantState,
    };

    fn factory(reduced: bool) -> MotionFactory<FixedPreference> {
        MotionFactory::new(FixedPreference(reduced))
    }

    fn hidden(variants: &Variants) -> &VariantStyle {
        variants.get(VariantState::Hidden).unwrap()
    }

    fn visible_transition(variants: &Variants) -> &crate::Transition {
        variants
            .get(VariantState::Visible)
            .and_then(|style| style.transition.as_ref())
            .unwrap()
    }

    fn all_reveals(factory: &MotionFactory<FixedPreference>) -> Vec<Variants> {
        vec![
            factory.fade_in(0.4),
            factory.fade_up(0.4, DEFAULT_FADE_DISTANCE),
            factory.fade_down(0.4, DEFAULT_FADE_DISTANCE),
            factory.slide_in_left(0.4, DEFAULT_SLIDE_DISTANCE),
            factory.slide_in_right(0.4, DEFAULT_SLIDE_DISTANCE),
            factory.scale_in(0.4, DEFAULT_INITIAL_SCALE),
        ]
    }

    #[test]
    fn fade_up_matches_host_shape() {
        let variants = factory(false).fade_up(0.2, 30.0);
        assert_eq!(
            serde_json::to_value(&variants).unwrap(),
            json!({
                "hidden": { "opacity": 0.0, "y": 30.0 },
                "visible": {
                    "opacity": 1.0,
                    "y": 0.0,
                    "transition": {
                        "type": "tween",
                        "duration": 0.6,
                        "delay": 0.2,
                        "ease": [0.4, 0.0, 0.2, 1.0]
                    }
                }
            })
        );
    }

    #[test]
    fn fade_up_under_reduced_motion_keeps_only_the_fade() {
        let variants = factory(true).fade_up(0.2, 30.0);
        assert_eq!(
            serde_json::to_value(&variants).unwrap(),
            json!({
                "hidden": { "opacity": 0.0, "y": 0.0 },
                "visible": {
                    "opacity": 1.0,
                    "y": 0.0,
                    "transition": {
                        "type": "tween",
                        "duration": 0.01,
                        "delay": 0.0,
                        "ease": [0.4, 0.0, 0.2, 1.0]
                    }
                }
            })
        );
    }

    #[test]
    fn offsets_follow_direction_names() {
        let factory = factory(false);
        let single = |value| Some(MotionValue::Single(value));

        assert_eq!(hidden(&factory.fade_up(0.0, 12.0)).y, single(12.0));
        assert_eq!(hidden(&factory.fade_down(0.0, 12.0)).y, single(-12.0));
        assert_eq!(hidden(&factory.slide_in_left(0.0, 12.0)).x, single(-12.0));
        assert_eq!(hidden(&factory.slide_in_right(0.0, 12.0)).x, single(12.0));
    }

    #[test]
    fn negative_distances_flow_through() {
        let variants = factory(false).fade_up(0.0, -5.0);
        assert_eq!(hidden(&variants).y, Some(MotionValue::Single(-5.0)));
    }

    #[test]
    fn scale_in_uses_initial_scale_only_with_motion() {
        for scale in [0.1, 0.5, 0.8, 1.0] {
            assert_eq!(hidden(&factory(false).scale_in(0.0, scale)).scale, Some(scale));
            assert_eq!(hidden(&factory(true).scale_in(0.0, scale)).scale, Some(1.0));
        }
    }

    #[test]
    fn reduced_motion_neutralises_every_reveal() {
        for variants in all_reveals(&factory(true)) {
            let hidden = hidden(&variants);
            assert_eq!(hidden.opacity, Some(0.0));
            for offset in [&hidden.x, &hidden.y].into_iter().flatten() {
                assert_eq!(offset.as_single(), Some(0.0));
            }
            if let Some(scale) = hidden.scale {
                assert_eq!(scale, 1.0);
            }

            let transition = visible_transition(&variants);
            assert_eq!(transition.delay, Some(0.0));
            assert_eq!(transition.duration(), Some(REDUCED_DURATION));
            assert!(transition.duration().unwrap() > 0.0);
        }
    }

    #[test]
    fn normal_motion_keeps_delay_and_duration() {
        for variants in all_reveals(&factory(false)) {
            let transition = visible_transition(&variants);
            assert_eq!(transition.delay, Some(0.4));
            assert_eq!(transition.duration(), Some(ENTRY_DURATION));
            assert_eq!(variants.len(), 2);
        }
    }
}
