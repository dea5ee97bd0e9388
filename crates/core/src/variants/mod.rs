//! Declarative animation descriptors handed to the motion host.
//!
//! A [`Variants`] value maps a small closed set of state names to the visual
//! properties an element should have in that state, each optionally carrying
//! the [`Transition`] used when animating into it. Nothing here interpolates;
//! the host does.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Easing, MotionError, SpringParameters};

/// Names of the states a descriptor can define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantState {
    Hidden,
    Visible,
    Initial,
    Hover,
    Tap,
    Animate,
}

impl VariantState {
    pub const ALL: [VariantState; 6] = [
        Self::Hidden,
        Self::Visible,
        Self::Initial,
        Self::Hover,
        Self::Tap,
        Self::Animate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VariantState::Hidden => "hidden",
            VariantState::Visible => "visible",
            VariantState::Initial => "initial",
            VariantState::Hover => "hover",
            VariantState::Tap => "tap",
            VariantState::Animate => "animate",
        }
    }
}

impl fmt::Display for VariantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantState {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MotionError::UnknownPreset {
                kind: "variant state",
                name: s.to_string(),
            })
    }
}

/// A property value: either a target or a keyframe path the host loops through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MotionValue {
    Single(f64),
    Keyframes(Vec<f64>),
}

impl MotionValue {
    pub fn as_single(&self) -> Option<f64> {
        match self {
            MotionValue::Single(value) => Some(*value),
            MotionValue::Keyframes(_) => None,
        }
    }

    pub fn keyframes(&self) -> Option<&[f64]> {
        match self {
            MotionValue::Single(_) => None,
            MotionValue::Keyframes(frames) => Some(frames),
        }
    }
}

impl From<f64> for MotionValue {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<f64>> for MotionValue {
    fn from(frames: Vec<f64>) -> Self {
        Self::Keyframes(frames)
    }
}

/// How the host should interpolate towards a state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Timing {
    /// Fixed duration in seconds along an optional curve.
    Tween {
        duration: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ease: Option<Easing>,
    },
    Spring(SpringParameters),
}

impl Timing {
    pub fn tween(duration: f64, ease: Easing) -> Self {
        Self::Tween {
            duration,
            ease: Some(ease),
        }
    }

    pub fn duration(duration: f64) -> Self {
        Self::Tween {
            duration,
            ease: None,
        }
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        match self {
            Timing::Tween { duration, .. } => Some(*duration),
            Timing::Spring(_) => None,
        }
    }
}

/// Looping of a transition. Only endless loops are produced; JSON has no
/// `Infinity`, so hosts receive the `"infinite"` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    Infinite,
}

/// Transition attached to a state. All times are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[serde(flatten)]
    pub timing: Option<Timing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,
    /// Gap between the start of consecutive children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    /// Wait before the first child starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<f64>,
}

impl Transition {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing: Some(timing),
            ..Self::default()
        }
    }

    pub fn spring(params: SpringParameters) -> Self {
        Self::new(Timing::Spring(params))
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = Some(repeat);
        self
    }

    pub fn with_stagger(mut self, stagger_children: f64, delay_children: f64) -> Self {
        self.stagger_children = Some(stagger_children);
        self.delay_children = Some(delay_children);
        self
    }

    pub fn duration(&self) -> Option<f64> {
        self.timing.as_ref().and_then(Timing::duration_seconds)
    }
}

/// Visual properties of one state. Unset properties are left to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<MotionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<MotionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<MotionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_y: Option<f64>,
    /// CSS filter expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// CSS box-shadow expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

impl VariantStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_x(mut self, x: impl Into<MotionValue>) -> Self {
        self.x = Some(x.into());
        self
    }

    pub fn with_y(mut self, y: impl Into<MotionValue>) -> Self {
        self.y = Some(y.into());
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_rotate(mut self, rotate: impl Into<MotionValue>) -> Self {
        self.rotate = Some(rotate.into());
        self
    }

    pub fn with_rotate_xy(mut self, rotate_x: f64, rotate_y: f64) -> Self {
        self.rotate_x = Some(rotate_x);
        self.rotate_y = Some(rotate_y);
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_box_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.box_shadow = Some(shadow.into());
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Overlays every property set on `other`, keeping ours where `other` is unset.
    pub fn merged_with(&self, other: &VariantStyle) -> VariantStyle {
        VariantStyle {
            opacity: other.opacity.or(self.opacity),
            x: other.x.clone().or_else(|| self.x.clone()),
            y: other.y.clone().or_else(|| self.y.clone()),
            scale: other.scale.or(self.scale),
            rotate: other.rotate.clone().or_else(|| self.rotate.clone()),
            rotate_x: other.rotate_x.or(self.rotate_x),
            rotate_y: other.rotate_y.or(self.rotate_y),
            filter: other.filter.clone().or_else(|| self.filter.clone()),
            box_shadow: other.box_shadow.clone().or_else(|| self.box_shadow.clone()),
            transition: other.transition.clone().or_else(|| self.transition.clone()),
        }
    }
}

/// Mapping from state name to the style of that state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variants {
    states: BTreeMap<VariantState, VariantStyle>,
}

/// Container descriptor whose visible transition carries stagger timing.
pub type StaggerDescriptor = Variants;

impl Variants {
    pub fn new() -> Self {
        Self::default()
    }

    /// The common `hidden` / `visible` pair produced by reveal factories.
    pub fn reveal(hidden: VariantStyle, visible: VariantStyle) -> Self {
        Self::new()
            .with_state(VariantState::Hidden, hidden)
            .with_state(VariantState::Visible, visible)
    }

    pub fn with_state(mut self, state: VariantState, style: VariantStyle) -> Self {
        self.states.insert(state, style);
        self
    }

    pub fn get(&self, state: VariantState) -> Option<&VariantStyle> {
        self.states.get(&state)
    }

    pub fn contains(&self, state: VariantState) -> bool {
        self.states.contains_key(&state)
    }

    pub fn states(&self) -> impl Iterator<Item = VariantState> + '_ {
        self.states.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariantState, &VariantStyle)> {
        self.states.iter().map(|(state, style)| (*state, style))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_properties_are_omitted() {
        let style = VariantStyle::new().with_opacity(0.0).with_y(30.0);
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            json!({ "opacity": 0.0, "y": 30.0 })
        );
    }

    #[test]
    fn tween_transition_flattens_timing() {
        let transition = Transition::new(Timing::tween(0.6, Easing::PREMIUM)).with_delay(0.2);
        assert_eq!(
            serde_json::to_value(&transition).unwrap(),
            json!({
                "type": "tween",
                "duration": 0.6,
                "ease": [0.4, 0.0, 0.2, 1.0],
                "delay": 0.2
            })
        );
    }

    #[test]
    fn spring_transition_flattens_parameters() {
        let transition = Transition::spring(SpringParameters::SNAPPY);
        assert_eq!(
            serde_json::to_value(&transition).unwrap(),
            json!({ "type": "spring", "stiffness": 200.0, "damping": 20.0, "mass": 1.0 })
        );
        assert_eq!(transition.duration(), None);
    }

    #[test]
    fn endless_repeat_uses_infinite_marker() {
        let transition = Transition::new(Timing::duration(6.0)).with_repeat(Repeat::Infinite);
        let value = serde_json::to_value(&transition).unwrap();
        assert_eq!(value["repeat"], json!("infinite"));

        let parsed: Transition = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.repeat, Some(Repeat::Infinite));
        assert!(serde_json::from_value::<Repeat>(json!({ "count": 3 })).is_err());
    }

    #[test]
    fn stagger_fields_use_host_names() {
        let transition = Transition::default().with_stagger(0.1, 0.2);
        assert_eq!(
            serde_json::to_value(&transition).unwrap(),
            json!({ "staggerChildren": 0.1, "delayChildren": 0.2 })
        );
    }

    #[test]
    fn keyframes_serialise_as_arrays() {
        let style = VariantStyle::new().with_y(vec![0.0, -10.0, 0.0]);
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            json!({ "y": [0.0, -10.0, 0.0] })
        );
        assert_eq!(style.y.unwrap().keyframes(), Some(&[0.0, -10.0, 0.0][..]));
    }

    #[test]
    fn variants_are_keyed_by_state_name() {
        let variants = Variants::reveal(
            VariantStyle::new().with_opacity(0.0),
            VariantStyle::new().with_opacity(1.0),
        );
        assert_eq!(
            serde_json::to_value(&variants).unwrap(),
            json!({ "hidden": { "opacity": 0.0 }, "visible": { "opacity": 1.0 } })
        );
        assert_eq!(
            variants.states().collect::<Vec<_>>(),
            vec![VariantState::Hidden, VariantState::Visible]
        );
        assert!(variants.contains(VariantState::Visible));
        assert!(!variants.contains(VariantState::Hover));
    }

    #[test]
    fn merge_prefers_overlay_values() {
        let base = VariantStyle::new().with_opacity(0.0).with_y(20.0);
        let overlay = VariantStyle::new().with_opacity(1.0);
        let merged = base.merged_with(&overlay);
        assert_eq!(merged.opacity, Some(1.0));
        assert_eq!(merged.y, Some(MotionValue::Single(20.0)));
    }

    #[test]
    fn state_names_parse() {
        assert_eq!("Hover".parse::<VariantState>().unwrap(), VariantState::Hover);
        assert!("pressed".parse::<VariantState>().is_err());
    }
}
