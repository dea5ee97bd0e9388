use crate::{
    config::MotionConfig,
    preference::{MotionPreference, NoPreference},
    Easing, SpringPreset, Timing, Transition,
};

/// Duration of reveal transitions when motion is allowed.
pub const ENTRY_DURATION: f64 = 0.6;
/// Duration used instead of any other when motion is reduced. Never zero so
/// completion callbacks in the host still fire.
pub const REDUCED_DURATION: f64 = 0.01;

/// Builds animation descriptors, collapsing motion when the injected
/// preference provider asks for it.
///
/// The provider is consulted once per descriptor, never cached across calls.
/// Descriptor builders live in the `reveal`, `stagger`, `interaction` and
/// `parallax` modules.
#[derive(Debug, Clone)]
pub struct MotionFactory<P = NoPreference> {
    preference: P,
}

impl MotionFactory<NoPreference> {
    /// Factory for contexts that cannot report the setting.
    pub fn headless() -> Self {
        Self::new(NoPreference)
    }
}

impl MotionFactory<Box<dyn MotionPreference + Send + Sync>> {
    pub fn from_config(config: &MotionConfig) -> Self {
        Self::new(config.preference.into_provider(&config.env_var))
    }
}

impl<P: MotionPreference> MotionFactory<P> {
    pub fn new(preference: P) -> Self {
        Self { preference }
    }

    /// Queries the provider.
    pub fn reduced_motion(&self) -> bool {
        self.preference.prefers_reduced_motion()
    }

    /// Premium-eased reveal transition starting after `delay` seconds.
    pub fn delayed_transition(&self, delay: f64) -> Transition {
        reveal_transition(self.reduced_motion(), ENTRY_DURATION, delay)
    }

    /// Spring transition with a delay. Reduced motion swaps the spring for a
    /// near-instant tween.
    pub fn delayed_spring(&self, delay: f64, preset: SpringPreset) -> Transition {
        if self.reduced_motion() {
            Transition::new(Timing::duration(REDUCED_DURATION)).with_delay(0.0)
        } else {
            Transition::spring(preset.params()).with_delay(delay)
        }
    }
}

impl Default for MotionFactory<NoPreference> {
    fn default() -> Self {
        Self::headless()
    }
}

pub(crate) fn reveal_transition(reduced: bool, duration: f64, delay: f64) -> Transition {
    let (duration, delay) = if reduced {
        (REDUCED_DURATION, 0.0)
    } else {
        (duration, delay)
    };
    Transition::new(Timing::tween(duration, Easing::PREMIUM)).with_delay(delay)
}

/// Picks the moving value or its neutral counterpart.
pub(crate) fn unless_reduced<T>(reduced: bool, moving: T, neutral: T) -> T {
    if reduced {
        neutral
    } else {
        moving
    }
}
