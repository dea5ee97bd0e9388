use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::MotionError;

/// Environment variable consulted by [`EnvPreference`] unless configured otherwise.
pub const DEFAULT_ENV_VAR: &str = "PREFERS_REDUCED_MOTION";

/// Source of the user's reduced-motion accessibility setting.
///
/// Implementations are queried on every factory call and must be cheap. A
/// host that cannot report the setting answers `false`.
pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

impl<P: MotionPreference + ?Sized> MotionPreference for Box<P> {
    fn prefers_reduced_motion(&self) -> bool {
        (**self).prefers_reduced_motion()
    }
}

impl<P: MotionPreference + ?Sized> MotionPreference for &P {
    fn prefers_reduced_motion(&self) -> bool {
        (**self).prefers_reduced_motion()
    }
}

/// Provider backed by a closure, see [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnPreference<F>(F);

/// Wraps a closure as a [`MotionPreference`], e.g. a media-query binding.
pub fn from_fn<F>(query: F) -> FnPreference<F>
where
    F: Fn() -> bool,
{
    FnPreference(query)
}

impl<F> MotionPreference for FnPreference<F>
where
    F: Fn() -> bool,
{
    fn prefers_reduced_motion(&self) -> bool {
        (self.0)()
    }
}

impl<F> fmt::Debug for FnPreference<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPreference").finish_non_exhaustive()
    }
}

/// Provider for hosts without any notion of the setting (headless renders, CLIs).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPreference;

impl MotionPreference for NoPreference {
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

/// Provider that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPreference(pub bool);

impl MotionPreference for FixedPreference {
    fn prefers_reduced_motion(&self) -> bool {
        self.0
    }
}

/// Reads the setting from an environment variable each time it is asked.
///
/// Missing or unrecognised values mean "no preference".
#[derive(Debug, Clone)]
pub struct EnvPreference {
    var: String,
}

impl EnvPreference {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvPreference {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_VAR)
    }
}

impl MotionPreference for EnvPreference {
    fn prefers_reduced_motion(&self) -> bool {
        match std::env::var(&self.var) {
            Ok(value) => parse_env_value(&value).unwrap_or_else(|| {
                tracing::debug!(
                    var = %self.var,
                    value = %value,
                    "ignoring unrecognised reduced-motion value"
                );
                false
            }),
            Err(_) => false,
        }
    }
}

fn parse_env_value(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "reduce" | "1" | "true" | "yes" | "on" => Some(true),
        "" | "no-preference" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// How a reduced-motion provider is chosen from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferenceMode {
    /// Ask the environment on every call.
    #[default]
    Auto,
    /// Always reduce motion.
    Reduce,
    /// Never reduce motion.
    NoPreference,
}

impl PreferenceMode {
    /// Builds the provider for this mode. `env_var` is only used by [`PreferenceMode::Auto`].
    pub fn into_provider(self, env_var: &str) -> Box<dyn MotionPreference + Send + Sync> {
        tracing::debug!(mode = %self, env_var, "resolving reduced-motion provider");
        match self {
            PreferenceMode::Auto => Box::new(EnvPreference::new(env_var)),
            PreferenceMode::Reduce => Box::new(FixedPreference(true)),
            PreferenceMode::NoPreference => Box::new(FixedPreference(false)),
        }
    }
}

impl fmt::Display for PreferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PreferenceMode::Auto => "auto",
            PreferenceMode::Reduce => "reduce",
            PreferenceMode::NoPreference => "no-preference",
        };
        f.write_str(name)
    }
}

impl FromStr for PreferenceMode {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "reduce" => Ok(Self::Reduce),
            "no-preference" | "none" => Ok(Self::NoPreference),
            other => Err(MotionError::UnknownPreset {
                kind: "motion preference",
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn headless_provider_never_reduces() {
        assert!(!NoPreference.prefers_reduced_motion());
    }

    #[test]
    fn closures_are_queried_on_every_call() {
        let calls = Cell::new(0);
        let provider = from_fn(|| {
            calls.set(calls.get() + 1);
            calls.get() % 2 == 0
        });

        assert!(!provider.prefers_reduced_motion());
        assert!(provider.prefers_reduced_motion());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn env_values_are_parsed_leniently() {
        assert_eq!(parse_env_value("reduce"), Some(true));
        assert_eq!(parse_env_value(" TRUE "), Some(true));
        assert_eq!(parse_env_value("no-preference"), Some(false));
        assert_eq!(parse_env_value(""), Some(false));
        assert_eq!(parse_env_value("sometimes"), None);
    }

    #[test]
    fn env_provider_degrades_to_false_when_unset() {
        let provider = EnvPreference::new("PORTFOLIO_MOTION_TEST_UNSET_VARIABLE");
        assert!(!provider.prefers_reduced_motion());
    }

    #[test]
    fn env_provider_reads_the_live_value() {
        const VAR: &str = "PORTFOLIO_MOTION_TEST_LIVE_VALUE";
        let provider = EnvPreference::new(VAR);

        std::env::set_var(VAR, "reduce");
        assert!(provider.prefers_reduced_motion());

        std::env::set_var(VAR, "no-preference");
        assert!(!provider.prefers_reduced_motion());

        std::env::set_var(VAR, "sometimes");
        assert!(!provider.prefers_reduced_motion());

        std::env::remove_var(VAR);
        assert!(!provider.prefers_reduced_motion());
    }

    #[test]
    fn modes_resolve_to_fixed_providers() {
        assert!(PreferenceMode::Reduce
            .into_provider(DEFAULT_ENV_VAR)
            .prefers_reduced_motion());
        assert!(!PreferenceMode::NoPreference
            .into_provider(DEFAULT_ENV_VAR)
            .prefers_reduced_motion());
    }

    #[test]
    fn mode_round_trips_through_display() {
        for mode in [
            PreferenceMode::Auto,
            PreferenceMode::Reduce,
            PreferenceMode::NoPreference,
        ] {
            assert_eq!(mode.to_string().parse::<PreferenceMode>().unwrap(), mode);
        }
        assert!("sideways".parse::<PreferenceMode>().is_err());
    }
}
