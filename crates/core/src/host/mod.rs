use crate::{VariantState, VariantStyle, Variants};

/// Boundary to the animation host that interpolates and paints descriptors.
///
/// The factories only produce [`Variants`]; driving frames, scheduling loops
/// and cancelling on unmount all happen behind this trait.
pub trait AnimationHost {
    type Effect;

    fn apply(&mut self, descriptor: &Variants, target: VariantState) -> Self::Effect;
}

/// Host that jumps straight to the settled style of the requested state.
///
/// The style is the target state layered over the descriptor's resting state
/// (`hidden` for reveals, `initial` for interactions). Every applied state is
/// recorded in order.
#[derive(Debug, Default)]
pub struct SnapshotHost {
    applied: Vec<VariantState>,
}

impl SnapshotHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> &[VariantState] {
        &self.applied
    }
}

impl AnimationHost for SnapshotHost {
    type Effect = Option<VariantStyle>;

    fn apply(&mut self, descriptor: &Variants, target: VariantState) -> Self::Effect {
        let style = descriptor.get(target)?;
        self.applied.push(target);

        let base = [VariantState::Hidden, VariantState::Initial]
            .into_iter()
            .filter(|state| *state != target)
            .find_map(|state| descriptor.get(state));

        Some(match base {
            Some(base) => base.merged_with(style),
            None => style.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{preference::FixedPreference, MotionFactory, MotionValue};

    #[test]
    fn settles_on_target_over_base() {
        let factory = MotionFactory::new(FixedPreference(false));
        let lift = factory.lift();
        let mut host = SnapshotHost::new();

        let tap = host.apply(&lift, VariantState::Tap).unwrap();
        assert_eq!(tap.y, Some(MotionValue::Single(-4.0)));
        // tap does not set a shadow, so the resting one shows through
        assert_eq!(tap.box_shadow.as_deref(), Some(crate::interaction::RESTING_SHADOW));
    }

    #[test]
    fn unknown_states_are_ignored() {
        let factory = MotionFactory::new(FixedPreference(false));
        let mut host = SnapshotHost::new();

        assert!(host.apply(&factory.fade_in(0.0), VariantState::Hover).is_none());
        assert!(host.apply(&factory.fade_in(0.0), VariantState::Visible).is_some());
        assert_eq!(host.applied(), &[VariantState::Visible]);
    }
}
