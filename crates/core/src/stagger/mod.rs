use crate::{
    factory::{reveal_transition, unless_reduced, MotionFactory},
    preference::MotionPreference,
    StaggerDescriptor, Transition, VariantState, VariantStyle, Variants,
};

pub const DEFAULT_STAGGER_DELAY: f64 = 0.1;
/// Wait before the first child of a stagger container starts.
pub const DELAY_CHILDREN: f64 = 0.2;
/// Vertical travel of each staggered child.
pub const ITEM_DISTANCE: f64 = 20.0;
pub const ITEM_DURATION: f64 = 0.4;

impl<P: MotionPreference> MotionFactory<P> {
    /// Parent descriptor that sequences its children `stagger_delay` seconds apart.
    ///
    /// Under reduced motion the container starts fully visible and releases all
    /// children at once.
    pub fn stagger_container(&self, stagger_delay: f64) -> StaggerDescriptor {
        let reduced = self.reduced_motion();
        Variants::reveal(
            VariantStyle::new().with_opacity(unless_reduced(reduced, 0.0, 1.0)),
            VariantStyle::new()
                .with_opacity(1.0)
                .with_transition(Transition::default().with_stagger(
                    unless_reduced(reduced, stagger_delay, 0.0),
                    unless_reduced(reduced, DELAY_CHILDREN, 0.0),
                )),
        )
    }

    /// Per-child descriptor used under a [`MotionFactory::stagger_container`].
    pub fn stagger_item(&self) -> Variants {
        let reduced = self.reduced_motion();
        let mut transition = reveal_transition(reduced, ITEM_DURATION, 0.0);
        transition.delay = None;
        Variants::reveal(
            VariantStyle::new()
                .with_opacity(0.0)
                .with_y(unless_reduced(reduced, ITEM_DISTANCE, 0.0)),
            VariantStyle::new()
                .with_opacity(1.0)
                .with_y(0.0)
                .with_transition(transition),
        )
    }
}

/// Start offsets in seconds, in document order, of `children` items placed
/// under `container`. A container without stagger timing starts every child
/// immediately.
pub fn stagger_schedule(container: &StaggerDescriptor, children: usize) -> Vec<f64> {
    let transition = container
        .get(VariantState::Visible)
        .and_then(|style| style.transition.as_ref());
    let stagger = transition.and_then(|t| t.stagger_children).unwrap_or(0.0);
    let delay = transition.and_then(|t| t.delay_children).unwrap_or(0.0);
    (0..children).map(|index| delay + index as f64 * stagger).collect()
}
