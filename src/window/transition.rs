/// One scheduled step of a window animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// A freshly opened window rises from the bottom edge into place.
    FlyIn,
    /// A collapsed, minimizing window drops to the bottom edge.
    SlideToBottom,
    /// A restoring window moves from the bottom edge back to its geometry
    /// and the dock follows the restored mode.
    Reveal,
    /// The transition has played out; input is accepted again.
    EndAnimation,
    /// A closing window has faded out and can be removed.
    Destroy,
}

/// What the manager has to do after a step was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    Continue,
    Destroyed,
}
