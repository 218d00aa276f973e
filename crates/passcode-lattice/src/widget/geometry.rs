//! Size constraints for widget measurement.
//!
//! A parent hands each widget one [`SizeConstraint`] per axis when it asks the
//! widget how big it wants to be. The widget resolves its desired size against
//! the constraint independently on each axis.

/// The space a parent offers a widget along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeConstraint {
    /// The widget must be exactly this many pixels.
    Exact(u32),
    /// The widget may be at most this many pixels.
    AtMost(u32),
    /// The parent imposes no limit.
    #[default]
    Unconstrained,
}

impl SizeConstraint {
    /// Resolve a desired extent against this constraint.
    ///
    /// `Exact` yields its size, `AtMost` the smaller of the two, and
    /// `Unconstrained` the desired size.
    #[inline]
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            Self::Exact(size) => size,
            Self::AtMost(size) => desired.min(size),
            Self::Unconstrained => desired,
        }
    }
}
