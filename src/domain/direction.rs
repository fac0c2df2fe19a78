//! Swap direction: which token the trader is paying with.

use core::fmt;

/// The trader's current input side of the pool pair.
///
/// The direction is a two-state machine: an explicit toggle switches it, and
/// any pending quote must be discarded on transition (a quote computed for
/// the opposite direction never carries over).  The initial state is
/// [`SwapDirection::AtoB`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Token A is sold into the pool; token B is received.
    #[default]
    AtoB,
    /// Token B is sold into the pool; token A is received.
    BtoA,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::AtoB => Self::BtoA,
            Self::BtoA => Self::AtoB,
        }
    }

    /// Returns `true` if token A is the input side.
    #[must_use]
    pub const fn is_a_to_b(&self) -> bool {
        matches!(self, Self::AtoB)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtoB => write!(f, "A->B"),
            Self::BtoA => write!(f, "B->A"),
        }
    }
}
