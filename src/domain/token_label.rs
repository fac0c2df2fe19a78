//! Cosmetic display names for the token pair.

use core::fmt;

use super::SwapDirection;

/// Free-text display names for tokens A and B.
///
/// Labels are purely cosmetic: no uniqueness constraint, editable at any
/// time, and independent of the simulation state — a reset leaves them
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenLabels {
    name_a: String,
    name_b: String,
}

impl TokenLabels {
    /// Default display name for token A.
    pub const DEFAULT_NAME_A: &'static str = "TOKEN";

    /// Default display name for token B.
    pub const DEFAULT_NAME_B: &'static str = "USDT";

    /// Creates labels from two display names.
    pub fn new(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self {
            name_a: name_a.into(),
            name_b: name_b.into(),
        }
    }

    /// Returns token A's display name.
    #[must_use]
    pub fn name_a(&self) -> &str {
        &self.name_a
    }

    /// Returns token B's display name.
    #[must_use]
    pub fn name_b(&self) -> &str {
        &self.name_b
    }

    /// Replaces token A's display name.
    pub fn set_name_a(&mut self, name: impl Into<String>) {
        self.name_a = name.into();
    }

    /// Replaces token B's display name.
    pub fn set_name_b(&mut self, name: impl Into<String>) {
        self.name_b = name.into();
    }

    /// Returns the name of the token being paid for the given direction.
    #[must_use]
    pub fn input_name(&self, direction: SwapDirection) -> &str {
        if direction.is_a_to_b() {
            &self.name_a
        } else {
            &self.name_b
        }
    }

    /// Returns the name of the token being received for the given direction.
    #[must_use]
    pub fn output_name(&self, direction: SwapDirection) -> &str {
        if direction.is_a_to_b() {
            &self.name_b
        } else {
            &self.name_a
        }
    }
}

impl Default for TokenLabels {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME_A, Self::DEFAULT_NAME_B)
    }
}

impl fmt::Display for TokenLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name_a, self.name_b)
    }
}
