use crate::hand::symbol_set::Symbol;
use crate::io::error::{PoseError, invalid_specification};
use std::fmt;
use std::str::FromStr;

/// Posture or joint condition of a single finger, in canonical order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Finger extended
    Up,
    /// Finger folded
    Down,
    /// Finger drawn toward a neighbour; pairs with an `AbdLink` neighbour
    AddLink,
    /// Finger drawn away from a neighbour; pairs with an `AddLink` neighbour
    AbdLink,
    /// Finger joined with at least two others, middle and ring included
    MultiLink,
}

impl State {
    /// Every state in canonical order, which is also the cartesian product order
    pub const ALL: [Self; 5] = [
        Self::Up,
        Self::Down,
        Self::AddLink,
        Self::AbdLink,
        Self::MultiLink,
    ];

    /// Lowercase name used in export specifications
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::AddLink => "add-link",
            Self::AbdLink => "abd-link",
            Self::MultiLink => "multi-link",
        }
    }

    /// Capitalized name used in pose labels
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::AddLink => "Add-link",
            Self::AbdLink => "Abd-link",
            Self::MultiLink => "Multi-link",
        }
    }

    /// True for the paired add/abd states
    pub const fn is_simple_link(self) -> bool {
        matches!(self, Self::AddLink | Self::AbdLink)
    }

    /// Allowed state names, for error messages
    pub fn allowed_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl Symbol for State {
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for State {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| invalid_specification(&s, &format!("one of {}", Self::allowed_names())))
    }
}
