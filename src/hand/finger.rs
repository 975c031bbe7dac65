use crate::hand::symbol_set::Symbol;
use crate::io::error::{PoseError, invalid_specification};
use std::fmt;
use std::str::FromStr;

/// One of the five fingers of a hand, in canonical order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Finger {
    /// Thumb, composed separately from the other four fingers
    Thumb,
    /// Index finger
    Index,
    /// Middle finger
    Middle,
    /// Ring finger
    Ring,
    /// Pinky finger
    Pinky,
}

impl Finger {
    /// Every finger, thumb first
    pub const ALL: [Self; 5] = [
        Self::Thumb,
        Self::Index,
        Self::Middle,
        Self::Ring,
        Self::Pinky,
    ];

    /// The four fingers drawn from the cartesian product
    pub const NON_THUMB: [Self; 4] = [Self::Index, Self::Middle, Self::Ring, Self::Pinky];

    /// Lowercase name used in export specifications
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }

    /// Capitalized name used in pose labels
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thumb => "Thumb",
            Self::Index => "Index",
            Self::Middle => "Middle",
            Self::Ring => "Ring",
            Self::Pinky => "Pinky",
        }
    }

    /// Allowed finger names, for error messages
    pub fn allowed_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl Symbol for Finger {
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Finger {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|finger| finger.name() == s)
            .ok_or_else(|| invalid_specification(&s, &format!("one of {}", Self::allowed_names())))
    }
}
