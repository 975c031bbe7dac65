//! Per-layer export specifications of the form `finger,state;finger,state`

use crate::hand::{Assignment, Finger, State};
use crate::io::configuration::{SPEC_ENTRY_SEPARATOR, SPEC_FIELD_SEPARATOR};
use crate::io::error::{PoseError, Result, invalid_specification};
use std::fmt;
use std::str::FromStr;

/// Declares that a layer depicts `finger` in `state`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExportSpec {
    /// Finger the layer belongs to
    pub finger: Finger,
    /// State the layer depicts
    pub state: State,
}

impl ExportSpec {
    /// Bind a finger and state
    pub const fn new(finger: Finger, state: State) -> Self {
        Self { finger, state }
    }

    /// True when the assignment shows exactly this layer's finger and state
    pub fn matches(&self, assignment: Assignment) -> bool {
        self.finger == assignment.finger && self.state == assignment.state
    }
}

impl fmt::Display for ExportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SPEC_FIELD_SEPARATOR}{}", self.finger, self.state)
    }
}

impl FromStr for ExportSpec {
    type Err = PoseError;

    fn from_str(entry: &str) -> Result<Self> {
        let fields: Vec<&str> = entry.split(SPEC_FIELD_SEPARATOR).map(str::trim).collect();
        let [finger, state] = fields.as_slice() else {
            return Err(invalid_specification(
                &entry,
                &format!("the form [finger]{SPEC_FIELD_SEPARATOR}[state]"),
            ));
        };

        Ok(Self {
            finger: finger.parse()?,
            state: state.parse()?,
        })
    }
}

/// Parse every entry of a specification string
///
/// A blank string declares no exports.
///
/// # Errors
///
/// Returns `InvalidSpecification` naming the first malformed entry, unknown
/// finger or unknown state.
pub fn parse_export_specs(spec: &str) -> Result<Vec<ExportSpec>> {
    if spec.trim().is_empty() {
        return Ok(Vec::new());
    }

    spec.split(SPEC_ENTRY_SEPARATOR)
        .map(|entry| entry.trim().parse())
        .collect()
}
