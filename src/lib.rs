//! Enumeration of valid hand poses for layer-based hand illustrations
//!
//! Each pose assigns one state to each of the five fingers. Candidates are
//! drawn from the cartesian product of states over the four non-thumb
//! fingers, filtered by per-finger legality and link rules, then completed
//! with a thumb state. The layer module turns each pose into show/hide
//! instructions for the layers of an illustration.

#![forbid(unsafe_code)]

/// Pose generation, rule tables and validity predicates
pub mod algorithm;
/// Fingers, states, sets and poses
pub mod hand;
/// Input/output operations and error handling
pub mod io;
/// Layer export specifications and visibility planning
pub mod layers;

pub use algorithm::generator::{GenerationOptions, PoseGenerator, generate};
pub use algorithm::rules::PoseRules;
pub use io::error::{PoseError, Result};
