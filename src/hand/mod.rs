/// Finger enumeration and name parsing
pub mod finger;
/// Assignments, candidates and complete poses
pub mod pose;
/// State enumeration and name parsing
pub mod state;
/// Bit-backed sets over fingers and states
pub mod symbol_set;

pub use finger::Finger;
pub use pose::{Assignment, Candidate, Pose};
pub use state::State;
pub use symbol_set::{FingerSet, StateSet};
