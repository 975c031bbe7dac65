//! Assignments, four-finger candidates and complete five-finger poses

use crate::hand::finger::Finger;
use crate::hand::state::State;
use crate::io::configuration::LABEL_SEPARATOR;
use std::fmt;

/// One finger's state within a pose
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Assignment {
    /// Finger being assigned
    pub finger: Finger,
    /// State the finger holds
    pub state: State,
}

impl Assignment {
    /// Pair a finger with a state
    pub const fn new(finger: Finger, state: State) -> Self {
        Self { finger, state }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{LABEL_SEPARATOR}{}",
            self.finger.label(),
            self.state.label()
        )
    }
}

/// States of index, middle, ring and pinky, in that order
pub type Candidate = [Assignment; 4];

/// Build a candidate from four states in non-thumb finger order
pub const fn candidate(states: [State; 4]) -> Candidate {
    let [index, middle, ring, pinky] = states;
    [
        Assignment::new(Finger::Index, index),
        Assignment::new(Finger::Middle, middle),
        Assignment::new(Finger::Ring, ring),
        Assignment::new(Finger::Pinky, pinky),
    ]
}

/// True when every finger of the slice holds `Down`
pub fn is_all_down(assignments: &[Assignment]) -> bool {
    assignments.iter().all(|a| a.state == State::Down)
}

/// A complete hand pose: thumb first, then index, middle, ring and pinky
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pose {
    assignments: [Assignment; 5],
}

impl Pose {
    /// Prefix a four-finger candidate with the thumb's state
    pub const fn new(thumb: State, candidate: Candidate) -> Self {
        let [index, middle, ring, pinky] = candidate;
        Self {
            assignments: [
                Assignment::new(Finger::Thumb, thumb),
                index,
                middle,
                ring,
                pinky,
            ],
        }
    }

    /// Build a pose from five states in canonical finger order
    pub const fn from_states(states: [State; 5]) -> Self {
        let [thumb, index, middle, ring, pinky] = states;
        Self::new(thumb, candidate([index, middle, ring, pinky]))
    }

    /// Assignments in canonical finger order
    pub const fn assignments(&self) -> &[Assignment; 5] {
        &self.assignments
    }

    /// State held by `finger`
    pub const fn state_of(&self, finger: Finger) -> State {
        let [thumb, index, middle, ring, pinky] = self.assignments;
        match finger {
            Finger::Thumb => thumb.state,
            Finger::Index => index.state,
            Finger::Middle => middle.state,
            Finger::Ring => ring.state,
            Finger::Pinky => pinky.state,
        }
    }

    /// State held by the thumb
    pub const fn thumb(&self) -> State {
        self.state_of(Finger::Thumb)
    }

    /// The four non-thumb assignments
    pub const fn candidate(&self) -> Candidate {
        let [_, index, middle, ring, pinky] = self.assignments;
        [index, middle, ring, pinky]
    }

    /// Number of fingers, thumb included, holding `state`
    pub fn count(&self, state: State) -> usize {
        self.assignments.iter().filter(|a| a.state == state).count()
    }

    /// Underscore-joined label, e.g. `Thumb_Up_Index_Down_Middle_Up_Ring_Down_Pinky_Down`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, assignment) in self.assignments.iter().enumerate() {
            if position > 0 {
                f.write_str(LABEL_SEPARATOR)?;
            }
            write!(f, "{assignment}")?;
        }
        Ok(())
    }
}
