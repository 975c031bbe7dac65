//! Validity predicates over finger assignments
//!
//! Every predicate takes a slice of assignments so the same rule applies to
//! four-finger candidates and to complete poses.

use crate::algorithm::rules::PoseRules;
use crate::hand::{Assignment, Finger, FingerSet, State};

/// Minimum number of fingers joined in a multi-link
pub const MIN_MULTI_LINKS: usize = 3;

/// Fingers holding `state`
pub fn fingers_in_state(assignments: &[Assignment], state: State) -> FingerSet {
    assignments
        .iter()
        .filter(|a| a.state == state)
        .map(|a| a.finger)
        .collect()
}

/// Number of assignments holding `state`
pub fn count_state(assignments: &[Assignment], state: State) -> usize {
    assignments.iter().filter(|a| a.state == state).count()
}

/// True when every assignment's state is accepted for its finger
pub fn is_legal_per_finger(assignments: &[Assignment], rules: &PoseRules) -> bool {
    assignments.iter().all(|&a| rules.accepts(a))
}

/// True when any finger holds `MultiLink`
pub fn has_multi_links(assignments: &[Assignment]) -> bool {
    assignments.iter().any(|a| a.state == State::MultiLink)
}

/// True when any finger holds `AddLink` or `AbdLink`
pub fn has_add_or_abd_links(assignments: &[Assignment]) -> bool {
    assignments.iter().any(|a| a.state.is_simple_link())
}

/// Multi-links are valid when the thumb stays out, at least three fingers
/// join, and both middle and ring are among them
pub fn has_valid_multi_joints(assignments: &[Assignment]) -> bool {
    let linked = fingers_in_state(assignments, State::MultiLink);

    if linked.contains(Finger::Thumb) {
        return false;
    }
    if linked.count() < MIN_MULTI_LINKS {
        return false;
    }
    linked.contains(Finger::Middle) && linked.contains(Finger::Ring)
}

/// Add/abd links are valid when they balance and every add-link finger has
/// its paired abd-link partner among its proximate fingers
pub fn has_valid_add_and_abd_joints(assignments: &[Assignment], rules: &PoseRules) -> bool {
    let add_fingers = fingers_in_state(assignments, State::AddLink);
    let abductors = fingers_in_state(assignments, State::AbdLink);

    if add_fingers.count() != abductors.count() {
        return false;
    }

    add_fingers.iter().all(|add_finger| {
        let proximate_with_abd = rules
            .proximate_fingers(add_finger)
            .intersection(&abductors);
        if proximate_with_abd.is_empty() {
            return false;
        }

        rules
            .abd_partner(add_finger)
            .is_some_and(|partner| proximate_with_abd.contains(partner))
    })
}

/// Multi-link policy: candidates without multi-links always pass
pub fn passes_multi_link_policy(assignments: &[Assignment], allow_multi_link: bool) -> bool {
    !has_multi_links(assignments) || (allow_multi_link && has_valid_multi_joints(assignments))
}

/// Add/abd policy: candidates without simple links always pass
pub fn passes_simple_link_policy(
    assignments: &[Assignment],
    allow_simple_link: bool,
    rules: &PoseRules,
) -> bool {
    !has_add_or_abd_links(assignments)
        || (allow_simple_link && has_valid_add_and_abd_joints(assignments, rules))
}
