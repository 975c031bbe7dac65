//! Tests for assignments, candidates and pose labels

#[cfg(test)]
mod tests {
    use hand_poses::hand::pose::{candidate, is_all_down};
    use hand_poses::hand::{Assignment, Finger, Pose, State};
    use std::collections::HashSet;

    // Tests candidates follow index, middle, ring, pinky order
    // Verified by swapping ring and pinky in candidate construction
    #[test]
    fn test_candidate_order() {
        let c = candidate([State::Up, State::Down, State::AddLink, State::AbdLink]);
        assert_eq!(
            c,
            [
                Assignment::new(Finger::Index, State::Up),
                Assignment::new(Finger::Middle, State::Down),
                Assignment::new(Finger::Ring, State::AddLink),
                Assignment::new(Finger::Pinky, State::AbdLink),
            ]
        );
    }

    // Tests the thumb is prefixed ahead of the candidate
    // Verified by appending the thumb instead of prefixing it
    #[test]
    fn test_pose_prefixes_thumb() {
        let pose = Pose::new(
            State::Up,
            candidate([State::Down, State::Up, State::Down, State::Down]),
        );
        let fingers: Vec<Finger> = pose.assignments().iter().map(|a| a.finger).collect();
        assert_eq!(fingers, Finger::ALL.to_vec());
        assert_eq!(pose.thumb(), State::Up);
        assert_eq!(pose.state_of(Finger::Middle), State::Up);
        assert_eq!(pose.state_of(Finger::Pinky), State::Down);
        assert_eq!(pose.count(State::Down), 3);
    }

    // Tests the label joins capitalized finger and state names with underscores
    // Verified by joining with hyphens instead
    #[test]
    fn test_label() {
        let pose = Pose::from_states([State::Up, State::Down, State::Up, State::Down, State::Down]);
        assert_eq!(
            pose.label(),
            "Thumb_Up_Index_Down_Middle_Up_Ring_Down_Pinky_Down"
        );
    }

    // Tests linked states keep their hyphen in the label
    #[test]
    fn test_label_with_links() {
        let pose = Pose::from_states([
            State::Up,
            State::Up,
            State::AddLink,
            State::AbdLink,
            State::Down,
        ]);
        assert_eq!(
            pose.to_string(),
            "Thumb_Up_Index_Up_Middle_Add-link_Ring_Abd-link_Pinky_Down"
        );
    }

    // Tests poses are value objects
    #[test]
    fn test_pose_equality() {
        let a = Pose::from_states([State::Up; 5]);
        let b = Pose::new(State::Up, candidate([State::Up; 4]));
        let c = Pose::from_states([State::Down; 5]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let unique: HashSet<Pose> = [a, b, c].into_iter().collect();
        assert_eq!(unique.len(), 2);
        assert_eq!(a.candidate(), candidate([State::Up; 4]));
    }

    // Tests all-down detection
    #[test]
    fn test_is_all_down() {
        assert!(is_all_down(&candidate([State::Down; 4])));
        assert!(!is_all_down(&candidate([
            State::Down,
            State::Down,
            State::Down,
            State::MultiLink
        ])));
    }
}
