//! Tests for state ordering, names and parsing

#[cfg(test)]
mod tests {
    use hand_poses::PoseError;
    use hand_poses::hand::State;

    // Tests canonical order, which drives cartesian product order
    // Verified by swapping Up and Down in ALL
    #[test]
    fn test_canonical_order() {
        assert_eq!(
            State::ALL,
            [
                State::Up,
                State::Down,
                State::AddLink,
                State::AbdLink,
                State::MultiLink
            ]
        );
    }

    // Tests hyphenated names and their capitalized labels
    // Verified by capitalizing the second word of the label
    #[test]
    fn test_names_and_labels() {
        assert_eq!(State::AddLink.name(), "add-link");
        assert_eq!(State::AbdLink.name(), "abd-link");
        assert_eq!(State::MultiLink.name(), "multi-link");
        assert_eq!(State::AddLink.label(), "Add-link");
        assert_eq!(State::MultiLink.label(), "Multi-link");
        assert_eq!(State::Up.label(), "Up");
    }

    // Tests only the add/abd states count as simple links
    #[test]
    fn test_is_simple_link() {
        let simple: Vec<State> = State::ALL
            .into_iter()
            .filter(|state| state.is_simple_link())
            .collect();
        assert_eq!(simple, vec![State::AddLink, State::AbdLink]);
    }

    // Tests every name parses back to its state
    #[test]
    fn test_parse_round_trip() {
        for state in State::ALL {
            assert_eq!(state.to_string().parse::<State>().unwrap(), state);
        }
    }

    // Tests unknown states report the allowed set
    // Verified by returning a generic error without the allowed names
    #[test]
    fn test_parse_unknown_state() {
        let err = "sideways".parse::<State>().unwrap_err();
        match err {
            PoseError::InvalidSpecification { token, expected, .. } => {
                assert_eq!(token, "sideways");
                assert!(expected.contains("multi-link"));
            }
            _ => unreachable!("Expected InvalidSpecification error type"),
        }
    }
}
