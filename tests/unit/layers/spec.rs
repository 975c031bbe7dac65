//! Tests for export specification parsing

#[cfg(test)]
mod tests {
    use hand_poses::PoseError;
    use hand_poses::hand::{Assignment, Finger, State};
    use hand_poses::layers::spec::{ExportSpec, parse_export_specs};

    // Tests a single finger,state entry
    // Verified by swapping the finger and state fields
    #[test]
    fn test_parse_single_entry() {
        let specs = parse_export_specs("index,up").unwrap();
        assert_eq!(specs, vec![ExportSpec::new(Finger::Index, State::Up)]);
    }

    // Tests several entries separated by semicolons, with whitespace
    #[test]
    fn test_parse_multiple_entries() {
        let specs = parse_export_specs("middle,add-link; ring , abd-link").unwrap();
        assert_eq!(
            specs,
            vec![
                ExportSpec::new(Finger::Middle, State::AddLink),
                ExportSpec::new(Finger::Ring, State::AbdLink),
            ]
        );
    }

    // Tests a blank string declares nothing
    #[test]
    fn test_parse_blank() {
        assert!(parse_export_specs("").unwrap().is_empty());
        assert!(parse_export_specs("   ").unwrap().is_empty());
    }

    // Tests entries without exactly two fields are rejected
    // Verified by accepting any number of fields
    #[test]
    fn test_parse_malformed_entry() {
        for spec in ["index", "index,up,down", "index,up;"] {
            match parse_export_specs(spec) {
                Err(PoseError::InvalidSpecification { expected, .. }) => {
                    assert!(expected.contains("[finger],[state]"));
                }
                other => unreachable!("Expected InvalidSpecification, got {other:?}"),
            }
        }
    }

    // Tests the offending finger token is reported
    #[test]
    fn test_parse_unknown_finger() {
        match parse_export_specs("index,up;toe,down") {
            Err(PoseError::InvalidSpecification { token, .. }) => assert_eq!(token, "toe"),
            other => unreachable!("Expected InvalidSpecification, got {other:?}"),
        }
    }

    // Tests the offending state token is reported with the allowed states
    #[test]
    fn test_parse_unknown_state() {
        match parse_export_specs("pinky,bent") {
            Err(PoseError::InvalidSpecification {
                token, expected, ..
            }) => {
                assert_eq!(token, "bent");
                assert!(expected.contains("abd-link"));
            }
            other => unreachable!("Expected InvalidSpecification, got {other:?}"),
        }
    }

    // Tests matching and display of a spec
    #[test]
    fn test_matches_and_display() {
        let spec = ExportSpec::new(Finger::Ring, State::MultiLink);
        assert!(spec.matches(Assignment::new(Finger::Ring, State::MultiLink)));
        assert!(!spec.matches(Assignment::new(Finger::Ring, State::Up)));
        assert!(!spec.matches(Assignment::new(Finger::Middle, State::MultiLink)));
        assert_eq!(spec.to_string(), "ring,multi-link");
        assert_eq!("ring,multi-link".parse::<ExportSpec>().unwrap(), spec);
    }
}
