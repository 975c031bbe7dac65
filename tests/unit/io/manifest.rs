//! Tests for pose manifest formatting

#[cfg(test)]
mod tests {
    use hand_poses::hand::{Pose, State};
    use hand_poses::io::manifest::{ManifestWriter, format_entry, format_label};
    use hand_poses::layers::registry::VisibilityPlan;

    fn sample_pose() -> Pose {
        Pose::from_states([State::Up, State::Down, State::Up, State::Down, State::Down])
    }

    // Tests labels keep their case unless lowercase is requested
    // Verified by lowercasing unconditionally
    #[test]
    fn test_format_label() {
        let pose = sample_pose();
        assert_eq!(
            format_label(&pose, false),
            "Thumb_Up_Index_Down_Middle_Up_Ring_Down_Pinky_Down"
        );
        assert_eq!(
            format_label(&pose, true),
            "thumb_up_index_down_middle_up_ring_down_pinky_down"
        );
    }

    // Tests entries with and without a visibility plan
    #[test]
    fn test_format_entry() {
        assert_eq!(format_entry("Thumb_Up", None), "Thumb_Up");

        let plan = VisibilityPlan {
            show: vec!["a".to_string(), "b".to_string()],
            hide: vec!["c".to_string()],
        };
        assert_eq!(format_entry("Thumb_Up", Some(&plan)), "Thumb_Up\tshow=a,b\thide=c");
    }

    // Tests the writer emits one line per pose and counts them
    // Verified by dropping the newline after each entry
    #[test]
    fn test_writer() {
        let mut writer = ManifestWriter::new(Vec::new(), false);
        let label = writer.write_pose(&sample_pose(), None).unwrap();
        writer
            .write_pose(&Pose::from_states([State::Down; 5]), None)
            .unwrap();
        assert_eq!(writer.written(), 2);
        assert_eq!(label, "Thumb_Up_Index_Down_Middle_Up_Ring_Down_Pinky_Down");

        let bytes = writer.finish().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Thumb_Up_Index_Down_Middle_Up_Ring_Down_Pinky_Down",
                "Thumb_Down_Index_Down_Middle_Down_Ring_Down_Pinky_Down",
            ]
        );
    }
}
