//! Pose manifest output: one line per pose, label first
//!
//! Without a layer registry a line is just the pose label. With one, the
//! label is followed by tab-separated `show=` and `hide=` layer lists.

use crate::hand::Pose;
use crate::io::configuration::LAYER_LIST_SEPARATOR;
use crate::layers::registry::VisibilityPlan;
use std::io::{self, Write};

/// Label for a pose, optionally lowercased
pub fn format_label(pose: &Pose, lowercase: bool) -> String {
    let label = pose.label();
    if lowercase {
        label.to_lowercase()
    } else {
        label
    }
}

/// A single manifest line, without the trailing newline
pub fn format_entry(label: &str, plan: Option<&VisibilityPlan>) -> String {
    plan.map_or_else(
        || label.to_string(),
        |plan| {
            format!(
                "{label}\tshow={}\thide={}",
                plan.show.join(LAYER_LIST_SEPARATOR),
                plan.hide.join(LAYER_LIST_SEPARATOR)
            )
        },
    )
}

/// Writes manifest lines to any byte sink
pub struct ManifestWriter<W: Write> {
    writer: W,
    lowercase: bool,
    written: usize,
}

impl<W: Write> ManifestWriter<W> {
    /// Wrap a sink
    pub const fn new(writer: W, lowercase: bool) -> Self {
        Self {
            writer,
            lowercase,
            written: 0,
        }
    }

    /// Write one pose and return its label
    ///
    /// # Errors
    ///
    /// Propagates any write failure of the underlying sink.
    pub fn write_pose(&mut self, pose: &Pose, plan: Option<&VisibilityPlan>) -> io::Result<String> {
        let label = format_label(pose, self.lowercase);
        writeln!(self.writer, "{}", format_entry(&label, plan))?;
        self.written += 1;
        Ok(label)
    }

    /// Number of poses written so far
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the sink
    ///
    /// # Errors
    ///
    /// Propagates any flush failure of the underlying sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
