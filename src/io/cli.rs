//! Command-line interface for writing the pose manifest

use crate::algorithm::generator::{GenerationOptions, PoseGenerator};
use crate::algorithm::rules::PoseRules;
use crate::hand::Pose;
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::io::manifest::ManifestWriter;
use crate::io::progress::ProgressManager;
use crate::layers::registry::LayerRegistry;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "hand-poses")]
#[command(
    author,
    version,
    about = "Enumerate valid hand poses and plan the layers shown for each"
)]
/// Command-line arguments for the pose manifest tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Include hand poses with three or more fingers linked
    #[arg(short, long)]
    pub multi: bool,

    /// Include hand poses with two fingers linked
    #[arg(short, long)]
    pub simple: bool,

    /// Layer manifest binding layer identifiers to finger states
    #[arg(short, long, value_name = "FILE")]
    pub layers: Option<PathBuf>,

    /// Write the pose manifest to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Stop after this many poses
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Force pose labels to lowercase
    #[arg(long)]
    pub lower: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print debug messages
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Link options selected on the command line
    pub const fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.multi, self.simple)
    }

    /// Check if progress should be displayed
    ///
    /// Progress only accompanies file output so it never interleaves with
    /// manifest lines on stdout.
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.output.is_some()
    }
}

/// Generates poses and writes them, with their layer plans, as a manifest
pub struct PoseProcessor {
    cli: Cli,
}

impl PoseProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate, plan and write every selected pose
    ///
    /// Returns the number of poses written.
    ///
    /// # Errors
    ///
    /// Returns an error if the limit is zero, the layer manifest cannot be
    /// loaded, a pose finger has no bound layer, or the output cannot be written.
    pub fn process(&self) -> Result<usize> {
        if self.cli.limit == Some(0) {
            return Err(invalid_parameter(
                "limit",
                &0,
                &"must select at least one pose",
            ));
        }

        let registry = self
            .cli
            .layers
            .as_deref()
            .map(LayerRegistry::load)
            .transpose()?;
        if let Some(registry) = &registry {
            info!(layers = registry.layers().len(), "Loaded layer manifest");
        }

        let poses = self.select_poses();

        self.cli.output.as_deref().map_or_else(
            || {
                let stdout = std::io::stdout();
                self.write_manifest(
                    stdout.lock(),
                    &poses,
                    registry.as_ref(),
                    None,
                    Path::new("<stdout>"),
                )
            },
            |path| self.write_to_file(path, &poses, registry.as_ref()),
        )
    }

    /// Poses in output order, truncated to the requested limit
    pub fn select_poses(&self) -> Vec<Pose> {
        let mut poses =
            PoseGenerator::new(PoseRules::standard(), self.cli.generation_options()).generate();
        if let Some(limit) = self.cli.limit {
            poses.truncate(limit);
        }
        poses
    }

    fn write_to_file(
        &self,
        path: &Path,
        poses: &[Pose],
        registry: Option<&LayerRegistry>,
    ) -> Result<usize> {
        let file = File::create(path).with_path(path, "create manifest")?;
        // Dropping the bar clears it, also when a write fails below
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(poses.len()));
        let written = self.write_manifest(
            BufWriter::new(file),
            poses,
            registry,
            progress.as_ref(),
            path,
        )?;
        if let Some(progress) = &progress {
            progress.finish();
        }
        info!(poses = written, path = %path.display(), "Wrote pose manifest");
        Ok(written)
    }

    fn write_manifest<W: Write>(
        &self,
        sink: W,
        poses: &[Pose],
        registry: Option<&LayerRegistry>,
        progress: Option<&ProgressManager>,
        path: &Path,
    ) -> Result<usize> {
        let mut writer = ManifestWriter::new(sink, self.cli.lower);

        for pose in poses {
            let plan = registry.map(|r| r.plan(pose)).transpose()?;
            let label = writer
                .write_pose(pose, plan.as_ref())
                .with_path(path, "write manifest")?;
            if let Some(progress) = progress {
                progress.advance(&label);
            }
        }

        let written = writer.written();
        writer.finish().with_path(path, "flush manifest")?;
        Ok(written)
    }
}
