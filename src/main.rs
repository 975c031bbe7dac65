//! CLI entry point for writing hand pose manifests

use clap::Parser;
use hand_poses::io::cli::{Cli, PoseProcessor};
use hand_poses::io::logging::init_logging;

fn main() -> hand_poses::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    let processor = PoseProcessor::new(cli);
    processor.process().map(|_| ())
}
