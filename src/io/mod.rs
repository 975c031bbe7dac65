/// Command-line parsing and manifest orchestration
pub mod cli;
/// Format constants and runtime defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Pose manifest formatting and writing
pub mod manifest;
/// Progress display for manifest output
pub mod progress;
