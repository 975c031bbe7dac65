/// Layer manifests and per-pose show/hide planning
pub mod registry;
/// Export specification parsing
pub mod spec;
