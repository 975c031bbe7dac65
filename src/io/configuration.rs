//! Format constants and runtime configuration defaults

// Layer export specification format, e.g. "index,up;middle,add-link"
/// Separator between entries of an export specification
pub const SPEC_ENTRY_SEPARATOR: char = ';';
/// Separator between the finger and state of a single entry
pub const SPEC_FIELD_SEPARATOR: char = ',';

// Layer manifest format, one "<layer-id> = <spec>" binding per line
/// Separator between a layer identifier and its specification
pub const MANIFEST_ASSIGNMENT: char = '=';
/// Prefix marking a manifest line as a comment
pub const MANIFEST_COMMENT_PREFIX: char = '#';

/// Separator between the parts of a pose label
pub const LABEL_SEPARATOR: &str = "_";
/// Separator between layer identifiers in a manifest output line
pub const LAYER_LIST_SEPARATOR: &str = ",";

/// Number of raw four-finger candidates (five states over four fingers)
pub const RAW_CANDIDATE_COUNT: usize = 625;

// Logging
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter used when debug output is requested
pub const DEBUG_LOG_FILTER: &str = "debug";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
