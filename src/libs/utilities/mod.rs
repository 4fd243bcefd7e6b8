// Small self-contained helpers used by the install flow.

// `~` expansion and absolute paths.
pub mod path_helpers;
// Zip parsing and extraction.
pub mod compression;
// OS identifier -> archive naming.
pub mod platform;
