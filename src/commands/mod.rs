// Register application subcommands.
// Each module corresponds to a specific `deno-bootstrap` command-line action.

// Downloads and extracts the latest Deno release, printing the executable path.
pub mod install;
// Displays the version of deno-bootstrap.
pub mod version;
