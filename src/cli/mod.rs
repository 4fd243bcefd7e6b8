// Command-line surface of `deno-bootstrap`.
pub mod cmd_enums;
