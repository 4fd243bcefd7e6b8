// Core of `deno-bootstrap`: configuration, filesystem locations, the error
// taxonomy and the install flow itself.

pub mod config_loading;
pub mod errors;
pub mod paths;
pub mod tool_installer;
pub mod utilities;
