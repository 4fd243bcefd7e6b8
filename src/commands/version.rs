// Prints the version of `deno-bootstrap` itself.

/// Version baked in at compile time from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("deno-bootstrap {VERSION}");
}
