mod cli;
mod commands;
mod installers;
mod libs;
mod logger;
mod schema;

use clap::Parser;
use cli::cmd_enums::{Cli, Commands};
use commands::{install, version};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    match cli.command {
        Commands::Version => version::run(),
        Commands::Install(args) => {
            let (config, overrides) = args.into_parts();
            install::run(config, overrides);
        }
    }
}
