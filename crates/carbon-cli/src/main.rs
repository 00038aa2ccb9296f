//! Carbon CLI entry point: argument parsing, logging initialization and
//! command dispatch.

use carbon_cli::{cli, commands, config::Settings, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init(args.no_color, args.quiet);

    let result = Settings::load(args.config.as_deref()).and_then(|settings| match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args, &settings),
        cli::Command::Check(check_args) => commands::check_execute(check_args, &settings),
    });

    result.map_err(error::cli_error_to_miette)
}
