//! med - weighted minimum edit distance from the command line

use clap::Parser;
use colored::Colorize;
use std::process;

use min_edit_distance::cli::commands;
use min_edit_distance::cli::Cli;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
