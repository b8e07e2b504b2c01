// Entrypoint for the `h2w` CLI.
// - Keeps `main` small: set up logging, parse flags, run the command.
// - Returns `anyhow::Result` so any failure is printed with its causes and
//   the process exits non-zero.

use clap::Parser;
use h2w_cli::cli::Cli;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, overrides the level picked here.
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    cli.run()
}
