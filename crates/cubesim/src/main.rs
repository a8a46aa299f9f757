//! Headless 3x3x3 cube simulator.

mod cli;
mod report;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install()?;

    cli::exec(args.subcommand)
}
