//! BSR CLI - offline usage reports over the bike share rental tables.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bsr-cli",
    version,
    about = "Bike share rental usage reporting toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bsr_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bsr_cmd::run(cli.command)
}
