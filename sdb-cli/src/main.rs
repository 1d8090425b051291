//! SDB CLI - headless view of the sales dashboard's filters and charts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sdb-cli",
    version,
    about = "Sales dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sdb_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sdb_cmd::run(cli.command)
}
