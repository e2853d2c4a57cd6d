//! gpd-cli - Command line tool for the US gas price dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gpd-cli",
    version,
    about = "US gas price dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gpd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gpd_cmd::run(cli.command).await
}
