// File: crates/heatmap-cli/src/main.rs
// Summary: Entry point; parses flags, installs logging, runs one subcommand.

use clap::Parser;

mod cmd;
mod fetch;

#[derive(Parser)]
#[command(
    name = "heatmap",
    version,
    about = "Monthly global land-surface temperature heatmap"
)]
struct Cli {
    #[command(subcommand)]
    command: cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    cmd::run(cli.command).await
}
