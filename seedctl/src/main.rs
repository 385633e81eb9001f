use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use seedctl::cli::commands::convert::handle_convert_command;
use seedctl::cli::commands::seed::handle_seed_command;
use seedctl::cli::commands::split::handle_split_command;
use seedctl::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Seed(cmd) => handle_seed_command(cmd).await,
        Commands::Split(args) => handle_split_command(args),
        Commands::Convert(args) => handle_convert_command(args),
    }
}
