//! Command-line interface definitions

pub mod commands;

use clap::{Parser, Subcommand};

use commands::convert::ConvertArgs;
use commands::seed::SeedCommands;
use commands::split::SplitArgs;

#[derive(Parser, Debug)]
#[command(
    name = "seedctl",
    version,
    about = "Bulk-seed the research portal backend from spreadsheets and built-in datasets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed records into the portal backend
    #[command(subcommand)]
    Seed(SeedCommands),
    /// Split a sheet's rows into N CSV files
    Split(SplitArgs),
    /// Export every sheet of a workbook as its own CSV file
    Convert(ConvertArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_teachers_requires_both_args() {
        let result = Cli::try_parse_from(["seedctl", "seed", "teachers", "only-file.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_split_defaults() {
        let cli = Cli::try_parse_from(["seedctl", "split", "input.xlsx"]).unwrap();
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.chunks, 7);
                assert_eq!(args.output_dir.to_str(), Some("output_csv_files"));
                assert_eq!(args.sheet, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
