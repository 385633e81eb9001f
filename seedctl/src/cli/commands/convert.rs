//! Convert command handler

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::*;

use crate::split;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input Excel workbook
    pub file: PathBuf,
    /// Directory the CSV files are written to (default: next to the input)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

pub fn handle_convert_command(args: ConvertArgs) -> Result<()> {
    let written = split::export_sheets(&args.file, args.output_dir.as_deref())?;

    for path in &written {
        println!("  {}", path.display());
    }
    println!(
        "{} sheets exported",
        written.len().to_string().green()
    );
    Ok(())
}
