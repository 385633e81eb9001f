//! Split command handler

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::*;

use crate::split;

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input CSV or Excel file
    pub file: PathBuf,
    /// Worksheet to read (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,
    /// Number of output files
    #[arg(long, default_value_t = 7)]
    pub chunks: usize,
    /// Directory the chunk files are written to
    #[arg(long, default_value = "output_csv_files")]
    pub output_dir: PathBuf,
}

pub fn handle_split_command(args: SplitArgs) -> Result<()> {
    let written = split::split_to_csv(
        &args.file,
        args.sheet.as_deref(),
        args.chunks,
        &args.output_dir,
    )?;

    for path in &written {
        println!("  {}", path.display());
    }
    println!(
        "{} chunk files written to {}",
        written.len().to_string().green(),
        args.output_dir.display()
    );
    Ok(())
}
