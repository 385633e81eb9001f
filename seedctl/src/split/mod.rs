//! Spreadsheet partitioning utilities
//!
//! Two standalone batch tools: `split_to_csv` distributes a sheet's rows over
//! N CSV files, `export_sheets` turns every sheet of a workbook into its own
//! CSV. Neither touches the seeding pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;

use crate::pipeline::source::{self, Table};

/// Contiguous `(start, end)` row ranges for N chunks over `total` rows.
///
/// The first N-1 chunks hold `total / chunks` rows each; the last chunk takes
/// the remainder, so every row lands in exactly one chunk and only the final
/// chunk's size can differ. Zero chunks yields no ranges.
pub fn chunk_bounds(total: usize, chunks: usize) -> Vec<(usize, usize)> {
    if chunks == 0 {
        return Vec::new();
    }
    let per_chunk = total / chunks;
    (0..chunks)
        .map(|i| {
            let start = i * per_chunk;
            let end = if i == chunks - 1 {
                total
            } else {
                start + per_chunk
            };
            (start, end)
        })
        .collect()
}

/// Split the rows of a CSV file or Excel sheet into `chunks` CSV files named
/// `output_file_<i>.csv` (1-indexed) under `out_dir`. Reruns overwrite the
/// previous output with identical content.
pub fn split_to_csv(
    input: &Path,
    sheet: Option<&str>,
    chunks: usize,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if chunks == 0 {
        bail!("chunk count must be at least 1");
    }

    let table = source::read_table(input, sheet)?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(chunks);
    for (i, (start, end)) in chunk_bounds(table.rows.len(), chunks).into_iter().enumerate() {
        let path = out_dir.join(format!("output_file_{}.csv", i + 1));
        write_csv(&path, &table.headers, &table.rows[start..end])?;
        info!(
            "saved {} with rows {} to {}",
            path.display(),
            start + 1,
            end
        );
        written.push(path);
    }
    Ok(written)
}

/// Export every sheet of a workbook as `<input-stem>_<sheet>.csv` under
/// `out_dir` (default: the input file's directory). Sheet names are sanitized
/// to alphanumeric-or-underscore for the filename.
pub fn export_sheets(input: &Path, out_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    let out_dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sheet");

    let mut written = Vec::new();
    for name in source::sheet_names(input)? {
        let table = source::read_table(input, Some(&name))?;
        let path = out_dir.join(format!("{}_{}.csv", stem, sanitize_sheet_name(&name)));
        write_csv(&path, &table.headers, &table.rows)?;
        info!("created {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Replace every non-alphanumeric character with an underscore
pub fn sanitize_sheet_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

fn write_csv(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_bounds_even_split() {
        let bounds = chunk_bounds(70, 7);
        assert_eq!(bounds.len(), 7);
        for (i, (start, end)) in bounds.iter().enumerate() {
            assert_eq!(*start, i * 10);
            assert_eq!(end - start, 10);
        }
    }

    #[test]
    fn test_chunk_bounds_remainder_goes_last() {
        let bounds = chunk_bounds(73, 7);
        assert_eq!(bounds.len(), 7);
        for (start, end) in &bounds[..6] {
            assert_eq!(end - start, 10);
        }
        assert_eq!(bounds[6], (60, 73));
    }

    #[test]
    fn test_chunk_bounds_cover_every_row_once() {
        let bounds = chunk_bounds(101, 4);
        let mut covered = 0;
        let mut expected_start = 0;
        for (start, end) in bounds {
            assert_eq!(start, expected_start);
            covered += end - start;
            expected_start = end;
        }
        assert_eq!(covered, 101);
    }

    #[test]
    fn test_chunk_bounds_more_chunks_than_rows() {
        let bounds = chunk_bounds(3, 7);
        // First six chunks are empty, the last takes everything
        assert_eq!(bounds.len(), 7);
        for (start, end) in &bounds[..6] {
            assert_eq!(start, end);
        }
        assert_eq!(bounds[6], (0, 3));
    }

    #[test]
    fn test_chunk_bounds_zero_chunks_yields_nothing() {
        assert!(chunk_bounds(10, 0).is_empty());
        assert!(chunk_bounds(0, 0).is_empty());
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(
            sanitize_sheet_name("2024 Published or Accepted"),
            "2024_Published_or_Accepted"
        );
        assert_eq!(sanitize_sheet_name("Q1/Q2 (draft)"), "Q1_Q2__draft_");
    }

    #[test]
    fn test_split_zero_chunks_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        std::fs::write(&input, "id\n1\n").unwrap();
        assert!(split_to_csv(&input, None, 0, dir.path()).is_err());
    }
}
