//! Generic record-transform-and-bulk-submit pipeline
//!
//! Every seed command is the same three stages: read raw records from a
//! spreadsheet/CSV or a built-in dataset, map them onto a declared field set,
//! and POST each mapped record to the target endpoint, best-effort.

pub mod mapper;
pub mod source;
pub mod spec;
pub mod submit;
pub mod value;

pub use mapper::{map_record, MappedRecord};
pub use source::{read_csv, read_excel, RawRecord, SourceError};
pub use spec::{Coerce, FieldSource, FieldSpec, MapError, MissingPolicy, PLACEHOLDER};
pub use submit::{submit_batch, BatchReport, SubmissionResult};
pub use value::Value;

use log::{debug, info, warn};
use reqwest::Client;

/// One seed type expressed as configuration over the generic pipeline
#[derive(Debug, Clone)]
pub struct SeedJob {
    /// Job name, used in logs and summaries
    pub name: &'static str,
    /// Field identifying a record in logs (e.g. "empId")
    pub key_field: &'static str,
    /// Target field set, in output order
    pub specs: Vec<FieldSpec>,
}

/// Run one seed job end to end: map every raw record, then submit the mapped
/// batch sequentially. Mapping failures are recorded per record and do not
/// stop the run; the aggregate covers every input record exactly once, in
/// input order.
pub async fn run(
    client: &Client,
    job: &SeedJob,
    records: &[RawRecord],
    endpoint: &str,
) -> BatchReport {
    info!(
        "seeding {}: {} records -> {}",
        job.name,
        records.len(),
        endpoint
    );
    for spec in &job.specs {
        debug!("{} field: {}", job.name, spec.describe());
    }

    let mut mapped = Vec::new();
    // One slot per input record: a mapping failure fills it immediately, a
    // mapped record's slot is filled from the submission results afterwards
    let mut slots: Vec<Option<SubmissionResult>> = Vec::with_capacity(records.len());
    for record in records {
        match map_record(record, &job.specs) {
            Ok(m) => {
                mapped.push(m);
                slots.push(None);
            }
            Err(e) => {
                let key = raw_key(record, job.key_field);
                warn!("skipping {} record {}: {}", job.name, key, e);
                slots.push(Some(SubmissionResult::failed(key, e.to_string())));
            }
        }
    }

    let submitted = submit_batch(client, endpoint, &mapped, job.key_field).await;
    let mut submitted = submitted.results.into_iter();
    let mut report = BatchReport::default();
    for slot in slots {
        match slot {
            Some(failure) => report.push(failure),
            None => {
                if let Some(result) = submitted.next() {
                    report.push(result);
                }
            }
        }
    }

    info!(
        "{}: {} submitted, {} failed",
        job.name,
        report.succeeded(),
        report.failed()
    );
    report
}

fn raw_key(record: &RawRecord, key_field: &str) -> String {
    match record.get(key_field) {
        Some(v) if !v.is_null() => Value::from_json(v).to_text(),
        _ => "(unknown)".to_string(),
    }
}
