//! Best-effort sequential submission of mapped records

use log::{info, warn};
use reqwest::{Client, StatusCode};

use super::mapper::MappedRecord;

/// Outcome of submitting one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// The record's identifying key
    pub key: String,
    /// Whether the remote accepted the record
    pub success: bool,
    /// HTTP status of the response, when one was received
    pub status: Option<u16>,
    /// Failure reason: response body for rejections, error text otherwise
    pub error: Option<String>,
}

impl SubmissionResult {
    /// The remote confirmed the record with 201 Created
    pub fn created(key: impl Into<String>) -> Self {
        SubmissionResult {
            key: key.into(),
            success: true,
            status: Some(StatusCode::CREATED.as_u16()),
            error: None,
        }
    }

    /// The remote answered with a non-201 status
    pub fn rejected(key: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        SubmissionResult {
            key: key.into(),
            success: false,
            status: Some(status),
            error: Some(body.into()),
        }
    }

    /// The request never produced a usable response (network error, timeout)
    pub fn failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SubmissionResult {
            key: key.into(),
            success: false,
            status: None,
            error: Some(reason.into()),
        }
    }
}

/// Aggregate outcome of one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<SubmissionResult>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }

    /// True when every record went through
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    pub fn push(&mut self, result: SubmissionResult) {
        self.results.push(result);
    }

    /// Failed results, in submission order
    pub fn failures(&self) -> impl Iterator<Item = &SubmissionResult> {
        self.results.iter().filter(|r| !r.success)
    }
}

/// Submit mapped records to the endpoint, one POST per record, in order.
///
/// Failures never stop the batch; every remaining record is still attempted
/// and none is retried.
pub async fn submit_batch(
    client: &Client,
    endpoint: &str,
    records: &[MappedRecord],
    key_field: &str,
) -> BatchReport {
    let mut report = BatchReport::default();
    for record in records {
        let key = record.key(key_field);
        let result = submit_one(client, endpoint, record, &key).await;
        match &result {
            SubmissionResult { success: true, .. } => {
                info!("{} registered successfully", key);
            }
            SubmissionResult {
                status: Some(status),
                error,
                ..
            } => {
                warn!(
                    "failed to register {} (status {}): {}",
                    key,
                    status,
                    error.as_deref().unwrap_or("")
                );
            }
            SubmissionResult { error, .. } => {
                warn!(
                    "error sending {}: {}",
                    key,
                    error.as_deref().unwrap_or("unknown error")
                );
            }
        }
        report.push(result);
    }
    report
}

async fn submit_one(
    client: &Client,
    endpoint: &str,
    record: &MappedRecord,
    key: &str,
) -> SubmissionResult {
    match client.post(endpoint).json(record).send().await {
        Ok(response) => {
            let status = response.status();
            if status == StatusCode::CREATED {
                SubmissionResult::created(key)
            } else {
                let body = response.text().await.unwrap_or_default();
                SubmissionResult::rejected(key, status.as_u16(), body)
            }
        }
        Err(e) => SubmissionResult::failed(key, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = BatchReport::default();
        report.push(SubmissionResult::created("A"));
        report.push(SubmissionResult::rejected("B", 422, "duplicate key"));
        report.push(SubmissionResult::failed("C", "connection refused"));

        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 2);
        assert!(!report.is_clean());

        let failed_keys: Vec<_> = report.failures().map(|r| r.key.as_str()).collect();
        assert_eq!(failed_keys, vec!["B", "C"]);
    }

    #[test]
    fn test_result_constructors() {
        let ok = SubmissionResult::created("EMP001");
        assert!(ok.success);
        assert_eq!(ok.status, Some(201));
        assert_eq!(ok.error, None);

        let rejected = SubmissionResult::rejected("EMP002", 409, "exists");
        assert!(!rejected.success);
        assert_eq!(rejected.status, Some(409));
        assert_eq!(rejected.error.as_deref(), Some("exists"));

        let failed = SubmissionResult::failed("EMP003", "timed out");
        assert_eq!(failed.status, None);
    }
}
