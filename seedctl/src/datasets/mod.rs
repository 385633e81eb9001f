//! Hard-coded seed datasets, embedded at build time
//!
//! These are the literal record lists that previously lived inline in the
//! one-shot seed scripts. Literal mode does no I/O and cannot fail.

mod department;
mod patents;
mod students;

pub use department::{attended_activities, conducted_activities};
pub use patents::patents;
pub use students::{entrance_exams, higher_studies, inter_sports, intra_sports};

use crate::pipeline::RawRecord;

fn records(value: serde_json::Value) -> Vec<RawRecord> {
    match value {
        serde_json::Value::Array(items) => items,
        _ => Vec::new(),
    }
}
