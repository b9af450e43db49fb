//! Source readers: one per raw input shape, all converging on the common
//! `RawTrialRecord` intermediate.

mod hierarchical;
mod regulatory;
mod tabular;

pub use hierarchical::HierarchicalReader;
pub use regulatory::{RegulatoryOutcome, RegulatoryReader};
pub use tabular::TabularReader;

use std::path::Path;

use crate::domain::{RawTrialRecord, SourceTag};
use crate::error::Result;

/// What one trial source contributed: the records that parsed, and a
/// count of the rows that did not.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub records: Vec<RawTrialRecord>,
    pub malformed: u64,
}

/// A reader for one trial-level source. Malformed rows are skipped and
/// counted; a missing or unreadable input file is an error, fatal for
/// that source only.
pub trait TrialReader {
    fn source(&self) -> SourceTag;
    fn read(&self, path: &Path) -> Result<ReadOutcome>;
}
