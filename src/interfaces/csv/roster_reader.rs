use crate::domain::staff::StaffRecord;
use crate::error::{PayrollError, Result};
use std::io::Read;

/// Reads staff records from a CSV source.
///
/// Expects the header `id,name,role,joined_date,base_salary,supervisor_id`.
/// Whitespace around fields is trimmed and an empty `supervisor_id` marks a
/// top-level record.
pub struct RosterReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RosterReader<R> {
    /// Wraps `source`, which must start with the roster header row.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes staff records.
    pub fn records(self) -> impl Iterator<Item = Result<StaffRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayrollError::from))
    }
}
