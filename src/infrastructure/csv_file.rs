use crate::domain::ports::RosterSource;
use crate::domain::staff::StaffRecord;
use crate::error::Result;
use crate::interfaces::csv::roster_reader::RosterReader;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Loads a roster from a CSV file on disk.
///
/// The whole file is read up front; any malformed row fails the load, since a
/// roster with silently missing people would produce wrong overrides.
#[derive(Debug, Clone)]
pub struct CsvRosterSource {
    path: PathBuf,
}

impl CsvRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for CsvRosterSource {
    async fn load(&self) -> Result<Vec<StaffRecord>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records = RosterReader::new(bytes.as_slice())
            .records()
            .collect::<Result<Vec<_>>>()?;
        debug!(path = %self.path.display(), count = records.len(), "roster loaded");
        Ok(records)
    }
}
