use crate::domain::ports::RosterLookup;
use crate::domain::staff::{StaffId, StaffRecord};
use crate::error::{PayrollError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::warn;

/// An immutable roster snapshot held in memory.
///
/// Records are keyed by id, and the supervisor → children adjacency is built
/// once at construction so child lookups never rescan the record set.
/// Load order is preserved for both `staff_ids` and `direct_subordinates`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRoster {
    records: HashMap<StaffId, StaffRecord>,
    order: Vec<StaffId>,
    children: HashMap<StaffId, Vec<StaffId>>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from loaded records.
    ///
    /// Rejects zero ids, negative base salaries and duplicate ids. Supervisor
    /// cycles are not rejected here; the salary engine detects them.
    pub fn from_records(records: Vec<StaffRecord>) -> Result<Self> {
        let mut roster = Self::new();
        for record in records {
            roster.insert(record)?;
        }

        for record in roster.records.values() {
            if let Some(supervisor) = record.supervisor_id
                && !roster.records.contains_key(&supervisor)
            {
                warn!(
                    staff_id = record.id,
                    supervisor_id = supervisor,
                    "supervisor not in roster, treating record as top-level"
                );
            }
        }

        Ok(roster)
    }

    fn insert(&mut self, record: StaffRecord) -> Result<()> {
        if record.id == 0 {
            return Err(PayrollError::ValidationError(
                "Staff id must be positive".to_string(),
            ));
        }
        if record.base_salary < Decimal::ZERO {
            return Err(PayrollError::ValidationError(format!(
                "Staff member {} has a negative base salary",
                record.id
            )));
        }
        if self.records.contains_key(&record.id) {
            return Err(PayrollError::ValidationError(format!(
                "Duplicate staff id {}",
                record.id
            )));
        }

        if let Some(supervisor) = record.supervisor_id {
            self.children.entry(supervisor).or_default().push(record.id);
        }
        self.order.push(record.id);
        self.records.insert(record.id, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl RosterLookup for InMemoryRoster {
    fn get(&self, id: StaffId) -> Option<&StaffRecord> {
        self.records.get(&id)
    }

    fn direct_subordinates(&self, id: StaffId) -> &[StaffId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn staff_ids(&self) -> Vec<StaffId> {
        self.order.clone()
    }
}
