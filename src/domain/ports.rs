use super::staff::{StaffId, StaffRecord};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only view of a roster snapshot.
///
/// Lookups are synchronous: the salary engine never suspends while it walks
/// the hierarchy.
pub trait RosterLookup: Send + Sync {
    fn get(&self, id: StaffId) -> Option<&StaffRecord>;
    /// Records whose supervisor is `id`.
    fn direct_subordinates(&self, id: StaffId) -> &[StaffId];
    fn staff_ids(&self) -> Vec<StaffId>;
}

/// Somewhere a roster can be loaded from (a file, a fixed seed, ...).
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn load(&self) -> Result<Vec<StaffRecord>>;
}

pub type RosterHandle = Arc<dyn RosterLookup>;
pub type RosterSourceBox = Box<dyn RosterSource>;
