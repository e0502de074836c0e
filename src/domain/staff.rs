use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique, positive identifier of a staff member.
pub type StaffId = u32;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "Employee")]
    Employee,
    #[serde(alias = "Manager")]
    Manager,
    #[serde(alias = "Sales")]
    Sales,
}

/// One person in the organization.
///
/// Records are immutable once loaded into a roster; the engine only reads them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StaffRecord {
    pub id: StaffId,
    #[serde(default)]
    pub name: String,
    pub role: Role,
    pub joined_date: NaiveDate,
    pub base_salary: Decimal,
    pub supervisor_id: Option<StaffId>,
}

impl StaffRecord {
    pub fn new(
        id: StaffId,
        role: Role,
        joined_date: NaiveDate,
        base_salary: Decimal,
        supervisor_id: Option<StaffId>,
    ) -> Self {
        Self {
            id,
            name: String::new(),
            role,
            joined_date,
            base_salary,
            supervisor_id,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the person is on the payroll at `as_of`.
    pub fn is_employed_at(&self, as_of: NaiveDate) -> bool {
        as_of >= self.joined_date
    }
}
