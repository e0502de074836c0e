use crate::domain::staff::StaffId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// The supervisor links reachable from `staff_id` loop back on themselves.
    #[error("Malformed hierarchy: supervisor chain through staff member {staff_id} contains a cycle")]
    MalformedHierarchy { staff_id: StaffId },
    #[error("Salary of staff member {staff_id} exceeds the representable amount")]
    AmountOverflow { staff_id: StaffId },
    #[error("Hierarchy below staff member {staff_id} is deeper than {limit} levels")]
    DepthLimitExceeded { staff_id: StaffId, limit: usize },
}

pub type Result<T> = std::result::Result<T, PayrollError>;
