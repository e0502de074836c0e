use crate::domain::staff::StaffId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

/// Writes an amount as a JSON number without trailing zeros: `1261`, `0`,
/// `1060.38`.
fn serialize_amount<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = value.normalize();
    match normalized.to_u64() {
        Some(whole) if normalized.scale() == 0 => serializer.serialize_u64(whole),
        _ => rust_decimal::serde::float::serialize(&normalized, serializer),
    }
}

/// Response for a single staff member's salary at a date.
#[derive(Debug, Serialize, PartialEq)]
pub struct SalaryReport {
    pub id: StaffId,
    #[serde(serialize_with = "serialize_amount")]
    pub salary: Decimal,
    pub date: NaiveDate,
}

/// Response for the organization-wide salary sum at a date.
#[derive(Debug, Serialize, PartialEq)]
pub struct TotalSalaryReport {
    #[serde(serialize_with = "serialize_amount")]
    pub total: Decimal,
    pub date: NaiveDate,
}
