use crate::domain::ports::RosterSource;
use crate::domain::staff::{Role, StaffRecord};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

/// The small built-in roster used when no roster file is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedRosterSource;

impl SeedRosterSource {
    pub fn new() -> Self {
        Self
    }

    pub fn records() -> Vec<StaffRecord> {
        vec![
            StaffRecord::new(1, Role::Manager, seed_date(2020, 1, 1), dec!(1000), None)
                .with_name("Jack Adams"),
            StaffRecord::new(2, Role::Sales, seed_date(2021, 6, 1), dec!(1000), Some(1))
                .with_name("Barbara Cook"),
            StaffRecord::new(3, Role::Employee, seed_date(2022, 1, 15), dec!(1000), Some(2))
                .with_name("Eva Fox"),
        ]
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("seed roster dates are valid calendar dates")
}

#[async_trait]
impl RosterSource for SeedRosterSource {
    async fn load(&self) -> Result<Vec<StaffRecord>> {
        Ok(Self::records())
    }
}
