#![allow(dead_code)]

use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use staffpay::domain::staff::{Role, StaffRecord};
use std::io::Error;
use std::path::Path;

/// Builds a random, cycle-free roster of `size` people.
///
/// Each record's supervisor is drawn from the records before it (or none), so
/// the supervisor links always form a forest.
pub fn random_forest<R: Rng>(rng: &mut R, size: u32) -> Vec<StaffRecord> {
    let roles = [Role::Employee, Role::Manager, Role::Sales];
    (1..=size)
        .map(|id| {
            let role = roles[rng.gen_range(0..roles.len())];
            let joined = NaiveDate::from_ymd_opt(
                rng.gen_range(2000..2025),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
            )
            .unwrap();
            let base_salary = Decimal::new(rng.gen_range(0..500_000), 2);
            let supervisor_id = if id > 1 && rng.gen_bool(0.8) {
                Some(rng.gen_range(1..id))
            } else {
                None
            };
            StaffRecord::new(id, role, joined, base_salary, supervisor_id)
                .with_name(format!("Person {id}"))
        })
        .collect()
}

pub fn write_roster_csv(path: &Path, records: &[StaffRecord]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
