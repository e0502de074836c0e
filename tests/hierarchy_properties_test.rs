use chrono::{Days, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use staffpay::application::engine::{EngineConfig, SalaryEngine};
use staffpay::domain::compensation::round_money;
use staffpay::domain::ports::RosterHandle;
use staffpay::domain::staff::{Role, StaffId, StaffRecord};
use staffpay::domain::tenure::completed_years;
use staffpay::infrastructure::in_memory::InMemoryRoster;
use std::sync::Arc;

mod common;

fn roster_for(records: &[StaffRecord]) -> RosterHandle {
    Arc::new(InMemoryRoster::from_records(records.to_vec()).unwrap())
}

fn query_dates() -> Vec<NaiveDate> {
    vec![
        NaiveDate::from_ymd_opt(2005, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2016, 2, 29).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2060, 7, 31).unwrap(),
    ]
}

fn descendants(records: &[StaffRecord], root: StaffId) -> Vec<StaffId> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        for record in records.iter().filter(|r| r.supervisor_id == Some(current)) {
            found.push(record.id);
            stack.push(record.id);
        }
    }
    found
}

#[test]
fn test_zero_before_joining_for_everyone() {
    let mut rng = StdRng::seed_from_u64(7);
    let records = common::random_forest(&mut rng, 60);
    let engine = SalaryEngine::new(roster_for(&records));

    for record in &records {
        let day_before = record.joined_date.checked_sub_days(Days::new(1)).unwrap();
        assert_eq!(engine.compute_salary(record.id, day_before).unwrap(), dec!(0));
    }
}

#[test]
fn test_total_is_rounded_sum_of_individuals() {
    let mut rng = StdRng::seed_from_u64(11);
    for size in [1, 5, 25, 80] {
        let records = common::random_forest(&mut rng, size);
        let engine = SalaryEngine::new(roster_for(&records));

        for at in query_dates() {
            let sum: Decimal = records
                .iter()
                .map(|r| engine.compute_salary(r.id, at).unwrap())
                .sum();
            assert_eq!(engine.compute_total_salary(at).unwrap(), round_money(sum));
        }
    }
}

#[test]
fn test_salaries_follow_role_rules() {
    let mut rng = StdRng::seed_from_u64(23);
    let records = common::random_forest(&mut rng, 50);
    let engine = SalaryEngine::new(roster_for(&records));

    for at in query_dates() {
        for record in &records {
            let actual = engine.compute_salary(record.id, at).unwrap();
            if at < record.joined_date {
                assert_eq!(actual, dec!(0));
                continue;
            }

            let years = completed_years(record.joined_date, at);
            let rule = record.role.bonus_rule();
            let mut expected =
                record.base_salary + record.base_salary * rule.seniority_fraction(years);
            let team: Vec<StaffId> = match record.role {
                Role::Employee => Vec::new(),
                Role::Manager => records
                    .iter()
                    .filter(|r| r.supervisor_id == Some(record.id))
                    .map(|r| r.id)
                    .collect(),
                Role::Sales => descendants(&records, record.id),
            };
            for id in team {
                expected += engine.compute_salary(id, at).unwrap() * rule.override_rate;
            }

            assert_eq!(actual, round_money(expected), "staff {} at {at}", record.id);
            assert!(actual >= Decimal::ZERO);
        }
    }
}

#[test]
fn test_memoization_is_invisible() {
    let mut rng = StdRng::seed_from_u64(42);
    let records = common::random_forest(&mut rng, 70);
    let roster = roster_for(&records);
    let memo = SalaryEngine::new(roster.clone());
    let plain = SalaryEngine::with_config(
        roster,
        EngineConfig {
            memoize: false,
            ..EngineConfig::default()
        },
    );

    for at in query_dates() {
        for record in &records {
            assert_eq!(
                memo.compute_salary(record.id, at).unwrap(),
                plain.compute_salary(record.id, at).unwrap()
            );
        }
    }
}

#[test]
fn test_deep_chain_within_default_limit() {
    let joined = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let records: Vec<StaffRecord> = (1..=500)
        .map(|id| {
            let supervisor = if id == 1 { None } else { Some(id - 1) };
            StaffRecord::new(id, Role::Sales, joined, dec!(1000), supervisor)
        })
        .collect();
    let engine = SalaryEngine::new(roster_for(&records));

    let bottom = engine.compute_salary(500, joined).unwrap();
    assert_eq!(bottom, dec!(1000));
    let top = engine.compute_salary(1, joined).unwrap();
    assert!(top > dec!(1000));
}
