use crate::domain::compensation::{OverrideReach, round_money};
use crate::domain::ports::RosterHandle;
use crate::domain::staff::StaffId;
use crate::domain::tenure::completed_years;
use crate::error::{PayrollError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, error};

/// Tuning knobs for a [`SalaryEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reuse a subordinate's salary within one query instead of recomputing it.
    pub memoize: bool,
    /// Deepest chain of supervisor links a query may walk.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            max_depth: 1024,
        }
    }
}

/// Per-query scratch state. Never outlives a single top-level call.
struct Query {
    as_of: NaiveDate,
    memo: HashMap<StaffId, Decimal>,
    on_path: HashSet<StaffId>,
}

impl Query {
    fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            memo: HashMap::new(),
            on_path: HashSet::new(),
        }
    }
}

/// Computes salaries over a read-only roster snapshot.
///
/// A person's salary is their base salary plus a tenure-based seniority bonus
/// plus, for managers and sales staff, an override bonus taken from the full
/// salaries of their subordinates. The engine holds no mutable state, so one
/// instance can serve concurrent queries.
#[derive(Clone)]
pub struct SalaryEngine {
    roster: RosterHandle,
    config: EngineConfig,
}

impl SalaryEngine {
    /// Creates a new `SalaryEngine` with the default configuration.
    pub fn new(roster: RosterHandle) -> Self {
        Self::with_config(roster, EngineConfig::default())
    }

    pub fn with_config(roster: RosterHandle, config: EngineConfig) -> Self {
        Self { roster, config }
    }

    /// Salary of `staff_id` as of `as_of`, rounded to two decimals.
    ///
    /// Unknown staff and staff who have not joined yet both earn zero. Errors
    /// are a supervisor cycle, a chain deeper than `max_depth`, or an amount
    /// too large for a `Decimal`.
    pub fn compute_salary(&self, staff_id: StaffId, as_of: NaiveDate) -> Result<Decimal> {
        let mut query = Query::new(as_of);
        let salary = self.salary_in(&mut query, staff_id)?;
        debug!(staff_id, %as_of, %salary, "salary computed");
        Ok(salary)
    }

    /// Sum of every staff member's salary as of `as_of`, rounded to two decimals.
    ///
    /// Each person is computed as an independent query.
    pub fn compute_total_salary(&self, as_of: NaiveDate) -> Result<Decimal> {
        let mut sum = Decimal::ZERO;
        for staff_id in self.roster.staff_ids() {
            let salary = self.compute_salary(staff_id, as_of)?;
            sum = sum
                .checked_add(salary)
                .ok_or(PayrollError::AmountOverflow { staff_id })?;
        }
        let total = round_money(sum);
        debug!(%as_of, %total, "total salary computed");
        Ok(total)
    }

    fn salary_in(&self, query: &mut Query, staff_id: StaffId) -> Result<Decimal> {
        if let Some(salary) = query.memo.get(&staff_id) {
            return Ok(*salary);
        }

        let Some(record) = self.roster.get(staff_id) else {
            return Ok(Decimal::ZERO);
        };
        if !record.is_employed_at(query.as_of) {
            return Ok(Decimal::ZERO);
        }

        if query.on_path.contains(&staff_id) {
            error!(staff_id, "supervisor cycle detected");
            return Err(PayrollError::MalformedHierarchy { staff_id });
        }
        if query.on_path.len() >= self.config.max_depth {
            error!(staff_id, limit = self.config.max_depth, "hierarchy depth limit hit");
            return Err(PayrollError::DepthLimitExceeded {
                staff_id,
                limit: self.config.max_depth,
            });
        }

        let rule = record.role.bonus_rule();
        let years = completed_years(record.joined_date, query.as_of);
        let base_salary = record.base_salary;
        let overflow = || PayrollError::AmountOverflow { staff_id };
        let mut total = rule
            .seniority_bonus(base_salary, years)
            .and_then(|bonus| base_salary.checked_add(bonus))
            .ok_or_else(overflow)?;

        let team = match rule.reach {
            OverrideReach::None => Vec::new(),
            OverrideReach::Direct => self.roster.direct_subordinates(staff_id).to_vec(),
            OverrideReach::AllLevels => self.all_subordinates(staff_id)?,
        };

        query.on_path.insert(staff_id);
        for subordinate in team {
            let salary = self.salary_in(query, subordinate)?;
            total = rule
                .override_bonus(salary)
                .and_then(|bonus| total.checked_add(bonus))
                .ok_or_else(overflow)?;
        }
        query.on_path.remove(&staff_id);

        let salary = round_money(total);
        if self.config.memoize {
            query.memo.insert(staff_id, salary);
        }
        Ok(salary)
    }

    /// Every record below `root` at any depth, each exactly once, breadth-first.
    fn all_subordinates(&self, root: StaffId) -> Result<Vec<StaffId>> {
        let mut found = Vec::new();
        let mut seen = HashSet::from([root]);
        let mut frontier = VecDeque::from([root]);

        while let Some(current) = frontier.pop_front() {
            for &child in self.roster.direct_subordinates(current) {
                if !seen.insert(child) {
                    error!(staff_id = child, root, "supervisor cycle detected");
                    return Err(PayrollError::MalformedHierarchy { staff_id: child });
                }
                found.push(child);
                frontier.push_back(child);
            }
        }

        Ok(found)
    }
}
