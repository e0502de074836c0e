//! Role-dependent pay rules and money rounding.
//!
//! The rules are a closed table indexed by [`Role`]; the hierarchy walk that
//! feeds the override bonus lives in the application layer.

use super::staff::Role;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Decimal places kept in every returned salary figure.
pub const MONEY_DP: u32 = 2;

/// Which subordinates feed a role's override bonus.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OverrideReach {
    None,
    /// Only records whose supervisor is this person.
    Direct,
    /// The whole subtree below this person, at any depth.
    AllLevels,
}

/// One row of the pay rule table.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BonusRule {
    /// Seniority bonus fraction earned per completed year.
    pub seniority_rate: Decimal,
    /// Upper bound on the seniority bonus fraction.
    pub seniority_cap: Decimal,
    /// Fraction of each included subordinate's full salary added on top.
    pub override_rate: Decimal,
    pub reach: OverrideReach,
}

impl BonusRule {
    /// Seniority bonus fraction after `years` completed years, capped.
    pub fn seniority_fraction(&self, years: u32) -> Decimal {
        (Decimal::from(years) * self.seniority_rate).min(self.seniority_cap)
    }

    /// Seniority bonus amount for `base_salary`, or `None` on overflow.
    pub fn seniority_bonus(&self, base_salary: Decimal, years: u32) -> Option<Decimal> {
        base_salary.checked_mul(self.seniority_fraction(years))
    }

    /// Override contribution of one subordinate earning `subordinate_salary`,
    /// or `None` on overflow.
    pub fn override_bonus(&self, subordinate_salary: Decimal) -> Option<Decimal> {
        match self.reach {
            OverrideReach::None => Some(Decimal::ZERO),
            OverrideReach::Direct | OverrideReach::AllLevels => {
                subordinate_salary.checked_mul(self.override_rate)
            }
        }
    }
}

impl Role {
    pub fn bonus_rule(self) -> BonusRule {
        match self {
            Role::Employee => BonusRule {
                seniority_rate: dec!(0.03),
                seniority_cap: dec!(0.30),
                override_rate: Decimal::ZERO,
                reach: OverrideReach::None,
            },
            Role::Manager => BonusRule {
                seniority_rate: dec!(0.05),
                seniority_cap: dec!(0.40),
                override_rate: dec!(0.005),
                reach: OverrideReach::Direct,
            },
            Role::Sales => BonusRule {
                seniority_rate: dec!(0.01),
                seniority_cap: dec!(0.35),
                override_rate: dec!(0.003),
                reach: OverrideReach::AllLevels,
            },
        }
    }
}

/// Rounds half-up at the second decimal and fixes the scale to two places.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DP);
    rounded
}
