//! Budget aggregation arithmetic.
//!
//! The only numeric-policy decisions in the system live here: the
//! division-by-zero guard on the percentage and the fixed rounding mode that
//! keeps the value deterministic across implementations.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-user budget summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Sum of budgets over all of the user's trips.
    pub total_budget: Decimal,
    /// Sum of all expense amounts across all of the user's trips.
    pub total_spent: Decimal,
    /// `total_budget - total_spent`; negative signals overspend, not an error.
    pub remaining_budget: Decimal,
    /// Percentage of the budget consumed, rounded half-up to 2 decimals;
    /// zero whenever `total_budget <= 0`.
    pub percentage_used: Decimal,
}

impl BudgetSummary {
    /// Derive the summary from the two aggregate inputs.
    pub fn compute(total_budget: Decimal, total_spent: Decimal) -> Self {
        Self {
            total_budget,
            total_spent,
            remaining_budget: total_budget - total_spent,
            percentage_used: percentage_used(total_budget, total_spent),
        }
    }
}

/// Percentage of `total_budget` consumed by `total_spent`.
///
/// Returns zero when `total_budget <= 0`, which guards the otherwise
/// undefined division. Rounds half-up at 2 decimal places; both inputs are
/// non-negative in practice, so `MidpointAwayFromZero` is exactly half-up.
pub fn percentage_used(total_budget: Decimal, total_spent: Decimal) -> Decimal {
    if total_budget <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (total_spent / total_budget * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
