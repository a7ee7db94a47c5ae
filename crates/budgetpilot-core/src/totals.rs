//! Monthly totals aggregation
//!
//! Sums enabled recurring costs, resolves savings, and folds in required
//! debt payments into one "essential monthly" figure.

use chrono::NaiveDate;

use crate::debt;
use crate::models::{BudgetInput, MonthlyTotals, Savings, SavingsMode};

/// Aggregate all monthly expense totals.
///
/// Percent-mode savings cannot be resolved until monthly income is known,
/// so it is left as a 0 placeholder here; callers resolve it with
/// [`resolve_percent_savings`] once income is available.
pub fn monthly_totals(input: &BudgetInput, reference_date: NaiveDate) -> MonthlyTotals {
    let fixed_monthly: f64 = input
        .fixed_expenses
        .iter()
        .filter(|e| e.enabled)
        .map(|e| e.amount_monthly)
        .sum();

    let subs_monthly: f64 = input
        .subscriptions
        .iter()
        .filter(|s| s.enabled)
        .map(|s| s.amount_monthly)
        .sum();

    let flexible_caps_monthly = input.flexible_caps.total();

    let savings_monthly = if input.savings.enabled {
        match input.savings.mode {
            SavingsMode::FixedAmount => input.savings.value,
            SavingsMode::Percent => 0.0,
        }
    } else {
        0.0
    };

    let debt_required_monthly = if input.debts.enabled {
        debt::required_monthly_payment(
            &input.debts.items,
            input.debts.payoff_goal,
            input.debts.payoff_goal_date,
            reference_date,
        )
    } else {
        0.0
    };

    let essential_monthly = fixed_monthly + subs_monthly + savings_monthly + debt_required_monthly;

    MonthlyTotals {
        fixed_monthly,
        subs_monthly,
        flexible_caps_monthly,
        savings_monthly,
        debt_required_monthly,
        essential_monthly,
    }
}

/// Resolve percent-mode savings against normalized monthly income and
/// recompute the essential total.
pub fn resolve_percent_savings(totals: &mut MonthlyTotals, savings: &Savings, income_monthly: f64) {
    if savings.enabled && savings.mode == SavingsMode::Percent {
        totals.savings_monthly = income_monthly * (savings.value / 100.0);
        totals.essential_monthly = totals.fixed_monthly
            + totals.subs_monthly
            + totals.savings_monthly
            + totals.debt_required_monthly;
    }
}
