//! Calculation pipeline
//!
//! Orchestrates one budget calculation: normalize income, aggregate
//! totals, resolve percent-mode savings, evaluate feasibility, and derive
//! the safe-to-spend figures. The ordering matters: percent savings can
//! only be resolved once income is known, and the essential total must be
//! recomputed afterwards.

use chrono::Local;

use crate::error::Result;
use crate::models::{BudgetInput, BudgetOutput, MonthlyTotals};
use crate::{income, suggestions, totals, DAYS_PER_MONTH};

/// Run the full pipeline, including suggestion generation.
pub fn calculate(input: &BudgetInput) -> Result<BudgetOutput> {
    calculate_with_options(input, true)
}

/// Run the pipeline with suggestion generation toggled.
///
/// The suggestion generator re-enters this function with suggestions
/// disabled, which bounds the recursion at depth 1.
pub(crate) fn calculate_with_options(
    input: &BudgetInput,
    include_suggestions: bool,
) -> Result<BudgetOutput> {
    let today = input.today.unwrap_or_else(|| Local::now().date_naive());

    // A past or same-day pay date is treated as "due immediately", never
    // zero or negative.
    let days_until_payday = (input.income.next_pay_date - today).num_days().max(1);

    let (irregular_avg, irregular_reliability) = match &input.income.irregular {
        Some(irregular) if irregular.enabled => {
            (irregular.monthly_avg, irregular.reliability.as_str())
        }
        _ => (0.0, "medium"),
    };

    let income_monthly = income::normalize_to_monthly(
        &input.income.pay_frequency,
        input.income.net_pay_amount,
        irregular_avg,
        irregular_reliability,
    )?;

    let mut totals = totals::monthly_totals(input, today);
    totals::resolve_percent_savings(&mut totals, &input.savings, income_monthly);

    // Exact equality is feasible
    let feasible = totals.essential_monthly <= income_monthly;
    let mut warnings = Vec::new();

    let (safe_to_spend_until_payday, safe_to_spend_today) = if feasible {
        // Reserve the essential outflow prorated over the window until
        // payday; no additional income is assumed to arrive before then,
        // so the balance is the sole cash cushion.
        let reserved_until_payday =
            totals.essential_monthly * (days_until_payday as f64 / DAYS_PER_MONTH);
        let safe_until_payday = (input.balance_now - reserved_until_payday).max(0.0);

        // The per-day figure divides the unrounded lump sum; rounding
        // happens exactly once per field, at output construction.
        let safe_per_day = round2(safe_until_payday / days_until_payday as f64);
        (safe_until_payday, safe_per_day)
    } else {
        let shortfall = totals.essential_monthly - income_monthly;
        warnings.push(format!(
            "Plan is not feasible. Monthly shortfall: ${:.2}. \
             Essential expenses (${:.2}) exceed income (${:.2}).",
            shortfall, totals.essential_monthly, income_monthly
        ));
        (0.0, 0.0)
    };

    tracing::debug!(
        feasible,
        days_until_payday,
        income_monthly,
        essential_monthly = totals.essential_monthly,
        safe_to_spend_today,
        "Budget calculation complete"
    );

    let suggestions = if include_suggestions {
        suggestions::generate(input, &totals, safe_to_spend_today, feasible)
    } else {
        Vec::new()
    };

    Ok(BudgetOutput {
        feasible,
        currency: input.currency.clone(),
        days_until_payday,
        income_monthly: round2(income_monthly),
        totals: MonthlyTotals {
            fixed_monthly: round2(totals.fixed_monthly),
            subs_monthly: round2(totals.subs_monthly),
            flexible_caps_monthly: round2(totals.flexible_caps_monthly),
            savings_monthly: round2(totals.savings_monthly),
            debt_required_monthly: round2(totals.debt_required_monthly),
            essential_monthly: round2(totals.essential_monthly),
        },
        safe_to_spend_until_payday: round2(safe_to_spend_until_payday),
        safe_to_spend_today,
        warnings,
        suggestions,
    })
}

/// Round a currency value to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Debts, FlexibleCaps, Income, Savings};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input_with_pay_date(today: NaiveDate, next_pay_date: NaiveDate) -> BudgetInput {
        BudgetInput {
            currency: "CAD".to_string(),
            today: Some(today),
            balance_now: 1000.0,
            income: Income {
                pay_frequency: "monthly".to_string(),
                net_pay_amount: 5000.0,
                next_pay_date,
                irregular: None,
            },
            fixed_expenses: vec![],
            subscriptions: vec![],
            flexible_caps: FlexibleCaps::default(),
            savings: Savings::default(),
            debts: Debts::default(),
        }
    }

    #[test]
    fn past_pay_date_clamps_to_one_day() {
        let today = date(2024, 3, 15);
        let input = input_with_pay_date(today, date(2024, 3, 1));
        let output = calculate(&input).unwrap();
        assert_eq!(output.days_until_payday, 1);
    }

    #[test]
    fn same_day_pay_date_clamps_to_one_day() {
        let today = date(2024, 3, 15);
        let input = input_with_pay_date(today, today);
        let output = calculate(&input).unwrap();
        assert_eq!(output.days_until_payday, 1);
    }

    #[test]
    fn exact_equality_of_income_and_essential_is_feasible() {
        let today = date(2024, 3, 1);
        let mut input = input_with_pay_date(today, date(2024, 3, 15));
        input.savings = Savings {
            enabled: true,
            mode: crate::models::SavingsMode::FixedAmount,
            value: 5000.0,
        };
        let output = calculate(&input).unwrap();
        assert!(output.feasible);
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(2.334_999), 2.33);
        assert_eq!(round2(-1.006), -1.01);
    }
}
