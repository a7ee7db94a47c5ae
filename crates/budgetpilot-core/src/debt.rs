//! Debt amortization math
//!
//! Computes the monthly payment needed to retire a balance within a goal
//! horizon, with or without interest, and folds per-item payments into a
//! single required monthly total.

use chrono::NaiveDate;

use crate::models::{DebtItem, PayoffGoal};
use crate::DAYS_PER_MONTH;

/// Monthly payment required to retire `balance` in `months`.
///
/// Zero or negative months means "pay it all now" and returns the full
/// balance. With an APR the standard fixed-payment amortization formula
/// applies: `payment = (r * balance) / (1 - (1 + r)^(-months))` where `r`
/// is the monthly periodic rate. A periodic rate of exactly zero falls
/// back to simple division.
pub fn payment_for_goal(balance: f64, months: i64, apr: Option<f64>) -> f64 {
    if months <= 0 {
        return balance;
    }

    let apr = match apr {
        Some(apr) if apr != 0.0 => apr,
        _ => return balance / months as f64,
    };

    let monthly_rate = (apr / 100.0) / 12.0;
    if monthly_rate == 0.0 {
        return balance / months as f64;
    }

    (monthly_rate * balance) / (1.0 - (1.0 + monthly_rate).powi(-(months as i32)))
}

/// Resolve a payoff goal to a month count.
///
/// `None` means no goal is set: use minimum payments only. A custom date
/// in the past (or missing entirely) never yields less than one month.
pub fn resolve_goal_months(
    goal: Option<PayoffGoal>,
    goal_date: Option<NaiveDate>,
    reference_date: NaiveDate,
) -> Option<i64> {
    match goal? {
        PayoffGoal::Asap => Some(1),
        PayoffGoal::SixMonths => Some(6),
        PayoffGoal::TwelveMonths => Some(12),
        PayoffGoal::TwentyFourMonths => Some(24),
        PayoffGoal::CustomDate => {
            let goal_date = goal_date?;
            let days = (goal_date - reference_date).num_days();
            let months = (days as f64 / DAYS_PER_MONTH).round() as i64;
            Some(months.max(1))
        }
    }
}

/// Total required monthly debt payment across all items.
///
/// Without a goal this is the sum of contractual minimums. With a goal,
/// each item pays the larger of its contractual minimum and the
/// goal-driven amortized payment: a goal can only accelerate payoff,
/// never let a payment fall below the minimum.
pub fn required_monthly_payment(
    items: &[DebtItem],
    goal: Option<PayoffGoal>,
    goal_date: Option<NaiveDate>,
    reference_date: NaiveDate,
) -> f64 {
    if items.is_empty() {
        return 0.0;
    }

    let months = match resolve_goal_months(goal, goal_date, reference_date) {
        Some(months) => months,
        None => return items.iter().map(|d| d.min_payment_monthly).sum(),
    };

    items
        .iter()
        .map(|d| {
            let goal_payment = payment_for_goal(d.balance, months, d.apr);
            d.min_payment_monthly.max(goal_payment)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn debt(balance: f64, min_payment: f64, apr: Option<f64>) -> DebtItem {
        DebtItem {
            debt_type: "creditCard".to_string(),
            balance,
            min_payment_monthly: min_payment,
            apr,
        }
    }

    #[test]
    fn zero_months_pays_full_balance() {
        assert_eq!(payment_for_goal(5000.0, 0, None), 5000.0);
        assert_eq!(payment_for_goal(5000.0, -3, Some(18.0)), 5000.0);
    }

    #[test]
    fn interest_free_is_simple_division() {
        let payment = payment_for_goal(12000.0, 12, None);
        assert!((payment - 1000.0).abs() < 0.01);

        let payment = payment_for_goal(12000.0, 12, Some(0.0));
        assert!((payment - 1000.0).abs() < 0.01);
    }

    #[test]
    fn interest_raises_payment_above_simple_division() {
        // $10,000 at 12% APR over 12 months lands around $888/month
        let payment = payment_for_goal(10000.0, 12, Some(12.0));
        assert!(payment > 10000.0 / 12.0);
        assert!(payment > 850.0 && payment < 950.0);
    }

    #[test]
    fn amortized_payment_exceeds_simple_division_for_any_horizon() {
        for months in [1, 6, 12, 24, 60] {
            let payment = payment_for_goal(10000.0, months, Some(18.0));
            assert!(
                payment > 10000.0 / months as f64,
                "months={} payment={}",
                months,
                payment
            );
        }
    }

    #[test]
    fn fixed_goals_resolve_to_literal_months() {
        let today = date(2024, 1, 15);
        assert_eq!(resolve_goal_months(Some(PayoffGoal::Asap), None, today), Some(1));
        assert_eq!(
            resolve_goal_months(Some(PayoffGoal::SixMonths), None, today),
            Some(6)
        );
        assert_eq!(
            resolve_goal_months(Some(PayoffGoal::TwelveMonths), None, today),
            Some(12)
        );
        assert_eq!(
            resolve_goal_months(Some(PayoffGoal::TwentyFourMonths), None, today),
            Some(24)
        );
        assert_eq!(resolve_goal_months(None, None, today), None);
    }

    #[test]
    fn custom_date_resolves_via_average_month_length() {
        let today = date(2024, 1, 1);
        // ~6 months out
        let months =
            resolve_goal_months(Some(PayoffGoal::CustomDate), Some(date(2024, 7, 1)), today);
        assert_eq!(months, Some(6));
    }

    #[test]
    fn custom_date_in_past_still_yields_one_month() {
        let today = date(2024, 6, 1);
        let months =
            resolve_goal_months(Some(PayoffGoal::CustomDate), Some(date(2024, 1, 1)), today);
        assert_eq!(months, Some(1));

        let months = resolve_goal_months(Some(PayoffGoal::CustomDate), Some(today), today);
        assert_eq!(months, Some(1));
    }

    #[test]
    fn custom_date_without_a_date_means_no_goal() {
        let today = date(2024, 1, 1);
        assert_eq!(resolve_goal_months(Some(PayoffGoal::CustomDate), None, today), None);
    }

    #[test]
    fn empty_debt_list_requires_nothing() {
        let today = date(2024, 1, 1);
        assert_eq!(
            required_monthly_payment(&[], Some(PayoffGoal::Asap), None, today),
            0.0
        );
    }

    #[test]
    fn no_goal_sums_contractual_minimums() {
        let today = date(2024, 1, 1);
        let items = vec![debt(10000.0, 200.0, Some(18.0)), debt(5000.0, 150.0, None)];
        assert_eq!(required_monthly_payment(&items, None, None, today), 350.0);
    }

    #[test]
    fn goal_payment_never_falls_below_minimum() {
        let today = date(2024, 1, 1);
        // Tiny balance over 24 months would amortize well below the
        // contractual minimum; the minimum must win.
        let items = vec![debt(100.0, 50.0, None)];
        let required =
            required_monthly_payment(&items, Some(PayoffGoal::TwentyFourMonths), None, today);
        assert_eq!(required, 50.0);
    }

    #[test]
    fn goal_accelerates_payoff_when_minimum_is_low() {
        let today = date(2024, 1, 1);
        let items = vec![debt(10000.0, 200.0, Some(18.0))];
        let required =
            required_monthly_payment(&items, Some(PayoffGoal::TwelveMonths), None, today);
        assert!(required > 200.0);
        assert!(required > 10000.0 / 12.0);
    }
}
