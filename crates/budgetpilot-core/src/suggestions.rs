//! What-if suggestion generation
//!
//! Each candidate clones the original input, applies exactly one change,
//! and re-runs the pipeline with suggestion generation disabled. The
//! resulting per-day safe-to-spend and its signed delta versus the current
//! figure are reported. Candidates whose preconditions are unmet (or whose
//! sub-run fails) are simply omitted; generation itself never fails.

use serde_json::json;

use crate::engine::{calculate_with_options, round2};
use crate::models::{BudgetInput, MonthlyTotals, PayoffGoal, SavingsMode, Suggestion};

/// Ceiling for the percent-mode savings bump
const MAX_SAVINGS_PERCENT: f64 = 50.0;

/// Generate suggestions for the current plan.
///
/// An infeasible plan gets candidates that relax commitments; a feasible
/// plan gets candidates that tighten them. Output order is the fixed
/// decision-table order; no ranking is applied.
pub fn generate(
    input: &BudgetInput,
    totals: &MonthlyTotals,
    current_safe_per_day: f64,
    feasible: bool,
) -> Vec<Suggestion> {
    if feasible {
        optimization_suggestions(input, totals, current_safe_per_day)
    } else {
        recovery_suggestions(input, totals, current_safe_per_day)
    }
}

/// Candidates that relax commitments until the plan can become feasible.
fn recovery_suggestions(
    input: &BudgetInput,
    totals: &MonthlyTotals,
    current_safe_per_day: f64,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    // 1. Zero out savings
    if input.savings.enabled {
        let mut modified = input.clone();
        modified.savings.enabled = false;
        modified.savings.value = 0.0;

        if let Some(suggestion) = run_candidate(
            &modified,
            "Reduce savings to $0",
            json!({"savings": {"enabled": false, "value": 0.0}}),
            current_safe_per_day,
        ) {
            suggestions.push(suggestion);
        }
    }

    // 2 & 3. Relax the debt payoff goal: stretch it to 24 months, and
    // separately drop it entirely (minimum payments only).
    if input.debts.enabled && input.debts.payoff_goal.is_some() {
        let mut modified = input.clone();
        modified.debts.payoff_goal = Some(PayoffGoal::TwentyFourMonths);
        modified.debts.payoff_goal_date = None;

        if let Some(suggestion) = run_candidate(
            &modified,
            "Extend debt payoff goal to 24 months",
            json!({"debts": {"payoffGoal": "24mo"}}),
            current_safe_per_day,
        ) {
            suggestions.push(suggestion);
        }

        let mut modified = input.clone();
        modified.debts.payoff_goal = None;
        modified.debts.payoff_goal_date = None;

        if let Some(suggestion) = run_candidate(
            &modified,
            "Use minimum debt payments only",
            json!({"debts": {"payoffGoal": null}}),
            current_safe_per_day,
        ) {
            suggestions.push(suggestion);
        }
    }

    // 4. Trim all four flexible caps by 20%
    if totals.flexible_caps_monthly > 0.0 {
        let mut modified = input.clone();
        modified.flexible_caps.scale(0.8);

        if let Some(suggestion) = run_candidate(
            &modified,
            "Reduce flexible spending caps by 20%",
            caps_changes(&modified),
            current_safe_per_day,
        ) {
            suggestions.push(suggestion);
        }
    }

    suggestions
}

/// Candidates that tighten a plan which already has slack.
fn optimization_suggestions(
    input: &BudgetInput,
    totals: &MonthlyTotals,
    current_safe_per_day: f64,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    // 1. Save more (or start saving)
    if input.savings.enabled {
        let mut modified = input.clone();
        let (title, changes) = match input.savings.mode {
            SavingsMode::Percent => {
                let new_value = (input.savings.value + 5.0).min(MAX_SAVINGS_PERCENT);
                modified.savings.value = new_value;
                (
                    format!("Increase savings to {}%", new_value),
                    json!({"savings": {"value": new_value}}),
                )
            }
            SavingsMode::FixedAmount => {
                let new_value = input.savings.value + 50.0;
                modified.savings.value = new_value;
                (
                    "Increase savings by $50/month".to_string(),
                    json!({"savings": {"value": new_value}}),
                )
            }
        };

        if let Some(suggestion) =
            run_candidate(&modified, &title, changes, current_safe_per_day)
        {
            suggestions.push(suggestion);
        }
    } else {
        let mut modified = input.clone();
        modified.savings.enabled = true;
        modified.savings.mode = SavingsMode::FixedAmount;
        modified.savings.value = 50.0;

        if let Some(suggestion) = run_candidate(
            &modified,
            "Start saving $50/month",
            json!({"savings": {"enabled": true, "mode": "fixedAmount", "value": 50.0}}),
            current_safe_per_day,
        ) {
            suggestions.push(suggestion);
        }
    }

    // 2. Pay debt off faster
    if input.debts.enabled
        && !input.debts.items.is_empty()
        && input.debts.payoff_goal != Some(PayoffGoal::TwelveMonths)
    {
        let mut modified = input.clone();
        modified.debts.payoff_goal = Some(PayoffGoal::TwelveMonths);
        modified.debts.payoff_goal_date = None;

        if let Some(suggestion) = run_candidate(
            &modified,
            "Pay off debt in 12 months",
            json!({"debts": {"payoffGoal": "12mo"}}),
            current_safe_per_day,
        ) {
            suggestions.push(suggestion);
        }
    }

    // 3. Add headroom to the flexible caps
    if totals.flexible_caps_monthly > 0.0 {
        let mut modified = input.clone();
        modified.flexible_caps.scale(1.05);

        if let Some(suggestion) = run_candidate(
            &modified,
            "Add 5% buffer to flexible spending",
            caps_changes(&modified),
            current_safe_per_day,
        ) {
            suggestions.push(suggestion);
        }
    }

    suggestions
}

/// Re-run the pipeline against a perturbed input and record the outcome.
///
/// Suggestions are disabled on the sub-run, bounding recursion at depth 1.
/// A failing sub-run drops the candidate rather than surfacing an error.
fn run_candidate(
    modified: &BudgetInput,
    title: &str,
    changes: serde_json::Value,
    current_safe_per_day: f64,
) -> Option<Suggestion> {
    let result = match calculate_with_options(modified, false) {
        Ok(result) => result,
        Err(e) => {
            tracing::debug!(title, error = %e, "Skipping suggestion candidate");
            return None;
        }
    };

    Some(Suggestion {
        title: title.to_string(),
        changes,
        safe_to_spend_today: result.safe_to_spend_today,
        delta: round2(result.safe_to_spend_today - current_safe_per_day),
    })
}

fn caps_changes(modified: &BudgetInput) -> serde_json::Value {
    json!({
        "flexibleCaps": {
            "eatingOut": modified.flexible_caps.eating_out,
            "entertainment": modified.flexible_caps.entertainment,
            "shopping": modified.flexible_caps.shopping,
            "misc": modified.flexible_caps.misc,
        }
    })
}
