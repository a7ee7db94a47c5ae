//! BudgetPilot Core Library
//!
//! Deterministic safe-to-spend calculation engine for a household budget:
//! - Domain model for income, expenses, savings, and debts
//! - Income normalization across pay frequencies
//! - Debt amortization and payoff-goal payments
//! - Monthly totals aggregation and feasibility
//! - What-if suggestion generation
//!
//! Every calculation is a pure, stateless function of its input record
//! and a reference date; there is no persistence, no I/O, and no shared
//! state between calls.

pub mod debt;
pub mod engine;
pub mod error;
pub mod income;
pub mod models;
pub mod suggestions;
pub mod totals;

/// Average days per month, used uniformly as the monthly-to-daily
/// conversion constant.
pub const DAYS_PER_MONTH: f64 = 30.44;

pub use engine::calculate;
pub use error::{Error, Result};
pub use models::{
    BudgetInput, BudgetOutput, DebtItem, Debts, FixedExpense, FlexibleCaps, Income,
    IrregularIncome, MonthlyTotals, PayFrequency, PayoffGoal, Reliability, Savings, SavingsMode,
    Subscription, Suggestion,
};
