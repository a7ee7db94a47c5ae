//! Domain models for BudgetPilot
//!
//! Input records arrive as JSON with camelCase keys (except `balance_now`
//! and `today`); output records use snake_case keys. Both shapes are part
//! of the wire contract and preserved via serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Complete budget input for one calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInput {
    /// Opaque currency label, passed through to the output
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Reference date; when absent the current local date is used
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Current account balance, the sole cash cushion until payday
    #[serde(default)]
    pub balance_now: f64,
    pub income: Income,
    #[serde(default, rename = "fixedExpenses")]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default, rename = "flexibleCaps")]
    pub flexible_caps: FlexibleCaps,
    #[serde(default)]
    pub savings: Savings,
    #[serde(default)]
    pub debts: Debts,
}

impl BudgetInput {
    /// Parse an input record from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Income configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    /// Pay frequency as received on the wire; validated by the engine so
    /// that an unknown value surfaces as an `InvalidInput` error rather
    /// than a deserialization failure
    #[serde(rename = "payFrequency")]
    pub pay_frequency: String,
    #[serde(rename = "netPayAmount")]
    pub net_pay_amount: f64,
    #[serde(rename = "nextPayDate")]
    pub next_pay_date: NaiveDate,
    #[serde(default)]
    pub irregular: Option<IrregularIncome>,
}

/// Irregular income configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrregularIncome {
    pub enabled: bool,
    #[serde(rename = "monthlyAvg")]
    pub monthly_avg: f64,
    /// Reliability tier as received on the wire; unknown tiers fall back
    /// to the medium multiplier
    pub reliability: String,
}

/// Recognized pay frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl PayFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for PayFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(format!("Unknown pay frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reliability tier for irregular income
///
/// Discounts uncertain income: low counts half, medium three quarters,
/// high in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    Low,
    #[default]
    Medium,
    High,
}

impl Reliability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Discount multiplier applied to the irregular monthly average
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Low => 0.5,
            Self::Medium => 0.75,
            Self::High => 1.0,
        }
    }
}

impl std::str::FromStr for Reliability {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown reliability tier: {}", s)),
        }
    }
}

impl std::fmt::Display for Reliability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fixed monthly expense (rent, utilities, insurance, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedExpense {
    pub name: String,
    #[serde(rename = "amountMonthly")]
    pub amount_monthly: f64,
    /// Disabled entries are excluded from totals but retained in the
    /// record, distinguishing "paused" from "removed"
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// A subscription expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub name: String,
    #[serde(rename = "amountMonthly")]
    pub amount_monthly: f64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Flexible spending category ceilings
///
/// Their sum is a soft monthly allotment, not a hard constraint anywhere
/// else in the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlexibleCaps {
    #[serde(default, rename = "eatingOut")]
    pub eating_out: f64,
    #[serde(default)]
    pub entertainment: f64,
    #[serde(default)]
    pub shopping: f64,
    #[serde(default)]
    pub misc: f64,
}

impl FlexibleCaps {
    pub fn total(&self) -> f64 {
        self.eating_out + self.entertainment + self.shopping + self.misc
    }

    /// Scale all four ceilings by the same factor
    pub fn scale(&mut self, factor: f64) {
        self.eating_out *= factor;
        self.entertainment *= factor;
        self.shopping *= factor;
        self.misc *= factor;
    }
}

/// Savings goal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Savings {
    pub enabled: bool,
    pub mode: SavingsMode,
    /// Dollar amount in fixed mode, percentage points in percent mode
    pub value: f64,
}

impl Default for Savings {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: SavingsMode::FixedAmount,
            value: 0.0,
        }
    }
}

/// How the savings value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsMode {
    #[serde(rename = "fixedAmount")]
    FixedAmount,
    #[serde(rename = "percent")]
    Percent,
}

impl SavingsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FixedAmount => "fixedAmount",
            Self::Percent => "percent",
        }
    }
}

impl std::str::FromStr for SavingsMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fixedAmount" => Ok(Self::FixedAmount),
            "percent" => Ok(Self::Percent),
            _ => Err(format!("Unknown savings mode: {}", s)),
        }
    }
}

impl std::fmt::Display for SavingsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An individual debt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtItem {
    /// Free-form label ("creditCard", "studentLoan", ...)
    #[serde(rename = "type")]
    pub debt_type: String,
    pub balance: f64,
    #[serde(rename = "minPaymentMonthly")]
    pub min_payment_monthly: f64,
    /// Annual percentage rate, 0-100; absent or zero means interest-free
    #[serde(default)]
    pub apr: Option<f64>,
}

/// Debt configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Debts {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub items: Vec<DebtItem>,
    #[serde(default, rename = "payoffGoal")]
    pub payoff_goal: Option<PayoffGoal>,
    /// Required only when the goal is `customDate`
    #[serde(default, rename = "payoffGoalDate")]
    pub payoff_goal_date: Option<NaiveDate>,
}

/// Target horizon within which debts should be retired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffGoal {
    #[serde(rename = "ASAP")]
    Asap,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "12mo")]
    TwelveMonths,
    #[serde(rename = "24mo")]
    TwentyFourMonths,
    #[serde(rename = "customDate")]
    CustomDate,
}

impl PayoffGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asap => "ASAP",
            Self::SixMonths => "6mo",
            Self::TwelveMonths => "12mo",
            Self::TwentyFourMonths => "24mo",
            Self::CustomDate => "customDate",
        }
    }
}

impl std::str::FromStr for PayoffGoal {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ASAP" => Ok(Self::Asap),
            "6mo" => Ok(Self::SixMonths),
            "12mo" => Ok(Self::TwelveMonths),
            "24mo" => Ok(Self::TwentyFourMonths),
            "customDate" => Ok(Self::CustomDate),
            _ => Err(format!("Unknown payoff goal: {}", s)),
        }
    }
}

impl std::fmt::Display for PayoffGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived monthly expense totals
///
/// Recomputed in full on every calculation; never partially mutated and
/// reused across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub fixed_monthly: f64,
    pub subs_monthly: f64,
    pub flexible_caps_monthly: f64,
    pub savings_monthly: f64,
    pub debt_required_monthly: f64,
    /// fixed + subscriptions + savings + debt required
    pub essential_monthly: f64,
}

/// A what-if scenario: one parameter change and its effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    /// Sparse object naming only the fields that changed
    pub changes: serde_json::Value,
    pub safe_to_spend_today: f64,
    /// Signed change versus the current safe-to-spend per day
    pub delta: f64,
}

/// Budget calculation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetOutput {
    pub feasible: bool,
    pub currency: String,
    pub days_until_payday: i64,
    pub income_monthly: f64,
    pub totals: MonthlyTotals,
    pub safe_to_spend_until_payday: f64,
    pub safe_to_spend_today: f64,
    pub warnings: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

impl BudgetOutput {
    /// Serialize the output record to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the output record to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_currency() -> String {
    "CAD".to_string()
}

fn default_true() -> bool {
    true
}
