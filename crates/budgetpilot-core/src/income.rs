//! Income normalization
//!
//! Converts a pay-period amount plus optional irregular income into a
//! single monthly figure.

use crate::error::{Error, Result};
use crate::models::{PayFrequency, Reliability};

/// Normalize income to a monthly amount.
///
/// The base pay is scaled by frequency (weekly ×52/12, biweekly ×26/12,
/// monthly unchanged). Irregular income is added after a reliability
/// discount; an unrecognized reliability tier falls back to the medium
/// multiplier rather than failing.
pub fn normalize_to_monthly(
    pay_frequency: &str,
    net_pay_amount: f64,
    irregular_monthly_avg: f64,
    irregular_reliability: &str,
) -> Result<f64> {
    let frequency: PayFrequency = pay_frequency.parse().map_err(Error::InvalidInput)?;

    let base_monthly = match frequency {
        PayFrequency::Weekly => net_pay_amount * 52.0 / 12.0,
        PayFrequency::Biweekly => net_pay_amount * 26.0 / 12.0,
        PayFrequency::Monthly => net_pay_amount,
    };

    let reliability: Reliability = irregular_reliability.parse().unwrap_or_default();
    let irregular_adjusted = irregular_monthly_avg * reliability.multiplier();

    Ok(base_monthly + irregular_adjusted)
}
