//! Budget calculation handler

use axum::Json;

use budgetpilot_core::{BudgetInput, BudgetOutput, Error};

use crate::AppError;

/// POST /api/calculate - Run one budget calculation
///
/// The request body is a full `BudgetInput` record; malformed JSON is
/// rejected by the extractor before the engine runs. Engine-level value
/// validation (an unrecognized pay frequency) maps to 400; anything else
/// maps to 500.
pub async fn calculate_budget(
    Json(input): Json<BudgetInput>,
) -> Result<Json<BudgetOutput>, AppError> {
    let output = match budgetpilot_core::calculate(&input) {
        Ok(output) => output,
        Err(err @ Error::InvalidInput(_)) => {
            return Err(AppError::bad_request(&err.to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(output))
}
