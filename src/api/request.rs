//! Request types for the office attendance API.

use serde::{Deserialize, Serialize};

use crate::models::MonthScope;

/// Request body for `PUT /current`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetMonthRequest {
    /// The month to view, as `yyyy-MM`.
    pub month: MonthScope,
}

/// Query parameters accepted by the month view endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateQuery {
    /// Overrides the configured minimum rate for this request.
    #[serde(default)]
    pub min_rate: Option<f64>,
}
