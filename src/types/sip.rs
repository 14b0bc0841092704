//! SIP calculator request/response types.

use serde::{Deserialize, Serialize};

/// Inputs to a SIP maturity calculation.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipRequest {
    /// Amount invested each month.
    pub monthly_investment: f64,
    /// Expected annual return, in percent.
    pub rate: f64,
    /// Investment horizon, in years.
    pub years: f64,
}

/// Computed maturity breakdown, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipBreakdown {
    pub monthly_investment: f64,
    pub annual_rate: f64,
    pub years: f64,
    pub total_invested: f64,
    pub estimated_returns: f64,
    pub final_amount: f64,
}

/// Response shape of the SIP calculate operation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SipResponse {
    pub success: bool,
    pub data: SipBreakdown,
}
