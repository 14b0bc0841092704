//! SIP calculator — systematic investment plan maturity.

use crate::error::{AdvisorError, Result};
use crate::types::sip::{SipBreakdown, SipRequest, SipResponse};

/// Compute the maturity breakdown for a SIP.
///
/// Formula: `M = P × ((1 + r)^n − 1) / r × (1 + r)` where `P` is the
/// monthly investment, `r = rate / 100 / 12` the monthly rate, and
/// `n = years × 12` the number of months. A zero rate degenerates to the
/// simple sum `P × n`. Amounts are rounded to 2 decimals.
pub fn calculate(request: &SipRequest) -> Result<SipResponse> {
    let p = request.monthly_investment;
    let annual_rate = request.rate;
    let years = request.years;

    if p <= 0.0 || annual_rate < 0.0 || years <= 0.0 {
        return Err(AdvisorError::InvalidArgument(
            "Invalid input values. All values must be positive.".to_owned(),
        ));
    }

    let r = annual_rate / 100.0 / 12.0;
    let n = years * 12.0;

    let maturity = if r == 0.0 {
        p * n
    } else {
        let compound_factor = (1.0 + r).powf(n);
        p * ((compound_factor - 1.0) / r) * (1.0 + r)
    };

    let total_invested = p * n;
    let estimated_returns = maturity - total_invested;

    Ok(SipResponse {
        success: true,
        data: SipBreakdown {
            monthly_investment: p,
            annual_rate,
            years,
            total_invested: round2(total_invested),
            estimated_returns: round2(estimated_returns),
            final_amount: round2(maturity),
        },
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
