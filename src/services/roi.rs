use crate::domain::results::{BenefitResult, InvestmentResult, RoiMetrics};

pub const DISCOUNT_RATE: f64 = 0.08;

/// Payback, 3-year NPV and ROI from one scenario's benefits and costs.
///
/// Both arguments must be in the same currency. Degenerate cases:
/// - no benefit: `payback_months` is `f64::INFINITY`
/// - no year-1 cost: `roi_year1` is `0.0`
/// - no 3-year investment: `roi_3year` is `f64::INFINITY` if the three years
///   are net positive, else `0.0`
pub fn compute_roi(benefits: &BenefitResult, costs: &InvestmentResult) -> RoiMetrics {
    let annual_benefit = benefits.total_annual;

    let payback_months = if annual_benefit > 0.0 {
        costs.year1 / annual_benefit * 12.0
    } else {
        f64::INFINITY
    };

    let net_by_year = [
        annual_benefit - costs.year1,
        annual_benefit - costs.recurring,
        annual_benefit - costs.recurring,
    ];
    let npv: f64 = net_by_year
        .iter()
        .enumerate()
        .map(|(year, net)| net / (1.0 + DISCOUNT_RATE).powi(year as i32 + 1))
        .sum();

    let roi_year1 = if costs.year1 > 0.0 {
        (annual_benefit - costs.year1) / costs.year1 * 100.0
    } else {
        0.0
    };

    let total_investment = costs.three_year_total();
    let total_benefits = annual_benefit * 3.0;
    let roi_3year = if total_investment > 0.0 {
        (total_benefits - total_investment) / total_investment * 100.0
    } else if total_benefits > total_investment {
        f64::INFINITY
    } else {
        0.0
    };

    RoiMetrics {
        payback_months,
        npv,
        roi_year1,
        roi_3year,
    }
}
