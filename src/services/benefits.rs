use tracing::debug;

use crate::domain::currency::{Currency, convert};
use crate::domain::inputs::BusinessInputs;
use crate::domain::results::BenefitResult;
use crate::domain::scenario::ScenarioProfile;

/// Days of DSO removed by the platform before scenario scaling.
pub const BASE_DSO_IMPROVEMENT_DAYS: f64 = 10.0;
/// Error rate (%) the platform drives towards.
pub const ERROR_RATE_FLOOR: f64 = 8.0;
/// Leakage (%) the platform drives towards.
pub const LEAKAGE_FLOOR: f64 = 3.0;
pub const BASE_CYCLE_IMPROVEMENT_DAYS: f64 = 2.2;
/// Percentage points of additional order automation.
pub const BASE_AUTOMATION_IMPROVEMENT: f64 = 23.0;
/// Share of freed cycle time converted into extra orders.
pub const CAPACITY_CAPTURE: f64 = 0.3;

/// Derives the five annual benefit categories and the target operational
/// metrics. All amounts are computed in USD and converted at the end.
///
/// `inputs.current_cycle_days` must be greater than zero.
pub fn compute_benefits(
    inputs: &BusinessInputs,
    scenario: &ScenarioProfile,
    currency: Currency,
) -> BenefitResult {
    debug_assert!(inputs.current_cycle_days > 0.0);

    let annual_revenue = inputs.annual_revenue();

    let target_dso = inputs.current_dso - BASE_DSO_IMPROVEMENT_DAYS * scenario.dso_improvement;
    let target_error_rate = inputs.current_error_rate
        - (inputs.current_error_rate - ERROR_RATE_FLOOR) * scenario.error_reduction;
    let target_leakage =
        inputs.current_leakage - (inputs.current_leakage - LEAKAGE_FLOOR) * scenario.leakage_reduction;
    let target_cycle_days =
        inputs.current_cycle_days - BASE_CYCLE_IMPROVEMENT_DAYS * scenario.cycle_time_improvement;
    let automation_improvement = BASE_AUTOMATION_IMPROVEMENT * scenario.automation_rate;

    let cash_freed = (inputs.current_dso - target_dso) / 365.0 * annual_revenue;
    let working_capital = cash_freed * (inputs.wacc / 100.0);

    let errors_eliminated =
        inputs.annual_orders * (inputs.current_error_rate - target_error_rate) / 100.0;
    let error_reduction = errors_eliminated * inputs.cost_per_order;

    let leakage_prevented = annual_revenue * (inputs.current_leakage - target_leakage) / 100.0;
    let leakage_prevention = leakage_prevented * (inputs.gross_margin / 100.0);

    let hours_saved =
        inputs.annual_orders * (automation_improvement / 100.0) * inputs.minutes_per_manual / 60.0;
    let labor_savings = hours_saved * inputs.hourly_cost;

    let cycle_reduction_pct =
        (inputs.current_cycle_days - target_cycle_days) / inputs.current_cycle_days;
    let extra_orders = inputs.annual_orders * cycle_reduction_pct * CAPACITY_CAPTURE;
    let capacity_increase = extra_orders * inputs.avg_order_value * (inputs.gross_margin / 100.0);

    let total_annual =
        working_capital + error_reduction + leakage_prevention + labor_savings + capacity_increase;

    debug!(
        scenario = scenario.name,
        total_annual_usd = total_annual,
        "computed benefits"
    );

    let to_target = |amount: f64| convert(amount, Currency::Usd, currency);
    BenefitResult {
        currency,
        working_capital: to_target(working_capital),
        error_reduction: to_target(error_reduction),
        leakage_prevention: to_target(leakage_prevention),
        labor_savings: to_target(labor_savings),
        capacity_increase: to_target(capacity_increase),
        total_annual: to_target(total_annual),
        cash_freed: to_target(cash_freed),
        target_dso,
        target_error_rate,
        target_leakage,
        target_cycle_days,
        automation_improvement,
    }
}
