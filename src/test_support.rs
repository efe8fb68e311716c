use crate::domain::inputs::BusinessInputs;

/// The worked example used throughout the tests: 50k orders at $2,500 with
/// $450k of year-1 investment.
pub fn reference_inputs() -> BusinessInputs {
    BusinessInputs {
        annual_orders: 50_000.0,
        avg_order_value: 2_500.0,
        current_dso: 45.0,
        current_error_rate: 25.0,
        current_leakage: 8.0,
        cost_per_order: 85.0,
        minutes_per_manual: 28.0,
        hourly_cost: 75.0,
        current_cycle_days: 5.2,
        gross_margin: 15.0,
        wacc: 8.0,
        platform_annual_cost: 250_000.0,
        implementation_cost: 150_000.0,
        change_management: 50_000.0,
    }
}

/// Relative comparison for values that go through several float operations.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
