use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current-state operational metrics and investment costs for one company.
///
/// Monetary fields are in USD. Percentages are whole numbers (25.0 means 25%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusinessInputs {
    pub annual_orders: f64,
    pub avg_order_value: f64,
    pub current_dso: f64,
    pub current_error_rate: f64,
    pub current_leakage: f64,
    pub cost_per_order: f64,
    pub minutes_per_manual: f64,
    pub hourly_cost: f64,
    pub current_cycle_days: f64,
    pub gross_margin: f64,
    pub wacc: f64,
    pub platform_annual_cost: f64,
    pub implementation_cost: f64,
    pub change_management: f64,
}

impl Default for BusinessInputs {
    fn default() -> Self {
        Self {
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
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Accepted (min, max) range per field, as offered by the input form.
pub const INPUT_RANGES: [(&str, f64, f64); 14] = [
    ("annual_orders", 1_000.0, 10_000_000.0),
    ("avg_order_value", 100.0, 1_000_000.0),
    ("current_dso", 20.0, 90.0),
    ("current_error_rate", 5.0, 50.0),
    ("current_leakage", 2.0, 20.0),
    ("cost_per_order", 10.0, 500.0),
    ("minutes_per_manual", 10.0, 60.0),
    ("hourly_cost", 25.0, 200.0),
    ("current_cycle_days", 2.0, 15.0),
    ("gross_margin", 5.0, 50.0),
    ("wacc", 4.0, 15.0),
    ("platform_annual_cost", 50_000.0, 5_000_000.0),
    ("implementation_cost", 25_000.0, 2_000_000.0),
    ("change_management", 10_000.0, 500_000.0),
];

impl BusinessInputs {
    /// Field values in the same order as [`INPUT_RANGES`].
    pub fn values(&self) -> [f64; 14] {
        [
            self.annual_orders,
            self.avg_order_value,
            self.current_dso,
            self.current_error_rate,
            self.current_leakage,
            self.cost_per_order,
            self.minutes_per_manual,
            self.hourly_cost,
            self.current_cycle_days,
            self.gross_margin,
            self.wacc,
            self.platform_annual_cost,
            self.implementation_cost,
            self.change_management,
        ]
    }

    pub fn annual_revenue(&self) -> f64 {
        self.annual_orders * self.avg_order_value
    }

    /// Checks every field against [`INPUT_RANGES`]. The model itself never
    /// calls this; it is the caller's job before handing inputs over.
    pub fn validate(&self) -> Result<(), InputValidationError> {
        for (&(field, min, max), value) in INPUT_RANGES.iter().zip(self.values()) {
            if !value.is_finite() {
                return Err(InputValidationError::NotFinite { field, value });
            }
            if value < min || value > max {
                return Err(InputValidationError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}
