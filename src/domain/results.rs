use serde::{Serialize, Serializer};

use crate::domain::currency::Currency;

/// Annual benefit per category plus the improved operational metrics.
///
/// Monetary fields are in `currency`; target metrics are days or percentages
/// and are never converted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitResult {
    pub currency: Currency,
    pub working_capital: f64,
    pub error_reduction: f64,
    pub leakage_prevention: f64,
    pub labor_savings: f64,
    pub capacity_increase: f64,
    pub total_annual: f64,
    pub cash_freed: f64,
    pub target_dso: f64,
    pub target_error_rate: f64,
    pub target_leakage: f64,
    pub target_cycle_days: f64,
    pub automation_improvement: f64,
}

impl BenefitResult {
    /// The five benefit categories with their display labels.
    pub fn categories(&self) -> [(&'static str, f64); 5] {
        [
            ("Working Capital", self.working_capital),
            ("Error Reduction", self.error_reduction),
            ("Leakage Prevention", self.leakage_prevention),
            ("Labor Savings", self.labor_savings),
            ("Capacity Increase", self.capacity_increase),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentResult {
    pub currency: Currency,
    pub platform: f64,
    pub implementation: f64,
    pub change_management: f64,
    pub year1: f64,
    pub recurring: f64,
}

impl InvestmentResult {
    pub fn three_year_total(&self) -> f64 {
        self.year1 + self.recurring * 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiMetrics {
    /// `f64::INFINITY` when the investment never pays back.
    #[serde(serialize_with = "serialize_payback")]
    pub payback_months: f64,
    pub npv: f64,
    pub roi_year1: f64,
    /// `f64::INFINITY` when there is a benefit but no investment.
    #[serde(serialize_with = "serialize_roi")]
    pub roi_3year: f64,
}

/// Writes an infinite payback as `"Never"`. JSON has no infinity and would
/// otherwise emit `null`.
pub fn serialize_payback<S: Serializer>(months: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if months.is_infinite() {
        serializer.serialize_str("Never")
    } else {
        serializer.serialize_f64(*months)
    }
}

/// Writes an infinite ROI as `"Unbounded"`.
pub fn serialize_roi<S: Serializer>(roi: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if roi.is_infinite() {
        serializer.serialize_str("Unbounded")
    } else {
        serializer.serialize_f64(*roi)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SensitivityVariable {
    #[serde(rename = "DSO Improvement")]
    DsoImprovement,
    #[serde(rename = "Error Reduction")]
    ErrorReduction,
    #[serde(rename = "Leakage Prevention")]
    LeakagePrevention,
    #[serde(rename = "Automation Rate")]
    AutomationRate,
    #[serde(rename = "Platform Cost")]
    PlatformCost,
}

impl SensitivityVariable {
    pub const ALL: [SensitivityVariable; 5] = [
        SensitivityVariable::DsoImprovement,
        SensitivityVariable::ErrorReduction,
        SensitivityVariable::LeakagePrevention,
        SensitivityVariable::AutomationRate,
        SensitivityVariable::PlatformCost,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SensitivityVariable::DsoImprovement => "DSO Improvement",
            SensitivityVariable::ErrorReduction => "Error Reduction",
            SensitivityVariable::LeakagePrevention => "Leakage Prevention",
            SensitivityVariable::AutomationRate => "Automation Rate",
            SensitivityVariable::PlatformCost => "Platform Cost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityRow {
    pub variable: SensitivityVariable,
    pub value: String,
    #[serde(serialize_with = "serialize_roi")]
    pub roi: f64,
    #[serde(serialize_with = "serialize_roi")]
    pub roi_change: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(payback_months: f64, roi_3year: f64) -> RoiMetrics {
        RoiMetrics {
            payback_months,
            npv: -864_925.64,
            roi_year1: -95.0,
            roi_3year,
        }
    }

    #[test]
    fn infinite_payback_is_written_as_never_in_json() {
        let json = serde_json::to_value(metrics(f64::INFINITY, -90.0)).unwrap();
        assert_eq!(json["payback_months"], "Never");
        assert_eq!(json["roi_3year"], -90.0);
        assert_eq!(json["npv"], -864_925.64);
    }

    #[test]
    fn infinite_roi_is_written_as_unbounded_in_yaml() {
        let yaml = serde_yaml::to_string(&metrics(0.0, f64::INFINITY)).unwrap();
        assert!(yaml.contains("roi_3year: Unbounded"));
        assert!(yaml.contains("payback_months: 0.0"));
    }

    #[test]
    fn finite_metrics_stay_numeric() {
        let json = serde_json::to_value(metrics(1.1, 1389.35)).unwrap();
        assert_eq!(json["payback_months"], 1.1);
        assert_eq!(json["roi_3year"], 1389.35);
    }
}
