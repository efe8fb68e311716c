use tracing::debug;

use crate::domain::currency::Currency;
use crate::domain::inputs::BusinessInputs;
use crate::domain::results::{SensitivityRow, SensitivityVariable};
use crate::domain::scenario::Scenario;
use crate::services::benefits::compute_benefits;
use crate::services::investment::compute_investment;
use crate::services::roi::compute_roi;

/// One test value of the sweep. Relative points are percentages applied to
/// the original input value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepPoint {
    Absolute(f64),
    Relative(f64),
}

impl SweepPoint {
    pub fn label(self) -> String {
        match self {
            SweepPoint::Absolute(value) => format!("{value}"),
            SweepPoint::Relative(pct) => format!("{pct:+.0}%"),
        }
    }

    fn resolve(self, original: f64) -> f64 {
        match self {
            SweepPoint::Absolute(value) => value,
            SweepPoint::Relative(pct) => original * (1.0 + pct / 100.0),
        }
    }
}

pub fn sweep_points(variable: SensitivityVariable) -> [SweepPoint; 5] {
    use SweepPoint::{Absolute, Relative};
    match variable {
        SensitivityVariable::DsoImprovement => {
            [Absolute(5.0), Absolute(7.5), Absolute(10.0), Absolute(12.5), Absolute(15.0)]
        }
        SensitivityVariable::ErrorReduction => {
            [Absolute(4.0), Absolute(6.0), Absolute(8.0), Absolute(10.0), Absolute(12.0)]
        }
        SensitivityVariable::LeakagePrevention => {
            [Absolute(2.0), Absolute(3.0), Absolute(5.0), Absolute(6.0), Absolute(7.0)]
        }
        SensitivityVariable::AutomationRate => {
            [Absolute(20.0), Absolute(24.0), Absolute(28.0), Absolute(32.0), Absolute(36.0)]
        }
        SensitivityVariable::PlatformCost => {
            [Relative(-20.0), Relative(-10.0), Relative(0.0), Relative(10.0), Relative(20.0)]
        }
    }
}

/// The input field a variable perturbs.
fn field_mut(variable: SensitivityVariable, inputs: &mut BusinessInputs) -> &mut f64 {
    match variable {
        SensitivityVariable::DsoImprovement => &mut inputs.current_dso,
        SensitivityVariable::ErrorReduction => &mut inputs.current_error_rate,
        SensitivityVariable::LeakagePrevention => &mut inputs.current_leakage,
        SensitivityVariable::AutomationRate => &mut inputs.minutes_per_manual,
        SensitivityVariable::PlatformCost => &mut inputs.platform_annual_cost,
    }
}

/// Copy of `inputs` with the variable's field set to the sweep point.
pub fn perturb(
    inputs: &BusinessInputs,
    variable: SensitivityVariable,
    point: SweepPoint,
) -> BusinessInputs {
    let mut perturbed = inputs.clone();
    let field = field_mut(variable, &mut perturbed);
    *field = point.resolve(*field);
    perturbed
}

/// Sweeps each variable one at a time and reports the 3-year ROI change
/// against `base_roi_3year`.
///
/// Always evaluated with the Base Case multipliers, whatever scenario the
/// caller is presenting. Rows come back grouped by variable, in sweep order.
pub fn analyze_sensitivity(
    inputs: &BusinessInputs,
    base_roi_3year: f64,
    currency: Currency,
) -> Vec<SensitivityRow> {
    let profile = Scenario::Base.profile();
    let mut rows = Vec::with_capacity(SensitivityVariable::ALL.len() * 5);

    for variable in SensitivityVariable::ALL {
        for point in sweep_points(variable) {
            let test_inputs = perturb(inputs, variable, point);
            let benefits = compute_benefits(&test_inputs, profile, currency);
            let costs = compute_investment(&test_inputs, profile, currency);
            let metrics = compute_roi(&benefits, &costs);

            rows.push(SensitivityRow {
                variable,
                value: point.label(),
                roi: metrics.roi_3year,
                roi_change: metrics.roi_3year - base_roi_3year,
            });
        }
    }

    debug!(rows = rows.len(), base_roi_3year, "sensitivity sweep finished");
    rows
}
