use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::results::{SensitivityRow, SensitivityVariable};

/// Spread of 3-year ROI changes for one variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TornadoBar {
    pub variable: SensitivityVariable,
    pub min_impact: f64,
    pub max_impact: f64,
    pub range: f64,
}

/// Reduces sweep rows to one bar per variable, most sensitive first.
/// Variables with equal range keep their first-seen order.
pub fn rank_tornado(rows: &[SensitivityRow]) -> Vec<TornadoBar> {
    let mut bars: Vec<TornadoBar> = Vec::new();
    for row in rows {
        match bars.iter_mut().find(|bar| bar.variable == row.variable) {
            Some(bar) => {
                bar.min_impact = bar.min_impact.min(row.roi_change);
                bar.max_impact = bar.max_impact.max(row.roi_change);
            }
            None => bars.push(TornadoBar {
                variable: row.variable,
                min_impact: row.roi_change,
                max_impact: row.roi_change,
                range: 0.0,
            }),
        }
    }

    for bar in &mut bars {
        bar.range = bar.max_impact - bar.min_impact;
    }
    bars.sort_by(|a, b| b.range.partial_cmp(&a.range).unwrap_or(Ordering::Equal));
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(variable: SensitivityVariable, roi_change: f64) -> SensitivityRow {
        SensitivityRow {
            variable,
            value: String::new(),
            roi: 100.0 + roi_change,
            roi_change,
        }
    }

    #[test]
    fn rank_tornado_reduces_rows_to_min_max_and_range() {
        let rows = vec![
            row(SensitivityVariable::ErrorReduction, -10.0),
            row(SensitivityVariable::ErrorReduction, 5.0),
            row(SensitivityVariable::ErrorReduction, -2.0),
        ];
        let bars = rank_tornado(&rows);

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].min_impact, -10.0);
        assert_eq!(bars[0].max_impact, 5.0);
        assert_eq!(bars[0].range, 15.0);
    }

    #[test]
    fn rank_tornado_sorts_by_range_descending() {
        let rows = vec![
            row(SensitivityVariable::DsoImprovement, 0.0),
            row(SensitivityVariable::DsoImprovement, 1.0),
            row(SensitivityVariable::PlatformCost, -50.0),
            row(SensitivityVariable::PlatformCost, 60.0),
            row(SensitivityVariable::AutomationRate, -5.0),
            row(SensitivityVariable::AutomationRate, 5.0),
        ];
        let order: Vec<SensitivityVariable> =
            rank_tornado(&rows).into_iter().map(|bar| bar.variable).collect();

        assert_eq!(
            order,
            vec![
                SensitivityVariable::PlatformCost,
                SensitivityVariable::AutomationRate,
                SensitivityVariable::DsoImprovement,
            ]
        );
    }

    #[test]
    fn rank_tornado_keeps_first_seen_order_for_ties() {
        let rows = vec![
            row(SensitivityVariable::LeakagePrevention, 0.0),
            row(SensitivityVariable::DsoImprovement, 0.0),
        ];
        let bars = rank_tornado(&rows);
        assert_eq!(bars[0].variable, SensitivityVariable::LeakagePrevention);
        assert_eq!(bars[1].variable, SensitivityVariable::DsoImprovement);
    }

    #[test]
    fn rank_tornado_of_nothing_is_empty() {
        assert!(rank_tornado(&[]).is_empty());
    }
}
