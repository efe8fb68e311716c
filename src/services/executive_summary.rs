use chrono::NaiveDateTime;

use crate::services::business_case::BusinessCase;
use crate::services::number_format::{format_money, format_payback, format_percent};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Plain-text executive summary for the selected scenario.
pub fn format_executive_summary(case: &BusinessCase, generated_at: NaiveDateTime) -> String {
    let currency = case.currency;
    let inputs = &case.inputs;
    let benefits = &case.selected.benefits;
    let costs = &case.selected.investment;
    let metrics = &case.selected.metrics;
    let money = |value: f64| format_money(value, currency);

    let mut lines = Vec::new();
    lines.push("ORDER MANAGEMENT AI - EXECUTIVE SUMMARY".to_string());
    lines.push(format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT)));
    lines.push(format!("Currency: {currency}"));
    lines.push(format!("Selected Scenario: {}", case.selected.scenario));
    lines.push(String::new());

    lines.push("KEY FINANCIAL METRICS".to_string());
    lines.push(format!("Total Annual Benefit: {}", money(benefits.total_annual)));
    lines.push(format!("3-Year NPV: {}", money(metrics.npv)));
    lines.push(format!("Payback Period: {}", format_payback(metrics.payback_months)));
    lines.push(format!("3-Year ROI: {}", format_percent(metrics.roi_3year)));
    lines.push(String::new());

    lines.push("BENEFIT BREAKDOWN".to_string());
    for (label, amount) in benefits.categories() {
        lines.push(format!("{label}: {}", money(amount)));
    }
    lines.push(String::new());

    lines.push("INVESTMENT REQUIRED".to_string());
    lines.push(format!("Year 1: {}", money(costs.year1)));
    lines.push(format!("Recurring (Years 2-3): {}", money(costs.recurring)));
    lines.push(String::new());

    lines.push("OPERATIONAL IMPROVEMENTS".to_string());
    lines.push(format!(
        "DSO: {:.0} → {:.0} days",
        inputs.current_dso, benefits.target_dso
    ));
    lines.push(format!(
        "Error Rate: {:.1}% → {:.1}%",
        inputs.current_error_rate, benefits.target_error_rate
    ));
    lines.push(format!(
        "Revenue Leakage: {:.1}% → {:.1}%",
        inputs.current_leakage, benefits.target_leakage
    ));
    lines.push(format!(
        "Order Cycle: {:.1} → {:.1} days",
        inputs.current_cycle_days, benefits.target_cycle_days
    ));
    lines.push(format!(
        "Automation Increase: +{:.0}%",
        benefits.automation_improvement
    ));
    lines.push(String::new());

    lines.push("SCENARIO COMPARISON".to_string());
    for row in &case.comparison {
        lines.push(format!(
            "{} 3-Year ROI: {}",
            row.scenario,
            format_percent(row.roi_3year)
        ));
    }

    let mut summary = lines.join("\n");
    summary.push('\n');
    summary
}
