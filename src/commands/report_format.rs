use bizcase::domain::scenario::ScenarioProfile;
use bizcase::services::business_case::{BusinessCase, ScenarioOutcome};
use bizcase::services::number_format::{format_money, format_payback, format_percent};
use bizcase::services::tornado::TornadoBar;

pub fn format_business_case_report(case: &BusinessCase) -> String {
    let currency = case.currency;
    let money = |value: f64| format_money(value, currency);
    let selected = &case.selected;
    let profile = selected.scenario.profile();

    let mut lines = Vec::new();
    lines.push("Business Case Report".to_string());
    lines.push(format!("Scenario: {} ({})", profile.name, profile.description));
    lines.push(format!("Currency: {currency}"));
    lines.push(format!(
        "Total annual benefit: {}",
        money(selected.benefits.total_annual)
    ));
    lines.push(format!("3-year NPV: {}", money(selected.metrics.npv)));
    lines.push(format!(
        "Payback: {}",
        format_payback(selected.metrics.payback_months)
    ));
    lines.push(format!(
        "Year-1 ROI: {}",
        format_percent(selected.metrics.roi_year1)
    ));
    lines.push(format!(
        "3-year ROI: {}",
        format_percent(selected.metrics.roi_3year)
    ));
    lines.push(String::new());

    lines.push("Annual Benefit Breakdown:".to_string());
    for (label, amount) in selected.benefits.categories() {
        lines.push(format!("{label}: {}", money(amount)));
    }
    lines.push(format!(
        "Year 1 Investment: {}",
        money(selected.investment.year1)
    ));
    lines.push(String::new());

    lines.push("Benefits by Scenario:".to_string());
    lines.push(scenario_header("Benefit Category", &case.scenarios));
    for (idx, (label, _)) in selected.benefits.categories().into_iter().enumerate() {
        lines.push(scenario_row(label, &case.scenarios, |outcome| {
            money(outcome.benefits.categories()[idx].1)
        }));
    }
    lines.push(scenario_row("Total Annual", &case.scenarios, |outcome| {
        money(outcome.benefits.total_annual)
    }));
    lines.push(String::new());

    lines.push("ROI Metrics by Scenario:".to_string());
    lines.push(scenario_header("Metric", &case.scenarios));
    lines.push(scenario_row("3-Year NPV", &case.scenarios, |outcome| {
        money(outcome.metrics.npv)
    }));
    lines.push(scenario_row("Payback", &case.scenarios, |outcome| {
        format_payback(outcome.metrics.payback_months)
    }));
    lines.push(scenario_row("Year 1 ROI", &case.scenarios, |outcome| {
        format_percent(outcome.metrics.roi_year1)
    }));
    lines.push(scenario_row("3-Year ROI", &case.scenarios, |outcome| {
        format_percent(outcome.metrics.roi_3year)
    }));
    lines.push(String::new());

    lines.push("Scenario Comparison (3 years):".to_string());
    lines.push("Scenario | Benefit | Cost | Net Benefit | ROI".to_string());
    lines.push("---------|---------|------|-------------|----".to_string());
    for row in &case.comparison {
        lines.push(format!(
            "{} | {} | {} | {} | {}",
            row.scenario,
            money(row.three_year_benefit),
            money(row.three_year_cost),
            money(row.three_year_net),
            format_percent(row.roi_3year)
        ));
    }
    lines.push(String::new());

    let investment = &selected.investment;
    lines.push(format!("Investment Breakdown ({}):", selected.scenario));
    lines.push(format!("Platform (Annual): {}", money(investment.platform)));
    lines.push(format!(
        "Implementation (One-time): {}",
        money(investment.implementation)
    ));
    lines.push(format!(
        "Change Management (One-time): {}",
        money(investment.change_management)
    ));
    lines.push(format!("Year 1 Total: {}", money(investment.year1)));
    lines.push(format!("Years 2-3 (Annual): {}", money(investment.recurring)));
    lines.push(String::new());

    lines.push(format_operational_table(case));
    lines.push(String::new());

    lines.push(format!("3-Year Projection ({}):", selected.scenario));
    lines.push("Year | Benefit | Cost | Net | Cumulative".to_string());
    lines.push("-----|---------|------|-----|-----------".to_string());
    for year in &case.projection {
        lines.push(format!(
            "{} | {} | {} | {} | {}",
            year.year,
            money(year.benefit),
            money(year.cost),
            money(year.net),
            money(year.cumulative_net)
        ));
    }
    lines.push(String::new());

    lines.push(format_tornado_table(&case.tornado));
    lines.join("\n")
}

/// Current state against the selected scenario's targets.
fn format_operational_table(case: &BusinessCase) -> String {
    let inputs = &case.inputs;
    let benefits = &case.selected.benefits;
    let automation = format!("+{:.0}%", benefits.automation_improvement);

    let rows = [
        (
            "DSO (Days)",
            format!("{:.0}", inputs.current_dso),
            format!("{:.0}", benefits.target_dso),
            format!("{:.0} days", inputs.current_dso - benefits.target_dso),
        ),
        (
            "Error Rate (%)",
            format!("{:.1}%", inputs.current_error_rate),
            format!("{:.1}%", benefits.target_error_rate),
            format!("{:.1}%", inputs.current_error_rate - benefits.target_error_rate),
        ),
        (
            "Revenue Leakage (%)",
            format!("{:.1}%", inputs.current_leakage),
            format!("{:.1}%", benefits.target_leakage),
            format!("{:.1}%", inputs.current_leakage - benefits.target_leakage),
        ),
        (
            "Order-to-Cash Cycle (Days)",
            format!("{:.1}", inputs.current_cycle_days),
            format!("{:.1}", benefits.target_cycle_days),
            format!(
                "{:.1} days",
                inputs.current_cycle_days - benefits.target_cycle_days
            ),
        ),
        (
            "Automation Rate Improvement (%)",
            "-".to_string(),
            automation.clone(),
            automation,
        ),
    ];

    let mut lines = Vec::new();
    lines.push("Operational Improvements:".to_string());
    lines.push(format!(
        "Metric | Current State | Target State ({}) | Improvement",
        case.selected.scenario
    ));
    lines.push("-------|---------------|--------------|------------".to_string());
    for (metric, current, target, improvement) in rows {
        lines.push(format!("{metric} | {current} | {target} | {improvement}"));
    }
    lines.join("\n")
}

fn scenario_header(first_column: &str, outcomes: &[ScenarioOutcome]) -> String {
    let mut columns = vec![first_column];
    columns.extend(outcomes.iter().map(|outcome| outcome.scenario.name()));
    let rule: Vec<String> = columns.iter().map(|column| "-".repeat(column.len())).collect();
    format!("{}\n{}", columns.join(" | "), rule.join("|"))
}

fn scenario_row<F>(label: &str, outcomes: &[ScenarioOutcome], cell: F) -> String
where
    F: Fn(&ScenarioOutcome) -> String,
{
    let cells: Vec<String> = outcomes.iter().map(cell).collect();
    format!("{label} | {}", cells.join(" | "))
}

pub fn format_tornado_table(bars: &[TornadoBar]) -> String {
    let mut lines = Vec::new();
    lines.push("Sensitivity (Base Case, most sensitive first):".to_string());
    lines.push("Variable | Min Impact | Max Impact | Range".to_string());
    lines.push("---------|------------|------------|------".to_string());
    for bar in bars {
        lines.push(format!(
            "{} | {:+.1} | {:+.1} | {:.1}",
            bar.variable.name(),
            bar.min_impact,
            bar.max_impact,
            bar.range
        ));
    }
    lines.join("\n")
}

pub fn format_scenario_catalog(profiles: &[ScenarioProfile]) -> String {
    profiles
        .iter()
        .map(|p| {
            format!(
                "{}: {}\n  dso x{:.2}, errors x{:.2}, leakage x{:.2}, automation x{:.2}, cycle time x{:.2}, cost x{:.2}",
                p.name,
                p.description,
                p.dso_improvement,
                p.error_reduction,
                p.leakage_reduction,
                p.automation_rate,
                p.cycle_time_improvement,
                p.cost_multiplier
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcase::domain::currency::Currency;
    use bizcase::domain::inputs::BusinessInputs;
    use bizcase::domain::scenario::{Scenario, list_scenarios};
    use bizcase::services::business_case::build_business_case;

    #[test]
    fn format_business_case_report_includes_headline_and_tables() {
        let case = build_business_case(&BusinessInputs::default(), Scenario::Base, Currency::Usd);
        let output = format_business_case_report(&case);

        assert!(output.contains("Business Case Report"));
        assert!(output.contains("Scenario: Base Case (Realistic scenario based on industry benchmarks)"));
        assert!(output.contains("Total annual benefit: $4,716,280"));
        assert!(output.contains("Payback: 1.1 months"));
        assert!(output.contains("Year-1 ROI: 948.1%"));
        assert!(output.contains("3-year ROI: 1389.4%"));
        assert!(output.contains("1 | $4,716,280 | $450,000 | $4,266,280 | $4,266,280"));
    }

    #[test]
    fn format_business_case_report_breaks_benefits_down_per_category() {
        let case = build_business_case(&BusinessInputs::default(), Scenario::Base, Currency::Usd);
        let output = format_business_case_report(&case);

        assert!(output.contains("Working Capital: $273,973"));
        assert!(output.contains("Error Reduction: $722,500"));
        assert!(output.contains("Leakage Prevention: $937,500"));
        assert!(output.contains("Labor Savings: $402,500"));
        assert!(output.contains("Capacity Increase: $2,379,808"));
        assert!(output.contains("Year 1 Investment: $450,000"));
    }

    #[test]
    fn format_business_case_report_compares_every_scenario() {
        let case = build_business_case(&BusinessInputs::default(), Scenario::Base, Currency::Usd);
        let output = format_business_case_report(&case);
        let line = |prefix: &str| {
            output
                .lines()
                .find(|line| line.starts_with(prefix))
                .unwrap_or_else(|| panic!("missing line starting with {prefix}"))
                .to_string()
        };

        assert!(output.contains("Benefit Category | Best Case | Base Case | Worst Case"));
        assert!(output.contains("Metric | Best Case | Base Case | Worst Case"));

        let cells: Vec<String> = line("Total Annual | ").split(" | ").map(str::to_string).collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[2], "$4,716,280");

        let cells: Vec<String> = line("3-Year NPV | ").split(" | ").map(str::to_string).collect();
        assert_eq!(cells[2], "$11,324,852");
        assert!(line("Payback | ").contains(" | 1.1 months | "));
        assert!(line("Year 1 ROI | ").contains(" | 948.1% | "));
        assert!(line("3-Year ROI | ").ends_with("1953.6% | 1389.4% | 860.2%"));

        assert!(output.contains("Base Case | $14,148,841 | $950,000 | $13,198,841 | 1389.4%"));
    }

    #[test]
    fn format_business_case_report_details_investment_and_operations() {
        let case = build_business_case(&BusinessInputs::default(), Scenario::Base, Currency::Usd);
        let output = format_business_case_report(&case);

        assert!(output.contains("Investment Breakdown (Base Case):"));
        assert!(output.contains("Platform (Annual): $250,000"));
        assert!(output.contains("Implementation (One-time): $150,000"));
        assert!(output.contains("Change Management (One-time): $50,000"));
        assert!(output.contains("Year 1 Total: $450,000"));
        assert!(output.contains("Years 2-3 (Annual): $250,000"));

        assert!(output.contains("Metric | Current State | Target State (Base Case) | Improvement"));
        assert!(output.contains("DSO (Days) | 45 | 35 | 10 days"));
        assert!(output.contains("Error Rate (%) | 25.0% | 8.0% | 17.0%"));
        assert!(output.contains("Revenue Leakage (%) | 8.0% | 3.0% | 5.0%"));
        assert!(output.contains("Order-to-Cash Cycle (Days) | 5.2 | 3.0 | 2.2 days"));
        assert!(output.contains("Automation Rate Improvement (%) | - | +23% | +23%"));
    }

    #[test]
    fn format_tornado_table_lists_bars_in_ranked_order() {
        let case = build_business_case(&BusinessInputs::default(), Scenario::Base, Currency::Usd);
        let output = format_tornado_table(&case.tornado);
        let rows: Vec<&str> = output.lines().skip(3).collect();

        assert_eq!(rows.len(), 5);
        assert!(rows[0].starts_with("Platform Cost | -203.1 | +279.3 | 482.3"));
        assert!(rows[4].starts_with("DSO Improvement"));
    }

    #[test]
    fn format_scenario_catalog_lists_every_profile() {
        let output = format_scenario_catalog(list_scenarios());
        assert!(output.contains("Best Case: Optimistic scenario with maximum adoption and impact"));
        assert!(output.contains("cost x1.15"));
        assert_eq!(output.lines().count(), 6);
    }
}
