use serde::Serialize;
use tracing::{debug, info};

use crate::domain::currency::Currency;
use crate::domain::inputs::BusinessInputs;
use crate::domain::results::{
    BenefitResult, InvestmentResult, RoiMetrics, SensitivityRow, serialize_roi,
};
use crate::domain::scenario::Scenario;
use crate::services::benefits::compute_benefits;
use crate::services::investment::compute_investment;
use crate::services::roi::compute_roi;
use crate::services::sensitivity::analyze_sensitivity;
use crate::services::tornado::{TornadoBar, rank_tornado};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub benefits: BenefitResult,
    pub investment: InvestmentResult,
    pub metrics: RoiMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub benefit: f64,
    pub cost: f64,
    pub net: f64,
    pub cumulative_net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub scenario: Scenario,
    pub three_year_benefit: f64,
    pub three_year_cost: f64,
    pub three_year_net: f64,
    #[serde(serialize_with = "serialize_roi")]
    pub roi_3year: f64,
}

/// Everything the report surfaces need for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessCase {
    pub currency: Currency,
    pub inputs: BusinessInputs,
    pub selected: ScenarioOutcome,
    pub scenarios: Vec<ScenarioOutcome>,
    pub projection: [ProjectionYear; 3],
    pub comparison: Vec<ScenarioComparison>,
    pub sensitivity: Vec<SensitivityRow>,
    pub tornado: Vec<TornadoBar>,
}

impl BusinessCase {
    pub fn outcome(&self, scenario: Scenario) -> Option<&ScenarioOutcome> {
        self.scenarios.iter().find(|outcome| outcome.scenario == scenario)
    }
}

/// Runs benefits, investment and ROI for one scenario.
pub fn evaluate_scenario(
    inputs: &BusinessInputs,
    scenario: Scenario,
    currency: Currency,
) -> ScenarioOutcome {
    let profile = scenario.profile();
    let benefits = compute_benefits(inputs, profile, currency);
    let investment = compute_investment(inputs, profile, currency);
    let metrics = compute_roi(&benefits, &investment);
    debug!(
        scenario = profile.name,
        %currency,
        roi_3year = metrics.roi_3year,
        "evaluated scenario"
    );
    ScenarioOutcome {
        scenario,
        benefits,
        investment,
        metrics,
    }
}

/// Best, Base and Worst outcomes, in that order.
pub fn evaluate_all_scenarios(inputs: &BusinessInputs, currency: Currency) -> Vec<ScenarioOutcome> {
    Scenario::ALL
        .into_iter()
        .map(|scenario| evaluate_scenario(inputs, scenario, currency))
        .collect()
}

pub fn project_three_years(outcome: &ScenarioOutcome) -> [ProjectionYear; 3] {
    let benefit = outcome.benefits.total_annual;
    let costs = [
        outcome.investment.year1,
        outcome.investment.recurring,
        outcome.investment.recurring,
    ];
    let mut cumulative_net = 0.0;
    let mut year = 0;
    costs.map(|cost| {
        year += 1;
        let net = benefit - cost;
        cumulative_net += net;
        ProjectionYear {
            year,
            benefit,
            cost,
            net,
            cumulative_net,
        }
    })
}

pub fn compare_scenarios(outcomes: &[ScenarioOutcome]) -> Vec<ScenarioComparison> {
    outcomes
        .iter()
        .map(|outcome| {
            let three_year_benefit = outcome.benefits.total_annual * 3.0;
            let three_year_cost = outcome.investment.three_year_total();
            ScenarioComparison {
                scenario: outcome.scenario,
                three_year_benefit,
                three_year_cost,
                three_year_net: three_year_benefit - three_year_cost,
                roi_3year: outcome.metrics.roi_3year,
            }
        })
        .collect()
}

/// Evaluates all scenarios, projects the selected one and runs the
/// sensitivity sweep against the Base Case ROI.
pub fn build_business_case(
    inputs: &BusinessInputs,
    selected: Scenario,
    currency: Currency,
) -> BusinessCase {
    let scenarios = evaluate_all_scenarios(inputs, currency);
    let selected_outcome = scenarios[selected.index()].clone();
    let base_roi = scenarios[Scenario::Base.index()].metrics.roi_3year;

    let sensitivity = analyze_sensitivity(inputs, base_roi, currency);
    let tornado = rank_tornado(&sensitivity);
    let projection = project_three_years(&selected_outcome);
    let comparison = compare_scenarios(&scenarios);

    info!(
        scenario = selected.name(),
        %currency,
        total_annual = selected_outcome.benefits.total_annual,
        "business case built"
    );

    BusinessCase {
        currency,
        inputs: inputs.clone(),
        selected: selected_outcome,
        scenarios,
        projection,
        comparison,
        sensitivity,
        tornado,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::results::SensitivityVariable;
    use crate::test_support::{assert_close, reference_inputs};

    #[test]
    fn evaluate_all_scenarios_returns_best_base_worst() {
        let outcomes = evaluate_all_scenarios(&reference_inputs(), Currency::Usd);
        let order: Vec<Scenario> = outcomes.iter().map(|o| o.scenario).collect();
        assert_eq!(order, Scenario::ALL.to_vec());
    }

    #[test]
    fn projection_accumulates_net_benefit() {
        let outcome = evaluate_scenario(&reference_inputs(), Scenario::Base, Currency::Usd);
        let projection = project_three_years(&outcome);
        let benefit = outcome.benefits.total_annual;

        let years: Vec<u32> = projection.iter().map(|y| y.year).collect();
        let costs: Vec<f64> = projection.iter().map(|y| y.cost).collect();
        assert_eq!(years, vec![1, 2, 3]);
        assert_eq!(costs, vec![450_000.0, 250_000.0, 250_000.0]);
        assert_close(projection[0].net, benefit - 450_000.0);
        assert_close(projection[2].cumulative_net, benefit * 3.0 - 950_000.0);
    }

    #[test]
    fn comparison_uses_three_year_totals() {
        let outcomes = evaluate_all_scenarios(&reference_inputs(), Currency::Usd);
        let comparison = compare_scenarios(&outcomes);

        let worst = &comparison[2];
        assert_eq!(worst.scenario, Scenario::Worst);
        assert_close(worst.three_year_cost, 517_500.0 + 2.0 * 287_500.0);
        assert_close(worst.three_year_net, worst.three_year_benefit - worst.three_year_cost);
        assert_close(worst.roi_3year, 860.209_132_580_845_2);
    }

    #[test]
    fn business_case_headlines_the_selected_scenario() {
        let case = build_business_case(&reference_inputs(), Scenario::Worst, Currency::Eur);

        assert_eq!(case.selected.scenario, Scenario::Worst);
        assert_eq!(case.currency, Currency::Eur);
        assert_eq!(case.outcome(Scenario::Worst), Some(&case.selected));
        assert_close(case.selected.investment.year1, 476_100.0);
        assert_eq!(case.projection[0].cost, case.selected.investment.year1);
    }

    #[test]
    fn business_case_sweeps_against_the_base_case_roi() {
        let case = build_business_case(&reference_inputs(), Scenario::Best, Currency::Usd);
        let platform_unchanged = case
            .sensitivity
            .iter()
            .find(|row| row.variable == SensitivityVariable::PlatformCost && row.value == "+0%")
            .unwrap();
        assert_eq!(platform_unchanged.roi_change, 0.0);
    }

    #[test]
    fn business_case_ranks_platform_cost_as_most_sensitive() {
        let case = build_business_case(&reference_inputs(), Scenario::Base, Currency::Usd);
        let order: Vec<SensitivityVariable> = case.tornado.iter().map(|bar| bar.variable).collect();
        assert_eq!(
            order,
            vec![
                SensitivityVariable::PlatformCost,
                SensitivityVariable::LeakagePrevention,
                SensitivityVariable::ErrorReduction,
                SensitivityVariable::AutomationRate,
                SensitivityVariable::DsoImprovement,
            ]
        );
    }
}
