use crate::domain::currency::{Currency, convert};
use crate::domain::inputs::BusinessInputs;
use crate::domain::results::InvestmentResult;
use crate::domain::scenario::ScenarioProfile;

/// Year-1 and recurring cost. Only the platform fee recurs after year 1.
pub fn compute_investment(
    inputs: &BusinessInputs,
    scenario: &ScenarioProfile,
    currency: Currency,
) -> InvestmentResult {
    let platform = inputs.platform_annual_cost * scenario.cost_multiplier;
    let implementation = inputs.implementation_cost * scenario.cost_multiplier;
    let change_management = inputs.change_management * scenario.cost_multiplier;
    let year1 = platform + implementation + change_management;

    let to_target = |amount: f64| convert(amount, Currency::Usd, currency);
    InvestmentResult {
        currency,
        platform: to_target(platform),
        implementation: to_target(implementation),
        change_management: to_target(change_management),
        year1: to_target(year1),
        recurring: to_target(platform),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::Scenario;
    use crate::test_support::{assert_close, reference_inputs};

    #[test]
    fn base_case_investment_is_the_plain_sum_of_costs() {
        let costs = compute_investment(&reference_inputs(), Scenario::Base.profile(), Currency::Usd);
        assert_eq!(costs.year1, 450_000.0);
        assert_eq!(costs.recurring, 250_000.0);
        assert_eq!(costs.platform, 250_000.0);
        assert_eq!(costs.implementation, 150_000.0);
        assert_eq!(costs.change_management, 50_000.0);
        assert_eq!(costs.three_year_total(), 950_000.0);
    }

    #[test]
    fn cost_multiplier_scales_every_cost_line() {
        let inputs = reference_inputs();
        let best = compute_investment(&inputs, Scenario::Best.profile(), Currency::Usd);
        let worst = compute_investment(&inputs, Scenario::Worst.profile(), Currency::Usd);

        assert_close(best.year1, 405_000.0);
        assert_close(best.recurring, 225_000.0);
        assert_close(worst.year1, 517_500.0);
        assert_close(worst.recurring, 287_500.0);
    }

    #[test]
    fn eur_investment_is_converted() {
        let costs = compute_investment(&reference_inputs(), Scenario::Base.profile(), Currency::Eur);
        assert_eq!(costs.currency, Currency::Eur);
        assert_close(costs.year1, 414_000.0);
        assert_close(costs.recurring, 230_000.0);
        assert_close(costs.implementation, 138_000.0);
    }
}
