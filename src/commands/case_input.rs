use bizcase::domain::currency::Currency;
use bizcase::domain::inputs::BusinessInputs;
use bizcase::domain::scenario::Scenario;
use bizcase::services::case_file::{CaseFile, load_case_file};

use crate::commands::CommandError;

/// Inputs, scenario and currency after applying flag > case file > default.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCase {
    pub inputs: BusinessInputs,
    pub scenario: Scenario,
    pub currency: Currency,
}

pub fn resolve_case(
    input: Option<&str>,
    scenario: Option<Scenario>,
    currency: Option<Currency>,
) -> Result<ResolvedCase, CommandError> {
    let case_file = match input {
        Some(path) => load_case_file(path)?,
        None => CaseFile::default(),
    };
    Ok(merge(case_file, scenario, currency))
}

fn merge(case_file: CaseFile, scenario: Option<Scenario>, currency: Option<Currency>) -> ResolvedCase {
    ResolvedCase {
        inputs: case_file.inputs,
        scenario: scenario.or(case_file.scenario).unwrap_or_default(),
        currency: currency.or(case_file.currency).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_case_file() {
        let case_file = CaseFile {
            scenario: Some(Scenario::Best),
            currency: Some(Currency::Eur),
            inputs: BusinessInputs::default(),
        };
        let resolved = merge(case_file, Some(Scenario::Worst), None);
        assert_eq!(resolved.scenario, Scenario::Worst);
        assert_eq!(resolved.currency, Currency::Eur);
    }

    #[test]
    fn defaults_are_base_case_in_usd() {
        let resolved = resolve_case(None, None, None).unwrap();
        assert_eq!(resolved.scenario, Scenario::Base);
        assert_eq!(resolved.currency, Currency::Usd);
        assert_eq!(resolved.inputs, BusinessInputs::default());
    }
}
