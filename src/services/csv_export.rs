use std::io::Write;

use csv::Writer;
use serde::Serialize;
use thiserror::Error;

use crate::domain::currency::Currency;
use crate::services::business_case::ScenarioOutcome;

#[derive(Error, Debug)]
pub enum CsvExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv output: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output is not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Serialize)]
struct ScenarioCsvRecord<'a> {
    #[serde(rename = "Scenario")]
    scenario: &'a str,
    #[serde(rename = "Total Annual Benefit")]
    total_annual_benefit: f64,
    #[serde(rename = "Working Capital")]
    working_capital: f64,
    #[serde(rename = "Error Reduction")]
    error_reduction: f64,
    #[serde(rename = "Leakage Prevention")]
    leakage_prevention: f64,
    #[serde(rename = "Labor Savings")]
    labor_savings: f64,
    #[serde(rename = "Capacity Increase")]
    capacity_increase: f64,
    #[serde(rename = "Year 1 Investment")]
    year1_investment: f64,
    #[serde(rename = "Recurring Cost")]
    recurring_cost: f64,
    #[serde(rename = "3-Year NPV")]
    npv: f64,
    #[serde(rename = "Payback Months")]
    payback_months: f64,
    #[serde(rename = "3-Year ROI")]
    roi_3year: f64,
    #[serde(rename = "Currency")]
    currency: &'a str,
}

impl<'a> ScenarioCsvRecord<'a> {
    fn new(outcome: &'a ScenarioOutcome, currency: Currency) -> Self {
        let benefits = &outcome.benefits;
        Self {
            scenario: outcome.scenario.name(),
            total_annual_benefit: benefits.total_annual,
            working_capital: benefits.working_capital,
            error_reduction: benefits.error_reduction,
            leakage_prevention: benefits.leakage_prevention,
            labor_savings: benefits.labor_savings,
            capacity_increase: benefits.capacity_increase,
            year1_investment: outcome.investment.year1,
            recurring_cost: outcome.investment.recurring,
            npv: outcome.metrics.npv,
            payback_months: outcome.metrics.payback_months,
            roi_3year: outcome.metrics.roi_3year,
            currency: currency.code(),
        }
    }
}

/// Writes one row per scenario with raw, unformatted amounts.
pub fn write_scenarios_csv<W: Write>(
    writer: W,
    outcomes: &[ScenarioOutcome],
    currency: Currency,
) -> Result<(), CsvExportError> {
    let mut writer = Writer::from_writer(writer);
    for outcome in outcomes {
        writer.serialize(ScenarioCsvRecord::new(outcome, currency))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn scenarios_to_csv_string(
    outcomes: &[ScenarioOutcome],
    currency: Currency,
) -> Result<String, CsvExportError> {
    let mut buffer = Vec::new();
    write_scenarios_csv(&mut buffer, outcomes, currency)?;
    Ok(String::from_utf8(buffer)?)
}
