use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unsupported currency: {0} (expected USD or EUR)")]
    UnsupportedCurrency(String),
    #[error("unknown scenario: {0} (expected Best Case, Base Case or Worst Case)")]
    UnknownScenario(String),
}
