use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::currency::Currency;
use crate::domain::error::ModelError;
use crate::domain::inputs::{BusinessInputs, InputValidationError};
use crate::domain::scenario::{Scenario, scenario_by_name};

#[derive(Error, Debug)]
pub enum CaseFileError {
    #[error("failed to read case file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse case file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("invalid business inputs: {0}")]
    InvalidInput(#[from] InputValidationError),
    #[error("failed to serialize case file: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("failed to write case file: {0}")]
    Write(#[source] io::Error),
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct CaseFileRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(default)]
    inputs: BusinessInputs,
}

/// A validated case file. Scenario and currency stay optional so command
/// line flags can take precedence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseFile {
    pub scenario: Option<Scenario>,
    pub currency: Option<Currency>,
    pub inputs: BusinessInputs,
}

/// Reads and validates a YAML case file.
///
/// # Errors
/// - I/O or YAML errors, including unknown keys.
/// - `UnknownScenario` / `UnsupportedCurrency` for unrecognised names.
/// - Input values outside the accepted ranges.
pub fn load_case_file<P: AsRef<Path>>(path: P) -> Result<CaseFile, CaseFileError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CaseFileError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let case_file = deserialize_case_file_from_yaml_str(&contents, path)?;
    info!(path = %path.display(), "loaded case file");
    Ok(case_file)
}

pub fn deserialize_case_file_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<CaseFile, CaseFileError> {
    let record: CaseFileRecord = if input.trim().is_empty() {
        CaseFileRecord::default()
    } else {
        serde_yaml::from_str(input).map_err(|source| CaseFileError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?
    };

    let scenario = record
        .scenario
        .as_deref()
        .map(|name| scenario_by_name(name).map(|profile| profile.scenario))
        .transpose()?;
    let currency = record
        .currency
        .as_deref()
        .map(Currency::from_code)
        .transpose()?;
    record.inputs.validate()?;

    Ok(CaseFile {
        scenario,
        currency,
        inputs: record.inputs,
    })
}

pub fn serialize_case_file<W: Write>(
    writer: &mut W,
    case_file: &CaseFile,
) -> Result<(), CaseFileError> {
    let record = CaseFileRecord {
        scenario: case_file.scenario.map(|s| s.name().to_string()),
        currency: case_file.currency.map(|c| c.code().to_string()),
        inputs: case_file.inputs.clone(),
    };
    let yaml = serde_yaml::to_string(&record)?;
    writer
        .write_all(yaml.as_bytes())
        .map_err(CaseFileError::Write)
}
