use std::io;

use thiserror::Error;

use bizcase::domain::error::ModelError;
use bizcase::services::case_file::CaseFileError;
use bizcase::services::charts::ChartError;
use bizcase::services::csv_export::CsvExportError;

pub mod analyze_cmd;
pub mod base_commands;
pub mod case_input;
pub mod convert_cmd;
pub mod export_csv_cmd;
pub mod init_cmd;
pub mod report_format;
pub mod scenarios_cmd;
pub mod sensitivity_cmd;
pub mod summary_cmd;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    CaseFile(#[from] CaseFileError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    CsvExport(#[from] CsvExportError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("failed to serialize output as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize output as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

pub(crate) fn write_output(path: &str, contents: impl AsRef<[u8]>) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_string(),
        source,
    })
}
