//! ahp-sherpa - evaluates one decision document read from stdin.
//!
//! Without `alternatives` the document is a single pairwise matrix; with
//! them it is a criteria matrix plus one alternatives matrix per criterion.

use std::io::{self, Read};
use std::process::ExitCode;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::fmt;

use ahp_sherpa::adapters::FileWorkbookWriter;
use ahp_sherpa::application::{
    EvaluateHierarchyCommand, EvaluateHierarchyHandler, EvaluateMatrixCommand,
    EvaluateMatrixHandler, ExportWorkbookCommand, ExportWorkbookHandler, MatrixInput,
};
use ahp_sherpa::config::{AppConfig, LogFormat};
use ahp_sherpa::domain::foundation::{DomainError, ErrorCode};
use ahp_sherpa::domain::report::Workbook;

/// Shape of the document accepted on stdin (JSON or YAML).
#[derive(Debug, Deserialize)]
struct DecisionDocument {
    criteria: MatrixInput,
    #[serde(default)]
    alternatives: Option<Vec<MatrixInput>>,
    #[serde(default)]
    alternative_labels: Option<Vec<String>>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match serde_json::to_string_pretty(&err) {
                Ok(json) => println!("{json}"),
                Err(_) => println!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DomainError> {
    let config = AppConfig::load().map_err(|e| configuration_error(e.to_string()))?;
    config
        .validate()
        .map_err(|e| configuration_error(e.to_string()))?;

    init_tracing(&config)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("failed to read stdin: {e}")))?;

    // YAML is a superset of JSON, so one parser covers both
    let document: DecisionDocument = serde_yaml::from_str(&input)
        .map_err(|e| DomainError::validation("document", format!("unreadable decision document: {e}")))?;

    let settings = config.engine.settings();
    let (summary, workbook) = match document.alternatives {
        None => {
            debug!("single-matrix mode");
            let result = EvaluateMatrixHandler::new(settings)
                .handle(EvaluateMatrixCommand {
                    matrix: document.criteria,
                })
                .map_err(|e| DomainError::from(&e))?;
            (result.summary, result.workbook)
        }
        Some(alternatives) => {
            debug!(matrices = alternatives.len(), "hierarchical mode");
            let result = EvaluateHierarchyHandler::new(settings)
                .handle(EvaluateHierarchyCommand {
                    criteria: document.criteria,
                    alternatives,
                    alternative_labels: document.alternative_labels,
                })
                .map_err(|e| DomainError::from(&e))?;
            (result.summary, result.workbook)
        }
    };

    println!("{summary}");

    if let Some(directory) = config.export.directory_path() {
        export(&config, directory, workbook)?;
    }

    Ok(())
}

fn export(config: &AppConfig, directory: std::path::PathBuf, workbook: Workbook) -> Result<(), DomainError> {
    let writer = Arc::new(FileWorkbookWriter::new(directory, config.export.format));
    let written = ExportWorkbookHandler::new(writer)
        .handle(ExportWorkbookCommand { workbook })
        .map_err(|e| DomainError::from(&e))?;

    info!(location = %written.location, "export complete");
    println!("Workbook saved to {}", written.location);
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<(), DomainError> {
    let filter = config
        .logging
        .env_filter()
        .map_err(|e| configuration_error(e.to_string()))?;

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.compact().init(),
    }
    Ok(())
}

fn configuration_error(message: String) -> DomainError {
    DomainError::new(ErrorCode::ConfigurationInvalid, message)
}
