use thiserror::Error;

use crate::model::NetworkError;

#[derive(Error, Debug)]
pub enum MidpointAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure loading transit network: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("failure processing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure building thread pool: {0}")]
    ThreadPoolError(String),
    #[error("failure building progress bar: {0}")]
    ProgressBarError(String),
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
}
