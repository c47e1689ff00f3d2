use thiserror::Error;

use super::LineId;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("failure reading {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure decoding {0}: {1}")]
    DecodeError(String, String),
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("transit network does not contain any lines")]
    NoLinesFound,
    #[error("line at position {0} has an empty name")]
    EmptyLineName(usize),
    #[error("line '{0}' is declared more than once")]
    DuplicateLine(LineId),
    #[error("line '{0}' has an empty station name at position {1}")]
    EmptyStationName(LineId, usize),
}
