use thiserror::Error;
use tracing::{debug, error};

/// A required key is absent from the function's configuration map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config is missing required field: {0}")]
    MissingField(&'static str),
}

/// Raised while binding the host's argument descriptors, before any row is processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentShapeError {
    #[error("{function} requires {expected} arguments, got {actual}")]
    ArgCount {
        function: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("ARG{index} Config Map Error: expected a map")]
    NotAMap { index: usize },

    #[error("ARG{index} Config Map Error: config map must be a constant")]
    NonConstantConfig { index: usize },

    #[error("ARG{index} Key Error: expected a string")]
    NotAString { index: usize },

    #[error("ARG{index} Error: expected an array")]
    NotAList { index: usize },

    #[error("ARG{index} Qualifier Error: qualifier array is not string")]
    QualifiersNotString { index: usize },

    #[error("ARG{index} Value Error: values must be an array of integers")]
    ValuesNotInteger { index: usize },

    #[error("ARG{index} Value Error: values must be an array of doubles")]
    ValuesNotFloat { index: usize },

    #[error("ARG{index} Sketchset Error: identifiers must be an array of strings")]
    IdentifiersNotString { index: usize },

    #[error("Row supplies a double batch = {supplied}, but the call was bound with double batch = {bound}")]
    DoubleBatchMismatch { bound: bool, supplied: bool },
}

/// Failures raised by the store client seam.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Put rejected: {0}")]
    Rejected(String),

    #[error("Table is closed")]
    Closed,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Qualifier and value arrays length don't match ({qualifiers} qualifiers, {values} values)")]
    LengthMismatch { qualifiers: usize, values: usize },

    #[error("Put failed: {0}")]
    Underlying(#[from] TableError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Identifier is not numeric: {0:?}")]
    NotNumeric(String),

    #[error("Identifier set of {0} entries does not fit the length prefix")]
    TooLarge(usize),

    #[error("Identifier set blob truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Identifier set blob has negative length {0}")]
    NegativeLength(i32),

    #[error("Identifier set blob has {0} trailing bytes")]
    TrailingBytes(usize),
}

/// Errors produced by the one-time binding step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error(transparent)]
    Shape(#[from] ArgumentShapeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Everything that can abort one row's evaluation.
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("Argument shape error: {0}")]
    Shape(#[from] ArgumentShapeError),

    #[error("Write failed: {0}")]
    Write(#[from] WriteError),

    #[error("Identifier set encoding failed: {0}")]
    Codec(#[from] CodecError),

    #[error("Failed to open table: {0}")]
    Open(TableError),
}

impl EvaluateError {
    pub fn log_error(&self) {
        match self {
            EvaluateError::Shape(e) => {
                error!(target: "multicol_put::udf", "Argument shape error: {}", e);
                debug!(target: "multicol_put::udf", "Argument shape error details: {:?}", e);
            }
            EvaluateError::Write(e) => {
                error!(target: "multicol_put::udf", "Write failed: {}", e);
                debug!(target: "multicol_put::udf", "Write error details: {:?}", e);
            }
            EvaluateError::Codec(e) => {
                error!(target: "multicol_put::udf", "Identifier set encoding failed: {}", e);
                debug!(target: "multicol_put::udf", "Codec error details: {:?}", e);
            }
            EvaluateError::Open(e) => {
                error!(target: "multicol_put::udf", "Failed to open table: {}", e);
                debug!(target: "multicol_put::udf", "Table open error details: {:?}", e);
            }
        }
    }
}
