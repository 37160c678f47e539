use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Unknown operation: '{0}'")]
    UnknownOperation(String),

    #[error("Row {row}: {source}")]
    RowError {
        row: usize,
        #[source]
        source: Box<CalcError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    pub fn division_by_zero(dividend: f64) -> Self {
        CalcError::InvalidArgument {
            message: format!("cannot divide {} by zero", dividend),
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidArgument { .. } => "Use a non-zero divisor",
            CalcError::UnknownOperation(_) => {
                "Use one of: add (+), subtract (-), multiply (*), divide (/)"
            }
            CalcError::RowError { source, .. } => source.recovery_suggestion(),
            CalcError::IoError(_) => "Check that the file exists and is readable",
            CalcError::CsvError(_) => "Each row must have the form: op,a,b",
            CalcError::SerializationError(_) => "Try a different output format",
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::InvalidArgument { .. }
            | CalcError::UnknownOperation(_)
            | CalcError::CsvError(_) => 2,
            CalcError::RowError { source, .. } => source.exit_code(),
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => 3,
            CalcError::IoError(_) | CalcError::SerializationError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
