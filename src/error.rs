use thiserror::Error;

/// Errors raised while reading, validating or summarizing a PDF sample.
/// Every one of them is fatal for the run that produced it.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("line {line}: expected 2 columns, found {found}")]
    Columns { line: usize, found: usize },

    #[error("line {line}: cannot convert '{token}' to a finite number")]
    Conversion { line: usize, token: String },

    #[error("line {line}: pdf should be non-negative, got {value}")]
    NegativeDensity { line: usize, value: f64 },

    #[error("total probability mass must be positive and finite, got {total}")]
    NonPositiveMass { total: f64 },

    #[error("line {line}: x should be in ascending order ({current} follows {previous})")]
    Order {
        line: usize,
        previous: f64,
        current: f64,
    },

    #[error("no data provided")]
    EmptyInput,

    #[error("no CDF value exceeds {p}")]
    QuantileNotFound { p: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`AnalyzeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Conversion,
    Domain,
    Order,
    EmptyInput,
    QuantileNotFound,
    Io,
}

impl AnalyzeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Columns { .. } => ErrorKind::Parse,
            Self::Conversion { .. } => ErrorKind::Conversion,
            Self::NegativeDensity { .. } | Self::NonPositiveMass { .. } => ErrorKind::Domain,
            Self::Order { .. } => ErrorKind::Order,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::QuantileNotFound { .. } => ErrorKind::QuantileNotFound,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
