use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    #[error("{field} must be within [0, 100], got {value}")]
    InvalidRange { field: &'static str, value: f64 },

    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
