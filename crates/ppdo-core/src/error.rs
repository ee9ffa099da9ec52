use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("unknown sort key '{key}' (expected one of: {expected})")]
    UnknownSortKey { key: String, expected: String },
    #[error("unknown filter '{dimension}' (expected one of: {expected})")]
    UnknownDimension { dimension: String, expected: String },
    #[error("invalid {field} value '{value}' (expected one of: {expected})")]
    UnknownValue {
        field: String,
        value: String,
        expected: String,
    },
    #[error("page size must be at least 1")]
    InvalidPageSize,
    #[error("office code and name are both required")]
    IncompleteOffice,
}

pub type CoreResult<T> = Result<T, CoreError>;
