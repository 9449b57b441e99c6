use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CatalogError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> CatalogError {
        CatalogError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Database { retryable, .. } => { *retryable }
            CatalogError::DuplicateKey { .. } => { false }
            CatalogError::NotFound { .. } => { false }
            CatalogError::Validation { .. } => { false }
            CatalogError::Serialization { .. } => { false }
            CatalogError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number or token
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}
