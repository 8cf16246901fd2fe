use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
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

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json rendering {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookCategory tags a book with its kind; it carries no state of its own.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum BookCategory {
    General,
    Fun,
    NonFun,
    Fiction,
    NonFiction,
}

lazy_static! {
    // only labeled categories appear here
    static ref CATEGORY_LABELS: HashMap<BookCategory, &'static str> = HashMap::from([
        (BookCategory::Fiction, "Fiction Book"),
        (BookCategory::NonFiction, "Non-Fiction Book"),
    ]);
}

impl BookCategory {
    pub fn label(&self) -> Option<&'static str> {
        CATEGORY_LABELS.get(self).copied()
    }
}

impl Display for BookCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookCategory::General => write!(f, "General"),
            BookCategory::Fun => write!(f, "Fun"),
            BookCategory::NonFun => write!(f, "NonFun"),
            BookCategory::Fiction => write!(f, "Fiction"),
            BookCategory::NonFiction => write!(f, "NonFiction"),
        }
    }
}
