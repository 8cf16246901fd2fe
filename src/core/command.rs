use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Runtime { message, reason_code } => {
                write!(f, "runtime: {} {:?}", message, reason_code)
            }
            CommandError::Serialization { message } => {
                write!(f, "serialization: {}", message)
            }
            CommandError::Validation { message, reason_code } => {
                write!(f, "validation: {} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
