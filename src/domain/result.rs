use serde::{Deserialize, Serialize};
use std::fmt;

/// One error as reported by the service. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub error_no: Option<String>,
    pub description: Option<String>,
    pub description2: Option<String>,
    pub correction: Option<String>,
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = [&self.description, &self.description2, &self.correction]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        match &self.error_no {
            Some(no) => write!(f, "{no}: {text}"),
            None => write!(f, "{text}"),
        }
    }
}

/// Outcome of a single operation within a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "data")]
pub enum OperationResult<T> {
    Success(T),
    Failure(Vec<ErrorDescriptor>),
}

impl<T> OperationResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            OperationResult::Success(value) => Some(value),
            OperationResult::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            OperationResult::Success(value) => Some(value),
            OperationResult::Failure(_) => None,
        }
    }

    pub fn errors(&self) -> &[ErrorDescriptor] {
        match self {
            OperationResult::Success(_) => &[],
            OperationResult::Failure(errors) => errors,
        }
    }
}
