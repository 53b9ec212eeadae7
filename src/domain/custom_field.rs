use crate::error::IntacctError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user-defined field attached to a record by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

impl CustomField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl FromStr for CustomField {
    type Err = IntacctError;

    /// Parses `name=value`. The value may itself contain `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok(Self::new(name.trim(), value.trim()))
            }
            _ => Err(IntacctError::InvalidArgument(format!(
                "custom field '{s}' must look like name=value"
            ))),
        }
    }
}
