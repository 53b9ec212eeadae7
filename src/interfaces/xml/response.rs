//! Decoding of the gateway's `<response>` envelope.

use super::element::XmlElement;
use super::entities::parse_errors;
use crate::domain::result::ErrorDescriptor;
use crate::error::{IntacctError, Result};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
    Aborted,
}

impl FromStr for Status {
    type Err = IntacctError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "success" => Ok(Status::Success),
            "failure" => Ok(Status::Failure),
            "aborted" => Ok(Status::Aborted),
            other => Err(IntacctError::MalformedResponse(format!(
                "unknown status '{other}'"
            ))),
        }
    }
}

/// The `<result>` of one function call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResult {
    pub status: Status,
    pub function: String,
    pub control_id: Option<String>,
    pub errors: Vec<ErrorDescriptor>,
    /// The whole `<result>` element, for operation-specific decoding.
    pub element: XmlElement,
}

impl FunctionResult {
    /// The element carrying result data: `preferred` if present, else `<data>`.
    pub fn data(&self, preferred: &str) -> Option<&XmlElement> {
        self.element
            .child(preferred)
            .or_else(|| self.element.child("data"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub control_status: Status,
    pub control_id: Option<String>,
    pub authentication_status: Option<Status>,
    /// Errors reported outside any function result: control or
    /// authentication failures.
    pub errors: Vec<ErrorDescriptor>,
    pub results: Vec<FunctionResult>,
}

impl ResponseEnvelope {
    /// True when the request itself was accepted and authenticated. Individual
    /// functions may still have failed.
    pub fn is_accepted(&self) -> bool {
        self.control_status == Status::Success
            && self.authentication_status.unwrap_or(Status::Success) == Status::Success
    }
}

pub fn parse_response(root: &XmlElement) -> Result<ResponseEnvelope> {
    if root.name != "response" {
        return Err(IntacctError::MalformedResponse(format!(
            "expected <response>, found <{}>",
            root.name
        )));
    }

    let control = root.required_child("control")?;
    let mut envelope = ResponseEnvelope {
        control_status: control.required_text("status")?.parse()?,
        control_id: control.child_text("controlid").map(str::to_string),
        authentication_status: None,
        errors: Vec::new(),
        results: Vec::new(),
    };

    if let Some(errormessage) = root.child("errormessage") {
        envelope.errors.extend(parse_errors(errormessage)?);
    }

    if let Some(operation) = root.child("operation") {
        if let Some(authentication) = operation.child("authentication") {
            envelope.authentication_status = Some(authentication.required_text("status")?.parse()?);
        }
        if let Some(errormessage) = operation.child("errormessage") {
            envelope.errors.extend(parse_errors(errormessage)?);
        }
        envelope.results = operation
            .children_named("result")
            .map(parse_result)
            .collect::<Result<Vec<_>>>()?;
    }

    Ok(envelope)
}

fn parse_result(element: &XmlElement) -> Result<FunctionResult> {
    let errors = match element.child("errormessage") {
        Some(errormessage) => parse_errors(errormessage)?,
        None => Vec::new(),
    };
    Ok(FunctionResult {
        status: element.required_text("status")?.parse()?,
        function: element.child_text("function").unwrap_or_default().to_string(),
        control_id: element.child_text("controlid").map(str::to_string),
        errors,
        element: element.clone(),
    })
}
