use crate::application::operation::AuthenticatedOperation;
use crate::config::ClientConfig;
use crate::domain::ports::TransportBox;
use crate::domain::result::{ErrorDescriptor, OperationResult};
use crate::error::{IntacctError, Result};
use crate::interfaces::xml::element::{parse_document, write_document};
use crate::interfaces::xml::request::{function_element, request_element};
use crate::interfaces::xml::response::{FunctionResult, ResponseEnvelope, Status, parse_response};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A request document ready to be posted.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub control_id: String,
    /// Control ids of the functions, in operation order.
    pub function_control_ids: Vec<String>,
    pub endpoint: String,
    pub body: String,
}

/// Builds the request document for `operations` without sending it.
///
/// All operations run under the session of the first one.
pub fn prepare_request<O: AuthenticatedOperation>(
    config: &ClientConfig,
    operations: &[O],
) -> Result<PreparedRequest> {
    let first = operations.first().ok_or_else(|| {
        IntacctError::InvalidArgument("at least one operation is required".to_string())
    })?;
    let session = first.session();

    let control_id = Uuid::new_v4().to_string();
    let function_control_ids: Vec<String> = operations
        .iter()
        .map(|_| Uuid::new_v4().to_string())
        .collect();
    let functions = operations
        .iter()
        .zip(&function_control_ids)
        .map(|(op, id)| function_element(id, op.to_function_element()))
        .collect();

    let request = request_element(config, &control_id, &session.authentication(), functions);
    Ok(PreparedRequest {
        endpoint: session
            .endpoint()
            .unwrap_or(config.endpoint.as_str())
            .to_string(),
        body: write_document(&request)?,
        control_id,
        function_control_ids,
    })
}

/// What came back for one request.
#[derive(Debug, Clone, Serialize)]
pub struct ClientResponse<T> {
    pub control_id: String,
    /// Whether the gateway accepted and authenticated the request.
    pub accepted: bool,
    /// Errors reported for the request as a whole.
    pub errors: Vec<ErrorDescriptor>,
    /// One entry per operation, in the order they were given. Empty when the
    /// request was not accepted.
    pub results: Vec<OperationResult<T>>,
}

impl<T> ClientResponse<T> {
    pub fn is_success(&self) -> bool {
        self.accepted && self.results.iter().all(OperationResult::is_success)
    }
}

/// Sends operations to the XML gateway through a transport.
pub struct IntacctClient {
    config: ClientConfig,
    transport: TransportBox,
}

impl IntacctClient {
    pub fn new(config: ClientConfig, transport: TransportBox) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Executes `operations` in one request.
    ///
    /// Failures reported by the service come back inside the response, not as
    /// an `Err`; errors are reserved for local problems such as an unreachable
    /// gateway or an unreadable response.
    pub async fn execute<O: AuthenticatedOperation>(
        &self,
        operations: &[O],
    ) -> Result<ClientResponse<O::Output>> {
        let request = prepare_request(&self.config, operations)?;
        info!(
            control_id = %request.control_id,
            operations = operations.len(),
            function = operations[0].function_name(),
            endpoint = %request.endpoint,
            "Sending request"
        );

        let body = self
            .transport
            .post(&request.endpoint, request.body)
            .await?;
        debug!(control_id = %request.control_id, bytes = body.len(), "Received response");

        let envelope = parse_response(&parse_document(&body)?)?;
        if !envelope.is_accepted() {
            warn!(
                control_id = %request.control_id,
                errors = envelope.errors.len(),
                "Request was not accepted"
            );
            return Ok(ClientResponse {
                control_id: request.control_id,
                accepted: false,
                errors: envelope.errors,
                results: Vec::new(),
            });
        }

        let mut results = Vec::with_capacity(operations.len());
        for (index, operation) in operations.iter().enumerate() {
            let result = find_result(&envelope, &request.function_control_ids[index], index)
                .ok_or_else(|| {
                    IntacctError::MalformedResponse(format!(
                        "no result for {} (function {})",
                        operation.function_name(),
                        index + 1
                    ))
                })?;

            if result.status == Status::Success {
                let data = result.data(operation.response_element()).ok_or_else(|| {
                    IntacctError::MalformedResponse(format!(
                        "{} result carries no <{}> element",
                        operation.function_name(),
                        operation.response_element()
                    ))
                })?;
                results.push(operation.process_response_data(data)?);
            } else {
                warn!(
                    control_id = %request.control_id,
                    function = %result.function,
                    status = ?result.status,
                    errors = result.errors.len(),
                    "Operation failed"
                );
                results.push(OperationResult::Failure(result.errors.clone()));
            }
        }

        Ok(ClientResponse {
            control_id: request.control_id,
            accepted: true,
            errors: envelope.errors,
            results,
        })
    }
}

/// Matches a result by function control id. A result at the same position is
/// only taken when it carries no control id of its own.
fn find_result<'a>(
    envelope: &'a ResponseEnvelope,
    control_id: &str,
    index: usize,
) -> Option<&'a FunctionResult> {
    envelope
        .results
        .iter()
        .find(|r| r.control_id.as_deref() == Some(control_id))
        .or_else(|| {
            envelope
                .results
                .get(index)
                .filter(|r| r.control_id.is_none())
        })
}
