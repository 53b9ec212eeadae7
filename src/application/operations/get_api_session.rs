use crate::application::operation::{AuthenticatedOperation, Operation};
use crate::domain::result::OperationResult;
use crate::domain::session::{ApiSession, SessionRef};
use crate::error::{IntacctError, Result};
use crate::interfaces::xml::element::XmlElement;
use crate::interfaces::xml::serialize::FromXmlElement;

/// Exchanges the credentials of `session` (usually a login) for an API
/// session id and the endpoint that session is bound to.
#[derive(Debug, Clone)]
pub struct GetApiSessionOperation {
    session: SessionRef,
}

impl GetApiSessionOperation {
    pub fn new(session: SessionRef) -> Result<Self> {
        if !session.is_established() {
            return Err(IntacctError::InvalidArgument(
                "session has no credentials".to_string(),
            ));
        }
        Ok(Self { session })
    }
}

impl Operation for GetApiSessionOperation {
    type Output = ApiSession;

    fn function_name(&self) -> &'static str {
        "getAPISession"
    }

    fn function_contents(&self) -> Vec<XmlElement> {
        Vec::new()
    }

    fn process_response_data(&self, data: &XmlElement) -> Result<OperationResult<ApiSession>> {
        let api = data.required_child("api")?;
        Ok(OperationResult::Success(ApiSession::from_xml_element(api)?))
    }
}

impl AuthenticatedOperation for GetApiSessionOperation {
    fn session(&self) -> &SessionRef {
        &self.session
    }
}
