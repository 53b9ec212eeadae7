use crate::domain::result::OperationResult;
use crate::domain::session::SessionRef;
use crate::error::Result;
use crate::interfaces::xml::element::XmlElement;

/// A single gateway function call.
///
/// Implementors describe what goes inside `<function>` and how to read the
/// data that comes back; the client takes care of the envelope.
pub trait Operation {
    type Output;

    /// Name of the element wrapping the contents, e.g. `create_gltransaction`.
    fn function_name(&self) -> &'static str;

    /// Name of the element inside `<result>` that carries response data.
    fn response_element(&self) -> &'static str {
        "data"
    }

    fn function_contents(&self) -> Vec<XmlElement>;

    fn process_response_data(&self, data: &XmlElement) -> Result<OperationResult<Self::Output>>;

    fn to_function_element(&self) -> XmlElement {
        XmlElement::parent(self.function_name(), self.function_contents())
    }
}

/// An operation that must run under a session.
pub trait AuthenticatedOperation: Operation {
    fn session(&self) -> &SessionRef;
}
