//! The `<request>` envelope every call to the gateway is wrapped in.

use super::element::XmlElement;
use crate::config::ClientConfig;
use crate::domain::session::Authentication;

/// Wraps one operation's element in `<function controlid="...">`.
pub fn function_element(control_id: &str, operation: XmlElement) -> XmlElement {
    XmlElement::parent("function", vec![operation]).with_attribute("controlid", control_id)
}

/// Builds the full request tree around already wrapped function elements.
pub fn request_element(
    config: &ClientConfig,
    control_id: &str,
    authentication: &Authentication<'_>,
    functions: Vec<XmlElement>,
) -> XmlElement {
    let control = XmlElement::parent(
        "control",
        vec![
            XmlElement::leaf("senderid", config.sender_id.as_str()),
            XmlElement::leaf("password", config.sender_password.as_str()),
            XmlElement::leaf("controlid", control_id),
            XmlElement::leaf("uniqueid", config.unique_id.to_string()),
            XmlElement::leaf("dtdversion", config.dtd_version.as_str()),
        ],
    );

    let operation = XmlElement::parent(
        "operation",
        vec![
            XmlElement::parent("authentication", vec![authentication_element(authentication)]),
            XmlElement::parent("content", functions),
        ],
    )
    .with_attribute("transaction", "false");

    XmlElement::parent("request", vec![control, operation])
}

fn authentication_element(authentication: &Authentication<'_>) -> XmlElement {
    match authentication {
        Authentication::SessionId(session_id) => XmlElement::leaf("sessionid", *session_id),
        Authentication::Login {
            user_id,
            company_id,
            password,
        } => XmlElement::parent(
            "login",
            vec![
                XmlElement::leaf("userid", *user_id),
                XmlElement::leaf("companyid", *company_id),
                XmlElement::leaf("password", *password),
            ],
        ),
    }
}
