use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How a request proves who it runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authentication<'a> {
    SessionId(&'a str),
    Login {
        user_id: &'a str,
        company_id: &'a str,
        password: &'a str,
    },
}

impl Authentication<'_> {
    /// True when every credential is non-blank.
    pub fn is_complete(&self) -> bool {
        match self {
            Authentication::SessionId(id) => !id.trim().is_empty(),
            Authentication::Login {
                user_id,
                company_id,
                password,
            } => [user_id, company_id, password]
                .iter()
                .all(|v| !v.trim().is_empty()),
        }
    }
}

/// The authenticated context operations execute under.
pub trait Session: Send + Sync + fmt::Debug {
    fn authentication(&self) -> Authentication<'_>;

    /// Endpoint the session is bound to, overriding the configured one.
    fn endpoint(&self) -> Option<&str> {
        None
    }

    fn is_established(&self) -> bool {
        self.authentication().is_complete()
    }
}

pub type SessionRef = Arc<dyn Session>;

/// A session id handed out by `getAPISession`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSession {
    pub session_id: String,
    pub endpoint: Option<String>,
}

impl ApiSession {
    pub fn new(session_id: impl Into<String>, endpoint: Option<String>) -> Self {
        Self {
            session_id: session_id.into(),
            endpoint,
        }
    }
}

impl Session for ApiSession {
    fn authentication(&self) -> Authentication<'_> {
        Authentication::SessionId(&self.session_id)
    }

    fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

/// Web services user credentials.
#[derive(Clone)]
pub struct LoginSession {
    user_id: String,
    company_id: String,
    password: String,
}

impl LoginSession {
    pub fn new(
        user_id: impl Into<String>,
        company_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            company_id: company_id.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSession")
            .field("user_id", &self.user_id)
            .field("company_id", &self.company_id)
            .field("password", &"***")
            .finish()
    }
}

impl Session for LoginSession {
    fn authentication(&self) -> Authentication<'_> {
        Authentication::Login {
            user_id: &self.user_id,
            company_id: &self.company_id,
            password: &self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_session_established() {
        assert!(ApiSession::new("abc", None).is_established());
        assert!(!ApiSession::new("  ", None).is_established());
    }

    #[test]
    fn test_login_session_requires_all_credentials() {
        assert!(LoginSession::new("user", "company", "secret").is_established());
        assert!(!LoginSession::new("user", "", "secret").is_established());
    }

    #[test]
    fn test_login_session_debug_hides_password() {
        let debug = format!("{:?}", LoginSession::new("user", "company", "secret"));
        assert!(debug.contains("user"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_endpoint_override() {
        let session = ApiSession::new("abc", Some("https://eu.example.test/xml".into()));
        assert_eq!(session.endpoint(), Some("https://eu.example.test/xml"));
        assert_eq!(LoginSession::new("u", "c", "p").endpoint(), None);
    }
}
