use crate::error::Result;
use async_trait::async_trait;

/// Carries a request document to the gateway and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, endpoint: &str, body: String) -> Result<String>;
}

pub type TransportBox = Box<dyn Transport>;
