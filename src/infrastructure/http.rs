use crate::config::ClientConfig;
use crate::domain::ports::Transport;
use crate::error::{IntacctError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Posts request documents to the XML gateway over HTTPS.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(transport)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, endpoint: &str, body: String) -> Result<String> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/xml")
            .body(body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let text = response.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(IntacctError::Transport(format!(
                "gateway answered HTTP {status}"
            )));
        }
        Ok(text)
    }
}

fn transport(e: reqwest::Error) -> IntacctError {
    IntacctError::Transport(e.to_string())
}
