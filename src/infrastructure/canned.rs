use crate::domain::ports::Transport;
use crate::error::{IntacctError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub body: String,
}

/// A transport that never leaves the process.
///
/// Replays queued response bodies in order and records every request it is
/// given. Clones share state, so a test can keep one handle and hand another
/// to the client.
#[derive(Default, Clone)]
pub struct CannedTransport {
    responses: Arc<RwLock<VecDeque<String>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl CannedTransport {
    /// Creates a transport with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that will answer with `responses`, in order.
    pub fn from_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Arc::new(RwLock::new(responses.into_iter().map(Into::into).collect())),
            requests: Arc::default(),
        }
    }

    pub async fn push_response(&self, body: impl Into<String>) {
        self.responses.write().await.push_back(body.into());
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn post(&self, endpoint: &str, body: String) -> Result<String> {
        self.requests.write().await.push(RecordedRequest {
            endpoint: endpoint.to_string(),
            body,
        });
        self.responses
            .write()
            .await
            .pop_front()
            .ok_or_else(|| IntacctError::Transport("no canned response queued".to_string()))
    }
}
