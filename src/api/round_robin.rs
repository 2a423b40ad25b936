use crate::{
    api::node::NodeClient,
    api::traits::EndpointDispatcher,
    config::DispatchPolicy,
    error::{Result, ZImageError},
    models::{GeneratedImage, GenerationRequest},
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Rotates through nodes one request at a time. The cursor advances on every
/// call, success or failure; a failed node is not retried within the call and
/// nothing falls back to the other nodes.
pub struct RoundRobinDispatcher {
    node: NodeClient,
    urls: Vec<String>,
    cursor: AtomicUsize,
}

impl RoundRobinDispatcher {
    pub fn new(node: NodeClient, urls: Vec<String>) -> Self {
        Self {
            node,
            urls,
            cursor: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EndpointDispatcher for RoundRobinDispatcher {
    async fn dispatch(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        if self.urls.is_empty() {
            return Err(ZImageError::ConfigError("No API URLs configured".into()));
        }

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.urls.len();
        let base_url = &self.urls[index];

        log::info!(
            "Dispatching to API node {}/{}: {}",
            index + 1,
            self.urls.len(),
            base_url
        );

        self.node.fetch(base_url, request).await
    }

    fn endpoints(&self) -> &[String] {
        &self.urls
    }

    fn policy(&self) -> DispatchPolicy {
        DispatchPolicy::RoundRobin
    }
}
