use crate::{
    api::node::NodeClient,
    api::traits::EndpointDispatcher,
    config::DispatchPolicy,
    error::{Result, ZImageError},
    models::{GeneratedImage, GenerationRequest},
};
use async_trait::async_trait;

/// Tries nodes in fixed list order until one succeeds. The first node is
/// always preferred; later nodes only see traffic when everything before
/// them failed.
pub struct FailoverDispatcher {
    node: NodeClient,
    urls: Vec<String>,
}

impl FailoverDispatcher {
    pub fn new(node: NodeClient, urls: Vec<String>) -> Self {
        Self { node, urls }
    }
}

#[async_trait]
impl EndpointDispatcher for FailoverDispatcher {
    async fn dispatch(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        if self.urls.is_empty() {
            return Err(ZImageError::ConfigError("No API URLs configured".into()));
        }

        let mut last_error = None;

        for base_url in &self.urls {
            log::info!("Trying API node: {}", base_url);

            match self.node.fetch(base_url, request).await {
                Ok(image) => return Ok(image),
                Err(e) => {
                    log::warn!("Failed to generate image with {}: {}", base_url, e);
                    last_error = Some(e);
                }
            }
        }

        log::error!("All API nodes failed");
        Err(last_error
            .unwrap_or_else(|| ZImageError::TransportError("all API nodes failed".into())))
    }

    fn endpoints(&self) -> &[String] {
        &self.urls
    }

    fn policy(&self) -> DispatchPolicy {
        DispatchPolicy::Failover
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{spawn_node, unreachable_url};
    use reqwest::Client;

    fn dispatcher(urls: Vec<String>) -> FailoverDispatcher {
        FailoverDispatcher::new(NodeClient::new(Client::new()), urls)
    }

    #[tokio::test]
    async fn test_empty_endpoint_list_fails_without_network() {
        let err = dispatcher(Vec::new())
            .dispatch(&GenerationRequest::new("cat"))
            .await
            .unwrap_err();

        match err {
            ZImageError::ConfigError(msg) => assert_eq!(msg, "No API URLs configured"),
            other => panic!("expected ConfigError, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_first_success_stops_iteration() {
        let first = spawn_node("200 OK", b"JPEG-FIRST").await;
        let second = spawn_node("200 OK", b"JPEG-SECOND").await;

        let image = dispatcher(vec![first.url.clone(), second.url.clone()])
            .dispatch(&GenerationRequest::new("cat"))
            .await
            .unwrap();

        assert_eq!(image.data, b"JPEG-FIRST");
        assert_eq!(image.endpoint, first.url);
        assert_eq!(first.hit_count(), 1);
        assert_eq!(second.hit_count(), 0);
    }

    #[tokio::test]
    async fn test_falls_through_to_last_node() {
        let a = spawn_node("500 Internal Server Error", b"boom-a").await;
        let b = spawn_node("503 Service Unavailable", b"boom-b").await;
        let c = spawn_node("200 OK", b"JPEG-C").await;

        let image = dispatcher(vec![a.url.clone(), b.url.clone(), c.url.clone()])
            .dispatch(&GenerationRequest::new("cat"))
            .await
            .unwrap();

        assert_eq!(image.data, b"JPEG-C");
        assert_eq!(a.hit_count(), 1);
        assert_eq!(b.hit_count(), 1);
        assert_eq!(c.hit_count(), 1);
    }

    #[tokio::test]
    async fn test_all_nodes_fail_reports_last_error() {
        let a = spawn_node("500 Internal Server Error", b"boom-a").await;
        let b = spawn_node("502 Bad Gateway", b"boom-b").await;

        let err = dispatcher(vec![a.url.clone(), b.url.clone()])
            .dispatch(&GenerationRequest::new("cat"))
            .await
            .unwrap_err();

        match err {
            ZImageError::UpstreamError { status, detail } => {
                assert_eq!(status, 502);
                assert_eq!(detail, "boom-b");
            }
            other => panic!("expected UpstreamError, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_falls_over() {
        let dead = unreachable_url().await;
        let live = spawn_node("200 OK", b"JPEG-LIVE").await;

        let image = dispatcher(vec![dead, live.url.clone()])
            .dispatch(&GenerationRequest::new("cat"))
            .await
            .unwrap();

        assert_eq!(image.data, b"JPEG-LIVE");
        assert_eq!(live.hit_count(), 1);
    }
}
