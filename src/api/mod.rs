pub mod failover;
pub mod node;
pub mod round_robin;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

use crate::{
    config::{Config, DispatchPolicy},
    error::Result,
    models::{GeneratedImage, GenerationRequest},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use failover::FailoverDispatcher;
pub use node::NodeClient;
pub use round_robin::RoundRobinDispatcher;
pub use traits::EndpointDispatcher;

/// Client for Z-Image-Turbo generation backends. Owns the node list and the
/// dispatch policy selected at construction; the policy cannot change for the
/// lifetime of the client.
pub struct ZImageClient {
    dispatcher: Arc<dyn EndpointDispatcher>,
}

impl ZImageClient {
    pub fn new(config: Config) -> Result<Self> {
        let urls = config.api.unwrap_or_default().urls;
        let node = NodeClient::new(reqwest::Client::new());

        let dispatcher: Arc<dyn EndpointDispatcher> = match config.policy {
            DispatchPolicy::Failover => Arc::new(FailoverDispatcher::new(node, urls)),
            DispatchPolicy::RoundRobin => Arc::new(RoundRobinDispatcher::new(node, urls)),
        };

        Ok(Self { dispatcher })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn dispatcher(&self) -> &Arc<dyn EndpointDispatcher> {
        &self.dispatcher
    }

    pub fn endpoints(&self) -> &[String] {
        self.dispatcher.endpoints()
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.dispatcher.policy()
    }

    pub async fn generate(&self, request: GenerationRequest) -> Result<GeneratedImage> {
        self.dispatcher.dispatch(&request).await
    }

    /// Generate and write the result under `dir` with a timestamped filename.
    pub async fn generate_and_save(
        &self,
        request: GenerationRequest,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let image = self.generate(request).await?;
        let path = image.save_timestamped(dir)?;

        log::info!("Image saved to: {}", path.display());

        Ok(path)
    }
}
