use crate::{
    config::DispatchPolicy,
    error::Result,
    models::{GeneratedImage, GenerationRequest},
};
use async_trait::async_trait;

/// Maps a generation request onto one of the configured backend nodes and
/// returns the image it produced. Implementations differ only in how they
/// pick nodes; the endpoint list itself is fixed at construction.
#[async_trait]
pub trait EndpointDispatcher: Send + Sync {
    async fn dispatch(&self, request: &GenerationRequest) -> Result<GeneratedImage>;

    fn endpoints(&self) -> &[String];

    fn policy(&self) -> DispatchPolicy;
}
