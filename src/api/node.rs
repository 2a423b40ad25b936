use crate::{
    error::{Result, ZImageError},
    models::{GeneratedImage, GenerationRequest, DEFAULT_HEIGHT, DEFAULT_STEPS, DEFAULT_WIDTH},
};
use reqwest::{header, Client, Url};

/// Single-node HTTP mechanics shared by the dispatch policies: builds the
/// request URL and performs exactly one GET against one backend.
#[derive(Clone)]
pub struct NodeClient {
    client: Client,
}

impl NodeClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds `<base>?prompt=..&width=..&height=..&steps=..`. All four
    /// parameters are always present, in that order.
    pub fn request_url(base_url: &str, request: &GenerationRequest) -> Result<Url> {
        let params = [
            ("prompt", request.prompt.clone()),
            ("width", request.width.unwrap_or(DEFAULT_WIDTH).to_string()),
            ("height", request.height.unwrap_or(DEFAULT_HEIGHT).to_string()),
            ("steps", request.steps.unwrap_or(DEFAULT_STEPS).to_string()),
        ];

        Url::parse_with_params(base_url, &params)
            .map_err(|e| ZImageError::ConfigError(format!("invalid API URL '{}': {}", base_url, e)))
    }

    /// One request, one node. A non-2xx status becomes an upstream error
    /// carrying the response body as detail; transport failures are reported
    /// as such. No retry, no timeout beyond the transport default.
    pub async fn fetch(&self, base_url: &str, request: &GenerationRequest) -> Result<GeneratedImage> {
        let url = Self::request_url(base_url, request)?;

        log::debug!("Request URL: {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "image/jpeg")
            .send()
            .await
            .map_err(|e| {
                ZImageError::TransportError(format!("request to {} failed: {}", base_url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ZImageError::UpstreamError {
                status: status.as_u16(),
                detail,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ZImageError::ResponseError(e.to_string()))?;

        Ok(GeneratedImage {
            data: bytes.to_vec(),
            endpoint: base_url.to_string(),
        })
    }
}
