use async_trait::async_trait;
use reqwest::Client;
use url::Url;
use crate::error::Result;

/// Status and raw body of an upstream reply.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound HTTP used by the fetchers. Swapped for a stub in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: Url, headers: &[(&'static str, &str)]) -> Result<UpstreamResponse>;
}

/// `reqwest` backed client. Uses the library's default timeouts.
#[derive(Clone, Default)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: Url, headers: &[(&'static str, &str)]) -> Result<UpstreamResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(UpstreamResponse { status, body })
    }
}
