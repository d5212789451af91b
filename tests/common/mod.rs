#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use content_proxy::{
    api::routes::create_router,
    config::Config,
    error::{AppError, Result},
    upstream::{HttpClient, UpstreamResponse},
    AppState,
};
use url::Url;

/// One recorded outbound request.
#[derive(Debug, Clone)]
pub struct Call {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

/// Answers every request with the same canned reply and remembers what was asked.
pub struct StubClient {
    reply: std::result::Result<UpstreamResponse, String>,
    calls: Mutex<Vec<Call>>,
}

impl StubClient {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(UpstreamResponse { status, body: body.as_bytes().to_vec() }),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn get(&self, url: Url, headers: &[(&'static str, &str)]) -> Result<UpstreamResponse> {
        self.calls.lock().unwrap().push(Call {
            url,
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        });
        self.reply.clone().map_err(AppError::FetchError)
    }
}

pub fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        mercury_url: Url::parse("https://mercury.test/parser").unwrap(),
        mercury_token: "mercury-secret".to_string(),
        youtube_api_url: Url::parse("https://youtube.test/v3/videos").unwrap(),
        youtube_token: "youtube-secret".to_string(),
    }
}

pub fn router_with(stub: Arc<StubClient>) -> Router {
    create_router(AppState {
        config: Arc::new(test_config()),
        http: stub,
    })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
