use url::Url;
use crate::api::models::ArticleSummary;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::upstream::HttpClient;

const API_KEY_HEADER: &str = "x-api-key";

/// Summarizes an article through the Mercury parser API.
pub async fn fetch_article(
    http: &dyn HttpClient,
    config: &Config,
    article_url: &str,
) -> Result<ArticleSummary> {
    let request_url = parser_url(&config.mercury_url, article_url);
    tracing::debug!(endpoint = %config.mercury_url, article = %article_url, "calling article parser");

    let response = http
        .get(request_url, &[(API_KEY_HEADER, config.mercury_token.as_str())])
        .await?;

    if !response.is_success() {
        return Err(AppError::UpstreamStatus { status: response.status });
    }

    parse_article(&response.body)
}

/// `<endpoint>?url=<article_url>`, with the article URL percent-encoded.
fn parser_url(endpoint: &Url, article_url: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().append_pair("url", article_url);
    url
}

/// Keeps the four summary fields and drops everything else Mercury returns.
pub fn parse_article(body: &[u8]) -> Result<ArticleSummary> {
    Ok(serde_json::from_slice(body)?)
}
