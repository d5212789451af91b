use url::{ParseError, Url};
use crate::api::models::VideoSummary;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::upstream::HttpClient;
use raw::VideoListResponse;

// Resolves scheme-less input such as `www.youtube.com/watch?v=...`.
const RELATIVE_BASE: &str = "http://localhost/";

// Shape of a YouTube Data API v3 `videos.list` reply with `part=snippet`.
// Only a handful of fields reach the summary. Absent or `null` fields
// default and unknown ones are ignored.
mod raw {
    #![allow(dead_code)]

    use serde::Deserialize;
    use crate::api::models::null_as_default;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct VideoListResponse {
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) kind: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) etag: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) page_info: PageInfo,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) items: Vec<VideoItem>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct PageInfo {
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) total_results: u32,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) results_per_page: u32,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct VideoItem {
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) kind: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) etag: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) snippet: Snippet,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct Snippet {
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) published_at: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) channel_id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) title: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) description: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) thumbnails: Thumbnails,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) channel_title: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) tags: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) category_id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) live_broadcast_content: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) default_language: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) localized: Localized,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct Thumbnails {
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) default: Thumbnail,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) medium: Thumbnail,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) high: Thumbnail,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct Thumbnail {
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) url: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) width: u32,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) height: u32,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct Localized {
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) title: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub(super) description: String,
    }
}

/// Summarizes a YouTube video from its watch URL (`...?v=<id>`).
pub async fn fetch_video(
    http: &dyn HttpClient,
    config: &Config,
    video_url: &str,
) -> Result<VideoSummary> {
    let id = video_id(video_url)?;
    tracing::debug!(endpoint = %config.youtube_api_url, video_id = %id, "calling video api");

    let response = http
        .get(videos_url(&config.youtube_api_url, &id, &config.youtube_token), &[])
        .await?;

    if !response.is_success() {
        return Err(AppError::UpstreamStatus { status: response.status });
    }

    summarize_video(video_url, &response.body)
}

/// First `v` query value of a watch URL.
pub fn video_id(video_url: &str) -> Result<String> {
    let parsed = match Url::parse(video_url) {
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE).and_then(|base| base.join(video_url))
        }
        other => other,
    }
    .map_err(|_| AppError::MissingVideoId)?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
        .ok_or(AppError::MissingVideoId)
}

fn videos_url(endpoint: &Url, id: &str, key: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("part", "snippet")
        .append_pair("id", id)
        .append_pair("key", key);
    url
}

/// Projects the first item of a `videos.list` body. The caller's URL is
/// echoed back as given.
pub fn summarize_video(video_url: &str, body: &[u8]) -> Result<VideoSummary> {
    let response: VideoListResponse = serde_json::from_slice(body)?;
    tracing::debug!(
        total_results = response.page_info.total_results,
        items = response.items.len(),
        "decoded video list"
    );
    let item = response.items.into_iter().next().ok_or(AppError::VideoNotFound)?;
    let snippet = item.snippet;

    Ok(VideoSummary {
        title: snippet.title,
        url: video_url.to_string(),
        author_name: snippet.channel_title,
        thumbnail: snippet.thumbnails.default.url,
        date_published: snippet.published_at,
        description: snippet.description,
    })
}
