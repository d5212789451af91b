use serde::{Deserialize, Deserializer, Serialize};

/// Raw query pairs, in request order. Repeated keys are kept.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct UrlQuery(pub Vec<(String, String)>);

impl UrlQuery {
    /// The first `url` parameter, treating an empty value as absent.
    pub fn url(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == "url")
            .map(|(_, value)| value.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Response body of `GET /article`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_published: String,
}

/// Response body of `GET /youtube`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSummary {
    pub title: String,
    pub url: String,
    pub author_name: String,
    pub thumbnail: String,
    pub date_published: String,
    pub description: String,
}

// Upstreams send `null` for values they could not fill in.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
