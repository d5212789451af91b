mod common;

use content_proxy::{
    article::fetch_article,
    error::AppError,
    youtube::fetch_video,
};

use common::{test_config, StubClient};

#[tokio::test]
async fn fetch_article_decodes_the_four_fields() {
    let stub = StubClient::replying(200, r#"{"excerpt":"e","title":"t","url":"u","date_published":"d"}"#);
    let summary = fetch_article(stub.as_ref(), &test_config(), "u").await.unwrap();

    assert_eq!(summary.excerpt, "e");
    assert_eq!(summary.title, "t");
    assert_eq!(summary.url, "u");
    assert_eq!(summary.date_published, "d");
}

#[tokio::test]
async fn fetch_video_rejects_missing_identifier_without_calling_out() {
    let stub = StubClient::replying(200, r#"{"items":[]}"#);
    let err = fetch_video(stub.as_ref(), &test_config(), "https://x/?list=abc").await.unwrap_err();

    assert!(matches!(err, AppError::MissingVideoId));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn fetch_video_with_no_items_is_not_found() {
    let stub = StubClient::replying(200, r#"{"kind":"youtube#videoListResponse","items":[]}"#);
    let err = fetch_video(stub.as_ref(), &test_config(), "https://x/?v=abc").await.unwrap_err();

    assert!(matches!(err, AppError::VideoNotFound));
}

#[tokio::test]
async fn fetch_video_transport_error_is_returned() {
    let stub = StubClient::failing("dns error");
    let err = fetch_video(stub.as_ref(), &test_config(), "https://x/?v=abc").await.unwrap_err();

    assert!(matches!(err, AppError::FetchError(msg) if msg == "dns error"));
}

#[tokio::test]
async fn fetchers_are_deterministic() {
    let stub = StubClient::replying(200, r#"{"title":"t","excerpt":"e","url":"u","date_published":"d"}"#);
    let config = test_config();
    let first = fetch_article(stub.as_ref(), &config, "u").await.unwrap();
    let second = fetch_article(stub.as_ref(), &config, "u").await.unwrap();

    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}
