//! Full client flow against a mocked player API.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ytdata_captions::{CaptionsClient, CaptionsConfig, CaptionsError, TranscriptSource};
use ytdata_models::VideoRef;

const WATCH_HTML: &str =
    r#"<html><script>"INNERTUBE_API_KEY":"test-api-key-123";</script></html>"#;

const CAPTION_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript>
    <text start="0.21" dur="2.34">Hello world</text>
    <text start="2.55" dur="1.5">Second line</text>
</transcript>"#;

fn config_for(server: &MockServer) -> CaptionsConfig {
    CaptionsConfig {
        base_url: server.uri(),
        ..CaptionsConfig::default()
    }
}

async fn mount_watch_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_string(WATCH_HTML))
        .mount(server)
        .await;
}

/// Player payload with an auto-generated English track and a human-authored
/// German track.
fn player_body(server: &MockServer) -> serde_json::Value {
    serde_json::json!({
        "captions": {
            "playerCaptionsTracklistRenderer": {
                "captionTracks": [
                    {
                        "baseUrl": format!("{}/api/timedtext?lang=en&kind=asr", server.uri()),
                        "name": { "simpleText": "English (auto-generated)" },
                        "languageCode": "en",
                        "kind": "asr",
                        "isTranslatable": true
                    },
                    {
                        "baseUrl": format!("{}/api/timedtext?lang=de", server.uri()),
                        "name": { "simpleText": "German" },
                        "languageCode": "de",
                        "isTranslatable": true
                    }
                ]
            }
        }
    })
}

async fn mount_player(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/youtubei/v1/player"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_returns_ordered_segments() {
    let server = MockServer::start().await;
    mount_watch_page(&server).await;
    mount_player(&server, player_body(&server)).await;
    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CAPTION_XML))
        .mount(&server)
        .await;

    let client = CaptionsClient::new(config_for(&server)).unwrap();
    let segments = client
        .fetch(&VideoRef::from("dQw4w9WgXcQ"), Some("en"))
        .await
        .unwrap();

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text, "Hello world");
    assert!((segments[0].start - 0.21).abs() < f64::EPSILON);
    assert!((segments[0].duration - 2.34).abs() < f64::EPSILON);
    assert_eq!(segments[1].text, "Second line");
}

#[tokio::test]
async fn test_fetch_unknown_language() {
    let server = MockServer::start().await;
    mount_watch_page(&server).await;
    mount_player(&server, player_body(&server)).await;

    let client = CaptionsClient::new(config_for(&server)).unwrap();
    let err = client
        .fetch(&VideoRef::from("dQw4w9WgXcQ"), Some("fr"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CaptionsError::LanguageUnavailable { language } if language == "fr"
    ));
}

#[tokio::test]
async fn test_fetch_defaults_to_english() {
    let server = MockServer::start().await;
    mount_watch_page(&server).await;
    // Only a German track exists, so the default language cannot be served.
    mount_player(
        &server,
        serde_json::json!({
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {
                            "baseUrl": format!("{}/api/timedtext?lang=de", server.uri()),
                            "name": { "simpleText": "German" },
                            "languageCode": "de",
                            "isTranslatable": true
                        }
                    ]
                }
            }
        }),
    )
    .await;

    let client = CaptionsClient::new(config_for(&server)).unwrap();
    let err = client
        .fetch(&VideoRef::from("dQw4w9WgXcQ"), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CaptionsError::LanguageUnavailable { language } if language == "en"
    ));
}

#[tokio::test]
async fn test_fetch_disabled_when_no_tracks() {
    let server = MockServer::start().await;
    mount_watch_page(&server).await;
    mount_player(&server, serde_json::json!({})).await;

    let client = CaptionsClient::new(config_for(&server)).unwrap();
    let err = client
        .fetch(&VideoRef::from("dQw4w9WgXcQ"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, CaptionsError::TranscriptsDisabled));
}

#[tokio::test]
async fn test_fetch_missing_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nothing here</html>"))
        .mount(&server)
        .await;

    let client = CaptionsClient::new(config_for(&server)).unwrap();
    let err = client
        .fetch(&VideoRef::from("dQw4w9WgXcQ"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, CaptionsError::ApiKeyNotFound));
}

#[tokio::test]
async fn test_list_maps_track_metadata() {
    let server = MockServer::start().await;
    mount_watch_page(&server).await;
    mount_player(&server, player_body(&server)).await;

    let client = CaptionsClient::new(config_for(&server)).unwrap();
    let tracks = client.list(&VideoRef::from("dQw4w9WgXcQ")).await.unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].language, "English (auto-generated)");
    assert_eq!(tracks[0].language_code, "en");
    assert!(tracks[0].is_generated);
    assert!(tracks[0].is_translatable);

    assert_eq!(tracks[1].language, "German");
    assert!(!tracks[1].is_generated);
}
