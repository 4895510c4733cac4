use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use tubesum::models::{ContentKind, ItemState, SummaryRequest, SummaryStyle};
use tubesum::utils::AppSettings;
use tubesum::{HttpGateway, SummaryGateway};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer, token: Option<&str>) -> AppSettings {
    AppSettings {
        api_base_url: format!("{}/", server.uri()),
        csrf_token: token.map(str::to_string),
        ..AppSettings::default()
    }
}

fn video_request(reference: &str) -> SummaryRequest {
    SummaryRequest::new(ContentKind::Video, reference, SummaryStyle::Detailed)
}

#[tokio::test]
async fn test_video_post_carries_token_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/video/"))
        .and(header("X-CSRFToken", "tok123"))
        .and(body_json(json!({
            "video_id": "dQw4w9WgXcQ",
            "style": "detailed",
            "save_to_file": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "summary": "S",
            "transcript": "T",
            "file_path": "/srv/summaries/dQw4w9WgXcQ.txt"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, Some("tok123"))));
    let result = assert_ok!(gateway.fetch_single(&video_request("dQw4w9WgXcQ")).await);

    assert_eq!(result.state(), ItemState::Resolved("S"));
    assert_eq!(result.transcript_text.as_deref(), Some("T"));
    assert_eq!(result.id, "dQw4w9WgXcQ");
}

#[tokio::test]
async fn test_prime_picks_up_encoded_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "csrftoken=abc%2B1; Path=/")
                .set_body_string("<html></html>"),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/video/"))
        .and(header("X-CSRFToken", "abc+1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, None)));
    assert_eq!(gateway.csrf_token(), None);

    assert_ok!(gateway.prime().await);
    assert_eq!(gateway.csrf_token().as_deref(), Some("abc+1"));

    let text = assert_ok!(gateway.fetch_item("abc", SummaryStyle::Brief).await);
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn test_missing_token_omits_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/video/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "S" })))
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, None)));
    assert_ok!(gateway.fetch_single(&video_request("https://youtu.be/dQw4w9WgXcQ")).await);

    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
    assert!(!received[0].headers.contains_key("x-csrftoken"));

    let body: serde_json::Value = assert_ok!(serde_json::from_slice(&received[0].body));
    assert_eq!(body["video_url"], "https://youtu.be/dQw4w9WgXcQ");
    assert!(body.get("video_id").is_none());
}

#[tokio::test]
async fn test_error_status_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/video/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Invalid YouTube URL" })))
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, Some("t"))));
    let err = assert_err!(gateway.fetch_single(&video_request("dQw4w9WgXcQ")).await);
    assert_eq!(err.message, "Invalid YouTube URL");
    assert_eq!(err.status, Some(400));
}

#[tokio::test]
async fn test_error_status_without_body_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/video/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, Some("t"))));
    let err = assert_err!(gateway.fetch_item("abc", SummaryStyle::Detailed).await);
    assert_eq!(err.message, "Failed to fetch summary (status 502)");
    assert_eq!(err.status, Some(502));
}

#[tokio::test]
async fn test_ok_status_with_error_field_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/video/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "Transcript disabled" })))
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, Some("t"))));
    let err = assert_err!(gateway.fetch_single(&video_request("dQw4w9WgXcQ")).await);
    assert_eq!(err.message, "Transcript disabled");
}

#[tokio::test]
async fn test_unparseable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/playlist/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, Some("t"))));
    let request = SummaryRequest::new(
        ContentKind::Playlist,
        "https://www.youtube.com/playlist?list=PL1",
        SummaryStyle::Detailed,
    );
    let err = assert_err!(gateway.fetch_playlist(&request).await);
    assert!(err.message.starts_with("Malformed response"), "{}", err.message);
}

#[tokio::test]
async fn test_playlist_entries_map_to_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/playlist/"))
        .and(body_json(json!({
            "playlist_url": "https://www.youtube.com/playlist?list=PL1",
            "style": "bullet",
            "save_to_file": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "playlist_info": {
                "url": "https://www.youtube.com/playlist?list=PL1",
                "video_count": 3,
                "style": "bullet"
            },
            "summaries": [
                { "video_id": "a", "title": "A", "success": true, "file_path": "/a.txt" },
                { "video_id": "b", "title": "B", "success": false, "error": "private video" },
                { "video_id": "c", "title": "C", "success": true, "summary": "done" }
            ]
        })))
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, Some("t"))));
    let request = SummaryRequest::new(
        ContentKind::Playlist,
        "https://www.youtube.com/playlist?list=PL1",
        SummaryStyle::Bullet,
    )
    .with_persist(false);
    let batch = assert_ok!(gateway.fetch_playlist(&request).await);

    assert_eq!(batch.video_count, 3);
    assert_eq!(batch.style, SummaryStyle::Bullet);
    assert_eq!(batch.items[0].state(), ItemState::Placeholder);
    assert_eq!(batch.items[1].state(), ItemState::Rejected("private video"));
    assert_eq!(batch.items[2].state(), ItemState::Resolved("done"));
    assert_eq!(batch.pending_indices(), vec![0]);
}

#[tokio::test]
async fn test_item_without_summary_gets_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize/video/"))
        .and(body_json(json!({ "video_id": "a", "style": "brief" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, Some("t"))));
    let text = assert_ok!(gateway.fetch_item("a", SummaryStyle::Brief).await);
    assert_eq!(text, "No summary content available.");
}

#[tokio::test]
async fn test_connection_check_reports_both_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/summarize/test-connection/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "API connection successful",
            "response_code": 200
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/summarize/test-connection/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let gateway = assert_ok!(HttpGateway::new(&settings_for(&server, None)));
    let report = assert_ok!(gateway.check_connection().await);
    assert!(report.is_ok());
    assert_eq!(report.response_code, Some(200));

    let err = assert_err!(gateway.check_connection().await);
    assert_eq!(err.message, "Connection check failed (status 503)");
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let settings = AppSettings {
        api_base_url: "not a url".to_string(),
        ..AppSettings::default()
    };
    assert!(HttpGateway::new(&settings).is_err());
}
