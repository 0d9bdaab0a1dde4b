//! HistoryApi against canned HTTP responses

use logview_client::{HistoryApi, ServerEndpoints, DEFAULT_REQUEST_TIMEOUT, DEFAULT_STREAM_PATH};
use logview_core::{decode_history_page, Error, LogLevel};

use super::mock_server::{MockLogServer, Route};
use crate::{content_body, files_body};

fn api_for(server: &MockLogServer) -> HistoryApi {
    let endpoints = ServerEndpoints::new(&server.base_url(), DEFAULT_STREAM_PATH).unwrap();
    HistoryApi::new(endpoints, DEFAULT_REQUEST_TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_fetch_config_reads_title() {
    let server = MockLogServer::http(vec![Route::ok("/logs/config", r#"{"title":"Prod logs"}"#)]).await;
    let config = api_for(&server).fetch_config().await.unwrap();
    assert_eq!(config.title, "Prod logs");
}

#[tokio::test]
async fn test_fetch_files_lists_descriptors() {
    let server = MockLogServer::http(vec![Route::ok(
        "/logs/files",
        files_body(&["app.log", "app.log.1"]),
    )])
    .await;

    let files = api_for(&server).fetch_files().await.unwrap();
    let names: Vec<_> = files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, ["app.log", "app.log.1"]);
    assert_eq!(files[0].size, "1.2 KB");
}

#[tokio::test]
async fn test_fetch_files_error_body_is_server_error() {
    let server = MockLogServer::http(vec![Route::ok(
        "/logs/files",
        r#"{"error":"log directory missing"}"#,
    )])
    .await;

    let err = api_for(&server).fetch_files().await.unwrap_err();
    match err {
        Error::Server { message } => assert_eq!(message, "log directory missing"),
        other => panic!("Expected Server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_page_encodes_filename_and_query() {
    let server = MockLogServer::http(vec![Route::ok(
        "/logs/content/",
        content_body(&["10:00 | INFO | a", "10:01 | WARNING | b"], 2, 4),
    )])
    .await;

    let page = api_for(&server).fetch_page("my app.log", 2, 50).await.unwrap();

    assert_eq!(
        server.requests(),
        ["/logs/content/my%20app.log?page=2&page_size=50"]
    );
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.current_page, Some(2));
    assert_eq!(page.total_lines, Some(8));

    let entries = decode_history_page(&page.logs);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].level(), LogLevel::Warning);
}

#[tokio::test]
async fn test_fetch_page_error_body_is_server_error() {
    let server = MockLogServer::http(vec![Route::ok(
        "/logs/content/",
        r#"{"error":"File not found"}"#,
    )])
    .await;

    let err = api_for(&server).fetch_page("gone.log", 1, 100).await.unwrap_err();
    assert!(matches!(err, Error::Server { .. }));
    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_non_success_status_is_http_status_error() {
    let server = MockLogServer::http(Vec::new()).await;
    let err = api_for(&server).fetch_page("app.log", 1, 100).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404 }));
}

#[tokio::test]
async fn test_logs_not_an_array_is_malformed() {
    let server = MockLogServer::http(vec![Route::status(
        "/logs/content/",
        200,
        r#"{"logs":"oops","total_pages":1}"#,
    )])
    .await;

    let err = api_for(&server).fetch_page("app.log", 1, 100).await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_server_failure_status_is_reported() {
    let server = MockLogServer::http(vec![Route::status("/logs/files", 500, "{}")]).await;
    let err = api_for(&server).fetch_files().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500 }));
}
