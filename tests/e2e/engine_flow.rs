//! Engine driven end to end against the mock server

use std::time::Duration;

use logview_app::config::Settings;
use logview_app::{AppState, ConnectionState, Engine, Message, PageDirection, Tab};

use super::mock_server::{MockLogServer, Route, StreamScript};
use crate::{content_body, files_body, stream_frame};

fn settings_for(server: &MockLogServer, stream: bool) -> Settings {
    let mut settings = Settings::default();
    settings.server.url = server.base_url();
    settings.stream.enabled = stream;
    settings.history.page_size = 2;
    settings
}

/// Feed channel messages into the engine until `done` holds.
async fn pump_until(engine: &mut Engine, done: impl Fn(&AppState) -> bool) {
    let result = tokio::time::timeout(Duration::from_secs(5), async {
        while !done(&engine.state) {
            match engine.msg_rx.recv().await {
                Some(msg) => engine.process_message(msg),
                None => break,
            }
        }
    })
    .await;
    assert!(result.is_ok(), "timed out waiting for engine state");
}

fn history_routes() -> Vec<Route> {
    vec![
        Route::ok("/logs/config", r#"{"title":"Staging"}"#),
        Route::ok("/logs/files", files_body(&["app.log"])),
        Route::ok(
            "/logs/content/app.log?page=1&",
            content_body(&["a | INFO | one", "b | INFO | two"], 1, 2),
        ),
        Route::ok(
            "/logs/content/app.log?page=2&",
            content_body(&["c | ERROR | three"], 2, 2),
        ),
    ]
}

#[tokio::test]
async fn test_startup_loads_title_and_file_listing() {
    let server = MockLogServer::http(history_routes()).await;
    let mut engine = Engine::new(settings_for(&server, false)).unwrap();

    engine.start();
    pump_until(&mut engine, |s| !s.files.loading && s.title == "Staging").await;

    assert_eq!(engine.state.files.files.len(), 1);
    assert_eq!(engine.state.files.files[0].filename, "app.log");
    assert!(engine.state.files.error.is_none());

    engine.shutdown().await;
}

#[tokio::test]
async fn test_select_file_and_page_forward() {
    let server = MockLogServer::http(history_routes()).await;
    let mut engine = Engine::new(settings_for(&server, false)).unwrap();

    engine.process_message(Message::SwitchTab(Tab::History));
    engine.process_message(Message::SelectFile("app.log".to_string()));
    pump_until(&mut engine, |s| !s.history.is_loading()).await;

    assert_eq!(engine.state.history.page_number(), 1);
    assert_eq!(engine.state.history.total_pages(), 2);
    assert_eq!(engine.state.history.entries().len(), 2);

    engine.process_message(Message::ChangePage(PageDirection::Next));
    pump_until(&mut engine, |s| !s.history.is_loading()).await;

    assert_eq!(engine.state.history.page_number(), 2);
    assert_eq!(engine.state.history.entries().len(), 1);
    assert_eq!(engine.state.history.entries()[0].formatted(), "c | ERROR | three");
    assert!(server
        .requests()
        .iter()
        .any(|r| r == "/logs/content/app.log?page=2&page_size=2"));

    engine.shutdown().await;
}

#[tokio::test]
async fn test_missing_file_keeps_previous_entries() {
    let mut routes = history_routes();
    routes.push(Route::ok("/logs/content/gone.log", r#"{"error":"File not found"}"#));
    let server = MockLogServer::http(routes).await;
    let mut engine = Engine::new(settings_for(&server, false)).unwrap();

    engine.process_message(Message::SelectFile("app.log".to_string()));
    pump_until(&mut engine, |s| !s.history.is_loading()).await;
    assert_eq!(engine.state.history.entries().len(), 2);

    engine.process_message(Message::SelectFile("gone.log".to_string()));
    pump_until(&mut engine, |s| !s.history.is_loading()).await;

    assert!(engine.state.history.last_error().is_some());
    assert_eq!(engine.state.history.entries().len(), 2);
    assert!(engine.state.notice.is_some());

    engine.shutdown().await;
}

#[tokio::test]
async fn test_live_entries_then_manual_stop() {
    let routes = vec![
        Route::ok("/logs/config", "{}"),
        Route::ok("/logs/files", "[]"),
    ];
    let script = StreamScript {
        frames: vec![
            stream_frame("INFO", "first"),
            stream_frame("WARNING", "second"),
        ],
        close_with: None,
    };
    let server = MockLogServer::start(routes, script).await;
    let mut engine = Engine::new(settings_for(&server, true)).unwrap();

    engine.start();
    pump_until(&mut engine, |s| {
        s.supervisor.state() == ConnectionState::Connected && s.live.len() == 2
    })
    .await;

    let texts: Vec<_> = engine
        .state
        .live
        .newest(2)
        .iter()
        .map(|e| e.formatted().to_string())
        .collect();
    assert_eq!(texts, ["first", "second"]);

    engine.process_message(Message::ToggleStreaming);
    pump_until(&mut engine, |s| {
        s.supervisor.state() == ConnectionState::Disconnected
    })
    .await;
    assert!(engine.state.supervisor.manual_disconnect());

    engine.shutdown().await;
}
