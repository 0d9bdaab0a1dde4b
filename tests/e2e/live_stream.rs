//! LiveStreamClient against a real WebSocket server

use std::time::Duration;

use logview_client::{LiveStreamClient, LiveStreamEvent, HEARTBEAT_PAYLOAD};
use logview_core::{Error, LogLevel};

use super::mock_server::{MockLogServer, StreamScript};
use crate::stream_frame;

async fn next_event(client: &mut LiveStreamClient) -> LiveStreamEvent {
    tokio::time::timeout(Duration::from_secs(5), client.event_receiver().recv())
        .await
        .expect("timed out waiting for a stream event")
        .expect("event channel closed")
}

#[tokio::test]
async fn test_entries_arrive_in_order_and_non_entries_are_skipped() {
    let server = MockLogServer::stream(StreamScript {
        frames: vec![
            stream_frame("INFO", "10:00:00 | INFO | started"),
            HEARTBEAT_PAYLOAD.to_string(),
            "not json at all".to_string(),
            stream_frame("ERROR", "10:00:01 | ERROR | boom"),
        ],
        close_with: None,
    })
    .await;

    let mut client = LiveStreamClient::connect(&server.stream_url()).await.unwrap();

    match next_event(&mut client).await {
        LiveStreamEvent::Entry(entry) => {
            assert_eq!(entry.formatted(), "10:00:00 | INFO | started");
            assert_eq!(entry.level(), LogLevel::Info);
        }
        other => panic!("Expected first entry, got {:?}", other),
    }
    match next_event(&mut client).await {
        LiveStreamEvent::Entry(entry) => {
            assert_eq!(entry.formatted(), "10:00:01 | ERROR | boom");
            assert_eq!(entry.level(), LogLevel::Error);
        }
        other => panic!("Expected second entry, got {:?}", other),
    }
}

#[tokio::test]
async fn test_heartbeat_reaches_server_and_echo_is_ignored() {
    let mut server = MockLogServer::stream(StreamScript::default()).await;
    let mut client = LiveStreamClient::connect(&server.stream_url()).await.unwrap();
    let handle = client.handle();

    handle.send_heartbeat().unwrap();
    assert_eq!(
        server.next_client_text().await.as_deref(),
        Some(HEARTBEAT_PAYLOAD)
    );

    // The echoed heartbeat never surfaces; the next event is the close.
    handle.disconnect();
    match next_event(&mut client).await {
        LiveStreamEvent::Closed { reason } => {
            assert_eq!(reason.as_deref(), Some("closed by client"));
        }
        other => panic!("Expected Closed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_close_reports_code_and_reason() {
    let server = MockLogServer::stream(StreamScript {
        frames: vec![stream_frame("INFO", "last words")],
        close_with: Some("server restart".to_string()),
    })
    .await;

    let mut client = LiveStreamClient::connect(&server.stream_url()).await.unwrap();

    assert!(matches!(
        next_event(&mut client).await,
        LiveStreamEvent::Entry(_)
    ));
    match next_event(&mut client).await {
        LiveStreamEvent::Closed { reason } => {
            assert_eq!(reason.as_deref(), Some("1001 server restart"));
        }
        other => panic!("Expected Closed, got {:?}", other),
    }

    // Exactly one Closed per connection, then the task is gone.
    assert!(client.event_receiver().recv().await.is_none());
}

#[tokio::test]
async fn test_connect_to_dead_port_is_transport_error() {
    let err = LiveStreamClient::connect("ws://127.0.0.1:1/logs/ws")
        .await
        .err()
        .unwrap();
    assert!(matches!(err, Error::Transport { .. }));
}
