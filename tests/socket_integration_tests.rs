//! Room socket transport tests against a local WebSocket accept loop.

use std::sync::mpsc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use parley::api::socket;
use parley::core::action::Action;
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

/// Wait for the next action from the socket task, with a safety timeout.
fn recv_action(rx: &mpsc::Receiver<Action>) -> Action {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("timed out waiting for socket action")
}

async fn bind_server() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, format!("ws://{}/ws/1234", addr))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_connect_reports_opened_then_delivers_frames() {
    let (listener, url) = bind_server().await;

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        ws.send(Message::Text("Alice: hi".to_string()))
            .await
            .unwrap();
        ws.send(Message::Text("system offline".to_string()))
            .await
            .unwrap();
        // Hold the connection open until the client goes away
        while let Some(Ok(_)) = ws.next().await {}
    });

    let (tx, rx) = mpsc::channel();
    let conn = socket::connect(url, tx);

    assert!(matches!(recv_action(&rx), Action::SocketOpened));
    match recv_action(&rx) {
        Action::FrameReceived(raw) => assert_eq!(raw, "Alice: hi"),
        other => panic!("expected frame, got {:?}", other),
    }
    match recv_action(&rx) {
        Action::FrameReceived(raw) => assert_eq!(raw, "system offline"),
        other => panic!("expected frame, got {:?}", other),
    }

    conn.close();
    server.abort();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_send_writes_raw_text_to_server() {
    let (listener, url) = bind_server().await;

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        match ws.next().await {
            Some(Ok(Message::Text(text))) => text,
            other => panic!("expected text frame, got {:?}", other),
        }
    });

    let (tx, rx) = mpsc::channel();
    let conn = socket::connect(url, tx);

    assert!(matches!(recv_action(&rx), Action::SocketOpened));
    conn.send("hello room".to_string());

    let received = server.await.unwrap();
    assert_eq!(received, "hello room");

    conn.close();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_server_close_reports_socket_closed() {
    let (listener, url) = bind_server().await;

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        ws.close(None).await.unwrap();
    });

    let (tx, rx) = mpsc::channel();
    let _conn = socket::connect(url, tx);

    assert!(matches!(recv_action(&rx), Action::SocketOpened));
    assert!(matches!(recv_action(&rx), Action::SocketClosed));

    server.await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_unreachable_endpoint_reports_socket_closed() {
    // Nothing listens on port 1
    let (tx, rx) = mpsc::channel();
    let _conn = socket::connect("ws://127.0.0.1:1/ws/1234".to_string(), tx);

    assert!(matches!(recv_action(&rx), Action::SocketClosed));
}
