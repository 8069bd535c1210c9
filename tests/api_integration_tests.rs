use parley::api::{ApiClient, ApiError, ChatBackend};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// History Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_history_returns_records_in_order() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        {"content": "hello", "sender": "User 1234"},
        {"content": "hey there", "sender": "User 9999"},
        {"content": "what can I help with?", "sender": "ai"},
    ]);

    Mock::given(method("GET"))
        .and(path("/api/history/global_human_chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let records = client.history("global_human_chat").await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].content, "hello");
    assert_eq!(records[0].sender, "User 1234");
    assert_eq!(records[2].sender, "ai");
}

#[tokio::test]
async fn test_history_empty_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/history/ai_session_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let records = client.history("ai_session_42").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_history_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/history/ai_session_42"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let result = client.history("ai_session_42").await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_history_malformed_payload_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/history/ai_session_42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let result = client.history("ai_session_42").await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

// ============================================================================
// AI Chat Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_ai_reply_posts_message_and_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/ai"))
        .and(body_json(serde_json::json!({
            "message": "hello",
            "session_id": "ai_session_42",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"response": "hi, how can I help?"})),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let reply = client.ai_reply("hello", "ai_session_42").await.unwrap();

    assert_eq!(reply, "hi, how can I help?");
}

#[tokio::test]
async fn test_ai_reply_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/ai"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let result = client.ai_reply("hello", "ai_session_42").await;

    assert!(matches!(result, Err(ApiError::Api { status: 502, .. })));
}

#[tokio::test]
async fn test_ai_reply_unreachable_server_is_network_error() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1");
    let result = client.ai_reply("hello", "ai_session_42").await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_ai_reply_malformed_payload_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/ai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"answer": "wrong shape"})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let result = client.ai_reply("hello", "ai_session_42").await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}
