//! Integration tests for WecomClient over the default transport
//!
//! **Purpose**: Test the critical path from operation call → token
//! resolution → gated URL → HTTP → passthrough response
//!
//! **Coverage:**
//! - Happy path: gated GET hits `prefix + path` with the resolved token
//! - Structured records: POST bodies arrive at the server byte-equal
//! - Vendor error payloads (`errcode != 0`) are returned, not interpreted
//! - Transport failures: non-2xx statuses map to `WecomError::Network`
//! - Token failures: the provider's error propagates with zero requests sent
//!
//! **Infrastructure:**
//! - WireMock HTTP server (simulates the vendor API)
//! - WecomClient with the real `ReqwestTransport`

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use wecom_client::{AccessTokenProvider, ReqwestTransport, WecomClient};
use wecom_domain::{AccessToken, Result, WecomConfig, WecomError};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Token Providers
// ============================================================================

#[derive(Clone)]
struct StaticTokenProvider {
    token: String,
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<AccessToken> {
        Ok(AccessToken::from(self.token.clone()))
    }
}

struct FailingTokenProvider;

#[async_trait]
impl AccessTokenProvider for FailingTokenProvider {
    async fn access_token(&self) -> Result<AccessToken> {
        Err(WecomError::Auth("token refresh failed upstream".to_string()))
    }
}

fn client_for(server: &MockServer, token: &str) -> WecomClient {
    let config = WecomConfig::new("corp-1", "1000002")
        .with_api_prefix(format!("{}/cgi-bin/", server.uri()));
    let provider = Arc::new(StaticTokenProvider { token: token.to_string() });
    let transport = Arc::new(ReqwestTransport::builder().build().expect("transport"));

    WecomClient::with_transport(config, provider, transport)
}

// ============================================================================
// Gated GET Operations
// ============================================================================

#[tokio::test]
async fn callback_ip_list_issues_one_gated_request() {
    let server = MockServer::start().await;
    let payload = json!({"errcode": 0, "errmsg": "ok", "ip_list": ["101.226.103.0"]});

    Mock::given(method("GET"))
        .and(path("/cgi-bin/getcallbackip"))
        .and(query_param("access_token", "ACCESS_TOKEN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    let response = client.get_callback_ip_list().await.expect("response");

    assert_eq!(response, payload);
}

#[tokio::test]
async fn get_user_sends_userid_alongside_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cgi-bin/user/get"))
        .and(query_param("access_token", "ACCESS_TOKEN"))
        .and(query_param("userid", "zhangsan"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"errcode": 0, "userid": "zhangsan", "name": "张三"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    let response = client.get_user("zhangsan").await.expect("response");

    assert_eq!(response["userid"], "zhangsan");
}

#[tokio::test]
async fn department_listing_sends_flags_as_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cgi-bin/user/simplelist"))
        .and(query_param("access_token", "ACCESS_TOKEN"))
        .and(query_param("department_id", "2"))
        .and(query_param("fetch_child", "1"))
        .and(query_param("status", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"errcode": 0, "userlist": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    client.get_department_users(2, true, 0).await.expect("response");
}

#[tokio::test]
async fn user_info_lookup_includes_configured_agent_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cgi-bin/user/getuserinfo"))
        .and(query_param("access_token", "ACCESS_TOKEN"))
        .and(query_param("code", "OAUTH_CODE"))
        .and(query_param("agentid", "1000002"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"errcode": 0, "UserId": "zhangsan"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    let response = client.get_user_id_by_code("OAUTH_CODE").await.expect("response");

    assert_eq!(response["UserId"], "zhangsan");
}

// ============================================================================
// Gated POST Operations
// ============================================================================

#[tokio::test]
async fn create_user_posts_record_verbatim() {
    let server = MockServer::start().await;
    let user = json!({
        "userid": "zhangsan",
        "name": "张三",
        "department": [1, 2],
        "mobile": "13800000000"
    });

    Mock::given(method("POST"))
        .and(path("/cgi-bin/user/create"))
        .and(query_param("access_token", "ACCESS_TOKEN"))
        .and(body_json(user.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"errcode": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    client.create_user(&user).await.expect("response");
}

#[tokio::test]
async fn batch_delete_posts_wrapped_id_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cgi-bin/user/batchdelete"))
        .and(query_param("access_token", "ACCESS_TOKEN"))
        .and(body_json(json!({"useridlist": ["zhangsan", "lisi"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"errcode": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    client
        .batch_delete_users(&["zhangsan".to_string(), "lisi".to_string()])
        .await
        .expect("response");
}

#[tokio::test]
async fn invite_posts_id_lists_verbatim() {
    let server = MockServer::start().await;
    let invitation = json!({"user": ["zhangsan"], "party": [2], "tag": [3]});

    Mock::given(method("POST"))
        .and(path("/cgi-bin/batch/invite"))
        .and(query_param("access_token", "ACCESS_TOKEN"))
        .and(body_json(invitation.clone()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"errcode": 0, "invaliduser": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    client.invite(&invitation).await.expect("response");
}

// ============================================================================
// Error Propagation
// ============================================================================

#[tokio::test]
async fn vendor_error_codes_pass_through_as_success() {
    let server = MockServer::start().await;
    let payload = json!({"errcode": 40013, "errmsg": "invalid corpid"});

    Mock::given(method("GET"))
        .and(path("/cgi-bin/user/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    let response = client.get_user("zhangsan").await.expect("vendor errors are payloads");

    assert_eq!(response, payload);
}

#[tokio::test]
async fn server_error_status_surfaces_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cgi-bin/getcallbackip"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ACCESS_TOKEN");
    let result = client.get_callback_ip_list().await;

    match result {
        Err(WecomError::Network(msg)) => {
            assert!(msg.contains("503"));
            assert!(msg.contains("upstream unavailable"));
        }
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn token_failure_rejects_every_operation_without_network_calls() {
    let server = MockServer::start().await;

    let config = WecomConfig::new("corp-1", "1000002")
        .with_api_prefix(format!("{}/cgi-bin/", server.uri()));
    let transport = Arc::new(ReqwestTransport::builder().build().expect("transport"));
    let client = WecomClient::with_transport(config, Arc::new(FailingTokenProvider), transport);

    let results = vec![
        client.get_callback_ip_list().await,
        client.get_user("zhangsan").await,
        client.delete_user("zhangsan").await,
        client.create_user(&json!({"userid": "zhangsan"})).await,
        client.get_department_users(1, false, 0).await,
    ];

    for result in results {
        match result {
            Err(WecomError::Auth(msg)) => assert!(msg.contains("upstream")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no request may reach the transport");
}
