//! Failure injection tests for the gateway.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::TOKEN_PATH;

#[tokio::test]
async fn test_policy_unreachable_is_bad_gateway() {
    let backend = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&backend).await;

    let dead = common::closed_addr().await;
    let config = common::config_for(&format!("http://{}", dead), &backend.uri());
    let gateway = common::start_gateway(config).await;

    let res = common::client()
        .get(gateway.url("/api/2.0/mlflow/experiments/list"))
        .header("Authorization", "Bearer user-token")
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 502);
    assert_eq!(res.text().await.unwrap(), "Authorization service unavailable.");
}

#[tokio::test]
async fn test_policy_html_reply_is_bad_gateway() {
    let policy = MockServer::start().await;
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("content-type", "text/html")
                .set_body_string("<html><body>Service Unavailable</body></html>"),
        )
        .expect(1)
        .mount(&policy)
        .await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&backend).await;

    let gateway = common::start_gateway(common::mock_config(&policy, &backend)).await;

    let res = common::client()
        .get(gateway.url("/api/2.0/mlflow/experiments/list"))
        .header("Authorization", "Bearer user-token")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body = res.text().await.unwrap();
    assert!(!body.contains("<html>"), "upstream body must not be echoed");
}

#[tokio::test]
async fn test_policy_json_error_is_a_denial() {
    let policy = MockServer::start().await;
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"error":"invalid_grant","error_description":"Invalid bearer token"}"#,
        ))
        .expect(1)
        .mount(&policy)
        .await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&backend).await;

    let gateway = common::start_gateway(common::mock_config(&policy, &backend)).await;

    let res = common::client()
        .get(gateway.url("/api/2.0/mlflow/experiments/list"))
        .header("Authorization", "Bearer expired")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 403);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"error":"invalid_grant","error_description":"Invalid bearer token"}"#
    );
}

#[tokio::test]
async fn test_backend_unreachable_is_bad_gateway() {
    let policy = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
        .expect(1)
        .mount(&policy)
        .await;

    let dead = common::closed_addr().await;
    let config = common::config_for(&policy.uri(), &format!("http://{}", dead));
    let gateway = common::start_gateway(config).await;

    let res = common::client()
        .get(gateway.url("/api/2.0/mlflow/experiments/list"))
        .header("Authorization", "Bearer user-token")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    assert_eq!(res.text().await.unwrap(), "Upstream request failed.");
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let policy = MockServer::start().await;
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
        .mount(&policy)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&backend)
        .await;

    let mut config = common::mock_config(&policy, &backend);
    config.timeouts.upstream_secs = 1;
    let gateway = common::start_gateway(config).await;

    let res = common::client()
        .get(gateway.url("/api/2.0/mlflow/experiments/list"))
        .header("Authorization", "Bearer user-token")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 504);
    assert_eq!(res.text().await.unwrap(), "Upstream request timed out.");
}

#[tokio::test]
async fn test_slow_policy_times_out() {
    let policy = MockServer::start().await;
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": true}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&policy)
        .await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&backend).await;

    let mut config = common::mock_config(&policy, &backend);
    config.timeouts.upstream_secs = 1;
    let gateway = common::start_gateway(config).await;

    let res = common::client()
        .get(gateway.url("/api/2.0/mlflow/experiments/list"))
        .header("Authorization", "Bearer user-token")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 504);
    assert_eq!(res.text().await.unwrap(), "Authorization service timed out.");
}
