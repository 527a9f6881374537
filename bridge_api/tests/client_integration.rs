use std::time::Duration;

use bridge_api::{Client, Error, Method, Params, CLIENT_VERSION};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "test-id", "test-secret").unwrap()
}

#[tokio::test]
async fn request_signs_with_credentials_and_fixed_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/banks"))
        .and(query_param("client_id", "test-id"))
        .and(query_param("client_secret", "test-secret"))
        .and(query_param("limit", "100"))
        .and(header("Bankin-Version", CLIENT_VERSION))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resources": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get("/v2/banks", Params::new().with_limit(100))
        .await
        .unwrap();
    assert_eq!(result, Some(json!({"resources": []})));
}

#[tokio::test]
async fn access_token_travels_as_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/logout"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .post("/v2/logout", Params::new().with_access_token("tok"))
        .await
        .unwrap();
    assert!(result.is_none());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .url
        .query_pairs()
        .all(|(key, _)| key != "access_token"));
}

#[tokio::test]
async fn query_token_travels_as_access_token_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/items"))
        .and(query_param("access_token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resources": []})))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get("/v2/items", Params::new().with_access_token_query("tok"))
        .await;
    assert!(result.is_ok());

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert!(requests[0]
        .url
        .query_pairs()
        .all(|(key, _)| key != "access_token_query"));
}

#[tokio::test]
async fn malformed_json_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).get("/v2/users", Params::new()).await;
    match result {
        Err(Error::Request { message, code, .. }) => {
            assert_eq!(message, "not json");
            assert_eq!(code, "request_error");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn type_field_is_api_error() {
    let mock_server = MockServer::start().await;
    let body = json!({"type": "invalid_request", "message": "bad"});

    Mock::given(method("POST"))
        .and(path("/v2/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .post("/v2/users", Params::new())
        .await
        .unwrap_err();
    let api = err.api_error().expect("api error");
    assert_eq!(api.body(), &body);
    assert_eq!(api.message(), Some("bad"));
}

#[tokio::test]
async fn error_status_with_plain_body_is_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"id": 1})))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get("/v2/users/abc", Params::new())
        .await
        .unwrap();
    assert_eq!(result, Some(json!({"id": 1})));
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/banks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .request_with_timeout(
            Method::GET,
            "/v2/banks",
            Params::new(),
            Duration::from_millis(50),
        )
        .await;
    match result {
        Err(Error::Network(e)) => {
            assert!(e.is_timeout());
            assert!(e.url().is_none());
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn custom_api_version_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/banks/1"))
        .and(header("Bankin-Version", "2016-01-18"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server).with_api_version("2016-01-18");
    let result = client.get("/v2/banks/1", Params::new()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn absolute_path_replaces_root_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/banks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resources": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(
        &format!("{}/sandbox/", mock_server.uri()),
        "test-id",
        "test-secret",
    )
    .unwrap();
    let result = client.get("/v2/banks", Params::new()).await.unwrap();
    assert_eq!(result, Some(json!({"resources": []})));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/v2/banks");
}

#[tokio::test]
async fn every_verb_sends_json_content_type_and_empty_object() {
    let mock_server = MockServer::start().await;

    for verb in ["POST", "PUT", "DELETE"] {
        Mock::given(method(verb))
            .and(path("/v2/users/u-1"))
            .and(header("Content-Type", "application/json"))
            .and(header("Bankin-Version", CLIENT_VERSION))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"verb": verb})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client(&mock_server);
    let posted = client.post("/v2/users/u-1", Params::new()).await.unwrap();
    assert_eq!(posted, Some(json!({"verb": "POST"})));
    let put = client
        .put("/v2/users/u-1", Params::new().with("new_password", "pw"))
        .await
        .unwrap();
    assert_eq!(put, Some(json!({"verb": "PUT"})));
    let deleted = client
        .delete("/v2/users/u-1", Params::new().with_access_token("tok"))
        .await
        .unwrap();
    assert_eq!(deleted, Some(json!({"verb": "DELETE"})));
}
