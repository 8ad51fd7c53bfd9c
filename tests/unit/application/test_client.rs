use assert_json_diff::assert_json_eq;
use globus_client::application::client::Client;
use globus_client::application::config::{
    AuthApiConfig, Config, Credentials, RateLimiterConfig, TransferApiConfig,
};
use globus_client::application::interfaces::transfer::TransferService;
use globus_client::error::AppError;
use mockito::Matcher;
use serde_json::json;

const TOKEN_BODY: &str = r#"{
    "access_token": "AT-1",
    "resource_server": "transfer.api.globus.org",
    "expires_in": 172800,
    "token_type": "Bearer",
    "scope": "urn:globus:auth:scope:transfer.api.globus.org:all"
}"#;

const NOT_FOUND_BODY: &str = r#"{
    "code": "ClientError.NotFound",
    "message": "Directory 'path' not found on endpoint",
    "request_id": "abc123"
}"#;

const MKDIR_OK_BODY: &str = r#"{
    "DATA_TYPE": "mkdir_result",
    "code": "DirectoryCreated",
    "message": "The directory was created successfully",
    "request_id": "req-1",
    "resource": "/operation/endpoint/ep-1/mkdir"
}"#;

fn file_list_body(path: &str) -> String {
    format!(
        r#"{{
            "DATA_TYPE": "file_list",
            "endpoint": "ep-1",
            "path": "{path}",
            "DATA": [
                {{
                    "DATA_TYPE": "file",
                    "name": "PRJEB00001",
                    "type": "dir",
                    "size": 4096,
                    "last_modified": "2026-01-10 12:00:00+00:00",
                    "permissions": "0755",
                    "user": "svc-submit",
                    "group": "submitters",
                    "link_target": null
                }},
                {{
                    "DATA_TYPE": "file",
                    "name": "manifest.tsv",
                    "type": "file",
                    "size": 1024,
                    "last_modified": "2026-01-11 08:30:00+00:00",
                    "permissions": "0644",
                    "user": "svc-submit",
                    "group": "submitters",
                    "link_target": null
                }}
            ]
        }}"#
    )
}

fn test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            client_id: "client-1".to_string(),
            client_secret: "secret-1".to_string(),
            refresh_token: "refresh-1".to_string(),
        },
        transfer_api: TransferApiConfig {
            base_url: format!("{server_url}/v0.10"),
            timeout: 5,
        },
        auth_api: AuthApiConfig {
            token_url: format!("{server_url}/token"),
            timeout: 5,
        },
        rate_limiter: RateLimiterConfig {
            max_requests: 100,
            period_seconds: 1,
            burst_size: 50,
        },
        endpoint_id: "ep-1".to_string(),
        token_refresh_margin_secs: 300,
    }
}

#[tokio::test]
async fn creates_every_missing_segment_in_order() {
    let mut server = mockito::Server::new_async().await;

    let token = server
        .mock("POST", "/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    let ls_first = server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/submissions")
        .with_status(404)
        .with_body(NOT_FOUND_BODY)
        .create_async()
        .await;
    let ls_second = server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/submissions/PRJ1")
        .with_status(404)
        .with_body(NOT_FOUND_BODY)
        .create_async()
        .await;

    let mkdir_first = server
        .mock("POST", "/v0.10/operation/endpoint/ep-1/mkdir")
        .match_body(Matcher::Json(json!({
            "DATA_TYPE": "mkdir",
            "path": "/submissions"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MKDIR_OK_BODY)
        .create_async()
        .await;
    let mkdir_second = server
        .mock("POST", "/v0.10/operation/endpoint/ep-1/mkdir")
        .match_body(Matcher::Json(json!({
            "DATA_TYPE": "mkdir",
            "path": "/submissions/PRJ1"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MKDIR_OK_BODY)
        .create_async()
        .await;

    let client = Client::from_config(test_config(&server.url()));
    client
        .create_submission_directory("submissions/PRJ1")
        .await
        .expect("provisioning should succeed");

    // One token grant serves all four Transfer requests
    token.assert_async().await;
    ls_first.assert_async().await;
    ls_second.assert_async().await;
    mkdir_first.assert_async().await;
    mkdir_second.assert_async().await;
}

#[tokio::test]
async fn skips_segments_that_already_exist() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    let ls = server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/data")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(file_list_body("/data"))
        .create_async()
        .await;

    let mkdir = server
        .mock("POST", "/v0.10/operation/endpoint/ep-1/mkdir")
        .expect(0)
        .create_async()
        .await;

    let client = Client::from_config(test_config(&server.url()));
    client
        .create_submission_directory("data")
        .await
        .expect("existing directory should be a no-op");

    ls.assert_async().await;
    mkdir.assert_async().await;
}

#[tokio::test]
async fn mkdir_rejection_is_logged_not_propagated() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/colliding")
        .with_status(404)
        .with_body(NOT_FOUND_BODY)
        .create_async()
        .await;

    let mkdir = server
        .mock("POST", "/v0.10/operation/endpoint/ep-1/mkdir")
        .with_status(502)
        .with_body(
            r#"{"code": "ExternalError.MkdirFailed.Exists", "message": "Path already exists", "request_id": "req-2"}"#,
        )
        .create_async()
        .await;

    let client = Client::from_config(test_config(&server.url()));
    let result = client.create_submission_directory("colliding").await;

    assert!(result.is_ok());
    mkdir.assert_async().await;
}

#[tokio::test]
async fn directory_exists_maps_statuses() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/present")
        .with_status(200)
        .with_body(file_list_body("/present"))
        .create_async()
        .await;
    server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/missing")
        .with_status(404)
        .with_body(NOT_FOUND_BODY)
        .create_async()
        .await;
    server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/forbidden")
        .with_status(403)
        .with_body(r#"{"code": "PermissionDenied", "message": "No read access", "request_id": "req-3"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/broken")
        .with_status(500)
        .with_body(r#"{"code": "InternalError", "message": "Endpoint error", "request_id": "req-4"}"#)
        .create_async()
        .await;

    let client = Client::from_config(test_config(&server.url()));

    assert!(client.directory_exists("present").await.unwrap());
    assert!(!client.directory_exists("missing").await.unwrap());
    assert!(!client.directory_exists("forbidden").await.unwrap());

    // Server errors are not an existence answer
    let err = client.directory_exists("broken").await.unwrap_err();
    assert!(matches!(err, AppError::Unexpected(s) if s.as_u16() == 500));
}

#[tokio::test]
async fn list_submitted_files_returns_raw_body() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    let body = file_list_body("/submissions/PRJ1");
    server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/submissions/PRJ1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.as_str())
        .create_async()
        .await;

    let client = Client::from_config(test_config(&server.url()));
    let raw = client
        .list_submitted_files("submissions/PRJ1")
        .await
        .expect("listing should succeed");

    let actual: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let expected: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_json_eq!(actual, expected);
}

#[tokio::test]
async fn list_submitted_files_maps_failure_to_empty() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/gone")
        .with_status(500)
        .with_body(r#"{"code": "InternalError", "message": "Endpoint error", "request_id": "req-5"}"#)
        .create_async()
        .await;

    let client = Client::from_config(test_config(&server.url()));
    let raw = client.list_submitted_files("gone").await.unwrap();

    assert_eq!(raw, "");
}

#[tokio::test]
async fn list_directory_deserializes_entries() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(TOKEN_BODY)
        .create_async()
        .await;

    server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/submissions/PRJ1")
        .with_status(200)
        .with_body(file_list_body("/submissions/PRJ1"))
        .create_async()
        .await;

    let client = Client::from_config(test_config(&server.url()));
    let listing = client.list_directory("submissions/PRJ1").await.unwrap();

    assert_eq!(listing.path, "/submissions/PRJ1");
    assert_eq!(listing.entries.len(), 2);
    assert!(listing.entries[0].is_dir());
    assert!(!listing.entries[1].is_dir());
    assert_eq!(listing.directory_names(), vec!["PRJEB00001"]);
}

#[tokio::test]
async fn expired_token_is_refreshed_and_replayed_once() {
    let mut server = mockito::Server::new_async().await;

    let token = server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(TOKEN_BODY)
        .expect(2)
        .create_async()
        .await;

    let ls = server
        .mock("GET", "/v0.10/operation/endpoint/ep-1/ls?path=/anything")
        .with_status(401)
        .with_body(
            r#"{"code": "AuthenticationFailed", "message": "Token is not active", "request_id": "req-6"}"#,
        )
        .expect(2)
        .create_async()
        .await;

    let client = Client::from_config(test_config(&server.url()));
    let err = client.list_submitted_files("anything").await.unwrap_err();

    // One refresh, one replay, then the error surfaces
    assert!(matches!(err, AppError::OAuthTokenExpired));
    token.assert_async().await;
    ls.assert_async().await;
}
