//! HTTP transport tests against a mockito relay

mod common;

use common::fixtures::{make_credential, make_form, ACCEPTED, INVALID_KEY, TEST_KEY};
use folio::config::RelayConfig;
use folio::relay::{create_transport, RelayTransport, Web3FormsTransport};
use folio::submit::SubmissionController;
use folio::types::{ContactPayload, FormInput, SubmissionOutcome};
use mockito::{Matcher, Server};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

fn submit_url(server: &Server) -> Url {
    Url::parse(&format!("{}/submit", server.url())).unwrap()
}

fn transport(url: Url) -> Web3FormsTransport {
    Web3FormsTransport::new(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_posts_json_with_headers() {
    let mut server = Server::new_async().await;
    let payload = ContactPayload::new(&make_form(), TEST_KEY);

    let mock = server
        .mock("POST", "/submit")
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "Ana",
            "email": "a@x.com",
            "message": "Hi",
            "access_key": TEST_KEY,
            "subject": "New Portfolio Message from Ana",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ACCEPTED)
        .create_async()
        .await;

    let response = transport(submit_url(&server)).send(&payload).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, ACCEPTED);
}

#[tokio::test]
async fn test_error_status_is_passed_through() {
    let mut server = Server::new_async().await;
    let payload = ContactPayload::new(&make_form(), "wrong");

    let mock = server
        .mock("POST", "/submit")
        .match_body(Matcher::PartialJson(serde_json::json!({ "access_key": "wrong" })))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(INVALID_KEY)
        .create_async()
        .await;

    let response = transport(submit_url(&server)).send(&payload).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 400);
    assert_eq!(response.body, INVALID_KEY);
}

#[tokio::test]
async fn test_connection_refused_is_error() {
    // Bind then drop to get a port with nothing listening
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let url = Url::parse(&format!("http://{addr}/submit")).unwrap();
    let payload = ContactPayload::new(&make_form(), TEST_KEY);

    let result = transport(url).send(&payload).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_controller_over_http_end_to_end() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/submit")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "access_key": TEST_KEY,
            "subject": "New Portfolio Message from Ana",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ACCEPTED)
        .expect(1)
        .create_async()
        .await;

    let config = RelayConfig::default()
        .with_endpoint(submit_url(&server))
        .with_timeout(Duration::from_secs(5))
        .with_credential(make_credential());

    let transport = create_transport(&config).unwrap();
    assert!(transport.endpoint().starts_with("http://127.0.0.1:"));

    let controller = SubmissionController::new(Arc::from(transport), config.credential.clone());
    let outcome = controller.submit_input(make_form()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, SubmissionOutcome::Success);
    assert_eq!(controller.form(), FormInput::default());
}

#[tokio::test]
async fn test_controller_over_http_html_error_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/submit")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let config = RelayConfig::default()
        .with_endpoint(submit_url(&server))
        .with_credential(make_credential());
    let controller =
        SubmissionController::new(Arc::from(create_transport(&config).unwrap()), config.credential);

    let outcome = controller.submit_input(make_form()).await.unwrap();

    mock.assert_async().await;
    assert!(matches!(outcome, SubmissionOutcome::TransportError { detail } if detail.contains("502")));
    assert_eq!(controller.form(), make_form());
}

#[tokio::test]
async fn test_controller_over_http_offline() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let config = RelayConfig::default()
        .with_endpoint(Url::parse(&format!("http://{addr}/submit")).unwrap())
        .with_credential(make_credential());

    let controller =
        SubmissionController::new(Arc::from(create_transport(&config).unwrap()), config.credential);
    let outcome = controller.submit_input(make_form()).await.unwrap();

    assert!(matches!(outcome, SubmissionOutcome::TransportError { .. }));
    assert_eq!(controller.form(), make_form());
}
