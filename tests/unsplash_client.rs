// SPDX-License-Identifier: MPL-2.0
//! HTTP client checks against a local stub of the photo API.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use photo_grid::application::port::PhotoSource;
use photo_grid::domain::{PhotoId, PhotoQuery};
use photo_grid::error::FetchError;
use photo_grid::infrastructure::UnsplashClient;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request as the stub saw it: path, decoded query parameters and the
/// `Accept-Version` header.
#[derive(Debug, Clone)]
struct Recorded {
    path: &'static str,
    params: HashMap<String, String>,
    accept_version: Option<String>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

const PHOTO: &str = r#"{
    "id": "a1",
    "urls": { "regular": "https://images.example/a1.jpg" },
    "user": { "name": "Ansel" },
    "links": { "html": "https://unsplash.com/photos/a1" },
    "alt_description": "granite cliff"
}"#;

fn record(log: &Log, path: &'static str, params: HashMap<String, String>, headers: &HeaderMap) {
    let accept_version = headers
        .get("accept-version")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    log.lock().expect("log lock").push(Recorded {
        path,
        params,
        accept_version,
    });
}

/// `client_id` picks the stub behavior: `bad` is rejected, `garbage` gets a
/// body that is not JSON, anything else gets one photo.
fn respond(params: &HashMap<String, String>, body: String) -> Response {
    match params.get("client_id").map(String::as_str) {
        Some("bad") => (StatusCode::UNAUTHORIZED, "OAuth error").into_response(),
        Some("garbage") => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => ([("content-type", "application/json")], body).into_response(),
    }
}

async fn listing(
    State(log): State<Log>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record(&log, "/photos", params.clone(), &headers);
    respond(&params, format!("[{PHOTO}]"))
}

async fn search(
    State(log): State<Log>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record(&log, "/search/photos", params.clone(), &headers);
    respond(&params, format!(r#"{{ "total": 1, "results": [{PHOTO}] }}"#))
}

async fn picture() -> impl IntoResponse {
    ([("content-type", "image/jpeg")], vec![0xFFu8, 0xD8, 0xFF, 0xE0])
}

/// Starts the stub on an ephemeral port and returns its base URL.
async fn start_stub() -> (String, Log) {
    let log: Log = Arc::default();
    let router = Router::new()
        .route("/photos", get(listing))
        .route("/search/photos", get(search))
        .route("/img/a1.jpg", get(picture))
        .with_state(Arc::clone(&log));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    (format!("http://{addr}"), log)
}

/// Client talking straight to the stub, whatever proxy the environment sets.
fn client(base_url: &str, access_key: &str) -> UnsplashClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("http client");
    UnsplashClient::with_http_client(http, base_url, access_key)
}

fn requests(log: &Log) -> Vec<Recorded> {
    log.lock().expect("log lock").clone()
}

#[tokio::test]
async fn listing_uses_photos_endpoint_with_credential() {
    let (base_url, log) = start_stub().await;
    let client = client(&base_url, "KEY");

    let photos = client
        .fetch_photos(PhotoQuery::Listing)
        .await
        .expect("listing");

    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].id, PhotoId::new("a1"));
    assert_eq!(photos[0].author, "Ansel");

    let seen = requests(&log);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, "/photos");
    assert_eq!(seen[0].params.get("client_id").map(String::as_str), Some("KEY"));
    assert!(!seen[0].params.contains_key("query"));
    assert_eq!(seen[0].accept_version.as_deref(), Some("v1"));
}

#[tokio::test]
async fn search_uses_search_endpoint_and_unwraps_results() {
    let (base_url, log) = start_stub().await;
    let client = client(&base_url, "KEY");

    let photos = client
        .fetch_photos(PhotoQuery::Search("mountains".to_string()))
        .await
        .expect("search");

    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].image_url, "https://images.example/a1.jpg");

    let seen = requests(&log);
    assert_eq!(seen[0].path, "/search/photos");
    assert_eq!(
        seen[0].params.get("query").map(String::as_str),
        Some("mountains")
    );
}

#[tokio::test]
async fn special_characters_reach_the_server_verbatim() {
    let (base_url, log) = start_stub().await;
    let client = client(&base_url, "KEY");

    for text in ["rock & roll", "a=b?c#d", "  leading space", "café 東京 100%"] {
        client
            .fetch_photos(PhotoQuery::Search(text.to_string()))
            .await
            .expect("search");
        let seen = requests(&log);
        let last = seen.last().expect("request recorded");
        assert_eq!(last.params.get("query").map(String::as_str), Some(text));
        assert_eq!(last.params.get("client_id").map(String::as_str), Some("KEY"));
    }
}

#[tokio::test]
async fn rejected_credential_is_a_status_error() {
    let (base_url, _log) = start_stub().await;
    let client = client(&base_url, "bad");

    let result = client.fetch_photos(PhotoQuery::Listing).await;

    assert_eq!(result, Err(FetchError::Status(401)));
}

#[tokio::test]
async fn unexpected_body_is_a_payload_error() {
    let (base_url, _log) = start_stub().await;
    let client = client(&base_url, "garbage");

    let result = client
        .fetch_photos(PhotoQuery::Search("x".to_string()))
        .await;

    assert!(matches!(result, Err(FetchError::Payload(_))));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);

    let client = client(&format!("http://{addr}"), "KEY");
    let result = client.fetch_photos(PhotoQuery::Listing).await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn image_bytes_are_downloaded() {
    let (base_url, _log) = start_stub().await;
    let client = client(&base_url, "KEY");

    let bytes = client
        .fetch_image(format!("{base_url}/img/a1.jpg"))
        .await
        .expect("image");

    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
}

#[tokio::test]
async fn missing_image_is_a_status_error() {
    let (base_url, _log) = start_stub().await;
    let client = client(&base_url, "KEY");

    let result = client.fetch_image(format!("{base_url}/img/missing.jpg")).await;

    assert_eq!(result, Err(FetchError::Status(404)));
}
