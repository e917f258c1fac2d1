mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, free_port, temp_file};
use passcard::api::{ApiError, NETWORK_ERROR_MESSAGE, SERVER_ERROR_MESSAGE};
use passcard::model::{CandidateImage, EditDraft, SelectedFile};
use tempfile::TempDir;

#[tokio::test]
async fn fetch_profile_parses_user_envelope() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::user(
            "Ana Souza",
            "https://cdn.example.com/ana.png",
            "10 de mar. de 2025",
        ))
        .await;

    let client = client_for(&backend.base_url());
    let profile = client.fetch_profile().await.unwrap();

    assert_eq!(profile.name, "Ana Souza");
    assert_eq!(profile.profile_image, "https://cdn.example.com/ana.png");
    assert_eq!(profile.valid_until, "10 de mar. de 2025");

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/user");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_not_doubled() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::user("Ana", "x", "y"))
        .await;

    let client = client_for(&format!("{}/", backend.base_url()));
    client.fetch_profile().await.unwrap();

    assert_eq!(backend.captured_requests().await[0].path, "/user");
}

#[tokio::test]
async fn server_error_maps_to_fixed_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(503, "database is down"))
        .await;

    let err = client_for(&backend.base_url())
        .fetch_profile()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Server { status: 503 }));
    assert_eq!(err.user_message(), SERVER_ERROR_MESSAGE);
}

#[tokio::test]
async fn client_error_passes_server_message_through() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(422, "name is too long"))
        .await;

    let err = client_for(&backend.base_url())
        .save_profile(&EditDraft::default(), "10 de mar. de 2026")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Client { status: Some(422), .. }));
    assert_eq!(err.user_message(), "name is too long");
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let port = free_port();
    let err = client_for(&format!("http://127.0.0.1:{}", port))
        .fetch_profile()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn malformed_success_body_is_client_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"profile": {}}"#))
        .await;

    let err = client_for(&backend.base_url())
        .fetch_profile()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Client { status: Some(200), .. }));
}

#[tokio::test]
async fn save_sends_multipart_fields_in_order() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "avatar.png", b"\x89PNG fake image bytes");
    let image = CandidateImage::try_from(SelectedFile::new(&path, "image/png")).unwrap();
    let draft = EditDraft {
        name: "Ana Souza".to_string(),
        image: Some(image),
    };

    client_for(&backend.base_url())
        .save_profile(&draft, "10 de mar. de 2026")
        .await
        .unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/user/edit");
    assert!(request
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data"));

    let name = request.part_offset("name").unwrap();
    let image = request.part_offset("image").unwrap();
    let valid_until = request.part_offset("validUntil").unwrap();
    assert!(name < image && image < valid_until);

    let body = request.body_text();
    assert!(body.contains("Ana Souza"));
    assert!(body.contains("filename=\"avatar.png\""));
    assert!(body.contains("Content-Type: image/png"));
    assert!(body.contains("fake image bytes"));
    assert!(body.contains("10 de mar. de 2026"));
}

#[tokio::test]
async fn save_without_image_omits_image_part() {
    let backend = MockBackend::start().await;
    let draft = EditDraft {
        name: String::new(),
        image: None,
    };

    client_for(&backend.base_url())
        .save_profile(&draft, "1 de jan. de 2027")
        .await
        .unwrap();

    let request = &backend.captured_requests().await[0];
    assert!(request.part_offset("name").is_some());
    assert!(request.part_offset("image").is_none());
    assert!(request.part_offset("validUntil").is_some());
}

#[tokio::test]
async fn unreadable_image_fails_before_any_request() {
    let backend = MockBackend::start().await;
    let image =
        CandidateImage::try_from(SelectedFile::new("/nonexistent/me.png", "image/png")).unwrap();
    let draft = EditDraft {
        name: "Ana".to_string(),
        image: Some(image),
    };

    let err = client_for(&backend.base_url())
        .save_profile(&draft, "1 de jan. de 2027")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Image { .. }));
    assert!(backend.captured_requests().await.is_empty());
}
