mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_text, test_app};
use serde_json::json;
use tower::util::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/submit")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn successful_submission_redirects_to_viewer() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submission"))
        .and(body_json(json!({"email": "a@b.com", "batchNo": "B1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "ok",
            "data": {
                "pdfUrl": "https://x/y.pdf",
                "productName": "Widget",
                "submittedAt": "2025-01-01T00:00:00Z"
            }
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(form_request("email=a%40b.com&batch_no=B1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response.headers()[header::LOCATION].to_str().unwrap();
    let (route, query) = location.split_once('?').expect("redirect carries a query");
    assert_eq!(route, "/pdf");

    let params: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap();
    assert!(params.contains(&("url".to_string(), "https://x/y.pdf".to_string())));
    assert!(params.contains(&("product".to_string(), "Widget".to_string())));
}

#[tokio::test]
async fn missing_product_name_falls_back_to_report() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "ok",
            "data": {"pdfUrl": "https://x/y.pdf"}
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(form_request("email=a%40b.com&batch_no=B1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    let params: Vec<(String, String)> =
        serde_urlencoded::from_str(location.split_once('?').unwrap().1).unwrap();
    assert!(params.contains(&("product".to_string(), "Report".to_string())));
}

#[tokio::test]
async fn empty_fields_fail_validation_without_backend_call() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submission"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(form_request("email=&batch_no="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Please fill in all fields"));
    // The form is still rendered for a retry
    assert!(body.contains("id=\"submission-form\""));
}

#[tokio::test]
async fn malformed_email_fails_validation_without_backend_call() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submission"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(form_request("email=not-an-email&batch_no=B1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Please enter a valid email address"));
    // User input survives the round trip
    assert!(body.contains("value=\"not-an-email\""));
    assert!(body.contains("value=\"B1\""));
}

#[tokio::test]
async fn backend_rejection_renders_its_message() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Batch not found"
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(form_request("email=a%40b.com&batch_no=NOPE"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Batch not found"));
    assert!(body.contains("id=\"submission-form\""));
}

#[tokio::test]
async fn rejection_without_message_uses_generic_fallback() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(form_request("email=a%40b.com&batch_no=B1"))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(body.contains("Failed to submit form. Please try again."));
}

#[tokio::test]
async fn error_status_with_envelope_surfaces_backend_message() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submission"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "success": false,
            "message": "Batch service unavailable"
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(form_request("email=a%40b.com&batch_no=B1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_text(response).await;
    assert!(body.contains("Batch service unavailable"));
}

#[tokio::test]
async fn error_status_without_message_uses_transport_fallback() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/submission"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(form_request("email=a%40b.com&batch_no=B1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_text(response).await;
    assert!(body.contains(
        "Something went wrong. Please check your batch number and try again."
    ));
}

#[tokio::test]
async fn unreachable_backend_uses_transport_fallback() {
    // Reserve a port, then release it so the connection is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let app = test_app(&format!("http://{address}"));
    let response = app
        .oneshot(form_request("email=a%40b.com&batch_no=B1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_text(response).await;
    assert!(body.contains(
        "Something went wrong. Please check your batch number and try again."
    ));
}
