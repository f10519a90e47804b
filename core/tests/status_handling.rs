//! Status-code branching tests against purpose-built stub routers.
//!
//! # Design
//! The mock server only speaks the happy paths and the recognized error
//! envelopes, so these tests stand up tiny axum routers that answer with the
//! odd statuses and bodies the executor must classify: unrecognized status
//! codes, non-JSON bodies on both branches, and suffix handling.

use awqat_salah::{ApiError, AwqatClient, Credentials};
use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

/// Serve `router` on a random port and return its address.
fn serve(router: Router) -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, router).await
        })
        .unwrap();
    });

    addr
}

/// Accept any credentials and issue a fixed token pair.
async fn stub_login() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": {"accessToken": "stub-token", "refreshToken": "stub-refresh"},
        "success": true,
        "message": ""
    }))
}

fn credentials() -> Credentials {
    Credentials {
        email: "anyone@example.com".to_string(),
        password: "anything".to_string(),
    }
}

fn client_for(router: Router) -> AwqatClient {
    let router = router.route("/auth/login", post(stub_login));
    let addr = serve(router);
    AwqatClient::with_base_url(&format!("http://{addr}"), credentials()).unwrap()
}

#[test]
fn status_204_is_an_unexpected_status() {
    let router = Router::new().route(
        "/api/place/countries",
        get(|| async { StatusCode::NO_CONTENT }),
    );
    let client = client_for(router);

    let err = client.countries().unwrap_err();
    match err {
        ApiError::UnexpectedStatus(code) => assert_eq!(code, 204),
        other => panic!("expected UnexpectedStatus, got {other}"),
    }
}

#[test]
fn status_302_is_an_unexpected_status() {
    let router = Router::new().route(
        "/api/DailyContent",
        get(|| async { StatusCode::FOUND }),
    );
    let client = client_for(router);

    let err = client.daily_content().unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus(302)));
}

#[test]
fn redirect_with_location_is_not_followed() {
    // If the agent followed the Location, the classified status would be
    // the target's, not the 302 itself.
    let router = Router::new()
        .route(
            "/api/place/countries",
            get(|| async {
                (
                    StatusCode::FOUND,
                    [(axum::http::header::LOCATION, "/api/place/states")],
                )
            }),
        )
        .route(
            "/api/place/states",
            get(|| async {
                Json(serde_json::json!({
                    "data": [],
                    "success": true,
                    "message": ""
                }))
            }),
        );
    let client = client_for(router);

    let err = client.countries().unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus(302)));
}

#[test]
fn non_json_success_body_is_a_decode_error() {
    let router = Router::new().route("/api/place/countries", get(|| async { "not json" }));
    let client = client_for(router);

    let err = client.countries().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn non_json_error_body_is_a_decode_error() {
    let router = Router::new().route(
        "/api/place/countries",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = client_for(router);

    let err = client.countries().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn recognized_error_status_carries_the_envelope_message() {
    let router = Router::new().route(
        "/api/place/countries",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "data": null,
                    "success": false,
                    "message": "invalid token"
                })),
            )
        }),
    );
    let client = client_for(router);

    let err = client.countries().unwrap_err();
    match err {
        ApiError::Api {
            status,
            success,
            message,
        } => {
            assert_eq!(status, 401);
            assert!(!success);
            assert_eq!(message, "invalid token");
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[test]
fn success_envelope_without_data_is_a_decode_error() {
    let router = Router::new().route(
        "/api/DailyContent",
        get(|| async {
            Json(serde_json::json!({
                "data": null,
                "success": true,
                "message": ""
            }))
        }),
    );
    let client = client_for(router);

    let err = client.daily_content().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn path_suffix_is_sent_as_a_path_segment() {
    // The route only matches when the id arrives as an extra path segment;
    // the handler echoes it back so the assertion ties request to response.
    async fn echo_city(Path(id): Path<String>) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "data": [{"id": 1, "code": "ECHO", "name": id}],
            "success": true,
            "message": ""
        }))
    }

    let router = Router::new().route("/api/place/cities/{id}", get(echo_city));
    let client = client_for(router);

    let cities = client.cities_by_state_id("539").unwrap();
    assert_eq!(cities[0].name, "539");
}
