//! Integration tests for web routes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use market_board::config::Config;
use market_board::constants::MSG_POST_SAVED;
use market_board::controller::ViewController;
use market_board::fetcher::HttpBoardApi;
use market_board::model::{BoardSnapshot, Comment};
use market_board::store::DataStore;
use market_board::web::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const DESK_ID: &str = "2024-01-15T11:00:00Z";

async fn mock_endpoint() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "post": [{
                "timestamp": DESK_ID,
                "item_name": "Desk",
                "item_type": "Furniture",
                "price": 15000,
                "memo": "[장소: Room A]\nGood condition"
            }],
            "comment": [{
                "post_id": DESK_ID,
                "author": "kim",
                "content": "Still available?",
                "timestamp": "2024-01-15T11:30:00Z"
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;
    server
}

/// Create a test app backed by the given mock endpoint.
fn create_test_app(server: &MockServer) -> (Router, Arc<ViewController>) {
    let config = Config::for_endpoint(server.uri());
    let api = HttpBoardApi::new(&config).expect("Failed to build client");
    let controller = Arc::new(ViewController::new(Arc::new(api), DataStore::new()));

    let app = create_app(AppState {
        controller: controller.clone(),
        config: Arc::new(config),
    });
    (app, controller)
}

fn form_post(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Send a POST and check it redirects back to the board.
async fn post_and_follow(app: &Router, request: Request<Body>) {
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = mock_endpoint().await;
    let (app, _) = create_test_app(&server);

    let response = app.clone().oneshot(get("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["loaded"], false);
    assert_eq!(body["generation"], 0);
}

#[tokio::test]
async fn test_board_page_before_first_load() {
    let server = mock_endpoint().await;
    let (app, _) = create_test_app(&server);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("등록된 글이 없습니다."));
    assert!(html.contains(r#"id="write-modal""#));
}

#[tokio::test]
async fn test_refresh_then_board_lists_post() {
    let server = mock_endpoint().await;
    let (app, _) = create_test_app(&server);

    post_and_follow(&app, form_post("/refresh", &[])).await;

    let html = body_string(app.clone().oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("Desk"));
    assert!(html.contains("15,000원"));
    assert!(html.contains(r#"<span class="comment-count">1</span>"#));

    let response = app.oneshot(get("/api/board")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["post"][0]["item_name"], "Desk");
}

#[tokio::test]
async fn test_detail_open_and_close() {
    let server = mock_endpoint().await;
    let (app, controller) = create_test_app(&server);
    post_and_follow(&app, form_post("/refresh", &[])).await;

    post_and_follow(&app, form_post("/detail/open", &[("post_id", DESK_ID)])).await;
    assert!(controller.state().detail_open);

    let html = body_string(app.clone().oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains(r#"id="detail-view""#));
    assert!(html.contains("Room A"));
    assert!(html.contains(r#"src="/detail/comments""#));
    assert!(html.contains("overflow: hidden;"));

    let frame = body_string(app.clone().oneshot(get("/detail/comments")).await.unwrap()).await;
    assert!(frame.contains("Still available?"));

    post_and_follow(&app, form_post("/detail/close", &[])).await;
    let view = controller.state();
    assert!(!view.detail_open);
    assert!(view.current_post_id.is_none());
}

#[tokio::test]
async fn test_comment_frame_follows_background_refresh() {
    let server = mock_endpoint().await;
    let (app, controller) = create_test_app(&server);
    post_and_follow(&app, form_post("/refresh", &[])).await;
    post_and_follow(&app, form_post("/detail/open", &[("post_id", DESK_ID)])).await;

    let mut snapshot = controller.store().snapshot();
    snapshot.comment.push(Comment {
        post_id: DESK_ID.to_string(),
        author: "lee".to_string(),
        content: "Can you deliver?".to_string(),
        timestamp: "2024-01-15T11:45:00Z".to_string(),
    });
    controller.store().replace(snapshot);

    let response = app.clone().oneshot(get("/detail/comments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let frame = body_string(response).await;
    assert!(frame.contains(r#"http-equiv="refresh""#));
    assert!(frame.contains("Still available?"));
    assert!(frame.contains("Can you deliver?"));

    // Reading the frame must not consume the page's one-shot state.
    assert!(controller.state().detail_open);
}

#[tokio::test]
async fn test_detail_survives_refresh_that_drops_post() {
    let server = mock_endpoint().await;
    let (app, controller) = create_test_app(&server);
    post_and_follow(&app, form_post("/refresh", &[])).await;
    post_and_follow(&app, form_post("/detail/open", &[("post_id", DESK_ID)])).await;

    controller.store().replace(BoardSnapshot::default());

    let html = body_string(app.clone().oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains(r#"id="detail-view""#));
    assert!(html.contains("Desk"));
    assert!(html.contains(r#"action="/detail/close""#));

    post_and_follow(&app, form_post("/detail/close", &[])).await;
    let html = body_string(app.oneshot(get("/")).await.unwrap()).await;
    assert!(!html.contains(r#"id="detail-view""#));
    assert!(html.contains("overflow: auto;"));
}

#[tokio::test]
async fn test_compose_close_keeps_draft() {
    let server = mock_endpoint().await;
    let (app, controller) = create_test_app(&server);

    post_and_follow(&app, form_post("/compose/open", &[])).await;
    assert!(controller.state().compose_open);

    post_and_follow(
        &app,
        form_post("/compose/close", &[("title", "Desk"), ("item", "Furniture")]),
    )
    .await;

    let view = controller.state();
    assert!(!view.compose_open);
    assert_eq!(view.post_draft.title, "Desk");

    let html = body_string(app.oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains(r#"value="Desk""#));
}

#[tokio::test]
async fn test_compose_submit_posts_and_clears() {
    let server = mock_endpoint().await;
    let (app, controller) = create_test_app(&server);

    post_and_follow(&app, form_post("/compose/open", &[])).await;
    post_and_follow(
        &app,
        form_post(
            "/compose/submit",
            &[
                ("title", "Desk"),
                ("item", "Furniture"),
                ("price", "15,000"),
                ("location", "Room A"),
                ("content", "Good condition"),
            ],
        ),
    )
    .await;

    let view = controller.state();
    assert!(!view.compose_open);
    assert!(view.post_draft.title.is_empty());
    assert!(controller.store().is_loaded());

    let html = body_string(app.oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains(r#"id="message-box""#));
    assert!(html.contains(MSG_POST_SAVED));
}

#[tokio::test]
async fn test_missing_title_shows_alert_once() {
    let server = mock_endpoint().await;
    let (app, _) = create_test_app(&server);

    post_and_follow(&app, form_post("/compose/submit", &[("item", "Furniture")])).await;

    let first = body_string(app.clone().oneshot(get("/")).await.unwrap()).await;
    assert!(first.contains("<dialog open"));

    let second = body_string(app.oneshot(get("/")).await.unwrap()).await;
    assert!(!second.contains("<dialog open"));
}

#[tokio::test]
async fn test_comment_without_open_post_is_blocked() {
    let server = mock_endpoint().await;
    let (app, _) = create_test_app(&server);

    post_and_follow(&app, form_post("/comments", &[("content", "hello")])).await;

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.as_str() != "POST"));

    let html = body_string(app.oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("<dialog open"));
}

#[tokio::test]
async fn test_static_stylesheet_served() {
    let server = mock_endpoint().await;
    let (app, _) = create_test_app(&server);

    let response = app.oneshot(get("/static/css/style.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
