use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, seed, Comment, DEFAULT_SEED};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

const AMY: &str = r#"{"postId":1,"name":"Amy","email":"amy@example.com","body":"hello"}"#;

// --- list ---

#[tokio::test]
async fn list_returns_seeded_collection_in_order() {
    let resp = app().oneshot(get("/comments")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let comments: Vec<Comment> = body_json(resp).await;
    assert_eq!(comments.len(), DEFAULT_SEED);
    assert!(comments.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn list_empty_seed() {
    let resp = app_with(Vec::new()).oneshot(get("/comments")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let comments: Vec<Comment> = body_json(resp).await;
    assert!(comments.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_echoes_input_with_next_id() {
    let resp = app()
        .oneshot(json_request("POST", "/comments", AMY))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let comment: Comment = body_json(resp).await;
    assert_eq!(comment.id, DEFAULT_SEED as u64 + 1);
    assert_eq!(comment.name, "Amy");
    assert_eq!(comment.post_id, 1);
}

#[tokio::test]
async fn create_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/comments", r#"{"name":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_unknown_comment_not_found() {
    let resp = app().oneshot(get("/comments/9999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_non_numeric_id_returns_400() {
    let resp = app().oneshot(get("/comments/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_echoes_body_under_path_id() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/comments/5",
            r#"{"id":5,"postId":1,"name":"Carol","email":"carol@example.com","body":"edited"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let comment: Comment = body_json(resp).await;
    assert_eq!(comment.id, 5);
    assert_eq!(comment.name, "Carol");
}

#[tokio::test]
async fn update_unknown_comment_is_server_error() {
    let resp = app()
        .oneshot(json_request("PUT", "/comments/9999", AMY))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- delete ---

#[tokio::test]
async fn delete_unknown_comment_still_succeeds() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/comments/9999")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"{}");
}

// --- writes are never persisted ---

#[tokio::test]
async fn writes_do_not_change_the_collection() {
    use tower::Service;

    let mut app = app_with(seed(3)).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/comments", AMY))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Comment = body_json(resp).await;
    assert_eq!(created.id, 4);

    // a second create gets the same id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/comments", AMY))
        .await
        .unwrap();
    let again: Comment = body_json(resp).await;
    assert_eq!(again.id, 4);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri("/comments/1")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/comments"))
        .await
        .unwrap();
    let comments: Vec<Comment> = body_json(resp).await;
    assert_eq!(comments, seed(3));
}
