use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use lexi_config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::routes::build_router;
use crate::state::AppState;

const BOUNDARY: &str = "lexi-test-boundary";

fn test_config() -> Config {
    Config {
        seed_sample_data: false,
        ..Config::default()
    }
}

async fn seeded_app() -> Router {
    let state = Arc::new(AppState::new(test_config()));
    state.dictionary.write().await.seed_sample_data().unwrap();
    build_router(state)
}

fn empty_app(config: Config) -> Router {
    build_router(Arc::new(AppState::new(config)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn upload(app: &Router, field: &str, file_name: &str, contents: &str) -> (StatusCode, Value) {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    let request = Request::post("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_health() {
    let app = empty_app(test_config());
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_translate_both_directions() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/translate?word=Hello&fromLang=english").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "translations": ["bonjour"] }));

    let (_, body) = get(&app, "/translate?word=bonjour&fromLang=fr").await;
    assert_eq!(body, json!({ "translations": ["good morning", "hello"] }));
}

#[tokio::test]
async fn test_translate_unknown_word_is_empty() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/translate?word=zebra&fromLang=english").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "translations": [] }));
}

#[tokio::test]
async fn test_translate_requires_parameters() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/translate?word=hello").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Word and language direction are required");
    assert_eq!(body["status"], 400);

    let (status, _) = get(&app, "/translate?word=hello&fromLang=german").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_word_updates_both_directions() {
    let app = empty_app(test_config());

    let (status, body) = post_json(
        &app,
        "/word",
        json!({ "word": "Chat", "translation": "cat", "fromLang": "french" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = get(&app, "/translate?word=cat&fromLang=english").await;
    assert_eq!(body, json!({ "translations": ["chat"] }));

    let (_, recent) = get(&app, "/dictionary/recent").await;
    assert_eq!(recent[0]["word"], "chat");
    assert_eq!(recent[0]["translation"], "cat");
}

#[tokio::test]
async fn test_add_word_requires_fields() {
    let app = empty_app(test_config());
    let request = json!({ "word": "cat", "fromLang": "english" });
    let (status, body) = post_json(&app, "/word", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Word, translation, and language direction are required"
    );
}

#[tokio::test]
async fn test_delete_word() {
    let app = seeded_app().await;

    let (status, body) = delete(&app, "/word?word=hello&fromLang=english").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = get(&app, "/translate?word=bonjour&fromLang=french").await;
    assert_eq!(body, json!({ "translations": ["good morning"] }));

    let (status, body) = delete(&app, "/word?word=hello&fromLang=english").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Word not found", "status": 404 }));
}

#[tokio::test]
async fn test_delete_single_translation() {
    let app = empty_app(test_config());
    for translation in ["banque", "rive"] {
        post_json(
            &app,
            "/word",
            json!({ "word": "bank", "translation": translation, "fromLang": "english" }),
        )
        .await;
    }

    let (status, _) = delete(&app, "/word?word=bank&fromLang=english&translation=rive").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/translate?word=bank&fromLang=english").await;
    assert_eq!(body, json!({ "translations": ["banque"] }));
    let (_, body) = get(&app, "/translate?word=rive&fromLang=french").await;
    assert_eq!(body, json!({ "translations": [] }));

    let (status, _) = delete(&app, "/word?word=bank&fromLang=english&translation=rive").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_txt() {
    let app = empty_app(test_config());
    let contents = "Cat=Chat\ndog=chien\nbroken line";
    let (status, body) = upload(&app, "file", "words.txt", contents).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["wordCount"], 2);
    assert_eq!(body["message"], "Successfully imported 2 word pairs.");
    assert_eq!(body["sampleWords"], json!([["cat", "chat"], ["dog", "chien"]]));

    let (_, body) = get(&app, "/translate?word=chien&fromLang=french").await;
    assert_eq!(body, json!({ "translations": ["dog"] }));
}

#[tokio::test]
async fn test_upload_csv_sample_is_capped() {
    let mut config = test_config();
    config.import.sample_size = 1;
    let app = empty_app(config);

    let (status, body) = upload(&app, "file", "words.csv", "cat,chat\ndog,chien\n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wordCount"], 2);
    assert_eq!(body["sampleWords"], json!([["cat", "chat"]]));
}

#[tokio::test]
async fn test_upload_rejections() {
    let app = empty_app(test_config());

    let (status, body) = upload(&app, "file", "words.pdf", "cat=chat").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid file type");

    let (status, body) = upload(&app, "file", "words", "cat=chat").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid file type");

    let (status, body) = upload(&app, "attachment", "words.txt", "cat=chat").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file part");

    let (status, body) = upload(&app, "file", "", "cat=chat").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No selected file");
}

#[tokio::test]
async fn test_upload_broken_spreadsheet_is_server_error() {
    let app = empty_app(test_config());
    let (status, body) = upload(&app, "file", "words.xlsx", "not a zip archive").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Error processing file: ")
    );
}

#[tokio::test]
async fn test_recent_log_is_bounded() {
    let mut config = test_config();
    config.recent_capacity = 2;
    let app = empty_app(config);

    for (word, translation) in [("one", "un"), ("two", "deux"), ("three", "trois")] {
        post_json(
            &app,
            "/word",
            json!({ "word": word, "translation": translation, "fromLang": "english" }),
        )
        .await;
    }

    let (_, body) = get(&app, "/dictionary/recent").await;
    let words: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, ["two", "three"]);
}

#[tokio::test]
async fn test_stats() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["englishWords"], 10);
    assert_eq!(body["frenchWords"], 9);
    assert_eq!(body["totalWords"], 19);
    assert_eq!(body["totalTranslations"], 20);
    assert!(body["lastUpdated"].is_string());
}

#[tokio::test]
async fn test_dump_is_sorted() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/dictionary/dump?lang=french").await;

    assert_eq!(status, StatusCode::OK);
    let words: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["word"].as_str().unwrap())
        .collect();
    let mut sorted = words.clone();
    sorted.sort_unstable();
    assert_eq!(words, sorted);
    assert_eq!(words.len(), 9);

    let bonjour = body
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["word"] == "bonjour")
        .unwrap();
    assert_eq!(bonjour["translations"], json!(["good morning", "hello"]));
}

#[tokio::test]
async fn test_neighbors() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/dictionary/neighbors?word=hello&lang=en").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predecessor"], "goodbye");
    assert_eq!(body["successor"], "how are you");
    assert!(body["height"].as_u64().unwrap() >= 4);

    let (status, body) = get(&app, "/dictionary/neighbors?word=zebra&lang=en").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Word not found");
}

#[tokio::test]
async fn test_cors_toggle() {
    let request = || {
        Request::get("/health")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap()
    };

    let app = empty_app(test_config());
    let response = app.oneshot(request()).await.unwrap();
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );

    let mut config = test_config();
    config.server.cors = false;
    let response = empty_app(config).oneshot(request()).await.unwrap();
    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
