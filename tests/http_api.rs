use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use deck_service::http::router;
use deck_service::service::DeckService;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(DeckService::with_seed(8)))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes)));
    (status, body)
}

async fn create(app: &Router, query: &str) -> String {
    let (status, body) = send(app, "POST", &format!("/decks{query}")).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["deck_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_defaults_to_full_ordered_deck() {
    let app = app();
    let (status, body) = send(&app, "POST", "/decks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["remaining"], 52);
    assert_eq!(body["shuffled"], false);
    assert!(body["deck_id"].is_string());
}

#[tokio::test]
async fn only_literal_true_shuffles() {
    let app = app();
    let (_, yes) = send(&app, "POST", "/decks?shuffled=true").await;
    let (_, no) = send(&app, "POST", "/decks?shuffled=TRUE").await;
    assert_eq!(yes["shuffled"], true);
    assert_eq!(no["shuffled"], false);
}

#[tokio::test]
async fn create_with_encoded_cards_then_fetch() {
    let app = app();
    let id = create(&app, "?cards=AS%2C%2CKD,1H").await;

    let (status, body) = send(&app, "GET", &format!("/decks/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deck_id"], id.as_str());
    assert_eq!(body["remaining"], 3);
    assert_eq!(body["cards"][0], json!({ "suit": "SPADES", "value": "ACE", "code": "AS" }));
    assert_eq!(body["cards"][1]["code"], "KD");
    assert_eq!(body["cards"][2], json!({ "suit": "HEARTS", "value": "10", "code": "1H" }));
}

#[tokio::test]
async fn create_rejects_bad_cards_with_json_error() {
    let app = app();
    let (status, body) = send(&app, "POST", "/decks?cards=AS,XX").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "there is no such card as XX" }));

    let (status, body) = send(&app, "POST", "/decks?cards=AS,AS").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "card occurred twice in the requested deck: AS" }));
}

#[tokio::test]
async fn repeated_shuffled_key_uses_first_value() {
    let app = app();
    let (status, body) = send(&app, "POST", "/decks?shuffled=true&shuffled=false").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shuffled"], true);
}

#[tokio::test]
async fn repeated_cards_key_uses_first_value() {
    let app = app();
    let id = create(&app, "?cards=AS&cards=KD").await;
    let (_, body) = send(&app, "GET", &format!("/decks/{id}")).await;
    assert_eq!(body["remaining"], 1);
    assert_eq!(body["cards"][0]["code"], "AS");
}

#[tokio::test]
async fn repeated_count_key_uses_first_value() {
    let app = app();
    let id = create(&app, "").await;
    let (status, body) = send(&app, "POST", &format!("/decks/{id}/draw?count=2&count=3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cards"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn draw_defaults_to_one_card_from_top() {
    let app = app();
    let id = create(&app, "").await;

    let (status, body) = send(&app, "POST", &format!("/decks/{id}/draw")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "cards": [{ "suit": "SPADES", "value": "ACE", "code": "AS" }] }));

    let (_, body) = send(&app, "POST", &format!("/decks/{id}/draw?count=2")).await;
    assert_eq!(body["cards"][0]["code"], "2S");
    assert_eq!(body["cards"][1]["code"], "3S");

    let (_, body) = send(&app, "GET", &format!("/decks/{id}")).await;
    assert_eq!(body["remaining"], 49);
}

#[tokio::test]
async fn draw_rejects_bad_counts() {
    let app = app();
    let id = create(&app, "?cards=AS,2S").await;

    for bad in ["0", "-2", "two", ""] {
        let uri = format!("/decks/{id}/draw?count={bad}");
        let (status, body) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "count {bad:?}");
        assert!(body["error"].as_str().unwrap().contains("positive integer"), "{body}");
    }
}

#[tokio::test]
async fn overdraw_is_bad_request_and_keeps_cards() {
    let app = app();
    let id = create(&app, "?cards=AS,2S").await;

    let (status, body) = send(&app, "POST", &format!("/decks/{id}/draw?count=3")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains(&id));

    let (_, body) = send(&app, "GET", &format!("/decks/{id}")).await;
    assert_eq!(body["remaining"], 2);
}

#[tokio::test]
async fn unknown_deck_is_not_found() {
    let app = app();
    let (status, body) = send(&app, "GET", "/decks/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "there is no deck with id missing" }));

    let (status, _) = send(&app, "POST", "/decks/missing/draw").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_count_wins_over_missing_deck() {
    let app = app();
    let (status, _) = send(&app, "POST", "/decks/missing/draw?count=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
