use super::handlers::{create_deck, draw_cards, get_deck, SharedService};
use axum::routing::{get, post};
use axum::Router;

pub fn router(svc: SharedService) -> Router {
    Router::new()
        .route("/decks", post(create_deck))
        .route("/decks/{deck_id}", get(get_deck))
        .route("/decks/{deck_id}/draw", post(draw_cards))
        .with_state(svc)
}
