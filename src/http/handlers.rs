use super::ApiError;
use crate::cards::Card;
use crate::deck::{DeckContents, DeckSummary};
use crate::draw::parse_count;
use crate::factory::parse_card_codes;
use crate::service::DeckService;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

pub type SharedService = Arc<DeckService>;

/// Raw query string as ordered key/value pairs. Repeated keys are allowed;
/// the first occurrence wins.
pub type QueryPairs = Vec<(String, String)>;

fn first(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CreateDeckQuery {
    pub shuffled: Option<String>,
    pub cards: Option<String>,
}

impl CreateDeckQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self { shuffled: first(pairs, "shuffled"), cards: first(pairs, "cards") }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DrawQuery {
    pub count: Option<String>,
}

impl DrawQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self { count: first(pairs, "count") }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawResponse {
    pub cards: Vec<Card>,
}

// POST /decks?shuffled=true&cards=AS,KD
pub async fn create_deck(
    State(svc): State<SharedService>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<DeckSummary>, ApiError> {
    let params = CreateDeckQuery::from_pairs(&pairs);
    // Only the literal "true" turns shuffling on.
    let shuffled = params.shuffled.as_deref() == Some("true");
    let codes = parse_card_codes(params.cards.as_deref().unwrap_or(""));
    let summary = svc.create_deck(shuffled, &codes)?;
    Ok(Json(summary))
}

// GET /decks/{deck_id}
pub async fn get_deck(
    State(svc): State<SharedService>,
    Path(deck_id): Path<String>,
) -> Result<Json<DeckContents>, ApiError> {
    Ok(Json(svc.deck(&deck_id)?))
}

// POST /decks/{deck_id}/draw?count=3
pub async fn draw_cards(
    State(svc): State<SharedService>,
    Path(deck_id): Path<String>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<DrawResponse>, ApiError> {
    let params = DrawQuery::from_pairs(&pairs);
    let count = parse_count(params.count.as_deref())?;
    let cards = svc.draw(&deck_id, count)?;
    Ok(Json(DrawResponse { cards }))
}
