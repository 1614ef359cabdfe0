//! HTTP boundary: routes, query extraction and error-to-status mapping.
//!
//! | Method | Path                     | Query                      |
//! |--------|--------------------------|----------------------------|
//! | POST   | `/decks`                 | `shuffled`, `cards`        |
//! | GET    | `/decks/{deck_id}`       |                            |
//! | POST   | `/decks/{deck_id}/draw`  | `count` (default 1)        |

mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use handlers::{
    create_deck, draw_cards, get_deck, CreateDeckQuery, DrawQuery, DrawResponse, QueryPairs,
    SharedService,
};
pub use routes::router;
