//! deck-service: in-memory playing card decks behind a small HTTP API
//!
//! Goals:
//! - Create full or partial decks, shuffled or in order
//! - Draw from the top with all-or-nothing semantics
//! - Safe under concurrent requests; no panics for invalid input
//!
//! ## Quick start
//! ```
//! use deck_service::service::DeckService;
//!
//! let svc = DeckService::with_seed(42);
//! let deck = svc.create_deck::<&str>(true, &[]).unwrap();
//! assert_eq!(deck.remaining, 52);
//!
//! let hand = svc.draw(&deck.deck_id, 5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(svc.deck(&deck.deck_id).unwrap().remaining, 47);
//! ```
//!
//! ## Server
//! ```sh
//! DECK_SERVICE_ADDR=127.0.0.1:8080 cargo run --bin deck-service
//! ```

pub mod cards;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod factory;
pub mod http;
pub mod service;
pub mod store;

pub use error::DeckError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
