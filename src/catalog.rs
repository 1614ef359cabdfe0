use crate::cards::{Card, Suit, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

/// The fixed set of 52 cards, in canonical order and indexed by code.
#[derive(Debug, Clone)]
pub struct Catalog {
    order: Vec<Card>,
    by_code: HashMap<String, Card>,
}

impl Catalog {
    /// Suits outer (spades, diamonds, clubs, hearts), values inner (ace..king).
    ///
    /// ```
    /// use deck_service::catalog::Catalog;
    ///
    /// let catalog = Catalog::build();
    /// assert_eq!(catalog.len(), 52);
    /// assert_eq!(catalog.full_deck()[0].code(), "AS");
    /// ```
    pub fn build() -> Self {
        let mut order = Vec::with_capacity(52);
        let mut by_code = HashMap::with_capacity(52);
        for &suit in &Suit::ALL {
            for &value in &Value::ALL {
                let card = Card::new(value, suit);
                order.push(card);
                by_code.insert(card.code(), card);
            }
        }
        Self { order, by_code }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// A fresh copy of the canonical ordering.
    pub fn full_deck(&self) -> Vec<Card> {
        self.order.clone()
    }

    pub fn lookup(&self, code: &str) -> Option<Card> {
        self.by_code.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }
}

/// Process-wide catalog, built on first use.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}
