use crate::cards::Card;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// A deck of remaining cards. Index 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: String,
    shuffled: bool,
    cards: Vec<Card>,
}

impl Deck {
    pub(crate) fn new(id: String, shuffled: bool, cards: Vec<Card>) -> Self {
        Self { id, shuffled, cards }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn summary(&self) -> DeckSummary {
        DeckSummary {
            deck_id: self.id.clone(),
            shuffled: self.shuffled,
            remaining: self.remaining(),
        }
    }

    pub fn contents(&self) -> DeckContents {
        DeckContents {
            deck_id: self.id.clone(),
            shuffled: self.shuffled,
            remaining: self.remaining(),
            cards: self.cards.clone(),
        }
    }

    pub(crate) fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Remove the top `n` cards, or return `None` and leave the deck untouched
    /// if fewer than `n` remain.
    pub(crate) fn take_top(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        Some(self.cards.drain(..n).collect())
    }
}

/// Uniform in-place permutation.
pub fn shuffle_with<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Response shape for a newly created deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
}

/// Response shape for a deck with its remaining cards, top first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckContents {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<Card>,
}
