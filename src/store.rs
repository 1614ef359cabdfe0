//! Shared, thread-safe storage for live decks.
//!
//! The map itself sits behind an `RwLock`; each deck has its own `Mutex`, so
//! draws against different decks never contend beyond a brief read lock on the
//! map, while draws against the same deck are serialized.

use crate::cards::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Source of candidate deck ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 128-bit (v4) UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

type Slot = Arc<Mutex<Deck>>;

pub struct DeckStore {
    decks: RwLock<HashMap<String, Slot>>,
    ids: Box<dyn IdGenerator>,
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DeckStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckStore").field("len", &self.len()).finish()
    }
}

fn lock(slot: &Mutex<Deck>) -> MutexGuard<'_, Deck> {
    // No deck mutation in this crate can panic partway through: `set_cards`
    // assigns and `take_top` checks the length before draining. A poisoned
    // guard therefore still holds a consistent deck.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DeckStore {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    pub fn with_id_generator<G: IdGenerator + 'static>(ids: G) -> Self {
        Self { decks: RwLock::new(HashMap::new()), ids: Box::new(ids) }
    }

    pub fn len(&self) -> usize {
        self.decks.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An id not currently present in the store. Retries until free.
    ///
    /// The id is not reserved; use [`DeckStore::create`] to generate and
    /// register atomically.
    pub fn generate_unique_id(&self) -> String {
        let decks = self.decks.read().unwrap_or_else(PoisonError::into_inner);
        self.fresh_id(&decks)
    }

    fn fresh_id(&self, decks: &HashMap<String, Slot>) -> String {
        loop {
            let id = self.ids.next_id();
            if !decks.contains_key(&id) {
                return id;
            }
            tracing::debug!(%id, "deck id collision, retrying");
        }
    }

    /// Register a deck under its own id.
    pub fn insert(&self, deck: Deck) -> Result<(), DeckError> {
        let mut decks = self.decks.write().unwrap_or_else(PoisonError::into_inner);
        if decks.contains_key(deck.id()) {
            return Err(DeckError::Conflict(deck.id().to_string()));
        }
        decks.insert(deck.id().to_string(), Arc::new(Mutex::new(deck)));
        Ok(())
    }

    /// Generate a fresh id and register a new deck under it, holding the map
    /// lock across both steps. Returns a snapshot of the stored deck.
    pub fn create(&self, shuffled: bool, cards: Vec<Card>) -> Deck {
        let mut decks = self.decks.write().unwrap_or_else(PoisonError::into_inner);
        let id = self.fresh_id(&decks);
        let deck = Deck::new(id.clone(), shuffled, cards);
        decks.insert(id, Arc::new(Mutex::new(deck.clone())));
        deck
    }

    fn slot(&self, id: &str) -> Result<Slot, DeckError> {
        self.decks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| DeckError::NotFound(id.to_string()))
    }

    /// Snapshot of the deck's current state.
    pub fn get(&self, id: &str) -> Result<Deck, DeckError> {
        let slot = self.slot(id)?;
        let deck = lock(&slot).clone();
        Ok(deck)
    }

    /// Overwrite a stored deck's remaining cards.
    ///
    /// Not atomic with a preceding [`DeckStore::get`]: another caller may
    /// change the deck in between. Read-modify-write sequences such as a draw
    /// go through [`DeckStore::update`] instead.
    pub fn replace(&self, id: &str, cards: Vec<Card>) -> Result<(), DeckError> {
        let slot = self.slot(id)?;
        lock(&slot).set_cards(cards);
        Ok(())
    }

    /// Run `f` with exclusive access to one deck. Other decks stay available.
    pub fn update<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Deck) -> Result<T, DeckError>,
    ) -> Result<T, DeckError> {
        let slot = self.slot(id)?;
        let mut deck = lock(&slot);
        f(&mut deck)
    }
}
