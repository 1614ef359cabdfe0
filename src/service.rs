use crate::cards::Card;
use crate::catalog::{catalog, Catalog};
use crate::deck::{DeckContents, DeckSummary};
use crate::draw;
use crate::error::DeckError;
use crate::factory::DeckFactory;
use crate::store::DeckStore;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Entry point for all deck operations; safe to share across threads.
///
/// ```
/// use deck_service::service::DeckService;
///
/// let svc = DeckService::with_seed(1);
/// let deck = svc.create_deck(false, &["AS", "KD"]).unwrap();
/// let drawn = svc.draw(&deck.deck_id, 1).unwrap();
/// assert_eq!(drawn[0].code(), "AS");
/// assert_eq!(svc.deck(&deck.deck_id).unwrap().remaining, 1);
/// ```
#[derive(Debug)]
pub struct DeckService {
    catalog: &'static Catalog,
    store: DeckStore,
    factory: DeckFactory,
}

impl Default for DeckService {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckService {
    /// Shuffles with an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Reproducible shuffles.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng<R: RngCore + Send + 'static>(rng: R) -> Self {
        Self::with_parts(DeckStore::new(), DeckFactory::new(rng))
    }

    pub fn with_parts(store: DeckStore, factory: DeckFactory) -> Self {
        Self { catalog: catalog(), store, factory }
    }

    pub fn store(&self) -> &DeckStore {
        &self.store
    }

    pub fn create_deck<S: AsRef<str>>(
        &self,
        shuffled: bool,
        codes: &[S],
    ) -> Result<DeckSummary, DeckError> {
        let deck = self
            .factory
            .create_deck(&self.store, self.catalog, shuffled, codes)
            .inspect_err(|e| tracing::warn!(error = %e, "rejected deck creation"))?;
        tracing::info!(deck_id = deck.id(), shuffled, remaining = deck.remaining(), "deck created");
        Ok(deck.summary())
    }

    pub fn deck(&self, deck_id: &str) -> Result<DeckContents, DeckError> {
        let deck = self.store.get(deck_id)?;
        tracing::debug!(deck_id, remaining = deck.remaining(), "deck fetched");
        Ok(deck.contents())
    }

    pub fn draw(&self, deck_id: &str, count: i64) -> Result<Vec<Card>, DeckError> {
        match draw::draw(&self.store, deck_id, count) {
            Ok(cards) => {
                tracing::debug!(deck_id, count, "cards drawn");
                Ok(cards)
            }
            Err(e) => {
                tracing::warn!(deck_id, count, error = %e, "draw rejected");
                Err(e)
            }
        }
    }
}
