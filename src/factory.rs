use crate::cards::Card;
use crate::catalog::Catalog;
use crate::deck::{shuffle_with, Deck};
use crate::error::DeckError;
use crate::store::DeckStore;
use rand::RngCore;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Split a comma-separated code list, dropping empty segments.
///
/// ```
/// use deck_service::factory::parse_card_codes;
///
/// assert_eq!(parse_card_codes("AS,,KD,"), vec!["AS", "KD"]);
/// assert!(parse_card_codes("").is_empty());
/// ```
pub fn parse_card_codes(raw: &str) -> Vec<String> {
    raw.split(',').filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Resolve requested codes to cards, left to right.
///
/// The first unknown code wins over any duplicate; duplicates are reported at
/// their second occurrence.
pub fn validate_codes<S: AsRef<str>>(
    catalog: &Catalog,
    codes: &[S],
) -> Result<Vec<Card>, DeckError> {
    let mut cards = Vec::with_capacity(codes.len());
    for code in codes {
        let code = code.as_ref();
        let card = catalog.lookup(code).ok_or_else(|| DeckError::UnknownCard(code.to_string()))?;
        cards.push(card);
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for (code, card) in codes.iter().zip(&cards) {
        if !seen.insert(*card) {
            return Err(DeckError::DuplicateCard(code.as_ref().to_string()));
        }
    }
    Ok(cards)
}

/// Builds decks and registers them in a store.
pub struct DeckFactory {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl std::fmt::Debug for DeckFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckFactory").finish_non_exhaustive()
    }
}

impl DeckFactory {
    pub fn new<R: RngCore + Send + 'static>(rng: R) -> Self {
        Self { rng: Mutex::new(Box::new(rng)) }
    }

    /// Empty `codes` means the full catalog in canonical order.
    pub fn create_deck<S: AsRef<str>>(
        &self,
        store: &DeckStore,
        catalog: &Catalog,
        shuffled: bool,
        codes: &[S],
    ) -> Result<Deck, DeckError> {
        let mut cards =
            if codes.is_empty() { catalog.full_deck() } else { validate_codes(catalog, codes)? };
        if shuffled {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            shuffle_with(&mut cards, &mut **rng);
        }
        Ok(store.create(shuffled, cards))
    }
}
