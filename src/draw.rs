use crate::cards::Card;
use crate::error::DeckError;
use crate::store::DeckStore;

/// Remove the top `count` cards from a stored deck and return them in draw order.
///
/// All-or-nothing: when fewer than `count` cards remain the deck is left as is.
/// The check and the removal happen under the deck's lock, so concurrent draws
/// against one deck never hand out the same card twice.
pub fn draw(store: &DeckStore, deck_id: &str, count: i64) -> Result<Vec<Card>, DeckError> {
    let n = usize::try_from(count)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| DeckError::InvalidCount(count.to_string()))?;
    store.update(deck_id, |deck| {
        let remaining = deck.remaining();
        deck.take_top(n).ok_or_else(|| DeckError::InsufficientCards {
            deck_id: deck_id.to_string(),
            requested: n,
            remaining,
        })
    })
}

/// Parse a raw `count` parameter; absent means one card.
pub fn parse_count(raw: Option<&str>) -> Result<i64, DeckError> {
    match raw {
        None => Ok(1),
        Some(s) => match s.parse::<i64>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(DeckError::InvalidCount(s.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn codes(cards: &[Card]) -> Vec<String> {
        cards.iter().map(|c| c.code()).collect()
    }

    #[test]
    fn draws_from_top_and_resumes() {
        let store = DeckStore::new();
        let deck = store.create(false, catalog().full_deck());
        assert_eq!(codes(&draw(&store, deck.id(), 2).unwrap()), ["AS", "2S"]);
        assert_eq!(codes(&draw(&store, deck.id(), 1).unwrap()), ["3S"]);
        assert_eq!(store.get(deck.id()).unwrap().remaining(), 49);
    }

    #[test]
    fn rejects_non_positive_counts() {
        let store = DeckStore::new();
        let deck = store.create(false, catalog().full_deck());
        assert_eq!(draw(&store, deck.id(), 0), Err(DeckError::InvalidCount("0".into())));
        assert_eq!(draw(&store, deck.id(), -3), Err(DeckError::InvalidCount("-3".into())));
        assert_eq!(store.get(deck.id()).unwrap().remaining(), 52);
    }

    #[test]
    fn count_is_checked_before_deck_lookup() {
        let store = DeckStore::new();
        assert!(matches!(draw(&store, "missing", 0), Err(DeckError::InvalidCount(_))));
        assert!(matches!(draw(&store, "missing", 1), Err(DeckError::NotFound(_))));
    }

    #[test]
    fn overdraw_leaves_deck_unchanged() {
        let store = DeckStore::new();
        let deck = store.create(false, catalog().full_deck()[..3].to_vec());
        let err = draw(&store, deck.id(), 4).unwrap_err();
        let deck_id = deck.id().to_string();
        assert_eq!(err, DeckError::InsufficientCards { deck_id, requested: 4, remaining: 3 });
        assert_eq!(store.get(deck.id()).unwrap(), deck);
    }

    #[test]
    fn depleted_deck_refuses_draws() {
        let store = DeckStore::new();
        let deck = store.create(false, catalog().full_deck()[..2].to_vec());
        draw(&store, deck.id(), 2).unwrap();
        assert!(matches!(draw(&store, deck.id(), 1), Err(DeckError::InsufficientCards { .. })));
    }

    #[test]
    fn parse_count_defaults_and_rejects() {
        assert_eq!(parse_count(None), Ok(1));
        assert_eq!(parse_count(Some("5")), Ok(5));
        assert_eq!(parse_count(Some("0")), Err(DeckError::InvalidCount("0".into())));
        assert_eq!(parse_count(Some("abc")), Err(DeckError::InvalidCount("abc".into())));
        assert_eq!(parse_count(Some("-1")), Err(DeckError::InvalidCount("-1".into())));
    }
}
