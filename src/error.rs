/// Failures reported by deck operations. Every variant is a client error
/// except `Conflict`, which only guards id generation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("'count' parameter should be a positive integer, got '{0}'")]
    InvalidCount(String),
    #[error("there is no such card as {0}")]
    UnknownCard(String),
    #[error("card occurred twice in the requested deck: {0}")]
    DuplicateCard(String),
    #[error("there is no deck with id {0}")]
    NotFound(String),
    #[error("not enough cards in deck {deck_id}: requested {requested}, remaining {remaining}")]
    InsufficientCards { deck_id: String, requested: usize, remaining: usize },
    #[error("deck id already exists: {0}")]
    Conflict(String),
}

impl DeckError {
    /// True for errors caused by the request rather than server state.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DeckError::Conflict(_))
    }
}
