//! Error type shared by every module of the engine.

/// Everything that can go wrong while parsing, ranking or drawing cards.
///
/// Failures never leave partially built values behind, and a failed
/// [`Deck::draw`](crate::deck::Deck::draw) or [`Deck::deal`](crate::deck::Deck::deal)
/// leaves the deck as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid rank: '{0}'")]
    InvalidRank(String),
    #[error("invalid suit: '{0}'")]
    InvalidSuit(String),
    #[error("invalid card: '{0}'")]
    InvalidCard(String),
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    #[error("cannot draw {requested} cards from a deck of {remaining} cards")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("cannot deal {cards_per_hand} cards to each of {number_of_hands} hands")]
    DealTooLarge { cards_per_hand: usize, number_of_hands: usize },
    #[error("{hole} hole cards plus {board} board cards do not make a five-card hand")]
    InvalidSplit { hole: usize, board: usize },
    #[error("no candidate hands to rank")]
    NoCandidates,
}
