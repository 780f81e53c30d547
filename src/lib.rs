//! poker-hands: five-card poker hand classification and comparison
//!
//! Goals:
//! - Classify any five distinct cards into one of nine categories
//! - Total order over rankings, including tie-breaks within a category
//! - No I/O and no panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two hands
//! ```
//! use poker_hands::hand::Hand;
//! use poker_hands::ranking::{Category, Ranking};
//!
//! let pair: Hand = "A♥-A♠-2♦-5♣-Q♥".parse().unwrap();
//! let straight: Hand = "A♥-K♠-Q♦-J♣-10♥".parse().unwrap();
//!
//! let pair = Ranking::new(&pair).unwrap();
//! let straight = Ranking::new(&straight).unwrap();
//! assert_eq!(pair.category(), Category::Pair);
//! assert!(straight > pair);
//! ```
//!
//! ## Dealing
//! [`deck::Deck`] builds, shuffles and deals cards; [`search`] picks the
//! strongest five-card hand out of hole and board cards.

pub mod cards;
pub mod deck;
pub mod error;
pub mod hand;
pub mod ranking;
pub mod search;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
