use crate::cards::{Card, Rank};
use crate::error::Error;
use crate::hand::Hand;
use core::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Number of cards a ranked hand must hold.
pub const HAND_SIZE: usize = 5;

/// Hand category from weakest to strongest.
///
/// A flush ranks below a straight here, and the ace-low wheel is not a
/// straight at all. Both follow the established behavior of this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    DoublePair = 2,
    ThreeOfAKind = 3,
    Flush = 4,
    Straight = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::DoublePair,
        Category::ThreeOfAKind,
        Category::Flush,
        Category::Straight,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "HighCard",
            Category::Pair => "Pair",
            Category::DoublePair => "DoublePair",
            Category::ThreeOfAKind => "ThreeOfAKind",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::FullHouse => "FullHouse",
            Category::FourOfAKind => "FourOfAKind",
            Category::StraightFlush => "StraightFlush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a five-card hand, totally ordered by strength.
///
/// Rankings of different categories compare by category. Within a category
/// the per-rank count vectors are compared slot by slot from Two upwards,
/// and the hand with the larger vector is the weaker one: it is the first to
/// hold more cards of a low rank.
///
/// ```
/// use poker_hands::hand::Hand;
/// use poker_hands::ranking::{Category, Ranking};
///
/// let low: Hand = "7♦-7♠-7♣-J♣-J♥".parse().unwrap();
/// let high: Hand = "8♥-8♦-8♠-7♠-7♣".parse().unwrap();
/// let low = Ranking::new(&low).unwrap();
/// let high = Ranking::new(&high).unwrap();
/// assert_eq!(low.category(), Category::FullHouse);
/// assert!(low < high);
/// ```
#[derive(Debug, Clone)]
pub struct Ranking {
    cards: [Card; HAND_SIZE],
    category: Category,
    counts: [u8; 13],
}

impl Ranking {
    /// Classify a hand of exactly five distinct cards. The hand is left untouched.
    pub fn new(hand: &Hand) -> Result<Self, Error> {
        let cards: [Card; HAND_SIZE] = hand.cards().try_into().map_err(|_| {
            Error::InvalidHand(format!("expected {HAND_SIZE} cards, got {}", hand.len()))
        })?;
        let distinct: HashSet<Card> = cards.iter().copied().collect();
        if distinct.len() != HAND_SIZE {
            return Err(Error::InvalidHand(format!("duplicate cards in '{}'", hand.to_text())));
        }

        let mut counts = [0u8; 13];
        for card in &cards {
            counts[card.rank().index()] += 1;
        }

        let mut histogram: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
        histogram.sort_unstable();

        let category = match histogram.as_slice() {
            [1, 1, 1, 1, 1] => {
                match (is_straight(&counts), cards.iter().all(|c| c.suit() == cards[0].suit())) {
                    (true, true) => Category::StraightFlush,
                    (true, false) => Category::Straight,
                    (false, true) => Category::Flush,
                    (false, false) => Category::HighCard,
                }
            }
            [1, 1, 1, 2] => Category::Pair,
            [1, 2, 2] => Category::DoublePair,
            [1, 1, 3] => Category::ThreeOfAKind,
            [2, 3] => Category::FullHouse,
            [1, 4] => Category::FourOfAKind,
            _ => {
                return Err(Error::InvalidHand(format!(
                    "unrecognized rank pattern {histogram:?} in '{}'",
                    hand.to_text()
                )))
            }
        };

        Ok(Self { cards, category, counts })
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// Cards per rank, indexed by [`Rank::index`].
    pub const fn counts(&self) -> &[u8; 13] {
        &self.counts
    }

    /// How many cards of `rank` the hand holds.
    pub const fn count_of(&self, rank: Rank) -> u8 {
        self.counts[rank.index()]
    }

    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The ranked cards as a face-up hand.
    pub fn hand(&self) -> Hand {
        Hand::with_visibility(self.cards.to_vec(), true)
    }
}

/// Occupied slots must span exactly five consecutive ranks.
fn is_straight(counts: &[u8; 13]) -> bool {
    let first = counts.iter().position(|&c| c > 0);
    let last = counts.iter().rposition(|&c| c > 0);
    matches!((first, last), (Some(lo), Some(hi)) if hi - lo == HAND_SIZE - 1)
}

impl Ord for Ranking {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| other.counts.cmp(&self.counts))
    }
}

impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranking {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranking {}

impl TryFrom<&Hand> for Ranking {
    type Error = Error;
    fn try_from(hand: &Hand) -> Result<Self, Self::Error> {
        Ranking::new(hand)
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hand().to_text(), self.category)
    }
}
