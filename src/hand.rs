use crate::cards::{Card, Colored};
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// An ordered group of cards.
///
/// A hand does not check how many cards it holds, so it also serves for
/// hole cards or board cards. The five-card requirement is enforced by
/// [`Ranking::new`](crate::ranking::Ranking::new).
///
/// ```
/// use poker_hands::hand::Hand;
///
/// let mut hand = Hand::from_text("A♥-K♠-2♦-5♣-Q♥", false).unwrap();
/// assert_eq!(hand.to_string(), "## ## ## ## ##");
/// hand.turn_face_up();
/// assert_eq!(hand.to_string(), "A♥ K♠ 2♦ 5♣ Q♥");
/// assert_eq!(hand.to_text(), "A♥-K♠-2♦-5♣-Q♥");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Build a hand with every card turned face down.
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_visibility(cards, false)
    }

    /// Build a hand and turn every card to the requested side.
    pub fn with_visibility(cards: Vec<Card>, face_up: bool) -> Self {
        let mut hand = Self { cards };
        if face_up {
            hand.turn_face_up();
        } else {
            hand.turn_face_down();
        }
        hand
    }

    /// Parse dash-separated card tokens, e.g. `A♥-K♠-2♦-5♣-Q♥`.
    pub fn from_text(text: &str, face_up: bool) -> Result<Self, Error> {
        let cards = text
            .split('-')
            .map(Card::from_text)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::InvalidHand(format!("'{text}': {e}")))?;
        Ok(Self::with_visibility(cards, face_up))
    }

    pub fn turn_face_up(&mut self) {
        self.cards.iter_mut().for_each(Card::turn_face_up);
    }

    pub fn turn_face_down(&mut self) {
        self.cards.iter_mut().for_each(Card::turn_face_down);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Dash-joined card tokens, independent of visibility.
    pub fn to_text(&self) -> String {
        self.cards.iter().map(Card::token).collect::<Vec<_>>().join("-")
    }

    pub fn colored(&self) -> Colored<'_, Hand> {
        Colored(self)
    }
}

impl FromStr for Hand {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::from_text(s, false)
    }
}

fn write_spaced<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.cards.iter())
    }
}

impl fmt::Display for Colored<'_, Hand> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.0.cards.iter().map(Card::colored))
    }
}
