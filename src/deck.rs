use crate::cards::{Card, Rank, Suit};
use crate::error::Error;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A deck of cards. Cards are drawn from the end of the internal list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full 52-card deck, ordered by rank, then suit.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert!(deck.to_string().starts_with("[2♣, 2♦, 2♠, 2♥, 3♣"));
    /// ```
    pub fn standard() -> Self {
        Self::from_parts(&Rank::ALL, &Suit::ALL)
    }

    /// Every combination of the given ranks and suits, rank-major in the given order.
    pub fn from_parts(ranks: &[Rank], suits: &[Suit]) -> Self {
        let mut cards = Vec::with_capacity(ranks.len() * suits.len());
        for &r in ranks {
            for &s in suits {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards; the last one is drawn next.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle with the thread-local RNG.
    pub fn shuffle(&mut self) -> &mut Self {
        self.cards.shuffle(&mut rand::rng());
        self
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) -> &mut Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
        self
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Draw `n` cards from the end of the deck, last card first, turned to `face_up`.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// let cards = deck.draw(2, true).unwrap();
    /// assert_eq!(cards[0].to_string(), "A♥");
    /// assert_eq!(cards[1].to_string(), "A♠");
    /// assert!(deck.draw(51, false).is_err());
    /// assert_eq!(deck.len(), 50);
    /// ```
    pub fn draw(&mut self, n: usize, face_up: bool) -> Result<Vec<Card>, Error> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(Error::InsufficientCards { requested: n, remaining });
        }
        let drawn = self
            .cards
            .drain(remaining - n..)
            .rev()
            .map(|mut c| {
                c.set_face_up(face_up);
                c
            })
            .collect();
        Ok(drawn)
    }

    /// Draw a single card.
    pub fn draw_one(&mut self, face_up: bool) -> Result<Card, Error> {
        let mut card = self
            .cards
            .pop()
            .ok_or(Error::InsufficientCards { requested: 1, remaining: 0 })?;
        card.set_face_up(face_up);
        Ok(card)
    }

    /// Deal face-down cards round-robin: every round gives one card to each hand in turn.
    ///
    /// Fails with [`Error::InsufficientCards`] when the deck is too small, or
    /// [`Error::DealTooLarge`] when the total card count does not fit in `usize`.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    /// use poker_hands::hand::Hand;
    ///
    /// let mut deck = Deck::standard();
    /// let hands = deck.deal(2, 3).unwrap();
    /// assert_eq!(hands.len(), 3);
    /// assert_eq!(Hand::new(hands[0].clone()).to_text(), "A♥-A♣");
    /// assert_eq!(Hand::new(hands[1].clone()).to_text(), "A♠-K♥");
    /// assert_eq!(deck.len(), 46);
    /// ```
    pub fn deal(
        &mut self,
        cards_per_hand: usize,
        number_of_hands: usize,
    ) -> Result<Vec<Vec<Card>>, Error> {
        let remaining = self.cards.len();
        let requested = cards_per_hand
            .checked_mul(number_of_hands)
            .ok_or(Error::DealTooLarge { cards_per_hand, number_of_hands })?;
        if requested > remaining {
            return Err(Error::InsufficientCards { requested, remaining });
        }

        let mut hands: Vec<Vec<Card>> =
            (0..number_of_hands).map(|_| Vec::with_capacity(cards_per_hand)).collect();
        for _ in 0..cards_per_hand {
            for hand in hands.iter_mut() {
                hand.push(self.draw_one(false)?);
            }
        }
        Ok(hands)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.cards.iter().map(Card::token).collect();
        write!(f, "[{}]", tokens.join(", "))
    }
}
