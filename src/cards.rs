use crate::error::Error;
use crossterm::style::{style, Attribute, Color, Stylize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Slot of this rank in [`Rank::ALL`] (Two is 0, Ace is 12).
    pub const fn index(self) -> usize {
        self as usize - 2
    }

    /// ```
    /// use poker_hands::cards::Rank;
    ///
    /// assert_eq!(Rank::from_value(11).unwrap(), Rank::Jack);
    /// assert!(Rank::from_value(15).is_err());
    /// ```
    pub fn from_value(value: u8) -> Result<Self, Error> {
        match value {
            2..=14 => Ok(Rank::ALL[usize::from(value) - 2]),
            _ => Err(Error::InvalidRank(value.to_string())),
        }
    }

    /// Parse one of the fixed tokens `2`..`10`, `J`, `Q`, `K`, `A`.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        Rank::ALL
            .into_iter()
            .find(|r| r.token() == text)
            .ok_or_else(|| Error::InvalidRank(text.to_string()))
    }

    pub const fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::from_text(s)
    }
}

impl TryFrom<u8> for Rank {
    type Error = Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value)
    }
}

/// Four suits; order carries no hand strength but fixes deck order: ♣ < ♦ < ♠ < ♥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Spades = 2,
    Hearts = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Result<Self, Error> {
        Suit::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::InvalidSuit(value.to_string()))
    }

    pub fn from_glyph(glyph: char) -> Result<Self, Error> {
        Suit::ALL
            .into_iter()
            .find(|s| s.glyph() == glyph)
            .ok_or_else(|| Error::InvalidSuit(glyph.to_string()))
    }

    /// Parse a text holding exactly one suit glyph.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(glyph), None) => Suit::from_glyph(glyph),
            _ => Err(Error::InvalidSuit(text.to_string())),
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
        }
    }

    /// Diamonds and hearts. Only affects colored output.
    pub const fn is_red(self) -> bool {
        self.value() % 2 == 1
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Suit {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::from_text(s)
    }
}

impl TryFrom<char> for Suit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Suit::from_glyph(c)
    }
}

/// What a face-down card shows.
pub const FACE_DOWN: &str = "##";

/// A playing card: rank + suit, plus whether it is face up.
///
/// Visibility is presentation state only and never takes part in
/// equality, ordering or hashing.
///
/// ```
/// use poker_hands::cards::{Card, Rank, Suit};
///
/// let mut card = Card::new(Rank::Ace, Suit::Hearts);
/// assert_eq!(card.to_string(), "##");
/// card.turn_face_up();
/// assert_eq!(card.to_string(), "A♥");
/// assert_eq!("A♥".parse::<Card>().unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// A face-down card.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit, face_up: false }
    }

    /// Parse a 2 or 3 character token such as `Q♠` or `10♦`. The card is face down.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidCard(text.to_string());
        let glyph = text.chars().last().ok_or_else(invalid)?;
        let len = text.chars().count();
        if len != 2 && len != 3 {
            return Err(invalid());
        }
        let rank_text = &text[..text.len() - glyph.len_utf8()];
        let rank = Rank::from_text(rank_text).map_err(|_| invalid())?;
        let suit = Suit::from_glyph(glyph).map_err(|_| invalid())?;
        Ok(Card::new(rank, suit))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    pub fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    pub fn turn_face_down(&mut self) {
        self.face_up = false;
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    /// Text token, shown regardless of visibility.
    pub fn token(&self) -> String {
        format!("{}{}", self.rank, self.suit)
    }

    /// Display adapter that renders red suits in bold red.
    pub fn colored(&self) -> Colored<'_, Card> {
        Colored(self)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.to_tuple() == other.to_tuple()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_tuple().hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_tuple().cmp(&other.to_tuple())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            f.write_str(FACE_DOWN)
        }
    }
}

impl FromStr for Card {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_text(s)
    }
}

/// Borrowing display adapter with ANSI colors for red suits.
#[derive(Debug, Clone, Copy)]
pub struct Colored<'a, T>(pub(crate) &'a T);

impl fmt::Display for Colored<'_, Card> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        if !card.face_up {
            return f.write_str(FACE_DOWN);
        }
        if card.suit.is_red() {
            let glyph = style(card.suit.glyph()).with(Color::Red).attribute(Attribute::Bold);
            write!(f, "{}{}", card.rank, glyph)
        } else {
            write!(f, "{}{}", card.rank, card.suit)
        }
    }
}
