//! Best-hand search over hole and board cards.
//!
//! Which splits are legal (how many private cards versus shared cards a
//! candidate may use) depends on the game being played, so callers pass
//! them in explicitly.

mod combinations;

pub use combinations::Combinations;

use crate::cards::Card;
use crate::error::Error;
use crate::hand::Hand;
use crate::ranking::{Ranking, HAND_SIZE};

/// Number of hole cards and board cards a candidate hand takes.
pub type Split = (usize, usize);

fn check_splits(splits: &[Split]) -> Result<(), Error> {
    match splits.iter().find(|(hole, board)| hole.checked_add(*board) != Some(HAND_SIZE)) {
        Some(&(hole, board)) => Err(Error::InvalidSplit { hole, board }),
        None => Ok(()),
    }
}

/// Rank every candidate formed by each split and return the strongest.
///
/// ```
/// use poker_hands::hand::Hand;
/// use poker_hands::ranking::Category;
/// use poker_hands::search::best_ranking;
///
/// let hole: Hand = "A♠-A♥-7♦-2♣".parse().unwrap();
/// let board: Hand = "A♦-K♠-K♣-9♥-3♦".parse().unwrap();
/// let best = best_ranking(hole.cards(), board.cards(), &[(2, 3)]).unwrap();
/// assert_eq!(best.category(), Category::FullHouse);
/// ```
pub fn best_ranking(hole: &[Card], board: &[Card], splits: &[Split]) -> Result<Ranking, Error> {
    check_splits(splits)?;

    let mut best: Option<Ranking> = None;
    for &(from_hole, from_board) in splits {
        for h in Combinations::new(hole.len(), from_hole) {
            for b in Combinations::new(board.len(), from_board) {
                let cards: Vec<Card> =
                    h.iter().map(|&i| hole[i]).chain(b.iter().map(|&i| board[i])).collect();
                let ranking = Ranking::new(&Hand::with_visibility(cards, true))?;
                if best.as_ref().map_or(true, |current| ranking > *current) {
                    best = Some(ranking);
                }
            }
        }
    }
    best.ok_or(Error::NoCandidates)
}

/// Best ranking for each player's hole cards, strongest first.
///
/// Each entry carries the player's position in `players`. Players whose
/// rankings tie stay in their original order.
pub fn rank_players<H: AsRef<[Card]>>(
    players: &[H],
    board: &[Card],
    splits: &[Split],
) -> Result<Vec<(usize, Ranking)>, Error> {
    let mut results = players
        .iter()
        .enumerate()
        .map(|(seat, hole)| best_ranking(hole.as_ref(), board, splits).map(|r| (seat, r)))
        .collect::<Result<Vec<_>, Error>>()?;
    results.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(results)
}
