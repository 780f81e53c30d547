use poker_hands::error::Error;
use poker_hands::hand::Hand;
use poker_hands::ranking::{Category, Ranking};

fn ranking(text: &str) -> Ranking {
    let hand = Hand::from_text(text, true).expect("valid hand");
    Ranking::new(&hand).expect("rankable hand")
}

#[test]
fn category_high_card() {
    assert_eq!(ranking("A♥-K♠-2♦-5♣-Q♥").category(), Category::HighCard);
}

#[test]
fn category_pair() {
    assert_eq!(ranking("A♥-A♠-2♦-5♣-Q♥").category(), Category::Pair);
}

#[test]
fn category_double_pair() {
    assert_eq!(ranking("A♥-A♠-2♦-2♣-Q♥").category(), Category::DoublePair);
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(ranking("A♥-A♠-A♦-5♣-Q♥").category(), Category::ThreeOfAKind);
}

#[test]
fn category_straight() {
    assert_eq!(ranking("A♥-K♠-Q♦-J♣-10♥").category(), Category::Straight);
}

#[test]
fn category_flush() {
    assert_eq!(ranking("K♥-10♥-8♥-6♥-3♥").category(), Category::Flush);
}

#[test]
fn category_full_house() {
    assert_eq!(ranking("A♥-A♠-A♦-J♣-J♥").category(), Category::FullHouse);
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(ranking("A♥-A♠-A♦-A♣-10♥").category(), Category::FourOfAKind);
}

#[test]
fn category_straight_flush() {
    assert_eq!(ranking("A♥-K♥-Q♥-J♥-10♥").category(), Category::StraightFlush);
}

#[test]
fn higher_kicker_wins_high_card() {
    assert!(ranking("Q♥-J♠-10♦-9♣-7♥") < ranking("Q♦-J♠-10♦-9♣-8♥"));
}

#[test]
fn higher_trips_beat_lower_trips_in_full_house() {
    assert!(ranking("7♦-7♠-7♣-J♣-J♥") < ranking("8♥-8♦-8♠-7♠-7♣"));
    assert!(ranking("8♥-8♦-8♠-7♠-7♣") > ranking("7♦-7♠-7♣-J♣-J♥"));
}

#[test]
fn pair_and_trips_tie_breaks() {
    assert!(ranking("J♥-J♠-10♦-9♣-7♥") < ranking("Q♦-Q♠-10♦-9♣-8♥"));
    assert!(ranking("J♥-J♠-10♦-9♣-7♥") < ranking("J♦-J♣-10♦-9♣-8♥"));
    assert!(ranking("J♥-J♠-J♦-9♣-7♥") < ranking("J♥-J♠-J♦-10♣-7♥"));
}

#[test]
fn category_outranks_tie_break() {
    assert!(ranking("A♥-K♠-Q♦-J♣-9♥") < ranking("2♥-2♠-3♦-4♣-5♥"));
    assert!(ranking("2♥-2♠-3♦-3♣-4♥") < ranking("2♦-2♣-2♠-3♥-4♦"));
    assert!(ranking("2♥-3♥-4♥-5♥-6♥") > ranking("A♥-A♠-A♦-A♣-K♥"));
}

#[test]
fn unrankable_hands_are_rejected() {
    for text in ["A♥-K♠-2♦-5♣", "A♥-K♠-2♦-5♣-Q♥-J♥", "A♥-A♥-A♥-A♥-A♥"] {
        let hand = Hand::from_text(text, true).unwrap();
        assert!(matches!(Ranking::new(&hand), Err(Error::InvalidHand(_))), "{text}");
    }
    assert!(matches!(Ranking::new(&Hand::new(Vec::new())), Err(Error::InvalidHand(_))));
}
