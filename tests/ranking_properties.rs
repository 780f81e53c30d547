use poker_hands::cards::{Card, Rank, Suit};
use poker_hands::hand::Hand;
use poker_hands::ranking::{Category, Ranking};
use proptest::prelude::*;

fn full_deck() -> Vec<Card> {
    Rank::ALL.iter().flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s))).collect()
}

fn any_five() -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(full_deck(), 5).prop_shuffle()
}

fn ranking(cards: &[Card]) -> Ranking {
    Ranking::new(&Hand::new(cards.to_vec())).expect("five distinct cards")
}

proptest! {
    #[test]
    fn every_five_distinct_cards_rank(cards in any_five()) {
        let r = ranking(&cards);
        prop_assert_eq!(r.counts().iter().map(|&c| u32::from(c)).sum::<u32>(), 5);
        prop_assert!(r.counts().iter().all(|&c| c <= 4));
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(a in any_five(), b in any_five(), c in any_five()) {
        let ra = ranking(&a);
        let rb = ranking(&b);
        let rc = ranking(&c);

        if ra >= rb && rb >= ra { prop_assert_eq!(&ra, &rb); }
        if ra >= rb && rb >= rc { prop_assert!(ra >= rc); }
    }

    #[test]
    fn category_decides_before_tie_break(a in any_five(), b in any_five()) {
        let ra = ranking(&a);
        let rb = ranking(&b);
        if ra.category() != rb.category() {
            prop_assert_eq!(ra.cmp(&rb), ra.category().cmp(&rb.category()));
        }
    }

    #[test]
    fn card_order_and_visibility_do_not_matter(cards in any_five(), face_up in any::<bool>()) {
        let r = ranking(&cards);
        let mut reversed = cards.clone();
        reversed.reverse();
        let other = Ranking::new(&Hand::with_visibility(reversed, face_up)).unwrap();
        prop_assert_eq!(r.category(), other.category());
        prop_assert_eq!(r, other);
    }

    #[test]
    fn hand_text_round_trips(cards in any_five()) {
        let hand = Hand::with_visibility(cards, true);
        let parsed: Hand = hand.to_text().parse().unwrap();
        prop_assert_eq!(parsed, hand);
    }

    #[test]
    fn straights_need_five_consecutive_ranks(low in 0usize..=8, suits in prop::array::uniform5(0u8..4)) {
        let cards: Vec<Card> = (0..5)
            .map(|i| Card::new(Rank::ALL[low + i], Suit::from_value(suits[i]).unwrap()))
            .collect();
        let flush = suits.iter().all(|&s| s == suits[0]);
        let expected = if flush { Category::StraightFlush } else { Category::Straight };
        prop_assert_eq!(ranking(&cards).category(), expected);
    }
}
