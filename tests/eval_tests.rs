//! Оценка рук и выбор победителя.
//!
//! Здесь проверяем:
//! - категории трёхкарточных рук (включая свёртку флеша/стрита);
//! - независимость от порядка карт;
//! - сравнение двух рук и правила ничьей;
//! - старшую карту в LuckyDraw.

use chip_poker_engine::domain::{Card, HandCategory, Rank, Suit};
use chip_poker_engine::eval::{
    describe_hand, determine_winner, evaluate_hand, high_card_winner, showdown_winner, HeadsUp,
    ShowdownHand,
};

use Rank::*;
use Suit::*;

/// Удобный конструктор карты.
fn c(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

fn hand(s: &str) -> ShowdownHand {
    let cards: Vec<Card> = s
        .split_whitespace()
        .map(|t| t.parse().expect("valid card"))
        .collect();
    cards.try_into().expect("three cards")
}

fn permutations(h: &ShowdownHand) -> Vec<ShowdownHand> {
    let [a, b, x] = *h;
    vec![
        [a, b, x],
        [a, x, b],
        [b, a, x],
        [b, x, a],
        [x, a, b],
        [x, b, a],
    ]
}

#[test]
fn plain_categories() {
    assert_eq!(evaluate_hand(&hand("2h 7d Kc")).category, HandCategory::HighCard);
    assert_eq!(evaluate_hand(&hand("5s 5d 9c")).category, HandCategory::Pair);
    assert_eq!(evaluate_hand(&hand("Qs Qd Qc")).category, HandCategory::ThreeOfAKind);
}

#[test]
fn flush_straight_and_straight_flush_collapse_to_three_of_a_kind() {
    let flush = evaluate_hand(&hand("2h 9h Kh"));
    assert_eq!(flush.category, HandCategory::ThreeOfAKind);
    assert!(flush.is_flush && !flush.is_straight);

    let straight = evaluate_hand(&hand("9s Td Jc"));
    assert_eq!(straight.category, HandCategory::ThreeOfAKind);
    assert!(straight.is_straight && !straight.is_flush);

    let sf = evaluate_hand(&hand("2h 3h 4h"));
    assert_eq!(sf.category, HandCategory::ThreeOfAKind);
    assert!(sf.is_straight_flush());
    assert_eq!(describe_hand(&sf), "Three of a kind (straight flush), high 4");
}

#[test]
fn ace_is_high_only() {
    let a23 = evaluate_hand(&hand("Ad 2s 3c"));
    assert!(!a23.is_straight);
    assert_eq!(a23.category, HandCategory::HighCard);
    assert_eq!(a23.high_card, Ace);

    let qka = evaluate_hand(&hand("Qd Ks Ac"));
    assert!(qka.is_straight);
}

#[test]
fn category_order() {
    assert!(HandCategory::HighCard < HandCategory::Pair);
    assert!(HandCategory::Pair < HandCategory::ThreeOfAKind);
}

#[test]
fn evaluation_does_not_depend_on_card_order() {
    for s in ["2h 3h 4h", "5s 5d 9c", "Kd 2c 7h", "9s Td Jc", "2h 9h Kh", "Qs Qd Qc"] {
        let h = hand(s);
        let expected = evaluate_hand(&h);
        for p in permutations(&h) {
            assert_eq!(evaluate_hand(&p), expected, "рука {s}");
        }
    }
}

/// Сценарий: стрит-флеш против пары.
#[test]
fn straight_flush_beats_pair() {
    let a = [c(Two, Hearts), c(Three, Hearts), c(Four, Hearts)];
    let b = [c(Five, Spades), c(Five, Diamonds), c(Nine, Clubs)];

    assert_eq!(evaluate_hand(&a).category, HandCategory::ThreeOfAKind);
    assert_eq!(evaluate_hand(&b).category, HandCategory::Pair);
    assert_eq!(determine_winner(&a, &b), HeadsUp::First);
    assert_eq!(determine_winner(&b, &a), HeadsUp::Second);
}

#[test]
fn equal_category_decided_by_highest_card() {
    let a = hand("Kh 2d 7c");
    let b = hand("Qh Jd 3c");
    assert_eq!(determine_winner(&a, &b), HeadsUp::First);
    assert_eq!(determine_winner(&b, &a), HeadsUp::Second);
}

#[test]
fn pair_rank_is_not_compared_only_high_card() {
    // Пара девяток против пары троек со старшей девяткой: старшие карты равны.
    let a = hand("9h 9d 2c");
    let b = hand("9s 3h 3d");
    assert_eq!(determine_winner(&a, &b), HeadsUp::Second);
    assert_eq!(determine_winner(&b, &a), HeadsUp::Second);
}

#[test]
fn exact_tie_goes_to_second_hand() {
    let a = hand("2h 5d 9c");
    let b = hand("2s 5c 9h");
    assert_eq!(determine_winner(&a, &b), HeadsUp::Second);
    assert_eq!(determine_winner(&b, &a), HeadsUp::Second);
}

#[test]
fn determine_winner_is_consistent_when_not_tied() {
    let hands = [
        hand("2h 3h 4h"),
        hand("5s 5d 9c"),
        hand("Kd 2c 7h"),
        hand("Ah Kd 3s"),
        hand("Qs Qd Qc"),
        hand("2c 4d 6s"),
    ];

    for a in &hands {
        for b in &hands {
            let ab = determine_winner(a, b);
            let ba = determine_winner(b, a);
            let ea = evaluate_hand(a);
            let eb = evaluate_hand(b);
            let tied = ea.category == eb.category && ea.high_card == eb.high_card;
            if tied {
                assert_eq!((ab, ba), (HeadsUp::Second, HeadsUp::Second));
            } else {
                assert_ne!(ab, ba, "{a:?} vs {b:?}");
            }
        }
    }
}

#[test]
fn showdown_winner_folds_over_seats() {
    let hands = [hand("Kd 2c 7h"), hand("5s 5d 9c"), hand("Ah Kd 3s")];
    assert_eq!(showdown_winner(&hands), Some(1));

    // Полная ничья у всех — выигрывает последнее место.
    let tied = [hand("2h 5d 9c"), hand("2s 5c 9h"), hand("2d 5h 9s")];
    assert_eq!(showdown_winner(&tied), Some(2));

    assert_eq!(showdown_winner(&[]), None);
}

/// Ace бьёт короля независимо от мастей.
#[test]
fn high_card_ace_beats_king_regardless_of_suit() {
    for (ace_suit, king_suit) in [(Clubs, Spades), (Spades, Clubs), (Hearts, Hearts)] {
        let cards = [c(Ace, ace_suit), c(King, king_suit)];
        assert_eq!(high_card_winner(&cards), Some(0));

        let reversed = [c(King, king_suit), c(Ace, ace_suit)];
        assert_eq!(high_card_winner(&reversed), Some(1));
    }
}

#[test]
fn high_card_tie_goes_to_first_in_order() {
    let cards = [c(King, Hearts), c(Ace, Spades), c(Ace, Diamonds)];
    assert_eq!(high_card_winner(&cards), Some(1));

    let all_same = [c(Seven, Clubs), c(Seven, Hearts), c(Seven, Spades)];
    assert_eq!(high_card_winner(&all_same), Some(0));

    assert_eq!(high_card_winner(&[]), None);
}
