//! Тесты порядка рук.
//!
//! Эти тесты проверяют:
//! - межкатегорийный порядок (от стрит-флеша до старшей карты);
//! - аксиомы порядка: рефлексивность, антисимметрия, транзитивность;
//! - совпадение с простым эталонным сравнением на случайных руках.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use poker_hand_eval::domain::{Card, Deck, Hand, Rank};
use poker_hand_eval::eval::{compare_hands, HandCategory};

fn h(s: &str) -> Hand {
    s.parse().unwrap_or_else(|e| panic!("bad hand {s:?}: {e}"))
}

/// По две руки на категорию, от сильнейшей к слабейшей.
/// Одинаковые карты внутри руки допустимы: аллокатор здесь не участвует.
const LADDER: [(&str, HandCategory); 18] = [
    ("As Ks Qs Js Ts", HandCategory::StraightFlush),
    ("5s 4s 3s 2s As", HandCategory::StraightFlush),
    ("As As As As Ks", HandCategory::FourOfAKind),
    ("2s 2s 2s 2s 3s", HandCategory::FourOfAKind),
    ("As As As Ks Ks", HandCategory::FullHouse),
    ("2s 2s 2s 3s 3s", HandCategory::FullHouse),
    ("As Ks Qs Js 9s", HandCategory::Flush),
    ("7s 5s 4s 3s 2s", HandCategory::Flush),
    ("Ah Ks Qs Js Ts", HandCategory::Straight),
    ("5h 4s 3s 2s As", HandCategory::Straight),
    ("As As As Ks Qs", HandCategory::ThreeOfAKind),
    ("2s 2s 2s 4s 3s", HandCategory::ThreeOfAKind),
    ("As As Ks Ks Qs", HandCategory::TwoPair),
    ("3s 3s 2s 2s 4s", HandCategory::TwoPair),
    ("As As Ks Qs Js", HandCategory::OnePair),
    ("2s 2s 5s 4s 3s", HandCategory::OnePair),
    ("Ah Ks Qs Js 9s", HandCategory::HighCard),
    ("7h 5s 4s 3s 2s", HandCategory::HighCard),
];

fn ladder() -> Vec<Hand> {
    LADDER
        .iter()
        .map(|(s, category)| {
            let hand = h(s);
            assert_eq!(hand.category(), *category, "{s}");
            hand
        })
        .collect()
}

//
// TEST 1 — каждая рука лестницы сильнее всех ниже и равна себе
//
#[test]
fn cross_category_ladder_is_strictly_descending() {
    let hands = ladder();
    for i in 0..hands.len() {
        for j in i..hands.len() {
            let expected = if i == j { 0 } else { 1 };
            assert_eq!(
                compare_hands(&hands[i], &hands[j]),
                expected,
                "[{}] vs [{}]",
                hands[i].debug_string(),
                hands[j].debug_string()
            );
        }
    }
}

//
// TEST 2 — категория старше любой комбинации рангов ниже неё
//
#[test]
fn category_dominates_ranks() {
    // слабейшая рука каждой категории против сильнейшей из категории ниже
    let hands = ladder();
    for pair in hands.chunks(2).collect::<Vec<_>>().windows(2) {
        let weakest_upper = &pair[0][1];
        let strongest_lower = &pair[1][0];
        assert!(weakest_upper.category().priority() > strongest_lower.category().priority());
        assert_eq!(compare_hands(weakest_upper, strongest_lower), 1);
    }
}

//
// TEST 3 — аксиомы порядка на всех парах и тройках лестницы
//
#[test]
fn ordering_axioms_over_ladder() {
    let hands = ladder();
    for a in &hands {
        assert_eq!(compare_hands(a, a), 0);
        for b in &hands {
            assert_eq!(compare_hands(a, b), -compare_hands(b, a));
            for c in &hands {
                if compare_hands(a, b) >= 0 && compare_hands(b, c) >= 0 {
                    assert!(compare_hands(a, c) >= 0);
                }
            }
        }
    }
}

//
// Эталон: сортировка групп (кратность, ранг) по убыванию.
//
fn reference_key(cards: &[Card; 5]) -> (HandCategory, Vec<Rank>) {
    let mut groups: Vec<(usize, Rank)> = Rank::ALL
        .iter()
        .map(|&r| (cards.iter().filter(|c| c.rank == r).count(), r))
        .filter(|(n, _)| *n > 0)
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let ranks: Vec<Rank> = groups.iter().map(|(_, r)| *r).collect();
    let pattern: Vec<usize> = groups.iter().map(|(n, _)| *n).collect();

    let straight_high = if pattern.len() == 5 {
        if ranks[0].ordinal() - ranks[4].ordinal() == 4 {
            Some(ranks[0])
        } else if ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            Some(Rank::Five)
        } else {
            None
        }
    } else {
        None
    };

    match (straight_high, pattern.as_slice()) {
        (Some(high), _) if is_flush => (HandCategory::StraightFlush, vec![high]),
        (Some(high), _) => (HandCategory::Straight, vec![high]),
        (None, [4, 1]) => (HandCategory::FourOfAKind, vec![ranks[0]]),
        (None, [3, 2]) => (HandCategory::FullHouse, ranks),
        (None, [3, 1, 1]) => (HandCategory::ThreeOfAKind, ranks),
        (None, [2, 2, 1]) => (HandCategory::TwoPair, ranks),
        (None, [2, 1, 1, 1]) => (HandCategory::OnePair, ranks),
        (None, _) if is_flush => (HandCategory::Flush, ranks),
        (None, _) => (HandCategory::HighCard, ranks),
    }
}

fn random_hand(deck: &Deck, rng: &mut StdRng) -> [Card; 5] {
    let picked: Vec<Card> = deck.cards.choose_multiple(rng, 5).copied().collect();
    picked.try_into().expect("5 cards")
}

fn sign(o: Ordering) -> i8 {
    match o {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

//
// TEST 4 — случайные пары рук сравниваются так же, как эталон
//
#[test]
fn random_pairs_match_reference_ordering() {
    let deck = Deck::standard_52();
    let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);

    for _ in 0..20_000 {
        let a_cards = random_hand(&deck, &mut rng);
        let b_cards = random_hand(&deck, &mut rng);
        let a = Hand::new(a_cards).unwrap();
        let b = Hand::new(b_cards).unwrap();

        let ref_a = reference_key(&a_cards);
        let ref_b = reference_key(&b_cards);
        assert_eq!(a.category(), ref_a.0, "{a}");
        assert_eq!(a.tie_break().as_slice(), ref_a.1.as_slice(), "{a}");

        assert_eq!(
            compare_hands(&a, &b),
            sign(ref_a.cmp(&ref_b)),
            "[{a}] vs [{b}]"
        );
    }
}

//
// TEST 5 — транзитивность на случайных тройках
//
#[test]
fn random_triples_are_transitive() {
    let deck = Deck::standard_52();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..5_000 {
        let mut trio: Vec<Hand> = (0..3)
            .map(|_| Hand::new(random_hand(&deck, &mut rng)).unwrap())
            .collect();
        trio.sort();
        assert!(compare_hands(&trio[0], &trio[1]) <= 0);
        assert!(compare_hands(&trio[1], &trio[2]) <= 0);
        assert!(compare_hands(&trio[0], &trio[2]) <= 0);
    }
}
