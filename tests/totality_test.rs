//! Полный перебор всех 2 598 960 рук из 52-карточной колоды.

use std::collections::{HashMap, HashSet};

use poker_hand_eval::domain::Deck;
use poker_hand_eval::eval::{classify, HandCategory, HandRank};

/// Каждая рука получает ровно одну категорию, частоты совпадают с известными.
#[test]
fn every_five_card_hand_is_classified() {
    let cards = Deck::standard_52().cards;
    let n = cards.len();

    let mut counts: HashMap<HandCategory, u32> = HashMap::new();
    let mut distinct_keys: HashMap<HandCategory, HashSet<HandRank>> = HashMap::new();
    let mut total = 0u32;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let cls = classify(&five).expect("unique cards always classify");
                        *counts.entry(cls.category).or_insert(0) += 1;
                        distinct_keys
                            .entry(cls.category)
                            .or_default()
                            .insert(HandRank::from_parts(cls.category, &cls.tie_break));
                        total += 1;
                    }
                }
            }
        }
    }

    assert_eq!(total, 2_598_960);

    let expected = [
        (HandCategory::StraightFlush, 40),
        (HandCategory::FourOfAKind, 624),
        (HandCategory::FullHouse, 3_744),
        (HandCategory::Flush, 5_108),
        (HandCategory::Straight, 10_200),
        (HandCategory::ThreeOfAKind, 54_912),
        (HandCategory::TwoPair, 123_552),
        (HandCategory::OnePair, 1_098_240),
        (HandCategory::HighCard, 1_302_540),
    ];
    for (category, count) in expected {
        assert_eq!(counts.get(&category).copied(), Some(count), "{category}");
    }

    // Число различных ключей на категорию. Каре считается только по рангу
    // каре (кикер не участвует), поэтому 13, а не 156.
    let expected_keys = [
        (HandCategory::StraightFlush, 10),
        (HandCategory::FourOfAKind, 13),
        (HandCategory::FullHouse, 156),
        (HandCategory::Flush, 1_277),
        (HandCategory::Straight, 10),
        (HandCategory::ThreeOfAKind, 858),
        (HandCategory::TwoPair, 858),
        (HandCategory::OnePair, 2_860),
        (HandCategory::HighCard, 1_277),
    ];
    for (category, keys) in expected_keys {
        assert_eq!(
            distinct_keys.get(&category).map(|s| s.len()),
            Some(keys),
            "{category}"
        );
    }
}
