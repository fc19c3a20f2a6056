//! Детекторы категорий. Порядок в `DETECTORS` — это приоритет:
//! детекторы пробуются сверху вниз, первый сработавший определяет руку.

use crate::domain::card::{Card, Suit};

use super::hand_rank::{HandCategory, TieBreak};
use super::histogram::{shared_suit, MultiplicityBuckets, RankHistogram};
use super::lookup_tables::detect_straight;

/// Всё, что детекторам нужно знать о руке. Считается один раз.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandShape {
    pub histogram: RankHistogram,
    pub buckets: MultiplicityBuckets,
    /// `None` = масти разные.
    pub suit: Option<Suit>,
}

impl HandShape {
    pub fn from_cards(cards: &[Card]) -> Self {
        let histogram = RankHistogram::from_cards(cards);
        Self {
            histogram,
            buckets: histogram.buckets(),
            suit: shared_suit(cards),
        }
    }

    #[inline]
    pub fn is_suited(&self) -> bool {
        self.suit.is_some()
    }
}

/// Результат классификации: категория + ранги для разрешения ничьих.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub category: HandCategory,
    pub tie_break: TieBreak,
}

impl Classification {
    fn new(category: HandCategory, tie_break: TieBreak) -> Self {
        Self {
            category,
            tie_break,
        }
    }
}

/// Чистая функция-детектор.
pub type DetectFn = fn(&HandShape) -> Option<Classification>;

#[derive(Clone, Copy, Debug)]
pub struct Detector {
    pub name: &'static str,
    /// Какие категории может выдать детектор.
    pub yields: &'static [HandCategory],
    pub detect: DetectFn,
}

/// Детекторы в порядке приоритета.
pub static DETECTORS: [Detector; 7] = [
    Detector {
        name: "straight",
        yields: &[HandCategory::StraightFlush, HandCategory::Straight],
        detect: detect_straight_or_straight_flush,
    },
    Detector {
        name: "distinct",
        yields: &[HandCategory::Flush, HandCategory::HighCard],
        detect: detect_flush_or_high_card,
    },
    Detector {
        name: "quads",
        yields: &[HandCategory::FourOfAKind],
        detect: detect_four_of_a_kind,
    },
    Detector {
        name: "full-house",
        yields: &[HandCategory::FullHouse],
        detect: detect_full_house,
    },
    Detector {
        name: "trips",
        yields: &[HandCategory::ThreeOfAKind],
        detect: detect_three_of_a_kind,
    },
    Detector {
        name: "two-pair",
        yields: &[HandCategory::TwoPair],
        detect: detect_two_pair,
    },
    Detector {
        name: "pair",
        yields: &[HandCategory::OnePair],
        detect: detect_one_pair,
    },
];

/// Прогнать детекторы по порядку, вернуть первое совпадение.
pub fn run_detectors(shape: &HandShape) -> Option<(&'static Detector, Classification)> {
    DETECTORS
        .iter()
        .find_map(|d| (d.detect)(shape).map(|c| (d, c)))
}

/// Пять последовательных рангов (включая wheel A2345).
pub fn detect_straight_or_straight_flush(shape: &HandShape) -> Option<Classification> {
    let high = detect_straight(shape.histogram.raw())?;
    let category = if shape.is_suited() {
        HandCategory::StraightFlush
    } else {
        HandCategory::Straight
    };
    Some(Classification::new(category, TieBreak::from_slice(&[high])))
}

/// Пять разных рангов не подряд.
pub fn detect_flush_or_high_card(shape: &HandShape) -> Option<Classification> {
    if shape.buckets.shape() != [0, 0, 0, 5] {
        return None;
    }
    // стрит (и wheel) забирает detect_straight_or_straight_flush
    if detect_straight(shape.histogram.raw()).is_some() {
        return None;
    }
    let category = if shape.is_suited() {
        HandCategory::Flush
    } else {
        HandCategory::HighCard
    };
    Some(Classification::new(category, shape.buckets.singles))
}

pub fn detect_four_of_a_kind(shape: &HandShape) -> Option<Classification> {
    let quad = shape.buckets.quads.get(0)?;
    Some(Classification::new(
        HandCategory::FourOfAKind,
        TieBreak::from_slice(&[quad]),
    ))
}

pub fn detect_full_house(shape: &HandShape) -> Option<Classification> {
    let b = &shape.buckets;
    if b.trips.len() != 1 || b.pairs.len() != 1 {
        return None;
    }
    Some(Classification::new(
        HandCategory::FullHouse,
        b.trips.chain(&b.pairs),
    ))
}

pub fn detect_three_of_a_kind(shape: &HandShape) -> Option<Classification> {
    let b = &shape.buckets;
    if b.trips.len() != 1 || b.singles.len() != 2 {
        return None;
    }
    Some(Classification::new(
        HandCategory::ThreeOfAKind,
        b.trips.chain(&b.singles),
    ))
}

pub fn detect_two_pair(shape: &HandShape) -> Option<Classification> {
    let b = &shape.buckets;
    if b.pairs.len() != 2 || b.singles.len() != 1 {
        return None;
    }
    Some(Classification::new(
        HandCategory::TwoPair,
        b.pairs.chain(&b.singles),
    ))
}

pub fn detect_one_pair(shape: &HandShape) -> Option<Classification> {
    let b = &shape.buckets;
    if b.pairs.len() != 1 || b.singles.len() != 3 {
        return None;
    }
    Some(Classification::new(
        HandCategory::OnePair,
        b.pairs.chain(&b.singles),
    ))
}
