use core::cmp::Ordering;

use crate::domain::card::Card;
use crate::domain::hand::Hand;

use super::detectors::{run_detectors, Classification, HandShape};
use super::errors::EvalError;
use super::hand_rank::HandRank;
use super::lookup_tables::CARDS_IN_HAND;

/// Классифицировать строго 5-карточную руку.
///
/// Уникальность карт здесь не проверяется (это дело `CardAllocator`),
/// но ранг, встречающийся больше 4 раз, структурно невозможен → `RankOverflow`.
///
/// # Panics
/// Если ни один детектор не сработал на корректной руке. Любое мультимножество
/// из 5 рангов (не больше 4 одинаковых) попадает ровно в одну из 9 категорий,
/// так что это дефект классификатора.
pub fn classify(cards: &[Card; CARDS_IN_HAND]) -> Result<Classification, EvalError> {
    let shape = HandShape::from_cards(cards);

    if let Some((rank, count)) = shape.histogram.overflow() {
        return Err(EvalError::RankOverflow { rank, count });
    }

    let Some((detector, classification)) = run_detectors(&shape) else {
        unreachable!(
            "рука не классифицирована: histogram={}, suit={:?}",
            shape.histogram, shape.suit
        );
    };

    log::trace!(
        "classified histogram={} suit={:?} by `{}` as {} {:?}",
        shape.histogram,
        shape.suit,
        detector.name,
        classification.category,
        classification.tie_break.as_slice()
    );

    Ok(classification)
}

/// Ключ сравнения для 5 карт.
pub fn evaluate_5card_hand(cards: &[Card; CARDS_IN_HAND]) -> Result<HandRank, EvalError> {
    let c = classify(cards)?;
    Ok(HandRank::from_parts(c.category, &c.tie_break))
}

/// Сравнение двух ключей: -1, 0 или +1.
pub fn compare_ranks(a: HandRank, b: HandRank) -> i8 {
    match a.value().cmp(&b.value()) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Сравнение двух рук: -1, 0 или +1.
pub fn compare_hands(a: &Hand, b: &Hand) -> i8 {
    compare_ranks(a.rank(), b.rank())
}
