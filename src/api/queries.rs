//! Запросы: только чтение, состояние меняется лишь в переданном аллокаторе.

use crate::domain::allocator::CardAllocator;
use crate::domain::hand::{parse_cards, Hand};
use crate::eval::compare_hands;

use super::dto::{CompareResultDto, HandViewDto, Winner};
use super::errors::ApiError;

/// Разобрать руку, занять её карты в аллокаторе и классифицировать.
///
/// При любой ошибке карты руки в аллокаторе не остаются занятыми.
pub fn deal_hand_from_string(s: &str, allocator: &mut CardAllocator) -> Result<Hand, ApiError> {
    let cards = allocator.allocate_hand(parse_cards(s)?)?;
    match Hand::new(cards) {
        Ok(hand) => Ok(hand),
        Err(err) => {
            for card in &cards {
                allocator.release(card);
            }
            Err(err.into())
        }
    }
}

/// Классификация одной руки.
pub fn classify_hand_string(s: &str, allocator: &mut CardAllocator) -> Result<HandViewDto, ApiError> {
    let hand = deal_hand_from_string(s, allocator)?;
    Ok(HandViewDto::from(&hand))
}

/// Сравнить две руки, заданные строками ("Ah Kh Qh Jh Th").
///
/// Карты обеих рук проходят через один аллокатор, так что при запрете
/// дубликатов пересекающиеся руки дают `ApiError::CardConflict`.
pub fn compare_hand_strings(
    left: &str,
    right: &str,
    allocator: &mut CardAllocator,
) -> Result<CompareResultDto, ApiError> {
    let left_hand = deal_hand_from_string(left, allocator)?;
    let right_hand = match deal_hand_from_string(right, allocator) {
        Ok(hand) => hand,
        Err(err) => {
            for card in left_hand.cards() {
                allocator.release(card);
            }
            return Err(err);
        }
    };

    let result = compare_hands(&left_hand, &right_hand);
    log::debug!(
        "compare [{}] vs [{}] -> {}",
        left_hand.debug_string(),
        right_hand.debug_string(),
        result
    );

    Ok(CompareResultDto {
        left: HandViewDto::from(&left_hand),
        right: HandViewDto::from(&right_hand),
        result,
        winner: Winner::from_comparison(result),
    })
}
