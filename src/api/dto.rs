use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::Hand;
use crate::eval::{describe_hand, HandCategory};

/// DTO классифицированной руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandViewDto {
    /// Карты в исходном порядке.
    pub cards: Vec<Card>,
    /// Отладочная строка вида `S-A H-K ...`.
    pub label: String,
    pub category: HandCategory,
    pub tie_break: Vec<Rank>,
    pub shared_suit: Option<Suit>,
    /// Ключ сравнения в hex.
    pub key: String,
    pub description: String,
}

impl From<&Hand> for HandViewDto {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            label: hand.debug_string(),
            category: hand.category(),
            tie_break: hand.tie_break().as_slice().to_vec(),
            shared_suit: hand.shared_suit(),
            key: hand.rank().to_string(),
            description: describe_hand(hand.rank()),
        }
    }
}

/// Кто сильнее.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Left,
    Right,
    Tie,
}

impl Winner {
    pub fn from_comparison(result: i8) -> Self {
        match result {
            r if r > 0 => Winner::Left,
            r if r < 0 => Winner::Right,
            _ => Winner::Tie,
        }
    }
}

/// DTO результата сравнения двух рук.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareResultDto {
    pub left: HandViewDto,
    pub right: HandViewDto,
    /// -1, 0 или +1.
    pub result: i8,
    pub winner: Winner,
}
