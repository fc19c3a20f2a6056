use core::cmp::Ordering;
use core::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::domain::card::{Card, CardParseError, Suit};
use crate::eval::lookup_tables::CARDS_IN_HAND;
use crate::eval::{
    classify, shared_suit, EvalError, HandCategory, HandRank, RankHistogram, TieBreak,
};

/// 5-карточная рука. Классифицируется один раз при создании и больше не меняется.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Hand {
    cards: [Card; CARDS_IN_HAND],
    histogram: RankHistogram,
    shared_suit: Option<Suit>,
    category: HandCategory,
    tie_break: TieBreak,
    rank: HandRank,
}

impl Hand {
    /// Создать руку и сразу её классифицировать.
    ///
    /// Ошибка возможна только для структурно невозможной руки
    /// (больше 4 карт одного ранга при разрешённых дубликатах).
    pub fn new(cards: [Card; CARDS_IN_HAND]) -> Result<Self, EvalError> {
        let classification = classify(&cards)?;
        Ok(Self {
            cards,
            histogram: RankHistogram::from_cards(&cards),
            shared_suit: shared_suit(&cards),
            category: classification.category,
            tie_break: classification.tie_break,
            rank: HandRank::from_parts(classification.category, &classification.tie_break),
        })
    }

    /// Карты в исходном порядке.
    pub fn cards(&self) -> &[Card; CARDS_IN_HAND] {
        &self.cards
    }

    pub fn histogram(&self) -> RankHistogram {
        self.histogram
    }

    /// Общая масть, если все 5 карт одной масти.
    pub fn shared_suit(&self) -> Option<Suit> {
        self.shared_suit
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn tie_break(&self) -> &TieBreak {
        &self.tie_break
    }

    /// Ключ сравнения.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Отладочная строка `S-A H-K ...` в исходном порядке карт.
    pub fn debug_string(&self) -> String {
        self.cards
            .iter()
            .map(Card::debug_label)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for Hand {
    /// Равенство по силе, а не по конкретным картам.
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Hand {
    /// Формат вида `Ah Kh Qh Jh Th`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Ошибки разбора руки из строки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HandParseError {
    #[error("В руке должно быть 5 карт, получено {0}")]
    WrongCardCount(usize),

    #[error(transparent)]
    Card(#[from] CardParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Разобрать 5 карт, разделённых пробелами: "Ah Kh Qh Jh Th".
///
/// Аллокатор здесь не участвует; для учёта занятых карт см. `CardAllocator`.
pub fn parse_cards(s: &str) -> Result<[Card; CARDS_IN_HAND], HandParseError> {
    let parsed = s
        .split_whitespace()
        .map(Card::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    let len = parsed.len();
    parsed
        .try_into()
        .map_err(|_| HandParseError::WrongCardCount(len))
}

impl FromStr for Hand {
    type Err = HandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Hand::new(parse_cards(s)?)?)
    }
}
