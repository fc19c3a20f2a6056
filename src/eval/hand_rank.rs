use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

use super::errors::DecodeError;
use super::histogram::RankList;
use super::lookup_tables::CARDS_IN_HAND;

/// Последовательность рангов для разрешения ничьих внутри категории.
/// Длина фиксирована для каждой категории (`HandCategory::tie_break_len`).
pub type TieBreak = RankList;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    /// Все категории по возрастанию силы.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Порядковый номер силы: 0 = старшая карта, 8 = стрит-флеш.
    pub const fn priority(self) -> u8 {
        match self {
            HandCategory::HighCard => 0,
            HandCategory::OnePair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight => 4,
            HandCategory::Flush => 5,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 7,
            HandCategory::StraightFlush => 8,
        }
    }

    pub fn from_priority(priority: u8) -> Option<HandCategory> {
        Self::ALL.into_iter().find(|c| c.priority() == priority)
    }

    /// Сколько рангов участвует в сравнении внутри категории.
    ///
    /// Кикер каре в сравнении не участвует.
    pub const fn tie_break_len(self) -> usize {
        match self {
            HandCategory::StraightFlush | HandCategory::Straight => 1,
            HandCategory::FourOfAKind => 1,
            HandCategory::FullHouse => 2,
            HandCategory::ThreeOfAKind | HandCategory::TwoPair => 3,
            HandCategory::OnePair => 4,
            HandCategory::Flush | HandCategory::HighCard => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ключ сравнения рук. Две руки сравниваются как беззнаковые целые.
///
/// Схема кодирования (u64, по байтам от старшего):
///   [7: категория][6: tb0][5: tb1][4: tb2][3: tb3][2: tb4][1: 0][0: 0]
/// tb* — порядковые номера рангов (0 = двойка .. 12 = туз).
///
/// Неиспользуемые слоты заполняются нулём, как у двойки. Это безопасно:
/// внутри одной категории длина tie-break всегда одна и та же, поэтому
/// нулевой "пустой" слот сравнивается только с таким же пустым слотом.
///
/// В serde — число `u64`; при чтении ключ проверяется (`TryFrom<u64>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct HandRank(u64);

const CATEGORY_SHIFT: u32 = 8 * 7;
const FIRST_TIE_BREAK_SHIFT: u32 = 8 * 6;

impl HandRank {
    /// Собрать ключ из категории и tie-break рангов (старший слот первым).
    ///
    /// Ранги сверх `category.tie_break_len()` в ключ не попадают.
    pub fn from_parts(category: HandCategory, tie_break: &TieBreak) -> Self {
        let mut value = (category.priority() as u64) << CATEGORY_SHIFT;
        for (slot, rank) in tie_break
            .as_slice()
            .iter()
            .take(category.tie_break_len())
            .enumerate()
        {
            value |= (rank.ordinal() as u64) << (FIRST_TIE_BREAK_SHIFT - 8 * slot as u32);
        }
        HandRank(value)
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Вытащить категорию из ключа.
    pub fn category(&self) -> HandCategory {
        let priority = (self.0 >> CATEGORY_SHIFT) as u8;
        // ключ создаётся только через from_parts или проверенный TryFrom<u64>
        match HandCategory::from_priority(priority) {
            Some(category) => category,
            None => unreachable!("ключ {self} с неизвестной категорией {priority}"),
        }
    }

    /// Порядковые номера рангов во всех 5 слотах (включая пустые нули).
    pub fn tie_break_ordinals(&self) -> [u8; CARDS_IN_HAND] {
        let mut out = [0u8; CARDS_IN_HAND];
        for (slot, o) in out.iter_mut().enumerate() {
            *o = (self.0 >> (FIRST_TIE_BREAK_SHIFT - 8 * slot as u32)) as u8;
        }
        out
    }

    /// Значимые tie-break ранги (ровно `tie_break_len()` штук).
    pub fn tie_break(&self) -> TieBreak {
        let len = self.category().tie_break_len();
        let mut list = TieBreak::EMPTY;
        for ordinal in self.tie_break_ordinals().into_iter().take(len) {
            if let Some(rank) = Rank::from_ordinal(ordinal) {
                list.push(rank);
            }
        }
        list
    }
}

impl TryFrom<u64> for HandRank {
    type Error = DecodeError;

    /// Принимает только ключи, которые мог бы собрать `from_parts`:
    /// известная категория, ровно `tie_break_len()` рангов 0..=12,
    /// нули в остальных слотах и в двух младших байтах.
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let invalid = || DecodeError::InvalidKey(value);

        let category =
            HandCategory::from_priority((value >> CATEGORY_SHIFT) as u8).ok_or_else(invalid)?;
        if value & 0xFFFF != 0 {
            return Err(invalid());
        }

        let key = HandRank(value);
        let len = category.tie_break_len();
        for (slot, ordinal) in key.tie_break_ordinals().into_iter().enumerate() {
            let ok = if slot < len {
                Rank::from_ordinal(ordinal).is_some()
            } else {
                ordinal == 0
            };
            if !ok {
                return Err(invalid());
            }
        }
        Ok(key)
    }
}

impl From<HandRank> for u64 {
    fn from(rank: HandRank) -> Self {
        rank.0
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018X}", self.0)
    }
}

/// Удобная функция – получить категорию из HandRank.
pub fn hand_category(rank: HandRank) -> HandCategory {
    rank.category()
}

/// Человеческое описание руки: категория + решающие ранги.
pub fn describe_hand(rank: HandRank) -> String {
    let tb = rank.tie_break();
    let ranks = tb.as_slice();
    let r = |i: usize| ranks[i];

    match rank.category() {
        HandCategory::StraightFlush if r(0) == Rank::Ace => "Royal flush".to_string(),
        HandCategory::StraightFlush => format!("Straight flush, {}-high", r(0).name()),
        HandCategory::FourOfAKind => format!("Four of a kind, {}", r(0).plural_name()),
        HandCategory::FullHouse => format!(
            "Full house, {} full of {}",
            r(0).plural_name(),
            r(1).plural_name()
        ),
        HandCategory::Flush => format!("Flush, {}-high", r(0).name()),
        HandCategory::Straight => format!("Straight, {}-high", r(0).name()),
        HandCategory::ThreeOfAKind => format!("Three of a kind, {}", r(0).plural_name()),
        HandCategory::TwoPair => format!(
            "Two pair, {} and {}",
            r(0).plural_name(),
            r(1).plural_name()
        ),
        HandCategory::OnePair => format!("One pair, {}", r(0).plural_name()),
        HandCategory::HighCard => format!("High card, {}", r(0).name()),
    }
}
