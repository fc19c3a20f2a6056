//! Гистограмма рангов руки и её разбиение по кратностям.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

use super::errors::DecodeError;
use super::lookup_tables::{
    nibble, rank_from_position, rank_ordinal, rank_weight, suit_bit, suit_from_bits, RankBits,
    CARDS_IN_HAND, RANKS_COUNT, SUIT_ALL_BITS,
};

/// Короткий список рангов (не больше 5), хранится без аллокаций.
///
/// Порядок элементов задаёт тот, кто заполняет список.
/// В serde — обычный массив рангов длиной не больше 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rank>", into = "Vec<Rank>")]
pub struct RankList {
    ranks: [Rank; CARDS_IN_HAND],
    len: u8,
}

impl RankList {
    pub const EMPTY: RankList = RankList {
        ranks: [Rank::Two; CARDS_IN_HAND],
        len: 0,
    };

    pub fn from_slice(ranks: &[Rank]) -> Self {
        let mut list = Self::EMPTY;
        for &rank in ranks {
            list.push(rank);
        }
        list
    }

    /// Добавить ранг в конец. Лишние (шестой и далее) молча отбрасываются.
    pub fn push(&mut self, rank: Rank) {
        if (self.len as usize) < CARDS_IN_HAND {
            self.ranks[self.len as usize] = rank;
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<Rank> {
        self.as_slice().get(index).copied()
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }

    /// Склеить два списка (лишнее отбрасывается).
    pub fn chain(mut self, other: &RankList) -> Self {
        for &rank in other.as_slice() {
            self.push(rank);
        }
        self
    }
}

impl Default for RankList {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl TryFrom<Vec<Rank>> for RankList {
    type Error = DecodeError;

    fn try_from(ranks: Vec<Rank>) -> Result<Self, Self::Error> {
        if ranks.len() > CARDS_IN_HAND {
            return Err(DecodeError::TooManyRanks(ranks.len()));
        }
        Ok(Self::from_slice(&ranks))
    }
}

impl From<RankList> for Vec<Rank> {
    fn from(list: RankList) -> Self {
        list.as_slice().to_vec()
    }
}

/// Ранги руки, разложенные по кратности. Каждый список — по убыванию ранга.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MultiplicityBuckets {
    pub quads: RankList,
    pub trips: RankList,
    pub pairs: RankList,
    pub singles: RankList,
}

impl MultiplicityBuckets {
    /// Размеры корзин `[четвёрки, тройки, пары, одиночные]`.
    pub fn shape(&self) -> [usize; 4] {
        [
            self.quads.len(),
            self.trips.len(),
            self.pairs.len(),
            self.singles.len(),
        ]
    }
}

/// 64-битная гистограмма: нибл `i` = количество карт ранга `i` (0 = двойка).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RankHistogram(pub RankBits);

impl RankHistogram {
    /// Сумма весов рангов.
    pub fn from_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        RankHistogram(ranks.into_iter().map(rank_weight).sum())
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Self::from_ranks(cards.iter().map(|c| c.rank))
    }

    #[inline]
    pub fn raw(&self) -> RankBits {
        self.0
    }

    pub fn count(&self, rank: Rank) -> u8 {
        nibble(self.0, rank_ordinal(rank) as usize)
    }

    /// Сумма всех ниблов (для корректной руки всегда 5).
    pub fn total(&self) -> u32 {
        (0..RANKS_COUNT).map(|pos| nibble(self.0, pos) as u32).sum()
    }

    /// Сколько разных рангов присутствует.
    pub fn distinct(&self) -> usize {
        (0..RANKS_COUNT).filter(|&pos| nibble(self.0, pos) > 0).count()
    }

    /// Первый ранг (от старшего), встречающийся больше 4 раз.
    pub fn overflow(&self) -> Option<(Rank, u8)> {
        (0..RANKS_COUNT).rev().find_map(|pos| {
            let count = nibble(self.0, pos);
            if count > 4 {
                rank_from_position(pos).map(|rank| (rank, count))
            } else {
                None
            }
        })
    }

    /// Один проход по ниблам от туза к двойке.
    pub fn buckets(&self) -> MultiplicityBuckets {
        let mut buckets = MultiplicityBuckets::default();
        for pos in (0..RANKS_COUNT).rev() {
            let Some(rank) = rank_from_position(pos) else {
                continue;
            };
            match nibble(self.0, pos) {
                4 => buckets.quads.push(rank),
                3 => buckets.trips.push(rank),
                2 => buckets.pairs.push(rank),
                1 => buckets.singles.push(rank),
                _ => {}
            }
        }
        buckets
    }
}

impl fmt::Display for RankHistogram {
    /// 13 шестнадцатеричных цифр, слева туз.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:013X}", self.0)
    }
}

/// Общая масть руки: AND по битам мастей всех карт.
/// `None`, если масти разные.
pub fn shared_suit(cards: &[Card]) -> Option<Suit> {
    let bits = cards
        .iter()
        .fold(SUIT_ALL_BITS, |acc, card| acc & suit_bit(card.suit));
    suit_from_bits(bits)
}
