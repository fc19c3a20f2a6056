//! Таблицы кодирования рангов и мастей.
//!
//! Ранг ↔ вес (степень 16) и масть ↔ бит заданы явными полями таблиц,
//! порядок объявления enum'ов здесь ни на что не влияет.

use crate::domain::card::{Rank, Suit};

/// Гистограмма рангов: 13 ниблов, нибл `i` = число карт ранга с порядковым номером `i`.
pub type RankBits = u64;

/// Маска одной масти (ровно один бит из 4) или `SUIT_MIXED`.
pub type SuitBits = u8;

/// Одна строка таблицы рангов.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankEntry {
    pub rank: Rank,
    /// 0 = двойка, 12 = туз.
    pub ordinal: u8,
    /// 16^ordinal.
    pub weight: RankBits,
}

/// Одна строка таблицы мастей.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuitEntry {
    pub suit: Suit,
    pub bit: SuitBits,
}

pub const RANKS_COUNT: usize = 13;
pub const CARDS_IN_HAND: usize = 5;

/// Ширина одного нибла гистограммы.
pub const NIBBLE_BITS: u32 = 4;
pub const NIBBLE_MASK: RankBits = 0xF;

/// Пять ниблов подряд, каждый равен 1.
pub const STRAIGHT_RUN: RankBits = 0x11111;
pub const STRAIGHT_WINDOW: RankBits = 0xFFFFF;

/// "Масть не определена": AND по мастям разных карт.
pub const SUIT_MIXED: SuitBits = 0x0;
/// Начальное значение для AND по мастям руки.
pub const SUIT_ALL_BITS: SuitBits = 0xF;

pub static RANK_TABLE: [RankEntry; RANKS_COUNT] = [
    RankEntry { rank: Rank::Two, ordinal: 0, weight: 0x0000_0000_0000_0001 },
    RankEntry { rank: Rank::Three, ordinal: 1, weight: 0x0000_0000_0000_0010 },
    RankEntry { rank: Rank::Four, ordinal: 2, weight: 0x0000_0000_0000_0100 },
    RankEntry { rank: Rank::Five, ordinal: 3, weight: 0x0000_0000_0000_1000 },
    RankEntry { rank: Rank::Six, ordinal: 4, weight: 0x0000_0000_0001_0000 },
    RankEntry { rank: Rank::Seven, ordinal: 5, weight: 0x0000_0000_0010_0000 },
    RankEntry { rank: Rank::Eight, ordinal: 6, weight: 0x0000_0000_0100_0000 },
    RankEntry { rank: Rank::Nine, ordinal: 7, weight: 0x0000_0000_1000_0000 },
    RankEntry { rank: Rank::Ten, ordinal: 8, weight: 0x0000_0001_0000_0000 },
    RankEntry { rank: Rank::Jack, ordinal: 9, weight: 0x0000_0010_0000_0000 },
    RankEntry { rank: Rank::Queen, ordinal: 10, weight: 0x0000_0100_0000_0000 },
    RankEntry { rank: Rank::King, ordinal: 11, weight: 0x0000_1000_0000_0000 },
    RankEntry { rank: Rank::Ace, ordinal: 12, weight: 0x0001_0000_0000_0000 },
];

pub const SUIT_TABLE: [SuitEntry; 4] = [
    SuitEntry { suit: Suit::Spades, bit: 0x1 },
    SuitEntry { suit: Suit::Hearts, bit: 0x2 },
    SuitEntry { suit: Suit::Diamonds, bit: 0x4 },
    SuitEntry { suit: Suit::Clubs, bit: 0x8 },
];

/// Wheel (A2345): туз считается младшей картой.
pub const WHEEL_MASK: RankBits = (NIBBLE_MASK << (NIBBLE_BITS * 12)) | 0xFFFF;
pub const WHEEL_PATTERN: RankBits = (1 << (NIBBLE_BITS * 12)) | 0x1111;

/// Строка таблицы по рангу.
pub fn rank_entry(rank: Rank) -> &'static RankEntry {
    match rank {
        Rank::Two => &RANK_TABLE[0],
        Rank::Three => &RANK_TABLE[1],
        Rank::Four => &RANK_TABLE[2],
        Rank::Five => &RANK_TABLE[3],
        Rank::Six => &RANK_TABLE[4],
        Rank::Seven => &RANK_TABLE[5],
        Rank::Eight => &RANK_TABLE[6],
        Rank::Nine => &RANK_TABLE[7],
        Rank::Ten => &RANK_TABLE[8],
        Rank::Jack => &RANK_TABLE[9],
        Rank::Queen => &RANK_TABLE[10],
        Rank::King => &RANK_TABLE[11],
        Rank::Ace => &RANK_TABLE[12],
    }
}

/// Вес ранга в гистограмме (16^0 .. 16^12).
pub fn rank_weight(rank: Rank) -> RankBits {
    rank_entry(rank).weight
}

pub fn rank_ordinal(rank: Rank) -> u8 {
    rank_entry(rank).ordinal
}

/// Позиция нибла (0–12) → ранг.
pub fn rank_from_position(position: usize) -> Option<Rank> {
    RANK_TABLE
        .iter()
        .find(|entry| entry.ordinal as usize == position)
        .map(|entry| entry.rank)
}

/// Масть → единичный бит.
pub fn suit_bit(suit: Suit) -> SuitBits {
    SUIT_TABLE
        .iter()
        .find(|entry| entry.suit == suit)
        .map_or(SUIT_MIXED, |entry| entry.bit)
}

/// Бит → масть. Всё, что не ровно один из 4 битов (включая 0), — `None` ("mixed").
pub fn suit_from_bits(bits: SuitBits) -> Option<Suit> {
    SUIT_TABLE
        .iter()
        .find(|entry| entry.bit == bits)
        .map(|entry| entry.suit)
}

/// Значение нибла `position` в гистограмме.
#[inline]
pub const fn nibble(bits: RankBits, position: usize) -> u8 {
    ((bits >> (NIBBLE_BITS as usize * position)) & NIBBLE_MASK) as u8
}

/// Найти стрит в гистограмме. Возвращает старшую карту стрита.
///
/// Окна `i` = 0..=8 проверяются от младшего (6-high) к старшему (A-high),
/// затем отдельно wheel → `Rank::Five`.
pub fn detect_straight(bits: RankBits) -> Option<Rank> {
    for start in 0..=(RANKS_COUNT - CARDS_IN_HAND) {
        let window = (bits >> (NIBBLE_BITS as usize * start)) & STRAIGHT_WINDOW;
        if window == STRAIGHT_RUN {
            return rank_from_position(start + CARDS_IN_HAND - 1);
        }
    }

    if bits & WHEEL_MASK == WHEEL_PATTERN {
        return Some(Rank::Five);
    }

    None
}
