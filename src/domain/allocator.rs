use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};

/// Можно ли одной и той же карте быть "в игре" несколько раз.
///
/// `Allow` нужен для игр с общими картами, wildcard'ами или несколькими колодами,
/// а также для тестов, где удобно собрать, например, A A A K K одной масти.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Disallow,
    Allow,
}

/// Ошибки аллокатора карт.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Карта {card} уже в игре")]
    Conflict { card: Card },
}

/// Учёт занятых карт для одной логической колоды/стола.
///
/// Создаётся на стол, сбрасывается между раздачами (`reset`).
/// Не потокобезопасен сам по себе: общий аллокатор между потоками
/// нужно оборачивать в `Mutex`.
#[derive(Clone, Debug, Default)]
pub struct CardAllocator {
    policy: DuplicatePolicy,
    /// Карта → сколько раз выдана (больше 1 только при `Allow`).
    in_use: HashMap<Card, u32>,
}

impl CardAllocator {
    /// Аллокатор с политикой по умолчанию (дубликаты запрещены).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            in_use: HashMap::new(),
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Переключить политику. Уже выданные карты остаются выданными.
    pub fn set_policy(&mut self, policy: DuplicatePolicy) {
        if self.policy != policy {
            log::debug!("card allocator policy {:?} -> {:?}", self.policy, policy);
        }
        self.policy = policy;
    }

    pub fn is_available(&self, rank: Rank, suit: Suit) -> bool {
        self.is_card_available(&Card::new(rank, suit))
    }

    pub fn is_card_available(&self, card: &Card) -> bool {
        match self.policy {
            DuplicatePolicy::Allow => true,
            DuplicatePolicy::Disallow => !self.in_use.contains_key(card),
        }
    }

    /// Выдать карту (rank, suit) и пометить её занятой.
    pub fn allocate(&mut self, rank: Rank, suit: Suit) -> Result<Card, AllocationError> {
        self.allocate_card(Card::new(rank, suit))
    }

    pub fn allocate_card(&mut self, card: Card) -> Result<Card, AllocationError> {
        if !self.is_card_available(&card) {
            log::warn!("allocation conflict: {card} is already in play");
            return Err(AllocationError::Conflict { card });
        }
        *self.in_use.entry(card).or_insert(0) += 1;
        Ok(card)
    }

    /// Выдать сразу 5 карт руки.
    ///
    /// Либо выдаются все, либо ни одной: при конфликте карты,
    /// выданные этим вызовом, возвращаются обратно.
    pub fn allocate_hand(&mut self, cards: [Card; 5]) -> Result<[Card; 5], AllocationError> {
        for (i, card) in cards.iter().enumerate() {
            if let Err(err) = self.allocate_card(*card) {
                for taken in &cards[..i] {
                    self.release(taken);
                }
                return Err(err);
            }
        }
        Ok(cards)
    }

    /// Вернуть карту. `false`, если она не была выдана.
    pub fn release(&mut self, card: &Card) -> bool {
        match self.in_use.get_mut(card) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.in_use.remove(card);
                true
            }
            None => false,
        }
    }

    /// Освободить все карты (между раздачами).
    pub fn reset(&mut self) {
        log::debug!("card allocator reset, {} cards freed", self.in_use_count());
        self.in_use.clear();
    }

    /// Сколько выдач сейчас активно (дубликаты считаются отдельно).
    pub fn in_use_count(&self) -> usize {
        self.in_use.values().map(|&n| n as usize).sum()
    }
}
