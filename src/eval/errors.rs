use thiserror::Error;

use crate::domain::card::Rank;

/// Ошибки оценки руки.
///
/// Неклассифицированная корректная рука сюда не попадает: это дефект,
/// и `classify` паникует.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Ранг {rank} встречается {count} раз(а), максимум 4")]
    RankOverflow { rank: Rank, count: u8 },
}

impl EvalError {
    pub fn rank(&self) -> Rank {
        match self {
            EvalError::RankOverflow { rank, .. } => *rank,
        }
    }
}

/// Ошибки восстановления значений оценщика из сериализованного вида.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Слишком много рангов: {0}, максимум 5")]
    TooManyRanks(usize),

    #[error("Некорректный ключ руки: {0:#018X}")]
    InvalidKey(u64),
}
