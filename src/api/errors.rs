use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AllocationError, CardParseError, HandParseError};
use crate::eval::EvalError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битая строка карты/руки).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// Карта уже занята (политика запрета дубликатов).
    #[error("Конфликт карт: {0}")]
    CardConflict(String),

    /// Рука структурно невозможна.
    #[error("Недопустимая рука: {0}")]
    InvalidHand(String),
}

impl From<CardParseError> for ApiError {
    fn from(err: CardParseError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<HandParseError> for ApiError {
    fn from(err: HandParseError) -> Self {
        match err {
            HandParseError::Eval(e) => e.into(),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<AllocationError> for ApiError {
    fn from(err: AllocationError) -> Self {
        ApiError::CardConflict(err.to_string())
    }
}

impl From<EvalError> for ApiError {
    fn from(err: EvalError) -> Self {
        ApiError::InvalidHand(err.to_string())
    }
}
