use std::env::{self, VarError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::allocator::{CardAllocator, DuplicatePolicy};

/// Переменная окружения, разрешающая дубликаты карт (`1`, `true`, `yes`).
pub const ALLOW_DUPLICATES_ENV: &str = "POKER_ALLOW_DUPLICATES";

/// Ошибки загрузки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Некорректный JSON конфигурации: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Некорректное значение {name}={value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Конфиг оценщика. Сейчас в нём только политика дубликатов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EvalConfig {
    pub duplicate_policy: DuplicatePolicy,
}

impl EvalConfig {
    /// Разобрать конфиг из JSON. Отсутствующие поля берутся по умолчанию.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Конфиг из окружения: `POKER_ALLOW_DUPLICATES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(env::var(ALLOW_DUPLICATES_ENV))
    }

    /// Результат `env::var`: переменная не задана → по умолчанию,
    /// не-UTF-8 значение → ошибка.
    pub fn from_env_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => Self::from_env_value(Some(&value)),
            Err(VarError::NotPresent) => Self::from_env_value(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidEnv {
                name: ALLOW_DUPLICATES_ENV,
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Разбор значения переменной (вынесено отдельно, чтобы тестировать без окружения).
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };
        let duplicate_policy = match raw.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" => DuplicatePolicy::Disallow,
            "1" | "true" | "yes" => DuplicatePolicy::Allow,
            _ => {
                return Err(ConfigError::InvalidEnv {
                    name: ALLOW_DUPLICATES_ENV,
                    value: raw.to_string(),
                })
            }
        };
        Ok(Self { duplicate_policy })
    }

    /// Новый аллокатор с политикой из конфига.
    pub fn build_allocator(&self) -> CardAllocator {
        CardAllocator::with_policy(self.duplicate_policy)
    }
}
