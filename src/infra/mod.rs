//! Инфраструктурный слой вокруг оценщика:
//! - конфигурация (JSON / переменные окружения).

pub mod config;

pub use config::*;
