//! Внешний API оценщика рук.
//!
//! Здесь описываются:
//! - запросы (queries.rs) — классификация и сравнение рук из строк;
//! - DTO (dto.rs) — сериализуемые представления для клиента;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use queries::*;
