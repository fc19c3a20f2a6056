//! Оценщик 5-карточных покерных рук.
//!
//! Классифицирует руку (от старшей карты до стрит-флеша, включая wheel A2345)
//! и упаковывает категорию и решающие ранги в один `u64`-ключ,
//! так что сравнение двух рук — это сравнение двух чисел.
//!
//! Раздачи, ставки и выбор лучших 5 из 7 карт — забота вызывающего кода.

pub mod api;
pub mod domain;
pub mod eval;
pub mod infra;

pub use domain::{Card, CardAllocator, DuplicatePolicy, Hand, Rank, Suit};
pub use eval::{compare_hands, HandCategory, HandRank};
