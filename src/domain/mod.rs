//! Доменная модель: карты, колода, учёт занятых карт и 5-карточная рука.

pub mod allocator;
pub mod card;
pub mod deck;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use allocator::*;
pub use card::*;
pub use deck::*;
pub use hand::*;
