//! Модуль оценки силы 5-карточных покерных рук.
//!
//! Основные функции:
//!   `classify(cards) -> Classification`
//!   `compare_hands(a, b) -> -1 | 0 | 1`

pub mod detectors;
pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod histogram;
pub mod lookup_tables;

pub use detectors::{Classification, Detector, HandShape, DETECTORS};
pub use errors::{DecodeError, EvalError};
pub use evaluator::{classify, compare_hands, compare_ranks, evaluate_5card_hand};
pub use hand_rank::{describe_hand, hand_category, HandCategory, HandRank, TieBreak};
pub use histogram::{shared_suit, MultiplicityBuckets, RankHistogram, RankList};
