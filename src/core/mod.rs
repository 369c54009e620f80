// Core algorithm exports
pub mod price;
pub mod quiz;
pub mod ranker;
pub mod scoring;

pub use price::parse_price_amount;
pub use quiz::{QuizError, QuizSession, QuizStep};
pub use ranker::Ranker;
pub use scoring::score_therapist;
