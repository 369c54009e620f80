// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AvailabilityWindow, BudgetBracket, GenderPreference, LanguagePreference, QuizAnswers,
    RankedTherapist, ScoringWeights, Therapist,
};
pub use requests::RankSuggestionsRequest;
pub use responses::{ErrorResponse, HealthResponse, RankSuggestionsResponse};
