//! Sana Match - Therapist matching service for the Sana mental health app
//!
//! This library provides the matching core behind the app's therapist
//! suggestions screen: a five-step preference quiz and a ranking engine
//! that scores a therapist roster against the collected answers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{parse_price_amount, score_therapist, QuizError, QuizSession, QuizStep, Ranker};
pub use crate::models::{
    BudgetBracket, GenderPreference, LanguagePreference, QuizAnswers, RankedTherapist,
    ScoringWeights, Therapist,
};
