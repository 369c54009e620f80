use crate::core::price::parse_price_amount;
use crate::models::{BudgetBracket, GenderPreference, LanguagePreference, QuizAnswers, ScoringWeights, Therapist};

/// Outcome of a single scoring factor
struct FactorOutcome {
    points: f64,
    reason: Option<String>,
}

impl FactorOutcome {
    fn none() -> Self {
        Self { points: 0.0, reason: None }
    }
}

type Factor = fn(&QuizAnswers, &Therapist, &ScoringWeights) -> FactorOutcome;

/// Factors in evaluation order. Reason ordering in the output follows
/// this table, so adding or removing a factor is a data change.
const FACTORS: &[Factor] = &[
    gender_factor,
    concern_factor,
    language_factor,
    budget_factor,
    availability_factor,
];

/// Score a therapist against the quiz answers
///
/// Scoring accumulates additively from independent factors:
///     gender match        +2 ("Any" or exact)
///     concern overlap     +3 per matched tag
///     language match      +2 ("Any" or spoken)
///     budget fit          +2 (inclusive bracket on parsed price)
///     available now       +1
/// plus the therapist's rating as an unconditional baseline, so all
/// else equal higher-rated therapists rank first. Each contributing
/// factor appends a human-readable reason; a default "Any" answer
/// earns points without a reason. If nothing produced a reason,
/// "Good overall match" stands in so a card is never unexplained.
pub fn score_therapist(
    answers: &QuizAnswers,
    therapist: &Therapist,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    for factor in FACTORS {
        let outcome = factor(answers, therapist, weights);
        score += outcome.points;
        if let Some(reason) = outcome.reason {
            reasons.push(reason);
        }
    }

    score += therapist.rating;

    if reasons.is_empty() {
        reasons.push("Good overall match".to_string());
    }

    (score, reasons)
}

fn gender_factor(
    answers: &QuizAnswers,
    therapist: &Therapist,
    weights: &ScoringWeights,
) -> FactorOutcome {
    if !answers.gender_preference.accepts(&therapist.gender) {
        return FactorOutcome::none();
    }

    // No reason for default ambivalence
    let reason = (answers.gender_preference != GenderPreference::Any)
        .then(|| format!("{} as preferred", answers.gender_preference.as_str()));

    FactorOutcome { points: weights.gender, reason }
}

fn concern_factor(
    answers: &QuizAnswers,
    therapist: &Therapist,
    weights: &ScoringWeights,
) -> FactorOutcome {
    let matched: Vec<&str> = answers
        .issues
        .iter()
        .filter(|issue| therapist.tags.iter().any(|tag| tag == *issue))
        .map(String::as_str)
        .collect();

    if matched.is_empty() {
        return FactorOutcome::none();
    }

    FactorOutcome {
        points: weights.concern * matched.len() as f64,
        reason: Some(format!("Focus: {}", matched.join(", "))),
    }
}

fn language_factor(
    answers: &QuizAnswers,
    therapist: &Therapist,
    weights: &ScoringWeights,
) -> FactorOutcome {
    if !answers.language.accepts(&therapist.languages) {
        return FactorOutcome::none();
    }

    let reason = (answers.language != LanguagePreference::Any)
        .then(|| format!("Speaks {}", answers.language.as_str()));

    FactorOutcome { points: weights.language, reason }
}

fn budget_factor(
    answers: &QuizAnswers,
    therapist: &Therapist,
    weights: &ScoringWeights,
) -> FactorOutcome {
    let amount = parse_price_amount(&therapist.price);

    if !answers.budget.fits(amount) {
        return FactorOutcome::none();
    }

    let reason = (answers.budget != BudgetBracket::Any)
        .then(|| format!("Within {} budget", answers.budget.label()));

    FactorOutcome { points: weights.budget, reason }
}

fn availability_factor(
    _answers: &QuizAnswers,
    therapist: &Therapist,
    weights: &ScoringWeights,
) -> FactorOutcome {
    // The requested availability window is intentionally not consulted
    // here; only the therapist's own flag counts.
    if !therapist.available {
        return FactorOutcome::none();
    }

    FactorOutcome {
        points: weights.availability,
        reason: Some("Available now".to_string()),
    }
}
