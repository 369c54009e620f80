use crate::core::scoring::score_therapist;
use crate::models::{QuizAnswers, RankedTherapist, ScoringWeights, Therapist};

/// Ranking orchestrator
///
/// Pure function of `(answers, roster)`: scores every therapist against
/// the quiz answers and returns the roster sorted by descending score.
/// Equal scores keep their roster order, so repeat invocations over the
/// same input produce identical output.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank a roster against optional quiz answers
    ///
    /// With no answers the roster is ordered by rating alone, each entry
    /// annotated "Default ranking by rating" — the fallback path when a
    /// client reaches the suggestions view without completing the quiz.
    /// An empty roster (e.g. the fetch is still in flight) yields an
    /// empty list, never an error.
    pub fn rank(
        &self,
        answers: Option<&QuizAnswers>,
        roster: Vec<Therapist>,
    ) -> Vec<RankedTherapist> {
        let mut ranked: Vec<RankedTherapist> = roster
            .into_iter()
            .map(|therapist| match answers {
                Some(answers) => {
                    let (score, reasons) = score_therapist(answers, &therapist, &self.weights);
                    RankedTherapist { therapist, score, reasons }
                }
                None => RankedTherapist {
                    score: therapist.rating,
                    reasons: vec!["Default ranking by rating".to_string()],
                    therapist,
                },
            })
            .collect();

        // sort_by is stable: ties preserve roster order
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
