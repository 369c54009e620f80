use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::QuizAnswers;

/// Request to rank therapist suggestions
///
/// `answers` is optional: a client that reaches the suggestions view
/// without completing the quiz gets the default ranking by rating.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankSuggestionsRequest {
    #[serde(default)]
    pub answers: Option<QuizAnswers>,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_when_absent() {
        let req: RankSuggestionsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.limit, 20);
        assert!(req.answers.is_none());
    }

    #[test]
    fn test_answers_deserialize_from_wire_names() {
        let json = r#"{
            "answers": {
                "genderPreference": "Female",
                "issues": ["Anxiety", "Trauma/PTSD"],
                "language": "English",
                "budget": "40k-50k",
                "availability": "Weekends"
            },
            "limit": 5
        }"#;

        let req: RankSuggestionsRequest = serde_json::from_str(json).unwrap();
        let answers = req.answers.unwrap();
        assert_eq!(answers.issues.len(), 2);
        assert_eq!(answers.budget.label(), "40k-50k");
        assert_eq!(req.limit, 5);
    }
}
