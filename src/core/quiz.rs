use thiserror::Error;

use crate::models::{
    AvailabilityWindow, BudgetBracket, GenderPreference, LanguagePreference, QuizAnswers,
};

/// Errors that can occur while walking the matching quiz
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Please select at least one concern")]
    NoConcernSelected,

    #[error("Quiz can only be submitted from the final step")]
    NotAtFinalStep,
}

/// The five quiz steps, in order
///
/// Each step owns its validator so a future step can grow a rule
/// without branching on step numbers. Today only the concerns step
/// validates anything: the single-choice steps all default to "Any"
/// and are always submittable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Gender,
    Concerns,
    Language,
    Budget,
    Availability,
}

impl QuizStep {
    const ORDER: [QuizStep; 5] = [
        QuizStep::Gender,
        QuizStep::Concerns,
        QuizStep::Language,
        QuizStep::Budget,
        QuizStep::Availability,
    ];

    /// 1-based step number, as shown in the quiz progress header.
    pub fn number(&self) -> usize {
        Self::ORDER.iter().position(|s| s == self).map(|i| i + 1).unwrap_or(1)
    }

    pub fn is_final(&self) -> bool {
        *self == QuizStep::Availability
    }

    fn next(&self) -> Option<QuizStep> {
        Self::ORDER.get(self.number()).copied()
    }

    fn previous(&self) -> Option<QuizStep> {
        self.number().checked_sub(2).and_then(|i| Self::ORDER.get(i).copied())
    }

    /// Per-step validation rule.
    pub fn validate(&self, answers: &QuizAnswers) -> Result<(), QuizError> {
        match self {
            QuizStep::Concerns if answers.issues.is_empty() => Err(QuizError::NoConcernSelected),
            _ => Ok(()),
        }
    }
}

/// Preference collector for the therapist matching quiz
///
/// Walks linearly through the five steps accumulating a [`QuizAnswers`]
/// value. Single active session per invocation; answers are ephemeral
/// and handed off wholesale on [`submit`](QuizSession::submit).
#[derive(Debug, Clone)]
pub struct QuizSession {
    step: QuizStep,
    answers: QuizAnswers,
}

impl QuizSession {
    /// Start a fresh quiz with every answer defaulted.
    pub fn new() -> Self {
        Self {
            step: QuizStep::Gender,
            answers: QuizAnswers::default(),
        }
    }

    /// Start the "Refine" flow: re-enter at step 1 with a previously
    /// submitted answer set as the initial state.
    pub fn with_answers(answers: QuizAnswers) -> Self {
        Self {
            step: QuizStep::Gender,
            answers,
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// Move to the next step if the current one validates. At the final
    /// step this is a no-op; submission is a separate action.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        self.step.validate(&self.answers)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    /// Move to the previous step. Never validates and never goes below
    /// step 1.
    pub fn retreat(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Add the tag if absent, remove it if present. Toggling twice
    /// restores the original selection.
    pub fn toggle_concern(&mut self, tag: &str) {
        if let Some(index) = self.answers.issues.iter().position(|t| t == tag) {
            self.answers.issues.remove(index);
        } else {
            self.answers.issues.push(tag.to_string());
        }
    }

    pub fn set_gender_preference(&mut self, preference: GenderPreference) {
        self.answers.gender_preference = preference;
    }

    pub fn set_language(&mut self, language: LanguagePreference) {
        self.answers.language = language;
    }

    pub fn set_budget(&mut self, budget: BudgetBracket) {
        self.answers.budget = budget;
    }

    pub fn set_availability(&mut self, availability: AvailabilityWindow) {
        self.answers.availability = availability;
    }

    /// Validate the final step and hand the completed answers to the
    /// caller. Only legal from step 5.
    pub fn submit(self) -> Result<QuizAnswers, QuizError> {
        if !self.step.is_final() {
            return Err(QuizError::NotAtFinalStep);
        }
        self.step.validate(&self.answers)?;
        Ok(self.answers)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at_concerns() -> QuizSession {
        let mut session = QuizSession::new();
        session.advance().unwrap();
        assert_eq!(session.step(), QuizStep::Concerns);
        session
    }

    #[test]
    fn test_advance_blocked_without_concern() {
        let mut session = session_at_concerns();

        assert_eq!(session.advance(), Err(QuizError::NoConcernSelected));
        assert_eq!(session.step(), QuizStep::Concerns);

        session.toggle_concern("Anxiety");
        assert_eq!(session.advance(), Ok(()));
        assert_eq!(session.step(), QuizStep::Language);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut session = QuizSession::new();
        session.toggle_concern("Anxiety");
        session.toggle_concern("Trauma/PTSD");

        let before = session.answers().issues.clone();

        session.toggle_concern("Stress");
        session.toggle_concern("Stress");

        assert_eq!(session.answers().issues, before);
    }

    #[test]
    fn test_retreat_floors_at_first_step() {
        let mut session = QuizSession::new();
        session.retreat();
        session.retreat();
        assert_eq!(session.step(), QuizStep::Gender);
        assert_eq!(session.step().number(), 1);
    }

    #[test]
    fn test_advance_is_noop_at_final_step() {
        let mut session = session_at_concerns();
        session.toggle_concern("Anxiety");

        for _ in 0..5 {
            session.advance().unwrap();
        }

        assert_eq!(session.step(), QuizStep::Availability);
    }

    #[test]
    fn test_submit_only_from_final_step() {
        let session = QuizSession::new();
        assert_eq!(session.submit(), Err(QuizError::NotAtFinalStep));

        let mut session = session_at_concerns();
        session.toggle_concern("Depression");
        session.set_gender_preference(GenderPreference::Female);
        session.set_language(LanguagePreference::English);
        session.set_budget(BudgetBracket::From40kTo50k);
        session.set_availability(AvailabilityWindow::Evenings);

        while !session.step().is_final() {
            session.advance().unwrap();
        }

        let answers = session.submit().unwrap();
        assert_eq!(answers.gender_preference, GenderPreference::Female);
        assert_eq!(answers.issues, vec!["Depression"]);
        assert_eq!(answers.budget, BudgetBracket::From40kTo50k);
        assert_eq!(answers.availability, AvailabilityWindow::Evenings);
    }

    #[test]
    fn test_refine_flow_keeps_prior_answers() {
        let prior = QuizAnswers {
            gender_preference: GenderPreference::Male,
            issues: vec!["Grief".to_string()],
            language: LanguagePreference::Luganda,
            budget: BudgetBracket::Above60k,
            availability: AvailabilityWindow::Weekends,
        };

        let session = QuizSession::with_answers(prior);

        assert_eq!(session.step(), QuizStep::Gender);
        assert_eq!(session.answers().issues, vec!["Grief"]);
        assert_eq!(session.answers().budget, BudgetBracket::Above60k);
    }
}
