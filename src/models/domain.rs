use serde::{Deserialize, Serialize};

/// Therapist record as delivered by the directory API
///
/// Read-only to the ranking engine; scoring derives a parallel
/// [`RankedTherapist`] instead of mutating these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Therapist {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub specialty: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Display price string, e.g. "UGX 45,000". Parsed by `core::price`.
    pub price: String,
    #[serde(rename = "priceUnit")]
    pub price_unit: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(rename = "nextAvailable", default)]
    pub next_available: Option<String>,
}

/// Client preferences collected by the matching quiz
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(rename = "genderPreference", default)]
    pub gender_preference: GenderPreference,
    /// Concern tags in selection order; uniqueness is enforced by the
    /// quiz's toggle semantics, not by this type.
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub language: LanguagePreference,
    #[serde(default)]
    pub budget: BudgetBracket,
    /// Collected by the quiz but not read by scoring; only the
    /// therapist's own `available` flag is scored.
    #[serde(default)]
    pub availability: AvailabilityWindow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderPreference {
    #[default]
    Any,
    Male,
    Female,
}

impl GenderPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// True when this preference accepts the given therapist gender.
    pub fn accepts(&self, gender: &str) -> bool {
        match self {
            Self::Any => true,
            _ => self.as_str() == gender,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguagePreference {
    #[default]
    Any,
    English,
    Luganda,
    French,
}

impl LanguagePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::English => "English",
            Self::Luganda => "Luganda",
            Self::French => "French",
        }
    }

    /// True when this preference accepts the given spoken-language list.
    pub fn accepts(&self, languages: &[String]) -> bool {
        match self {
            Self::Any => true,
            _ => languages.iter().any(|l| l == self.as_str()),
        }
    }
}

/// Budget bracket identifiers carry UGX semantics; the numeric fit test
/// lives in `core::price`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetBracket {
    #[default]
    Any,
    #[serde(rename = "40k-50k")]
    From40kTo50k,
    #[serde(rename = "50k-60k")]
    From50kTo60k,
    #[serde(rename = "60k+")]
    Above60k,
}

impl BudgetBracket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::From40kTo50k => "40k-50k",
            Self::From50kTo60k => "50k-60k",
            Self::Above60k => "60k+",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityWindow {
    #[default]
    Anytime,
    Weekdays,
    Weekends,
    Evenings,
}

/// Scored suggestion produced by the ranking engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTherapist {
    pub therapist: Therapist,
    pub score: f64,
    /// Full reason list; display truncation is the caller's concern.
    pub reasons: Vec<String>,
}

/// Per-factor scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub gender: f64,
    pub concern: f64,
    pub language: f64,
    pub budget: f64,
    pub availability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gender: 2.0,
            concern: 3.0,
            language: 2.0,
            budget: 2.0,
            availability: 1.0,
        }
    }
}
