// src/questionnaire/mod.rs
// Questionnaire answers submitted before a chat session starts

pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use vocabulary::Dimension;

/// Answers to the intake questionnaire.
///
/// Each required field holds a short answer code (see [`vocabulary`]).
/// Codes outside the tables are accepted and echoed into the prompt as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    pub age: String,
    pub marital_status: String,
    pub prayer_commitment: String,
    #[serde(rename = "dhikrPractice", alias = "remembrancePractice")]
    pub remembrance_practice: String,
    pub mental_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_concerns: Option<String>,
}

impl QuestionnaireAnswers {
    /// Raw answer code for a dimension
    pub fn code(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Age => &self.age,
            Dimension::MaritalStatus => &self.marital_status,
            Dimension::PrayerCommitment => &self.prayer_commitment,
            Dimension::RemembrancePractice => &self.remembrance_practice,
            Dimension::MentalState => &self.mental_state,
        }
    }

    /// Free-text concerns, if any non-blank text was given
    pub fn concerns(&self) -> Option<&str> {
        self.specific_concerns
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            age: "18-25".to_string(),
            marital_status: "single".to_string(),
            prayer_commitment: "always".to_string(),
            remembrance_practice: "sometimes".to_string(),
            mental_state: "good".to_string(),
            specific_concerns: None,
        }
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "age": "18-25",
            "maritalStatus": "single",
            "prayerCommitment": "always",
            "dhikrPractice": "sometimes",
            "mentalState": "good"
        }"#;
        let answers: QuestionnaireAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers, sample());
    }

    #[test]
    fn test_deserialize_remembrance_alias() {
        let json = r#"{
            "age": "18-25",
            "maritalStatus": "single",
            "prayerCommitment": "always",
            "remembrancePractice": "sometimes",
            "mentalState": "good"
        }"#;
        let answers: QuestionnaireAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.remembrance_practice, "sometimes");
    }

    #[test]
    fn test_serialize_skips_missing_concerns() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["dhikrPractice"], "sometimes");
        assert!(value.get("specificConcerns").is_none());
    }

    #[test]
    fn test_code_per_dimension() {
        let answers = sample();
        let codes: Vec<&str> = Dimension::ALL.iter().map(|d| answers.code(*d)).collect();
        assert_eq!(codes, vec!["18-25", "single", "always", "sometimes", "good"]);
    }

    #[test]
    fn test_blank_concerns_are_absent() {
        let mut answers = sample();
        answers.specific_concerns = Some("   ".to_string());
        assert_eq!(answers.concerns(), None);

        answers.specific_concerns = Some(" قلق من العمل ".to_string());
        assert_eq!(answers.concerns(), Some("قلق من العمل"));
    }
}
