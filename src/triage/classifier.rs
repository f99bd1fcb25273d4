//! Risk classifier: free-text and multiple-choice modes.
//!
//! Both modes are pure. Same input, same `RiskResult`.

use serde::{Deserialize, Serialize};

use crate::models::{BodyPart, DurationBand, RiskTier, Severity};

use super::advice::advice_for;
use super::lexicon::{detect_critical, find_matches, GENERAL_SYMPTOMS};
use super::sanitize::sanitize_symptom_text;
use super::types::{RiskResult, TriageError};

/// Classify a free-text (typed or transcribed) symptom description.
///
/// A critical trigger phrase pins the tier to high and puts the emergency
/// name first; lexicon labels that also matched follow it.
pub fn classify_text(text: &str) -> Result<RiskResult, TriageError> {
    let text = sanitize_symptom_text(text)?;
    let matches = find_matches(&text);
    let critical = detect_critical(&text);

    let mut conditions: Vec<String> = Vec::with_capacity(matches.len() + 1);
    if let Some(name) = critical {
        conditions.push(name.to_string());
    }
    conditions.extend(matches.iter().map(|m| m.condition.to_string()));

    let risk = if critical.is_some() {
        RiskTier::High
    } else {
        matches.iter().map(|m| m.risk).max().unwrap_or(RiskTier::Low)
    };

    if conditions.is_empty() {
        conditions.push(GENERAL_SYMPTOMS.to_string());
    }

    tracing::debug!(
        risk = %risk,
        matches = matches.len(),
        emergency = critical.is_some(),
        "Classified free-text symptoms"
    );

    Ok(RiskResult {
        treatment: advice_for(risk, &conditions),
        risk,
        conditions,
        emergency: critical.is_some(),
    })
}

/// Answers collected by the multiple-choice flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqAnswers {
    pub body_part: BodyPart,
    pub symptom: String,
    pub severity: Severity,
    pub duration: DurationBand,
}

impl McqAnswers {
    /// Parse raw selections. Every field is required.
    pub fn parse(
        body_part: &str,
        symptom: &str,
        severity: &str,
        duration: &str,
    ) -> Result<Self, TriageError> {
        let symptom = symptom.trim();
        if symptom.is_empty() {
            return Err(TriageError::validation("symptom", "select a symptom"));
        }
        Ok(Self {
            body_part: required("body_part", body_part)?.parse()?,
            symptom: symptom.to_string(),
            severity: required("severity", severity)?.parse()?,
            duration: required("duration", duration)?.parse()?,
        })
    }

    /// Escalation rules. Each only raises the tier, starting from low.
    pub fn risk(&self) -> RiskTier {
        let symptom = self.symptom.to_lowercase();
        let chest = self.body_part == BodyPart::Chest;
        let severe = self.severity == Severity::Severe;

        let rules = [
            (severe, RiskTier::Medium),
            (chest && symptom.contains("pain"), RiskTier::High),
            (chest && symptom.contains("breathing"), RiskTier::High),
            (self.body_part == BodyPart::Head && severe, RiskTier::Medium),
        ];

        rules
            .iter()
            .filter(|(applies, _)| *applies)
            .map(|(_, tier)| *tier)
            .fold(RiskTier::Low, RiskTier::max)
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, TriageError> {
    let value = value.trim();
    if value.is_empty() {
        Err(TriageError::validation(field, "this answer is required"))
    } else {
        Ok(value)
    }
}

/// Classify already-validated multiple-choice answers.
pub fn classify_answers(answers: &McqAnswers) -> RiskResult {
    let risk = answers.risk();
    let conditions = vec![answers.symptom.clone()];

    tracing::debug!(
        risk = %risk,
        body_part = %answers.body_part,
        severity = %answers.severity,
        "Classified multiple-choice answers"
    );

    RiskResult {
        treatment: advice_for(risk, &conditions),
        risk,
        conditions,
        emergency: false,
    }
}

/// Classify raw multiple-choice selections.
pub fn classify_mcq(
    body_part: &str,
    symptom: &str,
    severity: &str,
    duration: &str,
) -> Result<RiskResult, TriageError> {
    let answers = McqAnswers::parse(body_part, symptom, severity, duration)?;
    Ok(classify_answers(&answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::lexicon::CRITICAL_SYNONYMS;

    #[test]
    fn chest_pain_with_headache_is_high_and_reports_both_labels() {
        let result = classify_text("I have chest pain and a headache").unwrap();
        assert_eq!(result.risk, RiskTier::High);
        assert!(result.emergency);
        assert_eq!(result.conditions[0], "Heart Attack");
        assert!(result.conditions.contains(&"Possible Heart Issue".to_string()));
        assert!(result.conditions.contains(&"Headache".to_string()));
    }

    #[test]
    fn mild_headache_is_low() {
        let result = classify_text("just a mild headache").unwrap();
        assert_eq!(result.risk, RiskTier::Low);
        assert_eq!(result.conditions, vec!["Mild Headache"]);
        assert!(!result.emergency);
    }

    #[test]
    fn highest_tier_wins() {
        let result = classify_text("runny nose, vomiting").unwrap();
        assert_eq!(result.risk, RiskTier::Medium);
        assert_eq!(result.conditions, vec!["Vomiting", "Cold Symptoms"]);
    }

    #[test]
    fn no_match_is_low_general_symptoms() {
        let result = classify_text("I feel a bit off").unwrap();
        assert_eq!(result.risk, RiskTier::Low);
        assert_eq!(result.conditions, vec![GENERAL_SYMPTOMS]);
        assert_eq!(result.treatment.title, "Home Care Recommended");
    }

    #[test]
    fn every_critical_trigger_forces_high() {
        for (_, triggers) in CRITICAL_SYNONYMS {
            for trigger in *triggers {
                let text = format!("mild headache and sneezing, also {trigger}");
                let result = classify_text(&text).unwrap();
                assert_eq!(result.risk, RiskTier::High, "trigger {trigger}");
                assert!(result.emergency);
            }
        }
    }

    #[test]
    fn critical_name_comes_from_first_matching_entry() {
        let result = classify_text("he fainted after chest tightness").unwrap();
        assert_eq!(result.conditions[0], "Heart Attack");
    }

    #[test]
    fn tips_follow_matched_conditions() {
        let result = classify_text("cough and a headache").unwrap();
        let sections: Vec<&str> = result
            .treatment
            .tips
            .iter()
            .map(|t| t.condition.as_str())
            .collect();
        assert_eq!(sections, vec!["Cough", "Headache"]);
    }

    #[test]
    fn blank_text_is_validation_failure_not_low_risk() {
        assert!(matches!(
            classify_text("   "),
            Err(TriageError::Validation { .. })
        ));
    }

    #[test]
    fn classify_text_is_idempotent() {
        let a = classify_text("high fever and rash").unwrap();
        let b = classify_text("high fever and rash").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mcq_chest_pain_is_high() {
        let result = classify_mcq("chest", "Chest pain", "severe", "week-plus").unwrap();
        assert_eq!(result.risk, RiskTier::High);
        assert_eq!(result.conditions, vec!["Chest pain"]);
    }

    #[test]
    fn mcq_mild_sore_throat_is_low() {
        let result = classify_mcq("throat", "Sore throat", "mild", "1-day").unwrap();
        assert_eq!(result.risk, RiskTier::Low);
    }

    #[test]
    fn mcq_breathing_check_ignores_case() {
        let result = classify_mcq("chest", "Breathing difficulty", "mild", "1-day").unwrap();
        assert_eq!(result.risk, RiskTier::High);
    }

    #[test]
    fn mcq_severe_is_at_least_medium() {
        let result = classify_mcq("stomach", "Nausea", "severe", "2-3-days").unwrap();
        assert_eq!(result.risk, RiskTier::Medium);
        let result = classify_mcq("head", "Headache", "severe", "1-day").unwrap();
        assert_eq!(result.risk, RiskTier::Medium);
        assert_eq!(result.treatment.tips.len(), 1);
    }

    #[test]
    fn mcq_pain_outside_chest_stays_low() {
        let result = classify_mcq("joints", "Joint pain", "moderate", "week-plus").unwrap();
        assert_eq!(result.risk, RiskTier::Low);
    }

    #[test]
    fn mcq_missing_or_unknown_fields_are_rejected() {
        assert!(matches!(
            classify_mcq("chest", "", "mild", "1-day"),
            Err(TriageError::Validation { .. })
        ));
        assert!(matches!(
            classify_mcq("", "Cough", "mild", "1-day"),
            Err(TriageError::Validation { .. })
        ));
        assert!(matches!(
            classify_mcq("chest", "Cough", "extreme", "1-day"),
            Err(TriageError::InvalidEnum { .. })
        ));
    }
}
