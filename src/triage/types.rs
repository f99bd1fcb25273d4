use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::RiskTier;

/// Triage core errors.
///
/// Lookup misses never surface here; they resolve through fallbacks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("Invalid input for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

impl TriageError {
    pub(crate) fn validation(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// One lexicon keyword found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordMatch {
    pub keyword: &'static str,
    pub condition: &'static str,
    pub risk: RiskTier,
}

/// Extra tips attached to the advice for a specific condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionTips {
    pub condition: String,
    pub tips: Vec<String>,
}

/// Fixed advice package for a risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceBundle {
    pub title: String,
    pub narrative: String,
    pub actions: Vec<String>,
    /// Condensed rendering meant for audio readout.
    pub spoken_text: String,
    /// Condition-specific sections, in condition order.
    pub tips: Vec<ConditionTips>,
}

/// Outcome of one analysis call. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk: RiskTier,
    /// Condition labels in first-seen order.
    pub conditions: Vec<String>,
    pub treatment: AdviceBundle,
    /// Set when the critical-condition override fired.
    pub emergency: bool,
}

impl RiskResult {
    /// The condition that drives remedy lookup and history labels.
    pub fn primary_condition(&self) -> &str {
        self.conditions
            .first()
            .map(String::as_str)
            .unwrap_or(super::lexicon::GENERAL_SYMPTOMS)
    }
}
