//! Symptom triage core.
//!
//! Pure functions over static tables: the lexicon and critical synonyms,
//! the risk classifier, the advice resolver, and the regional remedy table.
//! Nothing here holds state across calls, so it is safe to call from any
//! voice or UI callback without synchronization.

pub mod advice;
pub mod catalog;
pub mod classifier;
pub mod lexicon;
pub mod phrases;
pub mod remedies;
pub mod sanitize;
pub mod types;

pub use advice::advice_for;
pub use classifier::{classify_answers, classify_mcq, classify_text, McqAnswers};
pub use lexicon::find_matches;
pub use remedies::{resolve_remedies, RemedyTable};
pub use types::{AdviceBundle, ConditionTips, KeywordMatch, RiskResult, TriageError};
