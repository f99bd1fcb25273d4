//! Symptom lexicon and critical-condition synonyms.
//!
//! Both tables are plain static slices: iteration order is declaration
//! order, which decides the order condition labels are reported in.

use crate::models::RiskTier;

use super::types::KeywordMatch;

/// Label reported when no lexicon keyword matches.
pub const GENERAL_SYMPTOMS: &str = "General symptoms";

/// A keyword with its risk tier and condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconEntry {
    pub keyword: &'static str,
    pub risk: RiskTier,
    pub condition: &'static str,
}

const fn entry(keyword: &'static str, risk: RiskTier, condition: &'static str) -> LexiconEntry {
    LexiconEntry {
        keyword,
        risk,
        condition,
    }
}

/// Free-text lexicon. High tier first, then medium, then low.
pub static SYMPTOM_LEXICON: &[LexiconEntry] = &[
    entry("chest pain", RiskTier::High, "Possible Heart Issue"),
    entry("heart attack", RiskTier::High, "Heart Emergency"),
    entry("stroke", RiskTier::High, "Stroke Symptoms"),
    entry("unconscious", RiskTier::High, "Loss of Consciousness"),
    entry("severe bleeding", RiskTier::High, "Severe Bleeding"),
    entry("can't breathe", RiskTier::High, "Breathing Emergency"),
    entry("difficulty breathing", RiskTier::High, "Respiratory Distress"),
    entry("choking", RiskTier::High, "Choking"),
    entry("seizure", RiskTier::High, "Seizure"),
    entry("severe headache", RiskTier::High, "Severe Headache"),
    entry("paralysis", RiskTier::High, "Paralysis"),
    entry("fever", RiskTier::Medium, "Fever"),
    entry("high fever", RiskTier::Medium, "High Fever"),
    entry("vomiting", RiskTier::Medium, "Vomiting"),
    entry("diarrhea", RiskTier::Medium, "Diarrhea"),
    entry("stomach pain", RiskTier::Medium, "Abdominal Pain"),
    entry("back pain", RiskTier::Medium, "Back Pain"),
    entry("infection", RiskTier::Medium, "Possible Infection"),
    entry("rash", RiskTier::Medium, "Skin Rash"),
    entry("ear pain", RiskTier::Medium, "Ear Pain"),
    entry("sore throat", RiskTier::Medium, "Throat Infection"),
    entry("persistent cough", RiskTier::Medium, "Persistent Cough"),
    entry("blood in urine", RiskTier::Medium, "Hematuria"),
    entry("dizzy", RiskTier::Medium, "Dizziness"),
    entry("cold", RiskTier::Low, "Common Cold"),
    entry("cough", RiskTier::Low, "Cough"),
    entry("headache", RiskTier::Low, "Headache"),
    entry("runny nose", RiskTier::Low, "Cold Symptoms"),
    entry("minor cut", RiskTier::Low, "Minor Injury"),
    entry("fatigue", RiskTier::Low, "Fatigue"),
    entry("muscle pain", RiskTier::Low, "Muscle Ache"),
    entry("joint pain", RiskTier::Low, "Joint Pain"),
    entry("mild headache", RiskTier::Low, "Mild Headache"),
    entry("sneezing", RiskTier::Low, "Allergies/Cold"),
];

/// Canonical emergency name and the phrases that trigger it.
pub static CRITICAL_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "Heart Attack",
        &["chest pain", "heart pain", "cardiac arrest", "chest tightness"],
    ),
    (
        "Stroke",
        &["paralysis", "face drooping", "arm weakness", "speech difficulty", "sudden numbness"],
    ),
    (
        "Breathing Emergency",
        &["cant breathe", "difficulty breathing", "shortness of breath", "gasping", "choking"],
    ),
    ("Severe Bleeding", &["heavy bleeding", "blood loss", "hemorrhage"]),
    ("Seizure", &["convulsions", "fits", "shaking uncontrollably"]),
    ("Unconscious", &["passed out", "not responding", "fainted", "collapsed"]),
];

/// First critical condition (table order) with a trigger phrase in `text`.
pub fn detect_critical(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    CRITICAL_SYNONYMS
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(name, _)| *name)
}

/// Every lexicon keyword found in `text`, in lexicon declaration order.
///
/// A keyword whose every occurrence sits inside an occurrence of a longer
/// matched keyword is dropped ("high fever" hides "fever"). A shorter
/// keyword that also appears on its own is kept.
pub fn find_matches(text: &str) -> Vec<KeywordMatch> {
    let lower = text.to_lowercase();

    let found: Vec<(&LexiconEntry, Vec<(usize, usize)>)> = SYMPTOM_LEXICON
        .iter()
        .filter_map(|e| {
            let spans: Vec<(usize, usize)> = lower
                .match_indices(e.keyword)
                .map(|(start, m)| (start, start + m.len()))
                .collect();
            (!spans.is_empty()).then_some((e, spans))
        })
        .collect();

    found
        .iter()
        .filter(|(e, spans)| {
            spans.iter().any(|&(start, end)| {
                !found.iter().any(|(other, other_spans)| {
                    other.keyword.len() > e.keyword.len()
                        && other_spans.iter().any(|&(os, oe)| os <= start && end <= oe)
                })
            })
        })
        .map(|(e, _)| KeywordMatch {
            keyword: e.keyword,
            condition: e.condition,
            risk: e.risk,
        })
        .collect()
}
