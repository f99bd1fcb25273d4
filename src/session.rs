//! Triage session: the state one user carries between screens.
//!
//! Owns the preferences, history and reminders loaded from a store and
//! writes them back after every change. Each analysis produces a
//! `TriageReport` ready to render or read aloud.

use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::journal::{HistoryEntry, Reminder};
use crate::models::{Language, Region, RiskTier};
use crate::store::{FileStore, KeyValueStore, SavedState, StoreError};
use crate::triage::phrases::{emergency_actions, reminder_confirmation, Phrase};
use crate::triage::sanitize::sanitize_symptom_text;
use crate::triage::{
    classify_answers, classify_text, resolve_remedies, McqAnswers, RiskResult, TriageError,
};
use crate::voice::{compose_spoken_summary, VoiceError};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Triage(#[from] TriageError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Voice(#[from] VoiceError),
}

/// Everything shown or spoken after one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageReport {
    /// What was analyzed: the described text or the selected symptom.
    pub subject: String,
    pub result: RiskResult,
    /// Home remedies for the primary condition. Empty for high risk.
    pub remedies: Vec<String>,
    pub risk_label: String,
    pub advice: String,
    /// Localized emergency steps. Only set for high risk.
    pub emergency_actions: Vec<String>,
    pub spoken_text: String,
}

impl TriageReport {
    pub fn risk(&self) -> RiskTier {
        self.result.risk
    }

    pub fn is_emergency(&self) -> bool {
        self.result.risk == RiskTier::High
    }
}

/// Where an analysis came from. Only used for logging.
#[derive(Debug, Clone, Copy)]
enum Source {
    Text,
    Mcq,
    Voice,
}

pub struct TriageSession<S: KeyValueStore> {
    store: S,
    state: SavedState,
    last_report: Option<TriageReport>,
}

impl<S: KeyValueStore> TriageSession<S> {
    /// Load saved state from `store`. Unreadable state starts fresh.
    pub fn open(store: S) -> Self {
        let state = SavedState::load(&store);
        tracing::info!(
            language = %state.language,
            region = %state.region,
            history = state.history.len(),
            reminders = state.reminders.len(),
            "Triage session opened"
        );
        Self {
            store,
            state,
            last_report: None,
        }
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn region(&self) -> Region {
        self.state.region
    }

    /// Switch language. Without an explicit region, the language's home
    /// region is used.
    pub fn select_language(
        &mut self,
        language: Language,
        region: Option<Region>,
    ) -> Result<(), SessionError> {
        let mut next = self.state.clone();
        next.language = language;
        next.region = region.unwrap_or_else(|| language.default_region());
        self.commit(next)?;
        tracing::info!(language = %language, region = %self.state.region, "Language selected");
        Ok(())
    }

    /// Analyze a free-text symptom description.
    pub fn analyze_text(&mut self, text: &str) -> Result<&TriageReport, SessionError> {
        let subject = sanitize_symptom_text(text)?;
        let result = classify_text(&subject)?;
        Ok(self.finish_analysis(subject, result, Source::Text))
    }

    /// Analyze the four multiple-choice answers.
    pub fn analyze_mcq(
        &mut self,
        body_part: &str,
        symptom: &str,
        severity: &str,
        duration: &str,
    ) -> Result<&TriageReport, SessionError> {
        let answers = McqAnswers::parse(body_part, symptom, severity, duration)?;
        let result = classify_answers(&answers);
        Ok(self.finish_analysis(answers.symptom, result, Source::Mcq))
    }

    /// Analyze the final transcript of a listening session.
    pub fn analyze_transcript(&mut self, transcript: &str) -> Result<&TriageReport, SessionError> {
        let subject = sanitize_symptom_text(transcript).map_err(|_| VoiceError::NoFinalResult)?;
        let result = classify_text(&subject)?;
        Ok(self.finish_analysis(subject, result, Source::Voice))
    }

    fn finish_analysis(
        &mut self,
        subject: String,
        result: RiskResult,
        source: Source,
    ) -> &TriageReport {
        let report = build_report(subject, result, self.state.language, self.state.region);

        tracing::info!(
            source = ?source,
            risk = %report.result.risk,
            conditions = report.result.conditions.len(),
            remedies = report.remedies.len(),
            "Analysis complete"
        );

        self.state.history.record(&report.subject, &report.result);
        // Best effort: the report is returned even if persisting fails.
        if let Err(e) = self.state.save(&self.store) {
            tracing::warn!(error = %e, "Failed to save history");
        }

        self.last_report.insert(report)
    }

    /// Add a reminder. Returns it with the confirmation to show or speak.
    pub fn add_reminder(
        &mut self,
        name: &str,
        time: &str,
        dosage: &str,
    ) -> Result<(Reminder, String), SessionError> {
        let mut next = self.state.clone();
        let reminder = next.reminders.add(name, time, dosage)?;
        self.commit(next)?;
        tracing::info!(id = reminder.id, total = self.state.reminders.len(), "Reminder added");
        let confirmation =
            reminder_confirmation(self.state.language, &reminder.name, &reminder.time);
        Ok((reminder, confirmation))
    }

    /// Delete a reminder. Unknown ids are not an error.
    pub fn delete_reminder(&mut self, id: i64) -> Result<bool, SessionError> {
        let mut next = self.state.clone();
        if !next.reminders.remove(id) {
            return Ok(false);
        }
        self.commit(next)?;
        tracing::info!(id, "Reminder deleted");
        Ok(true)
    }

    pub fn clear_history(&mut self) -> Result<(), SessionError> {
        let mut next = self.state.clone();
        next.history.clear();
        self.commit(next)
    }

    /// Persist `next` and only then make it the session state.
    fn commit(&mut self, next: SavedState) -> Result<(), SessionError> {
        next.save(&self.store)?;
        self.state = next;
        Ok(())
    }

    /// Past analyses, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history.entries()
    }

    /// Reminders ordered by time of day.
    pub fn reminders(&self) -> Vec<&Reminder> {
        self.state.reminders.by_time()
    }

    pub fn last_report(&self) -> Option<&TriageReport> {
        self.last_report.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl TriageSession<FileStore> {
    /// Open the session backed by the per-user data directory.
    pub fn open_default() -> Self {
        Self::open(FileStore::new(config::store_dir()))
    }
}

/// Assemble the presentable report for a classification.
pub fn build_report(
    subject: String,
    result: RiskResult,
    language: Language,
    region: Region,
) -> TriageReport {
    let risk = result.risk;
    let remedies = if risk == RiskTier::High {
        Vec::new()
    } else {
        resolve_remedies(result.primary_condition(), region, language)
    };
    let emergency_actions = if risk == RiskTier::High {
        emergency_actions(language).iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    };

    let risk_label = Phrase::risk_label(risk).text(language).to_string();
    let advice = Phrase::advice(risk).text(language).to_string();
    let spoken_text = compose_spoken_summary(&risk_label, &advice, &remedies, language);

    TriageReport {
        subject,
        result,
        remedies,
        risk_label,
        advice,
        emergency_actions,
        spoken_text,
    }
}
