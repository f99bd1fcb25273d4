//! Voice I/O gateway.
//!
//! The triage core never assumes speech exists. This module describes what
//! a platform speech backend has to provide and the single-in-flight rules
//! around it: a new utterance replaces the one being spoken, and a listening
//! session yields interim transcripts then exactly one final transcript.

pub mod narrator;
pub mod recognition;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{SPEECH_PITCH, SPEECH_RATE, SPEECH_VOLUME, SPOKEN_REMEDY_COUNT};
use crate::models::Language;
use crate::triage::phrases::Phrase;

pub use narrator::{Narrator, SpeechEngine};
pub use recognition::{ListeningSession, RecognitionEvent};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Listening ended without a final transcript")]
    NoFinalResult,

    #[error("Listening timed out")]
    Timeout,

    #[error("Utterance was cancelled")]
    Cancelled,

    #[error("No async runtime available for speech")]
    NoRuntime,

    #[error("Speech engine error: {0}")]
    Engine(String),
}

/// BCP-47 locale used for recognition and synthesis.
pub fn speech_locale(language: Language) -> &'static str {
    match language {
        Language::English => "en-IN",
        Language::Hindi => "hi-IN",
        Language::Marathi => "mr-IN",
        Language::Bengali => "bn-IN",
        Language::Punjabi => "pa-IN",
        Language::Tamil => "ta-IN",
        Language::Telugu => "te-IN",
        Language::Gujarati => "gu-IN",
    }
}

/// A synthesis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            locale: speech_locale(language).to_string(),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            volume: SPEECH_VOLUME,
        }
    }
}

/// A voice installed on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    pub locale: String,
}

/// Best installed voice for `locale`: exact match, same language, then any
/// Indian-English-family voice.
pub fn pick_voice<'a>(voices: &'a [VoiceInfo], locale: &str) -> Option<&'a VoiceInfo> {
    let prefix = locale.split('-').next().unwrap_or(locale);
    voices
        .iter()
        .find(|v| v.locale == locale)
        .or_else(|| voices.iter().find(|v| v.locale.starts_with(prefix)))
        .or_else(|| voices.iter().find(|v| v.locale.contains("-IN")))
}

/// Text read aloud for a report: label, advice, then the first remedies.
pub fn compose_spoken_summary(
    risk_label: &str,
    advice: &str,
    remedies: &[String],
    language: Language,
) -> String {
    let mut message = format!("{risk_label}. {advice}. ");
    if !remedies.is_empty() {
        let top: Vec<&str> = remedies
            .iter()
            .take(SPOKEN_REMEDY_COUNT)
            .map(String::as_str)
            .collect();
        message.push_str(&format!(
            "{}: {}. ",
            Phrase::HomeRemedies.text(language),
            top.join(". ")
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, locale: &str) -> VoiceInfo {
        VoiceInfo {
            name: name.into(),
            locale: locale.into(),
        }
    }

    #[test]
    fn every_language_has_an_indian_locale() {
        for language in Language::ALL {
            assert!(speech_locale(*language).ends_with("-IN"));
        }
    }

    #[test]
    fn utterance_uses_configured_rate() {
        let u = Utterance::new("hello", Language::Marathi);
        assert_eq!(u.locale, "mr-IN");
        assert_eq!(u.rate, SPEECH_RATE);
    }

    #[test]
    fn pick_voice_prefers_exact_then_prefix_then_indian() {
        let voices = vec![
            voice("US", "en-US"),
            voice("Hindi", "hi-IN"),
            voice("Tamil SG", "ta-SG"),
        ];
        assert_eq!(pick_voice(&voices, "hi-IN").unwrap().name, "Hindi");
        assert_eq!(pick_voice(&voices, "ta-IN").unwrap().name, "Tamil SG");
        assert_eq!(pick_voice(&voices, "gu-IN").unwrap().name, "Hindi");
        assert!(pick_voice(&voices[..1], "gu-IN").is_none());
    }

    #[test]
    fn spoken_summary_reads_first_three_remedies() {
        let remedies: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let text = compose_spoken_summary("Low Risk", "Rest", &remedies, Language::English);
        assert_eq!(text, "Low Risk. Rest. Home remedies: a. b. c. ");
    }

    #[test]
    fn spoken_summary_without_remedies() {
        let text = compose_spoken_summary("High Risk", "Call 108", &[], Language::English);
        assert_eq!(text, "High Risk. Call 108. ");
    }
}
