use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Pransakhi";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key of the persisted blob holding reminders, history and preferences.
pub const STORE_KEY: &str = "pransakhi_data";

/// Records kept per persisted collection (reminders, history).
pub const COLLECTION_LIMIT: usize = 20;

/// Longest symptom description accepted, in bytes.
pub const MAX_SYMPTOM_TEXT_LENGTH: usize = 2_000;

/// Dosage recorded when a reminder is saved without one.
pub const DEFAULT_DOSAGE: &str = "1 tablet";

/// Speech synthesis defaults. Slightly slower for regional languages.
pub const SPEECH_RATE: f32 = 0.85;
pub const SPEECH_PITCH: f32 = 1.0;
pub const SPEECH_VOLUME: f32 = 1.0;

/// Remedies read aloud after the advice sentence.
pub const SPOKEN_REMEDY_COUNT: usize = 3;

/// Get the application data directory
/// ~/Pransakhi/ on all platforms, the temp dir when there is no home.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_NAME)
}

/// Directory backing the local key-value store.
pub fn store_dir() -> PathBuf {
    app_data_dir().join("store")
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,pransakhi_lib=debug"
    } else {
        "warn,pransakhi_lib=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_ends_with_app_name() {
        assert!(app_data_dir().ends_with("Pransakhi"));
    }

    #[test]
    fn store_dir_under_app_data() {
        let store = store_dir();
        assert!(store.starts_with(app_data_dir()));
        assert!(store.ends_with("store"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn log_filter_names_this_crate() {
        assert!(default_log_filter().contains("pransakhi_lib"));
    }
}
