//! Regional home-remedy table with region and language fallback.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::models::{Language, Region};

/// Returned when no region has an entry for the condition.
pub const ULTIMATE_FALLBACK: &[&str] = &[
    "Rest and stay hydrated",
    "Monitor your symptoms",
    "See a doctor if symptoms worsen",
    "Follow basic hygiene",
    "Eat light, nutritious food",
];

const BUNDLED_REMEDIES: &str = include_str!("../../resources/remedies.json");

static BUNDLED: LazyLock<RemedyTable> = LazyLock::new(|| {
    RemedyTable::from_json(BUNDLED_REMEDIES).expect("Invalid bundled remedies.json")
});

type ByLanguage = BTreeMap<Language, Vec<String>>;

/// region -> condition key -> language -> ordered remedies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RemedyTable {
    regions: BTreeMap<Region, BTreeMap<String, ByLanguage>>,
}

impl RemedyTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The table shipped with the crate.
    pub fn bundled() -> &'static RemedyTable {
        &BUNDLED
    }

    /// Remedies for a condition label. Never empty.
    ///
    /// Region entry, then the general region; inside the entry the
    /// requested language, then English; otherwise the generic list.
    pub fn resolve(&self, condition: &str, region: Region, language: Language) -> Vec<String> {
        let key = condition_key(condition);

        let entry = self
            .condition_entry(region, &key)
            .or_else(|| self.condition_entry(Region::General, &key));

        entry
            .and_then(|by_lang| {
                by_lang
                    .get(&language)
                    .or_else(|| by_lang.get(&Language::English))
            })
            .filter(|list| !list.is_empty())
            .cloned()
            .unwrap_or_else(|| ULTIMATE_FALLBACK.iter().map(|s| s.to_string()).collect())
    }

    /// Whether any region (or the general fallback) knows this condition.
    pub fn knows(&self, condition: &str) -> bool {
        let key = condition_key(condition);
        self.regions.values().any(|conditions| conditions.contains_key(&key))
    }

    /// Condition keys authored for one region.
    pub fn condition_keys(&self, region: Region) -> impl Iterator<Item = &str> {
        self.regions
            .get(&region)
            .into_iter()
            .flat_map(|conditions| conditions.keys().map(String::as_str))
    }

    fn condition_entry(&self, region: Region, key: &str) -> Option<&ByLanguage> {
        self.regions.get(&region).and_then(|conditions| conditions.get(key))
    }
}

/// Normalize a free-form condition label: lowercase, spaces to underscores.
pub fn condition_key(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Resolve against the bundled table.
pub fn resolve_remedies(condition: &str, region: Region, language: Language) -> Vec<String> {
    RemedyTable::bundled().resolve(condition, region, language)
}
