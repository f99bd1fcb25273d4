//! Medicine reminders and triage history.
//!
//! Two independent collections persisted with the user's preferences.
//! Ids are epoch milliseconds, bumped so they stay strictly increasing
//! inside a collection even when two records land in the same millisecond.

use chrono::{Local, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::{COLLECTION_LIMIT, DEFAULT_DOSAGE};
use crate::models::RiskTier;
use crate::triage::{RiskResult, TriageError};

// ═══════════════════════════════════════════
// Reminders
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub name: String,
    /// HH:MM, 24-hour.
    pub time: String,
    pub dosage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderList {
    items: Vec<Reminder>,
}

impl ReminderList {
    /// Validate and append a reminder. Name and time are required.
    ///
    /// Keeps the newest `COLLECTION_LIMIT` reminders; the oldest by id is
    /// dropped first.
    pub fn add(&mut self, name: &str, time: &str, dosage: &str) -> Result<Reminder, TriageError> {
        self.add_at(name, time, dosage, Local::now().naive_local())
    }

    pub fn add_at(
        &mut self,
        name: &str,
        time: &str,
        dosage: &str,
        now: NaiveDateTime,
    ) -> Result<Reminder, TriageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TriageError::validation("name", "enter the medicine name"));
        }
        let time = time.trim();
        let parsed = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| TriageError::validation("time", "use HH:MM"))?;
        let dosage = match dosage.trim() {
            "" => DEFAULT_DOSAGE,
            d => d,
        };

        let reminder = Reminder {
            id: next_id(self.items.iter().map(|r| r.id).max(), now),
            name: name.to_string(),
            time: parsed.format("%H:%M").to_string(),
            dosage: dosage.to_string(),
        };
        self.items.push(reminder.clone());
        if self.items.len() > COLLECTION_LIMIT {
            self.items.sort_by_key(|r| r.id);
            let excess = self.items.len() - COLLECTION_LIMIT;
            self.items.drain(..excess);
        }
        Ok(reminder)
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
    }

    /// Reminders ordered by time of day.
    pub fn by_time(&self) -> Vec<&Reminder> {
        let mut sorted: Vec<&Reminder> = self.items.iter().collect();
        sorted.sort_by(|a, b| a.time.cmp(&b.time));
        sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reminder> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ═══════════════════════════════════════════
// History
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub timestamp: NaiveDateTime,
    /// Symptom label or the text the user described.
    pub symptom: String,
    pub risk: RiskTier,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Record an analysis, newest first, keeping the most recent `COLLECTION_LIMIT`.
    pub fn record(&mut self, symptom: &str, result: &RiskResult) -> &HistoryEntry {
        self.record_at(symptom, result, Local::now().naive_local())
    }

    pub fn record_at(
        &mut self,
        symptom: &str,
        result: &RiskResult,
        now: NaiveDateTime,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: next_id(self.entries.first().map(|e| e.id), now),
            timestamp: now,
            symptom: symptom.to_string(),
            risk: result.risk,
            conditions: result.conditions.clone(),
        };
        self.entries.insert(0, entry);
        self.entries.truncate(COLLECTION_LIMIT);
        &self.entries[0]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn next_id(last: Option<i64>, now: NaiveDateTime) -> i64 {
    let millis = now.and_utc().timestamp_millis();
    match last {
        Some(last) if last >= millis => last + 1,
        _ => millis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::classify_text;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn reminder_defaults_dosage() {
        let mut list = ReminderList::default();
        let r = list.add_at("Paracetamol", "8:05", "  ", at(9, 0)).unwrap();
        assert_eq!(r.dosage, "1 tablet");
        assert_eq!(r.time, "08:05");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn reminder_requires_name_and_valid_time() {
        let mut list = ReminderList::default();
        assert!(matches!(
            list.add_at("", "08:00", "", at(9, 0)),
            Err(TriageError::Validation { .. })
        ));
        assert!(list.add_at("Dolo", "", "", at(9, 0)).is_err());
        assert!(list.add_at("Dolo", "25:00", "", at(9, 0)).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn reminder_ids_stay_unique_within_same_millisecond() {
        let mut list = ReminderList::default();
        let a = list.add_at("A", "08:00", "", at(9, 0)).unwrap();
        let b = list.add_at("B", "09:00", "", at(9, 0)).unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[test]
    fn remove_reminder_by_id() {
        let mut list = ReminderList::default();
        let a = list.add_at("A", "20:00", "", at(9, 0)).unwrap();
        list.add_at("B", "07:30", "", at(9, 1)).unwrap();
        assert_eq!(list.by_time()[0].name, "B");
        assert!(list.remove(a.id));
        assert!(!list.remove(a.id));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn reminders_keep_twenty_most_recent() {
        let mut list = ReminderList::default();
        for i in 0..25 {
            list.add_at(&format!("med {i}"), "08:00", "", at(8, i)).unwrap();
        }
        assert_eq!(list.len(), COLLECTION_LIMIT);
        let names: Vec<&str> = list.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"med 5"));
        assert_eq!(names.last(), Some(&"med 24"));
    }

    #[test]
    fn history_keeps_twenty_most_recent_newest_first() {
        let result = classify_text("cough").unwrap();
        let mut history = History::default();
        for i in 0..25 {
            history.record_at(&format!("entry {i}"), &result, at(10, i));
        }
        assert_eq!(history.len(), COLLECTION_LIMIT);
        assert_eq!(history.entries()[0].symptom, "entry 24");
        assert_eq!(history.entries()[19].symptom, "entry 5");
        assert!(history
            .entries()
            .windows(2)
            .all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn history_entry_copies_result() {
        let result = classify_text("chest pain").unwrap();
        let mut history = History::default();
        let entry = history.record_at("chest pain", &result, at(11, 0)).clone();
        assert_eq!(entry.risk, RiskTier::High);
        assert_eq!(entry.conditions, result.conditions);
    }
}
