//! In-memory progress per surah.
//!
//! The store is an ordinary owned value: the caller creates it, hands
//! `&mut` access to whatever drives a learning round, and drops or
//! [`reset`](ProgressStore::reset)s it. Nothing is persisted.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::memorization_engine::models::{AyahStatus, ProgressRecord, Surah};

#[derive(Debug, Clone, Default)]
pub struct ProgressStore {
    records: HashMap<String, ProgressRecord>,
    // Surahs with at least one written record, as opposed to a selection default.
    written: HashSet<String>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored record, or the default for a surah never selected.
    pub fn read_progress(&self, surah_id: &str) -> ProgressRecord {
        self.records.get(surah_id).copied().unwrap_or_default()
    }

    pub fn write_progress(&mut self, surah_id: &str, record: ProgressRecord) {
        debug!(
            "progress {surah_id}: ayah {} difficulty {} completed={}",
            record.current_ayah, record.difficulty.level(), record.completed
        );
        self.records.insert(surah_id.to_string(), record);
        self.written.insert(surah_id.to_string());
    }

    /// Whether a record was ever written for `surah_id`. A surah that was
    /// only selected holds the default record and has no completion yet.
    pub fn has_recorded(&self, surah_id: &str) -> bool {
        self.written.contains(surah_id)
    }

    /// Mark `surah_id` as chosen, creating a default record the first time.
    pub fn select_surah(&mut self, surah_id: &str) -> ProgressRecord {
        *self.records.entry(surah_id.to_string()).or_default()
    }

    pub fn contains(&self, surah_id: &str) -> bool {
        self.records.contains_key(surah_id)
    }

    pub fn reset(&mut self) {
        self.records.clear();
        self.written.clear();
    }

    /// `min(100, round(currentAyah / numberOfAyahs * 100))`, 0 when unseen.
    pub fn overall_percent(&self, surah: &Surah) -> u32 {
        let Some(record) = self.records.get(&surah.id) else {
            return 0;
        };
        if surah.number_of_ayahs == 0 {
            return 0;
        }
        let pct = (record.current_ayah as f64 / surah.number_of_ayahs as f64 * 100.0).round();
        pct.min(100.0) as u32
    }

    /// Status of the ayah at 0-based `index`.
    pub fn ayah_status(&self, surah_id: &str, index: usize) -> AyahStatus {
        let current = self.read_progress(surah_id).current_ayah.saturating_sub(1);
        match index {
            i if i < current => AyahStatus::Completed,
            i if i == current => AyahStatus::InProgress,
            _ => AyahStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memorization_engine::content::Library;
    use crate::memorization_engine::models::Difficulty;

    #[test]
    fn select_creates_default_once() {
        let mut store = ProgressStore::new();
        assert!(!store.contains("1"));
        assert_eq!(store.select_surah("1"), ProgressRecord::default());
        let rec = ProgressRecord { current_ayah: 3, difficulty: Difficulty::new(4), completed: false };
        store.write_progress("1", rec);
        assert_eq!(store.select_surah("1"), rec);
    }

    #[test]
    fn selection_alone_is_not_a_recorded_completion() {
        let mut store = ProgressStore::new();
        store.select_surah("1");
        assert!(!store.has_recorded("1"));
        // A completion of ayah 1 at difficulty 0 stores the same values as the default.
        store.write_progress("1", ProgressRecord::default());
        assert!(store.has_recorded("1"));
        assert_eq!(store.read_progress("1"), ProgressRecord::default());
    }

    #[test]
    fn reset_forgets_everything() {
        let mut store = ProgressStore::new();
        store.select_surah("112");
        store.write_progress("1", ProgressRecord::default());
        store.reset();
        assert!(!store.contains("112"));
        assert!(!store.has_recorded("1"));
        assert_eq!(store.read_progress("112"), ProgressRecord::default());
    }

    #[test]
    fn overall_percent_rounds_and_caps() {
        let lib = Library::builtin();
        let fatihah = lib.surah("1").unwrap();
        let mut store = ProgressStore::new();
        assert_eq!(store.overall_percent(fatihah), 0);
        store.select_surah("1");
        assert_eq!(store.overall_percent(fatihah), 14); // 1/7
        store.write_progress("1", ProgressRecord { current_ayah: 7, difficulty: Difficulty::MAX, completed: true });
        assert_eq!(store.overall_percent(fatihah), 100);
    }

    #[test]
    fn ayah_status_splits_around_current() {
        let mut store = ProgressStore::new();
        store.write_progress("1", ProgressRecord { current_ayah: 3, ..Default::default() });
        assert_eq!(store.ayah_status("1", 0), AyahStatus::Completed);
        assert_eq!(store.ayah_status("1", 1), AyahStatus::Completed);
        assert_eq!(store.ayah_status("1", 2), AyahStatus::InProgress);
        assert_eq!(store.ayah_status("1", 3), AyahStatus::Pending);
    }
}
