//! Report store - single-slot JSON persistence
//!
//! The whole collection lives in one key-value slot as a newest-first JSON
//! array. Every operation reads the array in full and writes it in full;
//! a write either replaces the slot or fails leaving prior state untouched.

mod seed;

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::models::{Report, ReportDraft};

/// Slot name holding the report collection.
pub const STORAGE_KEY: &str = "field_daily_reports_v2";

/// Backup files are plain JSON named by export date.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("backup_{}.json", date)
}

/// Synchronous key-value persistence seam. `get` returns the stored text
/// for a slot (or `None` if the slot was never written), `set` replaces it
/// wholesale.
pub trait KvBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-per-slot backend rooted at a directory. Writes go through a
/// temporary file and a rename, so a slot is replaced atomically.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default data directory: `<platform data dir>/sitelog`.
    pub fn default_root() -> Result<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| Error::storage("no platform data directory available"))?;
        Ok(base.join("sitelog"))
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-memory backend for tests and embedding hosts.
#[derive(Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| Error::storage("memory backend lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| Error::storage("memory backend lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// What `list()` does the first time it sees a never-written slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Persist the two example reports so the UI is never empty on first
    /// run. One-time bootstrap, not a recurring fallback.
    #[default]
    SeedExamples,
    /// Leave the collection empty.
    StartEmpty,
}

/// Owner of the persisted report collection. All reads and derives go
/// through copies handed out by this store; nothing else writes the slot.
pub struct ReportStore {
    backend: Box<dyn KvBackend>,
    seed: SeedPolicy,
}

impl ReportStore {
    pub fn new(backend: Box<dyn KvBackend>) -> Self {
        Self::with_seed_policy(backend, SeedPolicy::default())
    }

    pub fn with_seed_policy(backend: Box<dyn KvBackend>, seed: SeedPolicy) -> Self {
        Self { backend, seed }
    }

    /// Store over the default on-disk location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Box::new(FileBackend::new(FileBackend::default_root()?))))
    }

    /// Validate the draft, assign a fresh id and the current timestamp,
    /// prepend the record (newest-first by insertion, independent of the
    /// report date) and persist the whole collection.
    pub fn create(&self, draft: ReportDraft) -> Result<Report> {
        draft.validate()?;
        let id = uuid::Uuid::new_v4().to_string();
        let timestamp = Utc::now().timestamp_millis();
        let mut report = draft.into_report(id, timestamp);
        for row in &mut report.manpower {
            row.recompute_total();
        }

        let mut reports = self.load()?;
        reports.insert(0, report.clone());
        self.persist(&reports)?;
        Ok(report)
    }

    /// Replace the stored record with the same id, keeping its position in
    /// the list. Last write wins; there is no concurrency check.
    pub fn update(&self, report: Report) -> Result<()> {
        let mut reports = self.load()?;
        let slot = reports
            .iter_mut()
            .find(|r| r.id == report.id)
            .ok_or_else(|| Error::not_found(format!("report {}", report.id)))?;

        let mut report = report;
        for row in &mut report.manpower {
            row.recompute_total();
        }
        *slot = report;
        self.persist(&reports)
    }

    /// The full persisted collection, newest-first. A never-written slot is
    /// seeded once according to the [`SeedPolicy`]; unreadable stored text
    /// falls back to an empty collection without touching storage.
    pub fn list(&self) -> Result<Vec<Report>> {
        match self.backend.get(STORAGE_KEY)? {
            Some(text) => Ok(parse_collection(&text)),
            None => match self.seed {
                SeedPolicy::SeedExamples => {
                    log::info!("no stored reports, seeding example data");
                    let seeded = seed::example_reports();
                    self.persist(&seeded)?;
                    Ok(seeded)
                }
                SeedPolicy::StartEmpty => Ok(Vec::new()),
            },
        }
    }

    /// The most recently inserted report, as an owned copy for use as a
    /// form template.
    pub fn last_report(&self) -> Result<Option<Report>> {
        Ok(self.list()?.into_iter().next())
    }

    /// The whole collection as transportable, round-trippable JSON.
    pub fn export_backup(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.list()?)?)
    }

    /// Parse a backup and replace the stored collection wholesale. A parse
    /// failure returns an error before anything is written, so existing
    /// storage is never left half-restored.
    pub fn restore_backup(&self, text: &str) -> Result<usize> {
        let reports: Vec<Report> = serde_json::from_str(text)?;
        self.persist(&reports)?;
        Ok(reports.len())
    }

    // Read path for mutations: never seeds, so saving into empty storage
    // does not conjure example data.
    fn load(&self) -> Result<Vec<Report>> {
        match self.backend.get(STORAGE_KEY)? {
            Some(text) => Ok(parse_collection(&text)),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, reports: &[Report]) -> Result<()> {
        let text = serde_json::to_string(reports)?;
        self.backend.set(STORAGE_KEY, &text)
    }
}

fn parse_collection(text: &str) -> Vec<Report> {
    match serde_json::from_str(text) {
        Ok(reports) => reports,
        Err(err) => {
            log::warn!("stored report collection is unreadable, starting empty: {}", err);
            Vec::new()
        }
    }
}
