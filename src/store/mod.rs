//! The attendance roster and every operation that changes it.
//!
//! Every successful mutation rewrites the whole backing file before
//! returning, and validation always runs before anything is written.

mod csv_io;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordPatch};
use crate::utils::{capitalize, date};
use std::path::Path;

/// Result of [`Store::edit`].
#[derive(Debug)]
pub struct EditOutcome {
    /// The record as it stands after the edit.
    pub record: Record,
    /// At least one field was replaced (and the roster was saved).
    pub changed: bool,
    /// Fields that were supplied but rejected; the rest of the patch still applied.
    pub warnings: Vec<AppError>,
}

#[derive(Debug)]
pub struct Store {
    config: Config,
    records: Vec<Record>,
}

impl Store {
    /// Build a store from `config` and load the roster from its backing file.
    pub fn open(config: Config) -> AppResult<Self> {
        let mut store = Self {
            config,
            records: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.backing_path
    }

    /// (Re)load the roster. A missing file is created with just the header.
    pub fn load(&mut self) -> AppResult<&[Record]> {
        let path = &self.config.backing_path;

        self.records = if path.exists() {
            csv_io::read_records(path)?
        } else {
            csv_io::write_records(path, &[])?;
            Vec::new()
        };

        Ok(&self.records)
    }

    /// Rewrite the backing file with the current roster.
    pub fn save(&self) -> AppResult<()> {
        csv_io::write_records(&self.config.backing_path, &self.records)
    }

    /// Persist `next` and only then make it the in-memory roster, so a
    /// failed write leaves both copies as they were.
    fn commit(&mut self, next: Vec<Record>) -> AppResult<()> {
        csv_io::write_records(&self.config.backing_path, &next)?;
        self.records = next;
        Ok(())
    }

    /// Validate, normalize and append a new record, then persist.
    pub fn add(
        &mut self,
        student_raw: &str,
        date_raw: &str,
        status_raw: &str,
    ) -> AppResult<&Record> {
        let status = self.canonical_status(status_raw)?;
        let date = date::normalize(date_raw)
            .ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;
        if student_raw.trim().is_empty() {
            return Err(AppError::EmptyStudent);
        }

        let mut next = self.records.clone();
        next.push(Record {
            student: capitalize(student_raw),
            date,
            status,
        });
        self.commit(next)?;

        let idx = self.records.len() - 1;
        Ok(&self.records[idx])
    }

    /// Apply `patch` to the record at `index` (1-based).
    ///
    /// A rejected date or status does not abort the edit: it is skipped,
    /// reported in [`EditOutcome::warnings`], and the remaining fields apply.
    pub fn edit(&mut self, index: usize, patch: &RecordPatch) -> AppResult<EditOutcome> {
        let pos = self.position(index)?;

        let mut warnings = Vec::new();
        let mut updated = self.records[pos].clone();

        if let Some(student) = &patch.student {
            updated.student = capitalize(student);
        }

        if let Some(raw) = &patch.date {
            match date::normalize(raw) {
                Some(d) => updated.date = d,
                None => warnings.push(AppError::InvalidDate(raw.clone())),
            }
        }

        if let Some(raw) = &patch.status {
            match self.canonical_status(raw) {
                Ok(s) => updated.status = s,
                Err(e) => warnings.push(e),
            }
        }

        let changed = updated != self.records[pos];
        if changed {
            let mut next = self.records.clone();
            next[pos] = updated.clone();
            self.commit(next)?;
        }

        Ok(EditOutcome {
            record: updated,
            changed,
            warnings,
        })
    }

    /// Remove the record at `index` (1-based) when `confirmed`.
    ///
    /// Returns the removed record, or `None` if the caller cancelled.
    pub fn delete(&mut self, index: usize, confirmed: bool) -> AppResult<Option<Record>> {
        if !self.config.allow_delete {
            return Err(AppError::DeleteDisabled);
        }
        let pos = self.position(index)?;

        if !confirmed {
            return Ok(None);
        }

        let mut next = self.records.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        Ok(Some(removed))
    }

    /// Records paired with their 1-based display index.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Record)> + '_ {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    /// Loaded rows with an empty field or a status outside the configured set.
    /// The store keeps them as read; this only reports them.
    pub fn nonconforming(&self) -> impl Iterator<Item = (usize, &Record)> + '_ {
        self.list().filter(|(_, r)| {
            r.student.trim().is_empty()
                || r.date.trim().is_empty()
                || self.config.canonical_status(&r.status) != Some(r.status.as_str())
        })
    }

    pub fn get(&self, index: usize) -> AppResult<&Record> {
        let pos = self.position(index)?;
        Ok(&self.records[pos])
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn can_delete(&self) -> bool {
        self.config.allow_delete
    }

    /// 1-based index → 0-based position.
    fn position(&self, index: usize) -> AppResult<usize> {
        if index == 0 || index > self.records.len() {
            return Err(AppError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(index - 1)
    }

    fn canonical_status(&self, raw: &str) -> AppResult<String> {
        self.config
            .canonical_status(raw)
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidStatus {
                value: raw.to_string(),
                allowed: self.config.status_hint(),
            })
    }
}

/// Parse a 1-based index typed by the user.
///
/// Anything shaped like an integer (optional sign, ASCII digits) is a
/// number; everything else is `NotANumber`. Zero and negative numbers map
/// to 0 and numbers too large for `usize` map to `usize::MAX`, so the range
/// check rejects both as `IndexOutOfRange`.
pub fn parse_index(raw: &str) -> AppResult<usize> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotANumber(raw.to_string()));
    }

    if negative {
        return Ok(0);
    }
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}
