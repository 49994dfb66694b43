//! Persistent storage for the medication catalog and the user's tracked list.
//!
//! Both tables are JSON arrays of flat row objects in the data directory.
//! The catalog is read-only reference data; the tracked list is the sole
//! mutable table and is rewritten to disk in full after every change.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::model::{DosingCondition, MedicationRecord, TrackedMedication};
use super::reminder::ReminderTime;

/// Catalog table file name within the data directory.
pub const CATALOG_FILE: &str = "catalog.json";
/// Tracked-list table file name within the data directory.
pub const TRACKED_FILE: &str = "tracked.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("medication catalog not found at {0}")]
    CatalogMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed table: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of an add attempt. A duplicate is a user-facing warning, not an
/// error; the list is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    Duplicate,
}

/// Outcome of a remove attempt. Removing an untracked name is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveOutcome {
    Removed,
    NotTracked,
}

/// Outcome of a reminder edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated,
    NotTracked,
}

/// The two in-memory tables plus their backing files.
pub struct MedStore {
    data_dir: PathBuf,
    catalog: Vec<MedicationRecord>,
    tracked: Vec<TrackedMedication>,
}

impl MedStore {
    /// Load both tables from `data_dir`.
    ///
    /// The catalog is required: a missing or malformed file is an error the
    /// caller treats as fatal. A missing tracked-list file yields an empty
    /// list; a malformed one is replaced by an empty list with a warning.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();

        let catalog_path = data_dir.join(CATALOG_FILE);
        if !catalog_path.exists() {
            return Err(StoreError::CatalogMissing(catalog_path));
        }
        let content = fs::read_to_string(&catalog_path)?;
        let catalog: Vec<MedicationRecord> = serde_json::from_str(&content)?;

        let tracked_path = data_dir.join(TRACKED_FILE);
        let tracked = if tracked_path.exists() {
            let content = fs::read_to_string(&tracked_path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!(
                    "Tracked list at {:?} is malformed ({}), starting empty",
                    tracked_path,
                    e
                );
                Vec::new()
            })
        } else {
            Vec::new()
        };

        Ok(Self {
            data_dir,
            catalog,
            tracked,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog(&self) -> &[MedicationRecord] {
        &self.catalog
    }

    pub fn tracked(&self) -> &[TrackedMedication] {
        &self.tracked
    }

    /// Exact-name lookup in the catalog (the selection step after a search).
    pub fn find_catalog(&self, product_name: &str) -> Option<&MedicationRecord> {
        self.catalog.iter().find(|r| r.product_name == product_name)
    }

    pub fn find_tracked(&self, product_name: &str) -> Option<&TrackedMedication> {
        self.tracked.iter().find(|t| t.product_name() == product_name)
    }

    pub fn is_tracked(&self, product_name: &str) -> bool {
        self.find_tracked(product_name).is_some()
    }

    /// Add a catalog record to the tracked list and persist.
    ///
    /// Product names are unique within the tracked list; an existing name is
    /// rejected before insert and nothing is written.
    pub fn add(
        &mut self,
        record: MedicationRecord,
        reminder: ReminderTime,
        condition: DosingCondition,
    ) -> Result<AddOutcome, StoreError> {
        if self.is_tracked(&record.product_name) {
            return Ok(AddOutcome::Duplicate);
        }

        self.tracked
            .push(TrackedMedication::new(record, reminder, condition));
        self.persist()?;
        Ok(AddOutcome::Added)
    }

    /// Change the reminder time and dosing condition of a tracked product,
    /// then persist. Untracked names leave the table and the file untouched.
    pub fn set_reminder(
        &mut self,
        product_name: &str,
        reminder: ReminderTime,
        condition: DosingCondition,
    ) -> Result<UpdateOutcome, StoreError> {
        match self
            .tracked
            .iter_mut()
            .find(|t| t.product_name() == product_name)
        {
            Some(entry) => {
                entry.reminder = reminder;
                entry.condition = condition;
            }
            None => return Ok(UpdateOutcome::NotTracked),
        }

        self.persist()?;
        Ok(UpdateOutcome::Updated)
    }

    /// Remove a product from the tracked list and persist. Unknown names are
    /// a no-op: no error, no row removed, no write.
    pub fn remove(&mut self, product_name: &str) -> Result<RemoveOutcome, StoreError> {
        let before = self.tracked.len();
        self.tracked.retain(|t| t.product_name() != product_name);
        if self.tracked.len() == before {
            return Ok(RemoveOutcome::NotTracked);
        }

        self.persist()?;
        Ok(RemoveOutcome::Removed)
    }

    /// Path of the tracked-list file.
    pub fn tracked_path(&self) -> PathBuf {
        self.data_dir.join(TRACKED_FILE)
    }

    /// Overwrite the tracked-list file with the entire current table.
    fn persist(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let content = serde_json::to_string_pretty(&self.tracked)?;
        fs::write(self.tracked_path(), content)?;
        Ok(())
    }
}
