//! CatalogStore - file-backed catalog with a minimal CRUD surface.
//!
//! The whole catalog is loaded into memory at construction and rewritten
//! to the backing file on every mutation. Fine for small catalogs; the
//! whole-file rewrite is the scalability ceiling.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_store::{CatalogStore, Fields};
//!
//! let mut store = CatalogStore::new("catalog.json");
//! let record = store.add(fields)?;
//! let found = store.get_by_id(record.id().unwrap())?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::CatalogError;
use crate::record::{Fields, Record};

/// File-backed catalog of records.
///
/// Single-threaded by design: no locks are taken, no file handle is held
/// between operations, and two stores over the same backing file are not
/// coordinated.
pub struct CatalogStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl CatalogStore {
    /// Open the catalog at `path`, creating the file (as an empty list)
    /// if it does not exist.
    ///
    /// Construction never fails: an unreadable or unparseable backing
    /// file is logged and the catalog starts empty. The file is left
    /// untouched until the next successful mutation overwrites it, so a
    /// corrupt catalog is lost on the first save after a failed load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = Self::load(&path);
        CatalogStore { path, records }
    }

    fn load(path: &Path) -> Vec<Record> {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(data) => match serde_json::from_str(&data) {
                    Ok(records) => records,
                    Err(err) => {
                        warn!(path = %path.display(), %err, "failed to parse catalog file, starting empty");
                        Vec::new()
                    }
                },
                Err(err) => {
                    warn!(path = %path.display(), %err, "failed to read catalog file, starting empty");
                    Vec::new()
                }
            }
        } else {
            if let Err(err) = fs::write(path, "[]") {
                warn!(path = %path.display(), %err, "failed to initialize catalog file");
            }
            Vec::new()
        }
    }

    /// Rewrite the whole catalog to the backing file, pretty-printed.
    fn save(&self) -> Result<(), CatalogError> {
        let data = serde_json::to_string_pretty(&self.records)
            .map_err(|err| CatalogError::Serde(err.to_string()))?;
        fs::write(&self.path, data).map_err(|err| CatalogError::Storage(err.to_string()))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, in insertion order.
    ///
    /// Deletion removes elements in place, so the order of the survivors
    /// is undisturbed.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// First record whose `id` field matches.
    pub fn get_by_id(&self, id: i64) -> Result<&Record, CatalogError> {
        self.records
            .iter()
            .find(|record| record.id() == Some(id))
            .ok_or(CatalogError::NotFound { id })
    }

    /// Append a record built from `fields`, assigning the next id, and
    /// persist the catalog.
    ///
    /// The id is the last record's id plus one (1 for an empty catalog),
    /// not a max over the catalog: delete the last record and the next
    /// add reuses its id. Any `id` the caller supplied is overwritten.
    pub fn add(&mut self, fields: Fields) -> Result<Record, CatalogError> {
        let mut record = Record::from_fields(fields);
        record.set_id(self.next_id());
        self.records.push(record.clone());
        self.save()?;
        Ok(record)
    }

    /// Overlay `partial` onto the record with the given id and persist
    /// the catalog.
    ///
    /// Partial fields win on every key collision, `id` included — a
    /// caller can change a record's id this way; that is accepted, not
    /// guarded against. The record's position in the catalog is
    /// preserved.
    pub fn update(&mut self, id: i64, partial: Fields) -> Result<Record, CatalogError> {
        let index = self.position(id)?;
        let mut merged = self.records[index].clone();
        merged.overlay(partial);
        self.records[index] = merged.clone();
        self.save()?;
        Ok(merged)
    }

    /// Remove and return the record with the given id, persisting the
    /// catalog. Remaining records keep their relative order.
    pub fn delete(&mut self, id: i64) -> Result<Record, CatalogError> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        self.save()?;
        Ok(removed)
    }

    fn next_id(&self) -> i64 {
        match self.records.last() {
            Some(last) => last.id().unwrap_or(0) + 1,
            None => 1,
        }
    }

    fn position(&self, id: i64) -> Result<usize, CatalogError> {
        self.records
            .iter()
            .position(|record| record.id() == Some(id))
            .ok_or(CatalogError::NotFound { id })
    }
}
