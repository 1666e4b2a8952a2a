//! The catalog store.
//!
//! Records are kept in insertion order. When backed by a [`CatalogFile`],
//! every successful mutation rewrites the file; a failed write rolls the
//! in-memory change back, so a failed operation never changes the store.

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;
use syl_core::entities::LessonScript;
use syl_core::enums::CompletionState;
use syl_core::errors::CoreError;
use syl_core::responses::TopicCount;

use crate::error::CatalogError;
use crate::index::CatalogIndex;
use crate::persist::CatalogFile;
use crate::update::LessonUpdate;

/// Lazy iterator over catalog records. Clone it, or call
/// [`CatalogStore::list`] again, to restart.
pub type Lessons<'a> = std::slice::Iter<'a, LessonScript>;

#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<LessonScript>,
    positions: HashMap<String, usize>,
    index: CatalogIndex,
    file: Option<CatalogFile>,
}

impl CatalogStore {
    /// A store that is never persisted.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the catalog at `path`, creating nothing until the first mutation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MalformedRecord` if the file is corrupt and
    /// `CatalogError::Io` if it cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = CatalogFile::new(path.as_ref());
        let records = file.load()?;
        let mut store = Self {
            records,
            file: Some(file),
            ..Self::default()
        };
        store.reindex();
        Ok(store)
    }

    /// Backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(CatalogFile::path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateId` if the id exists, `CoreError::Validation`
    /// for a record with empty required fields, or a persistence error.
    pub fn add(&mut self, record: LessonScript) -> Result<&LessonScript, CatalogError> {
        record.validate()?;
        if self.contains(&record.id) {
            return Err(CoreError::DuplicateId { id: record.id }.into());
        }

        self.records.push(record);
        if let Err(error) = self.persist() {
            self.records.pop();
            return Err(error);
        }

        self.reindex();
        let pos = self.records.len() - 1;
        tracing::debug!(id = %self.records[pos].id, "lesson script added");
        Ok(&self.records[pos])
    }

    /// Look up a record by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this id.
    pub fn get(&self, id: &str) -> Result<&LessonScript, CatalogError> {
        self.positions
            .get(id)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() }.into())
    }

    /// Apply a partial update to an existing record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this id,
    /// `CoreError::Validation` for an invalid update, or a persistence error.
    pub fn update(&mut self, id: &str, update: &LessonUpdate) -> Result<&LessonScript, CatalogError> {
        let pos = *self
            .positions
            .get(id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        update.validate()?;

        let previous = self.records[pos].clone();
        update.apply(&mut self.records[pos], Utc::now());
        if let Err(error) = self.persist() {
            self.records[pos] = previous;
            return Err(error);
        }

        self.reindex();
        tracing::debug!(%id, ?update, "lesson script updated");
        Ok(&self.records[pos])
    }

    /// All records in catalog order.
    #[must_use]
    pub fn list(&self) -> Lessons<'_> {
        self.records.iter()
    }

    /// Records whose topic matches, ignoring case.
    #[must_use]
    pub fn by_topic(&self, topic: &str) -> Vec<&LessonScript> {
        self.resolve(self.index.topic(topic))
    }

    #[must_use]
    pub fn by_state(&self, state: CompletionState) -> Vec<&LessonScript> {
        self.resolve(self.index.state(state))
    }

    /// Records whose origin model matches, ignoring case.
    #[must_use]
    pub fn by_model(&self, model: &str) -> Vec<&LessonScript> {
        self.resolve(self.index.model(model))
    }

    /// Distinct topics with record counts.
    #[must_use]
    pub fn topics(&self) -> Vec<TopicCount> {
        self.index.topics(&self.records)
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&LessonScript> {
        positions.iter().filter_map(|&pos| self.records.get(pos)).collect()
    }

    fn persist(&self) -> Result<(), CatalogError> {
        match &self.file {
            Some(file) => file.save(&self.records),
            None => Ok(()),
        }
    }

    fn reindex(&mut self) {
        self.positions = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id.clone(), pos))
            .collect();
        self.index = CatalogIndex::build(&self.records);
    }
}
