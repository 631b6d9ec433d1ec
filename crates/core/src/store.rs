//! Ordered, in-memory record store.
//!
//! Records keep insertion order. Keyed operations scan from the front and act on
//! the first record whose [`Entity::id`] matches, so duplicate keys are allowed
//! and only ever shadowed, never merged.

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// Sequential container of entities with linear-scan lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<E> {
    records: Vec<E>,
}

impl<E> Default for RecordStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RecordStore<E> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<E>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn as_slice(&self) -> &[E] {
        &self.records
    }

    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.records.iter()
    }

    /// Append a record at the end. Never fails.
    pub fn push(&mut self, record: E) {
        self.records.push(record);
    }

    /// Every record accepted by `predicate`, in store order.
    pub fn filter<F>(&self, mut predicate: F) -> Vec<&E>
    where
        F: FnMut(&E) -> bool,
    {
        self.records.iter().filter(|&r| predicate(r)).collect()
    }
}

impl<E: Entity> RecordStore<E> {
    fn position(&self, id: &E::Id) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// First record carrying `id`.
    pub fn find(&self, id: &E::Id) -> Option<&E> {
        self.position(id).map(|i| &self.records[i])
    }

    /// Replace the first record carrying `id` wholesale, returning the old one.
    pub fn replace_first(&mut self, id: &E::Id, record: E) -> DomainResult<E> {
        let index = self.position(id).ok_or_else(DomainError::not_found)?;
        tracing::trace!(index, "replacing record");
        Ok(core::mem::replace(&mut self.records[index], record))
    }

    /// Remove the first record carrying `id`; later duplicates stay in place.
    pub fn remove_first(&mut self, id: &E::Id) -> DomainResult<E> {
        let index = self.position(id).ok_or_else(DomainError::not_found)?;
        tracing::trace!(index, "removing record");
        Ok(self.records.remove(index))
    }
}

impl<'a, E> IntoIterator for &'a RecordStore<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
