use crate::{StoreError, StoreResult};
use std::fmt;

/// A record an [`EntityStore`] can hold.
///
/// The store owns id assignment: [`Record::fresh_id`] mints a new id and
/// [`Record::build`] combines it with a create-draft into a full record.
pub trait Record: Clone {
    /// Typed identifier for this record kind.
    type Id: Copy + Eq + fmt::Display;
    /// The fields a caller supplies at creation time.
    type Draft;

    /// Mints a new unique id.
    fn fresh_id() -> Self::Id;

    /// Builds a full record from a freshly assigned id and a draft.
    fn build(id: Self::Id, draft: Self::Draft) -> Self;

    /// This record's id.
    fn id(&self) -> Self::Id;
}

/// Generic, insertion-ordered, in-memory collection of records of one kind.
///
/// Every read returns cloned snapshots; callers never hold references into
/// the store, so a later mutation cannot invalidate an earlier read.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> EntityStore<T> {
    /// Returns all records in insertion order.
    #[must_use]
    pub fn find_many(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Returns the records matching `pred`, in insertion order.
    ///
    /// Covers both exact-match and containment lookups: the predicate sees
    /// the whole record.
    pub fn find_where(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|r| pred(r)).cloned().collect()
    }

    /// Returns the first record matching `pred`, if any.
    pub fn find_one(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.records.iter().find(|r| pred(r)).cloned()
    }

    /// Returns the record with the given id, if any.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<T> {
        self.find_one(|r| r.id() == id)
    }

    /// Creates a record from a draft, assigning it a fresh id.
    ///
    /// Appends to the end of the collection; never fails.
    pub fn create(&mut self, draft: T::Draft) -> T {
        let record = T::build(T::fresh_id(), draft);
        self.records.push(record.clone());
        record
    }

    /// Applies `mutate` to the record with the given id and returns the
    /// updated record.
    pub fn change(&mut self, id: T::Id, mutate: impl FnOnce(&mut T)) -> StoreResult<T> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        mutate(record);
        Ok(record.clone())
    }

    /// Removes and returns the record with the given id.
    pub fn delete(&mut self, id: T::Id) -> StoreResult<T> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }
}
