use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use super::error::ApiError;

pub trait Record: Clone {
    /// Everything but the id, as supplied by a create or update request.
    type Fields;

    /// Human readable name used in log lines and error messages.
    const KIND: &'static str;

    fn from_fields(id: u64, fields: Self::Fields) -> Self;
    fn id(&self) -> u64;
    /// Replaces every non-id field, clearing the ones `fields` leaves unset.
    fn overwrite(&mut self, fields: Self::Fields);
}

struct CollectionInner<R> {
    records: Vec<R>,
    next_id: u64,
}

/// An ordered, in-memory list of records.
///
/// Ids come from a counter that only ever goes up, so deleting a record never
/// lets a later insert reuse its id.
pub struct Collection<R: Record> {
    inner: Arc<Mutex<CollectionInner<R>>>,
}
impl<R: Record> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Path segments that are not a valid id simply match nothing.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        let inner = CollectionInner {
            records: vec![],
            next_id: 1,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    pub fn list(&self) -> Vec<R> {
        self.inner.lock().records.clone()
    }

    pub fn create(&self, fields: R::Fields) -> R {
        let mut inner = self.inner.lock();

        let id = inner.next_id;
        inner.next_id += 1;

        let record = R::from_fields(id, fields);
        inner.records.push(record.clone());

        info!("created {} `{id}`", R::KIND);
        record
    }

    pub fn get(&self, raw_id: &str) -> Result<R, ApiError> {
        let inner = self.inner.lock();
        let idx = Self::position(&inner.records, raw_id)?;
        Ok(inner.records[idx].clone())
    }

    pub fn update(&self, raw_id: &str, fields: R::Fields) -> Result<R, ApiError> {
        let mut inner = self.inner.lock();
        let idx = Self::position(&inner.records, raw_id)?;

        let record = &mut inner.records[idx];
        record.overwrite(fields);

        info!("updated {} `{}`", R::KIND, record.id());
        Ok(record.clone())
    }

    pub fn delete(&self, raw_id: &str) -> Result<R, ApiError> {
        let mut inner = self.inner.lock();
        let idx = Self::position(&inner.records, raw_id)?;

        let removed = inner.records.remove(idx);

        info!("deleted {} `{}`", R::KIND, removed.id());
        Ok(removed)
    }

    fn position(records: &[R], raw_id: &str) -> Result<usize, ApiError> {
        parse_id(raw_id)
            .and_then(|id| records.iter().position(|r| r.id() == id))
            .ok_or_else(|| {
                debug!("no {} matches `{raw_id}`", R::KIND);
                ApiError::NotFound { kind: R::KIND }
            })
    }
}
