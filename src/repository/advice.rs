//! Advice requests repository

use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::advice::Advice;

#[derive(Debug, Clone, Default)]
pub struct AdviceRepository {
    rows: IndexMap<Uuid, Advice>,
}

impl AdviceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All advice requests, newest first
    pub fn list(&self) -> impl Iterator<Item = &Advice> {
        self.rows.values()
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&Advice> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Advice> {
        self.rows.get_mut(&id)
    }

    /// Insert at the front so the collection stays newest first
    pub fn insert(&mut self, advice: Advice) {
        self.rows.shift_insert(0, advice.id, advice);
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }
}
