//! Laptops repository

use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::laptop::Laptop;

#[derive(Debug, Clone, Default)]
pub struct LaptopsRepository {
    rows: IndexMap<Uuid, Laptop>,
}

impl LaptopsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All laptops in creation order
    pub fn list(&self) -> impl Iterator<Item = &Laptop> {
        self.rows.values()
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&Laptop> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Laptop> {
        self.rows.get_mut(&id)
    }

    /// Append a laptop at the end of the collection
    pub fn insert(&mut self, laptop: Laptop) {
        self.rows.insert(laptop.id, laptop);
    }

    /// Replace the stored record with the same id, keeping its position.
    /// Returns false when no such record exists.
    pub fn replace(&mut self, laptop: Laptop) -> bool {
        match self.rows.get_mut(&laptop.id) {
            Some(slot) => {
                *slot = laptop;
                true
            }
            None => false,
        }
    }

    /// Remove a laptop, keeping the order of the others
    pub fn delete(&mut self, id: Uuid) -> Option<Laptop> {
        self.rows.shift_remove(&id)
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }
}
