//! Derived views over the store
//!
//! Nothing here is cached: every call walks the current collection, so a view
//! always reflects the latest mutation.

use std::collections::BTreeMap;

use crate::models::{
    enums::LaptopStatus,
    laptop::{Laptop, Problem},
    workflow::Reviewable,
};

/// Requests still awaiting a decision, in store order
pub fn pending_of<'a, T, I>(collection: I) -> Vec<&'a T>
where
    T: Reviewable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    collection
        .into_iter()
        .filter(|entity| entity.status().is_pending())
        .collect()
}

/// Approved or rejected requests, in store order
pub fn processed_of<'a, T, I>(collection: I) -> Vec<&'a T>
where
    T: Reviewable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    collection
        .into_iter()
        .filter(|entity| entity.status().is_processed())
        .collect()
}

pub fn active_problems(laptop: &Laptop) -> Vec<&Problem> {
    laptop.problems.iter().filter(|p| p.is_open()).collect()
}

pub fn resolved_problems(laptop: &Laptop) -> Vec<&Problem> {
    laptop.problems.iter().filter(|p| p.is_resolved()).collect()
}

/// Number of laptops per status; every status is present, possibly with zero
pub fn laptop_status_counts<'a, I>(laptops: I) -> BTreeMap<LaptopStatus, usize>
where
    I: IntoIterator<Item = &'a Laptop>,
{
    let mut counts: BTreeMap<LaptopStatus, usize> =
        LaptopStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    for laptop in laptops {
        *counts.entry(laptop.status).or_insert(0) += 1;
    }
    counts
}
