//! Item identifiers and their allocation.

use core::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::parse::parse_leading_int;

/// Identifier of a catalog item (integer on the wire and on disk).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Lenient parse: the leading integer of the segment (`"12abc"` is 12).
impl FromStr for ItemId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_leading_int(s)
            .map(Self)
            .ok_or_else(|| CatalogError::invalid_id(format!("ItemId: {s:?}")))
    }
}

/// Monotonic id allocator.
///
/// Every issued id is strictly greater than both the highest id in the
/// snapshot it is allocated against and every id previously issued by this
/// generator, so rapid successive creates never collide within a process.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start allocating above `floor`.
    pub fn starting_after(floor: ItemId) -> Self {
        Self {
            last: AtomicI64::new(floor.0),
        }
    }

    /// Allocate the next id above `highest_existing` (the snapshot's maximum).
    pub fn next_after(&self, highest_existing: Option<ItemId>) -> ItemId {
        let floor = highest_existing.map_or(0, |id| id.0);
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let next = current.max(floor).saturating_add(1);
            match self
                .last
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return ItemId(next),
                Err(actual) => current = actual,
            }
        }
    }
}
