//! Collision gate and whole-layout validation.
//!
//! The gate answers one question: would this candidate box for one furniture
//! item overlap any *other* item's committed box? Wall features never block
//! furniture and are not consulted. Callers apply a candidate only when the
//! answer is no; a rejection is a normal result, not an error.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::geometry::{OrientedBox, overlaps};
use crate::model::{EntityId, LayoutStore};

/// First other furniture item (in draw order) that `candidate` would overlap.
#[must_use]
pub fn colliding_with(store: &LayoutStore, moving: &EntityId, candidate: &OrientedBox) -> Option<EntityId> {
    store
        .sorted_furniture()
        .into_iter()
        .filter(|other| other.id != *moving)
        .find(|other| overlaps(candidate, &other.bounds()))
        .map(|other| other.id)
}

/// Whether `candidate` for `moving` would overlap any other furniture item.
#[must_use]
pub fn would_overlap(store: &LayoutStore, moving: &EntityId, candidate: &OrientedBox) -> bool {
    colliding_with(store, moving, candidate).is_some()
}

/// Result of validating every committed furniture item at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutCheck {
    /// Each overlapping pair once, in draw order.
    pub overlapping: Vec<(EntityId, EntityId)>,
    /// Items whose rotated footprint leaves the room.
    pub out_of_bounds: Vec<EntityId>,
}

impl LayoutCheck {
    /// Whether both invariants hold.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.overlapping.is_empty() && self.out_of_bounds.is_empty()
    }
}

/// Validate the no-overlap and containment invariants across the whole layout.
///
/// Loaded documents are not re-validated, so this is how a host finds out
/// whether a file it just opened breaks either invariant.
#[must_use]
pub fn check_layout(store: &LayoutStore) -> LayoutCheck {
    let items = store.sorted_furniture();
    let boxes: Vec<OrientedBox> = items.iter().map(|f| f.bounds()).collect();

    let mut check = LayoutCheck::default();
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            if overlaps(&boxes[i], &boxes[j]) {
                check.overlapping.push((a.id, b.id));
            }
        }
        if !boxes[i].is_within(store.room.width, store.room.height) {
            check.out_of_bounds.push(a.id);
        }
    }
    check
}
