//! Room resize and re-flow of everything attached to it.
//!
//! Resizing floors each axis at [`MIN_ROOM_SIDE`]. Wall-feature footprints
//! are derived from the room size, so features on the bottom and right walls
//! follow the moved far edge without being touched; what re-flow does change
//! is a feature's position (and, on a very short wall, its size) so the
//! feature never runs past the end of its wall.
//!
//! Furniture is left alone unless the re-clamp policy is on. Either way the
//! report lists every item that still sits outside the new boundary.

#[cfg(test)]
#[path = "reflow_test.rs"]
mod reflow_test;

use tracing::{info, warn};

use crate::collision::would_overlap;
use crate::consts::{MIN_FEATURE_SIZE, MIN_ROOM_SIDE};
use crate::geometry::{OrientedBox, clamp_center};
use crate::model::{EntityId, FeaturePatch, FurniturePatch, LayoutStore, Room, WallFeature};
use crate::view::Point;

/// Re-flow policy switches, taken from the engine config.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflowPolicy {
    pub reclamp_furniture: bool,
    pub collision_gating: bool,
}

/// Everything a room resize changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReflowReport {
    /// The room after flooring.
    pub room: Room,
    pub moved_features: Vec<(EntityId, FeaturePatch)>,
    pub moved_furniture: Vec<(EntityId, FurniturePatch)>,
    /// Furniture whose footprint still leaves the room.
    pub out_of_bounds: Vec<EntityId>,
}

/// Floor both room dimensions at [`MIN_ROOM_SIDE`].
#[must_use]
pub fn clamp_room(width: f64, height: f64) -> Room {
    Room::new(width.max(MIN_ROOM_SIDE), height.max(MIN_ROOM_SIDE))
}

/// The patch that brings `feature` back inside a wall of length `wall_len`,
/// or `None` if it already fits.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn clamp_feature(feature: &WallFeature, wall_len: f64) -> Option<FeaturePatch> {
    let size = feature.size.min(wall_len).max(MIN_FEATURE_SIZE.min(wall_len));
    let position = feature.position.min(wall_len - size).max(0.0);

    let mut patch = FeaturePatch::default();
    if size != feature.size {
        patch.size = Some(size);
    }
    if position != feature.position {
        patch.position = Some(position);
    }
    (patch != FeaturePatch::default()).then_some(patch)
}

/// Resize the room to `width × height` (floored) and re-flow its contents.
pub fn resize_room(store: &mut LayoutStore, width: f64, height: f64, policy: ReflowPolicy) -> ReflowReport {
    let room = clamp_room(width, height);
    store.room = room;

    let mut report = ReflowReport { room, ..Default::default() };

    for feature in store.features_mut() {
        let wall_len = feature.wall.length(&room);
        if let Some(patch) = clamp_feature(feature, wall_len) {
            if let Some(p) = patch.position {
                feature.position = p;
            }
            if let Some(s) = patch.size {
                feature.size = s;
            }
            report.moved_features.push((feature.id, patch));
        }
    }
    report.moved_features.sort_by(|a, b| a.0.cmp(&b.0));

    if policy.reclamp_furniture {
        reclamp_furniture(store, policy.collision_gating, &mut report);
    }

    report.out_of_bounds = store
        .sorted_furniture()
        .into_iter()
        .filter(|f| !f.bounds().is_within(room.width, room.height))
        .map(|f| f.id)
        .collect();

    info!(
        width = room.width,
        height = room.height,
        features_moved = report.moved_features.len(),
        furniture_moved = report.moved_furniture.len(),
        "room resized"
    );
    if !report.out_of_bounds.is_empty() {
        warn!(count = report.out_of_bounds.len(), "furniture outside room after resize");
    }

    report
}

/// Pull each out-of-bounds item's center back inside the room. A pulled
/// item that would land on another is left where it was.
fn reclamp_furniture(store: &mut LayoutStore, collision_gating: bool, report: &mut ReflowReport) {
    let room = store.room;
    let candidates: Vec<(EntityId, OrientedBox)> = store
        .sorted_furniture()
        .into_iter()
        .filter(|f| !f.bounds().is_within(room.width, room.height))
        .map(|f| {
            let b = f.bounds();
            let (hw, hh) = b.half_extents();
            let c = b.center();
            let center = Point::new(clamp_center(c.x, hw, room.width), clamp_center(c.y, hh, room.height));
            (f.id, OrientedBox::from_center(center, b.width, b.height, b.rotation))
        })
        .collect();

    for (id, candidate) in candidates {
        if collision_gating && would_overlap(store, &id, &candidate) {
            continue;
        }
        let patch = FurniturePatch::position(candidate.x, candidate.y);
        store.apply_furniture_patch(&id, &patch);
        report.moved_furniture.push((id, patch));
    }
}
