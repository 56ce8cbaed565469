#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{FEATURE_EDGE_BAND, HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::model::{EntityId, Furniture, LayoutStore, WallFeature};
use crate::view::{Point, View};

/// Which part of an entity was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// Furniture body: drag.
    Body,
    /// Bottom-right corner handle of the selected furniture: resize.
    ResizeHandle,
    /// Handle above the selected furniture's top edge: rotate.
    RotateHandle,
    /// Middle of a wall feature: slide along the wall.
    FeatureBody,
    /// One end of a wall feature: resize from that end.
    FeatureEdge(FeatureEnd),
}

/// Which end of a wall feature, along the wall's long axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureEnd {
    /// The end nearer the wall's origin (top or left).
    Start,
    /// The far end.
    End,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: EntityId,
    pub part: HitPart,
}

/// Test which entity (if any) is under `room_pt`.
///
/// Order: the selected furniture's handles, then wall features, then
/// furniture bodies from the top of the stack down. When `only` is set, every
/// other entity is ignored.
#[must_use]
pub fn hit_test(
    room_pt: Point,
    store: &LayoutStore,
    view: &View,
    selected: Option<EntityId>,
    only: Option<EntityId>,
) -> Option<Hit> {
    let allowed = |id: &EntityId| only.is_none_or(|o| o == *id);

    if let Some(item) = selected.filter(allowed).and_then(|id| store.furniture(&id)) {
        if let Some(part) = handle_at(item, room_pt, view) {
            return Some(Hit { id: item.id, part });
        }
    }

    for feature in store.sorted_features().into_iter().rev().filter(|f| allowed(&f.id)) {
        if let Some(part) = feature_part_at(feature, store, room_pt) {
            return Some(Hit { id: feature.id, part });
        }
    }

    store
        .sorted_furniture()
        .into_iter()
        .rev()
        .filter(|f| allowed(&f.id))
        .find(|f| f.bounds().contains_point(room_pt))
        .map(|f| Hit { id: f.id, part: HitPart::Body })
}

/// Local-frame positions of the resize and rotate handles for `item`.
#[must_use]
pub fn handle_positions(item: &Furniture, view: &View) -> (Point, Point) {
    let offset = view.screen_dist_to_room(ROTATE_HANDLE_OFFSET_PX);
    (
        Point::new(item.width / 2.0, item.height / 2.0),
        Point::new(0.0, -item.height / 2.0 - offset),
    )
}

fn handle_at(item: &Furniture, room_pt: Point, view: &View) -> Option<HitPart> {
    let radius = view.screen_dist_to_room(HANDLE_RADIUS_PX);
    let local = item.bounds().to_local(room_pt);
    let (resize, rotate) = handle_positions(item, view);
    let near = |h: Point| (local.x - h.x).hypot(local.y - h.y) <= radius;
    if near(rotate) {
        Some(HitPart::RotateHandle)
    } else if near(resize) {
        Some(HitPart::ResizeHandle)
    } else {
        None
    }
}

fn feature_part_at(feature: &WallFeature, store: &LayoutStore, room_pt: Point) -> Option<HitPart> {
    if !feature.footprint(&store.room).contains_point(room_pt) {
        return None;
    }
    let along = feature.wall.along(room_pt);
    if along - feature.position <= FEATURE_EDGE_BAND {
        Some(HitPart::FeatureEdge(FeatureEnd::Start))
    } else if feature.end() - along <= FEATURE_EDGE_BAND {
        Some(HitPart::FeatureEdge(FeatureEnd::End))
    } else {
        Some(HitPart::FeatureBody)
    }
}
