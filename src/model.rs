//! Entity model: the room, furniture, wall features, and the in-memory store.
//!
//! This module defines the records the engine manipulates (`Room`,
//! `Furniture`, `WallFeature`), sparse-update types for incremental edits
//! (`FurniturePatch`, `FeaturePatch`), and the session store that owns every
//! live entity (`LayoutStore`).
//!
//! Entities reference the room only through its coordinate space: every
//! position is room-local with the origin at the top-left corner. Wall-feature
//! footprints are derived from the current room size on demand, so features on
//! the bottom and right walls follow those walls when the room is resized.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::FEATURE_THICKNESS;
use crate::geometry::OrientedBox;
use crate::view::Point;

/// Unique identifier for a furniture item or wall feature.
pub type EntityId = Uuid;

/// The rectangular room boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f64,
    pub height: f64,
}

impl Room {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

/// One of the four walls of the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Left, Wall::Right];

    /// Whether the wall runs along the x axis.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Length of the wall's long axis.
    #[must_use]
    pub fn length(self, room: &Room) -> f64 {
        if self.is_horizontal() { room.width } else { room.height }
    }

    /// Coordinate of `p` measured along this wall's long axis.
    #[must_use]
    pub fn along(self, p: Point) -> f64 {
        if self.is_horizontal() { p.x } else { p.y }
    }

    /// Perpendicular distance from `p` to this wall.
    #[must_use]
    pub fn distance(self, room: &Room, p: Point) -> f64 {
        match self {
            Self::Top => p.y.abs(),
            Self::Bottom => (room.height - p.y).abs(),
            Self::Left => p.x.abs(),
            Self::Right => (room.width - p.x).abs(),
        }
    }

    /// The wall closest to `p`. Ties resolve in [`Wall::ALL`] order.
    #[must_use]
    pub fn nearest(room: &Room, p: Point) -> Wall {
        Self::ALL
            .into_iter()
            .min_by(|a, b| a.distance(room, p).total_cmp(&b.distance(room, p)))
            .unwrap_or(Wall::Top)
    }
}

/// Whether a wall feature is a door or a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Door,
    Window,
}

/// What kind of entity an id refers to, as reported to the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Furniture,
    Door,
    Window,
}

impl From<FeatureKind> for EntityKind {
    fn from(kind: FeatureKind) -> Self {
        match kind {
            FeatureKind::Door => Self::Door,
            FeatureKind::Window => Self::Window,
        }
    }
}

/// A furniture item placed in the room.
#[derive(Debug, Clone, PartialEq)]
pub struct Furniture {
    /// Unique identifier for this item.
    pub id: EntityId,
    /// Catalog template this item was created from.
    pub template_name: String,
    /// Left edge of the unrotated rectangle, room-local.
    pub x: f64,
    /// Top edge of the unrotated rectangle, room-local.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees around the rectangle's center.
    pub rotation: f64,
    /// Physical height of the item above the floor.
    pub elevation: f64,
    /// Stacking order for drawing; lower values are drawn beneath higher values.
    pub z_index: i64,
}

impl Furniture {
    /// The item's oriented footprint.
    #[must_use]
    pub fn bounds(&self) -> OrientedBox {
        OrientedBox::new(self.x, self.y, self.width, self.height, self.rotation)
    }

    /// Human-readable size, e.g. `"120 × 60"`.
    #[must_use]
    pub fn dimension_label(&self) -> String {
        format!("{:.0} × {:.0}", self.width, self.height)
    }
}

/// A door or window attached to one wall.
#[derive(Debug, Clone, PartialEq)]
pub struct WallFeature {
    pub id: EntityId,
    pub kind: FeatureKind,
    pub wall: Wall,
    /// Offset of the feature's start from the wall's origin (top or left end).
    pub position: f64,
    /// Extent of the opening along the wall.
    pub size: f64,
    pub opening_height: f64,
    /// Height of a window's lower edge above the floor. `None` for doors.
    pub sill_height: Option<f64>,
}

impl WallFeature {
    /// Position of the feature's far end along the wall.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.position + self.size
    }

    /// The thin rectangle the feature occupies inside the room.
    #[must_use]
    pub fn footprint(&self, room: &Room) -> OrientedBox {
        let t = FEATURE_THICKNESS;
        match self.wall {
            Wall::Top => OrientedBox::new(self.position, 0.0, self.size, t, 0.0),
            Wall::Bottom => OrientedBox::new(self.position, room.height - t, self.size, t, 0.0),
            Wall::Left => OrientedBox::new(0.0, self.position, t, self.size, 0.0),
            Wall::Right => OrientedBox::new(room.width - t, self.position, t, self.size, 0.0),
        }
    }
}

/// Sparse update for a furniture item. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FurniturePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl FurniturePatch {
    /// Patch that moves an item to a new top-left corner.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    /// Patch carrying every geometric field of `b`.
    #[must_use]
    pub fn from_box(b: &OrientedBox) -> Self {
        Self {
            x: Some(b.x),
            y: Some(b.y),
            width: Some(b.width),
            height: Some(b.height),
            rotation: Some(b.rotation),
        }
    }
}

/// Sparse update for a wall feature. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// In-memory store of the room and everything placed in it.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    pub room: Room,
    furniture: HashMap<EntityId, Furniture>,
    features: HashMap<EntityId, WallFeature>,
    next_z: i64,
}

impl LayoutStore {
    /// Create an empty store for `room`.
    #[must_use]
    pub fn new(room: Room) -> Self {
        Self { room, furniture: HashMap::new(), features: HashMap::new(), next_z: 0 }
    }

    /// Next stacking index; each call returns a higher value.
    pub fn next_z_index(&mut self) -> i64 {
        self.next_z += 1;
        self.next_z
    }

    /// Insert or replace a furniture item.
    pub fn insert_furniture(&mut self, item: Furniture) {
        self.next_z = self.next_z.max(item.z_index);
        self.furniture.insert(item.id, item);
    }

    /// Insert or replace a wall feature.
    pub fn insert_feature(&mut self, feature: WallFeature) {
        self.features.insert(feature.id, feature);
    }

    pub fn remove_furniture(&mut self, id: &EntityId) -> Option<Furniture> {
        self.furniture.remove(id)
    }

    pub fn remove_feature(&mut self, id: &EntityId) -> Option<WallFeature> {
        self.features.remove(id)
    }

    #[must_use]
    pub fn furniture(&self, id: &EntityId) -> Option<&Furniture> {
        self.furniture.get(id)
    }

    #[must_use]
    pub fn feature(&self, id: &EntityId) -> Option<&WallFeature> {
        self.features.get(id)
    }

    /// What kind of entity `id` refers to, if it exists.
    #[must_use]
    pub fn kind_of(&self, id: &EntityId) -> Option<EntityKind> {
        if self.furniture.contains_key(id) {
            return Some(EntityKind::Furniture);
        }
        self.features.get(id).map(|f| f.kind.into())
    }

    /// Apply a partial update to a furniture item. Returns false if it doesn't exist.
    pub fn apply_furniture_patch(&mut self, id: &EntityId, patch: &FurniturePatch) -> bool {
        let Some(item) = self.furniture.get_mut(id) else {
            return false;
        };
        if let Some(x) = patch.x {
            item.x = x;
        }
        if let Some(y) = patch.y {
            item.y = y;
        }
        if let Some(w) = patch.width {
            item.width = w;
        }
        if let Some(h) = patch.height {
            item.height = h;
        }
        if let Some(r) = patch.rotation {
            item.rotation = r;
        }
        true
    }

    /// Apply a partial update to a wall feature. Returns false if it doesn't exist.
    pub fn apply_feature_patch(&mut self, id: &EntityId, patch: &FeaturePatch) -> bool {
        let Some(feature) = self.features.get_mut(id) else {
            return false;
        };
        if let Some(p) = patch.position {
            feature.position = p;
        }
        if let Some(s) = patch.size {
            feature.size = s;
        }
        true
    }

    /// Remove every furniture item, returning the removed ids.
    pub fn clear_furniture(&mut self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.furniture.drain().map(|(id, _)| id).collect();
        ids.sort();
        ids
    }

    /// All furniture sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted_furniture(&self) -> Vec<&Furniture> {
        let mut items: Vec<&Furniture> = self.furniture.values().collect();
        items.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// All wall features sorted by `(wall, position, id)`.
    #[must_use]
    pub fn sorted_features(&self) -> Vec<&WallFeature> {
        let mut features: Vec<&WallFeature> = self.features.values().collect();
        features.sort_by(|a, b| {
            a.wall
                .cmp(&b.wall)
                .then_with(|| a.position.total_cmp(&b.position))
                .then_with(|| a.id.cmp(&b.id))
        });
        features
    }

    /// Iterate furniture in arbitrary order.
    pub fn furniture_iter(&self) -> impl Iterator<Item = &Furniture> {
        self.furniture.values()
    }

    /// Mutable access to every wall feature in arbitrary order.
    pub fn features_mut(&mut self) -> impl Iterator<Item = &mut WallFeature> {
        self.features.values_mut()
    }

    /// Number of furniture items.
    #[must_use]
    pub fn furniture_count(&self) -> usize {
        self.furniture.len()
    }

    /// Number of doors and windows.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if nothing is placed in the room.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.furniture.is_empty() && self.features.is_empty()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(Room::default())
    }
}
