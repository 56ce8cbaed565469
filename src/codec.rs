//! Layout document: the persisted/exported shape of a room layout.
//!
//! ```text
//! {
//!   "room": { "width": 800, "height": 600 },
//!   "furniture": [ { "name": "sofa", "x": 10, "y": 20, "width": 200,
//!                    "height": 90, "zHeight": 85, "rotation": 0 } ],
//!   "openings": [ { "type": "window", "wall": "right", "position": 300,
//!                   "size": 120, "openingHeight": 120, "heightFromGround": 90 } ]
//! }
//! ```
//!
//! Decoding builds a complete new store (room first, then openings, then
//! furniture) before anything is handed back, so a broken document never
//! half-replaces the current session. Furniture whose template name the
//! catalog does not know is skipped. Overlap is not re-checked.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::consts::DEFAULT_WINDOW_SILL_HEIGHT;
use crate::error::LayoutError;
use crate::model::{FeatureKind, Furniture, LayoutStore, Room, Wall, WallFeature};
use crate::reflow::clamp_feature;

/// Top-level layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub room: Room,
    #[serde(default)]
    pub furniture: Vec<FurnitureRecord>,
    #[serde(default)]
    pub openings: Vec<OpeningRecord>,
}

/// One furniture item as stored in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureRecord {
    /// Catalog template name.
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Falls back to the template's height when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_height: Option<f64>,
    #[serde(default)]
    pub rotation: f64,
}

/// One door or window as stored in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningRecord {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub wall: Wall,
    pub position: f64,
    pub size: f64,
    pub opening_height: f64,
    /// Window sill height; doors omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_from_ground: Option<f64>,
}

/// What a decode produced besides the store itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub furniture: usize,
    pub openings: usize,
    /// Template names that were not in the catalog, one per skipped record.
    pub skipped: Vec<String>,
}

/// Snapshot the store as a document, furniture in draw order.
#[must_use]
pub fn encode(store: &LayoutStore) -> LayoutDocument {
    LayoutDocument {
        room: store.room,
        furniture: store
            .sorted_furniture()
            .into_iter()
            .map(|f| FurnitureRecord {
                name: f.template_name.clone(),
                x: f.x,
                y: f.y,
                width: f.width,
                height: f.height,
                z_height: Some(f.elevation),
                rotation: f.rotation,
            })
            .collect(),
        openings: store
            .sorted_features()
            .into_iter()
            .map(|f| OpeningRecord {
                kind: f.kind,
                wall: f.wall,
                position: f.position,
                size: f.size,
                opening_height: f.opening_height,
                height_from_ground: f.sill_height,
            })
            .collect(),
    }
}

/// Encode the store as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`LayoutError::Unreadable`] if serialization fails (non-finite numbers).
pub fn to_json(store: &LayoutStore) -> Result<String, LayoutError> {
    let json = serde_json::to_string_pretty(&encode(store))?;
    info!(
        furniture = store.furniture_count(),
        openings = store.feature_count(),
        "layout exported"
    );
    Ok(json)
}

/// Parse and decode a JSON layout document.
///
/// # Errors
///
/// Returns [`LayoutError::Unreadable`] for malformed JSON and
/// [`LayoutError::InvalidDocument`] for impossible geometry.
pub fn from_json(json: &str, catalog: &Catalog) -> Result<(LayoutStore, LoadReport), LayoutError> {
    let doc: LayoutDocument = serde_json::from_str(json)?;
    decode(&doc, catalog)
}

/// Rebuild a store from a document.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidDocument`] when the room, an opening, or a
/// furniture record has a non-positive or non-finite size.
pub fn decode(doc: &LayoutDocument, catalog: &Catalog) -> Result<(LayoutStore, LoadReport), LayoutError> {
    let room = doc.room;
    if !(positive(room.width) && positive(room.height)) {
        return Err(LayoutError::InvalidDocument(format!(
            "room must have positive size, got {} × {}",
            room.width, room.height
        )));
    }
    let mut store = LayoutStore::new(room);
    let mut report = LoadReport::default();

    for (i, rec) in doc.openings.iter().enumerate() {
        if !(positive(rec.size) && positive(rec.opening_height) && rec.position.is_finite()) {
            return Err(LayoutError::InvalidDocument(format!("opening {i} has invalid geometry")));
        }
        let sill_height = match rec.kind {
            FeatureKind::Door => None,
            FeatureKind::Window => Some(rec.height_from_ground.unwrap_or(DEFAULT_WINDOW_SILL_HEIGHT)),
        };
        let mut feature = WallFeature {
            id: Uuid::new_v4(),
            kind: rec.kind,
            wall: rec.wall,
            position: rec.position,
            size: rec.size,
            opening_height: rec.opening_height,
            sill_height,
        };
        if let Some(patch) = clamp_feature(&feature, rec.wall.length(&room)) {
            feature.position = patch.position.unwrap_or(feature.position);
            feature.size = patch.size.unwrap_or(feature.size);
        }
        store.insert_feature(feature);
        report.openings += 1;
    }

    for (i, rec) in doc.furniture.iter().enumerate() {
        let Some(template) = catalog.template_by_name(&rec.name) else {
            warn!(name = %rec.name, "unknown furniture template; record skipped");
            report.skipped.push(rec.name.clone());
            continue;
        };
        let elevation = rec.z_height.unwrap_or(template.elevation);
        let finite = rec.x.is_finite() && rec.y.is_finite() && rec.rotation.is_finite();
        if !(finite && positive(rec.width) && positive(rec.height) && positive(elevation)) {
            return Err(LayoutError::InvalidDocument(format!("furniture {i} ('{}') has invalid geometry", rec.name)));
        }
        let z_index = store.next_z_index();
        store.insert_furniture(Furniture {
            id: Uuid::new_v4(),
            template_name: rec.name.clone(),
            x: rec.x,
            y: rec.y,
            width: rec.width,
            height: rec.height,
            rotation: rec.rotation,
            elevation,
            z_index,
        });
        report.furniture += 1;
    }

    info!(
        furniture = report.furniture,
        openings = report.openings,
        skipped = report.skipped.len(),
        "layout decoded"
    );
    Ok((store, report))
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
