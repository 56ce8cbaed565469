#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::collision::check_layout;

const TOL: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOL
}

fn furniture(name: &str, x: f64, y: f64, w: f64, h: f64, rotation: f64, z: i64) -> Furniture {
    Furniture {
        id: Uuid::new_v4(),
        template_name: name.into(),
        x,
        y,
        width: w,
        height: h,
        rotation,
        elevation: 75.5,
        z_index: z,
    }
}

fn sample_store() -> LayoutStore {
    let mut store = LayoutStore::new(Room::new(640.0, 480.0));
    store.insert_furniture(furniture("bed", 20.0, 30.0, 200.0, 160.0, 0.0, 1));
    store.insert_furniture(furniture("sofa", 300.25, 250.5, 180.0, 90.0, 37.5, 2));
    store.insert_feature(WallFeature {
        id: Uuid::new_v4(),
        kind: FeatureKind::Door,
        wall: Wall::Bottom,
        position: 400.0,
        size: 90.0,
        opening_height: 210.0,
        sill_height: None,
    });
    store.insert_feature(WallFeature {
        id: Uuid::new_v4(),
        kind: FeatureKind::Window,
        wall: Wall::Right,
        position: 120.0,
        size: 140.0,
        opening_height: 110.0,
        sill_height: Some(95.0),
    });
    store
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn round_trip_preserves_counts_and_fields() {
    let store = sample_store();
    let json = to_json(&store).unwrap();
    let (back, report) = from_json(&json, &Catalog::builtin()).unwrap();

    assert_eq!(report.furniture, 2);
    assert_eq!(report.openings, 2);
    assert!(report.skipped.is_empty());
    assert_eq!(back.room, store.room);
    assert_eq!(back.furniture_count(), 2);
    assert_eq!(back.feature_count(), 2);

    for (a, b) in store.sorted_furniture().iter().zip(back.sorted_furniture()) {
        assert_eq!(a.template_name, b.template_name);
        assert!(approx_eq(a.x, b.x));
        assert!(approx_eq(a.y, b.y));
        assert!(approx_eq(a.width, b.width));
        assert!(approx_eq(a.height, b.height));
        assert!(approx_eq(a.rotation, b.rotation));
        assert!(approx_eq(a.elevation, b.elevation));
    }
    for (a, b) in store.sorted_features().iter().zip(back.sorted_features()) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.wall, b.wall);
        assert!(approx_eq(a.position, b.position));
        assert!(approx_eq(a.size, b.size));
        assert!(approx_eq(a.opening_height, b.opening_height));
        assert_eq!(a.sill_height, b.sill_height);
    }
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn encode_uses_document_field_names() {
    let value = serde_json::to_value(encode(&sample_store())).unwrap();
    let bed = &value["furniture"][0];
    assert_eq!(bed["name"], "bed");
    assert_eq!(bed["zHeight"], 75.5);
    assert_eq!(bed["rotation"], 0.0);

    let door = &value["openings"][0];
    assert_eq!(door["type"], "door");
    assert_eq!(door["wall"], "bottom");
    assert_eq!(door["openingHeight"], 210.0);
    assert!(door.get("heightFromGround").is_none());

    let window = &value["openings"][1];
    assert_eq!(window["type"], "window");
    assert_eq!(window["heightFromGround"], 95.0);
}

#[test]
fn decode_defaults_missing_optional_fields() {
    let doc = json!({
        "room": { "width": 500, "height": 400 },
        "furniture": [ { "name": "wardrobe", "x": 0, "y": 0, "width": 120, "height": 60 } ],
        "openings": [ { "type": "window", "wall": "top", "position": 10, "size": 100, "openingHeight": 120 } ]
    });
    let (store, _) = from_json(&doc.to_string(), &Catalog::builtin()).unwrap();
    let wardrobe = store.sorted_furniture()[0];
    assert_eq!(wardrobe.elevation, 200.0);
    assert_eq!(wardrobe.rotation, 0.0);
    assert_eq!(store.sorted_features()[0].sill_height, Some(DEFAULT_WINDOW_SILL_HEIGHT));
}

#[test]
fn decode_door_ignores_height_from_ground() {
    let doc = json!({
        "room": { "width": 500, "height": 400 },
        "openings": [ { "type": "door", "wall": "left", "position": 10, "size": 90,
                        "openingHeight": 200, "heightFromGround": 40 } ]
    });
    let (store, _) = from_json(&doc.to_string(), &Catalog::builtin()).unwrap();
    assert_eq!(store.sorted_features()[0].sill_height, None);
}

#[test]
fn decode_clamps_opening_onto_wall() {
    let doc = json!({
        "room": { "width": 500, "height": 400 },
        "openings": [ { "type": "window", "wall": "left", "position": 350, "size": 100, "openingHeight": 100 } ]
    });
    let (store, _) = from_json(&doc.to_string(), &Catalog::builtin()).unwrap();
    assert_eq!(store.sorted_features()[0].position, 300.0);
}

// =============================================================
// Skips and failures
// =============================================================

#[test]
fn unknown_template_is_skipped_not_fatal() {
    let doc = json!({
        "room": { "width": 500, "height": 400 },
        "furniture": [
            { "name": "grand-piano", "x": 0, "y": 0, "width": 150, "height": 150 },
            { "name": "bed", "x": 200, "y": 100, "width": 200, "height": 160 }
        ]
    });
    let (store, report) = from_json(&doc.to_string(), &Catalog::builtin()).unwrap();
    assert_eq!(store.furniture_count(), 1);
    assert_eq!(report.skipped, vec!["grand-piano".to_string()]);
}

#[test]
fn malformed_json_is_unreadable() {
    let err = from_json("{ \"room\": ", &Catalog::builtin()).unwrap_err();
    assert!(matches!(err, LayoutError::Unreadable(_)));
    assert_eq!(err.error_code(), "E_DOCUMENT_UNREADABLE");
}

#[test]
fn wrong_shape_is_unreadable() {
    let err = from_json(r#"{ "furniture": [] }"#, &Catalog::builtin()).unwrap_err();
    assert!(matches!(err, LayoutError::Unreadable(_)));
}

#[test]
fn zero_room_is_invalid() {
    let doc = json!({ "room": { "width": 0, "height": 400 } });
    let err = from_json(&doc.to_string(), &Catalog::builtin()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDocument(_)));
}

#[test]
fn negative_furniture_size_is_invalid() {
    let doc = json!({
        "room": { "width": 500, "height": 400 },
        "furniture": [ { "name": "bed", "x": 0, "y": 0, "width": -5, "height": 160 } ]
    });
    let err = from_json(&doc.to_string(), &Catalog::builtin()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDocument(_)));
}

#[test]
fn overlapping_furniture_loads_as_is() {
    let doc = json!({
        "room": { "width": 500, "height": 400 },
        "furniture": [
            { "name": "bed", "x": 0, "y": 0, "width": 200, "height": 160 },
            { "name": "sofa", "x": 100, "y": 100, "width": 200, "height": 90 }
        ]
    });
    let (store, report) = from_json(&doc.to_string(), &Catalog::builtin()).unwrap();
    assert_eq!(report.furniture, 2);
    assert_eq!(check_layout(&store).overlapping.len(), 1);
}
