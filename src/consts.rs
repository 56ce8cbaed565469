//! Shared numeric constants for the layout engine.

// ── Room ────────────────────────────────────────────────────────

/// Smallest width or height the room can be resized to.
pub const MIN_ROOM_SIDE: f64 = 200.0;

// ── Furniture ───────────────────────────────────────────────────

/// Smallest width or height a furniture item can be resized to.
pub const MIN_FURNITURE_SIDE: f64 = 20.0;

/// Angles (degrees) that interactive rotation snaps to.
pub const SNAP_ANGLES_DEG: [f64; 7] = [0.0, 90.0, 180.0, 270.0, -90.0, -180.0, -270.0];

/// Default snap tolerance in degrees. A raw angle snaps only when it is
/// strictly closer than this to one of [`SNAP_ANGLES_DEG`].
pub const SNAP_TOLERANCE_DEG: f64 = 10.0;

// ── Wall features ───────────────────────────────────────────────

/// Smallest opening a door or window can be resized to.
pub const MIN_FEATURE_SIZE: f64 = 30.0;

/// Thickness of a wall feature's footprint, measured into the room.
pub const FEATURE_THICKNESS: f64 = 10.0;

/// Band at each end of a feature that grabs the edge instead of the body.
pub const FEATURE_EDGE_BAND: f64 = 10.0;

pub const DEFAULT_DOOR_SIZE: f64 = 90.0;
pub const DEFAULT_DOOR_OPENING_HEIGHT: f64 = 210.0;
pub const DEFAULT_WINDOW_SIZE: f64 = 120.0;
pub const DEFAULT_WINDOW_OPENING_HEIGHT: f64 = 120.0;
pub const DEFAULT_WINDOW_SILL_HEIGHT: f64 = 90.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance above the top edge to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;

// ── Random layout ───────────────────────────────────────────────

/// Placement attempts per item before the random layout gives up on it.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 32;

/// Float slack for containment checks after trigonometric round-off.
pub const EPSILON: f64 = 1e-9;
