//! Engine policy flags parsed from environment variables.

use crate::consts::SNAP_TOLERANCE_DEG;
use crate::error::LayoutError;

/// Policy switches for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Reject furniture transforms whose candidate overlaps another item.
    pub collision_gating: bool,
    /// Refuse to delete doors.
    pub protect_doors: bool,
    /// Pull furniture back inside the room when it shrinks.
    pub reclamp_furniture_on_resize: bool,
    /// Interactive rotation snaps when strictly closer than this many degrees.
    pub snap_tolerance_deg: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            collision_gating: true,
            protect_doors: false,
            reclamp_furniture_on_resize: false,
            snap_tolerance_deg: SNAP_TOLERANCE_DEG,
        }
    }
}

impl EngineConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `ROOMPLAN_COLLISION_GATING`: `true` (default) or `false`
    /// - `ROOMPLAN_PROTECT_DOORS`: `false` (default) or `true`
    /// - `ROOMPLAN_RECLAMP_FURNITURE`: `false` (default) or `true`
    /// - `ROOMPLAN_SNAP_TOLERANCE_DEG`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Config`] when a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, LayoutError> {
        let defaults = Self::default();
        Ok(Self {
            collision_gating: parse_flag(
                "ROOMPLAN_COLLISION_GATING",
                read_var("ROOMPLAN_COLLISION_GATING").as_deref(),
                defaults.collision_gating,
            )?,
            protect_doors: parse_flag(
                "ROOMPLAN_PROTECT_DOORS",
                read_var("ROOMPLAN_PROTECT_DOORS").as_deref(),
                defaults.protect_doors,
            )?,
            reclamp_furniture_on_resize: parse_flag(
                "ROOMPLAN_RECLAMP_FURNITURE",
                read_var("ROOMPLAN_RECLAMP_FURNITURE").as_deref(),
                defaults.reclamp_furniture_on_resize,
            )?,
            snap_tolerance_deg: parse_tolerance(
                read_var("ROOMPLAN_SNAP_TOLERANCE_DEG").as_deref(),
                defaults.snap_tolerance_deg,
            )?,
        })
    }
}

/// Unset and non-UTF-8 variables both read as absent.
fn read_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_flag(key: &str, raw: Option<&str>, default: bool) -> Result<bool, LayoutError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LayoutError::Config(format!("{key}: expected a boolean, got '{other}'"))),
    }
}

fn parse_tolerance(raw: Option<&str>, default: f64) -> Result<f64, LayoutError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(LayoutError::Config(format!(
            "ROOMPLAN_SNAP_TOLERANCE_DEG: expected a non-negative number, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
