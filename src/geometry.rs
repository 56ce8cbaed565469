//! Geometry kernel: oriented rectangles and the separating-axis overlap test.
//!
//! Every function here is pure. Angles are in degrees, clockwise-positive in
//! screen space (y grows downward), and a box rotates about its center.
//!
//! Overlap is exact for any pair of rotations: both boxes are projected onto
//! the two edge normals of each box, and a single disjoint projection proves
//! separation. Boxes that only touch along an edge or at a corner are NOT
//! reported as overlapping, so furniture can sit flush against each other.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{EPSILON, SNAP_ANGLES_DEG};
use crate::view::Point;

/// A rectangle with a top-left position, a size, and a rotation about its center.
///
/// `x` / `y` describe the top-left corner of the *unrotated* rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
}

impl OrientedBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        Self { x, y, width, height, rotation }
    }

    /// Build a box from its center point instead of its top-left corner.
    #[must_use]
    pub fn from_center(center: Point, width: f64, height: f64, rotation: f64) -> Self {
        Self { x: center.x - width / 2.0, y: center.y - height / 2.0, width, height, rotation }
    }

    /// The rotation pivot.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The four corners after rotation, in order top-left, top-right,
    /// bottom-right, bottom-left of the unrotated rectangle.
    #[must_use]
    pub fn vertices(&self) -> [Point; 4] {
        let c = self.center();
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(dx, dy)| Point {
            x: c.x + dx * cos - dy * sin,
            y: c.y + dx * sin + dy * cos,
        })
    }

    /// Half-width and half-height of the axis-aligned box enclosing the rotated rectangle.
    #[must_use]
    pub fn half_extents(&self) -> (f64, f64) {
        rotated_half_extents(self.width, self.height, self.rotation)
    }

    /// Whether every rotated corner lies inside `[0, width] × [0, height]`.
    #[must_use]
    pub fn is_within(&self, width: f64, height: f64) -> bool {
        self.vertices().iter().all(|v| {
            v.x >= -EPSILON && v.x <= width + EPSILON && v.y >= -EPSILON && v.y <= height + EPSILON
        })
    }

    /// Express `p` in the box's own frame: origin at the center, axes along
    /// the box's (rotated) width and height.
    #[must_use]
    pub fn to_local(&self, p: Point) -> Point {
        let c = self.center();
        let dx = p.x - c.x;
        let dy = p.y - c.y;
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        Point { x: dx * cos + dy * sin, y: -dx * sin + dy * cos }
    }

    /// Whether `p` lies inside the rotated rectangle (boundary inclusive).
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        let local = self.to_local(p);
        local.x.abs() <= self.width / 2.0 && local.y.abs() <= self.height / 2.0
    }
}

/// Half-extents of the axis-aligned hull of a `width × height` rectangle
/// rotated by `rotation` degrees.
#[must_use]
pub fn rotated_half_extents(width: f64, height: f64, rotation: f64) -> (f64, f64) {
    let (sin, cos) = rotation.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    (cos * width / 2.0 + sin * height / 2.0, sin * width / 2.0 + cos * height / 2.0)
}

/// The two unique edge normals of a rectangle given its corners.
fn edge_normals(v: &[Point; 4]) -> [Point; 2] {
    [(v[0], v[1]), (v[1], v[2])].map(|(a, b)| Point { x: -(b.y - a.y), y: b.x - a.x })
}

/// Project `vertices` onto `axis`, returning the `(min, max)` interval.
#[must_use]
pub fn project(vertices: &[Point; 4], axis: Point) -> (f64, f64) {
    vertices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        let dot = v.x * axis.x + v.y * axis.y;
        (lo.min(dot), hi.max(dot))
    })
}

/// True if the interiors of two oriented boxes intersect.
#[must_use]
pub fn overlaps(a: &OrientedBox, b: &OrientedBox) -> bool {
    let va = a.vertices();
    let vb = b.vertices();
    let axes = edge_normals(&va).into_iter().chain(edge_normals(&vb));
    for axis in axes {
        let (min_a, max_a) = project(&va, axis);
        let (min_b, max_b) = project(&vb, axis);
        // Scale the touch tolerance with the axis length; normals are not unit vectors.
        let slack = EPSILON * axis.x.hypot(axis.y).max(1.0);
        if max_a <= min_b + slack || max_b <= min_a + slack {
            return false;
        }
    }
    true
}

/// Snap `raw` to the nearest of [`SNAP_ANGLES_DEG`] when it is strictly
/// closer than `tolerance` degrees; otherwise return `raw` unchanged.
#[must_use]
pub fn snap_rotation(raw: f64, tolerance: f64) -> f64 {
    SNAP_ANGLES_DEG
        .iter()
        .copied()
        .map(|target| (target, (raw - target).abs()))
        .filter(|(_, diff)| *diff < tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(raw, |(target, _)| target)
}

/// Angle in degrees of the vector from `center` to `p`, `atan2(dy, dx)`.
#[must_use]
pub fn pointer_angle_deg(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x).to_degrees()
}

/// Clamp a center coordinate so `[value - half, value + half]` stays inside
/// `[0, extent]`. When the span cannot fit, the center of the extent wins.
#[must_use]
pub fn clamp_center(value: f64, half: f64, extent: f64) -> f64 {
    let lo = half;
    let hi = extent - half;
    if lo > hi {
        return extent / 2.0;
    }
    value.max(lo).min(hi)
}
