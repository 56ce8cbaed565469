#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// A point in either screen or room space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the room is drawn on screen.
///
/// `origin_x` / `origin_y` are the screen position of the room's top-left
/// corner in CSS pixels. `scale` is screen pixels per room unit.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
}

impl Default for View {
    fn default() -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, scale: 1.0 }
    }
}

impl View {
    /// Convert a screen-space point to room-local coordinates.
    #[must_use]
    pub fn screen_to_room(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.origin_x) / self.scale,
            y: (screen.y - self.origin_y) / self.scale,
        }
    }

    /// Convert a room-local point to screen coordinates.
    #[must_use]
    pub fn room_to_screen(&self, room: Point) -> Point {
        Point {
            x: room.x * self.scale + self.origin_x,
            y: room.y * self.scale + self.origin_y,
        }
    }

    /// Convert a screen-space distance (pixels) to room units.
    #[must_use]
    pub fn screen_dist_to_room(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }
}
