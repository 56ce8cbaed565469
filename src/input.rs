//! Input model: pointer events, keys, selection, and the gesture state machine.
//!
//! The host delivers already-decoded pointer events. `InputState` is the
//! active gesture tracked between pointer-down and pointer-up; each variant
//! carries the gesture-start context needed to compute candidates from the
//! pointer delta and to restore the entity if the gesture is cancelled.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::hit::FeatureEnd;
use crate::model::{EntityId, EntityKind};
use crate::view::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key as reported by the host (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A decoded pointer event from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Screen-space position; the engine's view maps it into the room.
    pub point: Point,
    /// Entity the host already knows is under the pointer, if any.
    pub target: Option<EntityId>,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self { kind, point: Point::new(x, y), target: None }
    }

    /// Restrict hit testing to `id`.
    #[must_use]
    pub fn on(mut self, id: EntityId) -> Self {
        self.target = Some(id);
        self
    }
}

/// The selected entity and what kind it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub id: EntityId,
    pub kind: EntityKind,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// At most one selected entity.
    pub selected: Option<Selection>,
    /// Furniture whose latest candidate was rejected by the collision gate.
    pub colliding: Option<EntityId>,
}

impl UiState {
    #[must_use]
    pub fn selected_id(&self) -> Option<EntityId> {
        self.selected.map(|s| s.id)
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Moving a furniture item.
    DraggingFurniture {
        id: EntityId,
        /// Room-space pointer position at pointer-down.
        start: Point,
        /// Item top-left at pointer-down.
        orig_x: f64,
        orig_y: f64,
    },
    /// Resizing a furniture item from its corner handle; top-left stays fixed.
    ResizingFurniture {
        id: EntityId,
        start: Point,
        orig_width: f64,
        orig_height: f64,
    },
    /// Rotating a furniture item about its center.
    RotatingFurniture {
        id: EntityId,
        /// The rotation pivot, fixed for the whole gesture.
        center: Point,
        /// Pointer angle around `center` at pointer-down, in degrees.
        start_angle: f64,
        orig_rotation: f64,
    },
    /// Sliding a door or window along its wall.
    DraggingFeature {
        id: EntityId,
        start: Point,
        orig_position: f64,
    },
    /// Resizing a door or window from one end.
    ResizingFeature {
        id: EntityId,
        end: FeatureEnd,
        start: Point,
        orig_position: f64,
        orig_size: f64,
    },
}

impl InputState {
    /// The entity the active gesture is transforming.
    #[must_use]
    pub fn target(&self) -> Option<EntityId> {
        match self {
            Self::Idle => None,
            Self::DraggingFurniture { id, .. }
            | Self::ResizingFurniture { id, .. }
            | Self::RotatingFurniture { id, .. }
            | Self::DraggingFeature { id, .. }
            | Self::ResizingFeature { id, .. } => Some(*id),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::DraggingFurniture { .. } => "drag",
            Self::ResizingFurniture { .. } => "resize",
            Self::RotatingFurniture { .. } => "rotate",
            Self::DraggingFeature { .. } => "feature-drag",
            Self::ResizingFeature { .. } => "feature-resize",
        }
    }
}
