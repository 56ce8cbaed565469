use rand::Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::codec::{self, LoadReport};
use crate::collision::colliding_with;
use crate::config::EngineConfig;
use crate::consts::{
    DEFAULT_DOOR_OPENING_HEIGHT, DEFAULT_DOOR_SIZE, DEFAULT_WINDOW_OPENING_HEIGHT, DEFAULT_WINDOW_SILL_HEIGHT,
    DEFAULT_WINDOW_SIZE, MIN_FEATURE_SIZE, MIN_FURNITURE_SIDE, RANDOM_PLACEMENT_ATTEMPTS,
};
use crate::error::LayoutError;
use crate::geometry::{OrientedBox, clamp_center, pointer_angle_deg, snap_rotation};
use crate::hit::{FeatureEnd, HitPart, hit_test};
use crate::input::{Button, InputState, Key, PointerEvent, PointerKind, Selection, UiState};
use crate::model::{
    EntityId, EntityKind, FeatureKind, FeaturePatch, Furniture, FurniturePatch, LayoutStore, Room, Wall,
    WallFeature,
};
use crate::reflow::{ReflowPolicy, resize_room};
use crate::view::{Point, View};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FurnitureCreated(Furniture),
    FurnitureUpdated { id: EntityId, fields: FurniturePatch },
    FurnitureDeleted { id: EntityId },
    FeatureCreated(WallFeature),
    FeatureUpdated { id: EntityId, fields: FeaturePatch },
    FeatureDeleted { id: EntityId },
    RoomResized(Room),
    /// New size label for the settings panel after an accepted resize.
    DimensionsChanged { id: EntityId, label: String },
    /// `None` when the selection was cleared.
    SelectionChanged(Option<Selection>),
    /// The latest candidate for `id` was rejected because it overlaps `with`.
    Colliding { id: EntityId, with: EntityId },
    /// A drop found no free spot for the template.
    PlacementRejected { template: String },
    RenderNeeded,
}

/// The layout session: entity store, view, selection, and the active gesture.
///
/// Every mutation follows the same order: compute a candidate, gate it
/// (containment, then collision), and only then write it to the store.
pub struct EngineCore {
    pub store: LayoutStore,
    pub view: View,
    pub ui: UiState,
    pub input: InputState,
    pub config: EngineConfig,
    pub catalog: Catalog,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default(), Catalog::builtin(), Room::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig, catalog: Catalog, room: Room) -> Self {
        Self {
            store: LayoutStore::new(room),
            view: View::default(),
            ui: UiState::default(),
            input: InputState::default(),
            config,
            catalog,
        }
    }

    // --- Selection ---

    /// Select `id` (or clear with `None`). Emits a change only when the selection differs.
    pub fn select(&mut self, id: Option<EntityId>) -> Vec<Action> {
        let next = id.and_then(|id| self.store.kind_of(&id).map(|kind| Selection { id, kind }));
        if next == self.ui.selected {
            return Vec::new();
        }
        self.ui.selected = next;
        vec![Action::SelectionChanged(next), Action::RenderNeeded]
    }

    // --- Pointer input ---

    /// Dispatch a decoded pointer event.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Vec<Action> {
        match event.kind {
            PointerKind::Down => self.on_pointer_down(event.point, Button::Primary, event.target),
            PointerKind::Move => self.on_pointer_move(event.point),
            PointerKind::Up => self.on_pointer_up(event.point, Button::Primary),
        }
    }

    /// Begin a gesture on whatever is under `screen_pt`.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, target: Option<EntityId>) -> Vec<Action> {
        if !matches!(self.input, InputState::Idle) {
            debug!(gesture = self.input.name(), "gesture superseded by new pointer-down");
            self.end_gesture();
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let p = self.view.screen_to_room(screen_pt);
        let Some(hit) = hit_test(p, &self.store, &self.view, self.ui.selected_id(), target) else {
            return self.select(None);
        };

        let mut actions = self.select(Some(hit.id));
        self.input = match hit.part {
            HitPart::Body | HitPart::ResizeHandle | HitPart::RotateHandle => {
                let Some(item) = self.store.furniture(&hit.id) else {
                    return actions;
                };
                match hit.part {
                    HitPart::ResizeHandle => InputState::ResizingFurniture {
                        id: item.id,
                        start: p,
                        orig_width: item.width,
                        orig_height: item.height,
                    },
                    HitPart::RotateHandle => {
                        let center = item.bounds().center();
                        InputState::RotatingFurniture {
                            id: item.id,
                            center,
                            start_angle: pointer_angle_deg(center, p),
                            orig_rotation: item.rotation,
                        }
                    }
                    _ => InputState::DraggingFurniture { id: item.id, start: p, orig_x: item.x, orig_y: item.y },
                }
            }
            HitPart::FeatureBody | HitPart::FeatureEdge(_) => {
                let Some(feature) = self.store.feature(&hit.id) else {
                    return actions;
                };
                match hit.part {
                    HitPart::FeatureEdge(end) => InputState::ResizingFeature {
                        id: feature.id,
                        end,
                        start: p,
                        orig_position: feature.position,
                        orig_size: feature.size,
                    },
                    _ => InputState::DraggingFeature { id: feature.id, start: p, orig_position: feature.position },
                }
            }
        };
        debug!(gesture = self.input.name(), id = %hit.id, "gesture started");
        if actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Advance the active gesture to `screen_pt`.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let p = self.view.screen_to_room(screen_pt);
        match self.input.clone() {
            InputState::Idle => Vec::new(),
            InputState::DraggingFurniture { id, start, orig_x, orig_y } => {
                self.drag_furniture(id, p.x - start.x, p.y - start.y, orig_x, orig_y)
            }
            InputState::ResizingFurniture { id, start, orig_width, orig_height } => {
                self.resize_furniture(id, p.x - start.x, p.y - start.y, orig_width, orig_height)
            }
            InputState::RotatingFurniture { id, center, start_angle, orig_rotation } => {
                let delta = normalize_delta(pointer_angle_deg(center, p) - start_angle);
                self.rotate_furniture(id, orig_rotation + delta)
            }
            InputState::DraggingFeature { id, start, orig_position } => {
                self.drag_feature(id, start, p, orig_position)
            }
            InputState::ResizingFeature { id, end, start, orig_position, orig_size } => {
                self.resize_feature(id, end, start, p, orig_position, orig_size)
            }
        }
    }

    /// End the active gesture. The last accepted state stays committed.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || matches!(self.input, InputState::Idle) {
            return Vec::new();
        }
        self.end_gesture();
        vec![Action::RenderNeeded]
    }

    fn end_gesture(&mut self) {
        debug!(gesture = self.input.name(), "gesture ended");
        self.input = InputState::Idle;
        self.ui.colliding = None;
    }

    // --- Keyboard ---

    /// `Delete`/`Backspace` removes the selection; `Escape` cancels the
    /// gesture and clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DeletionProtected`] when the door policy refuses a delete.
    pub fn on_key_down(&mut self, key: &Key) -> Result<Vec<Action>, LayoutError> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selected(),
            "Escape" => {
                let mut actions = self.cancel_gesture();
                actions.extend(self.select(None));
                Ok(actions)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Abort the active gesture, restoring the entity to its gesture-start state.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        self.ui.colliding = None;
        match state {
            InputState::Idle => return Vec::new(),
            InputState::DraggingFurniture { id, orig_x, orig_y, .. } => {
                self.restore_furniture(id, FurniturePatch::position(orig_x, orig_y))
            }
            InputState::ResizingFurniture { id, orig_width, orig_height, .. } => self.restore_furniture(
                id,
                FurniturePatch { width: Some(orig_width), height: Some(orig_height), ..Default::default() },
            ),
            InputState::RotatingFurniture { id, orig_rotation, .. } => {
                self.restore_furniture(id, FurniturePatch { rotation: Some(orig_rotation), ..Default::default() })
            }
            InputState::DraggingFeature { id, orig_position, .. } => {
                self.restore_feature(id, FeaturePatch { position: Some(orig_position), size: None })
            }
            InputState::ResizingFeature { id, orig_position, orig_size, .. } => {
                self.restore_feature(id, FeaturePatch { position: Some(orig_position), size: Some(orig_size) })
            }
        }
    }

    fn restore_furniture(&mut self, id: EntityId, patch: FurniturePatch) -> Vec<Action> {
        debug!(%id, "gesture cancelled");
        if !self.store.apply_furniture_patch(&id, &patch) {
            return Vec::new();
        }
        vec![Action::FurnitureUpdated { id, fields: patch }, Action::RenderNeeded]
    }

    fn restore_feature(&mut self, id: EntityId, patch: FeaturePatch) -> Vec<Action> {
        debug!(%id, "gesture cancelled");
        if !self.store.apply_feature_patch(&id, &patch) {
            return Vec::new();
        }
        vec![Action::FeatureUpdated { id, fields: patch }, Action::RenderNeeded]
    }

    // --- Furniture transforms ---

    fn drag_furniture(&mut self, id: EntityId, dx: f64, dy: f64, orig_x: f64, orig_y: f64) -> Vec<Action> {
        let Some(item) = self.store.furniture(&id) else {
            return Vec::new();
        };
        let b = item.bounds();
        let (hw, hh) = b.half_extents();
        let room = self.store.room;
        let center = Point::new(
            clamp_center(orig_x + b.width / 2.0 + dx, hw, room.width),
            clamp_center(orig_y + b.height / 2.0 + dy, hh, room.height),
        );
        let candidate = OrientedBox::from_center(center, b.width, b.height, b.rotation);
        self.commit_furniture(id, candidate)
    }

    fn resize_furniture(&mut self, id: EntityId, dx: f64, dy: f64, orig_w: f64, orig_h: f64) -> Vec<Action> {
        let Some(item) = self.store.furniture(&id) else {
            return Vec::new();
        };
        // Pointer delta measured along the item's own axes.
        let (sin, cos) = item.rotation.to_radians().sin_cos();
        let local_dx = dx * cos + dy * sin;
        let local_dy = -dx * sin + dy * cos;
        let candidate = OrientedBox::new(
            item.x,
            item.y,
            (orig_w + local_dx).max(MIN_FURNITURE_SIDE),
            (orig_h + local_dy).max(MIN_FURNITURE_SIDE),
            item.rotation,
        );
        let mut actions = self.commit_furniture(id, candidate);
        if actions.iter().any(|a| matches!(a, Action::FurnitureUpdated { .. })) {
            if let Some(item) = self.store.furniture(&id) {
                actions.insert(1, Action::DimensionsChanged { id, label: item.dimension_label() });
            }
        }
        actions
    }

    fn rotate_furniture(&mut self, id: EntityId, raw: f64) -> Vec<Action> {
        let Some(item) = self.store.furniture(&id) else {
            return Vec::new();
        };
        let mut candidate = item.bounds();
        candidate.rotation = snap_rotation(raw, self.config.snap_tolerance_deg);
        self.commit_furniture(id, candidate)
    }

    /// Gate `candidate` and write it if it passes. Rejections leave the store untouched.
    fn commit_furniture(&mut self, id: EntityId, candidate: OrientedBox) -> Vec<Action> {
        let Some(item) = self.store.furniture(&id) else {
            return Vec::new();
        };
        let current = item.bounds();
        if candidate == current {
            return Vec::new();
        }
        let room = self.store.room;
        if !candidate.is_within(room.width, room.height) {
            debug!(%id, "candidate leaves the room; not committed");
            return Vec::new();
        }
        if self.config.collision_gating {
            if let Some(other) = colliding_with(&self.store, &id, &candidate) {
                debug!(%id, with = %other, "candidate collides; not committed");
                self.ui.colliding = Some(id);
                return vec![Action::Colliding { id, with: other }, Action::RenderNeeded];
            }
        }

        let fields = patch_between(&current, &candidate);
        self.store.apply_furniture_patch(&id, &fields);
        self.ui.colliding = None;
        vec![Action::FurnitureUpdated { id, fields }, Action::RenderNeeded]
    }

    // --- Wall-feature transforms ---

    #[allow(clippy::float_cmp)]
    fn drag_feature(&mut self, id: EntityId, start: Point, p: Point, orig_position: f64) -> Vec<Action> {
        let Some(feature) = self.store.feature(&id) else {
            return Vec::new();
        };
        let wall_len = feature.wall.length(&self.store.room);
        let delta = feature.wall.along(p) - feature.wall.along(start);
        let position = (orig_position + delta).min(wall_len - feature.size).max(0.0);
        if position == feature.position {
            return Vec::new();
        }
        let fields = FeaturePatch { position: Some(position), size: None };
        self.store.apply_feature_patch(&id, &fields);
        vec![Action::FeatureUpdated { id, fields }, Action::RenderNeeded]
    }

    #[allow(clippy::float_cmp)]
    fn resize_feature(
        &mut self,
        id: EntityId,
        end: FeatureEnd,
        start: Point,
        p: Point,
        orig_position: f64,
        orig_size: f64,
    ) -> Vec<Action> {
        let Some(feature) = self.store.feature(&id) else {
            return Vec::new();
        };
        let wall_len = feature.wall.length(&self.store.room);
        let delta = feature.wall.along(p) - feature.wall.along(start);
        let (position, size) = match end {
            FeatureEnd::End => {
                let size = (orig_size + delta).min(wall_len - orig_position).max(MIN_FEATURE_SIZE);
                (orig_position, size)
            }
            FeatureEnd::Start => {
                // The far end stays put.
                let far = orig_position + orig_size;
                let position = (orig_position + delta).max(0.0).min(far - MIN_FEATURE_SIZE);
                (position, far - position)
            }
        };
        if position == feature.position && size == feature.size {
            return Vec::new();
        }
        let fields = FeaturePatch { position: Some(position), size: Some(size) };
        self.store.apply_feature_patch(&id, &fields);
        vec![Action::FeatureUpdated { id, fields }, Action::RenderNeeded]
    }

    // --- Creation and deletion ---

    /// Drop a catalog item centered on `screen_pt`, pulled inside the room.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownTemplate`] if the catalog has no such template.
    pub fn drop_furniture(&mut self, template_name: &str, screen_pt: Point) -> Result<Vec<Action>, LayoutError> {
        let template = self
            .catalog
            .template_by_name(template_name)
            .ok_or_else(|| LayoutError::UnknownTemplate(template_name.to_string()))?;
        let (width, height, elevation) = (template.width, template.height, template.elevation);

        let p = self.view.screen_to_room(screen_pt);
        let room = self.store.room;
        let center = Point::new(
            clamp_center(p.x, width / 2.0, room.width),
            clamp_center(p.y, height / 2.0, room.height),
        );
        let candidate = OrientedBox::from_center(center, width, height, 0.0);

        let Some(id) = self.place(template_name, candidate, elevation) else {
            debug!(template = template_name, "drop blocked");
            return Ok(vec![Action::PlacementRejected { template: template_name.to_string() }]);
        };

        let mut actions = Vec::new();
        if let Some(item) = self.store.furniture(&id) {
            actions.push(Action::FurnitureCreated(item.clone()));
        }
        actions.extend(self.select(Some(id)));
        if !actions.contains(&Action::RenderNeeded) {
            actions.push(Action::RenderNeeded);
        }
        Ok(actions)
    }

    /// Insert a new item at `candidate` if it fits and collides with nothing.
    fn place(&mut self, template_name: &str, candidate: OrientedBox, elevation: f64) -> Option<EntityId> {
        let room = self.store.room;
        if !candidate.is_within(room.width, room.height) {
            return None;
        }
        let id = Uuid::new_v4();
        if self.config.collision_gating && colliding_with(&self.store, &id, &candidate).is_some() {
            return None;
        }
        let z_index = self.store.next_z_index();
        self.store.insert_furniture(Furniture {
            id,
            template_name: template_name.to_string(),
            x: candidate.x,
            y: candidate.y,
            width: candidate.width,
            height: candidate.height,
            rotation: candidate.rotation,
            elevation,
            z_index,
        });
        Some(id)
    }

    /// Drop a door or window on the wall nearest `screen_pt`, centered on the pointer.
    pub fn drop_feature(&mut self, kind: FeatureKind, screen_pt: Point) -> Vec<Action> {
        let p = self.view.screen_to_room(screen_pt);
        let room = self.store.room;
        let wall = Wall::nearest(&room, p);
        let wall_len = wall.length(&room);
        let (size, opening_height, sill_height) = match kind {
            FeatureKind::Door => (DEFAULT_DOOR_SIZE, DEFAULT_DOOR_OPENING_HEIGHT, None),
            FeatureKind::Window => {
                (DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_OPENING_HEIGHT, Some(DEFAULT_WINDOW_SILL_HEIGHT))
            }
        };
        let size = size.min(wall_len);
        let position = (wall.along(p) - size / 2.0).min(wall_len - size).max(0.0);
        let feature = WallFeature { id: Uuid::new_v4(), kind, wall, position, size, opening_height, sill_height };
        let id = feature.id;
        self.store.insert_feature(feature.clone());
        debug!(%id, ?kind, ?wall, position, "feature dropped");

        let mut actions = vec![Action::FeatureCreated(feature)];
        actions.extend(self.select(Some(id)));
        actions
    }

    /// Delete one entity.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownEntity`] if `id` is not in the session and
    /// [`LayoutError::DeletionProtected`] if it is a door and doors are protected.
    pub fn delete(&mut self, id: &EntityId) -> Result<Vec<Action>, LayoutError> {
        let kind = self.store.kind_of(id).ok_or(LayoutError::UnknownEntity(*id))?;
        if kind == EntityKind::Door && self.config.protect_doors {
            return Err(LayoutError::DeletionProtected(*id));
        }
        if self.input.target() == Some(*id) {
            self.end_gesture();
        }

        let mut actions = match kind {
            EntityKind::Furniture => {
                self.store.remove_furniture(id);
                vec![Action::FurnitureDeleted { id: *id }]
            }
            EntityKind::Door | EntityKind::Window => {
                self.store.remove_feature(id);
                vec![Action::FeatureDeleted { id: *id }]
            }
        };
        if self.ui.selected_id() == Some(*id) {
            self.ui.selected = None;
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    /// Delete the selected entity, if any.
    ///
    /// # Errors
    ///
    /// Same as [`EngineCore::delete`].
    pub fn delete_selected(&mut self) -> Result<Vec<Action>, LayoutError> {
        match self.ui.selected_id() {
            Some(id) => self.delete(&id),
            None => Ok(Vec::new()),
        }
    }

    /// Remove every furniture item. Doors and windows stay.
    pub fn clear_furniture(&mut self) -> Vec<Action> {
        if matches!(self.input.target().and_then(|id| self.store.kind_of(&id)), Some(EntityKind::Furniture)) {
            self.end_gesture();
        }
        let mut actions: Vec<Action> = self
            .store
            .clear_furniture()
            .into_iter()
            .map(|id| Action::FurnitureDeleted { id })
            .collect();
        info!(removed = actions.len(), "room cleared");
        if matches!(self.ui.selected, Some(Selection { kind: EntityKind::Furniture, .. })) {
            actions.extend(self.select(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Replace all furniture with `count` random catalog items. Each item is
    /// tried at up to [`RANDOM_PLACEMENT_ATTEMPTS`] random spots and dropped
    /// if none is free.
    pub fn random_layout<R: Rng>(&mut self, rng: &mut R, count: usize) -> Vec<Action> {
        let mut actions = self.clear_furniture();
        actions.retain(|a| *a != Action::RenderNeeded);

        let templates: Vec<(String, f64, f64, f64)> = self
            .catalog
            .templates()
            .map(|t| (t.name.clone(), t.width, t.height, t.elevation))
            .collect();
        if templates.is_empty() {
            warn!("random layout requested with an empty catalog");
            actions.push(Action::RenderNeeded);
            return actions;
        }

        let room = self.store.room;
        for _ in 0..count {
            let (name, width, height, elevation) = &templates[rng.random_range(0..templates.len())];
            if *width > room.width || *height > room.height {
                continue;
            }
            let placed = (0..RANDOM_PLACEMENT_ATTEMPTS).find_map(|_| {
                let x = rng.random_range(0.0..=room.width - width);
                let y = rng.random_range(0.0..=room.height - height);
                self.place(name, OrientedBox::new(x, y, *width, *height, 0.0), *elevation)
            });
            match placed.and_then(|id| self.store.furniture(&id)) {
                Some(item) => actions.push(Action::FurnitureCreated(item.clone())),
                None => debug!(template = %name, "no free spot for random item"),
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Room ---

    /// Resize the room to an absolute size (floored) and re-flow its contents.
    ///
    /// Ends any active gesture first: its start state may no longer fit the
    /// new room, so a later cancel must not restore it.
    pub fn set_room_size(&mut self, width: f64, height: f64) -> Vec<Action> {
        if !matches!(self.input, InputState::Idle) {
            self.end_gesture();
        }
        let policy = ReflowPolicy {
            reclamp_furniture: self.config.reclamp_furniture_on_resize,
            collision_gating: self.config.collision_gating,
        };
        let report = resize_room(&mut self.store, width, height, policy);

        let mut actions = vec![Action::RoomResized(report.room)];
        actions.extend(
            report
                .moved_features
                .into_iter()
                .map(|(id, fields)| Action::FeatureUpdated { id, fields }),
        );
        actions.extend(
            report
                .moved_furniture
                .into_iter()
                .map(|(id, fields)| Action::FurnitureUpdated { id, fields }),
        );
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Apply a room-resize handle drag delta.
    pub fn resize_room_by(&mut self, dw: f64, dh: f64) -> Vec<Action> {
        let room = self.store.room;
        self.set_room_size(room.width + dw, room.height + dh)
    }

    // --- Documents ---

    /// Replace the session with a layout document. On failure the current
    /// session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unreadable`] or [`LayoutError::InvalidDocument`].
    pub fn load_layout_json(&mut self, json: &str) -> Result<LoadReport, LayoutError> {
        let (store, report) = codec::from_json(json, &self.catalog).inspect_err(|e| {
            warn!(error = %e, "layout load failed; session unchanged");
        })?;
        self.store = store;
        self.input = InputState::Idle;
        self.ui = UiState::default();
        Ok(report)
    }

    /// Export the session as a layout document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unreadable`] if the store cannot be serialized.
    pub fn export_layout_json(&self) -> Result<String, LayoutError> {
        codec::to_json(&self.store)
    }

    // --- Queries ---

    /// The currently selected entity, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.ui.selected
    }

    #[must_use]
    pub fn room(&self) -> Room {
        self.store.room
    }

    #[must_use]
    pub fn furniture(&self, id: &EntityId) -> Option<&Furniture> {
        self.store.furniture(id)
    }

    #[must_use]
    pub fn feature(&self, id: &EntityId) -> Option<&WallFeature> {
        self.store.feature(id)
    }

    /// Number of furniture items in the room.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.store.furniture_count()
    }
}

/// Patch carrying only the fields that differ between `before` and `after`.
#[allow(clippy::float_cmp)]
fn patch_between(before: &OrientedBox, after: &OrientedBox) -> FurniturePatch {
    let changed = |a: f64, b: f64| (a != b).then_some(b);
    FurniturePatch {
        x: changed(before.x, after.x),
        y: changed(before.y, after.y),
        width: changed(before.width, after.width),
        height: changed(before.height, after.height),
        rotation: changed(before.rotation, after.rotation),
    }
}

/// Wrap an angle delta into `(-180, 180]`.
fn normalize_delta(delta: f64) -> f64 {
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}
