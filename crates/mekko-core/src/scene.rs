// File: crates/mekko-core/src/scene.rs
// Summary: Retained scene graph the utilities bind and restyle; renderers consume it.

use crate::geometry::RectF;
use crate::types::{Rgba, FULL_OPACITY};

/// How an opacity change is applied by the presenting layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Immediate,
    Animated { duration_ms: u32 },
}

/// One rendered column rect.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnShape {
    pub rect: RectF,
    pub category_index: usize,
    pub fill: Rgba,
    pub opacity: f32,
    pub transition: Transition,
    pub draggable: bool,
}

impl ColumnShape {
    pub fn new(rect: RectF, category_index: usize, fill: Rgba) -> Self {
        Self {
            rect,
            category_index,
            fill,
            opacity: FULL_OPACITY,
            transition: Transition::Immediate,
            draggable: false,
        }
    }

    pub fn set_opacity(&mut self, opacity: f32, transition: Transition) {
        self.opacity = opacity;
        self.transition = transition;
    }
}

/// Keyed group of column shapes belonging to one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGroup {
    pub key: String,
    pub fill: Rgba,
    pub columns: Vec<ColumnShape>,
}

impl SeriesGroup {
    pub fn new(key: impl Into<String>, fill: Rgba) -> Self {
        Self { key: key.into(), fill, columns: Vec::new() }
    }
}

/// Pointer-drag start event, in column terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragStart {
    pub category_index: usize,
}

pub type DragStartHandler = Box<dyn FnMut(DragStart)>;

/// Retained scene: series groups plus scene-level interaction wiring.
/// Mutated in place under single-threaded access.
#[derive(Default)]
pub struct Scene {
    pub groups: Vec<SeriesGroup>,
    on_drag_start: Option<DragStartHandler>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate every column across all groups.
    pub fn columns_mut(&mut self) -> impl Iterator<Item = &mut ColumnShape> + '_ {
        self.groups.iter_mut().flat_map(|g| g.columns.iter_mut())
    }

    pub fn set_drag_handler(&mut self, handler: DragStartHandler) {
        self.on_drag_start = Some(handler);
    }

    pub fn has_drag_handler(&self) -> bool {
        self.on_drag_start.is_some()
    }

    /// Dispatch a drag start to the installed handler, if any.
    pub fn emit_drag_start(&mut self, event: DragStart) {
        if let Some(handler) = self.on_drag_start.as_mut() {
            handler(event);
        }
    }
}
