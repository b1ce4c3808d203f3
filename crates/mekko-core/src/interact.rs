// File: crates/mekko-core/src/interact.rs
// Summary: Pointer/selection helpers: nearest column, opacity states, drag wiring.

use crate::scene::{DragStartHandler, Scene, Transition};
use crate::types::{DIMMED_OPACITY, DIM_TRANSITION_MS, FULL_OPACITY};

/// Index of the column center nearest to `coordinate`.
/// Earliest index wins ties; empty input yields 0.
pub fn closest_column_index(coordinate: f64, centers: &[f64]) -> usize {
    let mut index = 0usize;
    let mut distance = f64::MAX;
    for (i, center) in centers.iter().enumerate() {
        let current = (coordinate - center).abs();
        if current < distance {
            distance = current;
            index = i;
        }
    }
    index
}

/// Fill opacity for one element given the chart's selection/highlight state.
pub fn fill_opacity(
    selected: bool,
    highlighted: bool,
    has_selection: bool,
    has_partial_highlights: bool,
) -> f32 {
    if (has_partial_highlights && !highlighted) || (has_selection && !selected) {
        DIMMED_OPACITY
    } else {
        FULL_OPACITY
    }
}

/// Dim every column outside the chosen category and restore the chosen one.
///
/// Columns whose category index is neither `selected_index` nor the
/// last-interacted index fade to the dimmed opacity; the column at
/// `selected_index` snaps back to full opacity with no transition.
pub fn set_chosen_column_opacity(scene: &mut Scene, selected_index: usize, last_index: Option<usize>) {
    for column in scene.columns_mut() {
        let ci = column.category_index;
        if ci != selected_index && last_index.map_or(true, |last| ci != last) {
            column.set_opacity(DIMMED_OPACITY, Transition::Animated { duration_ms: DIM_TRANSITION_MS });
        } else if ci == selected_index {
            column.set_opacity(FULL_OPACITY, Transition::Immediate);
        }
    }
}

/// Attach drag behavior only when a handler is supplied: every column becomes
/// draggable and the scene dispatches drag starts to `handler`.
pub fn apply_interactivity(scene: &mut Scene, handler: Option<DragStartHandler>) {
    if let Some(handler) = handler {
        for column in scene.columns_mut() {
            column.draggable = true;
        }
        scene.set_drag_handler(handler);
    }
}
