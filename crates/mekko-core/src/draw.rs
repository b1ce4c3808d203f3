// File: crates/mekko-core/src/draw.rs
// Summary: Binds stacked series onto the scene: keyed group join and column rects.

use crate::geometry::RectF;
use crate::scale::{AxisScale, ColumnLayout, LinearScale};
use crate::scene::{ColumnShape, Scene, SeriesGroup};
use crate::series::Series;

/// Axis inputs for column placement.
#[derive(Clone, Debug)]
pub struct AxisOptions {
    pub columns: ColumnLayout,
    pub value_scale: LinearScale,
}

/// Keyed join of `data` onto the scene's series groups.
///
/// Groups whose key disappeared are removed, new keys are appended, and every
/// bound group's fill is refreshed from its series color. Existing group
/// order is preserved. Returns the bound groups for further decoration.
/// `_axis_options` is accepted for callers that thread axis state through the
/// bind; fills do not depend on it.
pub fn draw_series<'a>(
    data: &[Series],
    scene: &'a mut Scene,
    _axis_options: &AxisOptions,
) -> &'a mut [SeriesGroup] {
    scene.groups.retain(|g| data.iter().any(|s| s.key == g.key));
    for series in data {
        match scene.groups.iter_mut().find(|g| g.key == series.key) {
            Some(group) => group.fill = series.color,
            None => scene.groups.push(SeriesGroup::new(series.key.clone(), series.color)),
        }
    }
    &mut scene.groups
}

/// Populate one bound group's column rects from its series segments.
pub fn draw_columns(group: &mut SeriesGroup, series: &Series, axis_options: &AxisOptions) {
    group.columns.clear();
    for point in &series.data {
        let i = point.category_index;
        if i >= axis_options.columns.len() {
            continue;
        }
        let left = axis_options.columns.left(i);
        let right = left + axis_options.columns.width(i);
        let top = axis_options.value_scale.scaled(point.position);
        let base = axis_options.value_scale.scaled(point.position - point.value_absolute);
        let (y0, y1) = if top <= base { (top, base) } else { (base, top) };
        group.columns.push(ColumnShape::new(
            RectF::from_ltrb(left as f32, y0 as f32, right as f32, y1 as f32),
            i,
            point.color,
        ));
    }
}
