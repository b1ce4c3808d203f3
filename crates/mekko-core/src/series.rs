// File: crates/mekko-core/src/series.rs
// Summary: Stacked series model for variable-width column charts.

use crate::dataview::DataView;
use crate::types::Rgba;

/// One stacked segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnDataPoint {
    pub category_index: usize,
    /// Stacked top edge of the segment (running sum including this value).
    pub position: f64,
    /// Extent of the segment; `position - value_absolute` is its base.
    pub value_absolute: f64,
    pub color: Rgba,
}

/// One series of stacked segments across the category axis.
#[derive(Clone, Debug)]
pub struct Series {
    /// Identity used for keyed scene binding.
    pub key: String,
    pub label: String,
    pub color: Rgba,
    pub data: Vec<ColumnDataPoint>,
}

impl Series {
    pub fn new(key: impl Into<String>, color: Rgba) -> Self {
        let key = key.into();
        Self { label: key.clone(), key, color, data: Vec::new() }
    }

    /// Build stacked series from the view's measure columns, one series per
    /// column. In 100% mode each category's segments are normalized by the
    /// category total so a full column sums to 1.
    pub fn stack_columns(view: &DataView, palette: &[Rgba], is_100_pct: bool) -> Vec<Series> {
        let n = view.categories.values.len();
        let totals = view.category_totals();
        let mut running = vec![0.0f64; n];
        let mut out = Vec::with_capacity(view.values.len());
        for (s, col) in view.values.iter().enumerate() {
            let color = if palette.is_empty() {
                Rgba::from_argb(255, 128, 128, 128)
            } else {
                palette[s % palette.len()]
            };
            let mut series = Series::new(col.label.clone(), color);
            for (i, &raw) in col.values.iter().enumerate().take(n) {
                let value = if is_100_pct {
                    if totals[i] > 0.0 { raw.abs() / totals[i] } else { 0.0 }
                } else {
                    raw.abs()
                };
                running[i] += value;
                series.data.push(ColumnDataPoint {
                    category_index: i,
                    position: running[i],
                    value_absolute: value,
                    color,
                });
            }
            out.push(series);
        }
        out
    }
}
