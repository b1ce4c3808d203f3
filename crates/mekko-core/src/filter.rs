// File: crates/mekko-core/src/filter.rs
// Summary: Rebuilds a categorical view restricted to a user-selected numeric range.

use log::{debug, warn};

use crate::dataview::{DataView, ObjectProps};
use crate::scale::is_ordinal;

/// Result of a range-filter pass.
///
/// Callers must distinguish two different "do nothing" signals: `Unchanged`
/// means keep the input view as-is, while `NotApplicable` marks an ordinal
/// category axis where numeric range comparison has no meaning.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterOutcome {
    NotApplicable,
    Unchanged,
    Filtered(DataView),
}

/// User-configured axis range; unset ends fall back to the data extents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UserAxisRange {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

/// Restrict `view` to categories whose numeric value lies in `[min, max]`.
///
/// Kept entries preserve input order, and every value column is filtered
/// through the same index set, so output columns stay parallel to the
/// category axis. An unset `min` defaults to the first category value, an
/// unset `max` to the last.
pub fn transform_domain(view: &DataView, min: Option<f64>, max: Option<f64>) -> FilterOutcome {
    if view.categories.values.is_empty() || view.values.is_empty() {
        return FilterOutcome::Unchanged;
    }
    if view.values.iter().any(|col| col.values.is_empty()) {
        return FilterOutcome::Unchanged;
    }
    if min.is_none() && max.is_none() {
        return FilterOutcome::Unchanged;
    }
    if is_ordinal(view.categories.kind) {
        warn!(
            "range filter skipped: category axis '{}' is ordinal",
            view.categories.label
        );
        return FilterOutcome::NotApplicable;
    }
    let Some(objects) = view.categories.objects.as_ref() else {
        return FilterOutcome::Unchanged;
    };
    if objects.len() != view.categories.values.len() {
        return FilterOutcome::Unchanged;
    }
    if view.values.iter().any(|col| col.values.len() != view.categories.values.len()) {
        return FilterOutcome::Unchanged;
    }

    let first = view.categories.values.first().and_then(|v| v.as_number());
    let last = view.categories.values.last().and_then(|v| v.as_number());
    let (Some(min), Some(max)) = (min.or(first), max.or(last)) else {
        return FilterOutcome::Unchanged;
    };
    if min > max {
        return FilterOutcome::Unchanged;
    }

    let mut kept_values = Vec::new();
    let mut kept_objects: Vec<ObjectProps> = Vec::new();
    let mut kept_columns: Vec<Vec<f64>> = vec![Vec::new(); view.values.len()];
    for (i, value) in view.categories.values.iter().enumerate() {
        let keep = value.as_number().map_or(false, |v| v >= min && v <= max);
        if !keep {
            continue;
        }
        kept_values.push(value.clone());
        kept_objects.push(objects[i].clone());
        for (c, col) in view.values.iter().enumerate() {
            kept_columns[c].push(col.values[i]);
        }
    }
    debug!(
        "range filter kept {}/{} categories in [{min}, {max}]",
        kept_values.len(),
        view.categories.values.len()
    );
    FilterOutcome::Filtered(view.derive_filtered(kept_values, kept_objects, kept_columns))
}

/// Apply the user's start/end range to a scalar axis; categorical axes pass
/// through unchanged since range filtering has no meaning there.
pub fn apply_user_min_max(is_scalar: bool, view: &DataView, range: &UserAxisRange) -> FilterOutcome {
    if !is_scalar {
        return FilterOutcome::Unchanged;
    }
    transform_domain(view, range.start, range.end)
}
