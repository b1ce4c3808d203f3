// File: crates/mekko-core/src/dataview.rs
// Summary: Categorical data view: one category axis plus parallel measure columns.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

/// A single metadata property attached to a category entry.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// Per-category metadata object: property name -> value.
pub type ObjectProps = BTreeMap<String, PropertyValue>;

/// Declared value type of the category axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryKind {
    Numeric,
    DateTime,
    Ordinal,
}

/// One category axis entry.
#[derive(Clone, Debug, PartialEq)]
pub enum CategoryValue {
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl CategoryValue {
    /// Numeric form used for range comparison; dates map to epoch milliseconds.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CategoryValue::Number(v) => Some(*v),
            CategoryValue::Date(d) => Some(d.and_utc().timestamp_millis() as f64),
            CategoryValue::Text(_) => None,
        }
    }
}

/// Category axis: ordered values plus optional per-value metadata objects.
/// Contract: when `objects` is present it is parallel to `values`.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryColumn {
    pub label: String,
    pub kind: CategoryKind,
    pub values: Vec<CategoryValue>,
    pub objects: Option<Vec<ObjectProps>>,
}

/// One measure column, parallel to the category axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueColumn {
    pub label: String,
    pub values: Vec<f64>,
}

/// Table-like view pairing a category axis with one or more measure columns.
/// Index `i` in `categories` corresponds to index `i` in every value column.
#[derive(Clone, Debug, PartialEq)]
pub struct DataView {
    /// Dataset label, carried through derivations untouched.
    pub source: Option<String>,
    pub categories: CategoryColumn,
    pub values: Vec<ValueColumn>,
}

impl DataView {
    /// Derive a view that replaces the category entries and value columns and
    /// inherits every other field from `self`. The receiver is not mutated.
    pub fn derive_filtered(
        &self,
        category_values: Vec<CategoryValue>,
        category_objects: Vec<ObjectProps>,
        value_columns: Vec<Vec<f64>>,
    ) -> DataView {
        let categories = CategoryColumn {
            label: self.categories.label.clone(),
            kind: self.categories.kind,
            values: category_values,
            objects: Some(category_objects),
        };
        let values = self
            .values
            .iter()
            .zip(value_columns)
            .map(|(col, values)| ValueColumn { label: col.label.clone(), values })
            .collect();
        DataView { source: self.source.clone(), categories, values }
    }

    /// Per-category totals of absolute values across all measure columns.
    pub fn category_totals(&self) -> Vec<f64> {
        let n = self.categories.values.len();
        let mut totals = vec![0.0; n];
        for col in &self.values {
            for (i, v) in col.values.iter().enumerate().take(n) {
                totals[i] += v.abs();
            }
        }
        totals
    }
}
