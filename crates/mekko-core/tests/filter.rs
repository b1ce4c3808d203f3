// File: crates/mekko-core/tests/filter.rs
// Purpose: Validate range filtering: stable subsequence, defaults, sentinels, idempotence.

use mekko_core::dataview::{
    CategoryColumn, CategoryKind, CategoryValue, DataView, ObjectProps, PropertyValue, ValueColumn,
};
use mekko_core::{apply_user_min_max, transform_domain, FilterOutcome, UserAxisRange};

fn object_for(row: usize) -> ObjectProps {
    let mut props = ObjectProps::new();
    props.insert("row".to_string(), PropertyValue::Number(row as f64));
    props
}

fn numeric_view(categories: &[f64], columns: &[&[f64]]) -> DataView {
    DataView {
        source: Some("test".to_string()),
        categories: CategoryColumn {
            label: "year".to_string(),
            kind: CategoryKind::Numeric,
            values: categories.iter().map(|&v| CategoryValue::Number(v)).collect(),
            objects: Some((0..categories.len()).map(object_for).collect()),
        },
        values: columns
            .iter()
            .enumerate()
            .map(|(i, vals)| ValueColumn { label: format!("s{i}"), values: vals.to_vec() })
            .collect(),
    }
}

#[test]
fn keeps_inclusive_range_in_input_order() {
    let view = numeric_view(
        &[2000.0, 2001.0, 2002.0, 2003.0, 2004.0],
        &[&[1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 20.0, 30.0, 40.0, 50.0]],
    );
    let FilterOutcome::Filtered(out) = transform_domain(&view, Some(2001.0), Some(2003.0)) else {
        panic!("expected a filtered view");
    };
    let kept: Vec<f64> = out.categories.values.iter().filter_map(|v| v.as_number()).collect();
    assert_eq!(kept, vec![2001.0, 2002.0, 2003.0]);
    assert_eq!(out.values[0].values, vec![2.0, 3.0, 4.0]);
    assert_eq!(out.values[1].values, vec![20.0, 30.0, 40.0]);
    // metadata objects travel with their categories
    let objects = out.categories.objects.as_ref().expect("objects kept");
    assert_eq!(objects.len(), 3);
    assert_eq!(objects[0].get("row"), Some(&PropertyValue::Number(1.0)));
    // unrelated fields inherited; input untouched
    assert_eq!(out.source.as_deref(), Some("test"));
    assert_eq!(view.categories.values.len(), 5);
    assert_eq!(view.values[0].values.len(), 5);
}

#[test]
fn value_columns_stay_parallel_to_categories() {
    let view = numeric_view(&[1.0, 2.0, 3.0, 4.0], &[&[1.0; 4], &[2.0; 4], &[3.0; 4]]);
    let FilterOutcome::Filtered(out) = transform_domain(&view, Some(2.0), None) else {
        panic!("expected a filtered view");
    };
    for col in &out.values {
        assert_eq!(col.values.len(), out.categories.values.len());
    }
}

#[test]
fn missing_bounds_default_to_first_and_last_category() {
    let view = numeric_view(&[1.0, 2.0, 3.0], &[&[1.0, 2.0, 3.0]]);

    let FilterOutcome::Filtered(out) = transform_domain(&view, None, Some(2.0)) else {
        panic!("expected a filtered view");
    };
    let kept: Vec<f64> = out.categories.values.iter().filter_map(|v| v.as_number()).collect();
    assert_eq!(kept, vec![1.0, 2.0]);

    let FilterOutcome::Filtered(out) = transform_domain(&view, Some(2.0), None) else {
        panic!("expected a filtered view");
    };
    let kept: Vec<f64> = out.categories.values.iter().filter_map(|v| v.as_number()).collect();
    assert_eq!(kept, vec![2.0, 3.0]);
}

#[test]
fn both_bounds_unset_is_a_no_op() {
    let view = numeric_view(&[1.0, 2.0], &[&[1.0, 2.0]]);
    assert_eq!(transform_domain(&view, None, None), FilterOutcome::Unchanged);
}

#[test]
fn inverted_range_is_a_no_op() {
    let view = numeric_view(&[1.0, 2.0, 3.0], &[&[1.0, 2.0, 3.0]]);
    assert_eq!(transform_domain(&view, Some(3.0), Some(1.0)), FilterOutcome::Unchanged);
}

#[test]
fn empty_columns_are_a_no_op() {
    let view = numeric_view(&[], &[&[]]);
    assert_eq!(transform_domain(&view, Some(0.0), Some(1.0)), FilterOutcome::Unchanged);

    let view = numeric_view(&[1.0], &[]);
    assert_eq!(transform_domain(&view, Some(0.0), Some(1.0)), FilterOutcome::Unchanged);
}

#[test]
fn missing_objects_are_a_no_op() {
    let mut view = numeric_view(&[1.0, 2.0], &[&[1.0, 2.0]]);
    view.categories.objects = None;
    assert_eq!(transform_domain(&view, Some(1.0), Some(2.0)), FilterOutcome::Unchanged);
}

#[test]
fn ordinal_axis_is_not_applicable() {
    let mut view = numeric_view(&[1.0, 2.0], &[&[1.0, 2.0]]);
    view.categories.kind = CategoryKind::Ordinal;
    assert_eq!(transform_domain(&view, Some(1.0), Some(2.0)), FilterOutcome::NotApplicable);
    assert_eq!(transform_domain(&view, None, Some(5.0)), FilterOutcome::NotApplicable);
}

#[test]
fn refiltering_the_output_is_idempotent() {
    let view = numeric_view(&[1.0, 2.0, 3.0, 4.0], &[&[1.0, 2.0, 3.0, 4.0]]);
    let FilterOutcome::Filtered(once) = transform_domain(&view, Some(2.0), Some(4.0)) else {
        panic!("expected a filtered view");
    };
    match transform_domain(&once, Some(2.0), Some(4.0)) {
        FilterOutcome::Filtered(twice) => assert_eq!(twice, once),
        other => panic!("expected a filtered view, got {other:?}"),
    }
}

#[test]
fn date_categories_compare_by_timestamp() {
    use chrono::NaiveDate;
    let days: Vec<CategoryValue> = (1..=4)
        .map(|d| {
            let date = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
            CategoryValue::Date(date.and_hms_opt(0, 0, 0).unwrap())
        })
        .collect();
    let view = DataView {
        source: None,
        categories: CategoryColumn {
            label: "day".to_string(),
            kind: CategoryKind::DateTime,
            values: days.clone(),
            objects: Some((0..4).map(object_for).collect()),
        },
        values: vec![ValueColumn { label: "v".to_string(), values: vec![1.0, 2.0, 3.0, 4.0] }],
    };
    let lo = days[1].as_number().unwrap();
    let hi = days[2].as_number().unwrap();
    let FilterOutcome::Filtered(out) = transform_domain(&view, Some(lo), Some(hi)) else {
        panic!("expected a filtered view");
    };
    assert_eq!(out.categories.values.len(), 2);
    assert_eq!(out.values[0].values, vec![2.0, 3.0]);
}

#[test]
fn categorical_axis_passes_through_user_min_max() {
    let view = numeric_view(&[1.0, 2.0], &[&[1.0, 2.0]]);
    let range = UserAxisRange { start: Some(1.0), end: Some(2.0) };
    assert_eq!(apply_user_min_max(false, &view, &range), FilterOutcome::Unchanged);
    assert!(matches!(apply_user_min_max(true, &view, &range), FilterOutcome::Filtered(_)));
}
