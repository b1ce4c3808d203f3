// File: crates/demo/src/main.rs
// Summary: Demo loads a category/series CSV, applies a user range filter, and renders a mekko PNG.

use anyhow::{Context, Result};
use mekko_core::dataview::{
    CategoryColumn, CategoryKind, CategoryValue, DataView, ObjectProps, PropertyValue, ValueColumn,
};
use mekko_core::scale::mekko_column_layout;
use mekko_core::theme;
use mekko_core::{
    apply_interactivity, apply_user_min_max, calc_value_domain, closest_column_index,
    draw_columns, draw_series, set_chosen_column_opacity, AxisOptions, DragStart, FilterOutcome,
    LinearScale, Scene, Series, UserAxisRange,
};
use mekko_render_skia::{RenderOptions, SkiaRenderer};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    // Accept path from CLI or fall back to sample filename; optional min/max
    // and theme name follow
    let raw = std::env::args().nth(1).unwrap_or_else(|| "market_share.csv".to_string());
    let user_min = std::env::args().nth(2).and_then(|s| s.parse::<f64>().ok());
    let user_max = std::env::args().nth(3).and_then(|s| s.parse::<f64>().ok());
    let theme_name = std::env::args().nth(4).unwrap_or_else(|| "dark".to_string());

    let path = Path::new(&raw).to_path_buf();
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let view = load_view_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!(
        "Loaded {} categories x {} series",
        view.categories.values.len(),
        view.values.len()
    );

    // User-selected range (applies on a scalar category axis only)
    let range = UserAxisRange { start: user_min, end: user_max };
    let view = match apply_user_min_max(true, &view, &range) {
        FilterOutcome::Filtered(filtered) => {
            println!(
                "Filtered to {} categories in [{:?}, {:?}]",
                filtered.categories.values.len(),
                range.start,
                range.end
            );
            filtered
        }
        FilterOutcome::NotApplicable => {
            println!("Category axis is ordinal; range arguments ignored.");
            view
        }
        FilterOutcome::Unchanged => view,
    };
    if view.categories.values.is_empty() {
        anyhow::bail!("no categories left to draw");
    }

    // Stack series (100% mode) and derive the value domain
    let theme = theme::find(&theme_name);
    let series = Series::stack_columns(&view, &theme.series, true);
    let domain = calc_value_domain(&series, true);
    println!("Value domain: [{:.4}, {:.4}]", domain.min, domain.max);

    // Column layout and value scale
    let opts = RenderOptions { theme, ..Default::default() };
    let plot_left = opts.insets.left as f64;
    let plot_width = (opts.width - opts.insets.hsum() as i32) as f64;
    let axis = AxisOptions {
        columns: mekko_column_layout(&view.category_totals(), plot_left, plot_width),
        value_scale: LinearScale::new(
            (opts.height - opts.insets.bottom as i32) as f64,
            opts.insets.top as f64,
            domain.min,
            domain.max,
        ),
    };

    // Bind the scene
    let mut scene = Scene::new();
    draw_series(&series, &mut scene, &axis);
    for (group, s) in scene.groups.iter_mut().zip(&series) {
        draw_columns(group, s, &axis);
    }

    // Emphasize the column nearest the plot midline, like a hover would
    let centers = axis.columns.centers();
    let chosen = closest_column_index(plot_left + plot_width * 0.5, &centers);
    set_chosen_column_opacity(&mut scene, chosen, None);
    println!("Chosen column index: {chosen}");

    apply_interactivity(
        &mut scene,
        Some(Box::new(|e: DragStart| {
            log::debug!("drag start on category {}", e.category_index);
        })),
    );
    scene.emit_drag_start(DragStart { category_index: chosen });

    let labels: Vec<String> = view.categories.values.iter().map(category_label).collect();
    let out = out_name(&path);
    let renderer = SkiaRenderer::new();
    renderer.render_to_png(&scene, &axis, &labels, &opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Load a CSV whose first column is the category and whose remaining columns
/// are one series each.
fn load_view_csv(path: &Path) -> Result<DataView> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);
    if headers.len() < 2 {
        anyhow::bail!("need a category column and at least one series column");
    }

    let mut category_values = Vec::new();
    let mut objects = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len() - 1];
    let mut all_numeric = true;

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let cat = rec.get(0).map(str::trim).unwrap_or("");
        match cat.parse::<f64>() {
            Ok(v) => category_values.push(CategoryValue::Number(v)),
            Err(_) => {
                all_numeric = false;
                category_values.push(CategoryValue::Text(cat.to_string()));
            }
        }
        let mut props = ObjectProps::new();
        props.insert("row".to_string(), PropertyValue::Number(row as f64));
        objects.push(props);

        for (c, column) in columns.iter_mut().enumerate() {
            let v = rec
                .get(c + 1)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(0.0);
            column.push(v);
        }
    }

    let kind = if all_numeric { CategoryKind::Numeric } else { CategoryKind::Ordinal };
    Ok(DataView {
        source: path.file_stem().and_then(|s| s.to_str()).map(|s| s.to_string()),
        categories: CategoryColumn {
            label: headers[0].clone(),
            kind,
            values: category_values,
            objects: Some(objects),
        },
        values: headers
            .iter()
            .skip(1)
            .cloned()
            .zip(columns)
            .map(|(label, values)| ValueColumn { label, values })
            .collect(),
    })
}

fn category_label(value: &CategoryValue) -> String {
    match value {
        CategoryValue::Number(v) => format!("{v}"),
        CategoryValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        CategoryValue::Text(s) => s.clone(),
    }
}

/// Produce output file name like target/out/mekko_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("mekko_{stem}.png"))
}
