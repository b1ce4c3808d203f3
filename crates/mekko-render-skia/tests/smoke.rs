// File: crates/mekko-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use mekko_core::dataview::{CategoryColumn, CategoryKind, CategoryValue, DataView, ValueColumn};
use mekko_core::scale::mekko_column_layout;
use mekko_core::theme::Theme;
use mekko_core::{calc_value_domain, draw_columns, draw_series, AxisOptions, LinearScale, Scene, Series};
use mekko_render_skia::{RenderOptions, SkiaRenderer};

fn sample_view() -> DataView {
    DataView {
        source: Some("smoke".to_string()),
        categories: CategoryColumn {
            label: "region".to_string(),
            kind: CategoryKind::Numeric,
            values: (0..4).map(|i| CategoryValue::Number(i as f64)).collect(),
            objects: Some(vec![Default::default(); 4]),
        },
        values: vec![
            ValueColumn { label: "a".to_string(), values: vec![2.0, 4.0, 1.0, 3.0] },
            ValueColumn { label: "b".to_string(), values: vec![1.0, 2.0, 2.0, 1.0] },
        ],
    }
}

#[test]
fn render_smoke_png() {
    let view = sample_view();
    let theme = Theme::dark();
    let series = Series::stack_columns(&view, &theme.series, true);
    let domain = calc_value_domain(&series, true);

    let opts = RenderOptions { draw_labels: false, ..Default::default() };
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

    let mut scene = Scene::new();
    draw_series(&series, &mut scene, &axis);
    for (group, s) in scene.groups.iter_mut().zip(&series) {
        draw_columns(group, s, &axis);
    }

    let renderer = SkiaRenderer::new();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    renderer
        .render_to_png(&scene, &axis, &[], &opts, &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API works
    let bytes = renderer
        .render_to_png_bytes(&scene, &axis, &[], &opts)
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
