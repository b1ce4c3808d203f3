// File: crates/mekko-render-skia/src/lib.rs
// Summary: Skia renderer: draws a bound scene (grid, axes, columns, labels) to PNG.

mod text;

pub use text::TextShaper;

use skia_safe as skia;
use thiserror::Error;

use mekko_core::draw::AxisOptions;
use mekko_core::math::linspace;
use mekko_core::scene::Scene;
use mekko_core::theme::Theme;
use mekko_core::types::{Insets, Rgba, HEIGHT, WIDTH};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    SurfaceCreation,
    #[error("PNG encode failed")]
    PngEncode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
            theme: Theme::dark(),
        }
    }
}

fn to_skia(color: Rgba) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Render the scene to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(
        &self,
        scene: &Scene,
        axis_options: &AxisOptions,
        category_labels: &[String],
        opts: &RenderOptions,
    ) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::SurfaceCreation)?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(to_skia(opts.theme.background));

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom, &opts.theme);
        draw_axis_lines(canvas, plot_left, plot_top, plot_right, plot_bottom, &opts.theme);
        draw_scene_columns(canvas, scene, &opts.theme);

        if opts.draw_labels {
            self.draw_category_labels(canvas, axis_options, category_labels, plot_bottom, &opts.theme);
        }

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        axis_options: &AxisOptions,
        category_labels: &[String],
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(scene, axis_options, category_labels, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_category_labels(
        &self,
        canvas: &skia::Canvas,
        axis_options: &AxisOptions,
        labels: &[String],
        plot_bottom: i32,
        theme: &Theme,
    ) {
        for (i, label) in labels.iter().enumerate().take(axis_options.columns.len()) {
            let cx = axis_options.columns.center(i) as f32;
            self.shaper.draw_centered(
                canvas,
                label,
                cx,
                plot_bottom as f32 + 22.0,
                12.0,
                to_skia(theme.axis_label),
            );
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(theme.grid));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // horizontals only; column edges play the vertical role in a mekko
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(theme.axis_line));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &paint);
}

fn draw_scene_columns(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    // segment separators use the background color
    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(to_skia(theme.background));

    for group in &scene.groups {
        for column in &group.columns {
            if column.rect.width() <= 0.0 || column.rect.height() <= 0.0 {
                continue;
            }
            fill.set_color(to_skia(column.fill.with_opacity(column.opacity)));
            let rect = skia::Rect::from_ltrb(
                column.rect.left,
                column.rect.top,
                column.rect.right,
                column.rect.bottom,
            );
            canvas.draw_rect(rect, &fill);
            canvas.draw_rect(rect, &edge);
        }
    }
}
