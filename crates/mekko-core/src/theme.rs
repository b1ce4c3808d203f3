// File: crates/mekko-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Rgba;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    /// Categorical palette, cycled per series.
    pub series: Vec<Rgba>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Rgba::from_argb(255, 40, 40, 45),
            axis_line: Rgba::from_argb(255, 180, 180, 190),
            axis_label: Rgba::from_argb(255, 235, 235, 245),
            series: vec![
                Rgba::from_argb(255, 64, 160, 255),
                Rgba::from_argb(255, 40, 200, 120),
                Rgba::from_argb(255, 255, 170, 60),
                Rgba::from_argb(255, 220, 80, 80),
                Rgba::from_argb(255, 170, 110, 255),
                Rgba::from_argb(255, 42, 161, 152),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 250, 250, 252),
            grid: Rgba::from_argb(255, 230, 230, 235),
            axis_line: Rgba::from_argb(255, 60, 60, 70),
            axis_label: Rgba::from_argb(255, 20, 20, 30),
            series: vec![
                Rgba::from_argb(255, 32, 120, 200),
                Rgba::from_argb(255, 20, 160, 90),
                Rgba::from_argb(255, 230, 140, 30),
                Rgba::from_argb(255, 200, 60, 60),
                Rgba::from_argb(255, 130, 80, 220),
                Rgba::from_argb(255, 0, 130, 125),
            ],
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
