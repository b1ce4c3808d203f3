// File: crates/mekko-core/src/lib.rs
// Summary: Core library entry point; exports the mekko data-domain and scene utilities.

pub mod types;
pub mod geometry;
pub mod math;
pub mod dataview;
pub mod series;
pub mod domain;
pub mod filter;
pub mod scale;
pub mod scene;
pub mod interact;
pub mod draw;
pub mod theme;

pub use dataview::{CategoryColumn, CategoryKind, CategoryValue, DataView, ObjectProps, PropertyValue, ValueColumn};
pub use domain::calc_value_domain;
pub use draw::{draw_columns, draw_series, AxisOptions};
pub use filter::{apply_user_min_max, transform_domain, FilterOutcome, UserAxisRange};
pub use interact::{apply_interactivity, closest_column_index, fill_opacity, set_chosen_column_opacity};
pub use scale::{diff_scaled, get_size, is_ordinal, mekko_column_layout, AxisScale, ColumnLayout, LinearScale};
pub use scene::{ColumnShape, DragStart, DragStartHandler, Scene, SeriesGroup, Transition};
pub use series::{ColumnDataPoint, Series};
pub use theme::Theme;
pub use types::{Insets, Rgba, ValueRange};
