// File: crates/mekko-core/src/domain.rs
// Summary: Value-domain computation for stacked columns.

use crate::math::round_to_precision;
use crate::series::Series;
use crate::types::{ValueRange, DEFAULT_VALUE_DOMAIN, PCT_ROUNDING_PRECISION};

/// Compute the min/max value domain over all stacked segments.
///
/// The minimum is the lowest segment base (`position - value_absolute`), the
/// maximum the highest segment top. An empty collection yields the default
/// `{0, 10}` range. In 100% mode both bounds are rounded to the nearest
/// 0.0001 to absorb normalization error.
pub fn calc_value_domain(series: &[Series], is_100_pct: bool) -> ValueRange {
    if series.is_empty() {
        return DEFAULT_VALUE_DOMAIN;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for p in &s.data {
            min = min.min(p.position - p.value_absolute);
            max = max.max(p.position);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return DEFAULT_VALUE_DOMAIN;
    }
    if is_100_pct {
        min = round_to_precision(min, PCT_ROUNDING_PRECISION);
        max = round_to_precision(max, PCT_ROUNDING_PRECISION);
    }
    ValueRange { min, max }
}
