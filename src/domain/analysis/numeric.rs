//! NaN-propagating reductions.
//!
//! `f64::max`/`f64::min` silently drop NaN operands. The ranking pipeline
//! must let degenerate values flow through, so extrema are computed here
//! with NaN winning over any number.

pub(crate) fn nan_max<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(f64::NEG_INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else if v > acc {
            v
        } else {
            acc
        }
    })
}

pub(crate) fn nan_min<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(f64::INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else if v < acc {
            v
        } else {
            acc
        }
    })
}

/// Values of column `j` across all rows.
pub(crate) fn column(rows: &[Vec<f64>], j: usize) -> impl Iterator<Item = f64> + '_ {
    rows.iter().filter_map(move |row| row.get(j).copied())
}
