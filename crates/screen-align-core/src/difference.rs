use serde::{Deserialize, Serialize};

use crate::grid::PatternGrid;
use crate::metrics::PatternMetrics;

/// Metric deltas between a reference and a test capture.
///
/// All fields are non-negative. `rotation_error_deg` is the folded top-row
/// angle difference; it is not renormalized, so values above 180° can occur
/// when the two angles straddle the ±180° cut.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DifferenceResult {
    pub horizontal_difference: f32,
    pub vertical_difference: f32,
    pub width_ratio_difference: f32,
    pub height_ratio_difference: f32,
    pub rotation_error_deg: f32,
}

/// Compare two canonical grids and their frame metrics.
///
/// Rotation is measured between the top-row vectors of the two grids. When
/// the test vector is steeper than 45° its components are swapped first, so a
/// capture whose canonical top edge still runs near-vertically is measured
/// against the horizontal axis like the reference. The reference vector is
/// never swapped.
pub fn compare(
    ref_grid: &PatternGrid,
    test_grid: &PatternGrid,
    ref_metrics: &PatternMetrics,
    test_metrics: &PatternMetrics,
) -> DifferenceResult {
    let rv = ref_grid.top_row_vector();
    let tv = test_grid.top_row_vector();

    let (test_dx, test_dy) = if tv.y.abs() > tv.x.abs() {
        (tv.y, tv.x)
    } else {
        (tv.x, tv.y)
    };

    let ref_angle = rv.y.atan2(rv.x);
    let test_angle = test_dy.atan2(test_dx);
    let rotation_error_deg = (ref_angle - test_angle).abs().to_degrees();

    DifferenceResult {
        horizontal_difference: (ref_metrics.horizontal_ratio - test_metrics.horizontal_ratio)
            .abs(),
        vertical_difference: (ref_metrics.vertical_ratio - test_metrics.vertical_ratio).abs(),
        width_ratio_difference: (ref_metrics.width_ratio - test_metrics.width_ratio).abs(),
        height_ratio_difference: (ref_metrics.height_ratio - test_metrics.height_ratio).abs(),
        rotation_error_deg,
    }
}
