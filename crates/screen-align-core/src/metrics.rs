use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::{ImageBounds, PatternGrid};

/// Frame axis, used to report which centering ratio is undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("pattern touches both {axis} frame edges; centering ratio is undefined")]
    DegenerateSpan { axis: Axis },
}

/// Position and scale of a canonical pattern relative to its frame.
///
/// Distances are in pixels; ratios are dimensionless. `horizontal_ratio` and
/// `vertical_ratio` express centering bias: 0.5 means centered, values toward
/// 0 or 1 mean the pattern sits near the low or high edge.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PatternMetrics {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub left_distance: f32,
    pub right_distance: f32,
    pub top_distance: f32,
    pub bottom_distance: f32,
    pub pattern_width: f32,
    pub pattern_height: f32,
    pub width_ratio: f32,
    pub height_ratio: f32,
    pub horizontal_ratio: f32,
    pub vertical_ratio: f32,
}

/// Measure where a canonical grid sits in its frame.
///
/// The bounding box is taken over every grid point, not just the outer row
/// and column, so bowed or keystoned patterns are measured by their true
/// extent.
pub fn pattern_metrics(
    grid: &PatternGrid,
    bounds: ImageBounds,
) -> Result<PatternMetrics, MetricsError> {
    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for p in grid.points() {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let width = bounds.width as f32;
    let height = bounds.height as f32;

    let left_distance = min_x;
    let right_distance = width - max_x;
    let top_distance = min_y;
    let bottom_distance = height - max_y;

    let h_span = left_distance + right_distance;
    if h_span == 0.0 {
        return Err(MetricsError::DegenerateSpan {
            axis: Axis::Horizontal,
        });
    }
    let v_span = top_distance + bottom_distance;
    if v_span == 0.0 {
        return Err(MetricsError::DegenerateSpan {
            axis: Axis::Vertical,
        });
    }

    let pattern_width = max_x - min_x;
    let pattern_height = max_y - min_y;

    Ok(PatternMetrics {
        min_x,
        max_x,
        min_y,
        max_y,
        left_distance,
        right_distance,
        top_distance,
        bottom_distance,
        pattern_width,
        pattern_height,
        width_ratio: pattern_width / width,
        height_ratio: pattern_height / height,
        horizontal_ratio: left_distance / h_span,
        vertical_ratio: top_distance / v_span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn grid_spanning(x0: f32, x1: f32, y0: f32, y1: f32, rows: usize, cols: usize) -> PatternGrid {
        let points: Vec<Point2<f32>> = (0..rows)
            .flat_map(|r| {
                (0..cols).map(move |c| {
                    Point2::new(
                        x0 + (x1 - x0) * c as f32 / (cols - 1) as f32,
                        y0 + (y1 - y0) * r as f32 / (rows - 1) as f32,
                    )
                })
            })
            .collect();
        PatternGrid::canonicalize(points, rows, cols).unwrap()
    }

    #[test]
    fn centered_pattern_in_600x400_frame() {
        let grid = grid_spanning(100.0, 500.0, 50.0, 350.0, 7, 7);
        let bounds = ImageBounds {
            width: 600,
            height: 400,
        };
        let m = pattern_metrics(&grid, bounds).unwrap();
        assert_relative_eq!(m.pattern_width, 400.0);
        assert_relative_eq!(m.pattern_height, 300.0);
        assert_relative_eq!(m.width_ratio, 400.0 / 600.0, epsilon = 1e-5);
        assert_relative_eq!(m.height_ratio, 0.75, epsilon = 1e-5);
        assert_relative_eq!(m.horizontal_ratio, 0.5, epsilon = 1e-5);
        assert_relative_eq!(m.vertical_ratio, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn centering_ratios_are_complementary() {
        let grid = grid_spanning(30.0, 410.0, 20.0, 350.0, 5, 6);
        let bounds = ImageBounds {
            width: 640,
            height: 480,
        };
        let m = pattern_metrics(&grid, bounds).unwrap();
        let right_ratio = m.right_distance / (m.left_distance + m.right_distance);
        assert_relative_eq!(m.horizontal_ratio + right_ratio, 1.0, epsilon = 1e-6);
        let bottom_ratio = m.bottom_distance / (m.top_distance + m.bottom_distance);
        assert_relative_eq!(m.vertical_ratio + bottom_ratio, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn full_width_span_is_degenerate() {
        let grid = grid_spanning(0.0, 600.0, 50.0, 350.0, 7, 7);
        let bounds = ImageBounds {
            width: 600,
            height: 400,
        };
        let err = pattern_metrics(&grid, bounds).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::DegenerateSpan {
                axis: Axis::Horizontal
            }
        ));
    }

    #[test]
    fn full_height_span_is_degenerate() {
        let grid = grid_spanning(10.0, 600.0, 0.0, 400.0, 7, 7);
        let bounds = ImageBounds {
            width: 640,
            height: 400,
        };
        let err = pattern_metrics(&grid, bounds).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::DegenerateSpan {
                axis: Axis::Vertical
            }
        ));
    }
}
