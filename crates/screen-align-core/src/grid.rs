use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::image::GrayImageView;

/// Pixel dimensions of the capture a pattern was detected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBounds {
    pub width: u32,
    pub height: u32,
}

impl ImageBounds {
    /// Bounds of a grayscale view.
    pub fn of(view: &GrayImageView<'_>) -> Self {
        Self {
            width: view.width as u32,
            height: view.height as u32,
        }
    }
}

/// Errors building a canonical corner grid.
#[derive(thiserror::Error, Debug)]
pub enum PatternGridError {
    #[error("a {rows}x{cols} grid has no corners")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("{got} corners do not fill a {rows}x{cols} grid")]
    CornerCountMismatch { rows: usize, cols: usize, got: usize },
}

/// Checkerboard interior corners in canonical order: rows top to bottom,
/// each row left to right.
///
/// The raw detector gives no guarantee about its starting corner or its
/// row/column direction, so [`PatternGrid::canonicalize`] re-reads the flat
/// list until the top-row vector points rightwards. Every downstream metric
/// assumes this order; comparing grids that were not canonicalized the same
/// way corrupts all of them.
#[derive(Clone, Debug, Serialize)]
pub struct PatternGrid {
    rows: usize,
    cols: usize,
    points: Vec<Point2<f32>>,
}

impl PatternGrid {
    /// Build a canonical grid from corners in detector enumeration order.
    ///
    /// Two corrections are applied, in this order:
    /// 1. if the putative top row runs more vertically than horizontally,
    ///    the flat list is re-read transposed (a column-major or 90°-rotated
    ///    enumeration; `rows` and `cols` swap);
    /// 2. if the top row then runs right to left, every row is reversed
    ///    individually.
    ///
    /// Canonical input comes back unchanged.
    pub fn canonicalize(
        points: Vec<Point2<f32>>,
        rows: usize,
        cols: usize,
    ) -> Result<Self, PatternGridError> {
        if rows == 0 || cols == 0 {
            return Err(PatternGridError::EmptyGrid { rows, cols });
        }
        if points.len() != rows * cols {
            return Err(PatternGridError::CornerCountMismatch {
                rows,
                cols,
                got: points.len(),
            });
        }

        let (mut points, rows, cols) = {
            let delta = points[cols - 1] - points[0];
            if delta.y.abs() > delta.x.abs() {
                log::debug!(
                    "top row runs vertically (dx={:.1}, dy={:.1}); transposing grid",
                    delta.x,
                    delta.y
                );
                (transposed(&points, rows, cols), cols, rows)
            } else {
                (points, rows, cols)
            }
        };

        if points[0].x > points[cols - 1].x {
            log::debug!("top row runs right to left; mirroring rows");
            for row in points.chunks_mut(cols) {
                row.reverse();
            }
        }

        Ok(Self { rows, cols, points })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All corners, row-major.
    #[inline]
    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }

    /// Corner at row `r`, column `c`.
    #[inline]
    pub fn point(&self, r: usize, c: usize) -> Point2<f32> {
        self.points[r * self.cols + c]
    }

    /// The canonical top row.
    #[inline]
    pub fn top_row(&self) -> &[Point2<f32>] {
        &self.points[..self.cols]
    }

    /// Displacement from the first to the last corner of the top row.
    #[inline]
    pub fn top_row_vector(&self) -> Vector2<f32> {
        self.points[self.cols - 1] - self.points[0]
    }
}

/// Re-read a row-major `rows x cols` list as its transpose (`cols x rows`).
fn transposed(points: &[Point2<f32>], rows: usize, cols: usize) -> Vec<Point2<f32>> {
    let mut out = Vec::with_capacity(points.len());
    for r in 0..cols {
        for c in 0..rows {
            out.push(points[c * cols + r]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Row-major fixture grid with corner `(r, c)` at `(10c, 10r)`.
    fn fixture(rows: usize, cols: usize) -> Vec<Point2<f32>> {
        (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Point2::new(10.0 * c as f32, 10.0 * r as f32)))
            .collect()
    }

    #[test]
    fn canonical_input_is_unchanged() {
        let points = fixture(3, 3);
        let grid = PatternGrid::canonicalize(points.clone(), 3, 3).unwrap();
        assert_eq!(grid.points(), points.as_slice());
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let first = PatternGrid::canonicalize(fixture(3, 3), 3, 3).unwrap();
        let second = PatternGrid::canonicalize(first.points().to_vec(), 3, 3).unwrap();
        assert_eq!(first.points(), second.points());
    }

    #[test]
    fn column_major_enumeration_is_transposed() {
        // Columns enumerated one after another, each top to bottom.
        let by_columns: Vec<Point2<f32>> = (0..3)
            .flat_map(|c| (0..3).map(move |r| Point2::new(10.0 * c as f32, 10.0 * r as f32)))
            .collect();
        let grid = PatternGrid::canonicalize(by_columns, 3, 3).unwrap();
        assert_eq!(grid.points(), fixture(3, 3).as_slice());
    }

    #[test]
    fn right_to_left_rows_are_mirrored() {
        let mirrored: Vec<Point2<f32>> = (0..3)
            .flat_map(|r| (0..3).rev().map(move |c| Point2::new(10.0 * c as f32, 10.0 * r as f32)))
            .collect();
        let grid = PatternGrid::canonicalize(mirrored, 3, 3).unwrap();
        assert_eq!(grid.points(), fixture(3, 3).as_slice());
    }

    #[test]
    fn transposed_and_mirrored_enumeration_is_recovered() {
        // Columns right to left, each top to bottom.
        let input: Vec<Point2<f32>> = (0..3)
            .rev()
            .flat_map(|c| (0..3).map(move |r| Point2::new(10.0 * c as f32, 10.0 * r as f32)))
            .collect();
        let grid = PatternGrid::canonicalize(input, 3, 3).unwrap();
        assert_eq!(grid.points(), fixture(3, 3).as_slice());
    }

    #[test]
    fn transpose_swaps_rows_and_cols() {
        // A 2x3 board enumerated column by column arrives as a 3x2 reading.
        let by_columns: Vec<Point2<f32>> = (0..3)
            .flat_map(|c| (0..2).map(move |r| Point2::new(10.0 * c as f32, 10.0 * r as f32)))
            .collect();
        let grid = PatternGrid::canonicalize(by_columns, 3, 2).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.points(), fixture(2, 3).as_slice());
    }

    #[test]
    fn corner_count_must_match() {
        let err = PatternGrid::canonicalize(fixture(3, 3), 4, 4).unwrap_err();
        assert!(matches!(
            err,
            PatternGridError::CornerCountMismatch { got: 9, .. }
        ));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let err = PatternGrid::canonicalize(Vec::new(), 0, 3).unwrap_err();
        assert!(matches!(err, PatternGridError::EmptyGrid { .. }));
    }

    #[test]
    fn top_row_vector_spans_the_row() {
        let grid = PatternGrid::canonicalize(fixture(3, 4), 3, 4).unwrap();
        assert_eq!(grid.top_row().len(), 4);
        assert_eq!(grid.top_row_vector(), Vector2::new(30.0, 0.0));
    }
}
