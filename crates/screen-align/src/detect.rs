use nalgebra::Point2;
use screen_align_core::GrayImageView;

/// Source of detected checkerboard interior corners.
///
/// Implementations return the `rows * cols` corners in detector enumeration
/// order — no orientation guarantee, canonicalization happens downstream —
/// with sub-pixel refinement already applied. `None` means the pattern was
/// not found in the image.
pub trait CornerDetector {
    fn detect_corners(
        &self,
        image: &GrayImageView<'_>,
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Point2<f32>>>;
}

/// Replays a recorded corner list, e.g. one loaded from a
/// [`CornerSetFile`](crate::CornerSetFile).
///
/// Reports not-found when the recorded count does not match the requested
/// grid size.
#[derive(Clone, Debug)]
pub struct StoredCorners(pub Vec<Point2<f32>>);

impl CornerDetector for StoredCorners {
    fn detect_corners(
        &self,
        _image: &GrayImageView<'_>,
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Point2<f32>>> {
        (self.0.len() == rows * cols).then(|| self.0.clone())
    }
}
