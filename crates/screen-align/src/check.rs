use std::fmt;

use log::{debug, info};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use screen_align_core::{
    compare, detect_borders, evaluate, pattern_metrics, AlignmentParams, AlignmentVerdict,
    BorderError, BorderStatus, DifferenceResult, GrayImageView, ImageBounds, MetricsError,
    PatternGrid, PatternGridError, PatternMetrics,
};

use crate::detect::CornerDetector;

/// Which capture of a reference/test pair an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureRole {
    Reference,
    Test,
}

impl fmt::Display for CaptureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CaptureRole::Reference => "reference",
            CaptureRole::Test => "test",
        })
    }
}

/// Errors aborting an alignment check. No partial results are produced.
#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("checkerboard pattern not found in {0} capture")]
    PatternNotFound(CaptureRole),
    #[error("{role} capture: {source}")]
    Grid {
        role: CaptureRole,
        source: PatternGridError,
    },
    #[error("{role} capture: {source}")]
    Metrics {
        role: CaptureRole,
        source: MetricsError,
    },
    #[error(transparent)]
    Border(#[from] BorderError),
}

/// Everything one alignment run produced, reference side first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub reference: PatternMetrics,
    pub test: PatternMetrics,
    pub differences: DifferenceResult,
    pub borders: BorderStatus,
    pub verdict: AlignmentVerdict,
}

/// Reference-vs-test alignment pipeline with fixed parameters.
///
/// Stateless apart from the parameters; each call owns its inputs and
/// recomputes everything from scratch.
pub struct AlignmentChecker {
    params: AlignmentParams,
}

impl AlignmentChecker {
    pub fn new(params: AlignmentParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &AlignmentParams {
        &self.params
    }

    /// Run the full check on pre-detected corner lists.
    ///
    /// Corners may arrive in any enumeration order the detector produced;
    /// both lists are canonicalized here. Border detection runs on the test
    /// capture only.
    pub fn check_corners(
        &self,
        reference: &GrayImageView<'_>,
        reference_corners: Vec<Point2<f32>>,
        test: &GrayImageView<'_>,
        test_corners: Vec<Point2<f32>>,
    ) -> Result<AlignmentReport, CheckError> {
        let ref_grid = self.canonical_grid(CaptureRole::Reference, reference_corners)?;
        let test_grid = self.canonical_grid(CaptureRole::Test, test_corners)?;

        let ref_metrics = self.metrics(CaptureRole::Reference, &ref_grid, reference)?;
        let test_metrics = self.metrics(CaptureRole::Test, &test_grid, test)?;

        let differences = compare(&ref_grid, &test_grid, &ref_metrics, &test_metrics);
        debug!(
            "differences: horizontal {:.3} vertical {:.3} rotation {:.2} deg",
            differences.horizontal_difference,
            differences.vertical_difference,
            differences.rotation_error_deg
        );

        let borders = detect_borders(
            test,
            self.params.border_strip_px,
            self.params.border_intensity_threshold,
        )?;

        let verdict = evaluate(&differences, &borders, &self.params);
        info!(
            "alignment check: {}",
            if verdict.is_aligned { "PASS" } else { "FAIL" }
        );

        Ok(AlignmentReport {
            reference: ref_metrics,
            test: test_metrics,
            differences,
            borders,
            verdict,
        })
    }

    /// Detect corners in both captures, then run the full check.
    pub fn check_with_detector(
        &self,
        reference: &GrayImageView<'_>,
        test: &GrayImageView<'_>,
        detector: &dyn CornerDetector,
    ) -> Result<AlignmentReport, CheckError> {
        let (rows, cols) = (self.params.pattern_rows, self.params.pattern_cols);
        let reference_corners = detector
            .detect_corners(reference, rows, cols)
            .ok_or(CheckError::PatternNotFound(CaptureRole::Reference))?;
        let test_corners = detector
            .detect_corners(test, rows, cols)
            .ok_or(CheckError::PatternNotFound(CaptureRole::Test))?;
        self.check_corners(reference, reference_corners, test, test_corners)
    }

    fn canonical_grid(
        &self,
        role: CaptureRole,
        corners: Vec<Point2<f32>>,
    ) -> Result<PatternGrid, CheckError> {
        PatternGrid::canonicalize(corners, self.params.pattern_rows, self.params.pattern_cols)
            .map_err(|source| CheckError::Grid { role, source })
    }

    fn metrics(
        &self,
        role: CaptureRole,
        grid: &PatternGrid,
        image: &GrayImageView<'_>,
    ) -> Result<PatternMetrics, CheckError> {
        pattern_metrics(grid, ImageBounds::of(image))
            .map_err(|source| CheckError::Metrics { role, source })
    }
}
