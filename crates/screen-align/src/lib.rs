//! Checkerboard alignment checking for camera/projector calibration.
//!
//! A reference capture of a projected checkerboard is compared against a
//! test capture: translation offset, rotation (keystoning), scale mismatch,
//! and visible letterbox/pillarbox borders each get a pass/fail verdict.
//! Corner detection is pluggable via [`CornerDetector`]; the geometry lives
//! in [`screen_align_core`], re-exported here as [`core`].
//!
//! ## Quickstart
//!
//! ```
//! use nalgebra::Point2;
//! use screen_align::core::{render_checkerboard, AlignmentParams};
//! use screen_align::AlignmentChecker;
//!
//! let board = render_checkerboard(7, 7, 40);
//! // Interior corners of the rendered board, row-major.
//! let corners: Vec<Point2<f32>> = (1..=7)
//!     .flat_map(|r| (1..=7).map(move |c| Point2::new((c * 40) as f32, (r * 40) as f32)))
//!     .collect();
//!
//! let checker = AlignmentChecker::new(AlignmentParams::default());
//! let report = checker
//!     .check_corners(&board.view(), corners.clone(), &board.view(), corners)
//!     .expect("check");
//! assert!(report.verdict.is_aligned);
//! ```

pub use screen_align_core as core;

mod check;
mod detect;
mod io;

pub use check::{AlignmentChecker, AlignmentReport, CaptureRole, CheckError};
pub use detect::{CornerDetector, StoredCorners};
pub use io::{CheckConfig, CornerSetFile, IoError};

#[cfg(feature = "image")]
pub use io::{gray_view, load_gray, save_gray, to_gray, ImageIoError};

pub use screen_align_core::{
    AlignmentParams, AlignmentVerdict, BorderStatus, DifferenceResult, PatternGrid, PatternMetrics,
};
