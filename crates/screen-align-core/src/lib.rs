//! Geometric alignment checks for projected checkerboard captures.
//!
//! Given the interior corners of a checkerboard test pattern detected in a
//! reference capture and in a test capture, this crate normalizes corner
//! order ([`PatternGrid::canonicalize`]), measures where each pattern sits in
//! its frame ([`pattern_metrics`]), compares the two ([`compare`]), inspects
//! the test frame for letterbox/pillarbox borders ([`detect_borders`]), and
//! folds everything into a pass/fail verdict ([`evaluate`]).
//!
//! The crate is purely geometric. It does *not* depend on any concrete
//! corner detector or image codec; corners arrive as plain point lists and
//! images as row-major luminance buffers.

mod border;
mod difference;
mod grid;
mod image;
mod logger;
mod metrics;
mod params;
mod pattern;
mod verdict;

pub use border::{detect_borders, BorderError, BorderStatus, EdgeStatus};
pub use difference::{compare, DifferenceResult};
pub use grid::{ImageBounds, PatternGrid, PatternGridError};
pub use image::{GrayImage, GrayImageView};
pub use metrics::{pattern_metrics, Axis, MetricsError, PatternMetrics};
pub use params::AlignmentParams;
pub use pattern::render_checkerboard;
pub use verdict::{evaluate, AlignmentVerdict};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;
