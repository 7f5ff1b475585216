use serde::{Deserialize, Serialize};

use crate::border::BorderStatus;
use crate::difference::DifferenceResult;
use crate::params::AlignmentParams;

/// Per-tolerance alignment decision plus the aggregate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AlignmentVerdict {
    pub is_horizontal_aligned: bool,
    pub is_vertical_aligned: bool,
    pub is_rotation_aligned: bool,
    pub is_scale_aligned: bool,
    pub no_screen_borders: bool,
    /// Conjunction of the five checks above.
    pub is_aligned: bool,
}

/// Fold differences and border status into a verdict under `params`.
///
/// Every check is evaluated and reported; the aggregate never hides which
/// individual check failed.
pub fn evaluate(
    diff: &DifferenceResult,
    borders: &BorderStatus,
    params: &AlignmentParams,
) -> AlignmentVerdict {
    let is_horizontal_aligned = diff.horizontal_difference <= params.max_position_ratio_difference;
    let is_vertical_aligned = diff.vertical_difference <= params.max_position_ratio_difference;
    let is_rotation_aligned = diff.rotation_error_deg <= params.max_rotation_error_deg;
    let is_scale_aligned = diff.width_ratio_difference <= params.max_scale_difference
        && diff.height_ratio_difference <= params.max_scale_difference;
    let no_screen_borders = !borders.has_borders;

    AlignmentVerdict {
        is_horizontal_aligned,
        is_vertical_aligned,
        is_rotation_aligned,
        is_scale_aligned,
        no_screen_borders,
        is_aligned: is_horizontal_aligned
            && is_vertical_aligned
            && is_rotation_aligned
            && is_scale_aligned
            && no_screen_borders,
    }
}
