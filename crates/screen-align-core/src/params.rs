use serde::{Deserialize, Serialize};

/// Board geometry and tolerances for one alignment run.
///
/// Threaded explicitly through every call; nothing here is global state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AlignmentParams {
    /// Interior-corner rows of the checkerboard.
    #[serde(default = "default_pattern_dim")]
    pub pattern_rows: usize,
    /// Interior-corner columns of the checkerboard.
    #[serde(default = "default_pattern_dim")]
    pub pattern_cols: usize,
    /// Maximum top-row rotation difference, degrees.
    #[serde(default = "default_max_rotation_error_deg")]
    pub max_rotation_error_deg: f32,
    /// Maximum width/height ratio difference.
    #[serde(default = "default_max_scale_difference")]
    pub max_scale_difference: f32,
    /// Maximum centering-ratio difference per axis.
    #[serde(default = "default_max_position_ratio_difference")]
    pub max_position_ratio_difference: f32,
    /// Width of the edge strips inspected for screen borders, pixels.
    #[serde(default = "default_border_strip_px")]
    pub border_strip_px: usize,
    /// Luminance below which an edge strip counts as a border, 0-255.
    #[serde(default = "default_border_intensity_threshold")]
    pub border_intensity_threshold: f32,
}

fn default_pattern_dim() -> usize {
    7
}

fn default_max_rotation_error_deg() -> f32 {
    5.0
}

fn default_max_scale_difference() -> f32 {
    0.1
}

fn default_max_position_ratio_difference() -> f32 {
    0.1
}

fn default_border_strip_px() -> usize {
    20
}

fn default_border_intensity_threshold() -> f32 {
    30.0
}

impl Default for AlignmentParams {
    fn default() -> Self {
        Self::for_board(default_pattern_dim(), default_pattern_dim())
    }
}

impl AlignmentParams {
    /// Default tolerances for a board with the given interior-corner counts.
    pub fn for_board(pattern_rows: usize, pattern_cols: usize) -> Self {
        Self {
            pattern_rows,
            pattern_cols,
            max_rotation_error_deg: default_max_rotation_error_deg(),
            max_scale_difference: default_max_scale_difference(),
            max_position_ratio_difference: default_max_position_ratio_difference(),
            border_strip_px: default_border_strip_px(),
            border_intensity_threshold: default_border_intensity_threshold(),
        }
    }
}
