use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::image::GrayImageView;

/// Mean intensity and visibility of one edge strip.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EdgeStatus {
    /// Mean luminance of the strip, 0 (black) to 255 (white).
    pub intensity: f32,
    pub visible: bool,
}

/// Border visibility for the four edges of a capture.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BorderStatus {
    pub top: EdgeStatus,
    pub bottom: EdgeStatus,
    pub left: EdgeStatus,
    pub right: EdgeStatus,
    pub has_borders: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum BorderError {
    #[error("{strip_px}px edge strips do not fit a {width}x{height} image")]
    ImageTooSmall {
        strip_px: usize,
        width: usize,
        height: usize,
    },
}

/// Measure letterbox/pillarbox darkness along the four edges of `image`.
///
/// Top and bottom strips span the full width, left and right strips the full
/// height (the corners belong to two strips each). A strip whose mean
/// luminance falls below `threshold` counts as a visible border. Opposite
/// strips must not meet: `2 * strip_px` has to stay below the smaller image
/// dimension.
pub fn detect_borders(
    image: &GrayImageView<'_>,
    strip_px: usize,
    threshold: f32,
) -> Result<BorderStatus, BorderError> {
    if strip_px == 0 || 2 * strip_px >= image.width.min(image.height) {
        return Err(BorderError::ImageTooSmall {
            strip_px,
            width: image.width,
            height: image.height,
        });
    }

    let edge = |intensity: f32| EdgeStatus {
        intensity,
        visible: intensity < threshold,
    };

    let top = edge(strip_mean(image, 0..strip_px, 0..image.width));
    let bottom = edge(strip_mean(
        image,
        image.height - strip_px..image.height,
        0..image.width,
    ));
    let left = edge(strip_mean(image, 0..image.height, 0..strip_px));
    let right = edge(strip_mean(
        image,
        0..image.height,
        image.width - strip_px..image.width,
    ));

    Ok(BorderStatus {
        top,
        bottom,
        left,
        right,
        has_borders: top.visible || bottom.visible || left.visible || right.visible,
    })
}

fn strip_mean(image: &GrayImageView<'_>, ys: Range<usize>, xs: Range<usize>) -> f32 {
    let mut sum: u64 = 0;
    let mut count: u64 = 0;
    for y in ys {
        let row = &image.row(y)[xs.clone()];
        sum += row.iter().map(|&p| u64::from(p)).sum::<u64>();
        count += row.len() as u64;
    }
    sum as f32 / count as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImage;

    #[test]
    fn bright_frame_has_no_borders() {
        let img = GrayImage::filled(100, 80, 200);
        let status = detect_borders(&img.view(), 20, 30.0).unwrap();
        assert!(!status.has_borders);
        assert_eq!(status.top.intensity, 200.0);
        assert!(!status.left.visible);
    }

    #[test]
    fn dark_top_strip_is_a_visible_border() {
        let mut img = GrayImage::filled(100, 80, 200);
        img.fill_rect(0, 0, 100, 20, 10);
        let status = detect_borders(&img.view(), 20, 30.0).unwrap();
        assert!(status.top.visible);
        assert_eq!(status.top.intensity, 10.0);
        assert!(status.has_borders);
        // The side strips overlap the dark rows but stay mostly bright.
        assert!(!status.left.visible);
        assert!(!status.bottom.visible);
    }

    #[test]
    fn dark_side_strips_flag_pillarboxing() {
        let mut img = GrayImage::filled(120, 90, 180);
        img.fill_rect(0, 0, 20, 90, 5);
        img.fill_rect(100, 0, 20, 90, 5);
        let status = detect_borders(&img.view(), 20, 30.0).unwrap();
        assert!(status.left.visible && status.right.visible);
        assert!(!status.top.visible && !status.bottom.visible);
        assert!(status.has_borders);
    }

    #[test]
    fn oversized_strips_are_rejected() {
        let img = GrayImage::filled(30, 30, 128);
        let err = detect_borders(&img.view(), 20, 30.0).unwrap_err();
        assert!(matches!(err, BorderError::ImageTooSmall { strip_px: 20, .. }));

        let err = detect_borders(&img.view(), 15, 30.0).unwrap_err();
        assert!(matches!(err, BorderError::ImageTooSmall { .. }));
    }

    #[test]
    fn zero_strip_is_rejected() {
        let img = GrayImage::filled(30, 30, 128);
        assert!(detect_borders(&img.view(), 0, 30.0).is_err());
    }
}
