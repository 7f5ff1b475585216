//! JSON configuration, recorded corner sets, and report output.

use std::fs;
use std::path::Path;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use screen_align_core::AlignmentParams;

use crate::check::AlignmentReport;

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Input description for one alignment check run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckConfig {
    pub reference_image: String,
    pub test_image: String,
    /// Recorded detector output for the reference capture.
    pub reference_corners: String,
    /// Recorded detector output for the test capture.
    pub test_corners: String,
    #[serde(default)]
    pub params: Option<AlignmentParams>,
    #[serde(default)]
    pub report_path: Option<String>,
}

impl CheckConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Recorded output of an external corner detector for one image.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CornerSetFile {
    /// Image the corners were detected in, informational only.
    #[serde(default)]
    pub image: Option<String>,
    pub rows: usize,
    pub cols: usize,
    /// Corner positions in detector enumeration order.
    pub corners: Vec<[f32; 2]>,
}

impl CornerSetFile {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Corner positions as points, in recorded order.
    pub fn points(&self) -> Vec<Point2<f32>> {
        self.corners.iter().map(|&[x, y]| Point2::new(x, y)).collect()
    }
}

impl AlignmentReport {
    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(feature = "image")]
mod load {
    use std::path::{Path, PathBuf};

    use screen_align_core::{GrayImage, GrayImageView};

    /// Errors loading or saving grayscale captures.
    #[derive(thiserror::Error, Debug)]
    pub enum ImageIoError {
        #[error("could not open image {path}")]
        Open {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("could not decode image {path}")]
        Decode {
            path: PathBuf,
            #[source]
            source: image::ImageError,
        },
        #[error("could not save image {path}")]
        Save {
            path: PathBuf,
            #[source]
            source: image::ImageError,
        },
    }

    /// Load an image from disk and convert it to grayscale.
    pub fn load_gray(path: impl AsRef<Path>) -> Result<GrayImage, ImageIoError> {
        let path = path.as_ref();
        let decoded = image::ImageReader::open(path)
            .map_err(|source| ImageIoError::Open {
                path: path.into(),
                source,
            })?
            .decode()
            .map_err(|source| ImageIoError::Decode {
                path: path.into(),
                source,
            })?;
        Ok(to_gray(&decoded.to_luma8()))
    }

    /// Save a grayscale image; the format follows the file extension.
    pub fn save_gray(img: &GrayImage, path: impl AsRef<Path>) -> Result<(), ImageIoError> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &img.data,
            img.width as u32,
            img.height as u32,
            image::ExtendedColorType::L8,
        )
        .map_err(|source| ImageIoError::Save {
            path: path.into(),
            source,
        })
    }

    /// Copy an `image::GrayImage` into the core owned type.
    pub fn to_gray(img: &image::GrayImage) -> GrayImage {
        GrayImage {
            width: img.width() as usize,
            height: img.height() as usize,
            data: img.as_raw().clone(),
        }
    }

    /// Borrow an `image::GrayImage` as the lightweight core view type.
    pub fn gray_view(img: &image::GrayImage) -> GrayImageView<'_> {
        GrayImageView {
            width: img.width() as usize,
            height: img.height() as usize,
            data: img.as_raw(),
        }
    }
}

#[cfg(feature = "image")]
pub use load::{gray_view, load_gray, save_gray, to_gray, ImageIoError};
