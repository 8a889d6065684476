// SPDX-License-Identifier: MPL-2.0

//! QR code decoding from still images
//!
//! Loads an image file, converts it to grayscale and searches for QR
//! codes with rqrr. Images above the configured max dimension are
//! downscaled first; codes are typically large enough to survive that
//! and decoding gets substantially faster.

use crate::errors::ScanError;
use crate::scanner::{ScanAttempt, ScanSource};
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// QR decoder for still-image files
pub struct ImageScanner {
    path: PathBuf,
    /// Maximum dimension for processing (larger images are downscaled)
    max_dimension: u32,
}

impl ImageScanner {
    /// Create a scanner for an image file with the default max dimension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_dimension: crate::constants::scan::DEFAULT_MAX_DIMENSION,
        }
    }

    /// Override the max processing dimension
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Decode all QR codes in the image
    ///
    /// Runs the CPU-intensive work in a blocking task to avoid stalling
    /// the async runtime. Identical payloads appearing more than once in
    /// the same image are reported once.
    pub async fn detect(&self) -> Result<Vec<String>, ScanError> {
        let path = self.path.clone();
        let max_dimension = self.max_dimension;

        tokio::task::spawn_blocking(move || detect_sync(&path, max_dimension))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "QR detection task panicked");
                Err(ScanError::DecodeFailed(e.to_string()))
            })
    }
}

impl ScanSource for ImageScanner {
    fn try_scan(&self) -> ScanAttempt {
        match detect_sync(&self.path, self.max_dimension) {
            Ok(payloads) => match payloads.into_iter().next() {
                Some(payload) => ScanAttempt::Decoded(payload),
                None => ScanAttempt::Unavailable,
            },
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Scan attempt failed");
                ScanAttempt::Unavailable
            }
        }
    }
}

/// Synchronous QR detection (runs in a blocking task)
fn detect_sync(path: &Path, max_dimension: u32) -> Result<Vec<String>, ScanError> {
    let start = std::time::Instant::now();

    let img = image::open(path).map_err(|e| ScanError::ImageLoad(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    let img = if width > max_dimension || height > max_dimension {
        trace!(width, height, max_dimension, "Downscaling for decode");
        img.resize(max_dimension, max_dimension, FilterType::Triangle)
    } else {
        img
    };

    let mut prepared = rqrr::PreparedImage::prepare(img.to_luma8());
    let grids = prepared.detect_grids();

    let mut payloads = Vec::with_capacity(grids.len());
    for grid in grids {
        match grid.decode() {
            Ok((_meta, content)) => {
                // Duplicate detections of the same code collapse to one
                if !payloads.contains(&content) {
                    payloads.push(content);
                }
            }
            Err(e) => {
                debug!(error = %e, "Failed to decode QR grid");
            }
        }
    }

    debug!(
        path = %path.display(),
        count = payloads.len(),
        total_ms = start.elapsed().as_millis(),
        "QR detection complete"
    );

    Ok(payloads)
}
