// SPDX-License-Identifier: MPL-2.0

//! Barcode acquisition sources
//!
//! A [`ScanSource`] is the injected capability that produces one decoded
//! payload per scan event. The dispatch path never depends on a concrete
//! source; camera pipelines, cloud scanners and the still-image decoder
//! in [`image`] all sit behind the same seam.

pub mod image;

pub use self::image::ImageScanner;

/// Result of one scan attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAttempt {
    /// A payload was decoded
    Decoded(String),
    /// The source cannot currently produce a scan
    Unavailable,
    /// The user cancelled the scan
    Cancelled,
}

/// Capability seam for producing scan payloads
pub trait ScanSource {
    /// Attempt one scan, yielding at most one payload
    fn try_scan(&self) -> ScanAttempt;
}
