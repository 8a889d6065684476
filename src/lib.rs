// SPDX-License-Identifier: MPL-2.0

//! codelens - QR scan-result classification and dispatch
//!
//! This library takes raw decoded barcode payloads and turns them into
//! actions: classify (URL / custom scheme / plain text), resolve which
//! installed application would open a link, launch it, and fall back to
//! a copyable text surface when nothing can.
//!
//! # Architecture
//!
//! - [`dispatch`]: classification, handler resolution and launch dispatch
//! - [`scanner`]: barcode acquisition sources (still-image decoding)
//! - [`capability`]: platform-capability probe and cache
//! - [`config`]: user configuration handling
//!
//! # Example
//!
//! ```no_run
//! use codelens::{Config, Dispatcher};
//!
//! let config = Config::load();
//! let dispatcher = Dispatcher::system(&config);
//! let outcome = dispatcher.dispatch("https://example.com");
//! assert!(outcome.launched());
//! ```

pub mod capability;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod scanner;

// Re-export commonly used types
pub use capability::CapabilitySnapshot;
pub use config::Config;
pub use dispatch::{
    Classification, DispatchOutcome, Dispatcher, Notice, ResolvedAction, classify,
};
pub use errors::{AppError, AppResult};
pub use scanner::{ImageScanner, ScanAttempt, ScanSource};
