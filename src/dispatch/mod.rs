// SPDX-License-Identifier: MPL-2.0

//! Scan-result classification and dispatch
//!
//! The core of the application: given a raw decoded string, decide
//! whether it is a URL/custom-scheme or plain text, resolve which
//! installed application would handle it, attempt the launch, and define
//! the text fallback when no handler exists.
//!
//! - [`classifier`]: pure payload classification (URL / SCHEME / TEXT)
//! - [`resolver`]: read-only handler lookup against the platform registry
//! - [`launcher`]: launch-request construction and invocation
//! - [`dispatcher`]: the classify → resolve → launch sequence with
//!   defined fallback outcomes

pub mod classifier;
pub mod dispatcher;
pub mod launcher;
pub mod resolver;
pub mod types;

pub use classifier::{Classification, classify};
pub use dispatcher::Dispatcher;
pub use launcher::{LaunchRequest, SystemLauncher, UriLauncher};
pub use resolver::{HandlerInfo, HandlerResolver, XdgResolver};
pub use types::{DispatchOutcome, Notice, ResolvedAction};
