// SPDX-License-Identifier: MPL-2.0

//! Value types produced by the dispatch path
//!
//! These are derived, read-only values: created per scan event, consumed
//! by the presentation layer, never mutated.

use crate::dispatch::classifier::Classification;
use crate::dispatch::launcher::LaunchRequest;

/// A scan payload resolved into actionable data
///
/// Classification is a pure function of the raw value; label and icon may
/// vary with the set of installed handler applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    /// Raw decoded text from the scan
    pub raw_value: String,
    /// Bucket assigned to the payload
    pub classification: Classification,
    /// Human-readable action label ("Open with Firefox", "Open link", ...)
    pub label: String,
    /// Icon name of the resolved handler, when a specific one resolved
    pub icon: Option<String>,
    /// Launch request for link payloads; absent for plain text
    pub request: Option<LaunchRequest>,
}

/// Transient user-facing notice attached to a fallback outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The platform reported that nothing can open the link
    NoHandlerFound,
}

impl Notice {
    /// Message to surface to the user
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoHandlerFound => crate::constants::labels::NO_HANDLER_NOTICE,
        }
    }
}

/// Result of one dispatch call
///
/// Every failure path resolves into one of these; nothing escapes the
/// dispatcher as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler was invoked; the caller may close the scanning surface
    Launched {
        /// Label of the action that was launched
        label: String,
    },
    /// Show the raw text with a copy action
    ///
    /// Used for plain-text payloads and as the fallback after a failed
    /// launch. A notice is attached only for the no-handler failure.
    ShowText {
        payload: String,
        notice: Option<Notice>,
    },
}

impl DispatchOutcome {
    /// True when a handler application was launched
    pub fn launched(&self) -> bool {
        matches!(self, DispatchOutcome::Launched { .. })
    }
}
