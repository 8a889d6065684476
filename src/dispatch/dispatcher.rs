// SPDX-License-Identifier: MPL-2.0

//! Scan-result dispatch
//!
//! Ties classification, handler resolution and launch invocation together:
//! given a raw decoded payload, decide link vs. text, resolve who would
//! open it, attempt the launch, and fall back to a text outcome when the
//! launch fails. Every path resolves into a [`DispatchOutcome`]; no error
//! escapes to the caller.
//!
//! Each dispatch call is independent and stateless. Suppressing duplicate
//! dispatches for the same payload (e.g. the same code decoded from two
//! consecutive frames) is the caller's responsibility.

use crate::config::Config;
use crate::constants::labels;
use crate::dispatch::classifier::{classify, scheme_of};
use crate::dispatch::launcher::{LaunchRequest, SystemLauncher, UriLauncher};
use crate::dispatch::resolver::{HandlerResolver, XdgResolver};
use crate::dispatch::types::{DispatchOutcome, Notice, ResolvedAction};
use tracing::{debug, info, warn};

/// Scan-result dispatcher
///
/// Explicitly constructed with its resolver and launcher; no process-wide
/// state. [`Dispatcher::system`] wires up the platform implementations.
pub struct Dispatcher<R: HandlerResolver, L: UriLauncher> {
    resolver: R,
    launcher: L,
    browsable_hint_schemes: Vec<String>,
}

impl Dispatcher<XdgResolver, SystemLauncher> {
    /// Dispatcher backed by the platform registry and URI opener
    pub fn system(config: &Config) -> Self {
        Self::new(
            XdgResolver,
            SystemLauncher,
            config.browsable_hint_schemes.clone(),
        )
    }
}

impl<R: HandlerResolver, L: UriLauncher> Dispatcher<R, L> {
    pub fn new(resolver: R, launcher: L, browsable_hint_schemes: Vec<String>) -> Self {
        Self {
            resolver,
            launcher,
            browsable_hint_schemes,
        }
    }

    /// Resolve a payload into actionable display data without launching
    pub fn resolve(&self, payload: &str) -> ResolvedAction {
        let classification = classify(payload);

        if !classification.is_link() {
            return ResolvedAction {
                raw_value: payload.to_string(),
                classification,
                label: labels::COPY_TEXT.to_string(),
                icon: None,
                request: None,
            };
        }

        let request = self.build_request(payload);
        let info = self.resolver.resolve(&request);

        ResolvedAction {
            raw_value: payload.to_string(),
            classification,
            label: info.label,
            icon: info.icon,
            request: Some(request),
        }
    }

    /// Run the full classify → resolve → launch sequence
    pub fn dispatch(&self, payload: &str) -> DispatchOutcome {
        let action = self.resolve(payload);

        let Some(request) = &action.request else {
            debug!(classification = %action.classification, "Plain text, no launch attempted");
            return DispatchOutcome::ShowText {
                payload: action.raw_value,
                notice: None,
            };
        };

        match self.launcher.launch(request) {
            Ok(()) => {
                info!(uri = %request.uri, label = %action.label, "Launched handler");
                DispatchOutcome::Launched {
                    label: action.label,
                }
            }
            Err(err) if err.is_no_handler() => {
                warn!(uri = %request.uri, "No handler, falling back to text");
                DispatchOutcome::ShowText {
                    payload: action.raw_value,
                    notice: Some(Notice::NoHandlerFound),
                }
            }
            Err(err) => {
                // Best effort: fall back silently, same surface as plain text
                debug!(uri = %request.uri, error = %err, "Launch failed, falling back to text");
                DispatchOutcome::ShowText {
                    payload: action.raw_value,
                    notice: None,
                }
            }
        }
    }

    /// Build the launch request for a link payload, applying the browsable
    /// hint for configured deep-link schemes
    fn build_request(&self, payload: &str) -> LaunchRequest {
        let hint = scheme_of(payload).is_some_and(|scheme| {
            self.browsable_hint_schemes
                .iter()
                .any(|s| s.eq_ignore_ascii_case(scheme))
        });
        LaunchRequest::new(payload).with_browsable_hint(hint)
    }
}
