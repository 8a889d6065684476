// SPDX-License-Identifier: MPL-2.0

//! Launch-request construction and invocation
//!
//! The launcher is the one side-effecting seam in the dispatch path: at
//! most one "open this URI" invocation per dispatch call. The system
//! implementation hands the URI to the desktop via the `open` crate;
//! tests substitute their own [`UriLauncher`].
//!
//! The desktop launcher reports success as soon as it spawns, not when
//! a handler actually opened the URI, so [`SystemLauncher`] consults the
//! handler registry before invoking it and runs the invocation blocking,
//! treating a nonzero launcher exit as "no handler found".

use crate::dispatch::classifier::scheme_of;
use crate::dispatch::resolver::{self, RegistryLookup};
use crate::errors::{LaunchError, LaunchErrorKind};
use tracing::{debug, error};

/// A launch request targeting a payload as a URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// The URI to open
    pub uri: String,
    /// Disambiguation hint for deep-link schemes: prefer a browser-capable
    /// handler over an unrelated default
    pub browsable_hint: bool,
}

impl LaunchRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            browsable_hint: false,
        }
    }

    pub fn with_browsable_hint(mut self, hint: bool) -> Self {
        self.browsable_hint = hint;
        self
    }
}

/// Capability seam for invoking launch requests
pub trait UriLauncher {
    /// Attempt to open the request's URI with an installed handler
    fn launch(&self, request: &LaunchRequest) -> Result<(), LaunchError>;
}

/// Launcher backed by the desktop's URI opener
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl UriLauncher for SystemLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<(), LaunchError> {
        debug!(
            uri = %request.uri,
            browsable_hint = request.browsable_hint,
            "Invoking launch request"
        );

        // Check the registry first: spawning the launcher succeeds even
        // when nothing is registered for the scheme
        if let Some(scheme) = scheme_of(&request.uri) {
            match resolver::registry_lookup(scheme) {
                RegistryLookup::Handler(_) => {}
                RegistryLookup::NoHandler => return launch_unregistered(request),
                // Registry not queryable; the launcher exit status decides
                RegistryLookup::Unavailable => {}
            }
        }

        map_open_result(&request.uri, open::that(&request.uri))
    }
}

/// Launch a URI whose scheme has no registered handler
///
/// Browsable-hinted deep links go to the default browser so they are not
/// swallowed by an unrelated default; everything else is a handler miss.
fn launch_unregistered(request: &LaunchRequest) -> Result<(), LaunchError> {
    if request.browsable_hint {
        if let Some(browser) = resolver::default_browser_command() {
            debug!(
                uri = %request.uri,
                browser = %browser,
                "Routing deep link to the default browser"
            );
            return map_open_result(&request.uri, open::with(&request.uri, &browser));
        }
    }

    error!(uri = %request.uri, "No handler found for URI");
    Err(LaunchError {
        kind: LaunchErrorKind::NoHandler,
    })
}

/// Interpret the platform launcher's result
///
/// `NotFound` means the launcher binary itself is missing; a reported
/// launcher failure (nonzero exit after a successful spawn) means it ran
/// and nothing could open the URI. Only spawn-level failures such as
/// permission denials count as "other".
fn map_open_result(uri: &str, result: std::io::Result<()>) -> Result<(), LaunchError> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            error!(uri = %uri, "No handler found for URI");
            Err(LaunchError {
                kind: LaunchErrorKind::NoHandler,
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::Other => {
            error!(uri = %uri, error = %err, "Launcher reported failure");
            Err(LaunchError {
                kind: LaunchErrorKind::NoHandler,
            })
        }
        Err(err) => {
            error!(uri = %uri, error = %err, "Failed to invoke launcher");
            Err(LaunchError {
                kind: LaunchErrorKind::Other(err.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_launch_request_builder() {
        let request = LaunchRequest::new("exp://192.168.1.1:8081").with_browsable_hint(true);
        assert_eq!(request.uri, "exp://192.168.1.1:8081");
        assert!(request.browsable_hint);

        let plain = LaunchRequest::new("https://example.com");
        assert!(!plain.browsable_hint);
    }

    #[test]
    fn test_map_success() {
        assert!(map_open_result("https://example.com", Ok(())).is_ok());
    }

    #[test]
    fn test_map_missing_launcher_to_no_handler() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        let result = map_open_result("magnet:?xt=abc", Err(err));
        assert!(result.unwrap_err().is_no_handler());
    }

    #[test]
    fn test_map_nonzero_launcher_exit_to_no_handler() {
        // The launcher spawns fine, then exits nonzero because nothing is
        // registered for the scheme; that must not count as a launch
        let err = io::Error::new(
            io::ErrorKind::Other,
            "Launcher xdg-open failed with exit status: 3",
        );
        let result = map_open_result("magnet:?xt=abc", Err(err));
        assert!(result.unwrap_err().is_no_handler());
    }

    #[test]
    fn test_map_spawn_denial_to_other_failure() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let result = map_open_result("https://example.com", Err(err));
        let launch_err = result.unwrap_err();
        assert!(!launch_err.is_no_handler());
        assert!(matches!(launch_err.kind, LaunchErrorKind::Other(_)));
    }

    #[test]
    fn test_unregistered_without_hint_is_no_handler() {
        // No browsable hint: the miss is reported without spawning anything
        let request = LaunchRequest::new("magnet:?xt=urn:btih:abc");
        let result = launch_unregistered(&request);
        assert!(result.unwrap_err().is_no_handler());
    }
}
