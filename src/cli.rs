// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for scan and dispatch operations
//!
//! This module provides command-line functionality for:
//! - Decoding QR codes from image files
//! - Dispatching payloads (open a handler, or print the text fallback)
//! - Inspecting classification, configuration and cached capabilities
//!
//! Fallback text goes to stdout so it can be piped into a clipboard tool;
//! notices and status go to stderr.

use codelens::capability::CapabilitySnapshot;
use codelens::dispatch::{DispatchOutcome, Dispatcher};
use codelens::scanner::{ImageScanner, ScanAttempt, ScanSource};
use codelens::{Config, classify};
use std::path::PathBuf;

/// Decode QR codes from an image, optionally dispatching the first one
pub fn scan_image(image: PathBuf, open: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let scanner = ImageScanner::new(image).with_max_dimension(config.scan_max_dimension);

    if open {
        return match scanner.try_scan() {
            ScanAttempt::Decoded(payload) => dispatch_payload(&payload),
            ScanAttempt::Unavailable => Err("No QR code found in image".into()),
            ScanAttempt::Cancelled => Ok(()),
        };
    }

    // Decoding is CPU-bound; run it the way the app does, off the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let payloads = runtime.block_on(scanner.detect())?;

    if payloads.is_empty() {
        eprintln!("No QR codes found.");
        return Ok(());
    }

    for payload in &payloads {
        println!("[{}] {}", classify(payload), payload);
    }

    Ok(())
}

/// Run the full classify -> resolve -> launch sequence for a payload
pub fn dispatch_payload(payload: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let dispatcher = Dispatcher::system(&config);

    let outcome = dispatcher.dispatch(payload);
    let rendered = render_outcome(payload, &outcome, config.close_on_launch);

    if let Some(status) = rendered.status {
        eprintln!("{}", status);
    }
    if let Some(text) = rendered.text {
        println!("{}", text);
    }

    Ok(())
}

/// What one dispatch outcome puts on the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
struct RenderedOutcome {
    /// Status or notice line (stderr)
    status: Option<String>,
    /// Payload text to keep available for copying (stdout)
    text: Option<String>,
}

/// Map a dispatch outcome to terminal output
///
/// After a successful launch the payload is normally dropped (the scan
/// surface closes); with `close_on_launch` off it stays on stdout so the
/// user can still copy it.
fn render_outcome(payload: &str, outcome: &DispatchOutcome, close_on_launch: bool) -> RenderedOutcome {
    match outcome {
        DispatchOutcome::Launched { label } => RenderedOutcome {
            status: Some(label.clone()),
            text: (!close_on_launch).then(|| payload.to_string()),
        },
        DispatchOutcome::ShowText { payload, notice } => RenderedOutcome {
            status: notice.map(|n| n.message().to_string()),
            text: Some(payload.clone()),
        },
    }
}

/// Show classification and the resolved handler without launching
pub fn classify_payload(payload: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let dispatcher = Dispatcher::system(&config);
    let action = dispatcher.resolve(payload);

    println!("Classification: {}", action.classification);
    println!("Action:         {}", action.label);
    if let Some(icon) = &action.icon {
        println!("Icon:           {}", icon);
    }
    if let Some(request) = &action.request {
        println!("URI:            {}", request.uri);
        if request.browsable_hint {
            println!("Hint:           browsable");
        }
    }

    Ok(())
}

/// Print the effective configuration, or write the default config file
pub fn show_config(init: bool) -> Result<(), Box<dyn std::error::Error>> {
    if init {
        let config = Config::default();
        config.save()?;
        match Config::default_path() {
            Some(path) => eprintln!("Wrote {}", path.display()),
            None => eprintln!("Wrote default configuration"),
        }
        return Ok(());
    }

    let config = Config::load();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Print the cached capability snapshot
pub fn show_capabilities(refresh: bool) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = if refresh {
        let snapshot = CapabilitySnapshot::probe();
        if let Some(path) = CapabilitySnapshot::cache_path() {
            snapshot.save_to(&path)?;
        }
        snapshot
    } else {
        CapabilitySnapshot::load_or_probe()
    };

    println!("Handler registry: {}", available(snapshot.handler_registry));
    println!("URI launcher:     {}", available(snapshot.uri_launcher));
    println!("OS:               {}", snapshot.os);
    println!("Runtime:          {}", snapshot.runtime);
    println!("Checked at:       {}", snapshot.checked_at.to_rfc3339());

    Ok(())
}

fn available(yes: bool) -> &'static str {
    if yes { "available" } else { "missing" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codelens::dispatch::Notice;

    #[test]
    fn test_render_launched_drops_payload_when_closing() {
        let outcome = DispatchOutcome::Launched {
            label: "Open with Firefox".to_string(),
        };
        let rendered = render_outcome("https://example.com", &outcome, true);
        assert_eq!(rendered.status.as_deref(), Some("Open with Firefox"));
        assert_eq!(rendered.text, None);
    }

    #[test]
    fn test_render_launched_keeps_payload_when_staying_open() {
        let outcome = DispatchOutcome::Launched {
            label: "Open link".to_string(),
        };
        let rendered = render_outcome("https://example.com", &outcome, false);
        assert_eq!(rendered.text.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_render_fallback_with_notice() {
        let outcome = DispatchOutcome::ShowText {
            payload: "magnet:?xt=urn:btih:abc".to_string(),
            notice: Some(Notice::NoHandlerFound),
        };
        let rendered = render_outcome("magnet:?xt=urn:btih:abc", &outcome, true);
        assert_eq!(
            rendered.status.as_deref(),
            Some("No application can open this link")
        );
        assert_eq!(rendered.text.as_deref(), Some("magnet:?xt=urn:btih:abc"));
    }

    #[test]
    fn test_render_plain_text_has_no_status() {
        let outcome = DispatchOutcome::ShowText {
            payload: "Hello World".to_string(),
            notice: None,
        };
        let rendered = render_outcome("Hello World", &outcome, true);
        assert_eq!(rendered.status, None);
        assert_eq!(rendered.text.as_deref(), Some("Hello World"));
    }
}
