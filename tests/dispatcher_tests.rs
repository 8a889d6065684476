// SPDX-License-Identifier: MPL-2.0

//! Integration tests for dispatch outcomes
//!
//! The platform resolver and launcher are replaced with scripted
//! implementations so every failure path can be exercised.

use codelens::dispatch::{
    DispatchOutcome, Dispatcher, HandlerInfo, HandlerResolver, LaunchRequest, Notice, UriLauncher,
};
use codelens::errors::{LaunchError, LaunchErrorKind};
use codelens::{Classification, classify};
use std::sync::Mutex;

/// Resolver scripted to report a specific application, or nothing
struct ScriptedResolver {
    app_name: Option<&'static str>,
}

impl HandlerResolver for ScriptedResolver {
    fn resolve(&self, _request: &LaunchRequest) -> HandlerInfo {
        match self.app_name {
            Some(name) => HandlerInfo {
                label: format!("Open with {}", name),
                icon: Some(name.to_lowercase()),
            },
            None => HandlerInfo::generic(),
        }
    }
}

/// What the scripted launcher should do
enum LaunchScript {
    Succeed,
    FailNoHandler,
    FailOther,
}

/// Launcher that follows a script and records every request it receives
struct ScriptedLauncher {
    script: LaunchScript,
    requests: Mutex<Vec<LaunchRequest>>,
}

impl ScriptedLauncher {
    fn new(script: LaunchScript) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn launch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl UriLauncher for &ScriptedLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<(), LaunchError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.script {
            LaunchScript::Succeed => Ok(()),
            LaunchScript::FailNoHandler => Err(LaunchError {
                kind: LaunchErrorKind::NoHandler,
            }),
            LaunchScript::FailOther => Err(LaunchError {
                kind: LaunchErrorKind::Other("spawn failed".to_string()),
            }),
        }
    }
}

fn dispatcher<'a>(
    app_name: Option<&'static str>,
    launcher: &'a ScriptedLauncher,
) -> Dispatcher<ScriptedResolver, &'a ScriptedLauncher> {
    Dispatcher::new(
        ScriptedResolver { app_name },
        launcher,
        vec!["exp".to_string()],
    )
}

#[test]
fn test_url_with_browser_installed_launches() {
    let launcher = ScriptedLauncher::new(LaunchScript::Succeed);
    let outcome = dispatcher(Some("Firefox"), &launcher).dispatch("https://example.com");

    assert_eq!(
        outcome,
        DispatchOutcome::Launched {
            label: "Open with Firefox".to_string(),
        }
    );
    assert_eq!(launcher.launch_count(), 1);
}

#[test]
fn test_magnet_without_client_falls_back_with_notice() {
    let launcher = ScriptedLauncher::new(LaunchScript::FailNoHandler);
    let payload = "magnet:?xt=urn:btih:abc";
    let outcome = dispatcher(None, &launcher).dispatch(payload);

    assert_eq!(classify(payload), Classification::Scheme);
    assert_eq!(
        outcome,
        DispatchOutcome::ShowText {
            payload: payload.to_string(),
            notice: Some(Notice::NoHandlerFound),
        }
    );
}

#[test]
fn test_plain_text_never_touches_launcher() {
    let launcher = ScriptedLauncher::new(LaunchScript::Succeed);
    let outcome = dispatcher(Some("Firefox"), &launcher).dispatch("Hello World");

    assert_eq!(
        outcome,
        DispatchOutcome::ShowText {
            payload: "Hello World".to_string(),
            notice: None,
        }
    );
    assert_eq!(launcher.launch_count(), 0, "no launch attempt for text");
}

#[test]
fn test_other_launch_failure_falls_back_silently() {
    let launcher = ScriptedLauncher::new(LaunchScript::FailOther);
    let outcome = dispatcher(None, &launcher).dispatch("https://example.com");

    assert_eq!(
        outcome,
        DispatchOutcome::ShowText {
            payload: "https://example.com".to_string(),
            notice: None,
        }
    );
}

#[test]
fn test_deep_link_request_carries_browsable_hint() {
    let launcher = ScriptedLauncher::new(LaunchScript::FailNoHandler);
    let payload = "exp://192.168.1.1:8081";
    let outcome = dispatcher(None, &launcher).dispatch(payload);

    let requests = launcher.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].browsable_hint, "exp:// needs the browsable hint");
    assert_eq!(
        outcome,
        DispatchOutcome::ShowText {
            payload: payload.to_string(),
            notice: Some(Notice::NoHandlerFound),
        }
    );
}

#[test]
fn test_repeated_dispatch_is_idempotent() {
    let launcher = ScriptedLauncher::new(LaunchScript::Succeed);
    let d = dispatcher(Some("Firefox"), &launcher);

    let first = d.dispatch("https://example.com");
    let second = d.dispatch("https://example.com");

    assert_eq!(first, second, "same payload yields the same outcome");
    assert_eq!(launcher.launch_count(), 2, "each call launches independently");
}

#[test]
fn test_resolve_keeps_generic_label_without_handler() {
    let launcher = ScriptedLauncher::new(LaunchScript::Succeed);
    let action = dispatcher(None, &launcher).resolve("https://example.com");

    assert_eq!(action.classification, Classification::Url);
    assert_eq!(action.label, "Open link");
    assert!(action.icon.is_none());
    assert!(action.request.is_some());
    assert_eq!(launcher.launch_count(), 0, "resolve is read-only");
}
