use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ShellEvent};
use crate::router::NavigationRouter;

use super::WebViewManager;

// =============================================================================
// NAVIGATION
// =============================================================================

/// Navigation hook body. Returns wry's polarity: `true` lets the view load the URL.
///
/// The router answers "handled, don't navigate", so the result is inverted here
/// and nowhere else.
pub fn allow_navigation(
    router: &NavigationRouter,
    events: &Mutex<Vec<ShellEvent>>,
    url: String,
) -> bool {
    if router.should_override(&url) {
        if let Ok(mut evts) = events.lock() {
            evts.push(ShellEvent::ExternalDispatched { url });
        }
        return false;
    }
    true
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        router: NavigationRouter,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| allow_navigation(&router, &events, url))
    }

    /// `target="_blank"` and `window.open`: never open a second view.
    /// External URLs still reach the host.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        router: NavigationRouter,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            if allow_navigation(&router, &events, url.clone()) {
                debug!(url = %url, "new window for local content suppressed");
            }
            false
        })
    }

    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellEvent::IpcMessage { body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellEvent::TitleChanged { title });
            }
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;
    use crate::host::ViewIntent;
    use harbor_common::MatchPolicy;

    fn setup() -> (NavigationRouter, Arc<RecordingHost>, Mutex<Vec<ShellEvent>>) {
        let host = Arc::new(RecordingHost::default());
        let router = NavigationRouter::new(host.clone(), MatchPolicy::Substring);
        (router, host, Mutex::new(Vec::new()))
    }

    #[test]
    fn startup_entry_loads_without_dispatch() {
        let (router, host, events) = setup();
        assert!(allow_navigation(
            &router,
            &events,
            "file:///android_asset/index.html".into()
        ));
        assert_eq!(host.count(), 0);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn external_link_is_handed_off_and_blocked() {
        let (router, host, events) = setup();
        assert!(!allow_navigation(
            &router,
            &events,
            "https://example.com".into()
        ));
        assert_eq!(host.intents(), vec![ViewIntent::new("https://example.com")]);
        assert_eq!(
            *events.lock().unwrap(),
            vec![ShellEvent::ExternalDispatched {
                url: "https://example.com".into()
            }]
        );
    }

    #[test]
    fn second_local_page_navigates_in_view() {
        let (router, host, events) = setup();
        assert!(allow_navigation(
            &router,
            &events,
            "file:///android_asset/page2.html".into()
        ));
        assert_eq!(host.count(), 0);
    }

    #[test]
    fn mixed_sequence_dispatches_only_external() {
        let (router, host, events) = setup();
        let urls = [
            "file:///android_asset/index.html",
            "https://example.com",
            "file:///android_asset/page2.html",
            "https://example.com",
        ];
        let allowed: Vec<bool> = urls
            .iter()
            .map(|u| allow_navigation(&router, &events, u.to_string()))
            .collect();
        assert_eq!(allowed, [true, false, true, false]);
        assert_eq!(host.count(), 2);
        assert_eq!(events.lock().unwrap().len(), 2);
    }
}
