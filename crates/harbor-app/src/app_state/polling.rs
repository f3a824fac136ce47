//! Draining web view events on a fixed interval.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use harbor_webview::{PageLoadState, ShellEvent};

use super::core::{HarborApp, POLL_INTERVAL};

impl HarborApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        let events = match self.manager {
            Some(ref manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::PageLoad { state, url } => match state {
                PageLoadState::Started => tracing::debug!(url = %url, "Page load started"),
                PageLoadState::Finished => {
                    tracing::info!(url = %url, "Page loaded");
                    if let Some(ref mut handle) = self.webview {
                        handle.set_current_url(url);
                    }
                }
            },
            ShellEvent::TitleChanged { title } => {
                if title.trim().is_empty() {
                    return;
                }
                if let Some(ref window) = self.window {
                    window.set_title(&title);
                }
            }
            ShellEvent::IpcMessage { body } => {
                let Some(reply) = self.ipc.handle(&body) else {
                    return;
                };
                if let Some(ref handle) = self.webview {
                    if let Err(e) = handle.send_reply(&reply) {
                        tracing::warn!(kind = %reply.kind, error = %e, "Failed to send IPC reply");
                    }
                }
            }
            ShellEvent::ExternalDispatched { url } => {
                let from = self
                    .webview
                    .as_ref()
                    .map(|handle| handle.current_url())
                    .unwrap_or_default();
                tracing::info!(url = %url, from = %from, "Navigation handed to system handler");
            }
        }
    }
}
