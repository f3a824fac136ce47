//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::HarborApp;

impl ApplicationHandler for HarborApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.startup_error.is_some() {
            return;
        }

        if let Err(e) = self.initialize(event_loop) {
            tracing::error!("Initialization failed: {e}");
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds(size);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl HarborApp {
    /// Keep the view covering the whole window.
    fn sync_webview_bounds(&self, size: PhysicalSize<u32>) {
        let Some(ref handle) = self.webview else {
            return;
        };
        let bounds = wry::Rect {
            position: wry::dpi::PhysicalPosition::new(0, 0).into(),
            size: wry::dpi::PhysicalSize::new(size.width, size.height).into(),
        };
        if let Err(e) = handle.set_bounds(bounds) {
            tracing::warn!(error = %e, "Failed to resize WebView");
        }
    }

    /// Drop the view before the window that hosts it.
    fn shutdown(&mut self) {
        tracing::info!("Shutting down");
        self.webview = None;
        self.manager = None;
        self.window = None;
    }
}
