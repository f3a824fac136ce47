//! Hand-off of external URLs to the host platform.

use tracing::{debug, warn};

/// A generic "view this resource" request addressed to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewIntent {
    /// The URL exactly as the page requested it.
    pub uri: String,
}

impl ViewIntent {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// The surrounding shell, as seen by the navigation router.
///
/// Dispatch is fire-and-forget: implementations must not report failure
/// back to the caller.
pub trait HostContext: Send + Sync {
    fn dispatch(&self, intent: ViewIntent);
}

/// Opens URLs with the operating system's default handler
/// (browser, mail client, map app, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostContext for SystemHost {
    fn dispatch(&self, intent: ViewIntent) {
        debug!(uri = %intent.uri, "dispatching to system URL handler");
        if let Err(e) = open::that_detached(&intent.uri) {
            warn!(uri = %intent.uri, error = %e, "no handler could open URL");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{HostContext, ViewIntent};

    /// Records every dispatched intent instead of launching anything.
    #[derive(Default)]
    pub(crate) struct RecordingHost {
        intents: Mutex<Vec<ViewIntent>>,
    }

    impl RecordingHost {
        pub(crate) fn intents(&self) -> Vec<ViewIntent> {
            self.intents.lock().unwrap().clone()
        }

        pub(crate) fn count(&self) -> usize {
            self.intents.lock().unwrap().len()
        }
    }

    impl HostContext for RecordingHost {
        fn dispatch(&self, intent: ViewIntent) {
            self.intents.lock().unwrap().push(intent);
        }
    }
}
