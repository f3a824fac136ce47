//! Navigation routing for the embedded view.
//!
//! Every navigation the page attempts is classified as either part of the
//! bundled application (the view loads it itself) or external (the URL is
//! handed to the host and the view stays where it is).

use std::sync::Arc;

use harbor_common::MatchPolicy;
use tracing::debug;

use crate::host::{HostContext, ViewIntent};

/// Marker for the bundled-assets scheme under [`MatchPolicy::Substring`].
pub const LOCAL_SCHEME_MARKER: &str = "file://";

/// A single navigation attempt originating inside the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: String,
}

impl NavigationRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Bundled content: the view performs the navigation.
    Local,
    /// Handed to the host: the view must not navigate.
    External,
}

impl RoutingDecision {
    pub fn navigates_in_view(self) -> bool {
        matches!(self, Self::Local)
    }
}

/// Classify a URL. Pure: no I/O, no state.
///
/// No validation is done; an empty or malformed URL simply fails to
/// match the local rule and is treated as external.
pub fn classify(url: &str, policy: MatchPolicy) -> RoutingDecision {
    let local = match policy {
        MatchPolicy::Substring => url.contains(LOCAL_SCHEME_MARKER),
        MatchPolicy::Scheme => url::Url::parse(url)
            .map(|u| u.scheme() == "file")
            .unwrap_or(false),
    };

    if local {
        RoutingDecision::Local
    } else {
        RoutingDecision::External
    }
}

/// Applies the routing policy and performs the external hand-off.
///
/// Holds the host for its whole lifetime; the host is never swapped.
#[derive(Clone)]
pub struct NavigationRouter {
    host: Arc<dyn HostContext>,
    policy: MatchPolicy,
}

impl NavigationRouter {
    pub fn new(host: Arc<dyn HostContext>, policy: MatchPolicy) -> Self {
        Self { host, policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Classify `request` and, if external, submit one [`ViewIntent`] to the host.
    ///
    /// Repeated calls with the same URL dispatch again each time.
    pub fn decide(&self, request: &NavigationRequest) -> RoutingDecision {
        let decision = classify(&request.url, self.policy);
        debug!(url = %request.url, ?decision, policy = ?self.policy, "navigation");

        if decision == RoutingDecision::External {
            self.host.dispatch(ViewIntent::new(request.url.as_str()));
        }
        decision
    }

    /// `true` if the router handled the URL and the view must not navigate.
    pub fn should_override(&self, url: &str) -> bool {
        !self.decide(&NavigationRequest::new(url)).navigates_in_view()
    }
}

impl std::fmt::Debug for NavigationRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationRouter")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
