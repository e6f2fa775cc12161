//! Link resolution seam
//!
//! Templates ask for committee links by route name; a [`CommitteeUrlResolver`]
//! turns the name plus the committee and any extra parameters into a path or
//! an absolute URL. Resolution lives behind the trait so the helper stays
//! independent of any particular router.

use std::collections::HashMap;

use thiserror::Error;

use super::model::Committee;

/// Extra route parameters beyond the committee itself (page, tab, anchors...)
pub type RouteParams = HashMap<String, serde_json::Value>;

/// Errors a resolver can raise while building a link
#[derive(Debug, Clone, Error)]
pub enum RouteError {
    /// No route is registered under the requested name
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// The route exists but a parameter it needs was not supplied
    #[error("Route {route} is missing required parameter: {name}")]
    MissingParameter { route: String, name: String },

    /// Any other resolver failure
    #[error("{0}")]
    Resolver(String),
}

/// Resolves named committee routes into links
///
/// Implementations are expected to derive the committee-identifying
/// parameters (typically the slug) from the committee itself and merge
/// `params` on top.
pub trait CommitteeUrlResolver: Send + Sync {
    /// Build a site-relative path for the named route
    fn path(
        &self,
        route: &str,
        committee: &Committee,
        params: &RouteParams,
    ) -> Result<String, RouteError>;

    /// Build an absolute URL for the named route
    fn url(
        &self,
        route: &str,
        committee: &Committee,
        params: &RouteParams,
    ) -> Result<String, RouteError>;
}
