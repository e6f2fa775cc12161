//! Committee helper facade
//!
//! One object bundling everything committee templates ask for:
//! - Permission checks against the authorization engine
//! - Host promotion/demotion eligibility (when a role manager is wired in)
//! - Path and URL building through the link resolver
//!
//! The helper holds no rules of its own. Every answer is a collaborator's
//! answer, forwarded unmodified; its only decision is answering eligibility
//! questions with `false` when no role manager was provided.

use std::sync::Arc;

use crate::committee::{
    Adherent, AuthorizationChecker, Committee, CommitteePermission, CommitteeRoleManager,
    CommitteeUrlResolver, RouteError, RouteParams,
};

/// Facade over the committee collaborators, one instance per engine
pub struct CommitteeHelper {
    /// Permission verdicts
    authorization: Arc<dyn AuthorizationChecker>,
    /// Link building
    urls: Arc<dyn CommitteeUrlResolver>,
    /// Role transition eligibility, absent in deployments without the roles module
    roles: Option<Arc<dyn CommitteeRoleManager>>,
}

impl CommitteeHelper {
    /// Create a helper without role transition support
    pub fn new(
        authorization: Arc<dyn AuthorizationChecker>,
        urls: Arc<dyn CommitteeUrlResolver>,
    ) -> Self {
        Self {
            authorization,
            urls,
            roles: None,
        }
    }

    /// Wire in a role manager, enabling the eligibility queries
    pub fn with_role_manager(mut self, roles: Arc<dyn CommitteeRoleManager>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Whether the current identity hosts the committee
    pub fn is_host(&self, committee: &Committee) -> bool {
        self.authorization
            .is_granted(CommitteePermission::Host, committee)
    }

    /// Whether the current identity supervises the committee
    pub fn is_supervisor(&self, committee: &Committee) -> bool {
        self.authorization
            .is_granted(CommitteePermission::Supervise, committee)
    }

    /// Whether the current identity may follow the committee
    pub fn can_follow(&self, committee: &Committee) -> bool {
        self.authorization
            .is_granted(CommitteePermission::Follow, committee)
    }

    /// Whether the current identity may unfollow the committee
    pub fn can_unfollow(&self, committee: &Committee) -> bool {
        self.authorization
            .is_granted(CommitteePermission::Unfollow, committee)
    }

    /// Whether the current identity may create the committee
    pub fn can_create(&self, committee: &Committee) -> bool {
        self.authorization
            .is_granted(CommitteePermission::Create, committee)
    }

    /// Whether the current identity may see the committee
    pub fn can_see(&self, committee: &Committee) -> bool {
        self.authorization
            .is_granted(CommitteePermission::Show, committee)
    }

    /// Whether the adherent can be promoted to host
    ///
    /// Always `false` when no role manager was wired in.
    pub fn is_promotable_host(&self, adherent: &Adherent, committee: &Committee) -> bool {
        match &self.roles {
            Some(roles) => roles.can_promote_to_host(adherent, committee),
            None => false,
        }
    }

    /// Whether the adherent can be demoted from host
    ///
    /// Always `false` when no role manager was wired in.
    pub fn is_demotable_host(&self, adherent: &Adherent, committee: &Committee) -> bool {
        match &self.roles {
            Some(roles) => roles.can_demote_from_host(adherent, committee),
            None => false,
        }
    }

    /// Site-relative path for a named committee route
    pub fn path(
        &self,
        route: &str,
        committee: &Committee,
        params: &RouteParams,
    ) -> Result<String, RouteError> {
        self.urls.path(route, committee, params)
    }

    /// Absolute URL for a named committee route
    pub fn url(
        &self,
        route: &str,
        committee: &Committee,
        params: &RouteParams,
    ) -> Result<String, RouteError> {
        self.urls.url(route, committee, params)
    }
}
