//! Committee portal template helpers
//!
//! Server-rendered committee pages keep asking the same questions: may the
//! current member follow this committee, host it, see it, and where does its
//! page live? This crate bundles those questions into a [`CommitteeHelper`]
//! and registers them as Tera functions, so templates write
//! `{% if can_follow(committee=committee) %}` instead of reimplementing
//! policy in markup.
//!
//! The crate decides nothing itself. Permission verdicts come from an
//! [`AuthorizationChecker`], links from a [`CommitteeUrlResolver`], and role
//! transition eligibility from an optional [`CommitteeRoleManager`]; wire in
//! whatever implementations your application uses.

pub mod committee;
pub mod templating;

pub use committee::{
    Adherent, AuthorizationChecker, Committee, CommitteePermission, CommitteeRoleManager,
    CommitteeUrlResolver, RouteError, RouteParams,
};
pub use templating::{register_committee_functions, CommitteeHelper};
