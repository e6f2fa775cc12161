//! Role transition seam
//!
//! Promotion and demotion eligibility is a separate concern from permission
//! checks. The module holding those rules is optional at integration time,
//! which is why [`crate::CommitteeHelper`] takes a role manager as an
//! opt-in collaborator rather than requiring one.

use super::model::{Adherent, Committee};

/// Answers host role transition eligibility questions
pub trait CommitteeRoleManager: Send + Sync {
    /// Whether the adherent can be promoted to host of the committee
    fn can_promote_to_host(&self, adherent: &Adherent, committee: &Committee) -> bool;

    /// Whether the adherent can be demoted from host of the committee
    fn can_demote_from_host(&self, adherent: &Adherent, committee: &Committee) -> bool;
}
