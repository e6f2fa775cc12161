//! Authorization seam
//!
//! The helper never evaluates permission rules itself; it forwards every
//! question to an [`AuthorizationChecker`]. The subject is ambient:
//! implementations are constructed around the current authenticated
//! identity (per request, per session), so the check only carries the
//! permission and the committee it applies to.

use super::model::Committee;
use super::permission::CommitteePermission;

/// Decides whether the current identity holds a permission on a committee
pub trait AuthorizationChecker: Send + Sync {
    /// Returns the engine's verdict, unmodified
    fn is_granted(&self, permission: CommitteePermission, committee: &Committee) -> bool;
}
