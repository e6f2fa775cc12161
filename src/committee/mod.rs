//! Committee domain types and collaborator seams
//!
//! Everything the template layer needs to talk about committees: the models,
//! the closed set of permissions, and the traits the helper delegates to.

pub mod authorization;
pub mod model;
pub mod permission;
pub mod roles;
pub mod routing;

pub use authorization::AuthorizationChecker;
pub use model::{Adherent, Committee};
pub use permission::CommitteePermission;
pub use roles::CommitteeRoleManager;
pub use routing::{CommitteeUrlResolver, RouteError, RouteParams};
