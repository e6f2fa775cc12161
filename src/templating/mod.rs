//! Template-facing layer
//!
//! The [`CommitteeHelper`] facade and the Tera functions that expose it.

pub mod functions;
pub mod helper;

pub use functions::register_committee_functions;
pub use helper::CommitteeHelper;
