//! Permission vocabulary for committees
//!
//! The closed set of permission classes the authorization engine can be asked
//! to decide. Each template-facing boolean query is bound to exactly one of
//! these variants when the functions are registered.

use serde::{Deserialize, Serialize};

/// A permission class evaluated against a committee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitteePermission {
    /// Acts as a host: animates the committee and its events
    Host,
    /// Acts as the committee's supervisor
    Supervise,
    /// Can start following the committee's activity
    Follow,
    /// Can stop following the committee's activity
    Unfollow,
    /// Can create a committee
    Create,
    /// Can view the committee's page
    Show,
}

impl CommitteePermission {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitteePermission::Host => "host",
            CommitteePermission::Supervise => "supervise",
            CommitteePermission::Follow => "follow",
            CommitteePermission::Unfollow => "unfollow",
            CommitteePermission::Create => "create",
            CommitteePermission::Show => "show",
        }
    }
}

impl std::str::FromStr for CommitteePermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host" => Ok(CommitteePermission::Host),
            "supervise" => Ok(CommitteePermission::Supervise),
            "follow" => Ok(CommitteePermission::Follow),
            "unfollow" => Ok(CommitteePermission::Unfollow),
            "create" => Ok(CommitteePermission::Create),
            "show" => Ok(CommitteePermission::Show),
            _ => Err(format!("Invalid committee permission: {}", s)),
        }
    }
}

impl std::fmt::Display for CommitteePermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
