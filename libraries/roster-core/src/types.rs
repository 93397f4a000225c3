/// User domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's role within the directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrative account
    Admin,
    /// Regular account
    #[default]
    User,
}

/// One entry in the user directory
///
/// `id` is assigned by the store and `uid` is the external identity it maps
/// to; neither can be changed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Store-assigned identifier, unique within a store instance
    pub id: String,

    /// External identity provider id, supplied at creation
    pub uid: String,

    /// Display name
    pub name: String,

    /// Contact email (no uniqueness enforced)
    pub email: String,

    /// Account role
    pub role: Role,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,

    /// Last login timestamp (stamped at creation; there is no separate
    /// login-tracking flow)
    pub last_login: DateTime<Utc>,
}

/// Payload for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// External identity provider id
    #[serde(default)]
    pub uid: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Role, defaults to `user` when absent
    pub role: Option<Role>,
}

/// Patch payload for updating a user
///
/// Has no `id` or `uid` fields: those are immutable and any such keys in an
/// incoming patch are dropped at deserialization rather than merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,

    /// New contact email
    pub email: Option<String>,

    /// New role
    pub role: Option<Role>,
}
