use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Profile of the logged-in user, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub role: Role,
}

/// An authenticated session: opaque bearer token plus the user it belongs to.
///
/// Created on login, read on every request, destroyed on logout or when the
/// server rejects the token. An expired token looks exactly like an invalid
/// one from the client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }

    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user.id
    }
}
