//! User entity - a dashboard account

/// Dashboard user account
///
/// `password_hash` holds an Argon2 PHC string, never the raw password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl User {
    /// Check if user has admin rights on the dashboard
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

/// Insert payload for a new user
///
/// New accounts are never admins; admin rights are granted separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Build the stored record once an id has been assigned
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            is_admin: false,
        }
    }
}
