use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::domain::types::{UserId, UserRole, UserStatus, non_blank, normalize_email};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: NaiveDateTime,
}

impl Record for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// Validated payload for creating a user account.
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    /// Initial password; handed to the persistence layer and never stored on [`User`].
    pub password: String,
}

impl NewUser {
    #[must_use]
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        role: UserRole,
        status: UserStatus,
        password: String,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            phone: non_blank(phone),
            role,
            status,
            password,
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .field("status", &self.status)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated payload for editing an existing user account.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
}

impl UpdateUser {
    #[must_use]
    pub fn new(name: &str, email: &str, phone: &str, role: UserRole, status: UserStatus) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            phone: non_blank(phone),
            role,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_normalizes_contact_fields() {
        let user = NewUser::new(
            "  Sarah Johnson ",
            " Sarah@Example.com",
            "   ",
            UserRole::Manager,
            UserStatus::Active,
            "longenough1".to_string(),
        );

        assert_eq!(user.name, "Sarah Johnson");
        assert_eq!(user.email, "sarah@example.com");
        assert_eq!(user.phone, None);
    }

    #[test]
    fn new_user_debug_hides_password() {
        let user = NewUser::new(
            "Sarah",
            "sarah@example.com",
            "",
            UserRole::Admin,
            UserStatus::Active,
            "longenough1".to_string(),
        );

        let printed = format!("{user:?}");
        assert!(!printed.contains("longenough1"));
        assert!(printed.contains("<redacted>"));
    }
}
