//! User domain model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::id::UserId;

/// A registered user that tasks can be assigned to
///
/// Plain data holder: name and email are stored as given, without
/// validation. Users are compared by id, never by field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl User {
    /// Creates a new user with the given id
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Имя: {} Почта: {}", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdAllocator;

    #[test]
    fn display_renders_name_and_email() {
        let user = User::new(IdAllocator::new().next_user_id(), "Алиса", "alice@gmail.com");
        assert_eq!(user.to_string(), "Имя: Алиса Почта: alice@gmail.com");
    }
}
