//! Directory entry types

use serde::{Deserialize, Serialize};

/// Substitute avatar reference used when the real one fails to load.
///
/// Swapping it in is a presentation repair only: identity, selection and
/// pagination never look at the avatar field.
pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/128x128?text=No%20Image";

/// One directory entry.
///
/// Immutable once loaded, with a single sanctioned exception: the avatar
/// reference may be replaced by [`PLACEHOLDER_AVATAR`] after a failed image
/// probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable identifier (render/selection key)
    pub id: String,
    /// Login name
    pub username: String,
    /// Given name
    pub firstname: String,
    /// Family name
    pub lastname: String,
    /// Contact email
    pub email: String,
    /// Avatar reference (URI; may be broken)
    pub avatar: String,
    /// Role label
    pub role: String,
    /// Join date, kept as an opaque display string
    pub join_date: String,
    /// Free-text description
    pub description: String,
}

impl User {
    /// Display name composed from the name parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Replace a broken avatar reference with the fixed placeholder.
    pub fn use_placeholder_avatar(&mut self) {
        self.avatar = PLACEHOLDER_AVATAR.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: "1".into(),
            username: "jdoe".into(),
            firstname: "John".into(),
            lastname: "Doe".into(),
            email: "jdoe@example.com".into(),
            avatar: "https://robohash.org/jdoe.png".into(),
            role: "Engineer".into(),
            join_date: "01/01/2023".into(),
            description: "A skilled engineer.".into(),
        }
    }

    #[test]
    fn full_name_joins_parts() {
        assert_eq!(sample().full_name(), "John Doe");
    }

    #[test]
    fn placeholder_only_touches_avatar() {
        let mut user = sample();
        user.use_placeholder_avatar();
        assert_eq!(user.avatar, PLACEHOLDER_AVATAR);
        assert_eq!(user.id, "1");
        assert_eq!(user.full_name(), "John Doe");
    }
}
