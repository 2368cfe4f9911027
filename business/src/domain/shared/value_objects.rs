/// Identity of the buyer that owns a basket.
/// Taken from the `sub` claim of the caller's token and used as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId without checking its content.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns `None` for empty or whitespace-only identities.
    pub fn parse(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return None;
        }
        Some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_non_empty_identity() {
        let user_id = UserId::parse("auth0|alice").unwrap();
        assert_eq!(user_id.as_str(), "auth0|alice");
    }

    #[test]
    fn should_reject_empty_identity() {
        assert!(UserId::parse("").is_none());
    }

    #[test]
    fn should_reject_whitespace_identity() {
        assert!(UserId::parse("   ").is_none());
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("bob");
        assert_eq!(format!("{}", user_id), "bob");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("same-user"), UserId::from("same-user"));
        assert_ne!(UserId::new("same-user"), UserId::new("different-user"));
    }
}
