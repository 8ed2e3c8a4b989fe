//! Domain entity: a hostname bound to a content node

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Hostname (or hostname/path) mapping used for multi-site routing.
///
/// `id == 0` marks an entity that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: i32,
    /// Host name, e.g. `example.com` or `example.com/en`. Wildcards start with `*`.
    pub name: String,
    /// Content node this domain routes to
    pub root_content_id: Option<i32>,
    pub language_id: Option<i32>,
}

impl Domain {
    /// Create a new, not yet persisted domain
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            root_content_id: None,
            language_id: None,
        }
    }

    pub fn with_root_content(mut self, content_id: i32) -> Self {
        self.root_content_id = Some(content_id);
        self
    }

    pub fn with_language(mut self, language_id: i32) -> Self {
        self.language_id = Some(language_id);
        self
    }

    pub fn has_identity(&self) -> bool {
        self.id != 0
    }

    /// Wildcard domains carry no real host name: blank, or `*<content id>`.
    pub fn is_wildcard(&self) -> bool {
        let name = self.name.trim();
        name.is_empty() || name.starts_with('*')
    }

    /// Case-insensitive name comparison used for uniqueness and lookups
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Checks repositories run before persisting
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Domain name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether this domain is listed for the given wildcard filter
    pub fn is_listed(&self, include_wildcards: bool) -> bool {
        include_wildcards || !self.is_wildcard()
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_domain_has_no_identity() {
        let d = Domain::new("example.com");
        assert_eq!(d.id, 0);
        assert!(!d.has_identity());
        assert_eq!(d.root_content_id, None);
    }

    #[test]
    fn builder_sets_content_and_language() {
        let d = Domain::new("example.com").with_root_content(1050).with_language(2);
        assert_eq!(d.root_content_id, Some(1050));
        assert_eq!(d.language_id, Some(2));
    }

    #[test]
    fn star_prefix_is_wildcard() {
        assert!(Domain::new("*1050").is_wildcard());
        assert!(!Domain::new("example.com").is_wildcard());
    }

    #[test]
    fn blank_name_is_wildcard() {
        assert!(Domain::new("").is_wildcard());
        assert!(Domain::new("   ").is_wildcard());
    }

    #[test]
    fn name_match_ignores_case() {
        let d = Domain::new("Example.COM");
        assert!(d.matches_name("example.com"));
        assert!(!d.matches_name("example.org"));
    }

    #[test]
    fn wildcard_listing_filter() {
        let wildcard = Domain::new("*1050");
        assert!(wildcard.is_listed(true));
        assert!(!wildcard.is_listed(false));
        assert!(Domain::new("example.com").is_listed(false));
    }

    #[test]
    fn blank_name_fails_validation() {
        assert!(matches!(
            Domain::new(" ").validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(Domain::new("*1050").validate().is_ok());
    }

    #[test]
    fn display_shows_name_and_id() {
        let mut d = Domain::new("example.com");
        d.id = 7;
        assert_eq!(d.to_string(), "example.com (7)");
    }
}
