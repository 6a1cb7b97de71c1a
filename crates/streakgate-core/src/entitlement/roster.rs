//! Static set of administrator emails.
//!
//! Built once from configuration and never mutated. Matching is exact:
//! no case folding, no trimming of the identity side.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminRoster {
    emails: BTreeSet<String>,
}

impl AdminRoster {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let emails: BTreeSet<String> = emails.into_iter().map(Into::into).collect();
        tracing::debug!(count = emails.len(), "admin roster built");
        Self { emails }
    }

    /// Parse a comma-separated list such as `STREAKGATE_ADMIN_EMAILS`.
    ///
    /// Whitespace around list separators is dropped and empty entries are
    /// skipped; the entries themselves are kept verbatim.
    pub fn from_env_list(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty()),
        )
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.emails.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AdminRoster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_exact() {
        let roster = AdminRoster::new(["you@yourdomain.com"]);
        assert!(roster.contains("you@yourdomain.com"));
        assert!(!roster.contains("You@YourDomain.com"));
        assert!(!roster.contains(" you@yourdomain.com"));
        assert!(!roster.contains("you@yourdomain.com "));
    }

    #[test]
    fn test_from_env_list() {
        let roster = AdminRoster::from_env_list(" a@x.io, b@x.io ,,c@x.io,");
        assert_eq!(roster.len(), 3);
        assert!(roster.contains("a@x.io"));
        assert!(roster.contains("b@x.io"));
        assert!(roster.contains("c@x.io"));
    }

    #[test]
    fn test_empty_list() {
        assert!(AdminRoster::from_env_list("").is_empty());
        assert!(AdminRoster::from_env_list(" , ").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let roster: AdminRoster = ["a@x.io", "a@x.io"].into_iter().collect();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.iter().collect::<Vec<_>>(), vec!["a@x.io"]);
    }
}
