//! Domain Rules
//!
//! Pure functions over domain-naming symbols of the form `<label>.<domain>`:
//! - [`extract_domain`]: the part after the first separator
//! - [`is_valid_domain`]: syntactic validity of that part under a [`DomainPolicy`]

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DOMAIN_LEN, DOMAIN_SEPARATOR};

/// Syntactic rules applied to the domain component of a naming symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Any non-empty domain
    #[default]
    Permissive,
    /// Non-empty dot-separated labels of ASCII alphanumerics and inner
    /// hyphens, with the whole domain at most `max_len` bytes
    Strict {
        #[serde(default = "default_max_domain_len")]
        max_len: usize,
    },
}

fn default_max_domain_len() -> usize {
    DEFAULT_MAX_DOMAIN_LEN
}

impl DomainPolicy {
    pub fn strict() -> Self {
        DomainPolicy::Strict {
            max_len: DEFAULT_MAX_DOMAIN_LEN,
        }
    }
}

/// Return the substring after the first separator, or `None` when the
/// symbol has no separator
///
/// `"SHOP.MYSTORE"` yields `"MYSTORE"`, `"A.B.C"` yields `"B.C"` and
/// `"SHOP."` yields `""`.
pub fn extract_domain(symbol: &str) -> Option<&str> {
    symbol
        .split_once(DOMAIN_SEPARATOR)
        .map(|(_, domain)| domain)
}

/// Check whether a domain satisfies the given policy
///
/// An empty domain is never valid.
pub fn is_valid_domain(domain: &str, policy: DomainPolicy) -> bool {
    if domain.is_empty() {
        return false;
    }

    match policy {
        DomainPolicy::Permissive => true,
        DomainPolicy::Strict { max_len } => {
            domain.len() <= max_len && domain.split(DOMAIN_SEPARATOR).all(is_valid_label)
        }
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("SHOP.MYSTORE"), Some("MYSTORE"));
        assert_eq!(extract_domain("A.B.C"), Some("B.C"));
        assert_eq!(extract_domain("SHOP."), Some(""));
        assert_eq!(extract_domain(".MYSTORE"), Some("MYSTORE"));
        assert_eq!(extract_domain("MYSTORE"), None);
    }

    #[test]
    fn test_empty_domain_always_invalid() {
        assert!(!is_valid_domain("", DomainPolicy::Permissive));
        assert!(!is_valid_domain("", DomainPolicy::strict()));
    }

    #[test]
    fn test_permissive_accepts_any_non_empty() {
        assert!(is_valid_domain("MYSTORE", DomainPolicy::Permissive));
        assert!(is_valid_domain("MY@STORE", DomainPolicy::Permissive));
        assert!(is_valid_domain("B.", DomainPolicy::Permissive));
    }

    #[test]
    fn test_strict_labels() {
        let policy = DomainPolicy::strict();
        assert!(is_valid_domain("MYSTORE", policy));
        assert!(is_valid_domain("MY-STORE", policy));
        assert!(is_valid_domain("STORE.MVS", policy));

        assert!(!is_valid_domain("MY@STORE", policy));
        assert!(!is_valid_domain("-STORE", policy));
        assert!(!is_valid_domain("STORE-", policy));
        assert!(!is_valid_domain("STORE..MVS", policy));
        assert!(!is_valid_domain("STORE.", policy));
    }

    #[test]
    fn test_strict_length() {
        let policy = DomainPolicy::Strict { max_len: 8 };
        assert!(is_valid_domain("ABCDEFGH", policy));
        assert!(!is_valid_domain("ABCDEFGHI", policy));
    }
}
