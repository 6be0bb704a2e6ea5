//! Canonical Primitive Types for Certificate Issuance
//!
//! These are the identifiers exchanged between the issuance core and the
//! collaborators around it (ledger, authentication, transaction assembly).
//! They are opaque to this crate: format checks belong to the collaborator
//! that owns the encoding.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Native token amounts and fees, in the smallest unit
pub type Amount = u64;

// ============================================================================
// ACCOUNT TYPES
// ============================================================================

/// Name of a wallet account on the node
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new AccountId
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the account name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// ============================================================================
// ADDRESS TYPES
// ============================================================================

/// Encoded ledger address
///
/// The encoding is owned by the ledger. This type only carries the string;
/// use an `AddressValidator` to check it.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create a new Address from its encoded form
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Get the encoded form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the empty address
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(encoded: &str) -> Self {
        Self::new(encoded)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Decentralized identity symbol bound to one or more addresses
#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Did(String);

impl Did {
    /// Create a new Did
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the identity symbol
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Did({})", self.0)
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Did {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_basics() {
        let addr = Address::new("MAwLwVGwJyFsTBfNj2j5nCUrQXGVRvHzPh");
        assert!(!addr.is_empty());
        assert_eq!(addr.as_str(), "MAwLwVGwJyFsTBfNj2j5nCUrQXGVRvHzPh");
        assert!(Address::default().is_empty());
    }

    #[test]
    fn test_display_is_raw_value() {
        assert_eq!(format!("{}", AccountId::from("alice")), "alice");
        assert_eq!(format!("{}", Did::from("ALICE.DID")), "ALICE.DID");
        assert_eq!(format!("{:?}", Address::from("M1")), "Address(M1)");
    }

    #[test]
    fn test_from_str() {
        let account: AccountId = "alice".into();
        assert_eq!(account, AccountId::new(String::from("alice")));
    }
}
