//! Certificate Issuance Types
//!
//! Core state model for certificate issuance: symbols, certificate kinds,
//! ledger ownership records, the validated issuance handed from the
//! validator to the receiver builder, and the receiver records it produces.

use std::fmt;

use lib_types::{AccountId, Address, Amount, Did};
use serde::{Deserialize, Serialize};

// ============================================================================
// Symbol
// ============================================================================

/// Uppercase token identifying a certificate family
///
/// For domain-naming certificates the symbol is `<label>.<domain>`.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Wrap a symbol that is already in canonical (uppercase) form
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Build the canonical form of a user-supplied symbol
    ///
    /// Only ASCII letters change case, so the byte length is preserved.
    pub fn normalized(raw: &str) -> Self {
        Self(raw.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

// ============================================================================
// Certificate Kinds
// ============================================================================

/// Closed set of certificate kinds known to the platform
///
/// Only the kinds listed in the `CertTypeRegistry` can be minted by the
/// issue command. `Issue` and `Domain` certificates come from asset issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    /// Right to issue (and secondary-issue) an asset symbol
    Issue,
    /// Control over a domain namespace
    Domain,
    /// A `<label>.<domain>` name minted under a `Domain` certificate
    DomainNaming,
    Marriage,
    Kyc,
}

impl CertificateKind {
    /// The parent kind whose ownership authorizes minting this kind, if any
    pub fn required_parent(&self) -> Option<CertificateKind> {
        match self {
            CertificateKind::DomainNaming => Some(CertificateKind::Domain),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CertificateKind::Issue => "issue",
            CertificateKind::Domain => "domain",
            CertificateKind::DomainNaming => "domain_naming",
            CertificateKind::Marriage => "marriage",
            CertificateKind::Kyc => "kyc",
        }
    }
}

impl fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Ledger Records (read-only here)
// ============================================================================

/// A certificate as persisted by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub symbol: Symbol,
    pub kind: CertificateKind,
    /// Address currently holding the certificate
    pub owner: Address,
}

/// A certificate held by one of an account's addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateOwnership {
    /// Ledger-assigned, monotonically increasing record id
    pub sequence: u64,
    pub record: CertificateRecord,
}

impl CertificateOwnership {
    pub fn new(sequence: u64, record: CertificateRecord) -> Self {
        Self { sequence, record }
    }

    /// Address holding the certificate
    pub fn address(&self) -> &Address {
        &self.record.owner
    }
}

// ============================================================================
// Requests
// ============================================================================

/// A normalized certificate issuance request
///
/// Built per call by `normalize_request` and discarded once a receiver list
/// or a rejection has been produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceRequest {
    /// Account paying for and authorizing the issuance
    pub requesting_account: AccountId,
    /// Address receiving the new certificate
    pub target_address: Address,
    /// Uppercase certificate symbol
    pub symbol: Symbol,
    /// Uppercase certificate-type token
    pub cert_type_token: String,
    pub fee: Amount,
}

/// Kind-specific outcome of validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuancePlan {
    /// Mint a naming certificate and re-anchor the parent domain certificate
    DomainNaming {
        /// Domain component of the symbol
        domain: Symbol,
        /// Holder of the requester's `Domain` certificate over `domain`
        domain_cert_address: Address,
    },
    /// Mint a certificate with no side effects
    Generic { kind: CertificateKind },
}

impl IssuancePlan {
    pub fn kind(&self) -> CertificateKind {
        match self {
            IssuancePlan::DomainNaming { .. } => CertificateKind::DomainNaming,
            IssuancePlan::Generic { kind } => *kind,
        }
    }
}

/// An issuance request that passed every validation check
///
/// Only `IssuanceValidator::validate` produces this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedIssuance {
    pub(crate) requesting_account: AccountId,
    pub(crate) target_address: Address,
    pub(crate) target_owner: Did,
    pub(crate) symbol: Symbol,
    pub(crate) fee: Amount,
    pub(crate) plan: IssuancePlan,
}

impl ValidatedIssuance {
    pub fn requesting_account(&self) -> &AccountId {
        &self.requesting_account
    }

    pub fn target_address(&self) -> &Address {
        &self.target_address
    }

    /// Identity bound to the target address
    pub fn target_owner(&self) -> &Did {
        &self.target_owner
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn fee(&self) -> Amount {
        self.fee
    }

    pub fn plan(&self) -> &IssuancePlan {
        &self.plan
    }

    pub fn kind(&self) -> CertificateKind {
        self.plan.kind()
    }
}

// ============================================================================
// Receiver Records
// ============================================================================

/// Role of an output in the issuance transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputPurpose {
    /// Creates a new certificate
    CertIssue,
    /// Moves an existing certificate
    CertTransfer,
}

/// Opaque attachment carried on an output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attachment(Vec<u8>);

impl Attachment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One output of an issuance transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverRecord {
    pub address: Address,
    pub symbol: Symbol,
    /// Native amount (always 0 for certificate outputs)
    pub amount: Amount,
    /// Asset amount (always 0 for certificate outputs)
    pub asset_amount: u64,
    pub cert_kind: CertificateKind,
    pub purpose: OutputPurpose,
    pub attachment: Attachment,
}

impl ReceiverRecord {
    /// Create a zero-value certificate output with an empty attachment
    pub fn certificate(
        address: Address,
        symbol: Symbol,
        cert_kind: CertificateKind,
        purpose: OutputPurpose,
    ) -> Self {
        Self {
            address,
            symbol,
            amount: 0,
            asset_amount: 0,
            cert_kind,
            purpose,
            attachment: Attachment::empty(),
        }
    }
}
