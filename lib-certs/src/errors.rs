//! Certificate Issuance Errors

use lib_types::{AccountId, Address};
use thiserror::Error;

use crate::types::Symbol;

/// Failure reported by a `CertificateLedger` implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Ledger storage error: {0}")]
    Storage(String),

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// Result type for ledger reads
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failure reported by the authentication collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Account '{0}' does not exist")]
    UnknownAccount(AccountId),

    #[error("Invalid credentials for account '{0}'")]
    InvalidCredentials(AccountId),
}

/// Failure reported by the transaction assembler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Insufficient funds: have {have}, need {need}")]
    InsufficientFunds { have: u64, need: u64 },

    #[error("Fee too low: {provided} < {minimum}")]
    FeeTooLow { provided: u64, minimum: u64 },

    #[error("Transaction assembly failed: {0}")]
    Other(String),
}

/// Invalid issuance configuration
///
/// Raised when building a validator or command, never per request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported certificate type '{0}' in enabled_cert_types")]
    UnsupportedCertType(String),
}

/// Fieldless rejection code for mapping onto CLI/RPC error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    SymbolTooLong,
    InvalidAddress,
    TargetNotIdentityBound,
    UnknownCertificateType,
    MissingDomainSeparator,
    InvalidDomainSyntax,
    DuplicateDomainCertificate,
    NoDomainCertificateOwned,
    Ledger,
}

/// Reason a certificate issuance request was rejected
///
/// Every variant carries the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssuanceError {
    #[error("Symbol '{symbol}' is {actual} bytes, maximum is {max}")]
    SymbolTooLong {
        symbol: Symbol,
        max: usize,
        actual: usize,
    },

    #[error("Invalid address: '{0}'")]
    InvalidAddress(Address),

    #[error("Target address '{0}' is not bound to an identity")]
    TargetNotIdentityBound(Address),

    #[error("Unknown certificate type '{0}'")]
    UnknownCertificateType(String),

    #[error("Certificate symbol '{0}' must contain a '.' separator")]
    MissingDomainSeparator(Symbol),

    #[error("Certificate symbol '{symbol}' has an invalid domain '{domain}'")]
    InvalidDomainSyntax { symbol: Symbol, domain: String },

    #[error("Domain naming certificate '{0}' already exists")]
    DuplicateDomainCertificate(Symbol),

    #[error("Account '{account}' owns no domain certificate for '{domain}'")]
    NoDomainCertificateOwned { account: AccountId, domain: Symbol },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl IssuanceError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            IssuanceError::SymbolTooLong { .. } => RejectionKind::SymbolTooLong,
            IssuanceError::InvalidAddress(_) => RejectionKind::InvalidAddress,
            IssuanceError::TargetNotIdentityBound(_) => RejectionKind::TargetNotIdentityBound,
            IssuanceError::UnknownCertificateType(_) => RejectionKind::UnknownCertificateType,
            IssuanceError::MissingDomainSeparator(_) => RejectionKind::MissingDomainSeparator,
            IssuanceError::InvalidDomainSyntax { .. } => RejectionKind::InvalidDomainSyntax,
            IssuanceError::DuplicateDomainCertificate(_) => {
                RejectionKind::DuplicateDomainCertificate
            }
            IssuanceError::NoDomainCertificateOwned { .. } => {
                RejectionKind::NoDomainCertificateOwned
            }
            IssuanceError::Ledger(_) => RejectionKind::Ledger,
        }
    }
}

/// Result type for issuance validation
pub type IssuanceResult<T> = Result<T, IssuanceError>;

/// Error from the end-to-end issue command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueCertError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Issuance rejected: {0}")]
    Rejected(#[from] IssuanceError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}
