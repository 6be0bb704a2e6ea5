//! Ownership Resolver - Read-Only Ledger Access
//!
//! [`CertificateLedger`] is the minimal read interface the issuance core
//! needs from ledger storage. [`OwnershipResolver`] wraps it and answers the
//! questions the validator asks.
//!
//! Every call is an independent point-in-time read. Two reads in one
//! validation pass may observe different ledger states.

use lib_types::{AccountId, Address, Did};

use crate::errors::LedgerResult;
use crate::types::{CertificateKind, CertificateOwnership, Symbol};

/// Ledger reads consumed by certificate issuance
///
/// Implementations are provided by the chain storage layer.
pub trait CertificateLedger: Send + Sync {
    /// Identity bound to an address, or `None` if the address is not bound
    fn owner_identity_of(&self, address: &Address) -> LedgerResult<Option<Did>>;

    /// Check whether a certificate of `kind` exists for `symbol`
    fn certificate_exists(&self, symbol: &Symbol, kind: CertificateKind) -> LedgerResult<bool>;

    /// Certificates over `symbol` held by any address of `account`, any kind,
    /// in any order
    fn account_certificates(
        &self,
        account: &AccountId,
        symbol: &Symbol,
    ) -> LedgerResult<Vec<CertificateOwnership>>;
}

/// Address format check owned by the ledger's address encoding
pub trait AddressValidator: Send + Sync {
    fn is_valid_address(&self, address: &Address) -> bool;
}

/// Read-only view answering ownership questions for the validator
pub struct OwnershipResolver<'a> {
    ledger: &'a dyn CertificateLedger,
}

impl<'a> OwnershipResolver<'a> {
    pub fn new(ledger: &'a dyn CertificateLedger) -> Self {
        Self { ledger }
    }

    /// Identity bound to `address`
    pub fn owner_identity_of(&self, address: &Address) -> LedgerResult<Option<Did>> {
        self.ledger.owner_identity_of(address)
    }

    pub fn certificate_exists(&self, symbol: &Symbol, kind: CertificateKind) -> LedgerResult<bool> {
        self.ledger.certificate_exists(symbol, kind)
    }

    /// Certificates of `required_kind` over `domain` held by `account`
    ///
    /// Ordered by ascending ledger sequence, so the first element is the
    /// oldest qualifying certificate.
    pub fn account_certificates_matching(
        &self,
        account: &AccountId,
        domain: &Symbol,
        required_kind: CertificateKind,
    ) -> LedgerResult<Vec<CertificateOwnership>> {
        let mut matching: Vec<CertificateOwnership> = self
            .ledger
            .account_certificates(account, domain)?
            .into_iter()
            .filter(|ownership| {
                ownership.record.kind == required_kind && &ownership.record.symbol == domain
            })
            .collect();
        matching.sort_by_key(|ownership| ownership.sequence);
        Ok(matching)
    }

    /// Address holding the first matching certificate (first match wins)
    pub fn first_certificate_holder(
        &self,
        account: &AccountId,
        domain: &Symbol,
        required_kind: CertificateKind,
    ) -> LedgerResult<Option<Address>> {
        Ok(self
            .account_certificates_matching(account, domain, required_kind)?
            .into_iter()
            .next()
            .map(|ownership| ownership.record.owner))
    }
}
