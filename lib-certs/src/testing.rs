//! Test utilities for lib-certs.
//!
//! In-memory stand-ins for the collaborators around the issuance core. They
//! are `Send + Sync` so integration tests can share them across threads.
//!
//! # Example
//!
//! ```rust,ignore
//! use lib_certs::testing::InMemoryLedger;
//!
//! let ledger = InMemoryLedger::new();
//! ledger.add_account_address("alice", "MAliceMain");
//! ledger.bind_identity("MAliceMain", "ALICE.DID");
//! ```

use std::collections::{HashMap, HashSet};

use lib_types::{AccountId, Address, Amount, Did};
use parking_lot::{Mutex, RwLock};

use crate::command::{AssemblyRequest, Authenticator, TransactionAssembler};
use crate::errors::{AssemblyError, AuthError, LedgerError, LedgerResult};
use crate::resolver::{AddressValidator, CertificateLedger};
use crate::types::{
    CertificateKind, CertificateOwnership, CertificateRecord, OutputPurpose, ReceiverRecord, Symbol,
};

// ============================================================================
// Ledger
// ============================================================================

#[derive(Default)]
struct LedgerState {
    addresses: HashSet<Address>,
    accounts: HashMap<AccountId, Vec<Address>>,
    identities: HashMap<Address, Did>,
    certificates: Vec<CertificateOwnership>,
    next_sequence: u64,
    failure: Option<LedgerError>,
}

impl LedgerState {
    fn insert_certificate(&mut self, record: CertificateRecord) -> u64 {
        self.next_sequence += 1;
        let sequence = self.next_sequence;
        self.certificates
            .push(CertificateOwnership::new(sequence, record));
        sequence
    }

    fn check_failure(&self) -> LedgerResult<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// In-memory ledger implementing [`CertificateLedger`] and [`AddressValidator`]
///
/// An address is valid once it has been added. Certificates get ascending
/// sequence numbers in insertion order.
#[derive(Default)]
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a valid address that belongs to no account
    pub fn add_address(&self, address: &str) {
        self.state.write().addresses.insert(Address::from(address));
    }

    /// Register a valid address owned by `account`
    pub fn add_account_address(&self, account: &str, address: &str) {
        let mut state = self.state.write();
        state.addresses.insert(Address::from(address));
        state
            .accounts
            .entry(AccountId::from(account))
            .or_default()
            .push(Address::from(address));
    }

    /// Bind an identity to an address
    pub fn bind_identity(&self, address: &str, did: &str) {
        self.state
            .write()
            .identities
            .insert(Address::from(address), Did::from(did));
    }

    /// Persist a certificate and return its sequence number
    pub fn add_certificate(&self, record: CertificateRecord) -> u64 {
        self.state.write().insert_certificate(record)
    }

    /// Commit the outputs of an issuance transaction
    ///
    /// `CertIssue` outputs create certificates, `CertTransfer` outputs move the
    /// existing certificate of that symbol and kind.
    pub fn apply_receivers(&self, receivers: &[ReceiverRecord]) {
        let mut state = self.state.write();
        for receiver in receivers {
            let record = CertificateRecord {
                symbol: receiver.symbol.clone(),
                kind: receiver.cert_kind,
                owner: receiver.address.clone(),
            };
            let existing = match receiver.purpose {
                OutputPurpose::CertIssue => None,
                OutputPurpose::CertTransfer => state.certificates.iter().position(|ownership| {
                    ownership.record.symbol == record.symbol && ownership.record.kind == record.kind
                }),
            };
            match existing {
                Some(index) => state.certificates[index].record.owner = record.owner,
                None => {
                    state.insert_certificate(record);
                }
            }
        }
    }

    /// Make every subsequent read fail with `err`
    pub fn fail_reads(&self, err: LedgerError) {
        self.state.write().failure = Some(err);
    }

    /// Number of certificates of `kind` over `symbol`
    pub fn certificate_count(&self, symbol: &str, kind: CertificateKind) -> usize {
        self.state
            .read()
            .certificates
            .iter()
            .filter(|ownership| ownership.record.symbol.as_str() == symbol && ownership.record.kind == kind)
            .count()
    }
}

impl CertificateLedger for InMemoryLedger {
    fn owner_identity_of(&self, address: &Address) -> LedgerResult<Option<Did>> {
        let state = self.state.read();
        state.check_failure()?;
        Ok(state.identities.get(address).cloned())
    }

    fn certificate_exists(&self, symbol: &Symbol, kind: CertificateKind) -> LedgerResult<bool> {
        let state = self.state.read();
        state.check_failure()?;
        Ok(state
            .certificates
            .iter()
            .any(|ownership| &ownership.record.symbol == symbol && ownership.record.kind == kind))
    }

    fn account_certificates(
        &self,
        account: &AccountId,
        symbol: &Symbol,
    ) -> LedgerResult<Vec<CertificateOwnership>> {
        let state = self.state.read();
        state.check_failure()?;
        let Some(addresses) = state.accounts.get(account) else {
            return Ok(Vec::new());
        };
        Ok(state
            .certificates
            .iter()
            .filter(|ownership| {
                &ownership.record.symbol == symbol && addresses.contains(&ownership.record.owner)
            })
            .cloned()
            .collect())
    }
}

impl AddressValidator for InMemoryLedger {
    fn is_valid_address(&self, address: &Address) -> bool {
        self.state.read().addresses.contains(address)
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Authenticator backed by a fixed account → token table
#[derive(Default)]
pub struct StaticAuthenticator {
    accounts: RwLock<HashMap<AccountId, String>>,
}

impl StaticAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&self, account: &str, auth_token: &str) {
        self.accounts
            .write()
            .insert(AccountId::from(account), auth_token.to_string());
    }
}

impl Authenticator for StaticAuthenticator {
    fn validate_credentials(&self, account: &AccountId, auth_token: &str) -> Result<(), AuthError> {
        match self.accounts.read().get(account) {
            None => Err(AuthError::UnknownAccount(account.clone())),
            Some(expected) if expected != auth_token => {
                Err(AuthError::InvalidCredentials(account.clone()))
            }
            Some(_) => Ok(()),
        }
    }
}

// ============================================================================
// Transaction Assembly
// ============================================================================

/// Transaction produced by [`RecordingAssembler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledTransaction {
    pub account: AccountId,
    pub symbol: Symbol,
    pub outputs: Vec<ReceiverRecord>,
    pub fee: Amount,
}

/// Assembler that returns its input as the transaction and counts calls
#[derive(Default)]
pub struct RecordingAssembler {
    calls: Mutex<usize>,
    failure: Mutex<Option<AssemblyError>>,
}

impl RecordingAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent assembly fail with `err`
    pub fn fail_with(&self, err: AssemblyError) {
        *self.failure.lock() = Some(err);
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

impl TransactionAssembler for RecordingAssembler {
    type Transaction = AssembledTransaction;

    fn assemble_and_sign(
        &self,
        request: AssemblyRequest,
    ) -> Result<AssembledTransaction, AssemblyError> {
        *self.calls.lock() += 1;
        if let Some(err) = self.failure.lock().clone() {
            return Err(err);
        }
        Ok(AssembledTransaction {
            account: request.account,
            symbol: request.symbol,
            outputs: request.receivers,
            fee: request.fee,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_receivers_issue_and_transfer() {
        let ledger = InMemoryLedger::new();
        ledger.add_certificate(CertificateRecord {
            symbol: Symbol::from("MYSTORE"),
            kind: CertificateKind::Domain,
            owner: Address::from("MOld"),
        });

        ledger.apply_receivers(&[
            ReceiverRecord::certificate(
                Address::from("MTarget"),
                Symbol::from("SHOP.MYSTORE"),
                CertificateKind::DomainNaming,
                OutputPurpose::CertIssue,
            ),
            ReceiverRecord::certificate(
                Address::from("MNew"),
                Symbol::from("MYSTORE"),
                CertificateKind::Domain,
                OutputPurpose::CertTransfer,
            ),
        ]);

        assert_eq!(ledger.certificate_count("SHOP.MYSTORE", CertificateKind::DomainNaming), 1);
        assert_eq!(ledger.certificate_count("MYSTORE", CertificateKind::Domain), 1);

        ledger.add_account_address("alice", "MNew");
        let held = ledger
            .account_certificates(&AccountId::from("alice"), &Symbol::from("MYSTORE"))
            .unwrap();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].sequence, 1);
    }

    #[test]
    fn test_static_authenticator() {
        let auth = StaticAuthenticator::new();
        auth.add_account("alice", "secret");

        assert!(auth.validate_credentials(&AccountId::from("alice"), "secret").is_ok());
        assert!(matches!(
            auth.validate_credentials(&AccountId::from("alice"), "nope"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            auth.validate_credentials(&AccountId::from("bob"), "secret"),
            Err(AuthError::UnknownAccount(_))
        ));
    }
}
