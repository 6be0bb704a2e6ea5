//! Issue-Certificate Command
//!
//! End-to-end flow behind the `issuecert` command surface:
//!
//! ```text
//! authenticate → normalize → validate → build receivers → assemble & sign
//! ```
//!
//! Any failure stops the flow. Nothing is written to the ledger here; the
//! assembled transaction is returned to the caller for broadcast.

use std::fmt;

use lib_types::{AccountId, Amount};
use tracing::{debug, info};

use crate::config::IssuanceConfig;
use crate::errors::{AssemblyError, AuthError, ConfigError, IssueCertError};
use crate::normalize::{normalize_request, IssueCertArgs};
use crate::receivers::build_receivers;
use crate::resolver::{AddressValidator, CertificateLedger};
use crate::types::{ReceiverRecord, Symbol};
use crate::validator::IssuanceValidator;

/// Account authentication
pub trait Authenticator: Send + Sync {
    fn validate_credentials(&self, account: &AccountId, auth_token: &str) -> Result<(), AuthError>;
}

/// Everything the assembler needs to fund, sign and build the transaction
#[derive(Clone, PartialEq, Eq)]
pub struct AssemblyRequest {
    /// Paying and signing account
    pub account: AccountId,
    pub auth_token: String,
    /// Certificate symbol being issued
    pub symbol: Symbol,
    /// Outputs in positional order
    pub receivers: Vec<ReceiverRecord>,
    pub fee: Amount,
}

impl fmt::Debug for AssemblyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssemblyRequest")
            .field("account", &self.account)
            .field("auth_token", &"<redacted>")
            .field("symbol", &self.symbol)
            .field("receivers", &self.receivers)
            .field("fee", &self.fee)
            .finish()
    }
}

/// Turns a receiver list into a broadcast-ready transaction
///
/// Funding, fee policy and signing are the assembler's concern.
pub trait TransactionAssembler: Send + Sync {
    type Transaction;

    fn assemble_and_sign(&self, request: AssemblyRequest)
        -> Result<Self::Transaction, AssemblyError>;
}

/// Collaborators and configuration for issuing certificates
pub struct IssueCertCommand<'a, A: TransactionAssembler> {
    authenticator: &'a dyn Authenticator,
    validator: IssuanceValidator<'a>,
    assembler: &'a A,
}

impl<'a, A: TransactionAssembler> IssueCertCommand<'a, A> {
    /// Fails if `config` enables an unsupported certificate type
    pub fn new(
        authenticator: &'a dyn Authenticator,
        ledger: &'a dyn CertificateLedger,
        addresses: &'a dyn AddressValidator,
        assembler: &'a A,
        config: &IssuanceConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            authenticator,
            validator: IssuanceValidator::new(ledger, addresses, config)?,
            assembler,
        })
    }

    /// Run the command and return the assembled transaction
    pub fn execute(&self, args: IssueCertArgs) -> Result<A::Transaction, IssueCertError> {
        let account = AccountId::new(args.account.as_str());
        self.authenticator
            .validate_credentials(&account, &args.auth_token)?;
        debug!(account = %account, "Issuer authenticated");

        let request = normalize_request(&args);

        let issuance = self.validator.validate(&request)?;
        let receivers = build_receivers(&issuance);
        let receiver_count = receivers.len();

        let transaction = self.assembler.assemble_and_sign(AssemblyRequest {
            account,
            auth_token: args.auth_token,
            symbol: issuance.symbol().clone(),
            receivers,
            fee: issuance.fee(),
        })?;

        info!(
            symbol = %issuance.symbol(),
            kind = %issuance.kind(),
            receivers = receiver_count,
            "Certificate issuance transaction assembled"
        );

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IssuanceError;
    use crate::testing::{InMemoryLedger, RecordingAssembler, StaticAuthenticator};
    use crate::types::{CertificateKind, CertificateRecord, OutputPurpose};
    use lib_types::Address;

    fn fixtures() -> (StaticAuthenticator, InMemoryLedger, RecordingAssembler) {
        let auth = StaticAuthenticator::new();
        auth.add_account("alice", "secret");

        let ledger = InMemoryLedger::new();
        ledger.add_account_address("alice", "MAliceDomain");
        ledger.add_address("MTarget");
        ledger.bind_identity("MTarget", "TARGET.DID");
        ledger.add_certificate(CertificateRecord {
            symbol: Symbol::from("MYSTORE"),
            kind: CertificateKind::Domain,
            owner: Address::from("MAliceDomain"),
        });

        (auth, ledger, RecordingAssembler::new())
    }

    fn args(auth_token: &str) -> IssueCertArgs {
        IssueCertArgs {
            account: "alice".to_string(),
            auth_token: auth_token.to_string(),
            to: "MTarget".to_string(),
            symbol: "shop.mystore".to_string(),
            cert: "domain_naming".to_string(),
            fee: 10_000,
        }
    }

    #[test]
    fn test_execute_assembles_receivers() {
        let (auth, ledger, assembler) = fixtures();
        let config = IssuanceConfig::default();
        let command = IssueCertCommand::new(&auth, &ledger, &ledger, &assembler, &config).unwrap();

        let tx = command.execute(args("secret")).unwrap();

        assert_eq!(tx.account.as_str(), "alice");
        assert_eq!(tx.symbol.as_str(), "SHOP.MYSTORE");
        assert_eq!(tx.fee, 10_000);
        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.outputs[0].purpose, OutputPurpose::CertIssue);
        assert_eq!(tx.outputs[1].purpose, OutputPurpose::CertTransfer);
        assert_eq!(assembler.calls(), 1);
    }

    #[test]
    fn test_auth_failure_stops_before_validation() {
        let (auth, ledger, assembler) = fixtures();
        let config = IssuanceConfig::default();
        let command = IssueCertCommand::new(&auth, &ledger, &ledger, &assembler, &config).unwrap();

        let result = command.execute(args("wrong"));
        assert!(matches!(
            result,
            Err(IssueCertError::Auth(AuthError::InvalidCredentials(_)))
        ));
        assert_eq!(assembler.calls(), 0);
    }

    #[test]
    fn test_rejection_skips_assembly() {
        let (auth, ledger, assembler) = fixtures();
        let config = IssuanceConfig::default();
        let command = IssueCertCommand::new(&auth, &ledger, &ledger, &assembler, &config).unwrap();

        let mut raw = args("secret");
        raw.cert = "bogus_type".to_string();

        assert!(matches!(
            command.execute(raw),
            Err(IssueCertError::Rejected(IssuanceError::UnknownCertificateType(ref t)))
                if t == "BOGUS_TYPE"
        ));
        assert_eq!(assembler.calls(), 0);
    }

    #[test]
    fn test_assembly_error_passes_through() {
        let (auth, ledger, assembler) = fixtures();
        assembler.fail_with(AssemblyError::InsufficientFunds { have: 5, need: 10_000 });
        let config = IssuanceConfig::default();
        let command = IssueCertCommand::new(&auth, &ledger, &ledger, &assembler, &config).unwrap();

        assert!(matches!(
            command.execute(args("secret")),
            Err(IssueCertError::Assembly(AssemblyError::InsufficientFunds { .. }))
        ));
    }

    #[test]
    fn test_unsupported_config_fails_construction() {
        let (auth, ledger, assembler) = fixtures();
        let config = IssuanceConfig {
            enabled_cert_types: Some(vec!["DOMAIN".to_string()]),
            ..IssuanceConfig::default()
        };

        assert!(matches!(
            IssueCertCommand::new(&auth, &ledger, &ledger, &assembler, &config),
            Err(ConfigError::UnsupportedCertType(ref t)) if t == "DOMAIN"
        ));
    }

    #[test]
    fn test_narrowed_config_still_checks_symbol_first() {
        let (auth, ledger, assembler) = fixtures();
        let config = IssuanceConfig {
            enabled_cert_types: Some(vec!["KYC".to_string()]),
            ..IssuanceConfig::default()
        };
        let command = IssueCertCommand::new(&auth, &ledger, &ledger, &assembler, &config).unwrap();

        let mut raw = args("secret");
        raw.symbol = "A".repeat(100);
        raw.to = "MUnknown".to_string();

        assert!(matches!(
            command.execute(raw),
            Err(IssueCertError::Rejected(IssuanceError::SymbolTooLong { actual: 100, .. }))
        ));
        assert_eq!(assembler.calls(), 0);
    }

    #[test]
    fn test_assembly_request_debug_hides_token() {
        let request = AssemblyRequest {
            account: AccountId::from("alice"),
            auth_token: "secret".to_string(),
            symbol: Symbol::from("SHOP.MYSTORE"),
            receivers: Vec::new(),
            fee: 10_000,
        };

        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("alice"));
    }
}
