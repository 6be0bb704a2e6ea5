//! Asset Certificate Issuance
//!
//! Validates certificate issuance requests against ledger state and builds
//! the outputs of the issuance transaction.
//!
//! # Pipeline
//!
//! ```text
//! IssueCertArgs ─normalize─▶ IssuanceRequest ─validate─▶ ValidatedIssuance
//!                                                          │
//!                                      build_receivers ◀───┘
//!                                            │
//!                                            ▼
//!                                Vec<ReceiverRecord> ─▶ TransactionAssembler
//! ```
//!
//! # Domain Naming
//!
//! A `DOMAIN_NAMING` certificate over `<label>.<domain>` can only be minted by
//! an account holding the `Domain` certificate over `<domain>`. The issuance
//! transaction carries two outputs, in this order:
//!
//! 1. the new naming certificate, issued to the target address
//! 2. the parent domain certificate, transferred to the address holding it
//!
//! # Usage
//!
//! ```ignore
//! use lib_certs::{build_receivers, IssuanceConfig, IssuanceValidator};
//!
//! let validator = IssuanceValidator::new(&ledger, &ledger, &IssuanceConfig::default())?;
//! let issuance = validator.validate(&request)?;
//! let receivers = build_receivers(&issuance);
//! ```

pub mod command;
pub mod config;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod normalize;
pub mod receivers;
pub mod registry;
pub mod resolver;
pub mod testing;
pub mod types;
pub mod validator;

pub use command::{AssemblyRequest, Authenticator, IssueCertCommand, TransactionAssembler};
pub use config::IssuanceConfig;
pub use constants::MAX_SYMBOL_LEN;
pub use domain::{extract_domain, is_valid_domain, DomainPolicy};
pub use errors::{
    AssemblyError, AuthError, ConfigError, IssuanceError, IssuanceResult, IssueCertError, LedgerError,
    LedgerResult, RejectionKind,
};
pub use normalize::{normalize_request, IssueCertArgs};
pub use receivers::build_receivers;
pub use registry::{CertTypeRegistry, SUPPORTED_CERT_TYPES};
pub use resolver::{AddressValidator, CertificateLedger, OwnershipResolver};
pub use types::*;
pub use validator::IssuanceValidator;
