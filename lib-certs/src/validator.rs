//! Issuance Validation
//!
//! [`IssuanceValidator::validate`] is the single gate between an issuance
//! request and the receiver builder. Checks run in a fixed order and the
//! first failure rejects the request:
//!
//! 1. Symbol length ≤ `MAX_SYMBOL_LEN`
//! 2. Target address format
//! 3. Target address is bound to an identity
//! 4. Certificate type resolves through the registry
//! 5. Kind-specific checks (domain naming only):
//!    a. symbol contains a separator
//!    b. domain component is valid
//!    c. no naming certificate exists for the symbol yet
//!    d. the requester owns a `Domain` certificate over the domain
//!
//! Validation never writes. The duplicate check is best-effort: a concurrent
//! request for the same symbol can pass it too, and the ledger's commit rules
//! decide which one lands.

use tracing::{debug, info, warn};

use crate::config::IssuanceConfig;
use crate::constants::MAX_SYMBOL_LEN;
use crate::domain::{extract_domain, is_valid_domain, DomainPolicy};
use crate::errors::{ConfigError, IssuanceError, IssuanceResult};
use crate::registry::CertTypeRegistry;
use crate::resolver::{AddressValidator, CertificateLedger, OwnershipResolver};
use crate::types::{CertificateKind, IssuancePlan, IssuanceRequest, Symbol, ValidatedIssuance};

/// Validates issuance requests against ledger state
pub struct IssuanceValidator<'a> {
    resolver: OwnershipResolver<'a>,
    addresses: &'a dyn AddressValidator,
    registry: CertTypeRegistry,
    domain_policy: DomainPolicy,
}

impl<'a> IssuanceValidator<'a> {
    /// Create a validator from a configuration
    ///
    /// Fails if the configuration enables an unsupported certificate type.
    pub fn new(
        ledger: &'a dyn CertificateLedger,
        addresses: &'a dyn AddressValidator,
        config: &IssuanceConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_registry(
            ledger,
            addresses,
            config.registry()?,
            config.domain_policy,
        ))
    }

    pub fn with_registry(
        ledger: &'a dyn CertificateLedger,
        addresses: &'a dyn AddressValidator,
        registry: CertTypeRegistry,
        domain_policy: DomainPolicy,
    ) -> Self {
        Self {
            resolver: OwnershipResolver::new(ledger),
            addresses,
            registry,
            domain_policy,
        }
    }

    /// Validate a normalized request
    pub fn validate(&self, request: &IssuanceRequest) -> IssuanceResult<ValidatedIssuance> {
        match self.check(request) {
            Ok(validated) => {
                info!(
                    symbol = %validated.symbol,
                    kind = %validated.kind(),
                    target = %validated.target_address,
                    owner = %validated.target_owner,
                    "Certificate issuance validated"
                );
                Ok(validated)
            }
            Err(err) => {
                warn!(
                    symbol = %request.symbol,
                    cert_type = %request.cert_type_token,
                    rejection = ?err.kind(),
                    "Certificate issuance rejected: {}",
                    err
                );
                Err(err)
            }
        }
    }

    fn check(&self, request: &IssuanceRequest) -> IssuanceResult<ValidatedIssuance> {
        // =====================================================================
        // Check 1: Symbol length
        // =====================================================================
        if request.symbol.len() > MAX_SYMBOL_LEN {
            return Err(IssuanceError::SymbolTooLong {
                symbol: request.symbol.clone(),
                max: MAX_SYMBOL_LEN,
                actual: request.symbol.len(),
            });
        }

        // =====================================================================
        // Check 2: Target address format
        // =====================================================================
        if !self.addresses.is_valid_address(&request.target_address) {
            return Err(IssuanceError::InvalidAddress(request.target_address.clone()));
        }

        // =====================================================================
        // Check 3: Target must be identity-bound
        // =====================================================================
        let target_owner = self
            .resolver
            .owner_identity_of(&request.target_address)?
            .ok_or_else(|| IssuanceError::TargetNotIdentityBound(request.target_address.clone()))?;

        // =====================================================================
        // Check 4: Certificate type
        // =====================================================================
        let kind = self.registry.resolve(&request.cert_type_token)?;
        debug!(symbol = %request.symbol, kind = %kind, "Resolved certificate type");

        // =====================================================================
        // Check 5: Kind-specific rules
        // =====================================================================
        let plan = match kind {
            CertificateKind::DomainNaming => self.check_domain_naming(request)?,
            other => IssuancePlan::Generic { kind: other },
        };

        Ok(ValidatedIssuance {
            requesting_account: request.requesting_account.clone(),
            target_address: request.target_address.clone(),
            target_owner,
            symbol: request.symbol.clone(),
            fee: request.fee,
            plan,
        })
    }

    fn check_domain_naming(&self, request: &IssuanceRequest) -> IssuanceResult<IssuancePlan> {
        let symbol = &request.symbol;

        // 5a: separator present
        let domain = extract_domain(symbol.as_str())
            .ok_or_else(|| IssuanceError::MissingDomainSeparator(symbol.clone()))?;

        // 5b: domain syntax
        if !is_valid_domain(domain, self.domain_policy) {
            return Err(IssuanceError::InvalidDomainSyntax {
                symbol: symbol.clone(),
                domain: domain.to_string(),
            });
        }
        let domain = Symbol::new(domain);

        // 5c: naming certificate must not exist yet
        if self
            .resolver
            .certificate_exists(symbol, CertificateKind::DomainNaming)?
        {
            return Err(IssuanceError::DuplicateDomainCertificate(symbol.clone()));
        }

        // 5d: requester must own the parent domain certificate
        let domain_cert_address = self
            .resolver
            .first_certificate_holder(
                &request.requesting_account,
                &domain,
                CertificateKind::Domain,
            )?
            .ok_or_else(|| IssuanceError::NoDomainCertificateOwned {
                account: request.requesting_account.clone(),
                domain: domain.clone(),
            })?;

        debug!(
            symbol = %symbol,
            domain = %domain,
            holder = %domain_cert_address,
            "Domain certificate located"
        );

        Ok(IssuancePlan::DomainNaming {
            domain,
            domain_cert_address,
        })
    }
}
