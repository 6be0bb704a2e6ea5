//! Certificate Type Registry
//!
//! Maps a certificate-type token to the kind it mints. This table is the only
//! way a kind becomes mintable through the issue command: a kind missing from
//! it is rejected even if every other check would pass.

use crate::constants::{TOKEN_DOMAIN_NAMING, TOKEN_KYC, TOKEN_MARRIAGE};
use crate::errors::{ConfigError, IssuanceError, IssuanceResult};
use crate::types::CertificateKind;

/// Every token the issue command can accept, in display order
pub const SUPPORTED_CERT_TYPES: &[(&str, CertificateKind)] = &[
    (TOKEN_DOMAIN_NAMING, CertificateKind::DomainNaming),
    (TOKEN_MARRIAGE, CertificateKind::Marriage),
    (TOKEN_KYC, CertificateKind::Kyc),
];

/// Closed lookup from uppercase token to certificate kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertTypeRegistry {
    entries: Vec<(&'static str, CertificateKind)>,
}

impl Default for CertTypeRegistry {
    fn default() -> Self {
        Self {
            entries: SUPPORTED_CERT_TYPES.to_vec(),
        }
    }
}

impl CertTypeRegistry {
    /// Registry with every supported token enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry narrowed to the given tokens
    ///
    /// Tokens are matched case-insensitively. Fails on the first token that is
    /// not in [`SUPPORTED_CERT_TYPES`].
    pub fn restricted_to<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref().to_ascii_uppercase();
            let entry = SUPPORTED_CERT_TYPES
                .iter()
                .find(|(known, _)| *known == token)
                .ok_or(ConfigError::UnsupportedCertType(token))?;
            if !entries.contains(entry) {
                entries.push(*entry);
            }
        }
        Ok(Self { entries })
    }

    /// Resolve an uppercase token
    pub fn resolve(&self, token: &str) -> IssuanceResult<CertificateKind> {
        self.entries
            .iter()
            .find(|(known, _)| *known == token)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| IssuanceError::UnknownCertificateType(token.to_string()))
    }

    /// Enabled tokens
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }
}
