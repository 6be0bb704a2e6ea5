//! Issuance Constants

/// Maximum length of a certificate symbol, in bytes
pub const MAX_SYMBOL_LEN: usize = 64;

/// Separator between the label and the domain of a domain-naming symbol
pub const DOMAIN_SEPARATOR: char = '.';

/// Default maximum domain length under `DomainPolicy::Strict`
pub const DEFAULT_MAX_DOMAIN_LEN: usize = 63;

// ============================================================================
// Certificate-type tokens accepted by the issue command
// ============================================================================

pub const TOKEN_DOMAIN_NAMING: &str = "DOMAIN_NAMING";
pub const TOKEN_MARRIAGE: &str = "MARRIAGE";
pub const TOKEN_KYC: &str = "KYC";
