//! Request Normalization
//!
//! Converts raw command arguments into an [`IssuanceRequest`] in canonical
//! form. The symbol and certificate-type token are uppercased. Account and
//! address strings pass through unchanged because address encodings are
//! case-sensitive.

use std::fmt;

use lib_types::{AccountId, Address, Amount};
use serde::{Deserialize, Serialize};

use crate::types::{IssuanceRequest, Symbol};

/// Raw arguments of the issue-certificate command, as typed by the user
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCertArgs {
    pub account: String,
    /// Credential checked by the authenticator and used to sign
    #[serde(skip_serializing, default)]
    pub auth_token: String,
    /// Target address
    pub to: String,
    pub symbol: String,
    /// Certificate-type token, any case
    pub cert: String,
    pub fee: Amount,
}

impl fmt::Debug for IssueCertArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueCertArgs")
            .field("account", &self.account)
            .field("auth_token", &"<redacted>")
            .field("to", &self.to)
            .field("symbol", &self.symbol)
            .field("cert", &self.cert)
            .field("fee", &self.fee)
            .finish()
    }
}

/// Build the canonical request for `args`
pub fn normalize_request(args: &IssueCertArgs) -> IssuanceRequest {
    IssuanceRequest {
        requesting_account: AccountId::new(args.account.as_str()),
        target_address: Address::new(args.to.as_str()),
        symbol: Symbol::normalized(&args.symbol),
        cert_type_token: args.cert.to_ascii_uppercase(),
        fee: args.fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SYMBOL_LEN;

    fn args() -> IssueCertArgs {
        IssueCertArgs {
            account: "alice".to_string(),
            auth_token: "secret".to_string(),
            to: "MTargetAddress".to_string(),
            symbol: "shop.MyStore".to_string(),
            cert: "domain_naming".to_string(),
            fee: 10_000,
        }
    }

    #[test]
    fn test_uppercases_symbol_and_token() {
        let request = normalize_request(&args());
        assert_eq!(request.symbol.as_str(), "SHOP.MYSTORE");
        assert_eq!(request.cert_type_token, "DOMAIN_NAMING");
    }

    #[test]
    fn test_preserves_account_address_and_fee() {
        let raw = args();
        let request = normalize_request(&raw);
        assert_eq!(request.requesting_account.as_str(), "alice");
        assert_eq!(request.target_address.as_str(), "MTargetAddress");
        assert_eq!(request.fee, 10_000);
        // Caller's arguments are left as typed
        assert_eq!(raw.symbol, "shop.MyStore");
    }

    #[test]
    fn test_symbol_byte_length_unchanged() {
        let mut raw = args();
        raw.symbol = format!("\u{149}{}", "a".repeat(62));
        assert_eq!(raw.symbol.len(), MAX_SYMBOL_LEN);

        let request = normalize_request(&raw);
        assert_eq!(request.symbol.len(), MAX_SYMBOL_LEN);
    }

    #[test]
    fn test_debug_hides_token() {
        let rendered = format!("{:?}", args());
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("MTargetAddress"));
    }

    #[test]
    fn test_serialized_args_parse_without_token() {
        let encoded = toml::to_string(&args()).unwrap();
        assert!(!encoded.contains("secret"));

        let decoded: IssueCertArgs = toml::from_str(&encoded).unwrap();
        assert!(decoded.auth_token.is_empty());
        assert_eq!(decoded.symbol, "shop.MyStore");
        assert_eq!(decoded.fee, 10_000);
    }
}
