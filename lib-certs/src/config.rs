//! Issuance Configuration
//!
//! Node-level knobs for certificate issuance, loadable from TOML:
//!
//! ```toml
//! enabled_cert_types = ["DOMAIN_NAMING"]
//!
//! [domain_policy]
//! mode = "strict"
//! max_len = 32
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::DomainPolicy;
use crate::errors::ConfigError;
use crate::registry::CertTypeRegistry;

/// Configuration for certificate issuance
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuanceConfig {
    /// Rules applied to the domain component of domain-naming symbols
    pub domain_policy: DomainPolicy,
    /// Narrows the mintable certificate types; `None` enables all of them
    pub enabled_cert_types: Option<Vec<String>>,
}

impl IssuanceConfig {
    /// Strict domain rules with every certificate type enabled
    pub fn for_testing() -> Self {
        Self {
            domain_policy: DomainPolicy::strict(),
            enabled_cert_types: None,
        }
    }

    /// Build the certificate type registry this configuration allows
    pub fn registry(&self) -> std::result::Result<CertTypeRegistry, ConfigError> {
        match &self.enabled_cert_types {
            Some(tokens) => CertTypeRegistry::restricted_to(tokens),
            None => Ok(CertTypeRegistry::new()),
        }
    }

    /// Parse and check a TOML configuration
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("Invalid issuance config")?;
        config
            .registry()
            .context("Invalid enabled_cert_types in issuance config")?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read issuance config {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("Failed to load issuance config {}", path.display()))
    }
}
