//! Receiver-Set Builder
//!
//! Turns a validated issuance into the ordered outputs of the issuance
//! transaction. Index 0 is always the newly issued certificate; side-effect
//! transfers follow it.

use crate::types::{
    CertificateKind, IssuancePlan, OutputPurpose, ReceiverRecord, ValidatedIssuance,
};

/// Build the receiver records for a validated issuance
///
/// - Every issuance yields the `CertIssue` output to the target address.
/// - A domain-naming issuance also yields a `CertTransfer` output moving the
///   parent `Domain` certificate to the address that already holds it,
///   recording its use in this mint.
pub fn build_receivers(issuance: &ValidatedIssuance) -> Vec<ReceiverRecord> {
    let mut receivers = vec![ReceiverRecord::certificate(
        issuance.target_address.clone(),
        issuance.symbol.clone(),
        issuance.kind(),
        OutputPurpose::CertIssue,
    )];

    match &issuance.plan {
        IssuancePlan::DomainNaming {
            domain,
            domain_cert_address,
        } => receivers.push(ReceiverRecord::certificate(
            domain_cert_address.clone(),
            domain.clone(),
            CertificateKind::Domain,
            OutputPurpose::CertTransfer,
        )),
        IssuancePlan::Generic { .. } => {}
    }

    receivers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;
    use lib_types::{AccountId, Address, Did};

    fn issuance(symbol: &str, plan: IssuancePlan) -> ValidatedIssuance {
        ValidatedIssuance {
            requesting_account: AccountId::from("alice"),
            target_address: Address::from("MTarget"),
            target_owner: Did::from("TARGET.DID"),
            symbol: Symbol::from(symbol),
            fee: 10_000,
            plan,
        }
    }

    #[test]
    fn test_domain_naming_yields_issue_then_transfer() {
        let issuance = issuance(
            "SHOP.MYSTORE",
            IssuancePlan::DomainNaming {
                domain: Symbol::from("MYSTORE"),
                domain_cert_address: Address::from("MDomainHolder"),
            },
        );

        let receivers = build_receivers(&issuance);
        assert_eq!(receivers.len(), 2);

        assert_eq!(
            receivers[0],
            ReceiverRecord::certificate(
                Address::from("MTarget"),
                Symbol::from("SHOP.MYSTORE"),
                CertificateKind::DomainNaming,
                OutputPurpose::CertIssue,
            )
        );
        assert_eq!(
            receivers[1],
            ReceiverRecord::certificate(
                Address::from("MDomainHolder"),
                Symbol::from("MYSTORE"),
                CertificateKind::Domain,
                OutputPurpose::CertTransfer,
            )
        );
    }

    #[test]
    fn test_generic_yields_single_issue() {
        let issuance = issuance(
            "KYC-0001",
            IssuancePlan::Generic { kind: CertificateKind::Kyc },
        );

        let receivers = build_receivers(&issuance);
        assert_eq!(receivers.len(), 1);
        assert_eq!(receivers[0].cert_kind, CertificateKind::Kyc);
        assert_eq!(receivers[0].purpose, OutputPurpose::CertIssue);
        assert_eq!(receivers[0].address, Address::from("MTarget"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let issuance = issuance(
            "SHOP.MYSTORE",
            IssuancePlan::DomainNaming {
                domain: Symbol::from("MYSTORE"),
                domain_cert_address: Address::from("MDomainHolder"),
            },
        );
        assert_eq!(build_receivers(&issuance), build_receivers(&issuance));
    }
}
