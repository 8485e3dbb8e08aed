//! Property-based tests for the G/L resolver.
//!
//! These tests validate the resolver's purity and the double-entry
//! account pair invariants using proptest for randomized input
//! generation.

use proptest::prelude::*;

use chargeledger_shared::config::{
    DepartmentEntry, DirectoryConfig, GlAccountEntry, GlAccountsEntry,
};
use chargeledger_shared::types::DepartmentCode;

use crate::directory::Directory;
use crate::gl::resolver::GlResolver;
use crate::gl::types::ChargeType;

/// Strategy for generating random ChargeType values.
fn arb_charge_type() -> impl Strategy<Value = ChargeType> {
    prop_oneof![
        Just(ChargeType::ConsumableIssue),
        Just(ChargeType::Chargeback),
        Just(ChargeType::Interdepartmental),
    ]
}

fn department_entry(code: u16) -> DepartmentEntry {
    let account = |prefix: &str| GlAccountEntry {
        account: format!("{prefix}-{code}"),
        name: format!("{prefix} account for {code}"),
    };
    DepartmentEntry {
        code,
        name: format!("Department {code}"),
        short_name: format!("D{code}"),
        color: None,
        gl_accounts: GlAccountsEntry {
            expense: account("5100"),
            inventory: account("1400"),
            chargeback: account("5900"),
            consumable: account("5200"),
        },
    }
}

/// Strategy for a directory of 2..=12 departments with distinct codes
/// and distinct account identifiers, plus two distinct codes from it.
fn arb_directory_and_pair() -> impl Strategy<Value = (Directory, DepartmentCode, DepartmentCode)> {
    proptest::collection::btree_set(1u16..500, 2..12).prop_flat_map(|codes| {
        let codes: Vec<u16> = codes.into_iter().collect();
        let n = codes.len();
        let config = DirectoryConfig {
            departments: codes.iter().copied().map(department_entry).collect(),
        };
        let directory = Directory::from_config(&config).expect("generated codes are unique");
        ((0..n, 0..n), Just((directory, codes))).prop_filter_map(
            "from and to must differ",
            |((i, j), (directory, codes))| {
                (i != j).then(|| {
                    (
                        directory,
                        DepartmentCode(codes[i]),
                        DepartmentCode(codes[j]),
                    )
                })
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Calling resolve twice with identical inputs yields identical output.
    #[test]
    fn prop_resolve_is_pure(
        (directory, from, to) in arb_directory_and_pair(),
        charge_type in arb_charge_type()
    ) {
        let first = GlResolver::resolve(&directory, from, to, charge_type);
        let second = GlResolver::resolve(&directory, from, to, charge_type);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first.unwrap(), second.unwrap());
    }

    /// The resolved pair never debits and credits the same account.
    #[test]
    fn prop_debit_and_credit_accounts_differ(
        (directory, from, to) in arb_directory_and_pair(),
        charge_type in arb_charge_type()
    ) {
        let pair = GlResolver::resolve(&directory, from, to, charge_type).unwrap();
        prop_assert_ne!(pair.debit.code, pair.credit.code);
    }

    /// The credit side is always the issuing department's inventory
    /// account, regardless of charge type.
    #[test]
    fn prop_credit_is_issuing_inventory(
        (directory, from, to) in arb_directory_and_pair(),
        charge_type in arb_charge_type()
    ) {
        let pair = GlResolver::resolve(&directory, from, to, charge_type).unwrap();
        let issuing = directory.gl_accounts(from).unwrap();
        prop_assert_eq!(&pair.credit, &issuing.inventory);
    }

    /// The debit side is the receiving department's account selected by
    /// charge type.
    #[test]
    fn prop_debit_matches_charge_type(
        (directory, from, to) in arb_directory_and_pair(),
        charge_type in arb_charge_type()
    ) {
        let pair = GlResolver::resolve(&directory, from, to, charge_type).unwrap();
        let receiving = directory.gl_accounts(to).unwrap();
        let expected = match charge_type {
            ChargeType::ConsumableIssue => &receiving.expense,
            ChargeType::Chargeback => &receiving.chargeback,
            ChargeType::Interdepartmental => &receiving.consumable,
        };
        prop_assert_eq!(&pair.debit, expected);
    }

    /// Resolving a department against itself always fails.
    #[test]
    fn prop_same_department_always_fails(
        (directory, from, _to) in arb_directory_and_pair(),
        charge_type in arb_charge_type()
    ) {
        let result = GlResolver::resolve(&directory, from, from, charge_type);
        prop_assert!(result.is_err());
    }
}
