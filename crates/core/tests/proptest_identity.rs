//! Property-based tests for structural identity
//!
//! Validates the identity rule used in place of hidden item IDs:
//! - identity is symmetric
//! - identity is transitive
//! - case changes in name/lore never break identity
//! - wear and count never affect identity

use exogear_core::{ItemInstance, Material};
use proptest::prelude::*;

fn material_strategy() -> impl Strategy<Value = Material> {
    prop_oneof![
        Just(Material::Coal),
        Just(Material::BlazeRod),
        Just(Material::GoldChestplate),
        Just(Material::DiamondBoots),
    ]
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z ]{1,24}"
}

fn lore_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9% ]{0,20}", 0..4)
}

// Flip the ASCII case of every letter.
fn flip_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Property: identity is symmetric.
    #[test]
    fn identity_is_symmetric(
        material in material_strategy(),
        name in name_strategy(),
        lore in lore_strategy(),
        other_name in name_strategy(),
        other_lore in lore_strategy(),
    ) {
        let a = ItemInstance::named(material, name, lore);
        let b = ItemInstance::named(material, other_name, other_lore);
        prop_assert_eq!(a.matches(&b), b.matches(&a));
    }

    /// Property: case changes preserve identity, so identity is also
    /// transitive across differently-cased copies.
    #[test]
    fn case_changes_preserve_identity(
        material in material_strategy(),
        name in name_strategy(),
        lore in lore_strategy(),
    ) {
        let a = ItemInstance::named(material, name.clone(), lore.clone());
        let b = ItemInstance::named(
            material,
            flip_case(&name),
            lore.iter().map(|l| flip_case(l)).collect(),
        );
        let c = ItemInstance::named(material, name.to_ascii_uppercase(), lore.clone());
        prop_assert!(a.matches(&b));
        prop_assert!(b.matches(&c));
        prop_assert!(a.matches(&c));
    }

    /// Property: wear and count are invisible to identity.
    #[test]
    fn wear_and_count_do_not_affect_identity(
        material in material_strategy(),
        name in name_strategy(),
        lore in lore_strategy(),
        wear in 0u16..500,
        count in 1u32..64,
    ) {
        let pristine = ItemInstance::named(material, name.clone(), lore.clone());
        let mut used = ItemInstance::named(material, name, lore);
        used.wear = wear;
        used.count = count;
        prop_assert!(pristine.matches(&used));
    }

    /// Property: an instance never matches two definitions that differ
    /// in name (beyond case) or lore.
    #[test]
    fn distinct_definitions_never_both_match(
        material in material_strategy(),
        name in name_strategy(),
        lore in lore_strategy(),
        suffix in "[a-z]{1,8}",
    ) {
        let canonical_a = ItemInstance::named(material, name.clone(), lore.clone());
        let canonical_b = ItemInstance::named(material, format!("{name}{suffix}"), lore.clone());
        let instance = ItemInstance::named(material, name, lore);
        prop_assert!(instance.matches(&canonical_a));
        prop_assert!(!instance.matches(&canonical_b));
    }
}
