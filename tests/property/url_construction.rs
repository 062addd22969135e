// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for URL Construction

use aci_l3out::{Action, Protocol, ResourceKey, ResourceLocator};
use proptest::prelude::*;

fn apic_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.:-]{1,64}"
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Post), Just(Action::Get), Just(Action::Delete)]
}

proptest! {
    /// No doubled separator appears at the join point
    #[test]
    fn prop_join_never_doubles_separator(
        slashes in 0usize..4,
        rest in "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.json",
    ) {
        let locator = ResourceLocator::new(Protocol::Https, "10.0.0.1");
        let url = locator.url(&format!("{}{}", "/".repeat(slashes), rest));

        prop_assert_eq!(url, format!("https://10.0.0.1/{}", rest));
    }

    /// Valid APIC names appear verbatim in the create and delete targets
    #[test]
    fn prop_targets_embed_names(
        tenant in apic_name(),
        bd in apic_name(),
        l3out in apic_name(),
    ) {
        let key = ResourceKey::new(&tenant, &bd, &l3out).unwrap();
        let locator = ResourceLocator::new(Protocol::Http, "127.0.0.1:8080");

        prop_assert_eq!(
            locator.create_url(&key),
            format!("http://127.0.0.1:8080/api/mo/uni/tn-{}/BD-{}.json", tenant, bd)
        );
        prop_assert_eq!(
            locator.delete_url(&key),
            format!(
                "http://127.0.0.1:8080/api/mo/uni/tn-{}/BD-{}/rsBDToOut-{}.json",
                tenant, bd, l3out
            )
        );
    }

    /// Every target URL is a single-separator path under the base
    #[test]
    fn prop_target_urls_well_formed(
        tenant in apic_name(),
        bd in apic_name(),
        l3out in apic_name(),
        action in any_action(),
    ) {
        let key = ResourceKey::new(&tenant, &bd, &l3out).unwrap();
        let locator = ResourceLocator::new(Protocol::Https, "apic1");
        let url = locator.target_url(action, &key);

        let path = url.strip_prefix("https://apic1/").unwrap();
        prop_assert!(!path.contains("//"));
        prop_assert!(path.starts_with("api/"));
        prop_assert!(path.ends_with(".json"));
    }

    /// Names with separators or whitespace never reach a URL
    #[test]
    fn prop_unsafe_names_rejected(
        prefix in "[A-Za-z0-9]{0,10}",
        bad in prop_oneof![Just('/'), Just(' '), Just('\t'), Just('\n')],
        suffix in "[A-Za-z0-9]{0,10}",
    ) {
        let name = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(ResourceKey::new("T1", &name, "L3OUT1").is_err());
    }
}
