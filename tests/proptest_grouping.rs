//! Property-based tests using proptest
//!
//! These tests verify resource id parsing, icon resolution and grouping
//! configs using randomized inputs.

use azgroups::azure::{get_resource_group_from_id, GenericResource, InvalidResourceIdError};
use azgroups::resource::{
    create_group_config_from_resource, icon_name, resource_type_label, supported_icon_types,
};
use proptest::prelude::*;

/// Resource group names (letters, digits, and the punctuation Azure allows)
fn arb_resource_group() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9._()-]{0,40}"
}

/// Segment keywords in any of the casings seen in the wild
fn arb_keyword(word: &'static str) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(word.to_string()),
        Just(word.to_lowercase()),
        Just(word.to_uppercase()),
    ]
}

/// Generate a fully qualified resource id and its parts
fn arb_resource_id() -> impl Strategy<Value = (String, String, String)> {
    (
        "[0-9a-f]{8}-[0-9a-f]{4}",
        arb_resource_group(),
        "Microsoft\\.[A-Za-z]{1,12}/[A-Za-z]{1,12}",
        "[a-zA-Z0-9-]{1,20}",
        arb_keyword("resourceGroups"),
        arb_keyword("providers"),
    )
        .prop_map(|(sub, rg, provider, name, rg_kw, providers_kw)| {
            let id = format!(
                "/subscriptions/{}/{}/{}/{}/{}/{}",
                sub, rg_kw, rg, providers_kw, provider, name
            );
            (id, sub, rg)
        })
}

fn resource(id: &str, rtype: Option<String>, location: Option<String>) -> GenericResource {
    GenericResource {
        id: id.to_string(),
        name: None,
        resource_type: rtype,
        kind: None,
        location,
        tags: None,
    }
}

proptest! {
    /// The resource group is extracted with its case preserved
    #[test]
    fn resource_group_is_extracted((id, _sub, rg) in arb_resource_id()) {
        prop_assert_eq!(get_resource_group_from_id(&id).unwrap(), rg);
    }

    /// Ids without a providers segment are rejected
    #[test]
    fn missing_providers_rejected(
        sub in "[0-9a-f]{8}",
        rg in arb_resource_group()
    ) {
        let id = format!("/subscriptions/{}/resourceGroups/{}", sub, rg);
        let err = get_resource_group_from_id(&id).unwrap_err();
        prop_assert_eq!(err, InvalidResourceIdError { id });
    }

    /// Ids without a resourceGroups segment are rejected
    #[test]
    fn missing_resource_group_rejected(
        sub in "[0-9a-f]{8}",
        provider in "Microsoft\\.[A-Za-z]{1,12}/[A-Za-z]{1,12}",
        name in "[a-z0-9]{1,10}"
    ) {
        let id = format!("/subscriptions/{}/providers/{}/{}", sub, provider, name);
        prop_assert!(get_resource_group_from_id(&id).is_err());
    }

    /// Icon resolution never fails and is stable
    #[test]
    fn icon_resolution_is_total(
        rtype in proptest::option::of("\\PC*"),
        kind in proptest::option::of("\\PC*")
    ) {
        let first = icon_name(rtype.as_deref(), kind.as_deref());
        let second = icon_name(rtype.as_deref(), kind.as_deref());
        prop_assert!(first == "resource" || first.starts_with("providers/"));
        prop_assert_eq!(first, second);
    }

    /// Every table entry resolves to its own icon regardless of case
    #[test]
    fn table_types_resolve_to_themselves(index in 0usize..55, upper in any::<bool>()) {
        let types = supported_icon_types();
        let rtype = &types[index % types.len()];
        let input = if upper { rtype.to_uppercase() } else { rtype.clone() };
        prop_assert_eq!(icon_name(Some(&input), None), format!("providers/{}", rtype));
    }

    /// Types outside the table fall back to their raw name and the generic icon
    #[test]
    fn unknown_types_fall_back(rtype in "Microsoft\\.Zz[A-Za-z]{1,10}/[A-Za-z]{1,10}") {
        prop_assert_eq!(resource_type_label(Some(&rtype)), rtype.to_lowercase());
        prop_assert_eq!(icon_name(Some(&rtype), Some("functionapp")), "resource");
    }

    /// Resource group ids are the lower-cased prefix before /providers
    #[test]
    fn resource_group_id_is_lowercased_scope(
        (id, sub, rg) in arb_resource_id(),
        location in proptest::option::of("[a-z]{2,12}")
    ) {
        let config = create_group_config_from_resource(
            &resource(&id, Some("Microsoft.Compute/virtualMachines".to_string()), location.clone()),
            Some(&sub),
        ).unwrap();

        let expected = format!("/subscriptions/{}/resourcegroups/{}", sub, rg).to_lowercase();
        prop_assert_eq!(&config.resource_group.id, &expected);
        prop_assert_eq!(&config.resource_group.label, &rg);
        prop_assert_eq!(
            config.resource_type.id,
            format!("{}/microsoft.compute/virtualmachines", sub)
        );

        match location {
            Some(loc) => {
                prop_assert_eq!(config.location.id, format!("{}/{}", sub, loc));
                prop_assert_eq!(config.location.label, loc);
            }
            None => {
                prop_assert_eq!(config.location.id, "unknown");
                prop_assert_eq!(config.location.label, "Unknown");
            }
        }
    }

    /// Resources differing only in id casing land in the same groups
    #[test]
    fn grouping_ignores_id_case((id, sub, _rg) in arb_resource_id()) {
        let rtype = Some("Microsoft.Storage/storageAccounts".to_string());
        let a = create_group_config_from_resource(
            &resource(&id, rtype.clone(), None),
            Some(&sub),
        ).unwrap();
        let b = create_group_config_from_resource(
            &resource(&id.to_uppercase(), rtype.map(|t| t.to_uppercase()), None),
            Some(&sub),
        ).unwrap();
        prop_assert_eq!(a.resource_group.id, b.resource_group.id);
        prop_assert_eq!(a.resource_type.id, b.resource_type.id);
    }
}

/// Fixed examples that pin down documented behavior
mod known_values {
    use super::*;

    #[test]
    fn mixed_case_function_app_kind() {
        assert_eq!(
            icon_name(Some("microsoft.web/sites"), Some("FunctionApp")),
            "providers/microsoft.web/functionapp"
        );
    }

    #[test]
    fn storage_account_label() {
        assert_eq!(
            resource_type_label(Some("microsoft.storage/storageaccounts")),
            "Storage Accounts"
        );
    }

    #[test]
    fn unknown_type_label_and_icon() {
        assert_eq!(
            resource_type_label(Some("microsoft.unknown/thing")),
            "microsoft.unknown/thing"
        );
        assert_eq!(icon_name(Some("microsoft.unknown/thing"), None), "resource");
    }

    #[test]
    fn virtual_machine_grouping() {
        let vm = resource(
            "/subscriptions/abc/resourceGroups/RG1/providers/Microsoft.Compute/virtualMachines/vm1",
            Some("Microsoft.Compute/virtualMachines".to_string()),
            Some("eastus".to_string()),
        );
        let config = create_group_config_from_resource(&vm, Some("abc")).unwrap();
        assert_eq!(config.resource_group.id, "/subscriptions/abc/resourcegroups/rg1");
        assert_eq!(config.resource_group.label, "RG1");
        assert_eq!(config.resource_type.label, "Virtual Machines");
        assert_eq!(config.location.label, "eastus");
        assert_eq!(config.location.id, "abc/eastus");
    }
}
