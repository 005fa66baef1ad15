//! Grouping Config
//!
//! Describes how a single resource is categorized along the three tree
//! axes. Sibling resources whose node ids match collapse into one group.

use super::icons::{get_icon_path, TreeIcon};
use super::registry::display_name;
use crate::azure::resource::GenericResource;
use crate::azure::resource_id::{get_resource_group_from_id, resource_group_scope};
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RESOURCE_GROUPS_KEY: &str = "Resource Groups";
pub const RESOURCE_TYPES_KEY: &str = "Resource Types";
pub const LOCATION_KEY: &str = "Location";

/// Sentinel id and label for missing metadata
pub const UNKNOWN: &str = "unknown";

const FUNCTION_APP_KIND: &str = "functionapp";
const WEB_SITES: &str = "microsoft.web/sites";
const FUNCTION_APP_TYPE: &str = "microsoft.web/functionapp";
const SERVER_FARMS_TYPE: &str = "microsoft.web/serverfarms";

/// Tree axis to group resources by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    #[default]
    ResourceGroup,
    ResourceType,
    Location,
}

impl GroupBy {
    pub fn key_label(self) -> &'static str {
        match self {
            GroupBy::ResourceGroup => RESOURCE_GROUPS_KEY,
            GroupBy::ResourceType => RESOURCE_TYPES_KEY,
            GroupBy::Location => LOCATION_KEY,
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_label())
    }
}

/// One axis of a grouping config
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNodeConfig {
    /// Stable key; equal ids collapse into one tree node
    pub id: String,
    pub label: String,
    /// Category header, constant per axis
    pub key_label: String,
    pub icon: Option<TreeIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupingConfig {
    pub resource_group: GroupNodeConfig,
    pub resource_type: GroupNodeConfig,
    pub location: GroupNodeConfig,
}

impl GroupingConfig {
    pub fn node(&self, axis: GroupBy) -> &GroupNodeConfig {
        match axis {
            GroupBy::ResourceGroup => &self.resource_group,
            GroupBy::ResourceType => &self.resource_type,
            GroupBy::Location => &self.location,
        }
    }

    pub fn into_node(self, axis: GroupBy) -> GroupNodeConfig {
        match axis {
            GroupBy::ResourceGroup => self.resource_group,
            GroupBy::ResourceType => self.resource_type,
            GroupBy::Location => self.location,
        }
    }
}

/// Human-readable label for a resource type
///
/// Falls back to the lower-cased type, or `unknown` when there is none.
pub fn resource_type_label(resource_type: Option<&str>) -> String {
    match resource_type.map(str::to_lowercase) {
        Some(rtype) => display_name(&rtype).map(String::from).unwrap_or(rtype),
        None => UNKNOWN.to_string(),
    }
}

fn scoped_id(subscription_id: Option<&str>, value: Option<&str>) -> String {
    match (subscription_id, value) {
        (Some(sub), Some(value)) => format!("{}/{}", sub, value),
        _ => UNKNOWN.to_string(),
    }
}

/// Build the grouping config for a resource
///
/// Fails only when the resource id is malformed.
pub fn create_group_config_from_resource(
    resource: &GenericResource,
    subscription_id: Option<&str>,
) -> Result<GroupingConfig> {
    let resource_group = GroupNodeConfig {
        id: resource_group_scope(&resource.id),
        label: get_resource_group_from_id(&resource.id)?,
        key_label: RESOURCE_GROUPS_KEY.to_string(),
        icon: None,
    };

    let is_function_app = resource
        .kind
        .as_deref()
        .is_some_and(|k| k.eq_ignore_ascii_case(FUNCTION_APP_KIND));

    let resource_type = if is_function_app {
        function_resource_type(resource, subscription_id)
    } else {
        let rtype = resource.resource_type.as_deref();
        GroupNodeConfig {
            id: scoped_id(subscription_id, rtype.map(str::to_lowercase).as_deref()),
            label: resource_type_label(rtype),
            key_label: RESOURCE_TYPES_KEY.to_string(),
            icon: Some(TreeIcon::Asset(get_icon_path(rtype, None))),
        }
    };

    let location = GroupNodeConfig {
        id: scoped_id(subscription_id, resource.location.as_deref()),
        label: resource
            .location
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        key_label: LOCATION_KEY.to_string(),
        icon: Some(TreeIcon::Glyph("globe")),
    };

    Ok(GroupingConfig {
        resource_group,
        resource_type,
        location,
    })
}

/// Function apps and the plans backing them get their own type groups
fn function_resource_type(
    resource: &GenericResource,
    subscription_id: Option<&str>,
) -> GroupNodeConfig {
    let is_site = resource
        .resource_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case(WEB_SITES));

    let (rtype, fallback) = if is_site {
        (FUNCTION_APP_TYPE, "Function App")
    } else {
        (SERVER_FARMS_TYPE, "App Service Plan")
    };

    GroupNodeConfig {
        id: scoped_id(subscription_id, Some(rtype)),
        label: display_name(rtype).unwrap_or(fallback).to_string(),
        key_label: RESOURCE_TYPES_KEY.to_string(),
        icon: Some(TreeIcon::Asset(get_icon_path(Some(rtype), None))),
    }
}
