//! Group Tree
//!
//! Collapses resources into one node per group along the selected axis and
//! tracks which group, if any, the view is focused on.

use crate::azure::resource::GenericResource;
use crate::azure::resource_id::{parse_resource_id, resource_group_scope};
use crate::resource::{create_group_config_from_resource, GroupBy, TreeIcon};
use std::collections::HashMap;

/// The group the tree is currently narrowed to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    focused_group_id: Option<String>,
}

impl FocusState {
    pub fn new(focused_group_id: Option<String>) -> Self {
        Self { focused_group_id }
    }

    pub fn focused_group_id(&self) -> Option<&str> {
        self.focused_group_id.as_deref()
    }

    pub fn set_focused_group_id(&mut self, id: impl Into<String>) {
        self.focused_group_id = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.focused_group_id = None;
    }

    pub fn is_focused(&self, group_id: &str) -> bool {
        self.focused_group_id.as_deref() == Some(group_id)
    }
}

/// A group node and the resources under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTreeItem {
    pub id: String,
    pub label: String,
    pub key_label: String,
    pub icon: Option<TreeIcon>,
    pub resources: Vec<GenericResource>,
}

impl GroupTreeItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        key_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            key_label: key_label.into(),
            icon: None,
            resources: Vec::new(),
        }
    }
}

/// Resources grouped along one axis
#[derive(Debug, Clone, Default)]
pub struct GroupTree {
    pub axis: GroupBy,
    pub groups: Vec<GroupTreeItem>,
    /// Resources that could not be grouped, with the reason
    pub errors: Vec<String>,
}

/// Normalize a user-supplied group id to the form the tree uses
///
/// Resource group ids are lower-cased and cut before `/providers/`; other
/// ids are returned unchanged.
pub fn canonical_group_id(id: &str) -> String {
    if id.to_ascii_lowercase().starts_with("/subscriptions/") {
        resource_group_scope(id)
    } else {
        id.to_string()
    }
}

/// Group to focus for an explicit id, taken from `tree` when it has one
pub fn focus_target(tree: Option<&GroupTree>, id: &str, axis: GroupBy) -> GroupTreeItem {
    let id = canonical_group_id(id);
    tree.and_then(|t| t.find_group(&id))
        .cloned()
        .unwrap_or_else(|| GroupTreeItem::new(&id, &id, axis.key_label()))
}

impl GroupTree {
    /// Group `resources` along `axis`
    ///
    /// Without an explicit `subscription_id`, each resource is scoped to the
    /// subscription in its own id.
    pub fn build(
        resources: &[GenericResource],
        subscription_id: Option<&str>,
        axis: GroupBy,
    ) -> Self {
        let mut groups: Vec<GroupTreeItem> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut errors = Vec::new();

        for resource in resources {
            let subscription = subscription_id.map(String::from).or_else(|| {
                parse_resource_id(&resource.id)
                    .ok()
                    .map(|parts| parts.subscription_id)
            });
            let node = match create_group_config_from_resource(resource, subscription.as_deref()) {
                Ok(config) => config.into_node(axis),
                Err(e) => {
                    tracing::warn!("Skipping resource {}: {}", resource.id, e);
                    errors.push(e.to_string());
                    continue;
                }
            };

            let slot = *index.entry(node.id.clone()).or_insert_with(|| {
                groups.push(GroupTreeItem {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    key_label: node.key_label.clone(),
                    icon: node.icon.clone(),
                    resources: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].resources.push(resource.clone());
        }

        groups.sort_by(|a, b| {
            a.label
                .to_lowercase()
                .cmp(&b.label.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!(
            "Built {} groups by {:?} from {} resources ({} skipped)",
            groups.len(),
            axis,
            resources.len(),
            errors.len()
        );

        Self {
            axis,
            groups,
            errors,
        }
    }

    /// Groups to display: all of them, or only the focused one
    pub fn visible_groups(&self, focus: &FocusState) -> Vec<&GroupTreeItem> {
        match focus.focused_group_id() {
            Some(_) => self.groups.iter().filter(|g| focus.is_focused(&g.id)).collect(),
            None => self.groups.iter().collect(),
        }
    }

    pub fn find_group(&self, group_id: &str) -> Option<&GroupTreeItem> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Group that holds a resource, matching ids case-insensitively
    pub fn find_group_for_resource(&self, resource_id: &str) -> Option<&GroupTreeItem> {
        self.groups.iter().find(|g| {
            g.resources
                .iter()
                .any(|r| r.id.eq_ignore_ascii_case(resource_id))
        })
    }

    pub fn resource_count(&self) -> usize {
        self.groups.iter().map(|g| g.resources.len()).sum()
    }
}
