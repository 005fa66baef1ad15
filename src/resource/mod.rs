//! Resource categorization
//!
//! Turns raw ARM resources into the per-axis node descriptions the tree is
//! built from.
//!
//! # Architecture
//!
//! - [`registry`] - Loads the icon and display-name tables from embedded JSON
//! - [`icons`] - Resolves a resource type to a themed icon
//! - [`grouping`] - Builds the resource group / type / location node configs
//!
//! # Example
//!
//! ```ignore
//! use azgroups::resource::{create_group_config_from_resource, GroupBy};
//!
//! fn group_key(resource: &GenericResource) -> anyhow::Result<String> {
//!     let config = create_group_config_from_resource(resource, Some("sub-id"))?;
//!     Ok(config.node(GroupBy::ResourceType).id.clone())
//! }
//! ```

pub mod grouping;
pub mod icons;
mod registry;

pub use grouping::{
    create_group_config_from_resource, resource_type_label, GroupBy, GroupNodeConfig,
    GroupingConfig,
};
pub use icons::{get_icon_path, icon_name, IconPath, TreeIcon};
pub use registry::{display_name, is_supported_icon_type, supported_icon_types};
