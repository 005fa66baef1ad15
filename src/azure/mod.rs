//! Azure Resource Manager types
//!
//! - [`resource`] - The generic ARM resource shape and listing loaders
//! - [`resource_id`] - Parsing of fully qualified resource ids

pub mod resource;
pub mod resource_id;

pub use resource::{load_resources, parse_resources, GenericResource, ResourceFormat};
pub use resource_id::{
    get_resource_group_from_id, parse_resource_id, resource_group_scope, InvalidResourceIdError,
    ResourceIdParts,
};
