//! Resource Id Parsing
//!
//! Azure resource ids look like
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/{provider}/{type}/{name}`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Matches a fully qualified resource id
///
/// Segment keywords match ASCII case-insensitively, the same way
/// [`resource_group_scope`] finds `/providers/`.
static RESOURCE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u:/subscriptions/)(.*)(?i-u:/resourceGroups/)(.*)(?i-u:/providers/)(.*)/(.*)",
    )
    .unwrap()
});

/// Raised when a string is not a resource id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidResourceIdError {
    pub id: String,
}

impl fmt::Display for InvalidResourceIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid Azure Resource Id: {}", self.id)
    }
}

impl std::error::Error for InvalidResourceIdError {}

/// Captured segments of a resource id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdParts {
    pub subscription_id: String,
    pub resource_group: String,
    pub provider: String,
    pub rest: String,
}

pub fn parse_resource_id(id: &str) -> Result<ResourceIdParts, InvalidResourceIdError> {
    let caps = RESOURCE_ID_REGEX
        .captures(id)
        .ok_or_else(|| InvalidResourceIdError { id: id.to_string() })?;

    let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

    match (group(1), group(2), group(3), group(4)) {
        (Some(subscription_id), Some(resource_group), Some(provider), Some(rest)) => {
            Ok(ResourceIdParts {
                subscription_id,
                resource_group,
                provider,
                rest,
            })
        }
        _ => Err(InvalidResourceIdError { id: id.to_string() }),
    }
}

/// Resource group name from a resource id, case preserved
pub fn get_resource_group_from_id(id: &str) -> Result<String, InvalidResourceIdError> {
    parse_resource_id(id).map(|parts| parts.resource_group)
}

/// Lower-cased id of the resource group that owns a resource
///
/// Everything before the first `/providers/` segment. Ids without one are
/// returned whole.
pub fn resource_group_scope(id: &str) -> String {
    let end = id
        .to_ascii_lowercase()
        .find("/providers/")
        .unwrap_or(id.len());
    id[..end].to_lowercase()
}
