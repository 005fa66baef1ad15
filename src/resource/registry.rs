//! Provider Registry - Load icon and display-name tables from JSON
//!
//! The table of resource types with bundled icons and the human-readable
//! names for a subset of them are embedded at compile time and parsed once.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded provider table (compiled into the binary)
const PROVIDERS_FILE: &str = include_str!("../resources/providers.json");

/// Root structure of resources/providers.json
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderRegistry {
    /// Lower-case ARM resource types that have an icon under `providers/`
    pub icon_types: Vec<String>,
    /// Display names keyed by lower-case resource type
    #[serde(default)]
    pub display_names: HashMap<String, String>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();

/// Get the provider registry (loads from embedded JSON on first access)
pub fn get_registry() -> &'static ProviderRegistry {
    REGISTRY.get_or_init(|| {
        serde_json::from_str(PROVIDERS_FILE)
            .unwrap_or_else(|e| panic!("Failed to parse embedded provider JSON: {}", e))
    })
}

/// All resource types with a bundled icon, in table order
pub fn supported_icon_types() -> &'static [String] {
    &get_registry().icon_types
}

/// Check whether a lower-case resource type has a bundled icon
pub fn is_supported_icon_type(resource_type: &str) -> bool {
    supported_icon_types().iter().any(|t| t == resource_type)
}

/// Get the display name for a lower-case resource type
pub fn display_name(resource_type: &str) -> Option<&'static str> {
    get_registry()
        .display_names
        .get(resource_type)
        .map(|s| s.as_str())
}
