//! Icon Resolver
//!
//! Maps an ARM resource type (and optional kind) to a bundled icon. The
//! lookup is total: anything outside the provider table gets the generic
//! `resource` icon.

use super::registry::is_supported_icon_type;
use serde::Serialize;
use std::path::PathBuf;

/// Root directory of the bundled icon assets
pub const RESOURCES_DIR: &str = "resources";

/// Icon name used for types without a dedicated icon
pub const GENERIC_ICON: &str = "resource";

const WEB_SITES: &str = "microsoft.web/sites";
const FUNCTION_APP: &str = "microsoft.web/functionapp";

/// Light/dark pair of icon assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconPath {
    pub light: PathBuf,
    pub dark: PathBuf,
}

impl IconPath {
    /// Resolve a relative icon name (e.g. `providers/microsoft.web/sites`)
    pub fn from_name(name: &str) -> Self {
        let file = format!("{}.svg", name);
        Self {
            light: PathBuf::from(RESOURCES_DIR).join("light").join(&file),
            dark: PathBuf::from(RESOURCES_DIR).join("dark").join(&file),
        }
    }
}

/// Icon attached to a tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeIcon {
    /// Bundled themed asset
    Asset(IconPath),
    /// Built-in theme glyph such as `globe`
    Glyph(&'static str),
}

impl TreeIcon {
    /// Short name used when printing the tree
    pub fn describe(&self) -> String {
        match self {
            TreeIcon::Asset(path) => path
                .light
                .strip_prefix(PathBuf::from(RESOURCES_DIR).join("light"))
                .map(|p| p.with_extension("").display().to_string())
                .unwrap_or_else(|_| path.light.display().to_string()),
            TreeIcon::Glyph(name) => format!("${}", name),
        }
    }
}

/// Relative icon name for a resource type
pub fn icon_name(resource_type: Option<&str>, kind: Option<&str>) -> String {
    let Some(rtype) = resource_type.map(str::to_lowercase) else {
        return GENERIC_ICON.to_string();
    };

    if !is_supported_icon_type(&rtype) {
        return GENERIC_ICON.to_string();
    }

    let is_function_app = kind
        .map(|k| k.to_lowercase().contains("functionapp"))
        .unwrap_or(false);

    let key = if rtype == WEB_SITES && is_function_app {
        FUNCTION_APP
    } else {
        rtype.as_str()
    };

    format!("providers/{}", key)
}

/// Themed icon paths for a resource type
pub fn get_icon_path(resource_type: Option<&str>, kind: Option<&str>) -> IconPath {
    IconPath::from_name(&icon_name(resource_type, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_type_is_case_insensitive() {
        assert_eq!(
            icon_name(Some("Microsoft.Compute/virtualMachines"), None),
            "providers/microsoft.compute/virtualmachines"
        );
    }

    #[test]
    fn test_function_app_kind_swaps_icon() {
        assert_eq!(
            icon_name(Some("microsoft.web/sites"), Some("FunctionApp")),
            "providers/microsoft.web/functionapp"
        );
        assert_eq!(
            icon_name(Some("Microsoft.Web/sites"), Some("functionapp,linux")),
            "providers/microsoft.web/functionapp"
        );
        assert_eq!(
            icon_name(Some("microsoft.web/sites"), Some("app")),
            "providers/microsoft.web/sites"
        );
    }

    #[test]
    fn test_kind_ignored_for_other_types() {
        assert_eq!(
            icon_name(Some("microsoft.web/serverfarms"), Some("functionapp")),
            "providers/microsoft.web/serverfarms"
        );
    }

    #[test]
    fn test_unknown_and_missing_types_fall_back() {
        assert_eq!(icon_name(Some("microsoft.unknown/thing"), None), "resource");
        assert_eq!(icon_name(None, Some("functionapp")), "resource");
        assert_eq!(icon_name(Some(""), None), "resource");
    }

    #[test]
    fn test_icon_path_is_themed() {
        let path = get_icon_path(Some("microsoft.cache/redis"), None);
        assert_eq!(
            path.light,
            PathBuf::from("resources/light/providers/microsoft.cache/redis.svg")
        );
        assert_eq!(
            path.dark,
            PathBuf::from("resources/dark/providers/microsoft.cache/redis.svg")
        );
    }

    #[test]
    fn test_describe() {
        let icon = TreeIcon::Asset(get_icon_path(Some("microsoft.cache/redis"), None));
        assert_eq!(icon.describe(), "providers/microsoft.cache/redis");
        assert_eq!(TreeIcon::Glyph("globe").describe(), "$globe");
    }
}
