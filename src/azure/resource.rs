//! Generic ARM resource
//!
//! The subset of the Azure Resource Manager `GenericResource` shape needed to
//! group resources, plus loaders for `az resource list` style output.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A resource as returned by the ARM resources API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericResource {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

impl GenericResource {
    /// Display name, falling back to the last id segment
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.id.rsplit('/').next().unwrap_or(&self.id))
    }
}

/// Input format of a resource listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFormat {
    Json,
    Yaml,
}

impl ResourceFormat {
    /// Guess the format from a file extension (JSON unless `.yaml`/`.yml`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ResourceFormat::Yaml
            }
            _ => ResourceFormat::Json,
        }
    }
}

/// A bare list or an ARM list page (`{ "value": [...] }`)
#[derive(Deserialize)]
#[serde(untagged)]
enum ResourceListing {
    List(Vec<GenericResource>),
    Page { value: Vec<GenericResource> },
}

impl From<ResourceListing> for Vec<GenericResource> {
    fn from(listing: ResourceListing) -> Self {
        match listing {
            ResourceListing::List(items) => items,
            ResourceListing::Page { value } => value,
        }
    }
}

/// Parse a resource listing from text
pub fn parse_resources(content: &str, format: ResourceFormat) -> Result<Vec<GenericResource>> {
    let listing: ResourceListing = match format {
        ResourceFormat::Json => {
            serde_json::from_str(content).context("Failed to parse resource JSON")?
        }
        ResourceFormat::Yaml => {
            serde_yaml::from_str(content).context("Failed to parse resource YAML")?
        }
    };
    Ok(listing.into())
}

/// Load a resource listing from disk
pub async fn load_resources(path: &Path) -> Result<Vec<GenericResource>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let resources = parse_resources(&content, ResourceFormat::from_path(path))?;
    tracing::debug!("Loaded {} resources from {:?}", resources.len(), path);
    Ok(resources)
}
