//! Azure resource explorer
//!
//! Groups Azure resources by resource group, resource type, or location,
//! resolves their icons, and keeps track of a focused group.
//!
//! # Module Structure
//!
//! - [`azure`] - ARM resource shape and resource id parsing
//! - [`resource`] - Icon/display-name tables and grouping configs
//! - [`tree`] - Grouped tree model and focus state
//! - [`commands`] - Focus and clear-focus commands
//! - [`config`] - Persisted settings
//! - [`ui`] - Interactive terminal picker

pub mod azure;
pub mod commands;
pub mod config;
pub mod resource;
pub mod tree;
pub mod ui;
