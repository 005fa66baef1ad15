//! User-triggered explorer commands

pub mod focus;

pub use focus::{clear_focus, focus_group, TreeItemPicker};
