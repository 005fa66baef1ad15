//! Focus Commands
//!
//! Narrow the tree to a single group, or widen it back out. The focused id
//! is written to the `focusedGroup` setting so it survives restarts.

use crate::config::{Setting, SettingsStore};
use crate::tree::{FocusState, GroupTreeItem};
use anyhow::Result;
use std::future::Future;

/// Lets the user choose one group; `None` means the pick was cancelled
pub trait TreeItemPicker {
    fn show_tree_item_picker(
        &mut self,
        items: &[GroupTreeItem],
    ) -> impl Future<Output = Result<Option<GroupTreeItem>>>;
}

pub async fn clear_focus<S: SettingsStore>(settings: &mut S, focus: &mut FocusState) -> Result<()> {
    settings
        .update_global_setting(Setting::FocusedGroup, None)
        .await?;
    focus.clear();
    tracing::info!("Cleared focused group");
    Ok(())
}

/// Focus `group`, or ask the picker for one among `candidates`
pub async fn focus_group<S, P>(
    settings: &mut S,
    focus: &mut FocusState,
    picker: &mut P,
    candidates: &[GroupTreeItem],
    group: Option<GroupTreeItem>,
) -> Result<()>
where
    S: SettingsStore,
    P: TreeItemPicker,
{
    let group = match group {
        Some(group) => group,
        None => match picker.show_tree_item_picker(candidates).await? {
            Some(group) => group,
            None => {
                tracing::debug!("Focus cancelled");
                return Ok(());
            }
        },
    };

    settings
        .update_global_setting(Setting::FocusedGroup, Some(group.id.clone()))
        .await?;
    tracing::info!("Focused group {} ({})", group.label, group.id);
    focus.set_focused_group_id(group.id);
    Ok(())
}
