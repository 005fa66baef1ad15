//! Terminal User Interface module
//!
//! Interactive pieces of azgroups built on ratatui. The tree itself is
//! printed as plain text; only choosing a group needs a full-screen view.
//!
//! - [`picker`] - Group picker overlay used by `focus`

pub mod picker;

use crate::commands::TreeItemPicker;
use crate::tree::GroupTreeItem;
use anyhow::Result;
use crossterm::{
    event::{poll, read, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use picker::{PickerOutcome, PickerState};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Full-screen picker driven by the keyboard
#[derive(Debug, Default)]
pub struct TerminalPicker {
    /// Group currently focused, highlighted in the list
    pub current: Option<String>,
}

impl TerminalPicker {
    pub fn new(current: Option<String>) -> Self {
        Self { current }
    }
}

impl TreeItemPicker for TerminalPicker {
    async fn show_tree_item_picker(
        &mut self,
        items: &[GroupTreeItem],
    ) -> Result<Option<GroupTreeItem>> {
        if items.is_empty() {
            tracing::warn!("No groups to pick from");
            return Ok(None);
        }

        let mut state = PickerState::new(items.to_vec(), self.current.clone());
        let mut terminal = setup_terminal()?;
        let result = run_picker(&mut terminal, &mut state);
        cleanup_terminal(&mut terminal)?;
        result
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    rollback_on_error(enter_alternate_screen(), disable_raw_mode)
}

fn enter_alternate_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `rollback` when `result` is an error, keeping the original error
fn rollback_on_error<T>(result: Result<T>, rollback: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if result.is_err() {
        if let Err(e) = rollback() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
    result
}

fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_picker(terminal: &mut Tui, state: &mut PickerState) -> Result<Option<GroupTreeItem>> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            picker::render(f, state, area)
        })?;

        if !poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key.code, key.modifiers) {
            PickerOutcome::Continue => {},
            PickerOutcome::Selected(group) => return Ok(Some(group)),
            PickerOutcome::Cancelled => return Ok(None),
        }
    }
}
