//! Group Picker
//!
//! Group selection overlay with search functionality.

use crate::tree::GroupTreeItem;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const PAGE_SIZE: usize = 10;

/// Result of feeding one key to the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Continue,
    Selected(GroupTreeItem),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    items: Vec<GroupTreeItem>,
    /// Currently focused group, marked in the list
    current: Option<String>,
    pub search_text: String,
    /// Indices into `items` matching the search
    pub filtered: Vec<usize>,
    pub selected: usize,
}

impl PickerState {
    pub fn new(items: Vec<GroupTreeItem>, current: Option<String>) -> Self {
        let filtered = (0..items.len()).collect();
        let selected = current
            .as_deref()
            .and_then(|id| items.iter().position(|g| g.id == id))
            .unwrap_or(0);
        Self {
            items,
            current,
            search_text: String::new(),
            filtered,
            selected,
        }
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = &GroupTreeItem> {
        self.filtered.iter().map(|&i| &self.items[i])
    }

    pub fn selected_item(&self) -> Option<&GroupTreeItem> {
        self.filtered.get(self.selected).map(|&i| &self.items[i])
    }

    pub fn apply_filter(&mut self) {
        let filter = self.search_text.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, g)| {
                filter.is_empty()
                    || g.label.to_lowercase().contains(&filter)
                    || g.id.to_lowercase().contains(&filter)
            })
            .map(|(i, _)| i)
            .collect();
        // Reset selection if out of bounds
        if self.selected >= self.filtered.len() {
            self.selected = 0;
        }
    }

    pub fn next(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + 1).min(self.filtered.len() - 1);
        }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn go_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn go_to_bottom(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = self.filtered.len() - 1;
        }
    }

    pub fn page_down(&mut self, page_size: usize) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + page_size).min(self.filtered.len() - 1);
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> PickerOutcome {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return PickerOutcome::Cancelled;
        }

        match code {
            KeyCode::Esc => return PickerOutcome::Cancelled,
            KeyCode::Enter => {
                if let Some(item) = self.selected_item() {
                    return PickerOutcome::Selected(item.clone());
                }
            },
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::Home => self.go_to_top(),
            KeyCode::End => self.go_to_bottom(),
            KeyCode::PageDown => self.page_down(PAGE_SIZE),
            KeyCode::PageUp => self.page_up(PAGE_SIZE),
            KeyCode::Backspace => {
                self.search_text.pop();
                self.apply_filter();
            },
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_text.push(c);
                self.apply_filter();
            },
            _ => {},
        }
        PickerOutcome::Continue
    }
}

pub fn render(f: &mut Frame, state: &PickerState, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    // Title with count
    let title = format!(
        " Focus Group [{}/{}] ",
        state.filtered.len(),
        state.total()
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Search input
            Constraint::Length(1), // Help text
            Constraint::Length(1), // Separator
            Constraint::Min(1),    // Group list
        ])
        .split(inner);

    let search_line = Line::from(vec![
        Span::styled(" / ", Style::default().fg(Color::Yellow)),
        Span::styled(&state.search_text, Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(search_line), chunks[0]);

    let help = Line::from(vec![
        Span::styled(" Type to search", Style::default().fg(Color::DarkGray)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(":nav ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(":focus ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(":cancel", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);

    let sep = "─".repeat(chunks[2].width as usize);
    f.render_widget(
        Paragraph::new(sep).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    let items: Vec<ListItem> = state
        .filtered_items()
        .map(|group| {
            let is_current = state.current.as_deref() == Some(group.id.as_str());
            let style = if is_current {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if is_current { "✓ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", prefix, group.label), style),
                Span::styled(
                    format!("  ({})", group.resources.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    f.render_stateful_widget(list, chunks[3], &mut list_state);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPE: &str = "/subscriptions/abc/resourcegroups";

    fn state() -> PickerState {
        PickerState::new(
            vec![
                GroupTreeItem::new(format!("{}/data", SCOPE), "data", "Resource Groups"),
                GroupTreeItem::new(format!("{}/web", SCOPE), "web", "Resource Groups"),
                GroupTreeItem::new(format!("{}/webjobs", SCOPE), "WebJobs", "Resource Groups"),
            ],
            Some(format!("{}/web", SCOPE)),
        )
    }

    #[test]
    fn test_starts_on_current_focus() {
        let state = state();
        assert_eq!(state.selected, 1);
        assert_eq!(state.filtered.len(), 3);
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut state = state();
        for c in "WEB".chars() {
            state.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        let labels: Vec<&str> = state.filtered_items().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["web", "WebJobs"]);

        state.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.selected, 0);

        state.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = state();
        state.handle_key(KeyCode::Down, KeyModifiers::NONE);
        state.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(state.selected, 2);
        state.handle_key(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(state.selected, 0);
        state.handle_key(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(state.selected, 0);
        state.handle_key(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_enter_selects_and_esc_cancels() {
        let mut state = state();
        match state.handle_key(KeyCode::Enter, KeyModifiers::NONE) {
            PickerOutcome::Selected(group) => assert_eq!(group.label, "web"),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(
            state.handle_key(KeyCode::Esc, KeyModifiers::NONE),
            PickerOutcome::Cancelled
        );
        assert_eq!(
            state.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            PickerOutcome::Cancelled
        );
    }

    #[test]
    fn test_enter_on_empty_list_continues() {
        let mut state = state();
        for c in "zzz".chars() {
            state.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(
            state.handle_key(KeyCode::Enter, KeyModifiers::NONE),
            PickerOutcome::Continue
        );
    }
}
