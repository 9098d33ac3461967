//! Roster input tab: paste names, import files, and tidy the list.

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use lg_core::{Confirmation, Roster};

use super::{InputMode, Tab, TabContext};

/// Input tab state.
#[derive(Debug, Default)]
pub struct InputTab {
    /// Text typed so far.
    text: String,
    /// Selected roster row.
    selected: usize,
    /// Waiting for y/n on "clear all".
    confirm_clear: bool,
    /// Feedback from the last action.
    message: Option<String>,
}

impl InputTab {
    /// Create an empty input tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently in the input field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the clear-all prompt is open.
    pub fn is_confirming_clear(&self) -> bool {
        self.confirm_clear
    }

    fn clamp_selection(&mut self, roster: &Roster) {
        if self.selected >= roster.len() {
            self.selected = roster.len().saturating_sub(1);
        }
    }

    fn submit_text(&mut self, roster: &mut Roster) {
        if self.text.trim().is_empty() {
            return;
        }
        let added = roster.add_from_text(&self.text);
        self.text.clear();
        self.message = Some(format!("Added {added} names"));
    }

    fn import_file(&mut self, roster: &mut Roster) {
        let path = self.text.trim();
        if path.is_empty() {
            self.message = Some("Type a file path, then press Ctrl+F".into());
            return;
        }
        match roster.add_from_path(Path::new(path)) {
            Ok(added) => {
                self.message = Some(format!("Imported {added} names from {path}"));
                self.text.clear();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn remove_selected(&mut self, roster: &mut Roster) {
        let Some(id) = roster.entries().get(self.selected).map(|e| e.id) else {
            return;
        };
        if let Ok(entry) = roster.remove_entry(id) {
            self.message = Some(format!("Removed {}", entry.value));
        }
        self.clamp_selection(roster);
    }

    fn answer_clear(&mut self, key: KeyEvent, roster: &mut Roster) {
        self.confirm_clear = false;
        let confirmation = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Confirmation::Confirmed,
            _ => Confirmation::Declined,
        };
        let removed = roster.clear(confirmation);
        self.message = Some(match confirmation {
            Confirmation::Confirmed => format!("Cleared {removed} names"),
            Confirmation::Declined => "Clear cancelled".into(),
        });
        self.selected = 0;
    }

    fn handle_ctrl(&mut self, code: KeyCode, roster: &mut Roster) {
        match code {
            KeyCode::Char('s') => {
                let added = roster.add_sample();
                self.message = Some(format!("Loaded {added} sample names"));
            }
            KeyCode::Char('d') => {
                let removed = roster.remove_duplicates();
                self.message = Some(format!("Removed {removed} duplicates"));
                self.clamp_selection(roster);
            }
            KeyCode::Char('f') => self.import_file(roster),
            KeyCode::Char('x') => {
                if !roster.is_empty() {
                    self.confirm_clear = true;
                }
            }
            _ => {}
        }
    }
}

impl Tab for InputTab {
    fn input_mode(&self) -> InputMode {
        InputMode::TextInput
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut TabContext<'_>) -> bool {
        if self.confirm_clear {
            self.answer_clear(key, ctx.roster);
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl(key.code, ctx.roster);
            return false;
        }

        match key.code {
            KeyCode::Enter => self.submit_text(ctx.roster),
            KeyCode::Char(c) => self.text.push(c),
            KeyCode::Backspace => {
                self.text.pop();
            }
            KeyCode::Esc => self.text.clear(),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < ctx.roster.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Delete => self.remove_selected(ctx.roster),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, ctx: &mut TabContext<'_>) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.selected = self.selected.saturating_sub(1),
            MouseEventKind::ScrollDown => {
                if self.selected + 1 < ctx.roster.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, roster: &Roster) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(columns[0]);

        // Input field
        let input = Paragraph::new(format!("{}\u{258f}", self.text))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Add participants (comma or newline separated) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        frame.render_widget(input, left[0]);

        // Controls and feedback
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan).bold());
        let mut lines = vec![
            Line::from(vec![key("Enter   "), Span::raw("add typed names")]),
            Line::from(vec![key("Ctrl+F  "), Span::raw("import the typed path (.csv/.txt)")]),
            Line::from(vec![key("Ctrl+S  "), Span::raw("load sample list (20 names)")]),
            Line::from(vec![key("Ctrl+D  "), Span::raw("remove duplicates")]),
            Line::from(vec![key("Delete  "), Span::raw("remove selected name")]),
            Line::from(vec![key("Ctrl+X  "), Span::raw("clear all")]),
            Line::from(""),
        ];
        if let Some(msg) = &self.message {
            lines.push(Line::from(Span::styled(
                msg.clone(),
                Style::default().fg(Color::Green),
            )));
        }
        let controls = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Controls ").borders(Borders::ALL));
        frame.render_widget(controls, left[1]);

        // Roster list
        let items: Vec<ListItem> = roster
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let mut spans = vec![
                    Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                ];
                if roster.is_duplicate(e) {
                    spans.push(Span::styled(e.value.clone(), Style::default().fg(Color::Yellow)));
                    spans.push(Span::styled("  duplicate", Style::default().fg(Color::DarkGray)));
                } else {
                    spans.push(Span::styled(e.value.clone(), Style::default().fg(Color::White)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let dups = roster.duplicate_count();
        let title = if dups > 0 {
            format!(" Roster ({}) | {dups} duplicated ", roster.len())
        } else {
            format!(" Roster ({}) ", roster.len())
        };

        if items.is_empty() {
            let empty = Paragraph::new("  No names yet.").block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
            frame.render_widget(empty, columns[1]);
        } else {
            let list = List::new(items)
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Blue)),
                )
                .highlight_style(Style::default().bg(Color::DarkGray).bold())
                .highlight_symbol("\u{25b6} ");
            let mut state = ListState::default();
            state.select(Some(self.selected));
            frame.render_stateful_widget(list, columns[1], &mut state);
        }

        if self.confirm_clear {
            crate::shared::draw_confirm_popup(
                frame,
                &format!("Clear all {} names? (y/n)", roster.len()),
            );
        }
    }

    fn status_hint(&self) -> &str {
        if self.confirm_clear {
            "y:confirm clear  any other key:cancel"
        } else {
            "type names  Enter:add  \u{2191}/\u{2193}:select  Ctrl+1..3:tab  Ctrl+C:quit"
        }
    }
}
