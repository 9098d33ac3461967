//! Tab definitions, trait, and tab bar rendering.

pub mod grouping;
pub mod input;
pub mod lottery;

use crossterm::event::{KeyEvent, MouseEvent};
use rand::rngs::StdRng;
use ratatui::prelude::*;

use lg_core::Roster;

/// Identifies which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    /// Roster editing.
    Input,
    /// Lottery draws.
    Lottery,
    /// Random grouping.
    Grouping,
}

/// Tab bar labels, in display order.
const TAB_TITLES: [&str; 3] = ["[1]Input", "[2]Lottery", "[3]Grouping"];

impl TabId {
    /// All tab IDs in display order.
    pub const ALL: [TabId; 3] = [TabId::Input, TabId::Lottery, TabId::Grouping];

    /// Parse a tab name from a string.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.to_lowercase().as_str() {
            "input" | "roster" | "names" => Some(TabId::Input),
            "lottery" | "draw" => Some(TabId::Lottery),
            "grouping" | "group" | "groups" => Some(TabId::Grouping),
            _ => None,
        }
    }

    /// Index of this tab in the tab bar.
    pub fn index(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Get the next tab (wrapping).
    pub fn next(self) -> TabId {
        TabId::ALL[(self.index() + 1) % TabId::ALL.len()]
    }

    /// Get the previous tab (wrapping).
    pub fn prev(self) -> TabId {
        let len = TabId::ALL.len();
        TabId::ALL[(self.index() + len - 1) % len]
    }

    /// The tab for a 1-based digit key.
    pub fn from_digit(digit: u32) -> Option<TabId> {
        let idx = usize::try_from(digit).ok()?.checked_sub(1)?;
        TabId::ALL.get(idx).copied()
    }
}

/// Whether a tab consumes keyboard input or uses vim-like navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Vim-like navigation: single keys are commands. Top-level handles tab switching.
    VimNav,
    /// Text input: the tab has its own input field. Most keys go to the tab.
    TextInput,
}

/// Shared state a tab may read or modify while handling input.
pub struct TabContext<'a> {
    /// The roster owned by the application.
    pub roster: &'a mut Roster,
    /// The application's random source.
    pub rng: &'a mut StdRng,
}

/// Trait that each tab screen implements.
pub trait Tab {
    /// Return the input mode for event routing.
    fn input_mode(&self) -> InputMode;

    /// Handle a key event. Return `true` if the app should quit.
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut TabContext<'_>) -> bool;

    /// Handle a mouse event.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _ctx: &mut TabContext<'_>) {}

    /// Advance timers by one tick.
    fn tick(&mut self, _ctx: &mut TabContext<'_>) {}

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect, roster: &Roster);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: TabId, area: Rect) {
    let active_idx = active.index();
    let mut spans = Vec::new();

    for (i, title) in TAB_TITLES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let style = if i == active_idx {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*title, style));
    }

    let paragraph = ratatui::widgets::Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Hit-test the tab bar for mouse clicks.
pub fn tab_bar_hit_test(col: u16) -> Option<TabId> {
    let divider_len = 3u16; // " | "

    let mut x = 0u16;
    for (i, title) in TAB_TITLES.iter().enumerate() {
        let len = u16::try_from(title.chars().count()).unwrap_or(u16::MAX);
        let end_x = x.saturating_add(len);
        if col >= x && col < end_x {
            return Some(TabId::ALL[i]);
        }
        x = end_x.saturating_add(divider_len);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name() {
        assert_eq!(TabId::from_name("Lottery"), Some(TabId::Lottery));
        assert_eq!(TabId::from_name("groups"), Some(TabId::Grouping));
        assert_eq!(TabId::from_name("dice"), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(TabId::Input.next(), TabId::Lottery);
        assert_eq!(TabId::Grouping.next(), TabId::Input);
        assert_eq!(TabId::Input.prev(), TabId::Grouping);
    }

    #[test]
    fn digits_map_to_tabs() {
        assert_eq!(TabId::from_digit(1), Some(TabId::Input));
        assert_eq!(TabId::from_digit(3), Some(TabId::Grouping));
        assert_eq!(TabId::from_digit(0), None);
        assert_eq!(TabId::from_digit(4), None);
    }

    #[test]
    fn hit_test_tab_bar() {
        // "[1]Input | [2]Lottery | [3]Grouping"
        assert_eq!(tab_bar_hit_test(0), Some(TabId::Input));
        assert_eq!(tab_bar_hit_test(7), Some(TabId::Input));
        assert_eq!(tab_bar_hit_test(9), None);
        assert_eq!(tab_bar_hit_test(11), Some(TabId::Lottery));
        assert_eq!(tab_bar_hit_test(24), Some(TabId::Grouping));
        assert_eq!(tab_bar_hit_test(60), None);
    }
}
