//! Lottery tab: animated draws with a winner history.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap};

use lg_core::Roster;
use lg_draw::{DrawPhase, Lottery, LotteryConfig};

use super::{InputMode, Tab, TabContext};

/// Lottery tab state.
pub struct LotteryTab {
    lottery: Lottery,
    /// Why the last draw request was refused.
    notice: Option<&'static str>,
}

impl LotteryTab {
    /// Create a lottery tab with the given configuration.
    pub fn new(config: LotteryConfig) -> Self {
        Self {
            lottery: Lottery::new(config),
            notice: None,
        }
    }

    /// The underlying draw state machine.
    pub fn lottery(&self) -> &Lottery {
        &self.lottery
    }

    /// Start a draw, or explain why none can start.
    fn request_draw(&mut self, roster: &Roster) {
        if self.lottery.is_drawing() {
            return;
        }
        if self.lottery.start_draw(roster) {
            self.notice = None;
        } else if roster.is_empty() {
            self.notice = Some("Add names on the Input tab first.");
        } else {
            self.notice = Some("All names have been drawn. Press r to reset.");
        }
    }
}

impl Default for LotteryTab {
    fn default() -> Self {
        Self::new(LotteryConfig::default())
    }
}

impl Tab for LotteryTab {
    fn input_mode(&self) -> InputMode {
        InputMode::VimNav
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut TabContext<'_>) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.request_draw(ctx.roster),
            KeyCode::Char('a') => {
                let allow = !self.lottery.allow_repeats();
                self.lottery.set_allow_repeats(allow);
                self.notice = None;
            }
            KeyCode::Char('r') => {
                if self.lottery.reset() {
                    self.notice = None;
                }
            }
            _ => {}
        }
        false
    }

    fn tick(&mut self, ctx: &mut TabContext<'_>) {
        self.lottery.tick(ctx.roster, ctx.rng);
    }

    fn draw(&self, frame: &mut Frame, area: Rect, roster: &Roster) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let block = Block::default()
            .title(" Lottery ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(columns[0]);
        frame.render_widget(block, columns[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Headline
                Constraint::Length(3), // Name
                Constraint::Length(1), // Progress
                Constraint::Min(0),    // Settings and notices
            ])
            .split(inner);

        let headline = match self.lottery.phase() {
            DrawPhase::Idle => "Press Enter to draw",
            DrawPhase::Drawing => "Drawing...",
            DrawPhase::Settled => "Congratulations!",
        };
        frame.render_widget(
            Paragraph::new(headline)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            rows[0],
        );

        let name_style = match self.lottery.phase() {
            DrawPhase::Settled => Style::default().fg(Color::Green).bold(),
            DrawPhase::Drawing => Style::default().fg(Color::Yellow),
            DrawPhase::Idle => Style::default().fg(Color::White),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.lottery.display_text().to_string(),
                name_style,
            )))
            .alignment(Alignment::Center),
            rows[1],
        );

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
            .ratio(self.lottery.progress().clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, rows[2]);

        let repeats = if self.lottery.allow_repeats() {
            Span::styled("on", Style::default().fg(Color::Green).bold())
        } else {
            Span::styled("off", Style::default().fg(Color::Red).bold())
        };
        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Allow repeats: ", Style::default().fg(Color::DarkGray)),
                repeats,
                Span::styled("  (a to toggle)", Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::styled("Pool: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!(
                        "{} / {}",
                        self.lottery.candidate_pool(roster).len(),
                        roster.len()
                    ),
                    Style::default().fg(Color::White).bold(),
                ),
            ]),
        ];
        if let Some(notice) = self.notice {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                notice,
                Style::default().fg(Color::Yellow),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[3]);

        let items: Vec<ListItem> = self
            .lottery
            .history()
            .numbered()
            .map(|(number, entry)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{number:>3}. "), Style::default().fg(Color::DarkGray)),
                    Span::styled(entry.value.clone(), Style::default().fg(Color::White)),
                ]))
            })
            .collect();
        let history = List::new(items).block(
            Block::default()
                .title(format!(" Winners ({}) ", self.lottery.history().len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(history, columns[1]);
    }

    fn status_hint(&self) -> &str {
        if self.lottery.is_drawing() {
            "drawing...  q:quit  ?:help"
        } else {
            "Enter/Space:draw  a:repeats  r:reset  1-3:tab  q:quit  ?:help"
        }
    }
}
