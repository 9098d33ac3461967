//! Grouping tab: configure, generate, and export random groups.

use std::path::PathBuf;

use chrono::{Local, Utc};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lg_core::Roster;
use lg_draw::export::export_csv_to_dir;
use lg_draw::{GroupingConfig, Partition};

use super::{InputMode, Tab, TabContext};

/// Grouping tab state.
pub struct GroupingTab {
    config: GroupingConfig,
    partition: Option<Partition>,
    /// Directory CSV exports are written to.
    export_dir: PathBuf,
    scroll: u16,
    message: Option<String>,
}

impl GroupingTab {
    /// Create a grouping tab that exports into `export_dir`.
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: GroupingConfig::default(),
            partition: None,
            export_dir: export_dir.into(),
            scroll: 0,
            message: None,
        }
    }

    /// Current grouping settings.
    pub fn config(&self) -> GroupingConfig {
        self.config
    }

    /// The last generated partition, if any.
    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn generate(&mut self, ctx: &mut TabContext<'_>) {
        if ctx.roster.is_empty() {
            self.message = Some("Add names on the Input tab first.".into());
            return;
        }
        let partition = Partition::generate(ctx.roster, &self.config, ctx.rng);
        self.message = Some(format!(
            "Generated {} groups from {} names",
            partition.len(),
            partition.member_count()
        ));
        self.partition = Some(partition);
        self.scroll = 0;
    }

    fn export(&mut self) {
        let Some(partition) = &self.partition else {
            self.message = Some("Generate groups before exporting.".into());
            return;
        };
        self.message = Some(
            match export_csv_to_dir(partition, &self.export_dir, Utc::now().date_naive())
            {
                Ok(path) => format!("Exported to {}", path.display()),
                Err(e) => format!("Export failed: {e}"),
            },
        );
    }
}

impl Default for GroupingTab {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Tab for GroupingTab {
    fn input_mode(&self) -> InputMode {
        InputMode::VimNav
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut TabContext<'_>) -> bool {
        match key.code {
            KeyCode::Char('m') => {
                self.config = self.config.with_method(self.config.method.toggle());
            }
            KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => {
                self.config = self.config.with_value(self.config.value + 1);
            }
            KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => {
                self.config = self.config.with_value(self.config.value.saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.generate(ctx),
            KeyCode::Char('e') => self.export(),
            KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('g') => self.scroll = 0,
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, _ctx: &mut TabContext<'_>) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, roster: &Roster) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);

        // Settings panel
        let label = Style::default().fg(Color::DarkGray);
        let mut settings = vec![
            Line::from(vec![
                Span::styled("Method: ", label),
                Span::styled(
                    self.config.method.to_string(),
                    Style::default().fg(Color::Yellow).bold(),
                ),
                Span::styled("  (m to toggle)", label),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.config.method.value_label()), label),
                Span::styled(
                    self.config.value.to_string(),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::styled("  (\u{2191}/\u{2193} to adjust)", label),
                Span::styled(format!("   {} names in roster", roster.len()), label),
            ]),
        ];
        if let Some(msg) = &self.message {
            settings.push(Line::from(Span::styled(
                msg.clone(),
                Style::default().fg(Color::Green),
            )));
        }
        frame.render_widget(
            Paragraph::new(settings).block(
                Block::default()
                    .title(" Grouping ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            ),
            rows[0],
        );

        // Results
        let mut lines: Vec<Line> = Vec::new();
        let title = match &self.partition {
            Some(partition) => {
                for group in &partition.groups {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("Group {}", group.number),
                            Style::default().fg(Color::Cyan).bold(),
                        ),
                        Span::styled(format!("  ({} members)", group.len()), label),
                    ]));
                    let names: Vec<&str> = group.members.iter().map(|m| m.value.as_str()).collect();
                    lines.push(Line::from(format!("  {}", names.join(", "))));
                    lines.push(Line::from(""));
                }
                let generated = partition.generated_at.with_timezone(&Local);
                format!(
                    " Result: {} groups | generated {} ",
                    partition.len(),
                    generated.format("%Y-%m-%d %H:%M:%S")
                )
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "Press Enter to generate groups.",
                    label,
                )));
                " Result ".to_string()
            }
        };
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0))
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Blue)),
                ),
            rows[1],
        );
    }

    fn status_hint(&self) -> &str {
        "Enter:generate  m:method  \u{2191}/\u{2193}:value  e:export csv  j/k:scroll  q:quit  ?:help"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use lg_draw::GroupMethod;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(tab: &mut GroupingTab, roster: &mut Roster, code: KeyCode) {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = TabContext {
            roster,
            rng: &mut rng,
        };
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut ctx);
    }

    #[test]
    fn adjusts_settings() {
        let mut tab = GroupingTab::default();
        let mut roster = Roster::new();
        press(&mut tab, &mut roster, KeyCode::Char('m'));
        assert_eq!(tab.config().method, GroupMethod::ByCount);
        press(&mut tab, &mut roster, KeyCode::Up);
        assert_eq!(tab.config().value, 4);
        for _ in 0..10 {
            press(&mut tab, &mut roster, KeyCode::Down);
        }
        assert_eq!(tab.config().value, 1);
    }

    #[test]
    fn generates_groups() {
        let mut tab = GroupingTab::default();
        let mut roster = Roster::from_values(["A", "B", "C", "D", "E", "F", "G"]);
        press(&mut tab, &mut roster, KeyCode::Enter);
        let partition = tab.partition().unwrap();
        let sizes: Vec<usize> = partition.groups.iter().map(|g| g.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn empty_roster_does_not_generate() {
        let mut tab = GroupingTab::default();
        let mut roster = Roster::new();
        press(&mut tab, &mut roster, KeyCode::Enter);
        assert!(tab.partition().is_none());
        assert!(tab.message().is_some_and(|m| m.contains("Add names")));
    }

    #[test]
    fn export_writes_csv() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut tab = GroupingTab::new(dir.path());
        let mut roster = Roster::from_values(["A", "B"]);

        press(&mut tab, &mut roster, KeyCode::Char('e'));
        assert!(tab.message().is_some_and(|m| m.contains("Generate groups")));

        press(&mut tab, &mut roster, KeyCode::Enter);
        press(&mut tab, &mut roster, KeyCode::Char('e'));
        assert!(tab.message().is_some_and(|m| m.starts_with("Exported to")));
        let written: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(written.len(), 1);
    }
}
