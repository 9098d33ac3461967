//! Shared layout helpers and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

/// Draw a global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Tabs:"),
        Line::from("  1-3 / Tab   Switch tab (Lottery, Grouping)"),
        Line::from("  Ctrl+1..3   Switch tab (any tab)"),
        Line::from(""),
        Line::from("Input:"),
        Line::from("  Enter       Add typed names"),
        Line::from("  Ctrl+F      Import the typed file path"),
        Line::from("  Ctrl+S      Load sample names"),
        Line::from("  Ctrl+D      Remove duplicates"),
        Line::from("  Delete      Remove selected name"),
        Line::from("  Ctrl+X      Clear all (asks first)"),
        Line::from(""),
        Line::from("Lottery:"),
        Line::from("  Enter/Space Draw"),
        Line::from("  a           Toggle repeats"),
        Line::from("  r           Reset winners"),
        Line::from(""),
        Line::from("Grouping:"),
        Line::from("  m           Toggle by size / by count"),
        Line::from("  \u{2191} / \u{2193}       Adjust value"),
        Line::from("  Enter       Generate groups"),
        Line::from("  e           Export CSV"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Draw a small yes/no prompt in the middle of the screen.
pub fn draw_confirm_popup(frame: &mut Frame, question: &str) {
    let area = centered_rect(40, 20, frame.area());
    let popup = Paragraph::new(question.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
