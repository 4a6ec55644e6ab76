use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Tab};

/// Top bar: one label per tab in its game's accent color, the active one
/// inverted onto its accent.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, tab) in Tab::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("·", Style::default().fg(Color::Rgb(70, 70, 90))));
        }
        let accent = tab.accent();
        let style = if *tab == app.current_tab {
            Style::default()
                .fg(Color::Rgb(10, 10, 20))
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent).add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(tab.title(), style));
    }
    spans.push(Span::styled(
        "  Tab ⇄",
        Style::default().fg(Color::Rgb(70, 70, 90)),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Rgb(90, 80, 160)))
            .title(" 🕹 Tricade ")
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(Color::Rgb(170, 160, 255))
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(bar, area);
}
