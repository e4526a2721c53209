//! Saved-match list rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::ui::App;

impl App {
    pub(in crate::ui) fn draw_library(&self, f: &mut Frame, area: Rect) {
        let title = if self.confirm_reset {
            "Saved matches | Ctrl+D again to delete everything".to_string()
        } else {
            format!(
                "Saved matches ({}) | ↑/↓: select | Enter: open | r: refresh | Ctrl+D: reset | Esc: back",
                self.saved_matches.len()
            )
        };
        let border = if self.confirm_reset {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        if self.saved_matches.is_empty() {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No saved matches",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Ctrl+N starts a new match."),
            ];

            f.render_widget(
                Paragraph::new(text).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border)
                        .title(title),
                ),
                area,
            );
            return;
        }

        let rows: Vec<Row> = self
            .saved_matches
            .iter()
            .enumerate()
            .map(|(i, summary)| {
                let updated = summary.updated_at.format("%Y-%m-%d %H:%M").to_string();
                let result = summary
                    .result
                    .clone()
                    .unwrap_or_else(|| "In progress".to_string());

                let style = if summary.result.is_some() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };

                Row::new(vec![
                    format!("{}.", i + 1),
                    updated,
                    format!("{} vs {}", summary.team_a, summary.team_b),
                    result,
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),  // Number
                Constraint::Length(16), // Last saved
                Constraint::Min(20),    // Teams
                Constraint::Min(20),    // Result
            ],
        )
        .header(
            Row::new(vec!["#", "Saved", "Match", "Result"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = TableState::default().with_selected(Some(self.library_selected));
        f.render_stateful_widget(table, area, &mut state);
    }
}
