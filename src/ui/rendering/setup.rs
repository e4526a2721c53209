//! New-match form rendering with validation status.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::{
    app::App,
    types::{InputStatus, SetupField},
};

impl App {
    pub(in crate::ui) fn draw_setup(&self, f: &mut Frame, area: Rect) {
        let form = &self.setup;

        let (border_color, subtitle) = match form.status() {
            InputStatus::Incomplete => (Color::Gray, "add players for both teams".to_string()),
            InputStatus::Valid => (Color::Green, "ready".to_string()),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let mut lines = vec![Line::from("")];
        for field in SetupField::ALL {
            let focused = field == form.focused;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let cursor = if focused && field != SetupField::BatFirst {
                "▌"
            } else {
                ""
            };

            lines.push(Line::from(Span::styled(
                format!("  {}", field.label()),
                label_style,
            )));
            lines.push(Line::from(format!(
                "    {}{}",
                form.field_text(field),
                cursor
            )));
        }

        let help_text = "Tab/↓ next | Shift+Tab/↑ back | Enter = start | Ctrl+L = saved | Ctrl+Q = quit";

        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("New match ({}) | {}", subtitle, help_text)),
            ),
            area,
        );
    }
}
