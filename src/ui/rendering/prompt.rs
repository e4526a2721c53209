//! Pick-one popup for bowler and batter selection.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_prompt(&self, f: &mut Frame) {
        let Some(prompt) = self.prompt.as_ref() else {
            return;
        };

        let height = (prompt.options.len() as u16 + 2).min(f.area().height);
        let area = centered(f.area(), 40, height);

        let items: Vec<ListItem> = prompt
            .options
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == prompt.selected {
                    ListItem::new(format!("> {}", name)).style(
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(format!("  {}", name))
                }
            })
            .collect();

        f.render_widget(Clear, area);
        f.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!("{} | Enter: pick | Esc: cancel", prompt.title())),
            ),
            area,
        );
    }
}

fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
