use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{
    export::ball_line,
    scoring::BALLS_PER_OVER,
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_overs(&self, f: &mut Frame, area: Rect) {
        let overs = self
            .current_match
            .as_ref()
            .map(|m| m.current_innings().overs())
            .unwrap_or_default();

        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = if overs.is_empty() {
            vec![ListItem::new("No overs bowled yet")]
        } else {
            overs
                .iter()
                .enumerate()
                .rev()
                .take(visible)
                .map(|(i, over)| {
                    let item = ListItem::new(format!(
                        "Over {} • {} • {} runs • {}/{} legal",
                        i + 1,
                        over.bowler,
                        over.runs(),
                        over.legal_balls(),
                        BALLS_PER_OVER
                    ));
                    if over.is_complete() {
                        item
                    } else {
                        item.style(Style::default().fg(Color::Yellow))
                    }
                })
                .collect()
        };

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title("Overs")),
            area,
        );
    }

    /// Most recent deliveries first.
    pub(in crate::ui) fn draw_ball_log(&self, f: &mut Frame, area: Rect) {
        let entries: Vec<(String, bool)> = self
            .current_match
            .as_ref()
            .map(|m| {
                m.current_innings()
                    .balls()
                    .map(|b| (ball_line(b), b.wicket))
                    .collect()
            })
            .unwrap_or_default();

        let title = format!("Ball log ({})", entries.len());
        let items: Vec<ListItem> = if entries.is_empty() {
            vec![ListItem::new("No balls recorded")]
        } else {
            entries
                .into_iter()
                .rev()
                .map(|(line, wicket)| {
                    let style = if wicket {
                        Style::default().fg(Color::Red)
                    } else {
                        Style::default()
                    };
                    ListItem::new(line).style(style)
                })
                .collect()
        };

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
