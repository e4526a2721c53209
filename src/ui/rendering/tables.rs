//! Batting and bowling tables for the current innings.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use crate::{
    stats::{compute_batting_stats, compute_bowling_stats},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_batting_table(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .current_match
            .as_ref()
            .map(|m| compute_batting_stats(m.current_innings()))
            .unwrap_or_default();

        let rows: Vec<Row> = lines
            .iter()
            .map(|line| {
                let name = if line.stats.out {
                    line.name.clone()
                } else {
                    format!("{}*", line.name)
                };
                let style = if line.stats.out {
                    Style::default().fg(Color::Gray)
                } else {
                    Style::default()
                };

                Row::new(vec![
                    name,
                    line.stats.runs.to_string(),
                    line.stats.balls.to_string(),
                    line.stats.fours.to_string(),
                    line.stats.sixes.to_string(),
                    format!("{:.1}", line.stats.strike_rate()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(12),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec!["Batsman", "R", "B", "4s", "6s", "SR"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Batting"));

        f.render_widget(table, area);
    }

    pub(in crate::ui) fn draw_bowling_table(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .current_match
            .as_ref()
            .map(|m| compute_bowling_stats(m.current_innings()))
            .unwrap_or_default();

        let rows: Vec<Row> = lines
            .iter()
            .map(|line| {
                Row::new(vec![
                    line.name.clone(),
                    line.stats.overs(),
                    line.stats.runs.to_string(),
                    line.stats.wickets.to_string(),
                    format!("{:.2}", line.stats.economy()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(12),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec!["Bowler", "O", "R", "W", "Econ"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Bowling"));

        f.render_widget(table, area);
    }
}
