//! Worm, batter progression and run-rate charts.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
};

use crate::{
    stats::{batter_series, run_rate_series, worm_series},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_worm(&self, f: &mut Frame, area: Rect) {
        let series = self
            .current_match
            .as_ref()
            .map(|m| worm_series(m.current_innings()))
            .unwrap_or_default();
        let latest = series.last().copied().unwrap_or(0);

        // keep the most recent balls when the innings is wider than the panel
        let width = area.width.saturating_sub(2) as usize;
        let start = series.len().saturating_sub(width);

        f.render_widget(
            Sparkline::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("Worm ({} runs)", latest)),
                )
                .data(series[start..].iter().copied())
                .style(Style::default().fg(Color::Cyan)),
            area,
        );
    }

    pub(in crate::ui) fn draw_batter_progress(&self, f: &mut Frame, area: Rect) {
        let selected = self.current_match.as_ref().and_then(|m| {
            let name = match &self.graph_batter {
                Some(name) => name.clone(),
                None => m.current_innings().striker().to_string(),
            };
            (!name.is_empty()).then(|| {
                let series = batter_series(m.current_innings(), &name);
                (name, series)
            })
        });

        let Some((name, series)) = selected else {
            f.render_widget(
                Paragraph::new("No batter selected")
                    .block(Block::default().borders(Borders::ALL).title("Batter")),
                area,
            );
            return;
        };

        let width = area.width.saturating_sub(2) as usize;
        let start = series.len().saturating_sub(width);
        let runs = series.last().copied().unwrap_or(0);

        f.render_widget(
            Sparkline::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("{} ({} runs) | g: next batter", name, runs)),
                )
                .data(series[start..].iter().copied())
                .style(Style::default().fg(Color::Green)),
            area,
        );
    }

    /// One bar per over, scaled against the best rate so far.
    pub(in crate::ui) fn draw_run_rate(&self, f: &mut Frame, area: Rect) {
        let rates = self
            .current_match
            .as_ref()
            .map(|m| run_rate_series(m.current_innings()))
            .unwrap_or_default();

        let max_rate = rates.iter().copied().fold(0.0_f64, f64::max);
        let rows = area.height.saturating_sub(2) as usize;
        let bar_room = area.width.saturating_sub(16) as f64;
        let start = rates.len().saturating_sub(rows);

        let lines: Vec<Line> = if rates.is_empty() {
            vec![Line::from("No overs bowled")]
        } else {
            rates[start..]
                .iter()
                .enumerate()
                .map(|(i, rate)| {
                    let bar_width = if max_rate > 0.0 {
                        ((rate / max_rate) * bar_room) as usize
                    } else {
                        0
                    };

                    Line::from(vec![
                        Span::raw(format!(" {:>3} ", start + i + 1)),
                        Span::styled("█".repeat(bar_width), Style::default().fg(Color::Yellow)),
                        Span::raw(format!(" {:.2}", rate)),
                    ])
                })
                .collect()
        };

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Run rate")),
            area,
        );
    }
}
