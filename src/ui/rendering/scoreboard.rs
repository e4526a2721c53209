//! Scoreboard, chase status and key help.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    export::{chase_line, innings_line},
    scoring::TeamKey,
    stats::{compute_batting_stats, overs_text},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_scoreboard(&self, f: &mut Frame, area: Rect) {
        let Some(m) = self.current_match.as_ref() else {
            f.render_widget(
                Paragraph::new("No match loaded. Ctrl+N for a new match, Ctrl+L for saved ones.")
                    .block(Block::default().borders(Borders::ALL).title("Scoreboard")),
                area,
            );
            return;
        };

        let innings = m.current_innings();
        let score = innings.score();
        let batting = compute_batting_stats(innings);
        let figures = |name: &str| {
            batting
                .iter()
                .find(|l| l.name == name)
                .map(|l| format!("{} ({})", l.stats.runs, l.stats.balls))
                .unwrap_or_else(|| "0 (0)".to_string())
        };

        let bowler = innings
            .current_over()
            .map(|o| o.bowler.as_str())
            .unwrap_or("-");

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", m.team(innings.batting()).name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{}/{}", score.runs, score.wickets),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  ({} / {} ov)  Innings {}",
                    overs_text(score.legal_balls),
                    innings.overs_limit(),
                    innings.number()
                )),
            ]),
            Line::from(""),
            Line::from(format!(
                "  {}* {}",
                innings.striker(),
                figures(innings.striker())
            )),
            Line::from(format!(
                "  {}  {}",
                innings.non_striker(),
                figures(innings.non_striker())
            )),
            Line::from(format!("  Bowling: {}", bowler)),
        ];

        if innings.number() == 2 {
            lines.push(Line::from(Span::styled(
                format!("  1st: {}", innings_line(m, m.first_innings())),
                Style::default().fg(Color::Gray),
            )));
        }

        let title = format!(
            "{} vs {}",
            m.team(TeamKey::A).name,
            m.team(TeamKey::B).name
        );
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }

    pub(in crate::ui) fn draw_chase(&self, f: &mut Frame, area: Rect) {
        let Some(m) = self.current_match.as_ref() else {
            f.render_widget(
                Paragraph::new("").block(Block::default().borders(Borders::ALL).title("Status")),
                area,
            );
            return;
        };

        let innings = m.current_innings();
        let hint = if innings.is_completed() {
            if m.can_start_second_innings() {
                "Press i to start innings 2"
            } else {
                ""
            }
        } else if innings.needs_bowler() {
            "Press b to pick the bowler"
        } else {
            ""
        };

        let color = match m.result() {
            Some(_) => Color::Green,
            None => Color::White,
        };

        let mut lines: Vec<Line> = chase_line(m)
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if !hint.is_empty() {
            lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::Yellow))));
        }

        f.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let help_text = "0-7 runs | w wide | n no-ball | x wicket | b bowler | s/o batters | u undo | i innings 2 | g graph | c export";

        f.render_widget(
            Paragraph::new(help_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Keys | Ctrl+E end innings | Ctrl+N new | Ctrl+L saved | Ctrl+Q quit"),
            ),
            area,
        );
    }
}
