mod graphs;
mod library;
mod logs;
mod overs;
mod prompt;
mod scoreboard;
mod setup;
mod tables;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        match self.screen {
            Screen::Setup => {
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(16), Constraint::Length(8)])
                    .split(f.area());

                self.draw_setup(f, layout[0]);
                self.draw_logs(f, layout[1]);
            }

            Screen::Library => {
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(10),   // Saved matches
                        Constraint::Length(6), // Small log panel
                    ])
                    .split(f.area());

                self.draw_library(f, layout[0]);
                self.draw_logs(f, layout[1]);
            }

            Screen::Scoring => self.draw_scoring(f),
        }
    }

    fn draw_scoring(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(4),
                Constraint::Length(7),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(main_layout[0]);

        self.draw_scoreboard(f, left_layout[0]);
        self.draw_chase(f, left_layout[1]);
        self.draw_overs(f, left_layout[2]);
        self.draw_ball_log(f, left_layout[3]);
        self.draw_help(f, left_layout[4]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Min(4), // logs panel
            ])
            .split(main_layout[1]);

        self.draw_batting_table(f, right_layout[0]);
        self.draw_bowling_table(f, right_layout[1]);
        self.draw_worm(f, right_layout[2]);
        self.draw_batter_progress(f, right_layout[3]);
        self.draw_run_rate(f, right_layout[4]);
        self.draw_logs(f, right_layout[5]);

        self.draw_prompt(f);
    }
}
