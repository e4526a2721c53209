//! Keyboard routing for each screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::scoring::BallInput;

use super::super::{
    app::App,
    types::{BatterSlot, Screen},
};
use super::{LibraryHandler, MatchHandler, SetupHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                self.app.prompt = None;
                self.app.screen = Screen::Setup;
                return false;
            }

            (KeyCode::Char('l' | 'L'), KeyModifiers::CONTROL) => {
                LibraryHandler::new(self.app).enter();
                return false;
            }

            _ => {}
        }

        match self.app.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Scoring if self.app.prompt.is_some() => self.handle_prompt_key(key),
            Screen::Scoring => self.handle_scoring_key(key),
            Screen::Library => self.handle_library_key(key),
        }
        false
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        let mut setup = SetupHandler::new(self.app);
        match key.code {
            KeyCode::Tab | KeyCode::Down => setup.focus_next(),
            KeyCode::BackTab | KeyCode::Up => setup.focus_prev(),
            KeyCode::Enter => setup.submit(),
            KeyCode::Backspace => setup.backspace(),
            KeyCode::Esc => {
                if self.app.current_match.is_some() {
                    self.app.screen = Screen::Scoring;
                }
            }
            KeyCode::Char(c) => setup.type_char(c),
            _ => {}
        }
    }

    fn handle_scoring_key(&mut self, key: KeyEvent) {
        let mut handler = MatchHandler::new(self.app);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('z' | 'Z') => handler.undo(),
                KeyCode::Char('e' | 'E') => handler.end_innings(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c @ '0'..='7') => {
                let runs = c.to_digit(10).unwrap_or_default();
                match BallInput::runs(runs) {
                    Ok(input) => handler.record_ball(input),
                    Err(e) => self.app.log(format!("Ball rejected: {}", e)),
                }
            }
            KeyCode::Char('w' | 'W') => handler.record_ball(BallInput::wide()),
            KeyCode::Char('n' | 'N') => handler.record_ball(BallInput::no_ball()),
            KeyCode::Char('x' | 'X') => handler.record_ball(BallInput::wicket()),
            KeyCode::Char('b' | 'B') => handler.open_bowler_prompt(),
            KeyCode::Char('s' | 'S') => handler.open_batter_prompt(BatterSlot::Striker),
            KeyCode::Char('o' | 'O') => handler.open_batter_prompt(BatterSlot::NonStriker),
            KeyCode::Char('u' | 'U') => handler.undo(),
            KeyCode::Char('i' | 'I') => handler.start_second_innings(),
            KeyCode::Char('g' | 'G') => handler.cycle_graph_batter(),
            KeyCode::Char('c' | 'C') => handler.export_scorecard(),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(prompt) = self.app.prompt.as_mut() {
                    prompt.select_prev();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(prompt) = self.app.prompt.as_mut() {
                    prompt.select_next();
                }
            }
            KeyCode::Enter => MatchHandler::new(self.app).confirm_prompt(),
            KeyCode::Esc => MatchHandler::new(self.app).cancel_prompt(),
            _ => {}
        }
    }

    fn handle_library_key(&mut self, key: KeyEvent) {
        let mut library = LibraryHandler::new(self.app);
        match (key.code, key.modifiers) {
            (KeyCode::Char('d' | 'D'), KeyModifiers::CONTROL) => library.reset_all(),
            (KeyCode::Up | KeyCode::Char('k'), _) => library.select_prev(),
            (KeyCode::Down | KeyCode::Char('j'), _) => library.select_next(),
            (KeyCode::Enter, _) => library.load_selected(),
            (KeyCode::Char('r' | 'R'), _) => library.refresh(),
            (KeyCode::Esc, _) => library.leave(),
            _ => self.app.confirm_reset = false,
        }
    }
}
