//! New-match form state management.

use crate::scoring::{Match, TeamKey};

use super::super::{
    app::App,
    types::{Screen, SetupField},
};
use super::MatchHandler;

/// Helper struct for editing and submitting the setup form.
pub struct SetupHandler<'a> {
    app: &'a mut App,
}

impl<'a> SetupHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn focus_next(&mut self) {
        self.app.setup.focused = self.app.setup.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.app.setup.focused = self.app.setup.focused.prev();
    }

    pub fn type_char(&mut self, c: char) {
        let form = &mut self.app.setup;
        match form.focused {
            SetupField::BatFirst => match c.to_ascii_uppercase() {
                'A' => form.bat_first = TeamKey::A,
                'B' => form.bat_first = TeamKey::B,
                ' ' => form.bat_first = form.bat_first.other(),
                _ => {}
            },
            SetupField::Overs if !c.is_ascii_digit() => {}
            field => {
                if let Some(text) = form.field_mut(field) {
                    text.push(c);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        let field = self.app.setup.focused;
        if let Some(text) = self.app.setup.field_mut(field) {
            text.pop();
        }
    }

    /// Creates the match, saves it and asks for the first bowler.
    pub fn submit(&mut self) {
        let created = self
            .app
            .setup
            .to_setup()
            .and_then(|setup| Match::new(setup).map_err(anyhow::Error::from));

        match created {
            Ok(m) => {
                self.app.log(format!(
                    "New match: {} vs {} ({} overs)",
                    m.team(TeamKey::A).name,
                    m.team(TeamKey::B).name,
                    m.overs_limit()
                ));
                self.app.current_match = Some(m);
                self.app.screen = Screen::Scoring;
                self.app.prompt = None;
                self.app.graph_batter = None;
                self.app.persist();
                MatchHandler::new(self.app).open_bowler_prompt();
            }
            Err(e) => self.app.log(format!("Cannot create match: {}", e)),
        }
    }
}
