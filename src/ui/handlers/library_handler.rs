//! Saved-match library state management.

use crate::db;

use super::super::{app::App, types::Screen};

/// Helper struct for browsing, loading and clearing saved matches.
pub struct LibraryHandler<'a> {
    app: &'a mut App,
}

impl<'a> LibraryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn enter(&mut self) {
        self.app.screen = Screen::Library;
        self.app.prompt = None;
        self.app.confirm_reset = false;
        self.app.library_selected = 0;
        self.refresh();
    }

    /// Leave the library for the loaded match, or the setup form if none.
    pub fn leave(&mut self) {
        self.app.confirm_reset = false;
        self.app.screen = if self.app.current_match.is_some() {
            Screen::Scoring
        } else {
            Screen::Setup
        };
    }

    pub fn refresh(&mut self) {
        let pool = self.app.db_pool.clone();
        match self
            .app
            .run_db_operation(async move { db::matches::list_matches(&pool).await })
        {
            Ok(matches) => {
                self.app.saved_matches = matches;
                if self.app.library_selected >= self.app.saved_matches.len() {
                    self.app.library_selected = self.app.saved_matches.len().saturating_sub(1);
                }
            }
            Err(e) => self.app.log(format!("Failed to list matches: {}", e)),
        }
    }

    pub fn select_next(&mut self) {
        self.app.confirm_reset = false;
        if self.app.library_selected + 1 < self.app.saved_matches.len() {
            self.app.library_selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.app.confirm_reset = false;
        self.app.library_selected = self.app.library_selected.saturating_sub(1);
    }

    pub fn load_selected(&mut self) {
        let Some(summary) = self.app.saved_matches.get(self.app.library_selected) else {
            return;
        };
        let id = summary.id.clone();
        let label = summary.label();

        let pool = self.app.db_pool.clone();
        let lookup = id.clone();
        match self
            .app
            .run_db_operation(async move { db::matches::load_match(&pool, &lookup).await })
        {
            Ok(Some(m)) => {
                self.app.current_match = Some(m);
                self.app.screen = Screen::Scoring;
                self.app.prompt = None;
                self.app.graph_batter = None;
                self.app.log(format!("Loaded {}", label));
            }
            Ok(None) => self.app.log(format!("Match not found: {}", id)),
            Err(e) => self.app.log(format!("Failed to load match: {}", e)),
        }
    }

    /// First call arms the reset, the second one deletes everything.
    pub fn reset_all(&mut self) {
        if !self.app.confirm_reset {
            self.app.confirm_reset = true;
            self.app
                .log("Press Ctrl+D again to delete ALL saved matches on this device");
            return;
        }

        self.app.confirm_reset = false;
        let pool = self.app.db_pool.clone();
        match self
            .app
            .run_db_operation(async move { db::matches::delete_all_matches(&pool).await })
        {
            Ok(deleted) => {
                self.app.current_match = None;
                self.app.prompt = None;
                self.app.saved_matches.clear();
                self.app.library_selected = 0;
                self.app.log(format!("Deleted {} saved match(es)", deleted));
            }
            Err(e) => self.app.log(format!("Failed to delete matches: {}", e)),
        }
    }
}
