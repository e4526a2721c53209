use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::SqlitePool;
use tracing::info;

use crate::{
    db::{self, models::MatchSummary},
    scoring::Match,
};

use super::{
    handlers::{InputHandler, LibraryHandler},
    types::{LogBuffer, Prompt, Screen, SetupForm, UiSettings},
};

/// Main application state container.
pub struct App {
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) current_match: Option<Match>,
    pub(in crate::ui) prompt: Option<Prompt>,
    pub(in crate::ui) setup: SetupForm,
    pub(in crate::ui) saved_matches: Vec<MatchSummary>,
    pub(in crate::ui) library_selected: usize,
    pub(in crate::ui) confirm_reset: bool,
    pub(in crate::ui) graph_batter: Option<String>,
    pub(in crate::ui) settings: UiSettings,
    pub(in crate::ui) logs: LogBuffer,
    pub(in crate::ui) db_pool: SqlitePool,
}

impl App {
    pub fn new(db_pool: SqlitePool, settings: UiSettings, logs: LogBuffer) -> Self {
        Self {
            screen: Screen::Setup,
            current_match: None,
            prompt: None,
            setup: SetupForm::new(settings.default_overs),
            saved_matches: Vec::new(),
            library_selected: 0,
            confirm_reset: false,
            graph_batter: None,
            settings,
            logs,
            db_pool,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started. Ctrl+L opens saved matches.");
        LibraryHandler::new(self).refresh();

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
                && InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Execute an async database operation from sync context
    pub(in crate::ui) fn run_db_operation<F, T>(&self, future: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
    }

    /// Stamps and saves the loaded match. Failures are logged, not fatal.
    pub(in crate::ui) fn persist(&mut self) {
        let Some(m) = self.current_match.as_mut() else {
            return;
        };
        m.touch();

        let pool = self.db_pool.clone();
        let snapshot = m.clone();
        if let Err(e) = self.run_db_operation(async move {
            db::matches::save_match(&pool, &snapshot).await
        }) {
            tracing::error!("{:#}", e);
            self.log(format!("Save failed: {}", e));
        }
    }
}
