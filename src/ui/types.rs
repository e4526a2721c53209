use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::{Result, anyhow};

use crate::{
    roster::{check_roster_minimums, parse_players},
    scoring::{MatchSetup, Team, TeamKey},
};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.lock();
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings the UI takes from the command line.
#[derive(Debug, Clone)]
pub struct UiSettings {
    pub default_overs: u32,
    pub export_path: PathBuf,
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Scoring,
    Library,
}

/// Validation status of the new-match form.
#[derive(Debug, PartialEq, Eq)]
pub enum InputStatus {
    Incomplete,
    Invalid(String),
    Valid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    TeamAName,
    TeamAPlayers,
    TeamBName,
    TeamBPlayers,
    Overs,
    BatFirst,
}

impl SetupField {
    pub const ALL: [SetupField; 6] = [
        SetupField::TeamAName,
        SetupField::TeamAPlayers,
        SetupField::TeamBName,
        SetupField::TeamBPlayers,
        SetupField::Overs,
        SetupField::BatFirst,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SetupField::TeamAName => "Team A name",
            SetupField::TeamAPlayers => "Team A players (comma separated)",
            SetupField::TeamBName => "Team B name",
            SetupField::TeamBPlayers => "Team B players (comma separated)",
            SetupField::Overs => "Overs",
            SetupField::BatFirst => "Bats first (A/B)",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Contents of the new-match form.
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub team_a_name: String,
    pub team_a_players: String,
    pub team_b_name: String,
    pub team_b_players: String,
    pub overs: String,
    pub bat_first: TeamKey,
    pub focused: SetupField,
}

impl SetupForm {
    pub fn new(default_overs: u32) -> Self {
        Self {
            team_a_name: String::new(),
            team_a_players: String::new(),
            team_b_name: String::new(),
            team_b_players: String::new(),
            overs: default_overs.to_string(),
            bat_first: TeamKey::A,
            focused: SetupField::TeamAName,
        }
    }

    /// Text buffer behind a field; `BatFirst` has none.
    pub fn field_mut(&mut self, field: SetupField) -> Option<&mut String> {
        match field {
            SetupField::TeamAName => Some(&mut self.team_a_name),
            SetupField::TeamAPlayers => Some(&mut self.team_a_players),
            SetupField::TeamBName => Some(&mut self.team_b_name),
            SetupField::TeamBPlayers => Some(&mut self.team_b_players),
            SetupField::Overs => Some(&mut self.overs),
            SetupField::BatFirst => None,
        }
    }

    pub fn field_text(&self, field: SetupField) -> String {
        match field {
            SetupField::TeamAName => self.team_a_name.clone(),
            SetupField::TeamAPlayers => self.team_a_players.clone(),
            SetupField::TeamBName => self.team_b_name.clone(),
            SetupField::TeamBPlayers => self.team_b_players.clone(),
            SetupField::Overs => self.overs.clone(),
            SetupField::BatFirst => self.bat_first.to_string(),
        }
    }

    pub fn status(&self) -> InputStatus {
        if self.team_a_players.trim().is_empty() || self.team_b_players.trim().is_empty() {
            return InputStatus::Incomplete;
        }

        match self.to_setup() {
            Ok(_) => InputStatus::Valid,
            Err(e) => InputStatus::Invalid(e.to_string()),
        }
    }

    /// Reads the form into match settings. Blank team names fall back to
    /// "Team A" / "Team B".
    pub fn to_setup(&self) -> Result<MatchSetup> {
        let name_or = |name: &str, fallback: &str| {
            let name = name.trim();
            if name.is_empty() {
                fallback.to_string()
            } else {
                name.to_string()
            }
        };

        let overs_limit: u32 = self
            .overs
            .trim()
            .parse()
            .map_err(|_| anyhow!("overs must be a whole number"))?;
        if overs_limit == 0 {
            return Err(anyhow!("overs must be at least 1"));
        }

        let setup = MatchSetup {
            team_a: Team::new(
                name_or(&self.team_a_name, "Team A"),
                parse_players(&self.team_a_players),
            ),
            team_b: Team::new(
                name_or(&self.team_b_name, "Team B"),
                parse_players(&self.team_b_players),
            ),
            overs_limit,
            bat_first: self.bat_first,
        };
        check_roster_minimums(&setup)?;
        Ok(setup)
    }
}

/// Which batting slot a batter pick fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatterSlot {
    Striker,
    NonStriker,
    Incoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Bowler,
    Batter(BatterSlot),
}

/// A pick-one list shown over the scoring screen.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub options: Vec<String>,
    pub selected: usize,
}

impl Prompt {
    pub fn new(kind: PromptKind, options: Vec<String>) -> Self {
        Self {
            kind,
            options,
            selected: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Bowler => "Select bowler",
            PromptKind::Batter(BatterSlot::Striker) => "Select striker",
            PromptKind::Batter(BatterSlot::NonStriker) => "Select non-striker",
            PromptKind::Batter(BatterSlot::Incoming) => "New batter",
        }
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    pub fn choice(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }
}
