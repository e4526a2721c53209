//! Match, innings and ball state plus the rules that move them forward.
//!
//! A [`Match`] owns both teams and at most two innings. Every scoring action
//! goes through a `Match` method so the undo history and the completion
//! checks stay consistent with the ball log.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const BALLS_PER_OVER: u32 = 6;
pub const MAX_WICKETS: u32 = 10;
pub const MAX_RUNS_OFF_BAT: u32 = 7;

/// Precondition violations reported by the engine. The match is left
/// untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("innings is complete")]
    InningsCompleted,
    #[error("start the over first (select a bowler)")]
    NoOverInProgress,
    #[error("an over is already in progress")]
    OverInProgress,
    #[error("team {0} has no players")]
    EmptyRoster(TeamKey),
    #[error("overs limit must be at least 1")]
    InvalidOversLimit,
    #[error("runs off the bat must be between 0 and 7, got {0}")]
    InvalidRuns(u32),
    #[error("{0} is not an available batter")]
    UnknownBatter(String),
    #[error("{0} is already at the crease")]
    BatterAtCrease(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamKey {
    A,
    B,
}

impl TeamKey {
    pub fn other(self) -> Self {
        match self {
            TeamKey::A => TeamKey::B,
            TeamKey::B => TeamKey::A,
        }
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamKey::A => "A",
            TeamKey::B => "B",
        };
        write!(f, "{}", s)
    }
}

/// A named side. Player names double as identifiers, so duplicate names
/// within a roster are not told apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delivery {
    #[default]
    Normal,
    Wide,
    NoBall,
}

impl Delivery {
    pub fn is_legal(self) -> bool {
        matches!(self, Delivery::Normal)
    }

    /// Run credited automatically on top of the runs off the bat.
    pub fn extra(self) -> u32 {
        if self.is_legal() { 0 } else { 1 }
    }

    /// Short scorebook tag, `None` for a normal delivery.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Delivery::Normal => None,
            Delivery::Wide => Some("WD"),
            Delivery::NoBall => Some("NB"),
        }
    }
}

/// What the scorer enters for a single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallInput {
    runs: u32,
    delivery: Delivery,
    wicket: bool,
}

impl BallInput {
    pub fn new(runs: u32, delivery: Delivery, wicket: bool) -> Result<Self, ScoringError> {
        if runs > MAX_RUNS_OFF_BAT {
            return Err(ScoringError::InvalidRuns(runs));
        }
        Ok(Self {
            runs,
            delivery,
            wicket,
        })
    }

    pub fn runs(runs: u32) -> Result<Self, ScoringError> {
        Self::new(runs, Delivery::Normal, false)
    }

    pub fn wide() -> Self {
        Self {
            runs: 0,
            delivery: Delivery::Wide,
            wicket: false,
        }
    }

    pub fn no_ball() -> Self {
        Self {
            runs: 0,
            delivery: Delivery::NoBall,
            wicket: false,
        }
    }

    pub fn wicket() -> Self {
        Self {
            runs: 0,
            delivery: Delivery::Normal,
            wicket: true,
        }
    }

    pub fn runs_off_bat(&self) -> u32 {
        self.runs
    }

    pub fn delivery(&self) -> Delivery {
        self.delivery
    }

    pub fn is_wicket(&self) -> bool {
        self.wicket
    }
}

/// A recorded delivery. Never modified once appended to an over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub over: usize,
    pub ball: usize,
    pub striker: String,
    pub non_striker: String,
    pub bowler: String,
    pub runs: u32,
    pub delivery: Delivery,
    pub wicket: bool,
}

impl Ball {
    pub fn is_legal(&self) -> bool {
        self.delivery.is_legal()
    }

    /// Runs off the bat plus the automatic wide/no-ball extra.
    pub fn total(&self) -> u32 {
        self.runs + self.delivery.extra()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Over {
    pub id: String,
    pub bowler: String,
    pub balls: Vec<Ball>,
}

impl Over {
    fn new(bowler: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bowler,
            balls: Vec::new(),
        }
    }

    pub fn legal_balls(&self) -> u32 {
        self.balls.iter().filter(|b| b.is_legal()).count() as u32
    }

    pub fn runs(&self) -> u32 {
        self.balls.iter().map(Ball::total).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.legal_balls() >= BALLS_PER_OVER
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub runs: u32,
    pub wickets: u32,
    pub legal_balls: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Innings {
    number: u8,
    batting: TeamKey,
    bowling: TeamKey,
    striker: String,
    non_striker: String,
    dismissed: Vec<String>,
    overs: Vec<Over>,
    current_over: Option<usize>,
    score: Score,
    overs_limit: u32,
    target: Option<u32>,
    completed: bool,
}

impl Innings {
    fn new(number: u8, batting: TeamKey, team: &Team, overs_limit: u32, target: Option<u32>) -> Self {
        let striker = team.players.first().cloned().unwrap_or_default();
        let non_striker = team
            .players
            .get(1)
            .cloned()
            .unwrap_or_else(|| striker.clone());

        Self {
            number,
            batting,
            bowling: batting.other(),
            striker,
            non_striker,
            dismissed: Vec::new(),
            overs: Vec::new(),
            current_over: None,
            score: Score::default(),
            overs_limit,
            target,
            completed: false,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn batting(&self) -> TeamKey {
        self.batting
    }

    pub fn bowling(&self) -> TeamKey {
        self.bowling
    }

    pub fn striker(&self) -> &str {
        &self.striker
    }

    pub fn non_striker(&self) -> &str {
        &self.non_striker
    }

    pub fn is_out(&self, player: &str) -> bool {
        self.dismissed.iter().any(|p| p == player)
    }

    pub fn overs(&self) -> &[Over] {
        &self.overs
    }

    pub fn current_over(&self) -> Option<&Over> {
        self.current_over.and_then(|i| self.overs.get(i))
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn overs_limit(&self) -> u32 {
        self.overs_limit
    }

    pub fn max_balls(&self) -> u32 {
        self.overs_limit * BALLS_PER_OVER
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True when no over is open, so a bowler has to be picked before the
    /// next delivery.
    pub fn needs_bowler(&self) -> bool {
        self.current_over.is_none()
    }

    /// Every recorded delivery in bowling order.
    pub fn balls(&self) -> impl Iterator<Item = &Ball> {
        self.overs.iter().flat_map(|o| o.balls.iter())
    }

    pub fn start_over(&mut self, bowler: impl Into<String>) -> Result<(), ScoringError> {
        if self.completed {
            return Err(ScoringError::InningsCompleted);
        }
        if self.current_over.is_some() {
            return Err(ScoringError::OverInProgress);
        }

        self.overs.push(Over::new(bowler.into()));
        self.current_over = Some(self.overs.len() - 1);
        Ok(())
    }

    fn apply(&mut self, input: BallInput) {
        let Some(index) = self.current_over else {
            return;
        };

        let ball = Ball {
            over: index,
            ball: self.overs[index].balls.len(),
            striker: self.striker.clone(),
            non_striker: self.non_striker.clone(),
            bowler: self.overs[index].bowler.clone(),
            runs: input.runs,
            delivery: input.delivery,
            wicket: input.wicket,
        };
        let legal = ball.is_legal();

        self.score.runs += ball.total();

        if ball.wicket {
            self.score.wickets += 1;
            if !self.is_out(&self.striker) {
                self.dismissed.push(self.striker.clone());
            }
        }

        if legal {
            self.score.legal_balls += 1;
            if ball.runs % 2 == 1 {
                self.swap_strike();
            }
        }

        let over = &mut self.overs[index];
        over.balls.push(ball);
        let over_done = legal && over.legal_balls() == BALLS_PER_OVER;

        if over_done {
            self.swap_strike();
            self.current_over = None;
        }

        self.check_completion();
    }

    fn check_completion(&mut self) {
        let overs_done = self.score.legal_balls >= self.max_balls();
        let all_out = self.score.wickets >= MAX_WICKETS;
        let chased = self.number == 2 && self.target.is_some_and(|t| self.score.runs >= t);

        if overs_done || all_out || chased {
            tracing::debug!(
                innings = self.number,
                overs_done,
                all_out,
                chased,
                "innings auto-completed"
            );
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.completed = true;
        self.current_over = None;
    }

    fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }
}

/// Settings for a new match.
#[derive(Debug, Clone)]
pub struct MatchSetup {
    pub team_a: Team,
    pub team_b: Team,
    pub overs_limit: u32,
    pub bat_first: TeamKey,
}

/// Final outcome of a two-innings match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    ChaseWon { team: String, wickets: u32 },
    DefenceWon { team: String, runs: u32 },
    Tied,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::ChaseWon { team, wickets } => {
                write!(f, "{} won by {} wicket(s)", team, wickets)
            }
            MatchResult::DefenceWon { team, runs } => write!(f, "{} won by {} run(s)", team, runs),
            MatchResult::Tied => write!(f, "Match tied"),
        }
    }
}

/// Where a chase stands right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseStatus {
    pub target: u32,
    pub runs_needed: u32,
    pub balls_left: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    team_a: Team,
    team_b: Team,
    overs_limit: u32,
    bat_first: TeamKey,
    first: Innings,
    second: Option<Innings>,
    history: Vec<Innings>,
    result: Option<MatchResult>,
}

impl Match {
    pub fn new(setup: MatchSetup) -> Result<Self, ScoringError> {
        if setup.team_a.players.is_empty() {
            return Err(ScoringError::EmptyRoster(TeamKey::A));
        }
        if setup.team_b.players.is_empty() {
            return Err(ScoringError::EmptyRoster(TeamKey::B));
        }
        if setup.overs_limit == 0 {
            return Err(ScoringError::InvalidOversLimit);
        }

        let batting_team = match setup.bat_first {
            TeamKey::A => &setup.team_a,
            TeamKey::B => &setup.team_b,
        };
        let first = Innings::new(1, setup.bat_first, batting_team, setup.overs_limit, None);
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            team_a: setup.team_a,
            team_b: setup.team_b,
            overs_limit: setup.overs_limit,
            bat_first: setup.bat_first,
            first,
            second: None,
            history: Vec::new(),
            result: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn touch(&mut self) {
        self.touch_at(Utc::now());
    }

    pub fn touch_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    pub fn team(&self, key: TeamKey) -> &Team {
        match key {
            TeamKey::A => &self.team_a,
            TeamKey::B => &self.team_b,
        }
    }

    pub fn overs_limit(&self) -> u32 {
        self.overs_limit
    }

    pub fn first_innings(&self) -> &Innings {
        &self.first
    }

    pub fn second_innings(&self) -> Option<&Innings> {
        self.second.as_ref()
    }

    pub fn innings_count(&self) -> usize {
        if self.second.is_some() { 2 } else { 1 }
    }

    /// The innings scoring actions apply to.
    pub fn current_innings(&self) -> &Innings {
        self.second.as_ref().unwrap_or(&self.first)
    }

    fn current_innings_mut(&mut self) -> &mut Innings {
        match &mut self.second {
            Some(innings) => innings,
            None => &mut self.first,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub fn start_over(&mut self, bowler: impl Into<String>) -> Result<(), ScoringError> {
        self.current_innings_mut().start_over(bowler)
    }

    /// Records one delivery against the open over.
    ///
    /// A snapshot of the innings is pushed onto the undo history first, so
    /// every successful call can be reversed with [`Match::undo_last_ball`].
    pub fn add_ball(&mut self, input: BallInput) -> Result<(), ScoringError> {
        let innings = self.current_innings();
        if innings.completed {
            return Err(ScoringError::InningsCompleted);
        }
        if innings.needs_bowler() {
            return Err(ScoringError::NoOverInProgress);
        }

        let snapshot = innings.clone();
        self.history.push(snapshot);
        self.current_innings_mut().apply(input);
        Ok(())
    }

    /// Restores the innings as it was before the most recent ball. Returns
    /// false when there is nothing to undo.
    pub fn undo_last_ball(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                *self.current_innings_mut() = previous;
                true
            }
            None => false,
        }
    }

    /// Closes the active innings regardless of balls or wickets.
    pub fn end_innings(&mut self) {
        self.current_innings_mut().complete();
    }

    pub fn can_start_second_innings(&self) -> bool {
        self.second.is_none() && self.first.completed
    }

    pub fn start_second_innings(&mut self) -> bool {
        if !self.can_start_second_innings() {
            return false;
        }

        let target = self.first.score.runs + 1;
        let batting = self.first.bowling;
        let innings = Innings::new(2, batting, self.team(batting), self.overs_limit, Some(target));

        self.second = Some(innings);
        self.history.clear();
        self.result = None;
        true
    }

    /// Runs the chase needs to win, falling back to first-innings runs + 1
    /// if the second innings carries no target.
    pub fn target(&self) -> Option<u32> {
        let second = self.second.as_ref()?;
        Some(second.target.unwrap_or(self.first.score.runs + 1))
    }

    pub fn chase_status(&self) -> Option<ChaseStatus> {
        let second = self.second.as_ref()?;
        let target = self.target()?;
        Some(ChaseStatus {
            target,
            runs_needed: target.saturating_sub(second.score.runs),
            balls_left: second.max_balls().saturating_sub(second.score.legal_balls),
        })
    }

    /// Works out the result from the current state and stores it on the
    /// match. `None` means the match is still going.
    pub fn compute_result(&mut self) -> Option<&MatchResult> {
        let second = self.second.as_ref()?;
        let target = self.target()?;
        let score = second.score;

        let result = if score.runs >= target {
            Some(MatchResult::ChaseWon {
                team: self.team(second.batting).name.clone(),
                wickets: MAX_WICKETS.saturating_sub(score.wickets),
            })
        } else if second.completed && score.runs + 1 == target {
            Some(MatchResult::Tied)
        } else if second.completed {
            Some(MatchResult::DefenceWon {
                team: self.team(self.first.batting).name.clone(),
                runs: target - score.runs,
            })
        } else {
            None
        };

        self.result = result;
        self.result.as_ref()
    }

    /// Batting-side players who have not been dismissed.
    pub fn available_batters(&self) -> Vec<&str> {
        let innings = self.current_innings();
        self.team(innings.batting)
            .players
            .iter()
            .filter(|p| !innings.is_out(p))
            .map(String::as_str)
            .collect()
    }

    /// Available batters who are not already at the crease.
    pub fn incoming_batters(&self) -> Vec<&str> {
        let innings = self.current_innings();
        self.available_batters()
            .into_iter()
            .filter(|p| *p != innings.striker && *p != innings.non_striker)
            .collect()
    }

    pub fn set_striker(&mut self, name: &str) -> Result<(), ScoringError> {
        self.check_batter(name)?;
        let innings = self.current_innings_mut();
        if name == innings.non_striker {
            return Err(ScoringError::BatterAtCrease(name.to_string()));
        }
        innings.striker = name.to_string();
        Ok(())
    }

    pub fn set_non_striker(&mut self, name: &str) -> Result<(), ScoringError> {
        self.check_batter(name)?;
        let innings = self.current_innings_mut();
        if name == innings.striker {
            return Err(ScoringError::BatterAtCrease(name.to_string()));
        }
        innings.non_striker = name.to_string();
        Ok(())
    }

    /// Sends in a new batter after a wicket, taking the place of whichever
    /// crease occupant is out. A wicket on the last ball of an over leaves
    /// the dismissed batter at the non-striker's end; with nobody out the
    /// striker is replaced.
    pub fn bring_in_batter(&mut self, name: &str) -> Result<(), ScoringError> {
        self.check_batter(name)?;
        let innings = self.current_innings_mut();
        if name == innings.striker || name == innings.non_striker {
            return Err(ScoringError::BatterAtCrease(name.to_string()));
        }

        if !innings.is_out(&innings.striker) && innings.is_out(&innings.non_striker) {
            innings.non_striker = name.to_string();
        } else {
            innings.striker = name.to_string();
        }
        Ok(())
    }

    fn check_batter(&self, name: &str) -> Result<(), ScoringError> {
        if self.current_innings().completed {
            return Err(ScoringError::InningsCompleted);
        }
        if !self.available_batters().contains(&name) {
            return Err(ScoringError::UnknownBatter(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn new_match(overs_limit: u32) -> Match {
        Match::new(MatchSetup {
            team_a: Team::new("Lions", players(&["A1", "A2", "A3", "A4"])),
            team_b: Team::new("Tigers", players(&["B1", "B2", "B3", "B4"])),
            overs_limit,
            bat_first: TeamKey::A,
        })
        .unwrap()
    }

    /// Opens an over if needed, then records the ball.
    fn bowl(m: &mut Match, input: BallInput) {
        if m.current_innings().needs_bowler() {
            let bowler = m.team(m.current_innings().bowling()).players[0].clone();
            m.start_over(bowler).unwrap();
        }
        m.add_ball(input).unwrap();
    }

    fn runs(n: u32) -> BallInput {
        BallInput::runs(n).unwrap()
    }

    #[test]
    fn test_new_match_sets_up_first_innings() {
        let m = new_match(5);
        let inn = m.current_innings();

        assert_eq!(m.innings_count(), 1);
        assert_eq!(inn.number(), 1);
        assert_eq!(inn.batting(), TeamKey::A);
        assert_eq!(inn.bowling(), TeamKey::B);
        assert_eq!(inn.striker(), "A1");
        assert_eq!(inn.non_striker(), "A2");
        assert_eq!(inn.score(), Score::default());
        assert_eq!(inn.target(), None);
        assert!(inn.needs_bowler());
        assert!(!inn.is_completed());
        assert!(m.result().is_none());
    }

    #[test]
    fn test_new_match_team_b_bats_first() {
        let m = Match::new(MatchSetup {
            team_a: Team::new("Lions", players(&["A1", "A2"])),
            team_b: Team::new("Tigers", players(&["B1"])),
            overs_limit: 2,
            bat_first: TeamKey::B,
        })
        .unwrap();

        let inn = m.current_innings();
        assert_eq!(inn.batting(), TeamKey::B);
        assert_eq!(inn.striker(), "B1");
        assert_eq!(inn.non_striker(), "B1");
    }

    #[test]
    fn test_new_match_rejects_empty_roster_and_zero_overs() {
        let err = Match::new(MatchSetup {
            team_a: Team::new("Lions", players(&["A1"])),
            team_b: Team::new("Tigers", Vec::new()),
            overs_limit: 2,
            bat_first: TeamKey::A,
        })
        .unwrap_err();
        assert_eq!(err, ScoringError::EmptyRoster(TeamKey::B));

        let err = Match::new(MatchSetup {
            team_a: Team::new("Lions", players(&["A1"])),
            team_b: Team::new("Tigers", players(&["B1"])),
            overs_limit: 0,
            bat_first: TeamKey::A,
        })
        .unwrap_err();
        assert_eq!(err, ScoringError::InvalidOversLimit);
    }

    #[test]
    fn test_ball_input_rejects_too_many_runs() {
        assert_eq!(BallInput::runs(8), Err(ScoringError::InvalidRuns(8)));
        assert!(BallInput::runs(7).is_ok());
    }

    #[test]
    fn test_add_ball_without_over_fails_and_leaves_state() {
        let mut m = new_match(2);
        let before = m.clone();

        assert_eq!(m.add_ball(runs(1)), Err(ScoringError::NoOverInProgress));
        assert_eq!(m, before);
    }

    #[test]
    fn test_start_over_twice_fails() {
        let mut m = new_match(2);
        m.start_over("B1").unwrap();
        assert_eq!(m.start_over("B2"), Err(ScoringError::OverInProgress));
        assert_eq!(m.current_innings().overs().len(), 1);
    }

    #[test]
    fn test_score_tracks_runs_and_extras() {
        let mut m = new_match(5);
        bowl(&mut m, runs(4));
        bowl(&mut m, BallInput::wide());
        bowl(&mut m, BallInput::new(2, Delivery::NoBall, false).unwrap());
        bowl(&mut m, runs(1));

        let inn = m.current_innings();
        let from_balls: u32 = inn.balls().map(Ball::total).sum();
        let legal = inn.balls().filter(|b| b.is_legal()).count() as u32;

        assert_eq!(inn.score().runs, 9);
        assert_eq!(inn.score().runs, from_balls);
        assert_eq!(inn.score().legal_balls, 2);
        assert_eq!(inn.score().legal_balls, legal);
    }

    #[test]
    fn test_odd_runs_swap_strike() {
        let mut m = new_match(5);
        bowl(&mut m, runs(1));
        assert_eq!(m.current_innings().striker(), "A2");

        bowl(&mut m, runs(2));
        assert_eq!(m.current_innings().striker(), "A2");

        bowl(&mut m, runs(3));
        assert_eq!(m.current_innings().striker(), "A1");
    }

    #[test]
    fn test_extras_never_swap_strike() {
        let mut m = new_match(5);
        bowl(&mut m, BallInput::new(1, Delivery::Wide, false).unwrap());
        bowl(&mut m, BallInput::new(3, Delivery::NoBall, false).unwrap());

        let inn = m.current_innings();
        assert_eq!(inn.striker(), "A1");
        assert_eq!(inn.non_striker(), "A2");
    }

    #[test]
    fn test_sixth_legal_ball_swaps_and_closes_over() {
        let mut m = new_match(5);
        for _ in 0..5 {
            bowl(&mut m, runs(0));
        }
        bowl(&mut m, BallInput::wide());
        assert!(!m.current_innings().needs_bowler());

        bowl(&mut m, runs(0));
        let inn = m.current_innings();
        assert!(inn.needs_bowler());
        assert!(inn.current_over().is_none());
        assert_eq!(inn.striker(), "A2");
        assert_eq!(inn.overs()[0].balls.len(), 7);
        assert_eq!(inn.overs()[0].legal_balls(), 6);
    }

    #[test]
    fn test_single_off_last_ball_keeps_striker() {
        let mut m = new_match(5);
        for _ in 0..5 {
            bowl(&mut m, runs(0));
        }
        bowl(&mut m, runs(1));

        // mid-over swap then end-of-over swap
        assert_eq!(m.current_innings().striker(), "A1");
    }

    #[test]
    fn test_two_overs_of_singles_completes_innings() {
        let mut m = Match::new(MatchSetup {
            team_a: Team::new("Lions", players(&["P1", "P2"])),
            team_b: Team::new("Tigers", players(&["B1"])),
            overs_limit: 2,
            bat_first: TeamKey::A,
        })
        .unwrap();

        for _ in 0..12 {
            bowl(&mut m, runs(1));
        }

        let inn = m.current_innings();
        assert_eq!(inn.score(), Score { runs: 12, wickets: 0, legal_balls: 12 });
        assert!(inn.is_completed());
        assert!(inn.needs_bowler());
        assert_eq!(m.add_ball(runs(1)), Err(ScoringError::InningsCompleted));
        assert_eq!(m.start_over("B1"), Err(ScoringError::InningsCompleted));
    }

    #[test]
    fn test_wicket_marks_striker_out() {
        let mut m = new_match(5);
        bowl(&mut m, BallInput::wicket());

        let inn = m.current_innings();
        assert_eq!(inn.score().wickets, 1);
        assert!(inn.is_out("A1"));
        // striker stays until the caller brings someone in
        assert_eq!(inn.striker(), "A1");
        assert_eq!(m.available_batters(), vec!["A2", "A3", "A4"]);
        assert_eq!(m.incoming_batters(), vec!["A3", "A4"]);
    }

    #[test]
    fn test_wicket_with_no_incoming_batters() {
        let mut m = Match::new(MatchSetup {
            team_a: Team::new("Lions", players(&["P1", "P2"])),
            team_b: Team::new("Tigers", players(&["B1"])),
            overs_limit: 2,
            bat_first: TeamKey::A,
        })
        .unwrap();

        bowl(&mut m, BallInput::wicket());

        assert!(m.incoming_batters().is_empty());
        let inn = m.current_innings();
        assert_eq!(inn.score().wickets, 1);
        assert!(inn.is_out("P1"));
        assert_eq!(inn.striker(), "P1");
    }

    #[test]
    fn test_ten_wickets_end_innings() {
        let mut m = new_match(5);
        for _ in 0..10 {
            bowl(&mut m, BallInput::wicket());
        }
        let inn = m.current_innings();
        assert_eq!(inn.score().wickets, 10);
        assert!(inn.is_completed());
    }

    #[test]
    fn test_bring_in_batter_after_wicket() {
        let mut m = new_match(5);
        bowl(&mut m, BallInput::wicket());

        assert_eq!(
            m.bring_in_batter("A1"),
            Err(ScoringError::UnknownBatter("A1".into()))
        );
        assert_eq!(
            m.bring_in_batter("A2"),
            Err(ScoringError::BatterAtCrease("A2".into()))
        );
        m.bring_in_batter("A3").unwrap();
        assert_eq!(m.current_innings().striker(), "A3");
    }

    #[test]
    fn test_wicket_on_last_ball_replaces_non_striker() {
        let mut m = new_match(5);
        for _ in 0..5 {
            bowl(&mut m, runs(0));
        }
        bowl(&mut m, BallInput::wicket());

        // end-of-over swap has already moved A1 to the other end
        let inn = m.current_innings();
        assert!(inn.needs_bowler());
        assert_eq!(inn.striker(), "A2");
        assert_eq!(inn.non_striker(), "A1");
        assert!(inn.is_out("A1"));

        m.bring_in_batter("A3").unwrap();

        let inn = m.current_innings();
        assert_eq!(inn.striker(), "A2");
        assert_eq!(inn.non_striker(), "A3");
        assert!(!inn.is_out(inn.striker()));
        assert!(!inn.is_out(inn.non_striker()));
    }

    #[test]
    fn test_set_striker_and_non_striker() {
        let mut m = new_match(5);
        assert_eq!(
            m.set_striker("A2"),
            Err(ScoringError::BatterAtCrease("A2".into()))
        );
        m.set_non_striker("A4").unwrap();
        m.set_striker("A2").unwrap();
        assert_eq!(m.current_innings().striker(), "A2");
        assert_eq!(m.current_innings().non_striker(), "A4");
        assert_eq!(
            m.set_striker("B1"),
            Err(ScoringError::UnknownBatter("B1".into()))
        );
    }

    #[test]
    fn test_undo_restores_innings_exactly() {
        let mut m = new_match(1);
        for _ in 0..5 {
            bowl(&mut m, runs(2));
        }
        let before = m.current_innings().clone();

        bowl(&mut m, runs(1));
        assert!(m.current_innings().is_completed());

        assert!(m.undo_last_ball());
        assert_eq!(m.current_innings(), &before);
        assert!(!m.current_innings().is_completed());
    }

    #[test]
    fn test_undo_is_repeatable_and_noop_when_empty() {
        let mut m = new_match(2);
        m.start_over("B1").unwrap();
        let start = m.current_innings().clone();

        m.add_ball(runs(1)).unwrap();
        m.add_ball(BallInput::wide()).unwrap();
        m.add_ball(BallInput::wicket()).unwrap();
        assert_eq!(m.history_len(), 3);

        assert!(m.undo_last_ball());
        assert!(m.undo_last_ball());
        assert!(m.undo_last_ball());
        assert_eq!(m.current_innings(), &start);

        assert!(!m.undo_last_ball());
        assert_eq!(m.current_innings(), &start);
    }

    #[test]
    fn test_end_innings_mid_over() {
        let mut m = new_match(5);
        bowl(&mut m, runs(1));
        m.end_innings();

        let inn = m.current_innings();
        assert!(inn.is_completed());
        assert!(inn.needs_bowler());
    }

    #[test]
    fn test_second_innings_eligibility() {
        let mut m = new_match(5);
        assert!(!m.can_start_second_innings());
        assert!(!m.start_second_innings());
        assert_eq!(m.innings_count(), 1);

        m.end_innings();
        assert!(m.can_start_second_innings());
        assert!(m.start_second_innings());
        assert_eq!(m.innings_count(), 2);
        assert!(!m.can_start_second_innings());
        assert!(!m.start_second_innings());
    }

    #[test]
    fn test_second_innings_swaps_sides_and_sets_target() {
        let mut m = new_match(5);
        bowl(&mut m, runs(4));
        bowl(&mut m, BallInput::wide());
        m.end_innings();
        m.start_second_innings();

        let inn = m.current_innings();
        assert_eq!(inn.number(), 2);
        assert_eq!(inn.batting(), TeamKey::B);
        assert_eq!(inn.bowling(), TeamKey::A);
        assert_eq!(inn.striker(), "B1");
        assert_eq!(inn.non_striker(), "B2");
        assert_eq!(inn.target(), Some(6));
        assert_eq!(inn.score(), Score::default());
        assert_eq!(m.history_len(), 0);
        assert!(!m.undo_last_ball());
    }

    #[test]
    fn test_compute_result_needs_two_innings() {
        let mut m = new_match(5);
        m.end_innings();
        assert!(m.compute_result().is_none());
    }

    #[test]
    fn test_chase_won_mid_over() {
        let mut m = new_match(20);
        for _ in 0..19 {
            bowl(&mut m, runs(6));
        }
        bowl(&mut m, runs(5));
        m.end_innings();
        m.start_second_innings();
        assert_eq!(m.target(), Some(120));

        for _ in 0..3 {
            bowl(&mut m, BallInput::wicket());
        }
        for _ in 0..20 {
            bowl(&mut m, runs(6));
        }

        let inn = m.current_innings();
        assert_eq!(inn.score().runs, 120);
        assert_eq!(inn.score().wickets, 3);
        assert!(inn.score().legal_balls < inn.max_balls());
        assert!(inn.is_completed());

        let result = m.compute_result().cloned();
        assert_eq!(
            result,
            Some(MatchResult::ChaseWon {
                team: "Tigers".into(),
                wickets: 7
            })
        );
        assert_eq!(result.unwrap().to_string(), "Tigers won by 7 wicket(s)");
    }

    #[test]
    fn test_defence_won_when_chase_falls_short() {
        let mut m = new_match(1);
        for _ in 0..6 {
            bowl(&mut m, runs(2));
        }
        m.start_second_innings();
        assert_eq!(m.target(), Some(13));

        for _ in 0..6 {
            bowl(&mut m, runs(1));
        }
        assert!(m.current_innings().is_completed());

        let result = m.compute_result().cloned().unwrap();
        assert_eq!(
            result,
            MatchResult::DefenceWon {
                team: "Lions".into(),
                runs: 7
            }
        );
        assert_eq!(result.to_string(), "Lions won by 7 run(s)");
    }

    #[test]
    fn test_equal_scores_is_a_tie() {
        let mut m = new_match(1);
        for _ in 0..6 {
            bowl(&mut m, runs(1));
        }
        m.start_second_innings();
        for _ in 0..6 {
            bowl(&mut m, runs(1));
        }

        assert_eq!(m.compute_result(), Some(&MatchResult::Tied));
        assert_eq!(MatchResult::Tied.to_string(), "Match tied");
    }

    #[test]
    fn test_result_pending_while_chase_is_live() {
        let mut m = new_match(2);
        bowl(&mut m, runs(4));
        m.end_innings();
        m.start_second_innings();
        bowl(&mut m, runs(2));

        assert!(m.compute_result().is_none());
        let chase = m.chase_status().unwrap();
        assert_eq!(chase.target, 5);
        assert_eq!(chase.runs_needed, 3);
        assert_eq!(chase.balls_left, 11);
    }

    #[test]
    fn test_undo_clears_stale_result_on_recompute() {
        let mut m = new_match(2);
        bowl(&mut m, runs(1));
        m.end_innings();
        m.start_second_innings();
        bowl(&mut m, runs(4));
        assert!(m.compute_result().is_some());

        m.undo_last_ball();
        assert!(m.compute_result().is_none());
        assert!(m.result().is_none());
    }

    #[test]
    fn test_match_round_trips_through_json() {
        let mut m = new_match(2);
        bowl(&mut m, runs(3));
        bowl(&mut m, BallInput::no_ball());

        let json = serde_json::to_string(&m).unwrap();
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
