//! Batting and bowling figures derived from an innings' ball history.
//!
//! Nothing here mutates the innings; every function replays the recorded
//! balls and returns fresh values.

use std::collections::HashMap;

use crate::scoring::{BALLS_PER_OVER, Delivery, Innings};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattingStats {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub out: bool,
}

impl BattingStats {
    pub fn strike_rate(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            self.runs as f64 / self.balls as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatterLine {
    pub name: String,
    pub stats: BattingStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BowlingStats {
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
}

impl BowlingStats {
    pub fn overs(&self) -> String {
        overs_text(self.balls)
    }

    /// Runs conceded per six legal balls.
    pub fn economy(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            self.runs as f64 / (self.balls as f64 / BALLS_PER_OVER as f64)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BowlerLine {
    pub name: String,
    pub stats: BowlingStats,
}

/// Per-striker figures in order of first appearance at the striker's end.
pub fn compute_batting_stats(innings: &Innings) -> Vec<BatterLine> {
    let mut lines: Vec<BatterLine> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for ball in innings.balls() {
        let i = *index.entry(ball.striker.as_str()).or_insert_with(|| {
            lines.push(BatterLine {
                name: ball.striker.clone(),
                stats: BattingStats::default(),
            });
            lines.len() - 1
        });
        let s = &mut lines[i].stats;

        // a wide is not a ball faced; a no-ball is
        if ball.delivery != Delivery::Wide {
            s.balls += 1;
        }
        s.runs += ball.runs;
        match ball.runs {
            4 => s.fours += 1,
            6 => s.sixes += 1,
            _ => {}
        }
        if ball.wicket {
            s.out = true;
        }
    }

    lines
}

/// Per-bowler figures in order of first over bowled. Every wicket ball is
/// credited to the bowler.
pub fn compute_bowling_stats(innings: &Innings) -> Vec<BowlerLine> {
    let mut lines: Vec<BowlerLine> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for over in innings.overs() {
        let i = *index.entry(over.bowler.as_str()).or_insert_with(|| {
            lines.push(BowlerLine {
                name: over.bowler.clone(),
                stats: BowlingStats::default(),
            });
            lines.len() - 1
        });
        let s = &mut lines[i].stats;

        for ball in &over.balls {
            s.runs += ball.total();
            if ball.is_legal() {
                s.balls += 1;
            }
            if ball.wicket {
                s.wickets += 1;
            }
        }
    }

    lines
}

/// Formats a legal-ball count as `overs.balls`, e.g. 17 -> "2.5".
pub fn overs_text(legal_balls: u32) -> String {
    format!(
        "{}.{}",
        legal_balls / BALLS_PER_OVER,
        legal_balls % BALLS_PER_OVER
    )
}

/// Team total after every delivery, extras included.
pub fn worm_series(innings: &Innings) -> Vec<u64> {
    innings
        .balls()
        .scan(0u64, |total, ball| {
            *total += ball.total() as u64;
            Some(*total)
        })
        .collect()
}

/// Cumulative run rate at the end of each over.
pub fn run_rate_series(innings: &Innings) -> Vec<f64> {
    let mut runs = 0u32;
    let mut legal = 0u32;

    innings
        .overs()
        .iter()
        .map(|over| {
            runs += over.runs();
            legal += over.legal_balls();
            if legal == 0 {
                0.0
            } else {
                runs as f64 / (legal as f64 / BALLS_PER_OVER as f64)
            }
        })
        .collect()
}

/// A batter's running total after each ball they were on strike for.
pub fn batter_series(innings: &Innings, batter: &str) -> Vec<u64> {
    innings
        .balls()
        .filter(|b| b.striker == batter)
        .scan(0u64, |total, ball| {
            *total += ball.runs as u64;
            Some(*total)
        })
        .collect()
}
