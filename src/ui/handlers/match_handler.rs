//! Scoring actions on the loaded match.

use anyhow::Context;

use crate::{
    export::{ball_line, scorecard_lines, share_text},
    scoring::{BallInput, Match},
};

use super::super::{
    app::App,
    types::{BatterSlot, Prompt, PromptKind},
};

/// Helper struct that turns scorer gestures into engine calls, then logs
/// and persists the outcome.
pub struct MatchHandler<'a> {
    app: &'a mut App,
}

impl<'a> MatchHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn record_ball(&mut self, input: BallInput) {
        let Some(m) = self.app.current_match.as_mut() else {
            self.app.log("No match loaded");
            return;
        };
        if let Err(e) = m.add_ball(input) {
            self.app.log(format!("Ball rejected: {}", e));
            return;
        }

        let innings = m.current_innings();
        let line = innings.balls().last().map(ball_line);
        let number = innings.number();
        let completed = innings.is_completed();
        let over_done = innings.needs_bowler();
        let has_incoming = !m.incoming_batters().is_empty();

        if let Some(line) = line {
            self.app.log(line);
        }
        if completed {
            self.app.log(format!("Innings {} complete", number));
        } else if over_done {
            self.app.log("Over complete. Press b to pick the next bowler");
        }

        self.settle();

        if input.is_wicket() && !completed {
            if has_incoming {
                self.open_batter_prompt(BatterSlot::Incoming);
            } else {
                self.app.log("No batters left to come in; striker unchanged");
            }
        }
    }

    pub fn undo(&mut self) {
        let Some(m) = self.app.current_match.as_mut() else {
            return;
        };

        if m.undo_last_ball() {
            self.app.log("Undid last ball");
            self.settle();
        } else {
            self.app.log("Nothing to undo");
        }
    }

    pub fn end_innings(&mut self) {
        let Some(m) = self.app.current_match.as_mut() else {
            return;
        };
        if m.current_innings().is_completed() {
            self.app.log("Innings is already complete");
            return;
        }

        m.end_innings();
        let number = m.current_innings().number();
        self.app.prompt = None;
        self.app.log(format!("Innings {} ended", number));
        self.settle();
    }

    pub fn start_second_innings(&mut self) {
        let Some(m) = self.app.current_match.as_mut() else {
            return;
        };
        if !m.start_second_innings() {
            self.app.log("Second innings can start once innings 1 is complete");
            return;
        }

        let target = m.target().unwrap_or_default();
        self.app.graph_batter = None;
        self.app.log(format!("Innings 2 started. Target: {}", target));
        self.settle();
        self.open_bowler_prompt();
    }

    pub fn open_bowler_prompt(&mut self) {
        let Some(m) = self.app.current_match.as_ref() else {
            return;
        };
        let innings = m.current_innings();
        if innings.is_completed() {
            self.app.log("Innings is complete.");
            return;
        }
        if !innings.needs_bowler() {
            self.app.log("Over already in progress");
            return;
        }

        let options = m.team(innings.bowling()).players.clone();
        let last_bowler = innings.overs().last().map(|o| o.bowler.clone());

        let mut prompt = Prompt::new(PromptKind::Bowler, options);
        // preselect someone other than the previous over's bowler
        if let Some(last) = last_bowler
            && let Some(i) = prompt.options.iter().position(|p| *p != last)
        {
            prompt.selected = i;
        }
        self.app.prompt = Some(prompt);
    }

    pub fn open_batter_prompt(&mut self, slot: BatterSlot) {
        let Some(m) = self.app.current_match.as_ref() else {
            return;
        };
        if m.current_innings().is_completed() {
            self.app.log("Innings is complete.");
            return;
        }

        let options: Vec<String> = match slot {
            BatterSlot::Striker => m.available_batters(),
            BatterSlot::NonStriker => {
                let striker = m.current_innings().striker();
                m.available_batters()
                    .into_iter()
                    .filter(|p| *p != striker)
                    .collect()
            }
            BatterSlot::Incoming => m.incoming_batters(),
        }
        .into_iter()
        .map(str::to_string)
        .collect();

        if options.is_empty() {
            self.app.log("No batters available");
            return;
        }
        self.app.prompt = Some(Prompt::new(PromptKind::Batter(slot), options));
    }

    pub fn confirm_prompt(&mut self) {
        let Some(prompt) = self.app.prompt.take() else {
            return;
        };
        let Some(choice) = prompt.choice().map(str::to_string) else {
            return;
        };
        let Some(m) = self.app.current_match.as_mut() else {
            return;
        };

        let outcome = match prompt.kind {
            PromptKind::Bowler => m.start_over(choice.as_str()).map(|_| {
                format!("Over {}: {} to bowl", m.current_innings().overs().len(), choice)
            }),
            PromptKind::Batter(BatterSlot::Striker) => m
                .set_striker(&choice)
                .map(|_| format!("Striker: {}", choice)),
            PromptKind::Batter(BatterSlot::NonStriker) => m
                .set_non_striker(&choice)
                .map(|_| format!("Non-striker: {}", choice)),
            PromptKind::Batter(BatterSlot::Incoming) => m
                .bring_in_batter(&choice)
                .map(|_| format!("New batter: {}", choice)),
        };

        match outcome {
            Ok(msg) => {
                self.app.log(msg);
                self.settle();
            }
            Err(e) => self.app.log(format!("Rejected: {}", e)),
        }
    }

    pub fn cancel_prompt(&mut self) {
        if let Some(prompt) = self.app.prompt.take()
            && prompt.kind == PromptKind::Batter(BatterSlot::Incoming)
        {
            self.app.log("No new batter sent in");
        }
    }

    /// Cycles the batter shown in the progression chart.
    pub fn cycle_graph_batter(&mut self) {
        let Some(m) = self.app.current_match.as_ref() else {
            return;
        };
        let players = &m.team(m.current_innings().batting()).players;
        if players.is_empty() {
            return;
        }

        let next = match &self.app.graph_batter {
            Some(current) => players
                .iter()
                .position(|p| p == current)
                .map(|i| (i + 1) % players.len())
                .unwrap_or(0),
            None => 0,
        };
        self.app.graph_batter = Some(players[next].clone());
    }

    /// Writes the scorecard to the export file and echoes the share text.
    pub fn export_scorecard(&mut self) {
        let Some(m) = self.app.current_match.as_ref() else {
            self.app.log("No match loaded");
            return;
        };

        let text = share_text(m);
        let card = scorecard_lines(m).join("\n");
        let path = self.app.settings.export_path.clone();

        let written = std::fs::write(&path, format!("{}\n", card))
            .with_context(|| format!("Failed to write {}", path.display()));

        for line in text.lines() {
            self.app.log(line.to_string());
        }
        match written {
            Ok(()) => self.app.log(format!("Scorecard written to {}", path.display())),
            Err(e) => self.app.log(format!("{:#}", e)),
        }
    }

    /// Recomputes the result, logging it when it changes, then saves.
    fn settle(&mut self) {
        let changed = self.app.current_match.as_mut().and_then(|m: &mut Match| {
            let before = m.result().cloned();
            let after = m.compute_result().cloned();
            (after != before).then_some(after).flatten()
        });

        if let Some(result) = changed {
            self.app.log(format!("Result: {}", result));
        }
        self.app.persist();
    }
}
