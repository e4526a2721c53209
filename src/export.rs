//! Plain-text scorecards for sharing a match outside the app.

use crate::{
    scoring::{Ball, Innings, Match, TeamKey},
    stats::overs_text,
};

/// `"<team>: R/W (O)"` for one innings.
pub fn innings_line(m: &Match, innings: &Innings) -> String {
    let score = innings.score();
    format!(
        "{}: {}/{} ({})",
        m.team(innings.batting()).name,
        score.runs,
        score.wickets,
        overs_text(score.legal_balls)
    )
}

/// One ball-log entry, e.g. `"2.4 Bumrah → Smith  W NB +1"`.
pub fn ball_line(ball: &Ball) -> String {
    let wicket = if ball.wicket { "W " } else { "" };
    let tag = ball
        .delivery
        .tag()
        .map(|t| format!("{} ", t))
        .unwrap_or_default();
    format!(
        "{}.{} {} → {}  {}{}+{}",
        ball.over + 1,
        ball.ball + 1,
        ball.bowler,
        ball.striker,
        wicket,
        tag,
        ball.total()
    )
}

/// Status of the chase, or of the first innings when there is no chase yet.
pub fn chase_line(m: &Match) -> String {
    let Some(chase) = m.chase_status() else {
        return if m.first_innings().is_completed() {
            "Innings 1 complete".to_string()
        } else {
            "Innings 1 in progress".to_string()
        };
    };

    let finished = m.current_innings().is_completed();
    match m.result() {
        Some(result) if finished => format!("Target: {}\n{}", chase.target, result),
        _ => format!(
            "Target: {} • Need: {} off {} balls",
            chase.target, chase.runs_needed, chase.balls_left
        ),
    }
}

/// Compact text suitable for pasting into a chat message.
pub fn share_text(m: &Match) -> String {
    let mut text = format!(
        "{} vs {}\n{}",
        m.team(TeamKey::A).name,
        m.team(TeamKey::B).name,
        innings_line(m, m.first_innings())
    );

    if let Some(second) = m.second_innings() {
        let target = m.target().unwrap_or_default();
        text.push_str(&format!(
            "\n{}  Target: {}",
            innings_line(m, second),
            target
        ));
    }

    if let Some(result) = m.result() {
        text.push_str(&format!("\nResult: {}", result));
    }

    text
}

/// Line-by-line scorecard: title, subtitle, innings lines, chase and result.
/// Blank strings separate the sections.
pub fn scorecard_lines(m: &Match) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} vs {}",
            m.team(TeamKey::A).name,
            m.team(TeamKey::B).name
        ),
        format!(
            "Overs: {} • {}",
            m.overs_limit(),
            m.created_at().format("%Y-%m-%d %H:%M")
        ),
        String::new(),
        innings_line(m, m.first_innings()),
    ];

    let chase = match (m.second_innings(), m.chase_status()) {
        (Some(second), Some(chase)) => {
            lines.push(innings_line(m, second));
            format!(
                "Target {} • Need {} off {} balls",
                chase.target, chase.runs_needed, chase.balls_left
            )
        }
        _ if m.first_innings().is_completed() => "Innings 1 complete".to_string(),
        _ => "Innings 1 in progress".to_string(),
    };
    lines.push(chase);

    if let Some(result) = m.result() {
        lines.push(String::new());
        lines.push(format!("Result: {}", result));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{BallInput, Delivery, MatchSetup, Team};

    fn new_match() -> Match {
        Match::new(MatchSetup {
            team_a: Team::new("Lions", vec!["A1".into(), "A2".into()]),
            team_b: Team::new("Tigers", vec!["B1".into(), "B2".into()]),
            overs_limit: 2,
            bat_first: TeamKey::B,
        })
        .unwrap()
    }

    fn bowl(m: &mut Match, input: BallInput) {
        if m.current_innings().needs_bowler() {
            m.start_over("X").unwrap();
        }
        m.add_ball(input).unwrap();
    }

    #[test]
    fn test_ball_line() {
        let mut m = new_match();
        bowl(&mut m, BallInput::runs(4).unwrap());
        bowl(&mut m, BallInput::new(0, Delivery::NoBall, true).unwrap());

        let balls: Vec<String> = m.current_innings().balls().map(ball_line).collect();
        assert_eq!(balls, vec!["1.1 X → B1  +4", "1.2 X → B1  W NB +1"]);
    }

    #[test]
    fn test_first_innings_text() {
        let mut m = new_match();
        bowl(&mut m, BallInput::runs(4).unwrap());
        bowl(&mut m, BallInput::wicket());

        assert_eq!(share_text(&m), "Lions vs Tigers\nTigers: 4/1 (0.2)");
        assert_eq!(chase_line(&m), "Innings 1 in progress");

        m.end_innings();
        assert_eq!(chase_line(&m), "Innings 1 complete");
    }

    #[test]
    fn test_chase_and_result_text() {
        let mut m = new_match();
        bowl(&mut m, BallInput::runs(2).unwrap());
        m.end_innings();
        m.start_second_innings();
        bowl(&mut m, BallInput::runs(1).unwrap());

        assert_eq!(chase_line(&m), "Target: 3 • Need: 2 off 11 balls");

        bowl(&mut m, BallInput::runs(4).unwrap());
        m.compute_result();

        assert_eq!(chase_line(&m), "Target: 3\nLions won by 10 wicket(s)");
        assert_eq!(
            share_text(&m),
            "Lions vs Tigers\nTigers: 2/0 (0.1)\nLions: 5/0 (0.2)  Target: 3\nResult: Lions won by 10 wicket(s)"
        );
    }

    #[test]
    fn test_scorecard_lines() {
        let mut m = new_match();
        bowl(&mut m, BallInput::runs(6).unwrap());
        m.end_innings();
        m.start_second_innings();
        bowl(&mut m, BallInput::wide());

        let lines = scorecard_lines(&m);
        assert_eq!(lines[0], "Lions vs Tigers");
        assert!(lines[1].starts_with("Overs: 2 • "));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Tigers: 6/0 (0.1)");
        assert_eq!(lines[4], "Lions: 1/0 (0.0)");
        assert_eq!(lines[5], "Target 7 • Need 6 off 12 balls");
        assert_eq!(lines.len(), 6);
    }
}
