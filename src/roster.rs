use anyhow::{Result, bail};

use crate::scoring::{MatchSetup, TeamKey};

/// Splits free text into player names, one per line or comma-separated.
pub fn parse_players(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Squad-size policy applied before a match is created: the side batting
/// first needs two openers, the fielding side at least one bowler.
pub fn check_roster_minimums(setup: &MatchSetup) -> Result<()> {
    let (batting, bowling) = match setup.bat_first {
        TeamKey::A => (&setup.team_a, &setup.team_b),
        TeamKey::B => (&setup.team_b, &setup.team_a),
    };

    if batting.players.len() < 2 {
        bail!("{}: add at least 2 players", batting.name);
    }
    if bowling.players.is_empty() {
        bail!("{}: add at least 1 player", bowling.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Team;

    #[test]
    fn test_parse_players_lines_and_commas() {
        let players = parse_players("Rohit\n  Virat , Gill\n\n,  ");
        assert_eq!(players, vec!["Rohit", "Virat", "Gill"]);
    }

    #[test]
    fn test_parse_players_empty() {
        assert!(parse_players("   ").is_empty());
    }

    #[test]
    fn test_roster_minimums() {
        let mut setup = MatchSetup {
            team_a: Team::new("Lions", vec!["A1".into()]),
            team_b: Team::new("Tigers", vec!["B1".into(), "B2".into()]),
            overs_limit: 5,
            bat_first: TeamKey::A,
        };
        let err = check_roster_minimums(&setup).unwrap_err();
        assert_eq!(err.to_string(), "Lions: add at least 2 players");

        setup.bat_first = TeamKey::B;
        assert!(check_roster_minimums(&setup).is_ok());

        setup.team_a.players.clear();
        let err = check_roster_minimums(&setup).unwrap_err();
        assert_eq!(err.to_string(), "Lions: add at least 1 player");
    }
}
