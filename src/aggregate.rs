use std::collections::HashMap;
use crate::models::{LeagueSummary, Player, SquadStats, TeamAggregate, TeamGoalsRow};

/// Group player rows into one aggregate per team.
///
/// Teams come out in the order their first player was seen. A row without a
/// goal count still counts as a player and adds nothing to the goal total.
pub fn aggregate_teams<I>(rows: I) -> Vec<TeamAggregate>
where
    I: IntoIterator<Item = TeamGoalsRow>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut teams: Vec<TeamAggregate> = Vec::new();

    for row in rows {
        let slot = match index.get(&row.team) {
            Some(&slot) => slot,
            None => {
                index.insert(row.team.clone(), teams.len());
                teams.push(TeamAggregate {
                    name: row.team,
                    player_count: 0,
                    total_goals: 0,
                });
                teams.len() - 1
            }
        };

        let team = &mut teams[slot];
        team.player_count += 1;
        team.total_goals = team.total_goals.saturating_add(row.goals.unwrap_or(0));
    }

    teams
}

pub fn league_summary(teams: &[TeamAggregate]) -> LeagueSummary {
    LeagueSummary {
        team_count: teams.len(),
        total_players: teams.iter().map(|t| t.player_count).sum(),
        total_goals: saturating_total(teams.iter().map(|t| t.total_goals)),
    }
}

pub fn squad_stats(players: &[Player]) -> SquadStats {
    let total_players = players.len();
    let total_goals = saturating_total(players.iter().map(|p| p.goals));

    let average_goals = if total_players > 0 {
        (total_goals as f64 / total_players as f64 * 10.0).round() / 10.0
    } else {
        0.0
    };

    SquadStats {
        total_players,
        total_goals,
        average_goals,
    }
}

// Stored goal counts are unbounded, so totals pin at i64::MAX instead of wrapping.
fn saturating_total<I: Iterator<Item = i64>>(goals: I) -> i64 {
    goals.fold(0i64, |acc, g| acc.saturating_add(g))
}

/// Goals scaled to a 0-100 bar: ten points per goal.
pub fn performance_score(goals: i64) -> u8 {
    goals.saturating_mul(10).clamp(0, 100) as u8
}
