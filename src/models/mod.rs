use serde::{Deserialize, Serialize};

/// Player row from the players table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub goals: i64,
    pub created_at: String,
}

/// The only column pair the teams listing needs
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamGoalsRow {
    pub team: String,
    pub goals: Option<i64>,
}

/// Playing positions known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
        }
    }

    /// Label to show for a stored position. Blank or missing shows as a
    /// forward; any other label is shown as written.
    pub fn display_label(label: Option<&str>) -> String {
        match label.map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => Position::Forward.as_str().to_string(),
        }
    }
}

/// Per-team summary derived from player rows, never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAggregate {
    pub name: String,
    pub player_count: i64,
    pub total_goals: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSummary {
    pub team_count: usize,
    pub total_players: i64,
    pub total_goals: i64,
}

/// Response wrapper for the teams endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsResponse {
    pub teams: Vec<TeamAggregate>,
    pub summary: LeagueSummary,
}

/// Player as shown on a team's squad page
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub id: i64,
    pub rank: usize,
    pub name: String,
    pub position: String,
    pub team: Option<String>,
    pub goals: i64,
    pub performance: u8,
    pub joined: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadStats {
    pub total_players: usize,
    pub total_goals: i64,
    pub average_goals: f64,
}

/// Response wrapper for the squad endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadResponse {
    pub team: String,
    pub players: Vec<PlayerCard>,
    pub stats: SquadStats,
}

/// Contact form body as posted by the site; price arrives as typed text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub price: String,
}

/// Validated submission ready for insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubmission {
    pub name: String,
    pub company: String,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionCreated {
    pub id: i64,
}
