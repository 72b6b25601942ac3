use serde_json::Value;

use crate::rejection::{malformed, Rejection};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Team {
    Red,
    Blue,
}

/// The four classes of the standard 6v6 composition.
///
/// Declaration order is the order players are laid out in within a team.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Role {
    Scout,
    Soldier,
    Demoman,
    Medic,
}

pub static TEAMS: phf::Map<&'static str, Team> = phf::phf_map! {
    "Red" => Team::Red,
    "Blue" => Team::Blue,
};

pub static ROLES: phf::Map<&'static str, Role> = phf::phf_map! {
    "scout" => Role::Scout,
    "soldier" => Role::Soldier,
    "demoman" => Role::Demoman,
    "medic" => Role::Medic,
};

impl Team {
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Scout, Role::Soldier, Role::Demoman, Role::Medic];

    /// How many players of this class a team fields.
    pub fn slots(&self) -> usize {
        match self {
            Self::Scout | Self::Soldier => 2,
            Self::Demoman | Self::Medic => 1,
        }
    }

    /// Whether this class also reports healing, ubercharges and drops.
    pub fn is_support(&self) -> bool {
        matches!(self, Self::Medic)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Scout => "scout",
            Self::Soldier => "soldier",
            Self::Demoman => "demoman",
            Self::Medic => "medic",
        })
    }
}

/// Reads the team and primary class of a participant.
///
/// Only the first `class_stats` entry counts, players who switched classes
/// mid match are judged by what they started on. An unknown team or class
/// is reported as is, the caller drops the whole log for it.
pub fn classify(player_id: &str, player: &Value) -> Result<(Team, Role), Rejection> {
    let missing = |field: &'static str| Rejection::MissingStatField {
        player: player_id.to_owned(),
        field,
    };

    let player = player
        .as_object()
        .ok_or_else(|| malformed(format!("players.{}", player_id)))?;

    let team = player.get("team").ok_or_else(|| missing("team"))?;

    let primary = match player.get("class_stats") {
        Some(Value::Array(entries)) => entries.first().ok_or_else(|| missing("class_stats"))?,
        Some(_) => return Err(malformed(format!("players.{}.class_stats", player_id))),
        None => return Err(missing("class_stats")),
    };
    let class = primary
        .as_object()
        .ok_or_else(|| malformed(format!("players.{}.class_stats[0]", player_id)))?
        .get("type")
        .ok_or_else(|| missing("class_stats[0].type"))?;

    let team = team
        .as_str()
        .ok_or_else(|| malformed(format!("players.{}.team", player_id)))?;
    let class = class
        .as_str()
        .ok_or_else(|| malformed(format!("players.{}.class_stats[0].type", player_id)))?;

    let team = TEAMS
        .get(team)
        .copied()
        .ok_or_else(|| Rejection::UnrecognizedTeam {
            player: player_id.to_owned(),
            team: team.to_owned(),
        })?;
    let role = ROLES
        .get(class)
        .copied()
        .ok_or_else(|| Rejection::UnrecognizedRole {
            player: player_id.to_owned(),
            class: class.to_owned(),
        })?;

    Ok((team, role))
}
