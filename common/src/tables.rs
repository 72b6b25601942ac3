use std::collections::BTreeMap;

/// Number of participants in every accepted match.
pub const PLAYER_COUNT: usize = 12;

/// Width of a stat row: match length followed by every participant's fields.
pub const STAT_WIDTH: usize = 67;

pub static PLAYER_COLUMNS: [&str; PLAYER_COUNT] = [
    "Red Scout 1",
    "Red Scout 2",
    "Red Soldier 1",
    "Red Soldier 2",
    "Red Demo",
    "Red Medic",
    "Blu Scout 1",
    "Blu Scout 2",
    "Blu Soldier 1",
    "Blu Soldier 2",
    "Blu Demo",
    "Blu Medic",
];

pub static DATE_COLUMNS: [&str; 3] = ["Year", "Month", "Day"];
pub const GAMEMODE_COLUMN: &str = "Gamemode";
pub const MAP_COLUMN: &str = "Map";
pub const WEEKDAY_COLUMN: &str = "Weekday";
pub static SCORE_COLUMNS: [&str; 2] = ["Red Score", "Blu Score"];

static COMBAT_FIELDS: [&str; 5] = ["Kills", "Assists", "Deaths", "Damage", "Damage Taken"];
static MEDIC_FIELDS: [&str; 3] = ["Heals", "Ubers", "Drops"];

/// Header row of the stats table, in the same order the extractor writes values.
pub fn stat_columns() -> Vec<String> {
    let mut columns = Vec::with_capacity(STAT_WIDTH);
    columns.push("Match Length".to_owned());

    for player in PLAYER_COLUMNS.iter() {
        let medic = player.ends_with("Medic");
        let extra: &[&str] = if medic { &MEDIC_FIELDS } else { &[] };

        columns.extend(
            COMBAT_FIELDS
                .iter()
                .chain(extra.iter())
                .map(|field| format!("{} {}", player, field)),
        );
    }

    columns
}

/// Parallel tables of every accepted match, one row per match and in the
/// order the matches were submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchTables {
    pub log_ids: Vec<String>,
    pub players: Vec<[String; PLAYER_COUNT]>,
    pub gamemodes: Vec<String>,
    pub maps: Vec<String>,
    pub dates: Vec<[i32; 3]>,
    pub weekdays: Vec<String>,
    pub scores: Vec<[u8; 2]>,
    pub stats: Vec<Vec<i64>>,
}

impl MatchTables {
    pub fn len(&self) -> usize {
        self.log_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log_ids.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchSummary {
    pub attempted: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Rejection counts keyed by reason label.
    pub reasons: BTreeMap<String, usize>,
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Used {} of {} logs ({} rejected)",
            self.accepted, self.attempted, self.rejected
        )?;

        for (reason, count) in self.reasons.iter() {
            write!(f, "\n  {}: {}", reason, count)?;
        }

        Ok(())
    }
}
