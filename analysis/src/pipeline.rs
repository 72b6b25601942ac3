use std::collections::HashSet;

use chrono_tz::Tz;
use common::tables::{PLAYER_COUNT, STAT_WIDTH};
use serde_json::Value;

use crate::calendar::{MatchDate, DEFAULT_TIMEZONE};
use crate::record::{self, LogRecord};
use crate::rejection::{malformed, Rejection};
use crate::roles::{self, Team};
use crate::roster::Roster;
use crate::stats;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// The only log schema revision that is understood.
    pub supported_version: i64,
    /// Highest round score a team can have under the modeled ruleset.
    pub max_score: u8,
    pub timezone: Tz,
    /// When set, every participant of a log must be in this set.
    pub allowed_participants: Option<HashSet<String>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            supported_version: 3,
            max_score: 5,
            timezone: DEFAULT_TIMEZONE,
            allowed_participants: None,
        }
    }
}

/// One accepted match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtractedRow {
    /// Red scout 1, scout 2, soldier 1, soldier 2, demoman, medic, then Blue
    /// in the same order.
    pub players: [String; PLAYER_COUNT],
    pub gamemode: String,
    pub map: String,
    pub date: MatchDate,
    pub red_score: u8,
    pub blue_score: u8,
    /// Match length followed by every player's stats in `players` order.
    pub stats: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Turns one raw log into a row, or says why it can't be used.
    ///
    /// The checks run in a fixed order and stop at the first failure. The
    /// document is only read, so extracting the same log twice gives the
    /// same result.
    pub fn extract(&self, document: &Value) -> Result<ExtractedRow, Rejection> {
        let record = record::validate(document, self.config.supported_version)?;

        let red_score = self.score(Team::Red, record.red_score)?;
        let blue_score = self.score(Team::Blue, record.blue_score)?;

        let gamemode = gamemode(record.map)?;

        if record.players.len() != PLAYER_COUNT {
            return Err(Rejection::ParticipantCountMismatch {
                found: record.players.len(),
                expected: PLAYER_COUNT,
            });
        }

        let roster = self.roster(&record)?;
        let lineup = roster.finish()?;

        if record.names.len() != PLAYER_COUNT {
            return Err(Rejection::NameCompletenessMismatch {
                names: record.names.len(),
                player: None,
            });
        }
        if let Some(unnamed) = lineup
            .iter()
            .find(|entry| !record.names.contains_key(&entry.player))
        {
            return Err(Rejection::NameCompletenessMismatch {
                names: record.names.len(),
                player: Some(unnamed.player.clone()),
            });
        }

        let date = MatchDate::from_timestamp(record.date, &self.config.timezone)
            .ok_or_else(|| malformed("info.date"))?;

        let mut stats = Vec::with_capacity(STAT_WIDTH);
        stats.push(record.total_length);
        for entry in lineup.iter() {
            entry.stats.append_to(&mut stats);
        }
        debug_assert_eq!(stats.len(), STAT_WIDTH);

        Ok(ExtractedRow {
            players: lineup.map(|entry| entry.player),
            gamemode: gamemode.to_owned(),
            map: record.map.to_owned(),
            date,
            red_score,
            blue_score,
            stats,
        })
    }

    fn score(&self, team: Team, score: i64) -> Result<u8, Rejection> {
        u8::try_from(score)
            .ok()
            .filter(|s| *s <= self.config.max_score)
            .ok_or(Rejection::ScoreOutOfRange {
                team,
                score,
                max: self.config.max_score,
            })
    }

    fn roster(&self, record: &LogRecord<'_>) -> Result<Roster, Rejection> {
        let mut roster = Roster::default();

        for (player_id, player) in record.players.iter() {
            if let Some(allowed) = self.config.allowed_participants.as_ref() {
                if !allowed.contains(player_id) {
                    return Err(Rejection::UnrecognizedParticipant {
                        player: player_id.clone(),
                    });
                }
            }

            let (team, role) = roles::classify(player_id, player)?;
            let stats = stats::extract(player_id, role, player)?;

            tracing::trace!(player = %player_id, %team, %role, "Classified participant");
            roster.insert(team, role, player_id.clone(), stats);
        }

        Ok(roster)
    }
}

/// Gamemode tag of a map name, the part before the first underscore
/// (`cp_process_final` is `cp`).
pub fn gamemode(map: &str) -> Result<&str, Rejection> {
    map.split_once('_')
        .map(|(mode, _)| mode)
        .ok_or_else(|| Rejection::UnparsableMap {
            map: map.to_owned(),
        })
}
