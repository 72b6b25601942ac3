//! Structural validation of a raw log document.
//!
//! Nothing here interprets the contents beyond their JSON types: scores are
//! not range checked and participants are not looked at. That is left to the
//! [`crate::pipeline`].

use serde_json::{Map, Value};

use crate::rejection::{malformed, Rejection};

/// Typed view of a log document that passed [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord<'a> {
    pub version: i64,
    pub red_score: i64,
    pub blue_score: i64,
    pub players: &'a Map<String, Value>,
    pub names: &'a Map<String, Value>,
    /// Match length in seconds.
    pub total_length: i64,
    pub map: &'a str,
    /// Unix timestamp of the match.
    pub date: i64,
}

/// Checks that every field the extraction needs is present, that the log has
/// the `supported_version`, and that the present fields have usable types.
///
/// Presence is checked first and in document order, so a log that lacks
/// several fields always reports the same one.
pub fn validate(document: &Value, supported_version: i64) -> Result<LogRecord<'_>, Rejection> {
    let version = field(document, "", "version")?;

    let teams = field(document, "", "teams")?;
    let red = field(teams, "teams", "Red")?;
    let blue = field(teams, "teams", "Blue")?;
    let red_score = field(red, "teams.Red", "score")?;
    let blue_score = field(blue, "teams.Blue", "score")?;

    let players = field(document, "", "players")?;
    let names = field(document, "", "names")?;

    let info = field(document, "", "info")?;
    let total_length = field(info, "info", "total_length")?;
    let map = field(info, "info", "map")?;
    let date = field(info, "info", "date")?;

    let version = match version.as_i64() {
        Some(v) if v == supported_version => v,
        _ => {
            return Err(Rejection::UnsupportedVersion {
                found: version.to_string(),
                expected: supported_version,
            })
        }
    };

    Ok(LogRecord {
        version,
        red_score: integer(red_score, "teams.Red.score")?,
        blue_score: integer(blue_score, "teams.Blue.score")?,
        players: players.as_object().ok_or_else(|| malformed("players"))?,
        names: names.as_object().ok_or_else(|| malformed("names"))?,
        total_length: integer(total_length, "info.total_length")?,
        map: map.as_str().ok_or_else(|| malformed("info.map"))?,
        date: integer(date, "info.date")?,
    })
}

fn field<'a>(parent: &'a Value, parent_path: &str, key: &str) -> Result<&'a Value, Rejection> {
    let object = parent.as_object().ok_or_else(|| {
        malformed(if parent_path.is_empty() {
            "document"
        } else {
            parent_path
        })
    })?;

    object.get(key).ok_or_else(|| Rejection::SchemaMissingField {
        path: if parent_path.is_empty() {
            key.to_owned()
        } else {
            format!("{}.{}", parent_path, key)
        },
    })
}

fn integer(value: &Value, path: &str) -> Result<i64, Rejection> {
    value.as_i64().ok_or_else(|| malformed(path))
}
