//! Loading the id lists a batch runs on.

use std::collections::HashSet;

/// Parses a list of log ids, one per line.
///
/// Blank lines, `#` comments and a non-numeric header line are skipped. Only
/// the first column of comma separated lines is used. Repeated ids are
/// dropped, keeping the first occurrence.
pub fn parse_log_ids(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    content
        .lines()
        .map(|line| line.split(',').next().unwrap_or_default().trim())
        .filter(|id| !id.is_empty() && !id.starts_with('#'))
        .filter(|id| id.chars().all(|c| c.is_ascii_digit()))
        .filter(|id| seen.insert(id.to_string()))
        .map(|id| id.to_owned())
        .collect()
}

/// Parses the allowed player list. Lines may hold a SteamID3 or a 64-bit
/// community id, anything else is skipped with a warning.
pub fn parse_participants(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let parsed = common::steamid::parse_participant(line);
            if parsed.is_none() {
                tracing::warn!("Skipping unrecognized player id {:?}", line);
            }
            parsed
        })
        .collect()
}
