//! Conversions between the two textual forms a participant id shows up in.
//!
//! Match logs key their participants by SteamID3 (`[U:1:<account>]`), while
//! profile links and most player lists use the 64-bit community id.

/// Community id of account number zero.
pub const STEAMID64_BASE: u64 = 76561197960265728;

/// Converts a 64-bit community id into the `[U:1:<account>]` form.
///
/// Returns `None` for ids below [`STEAMID64_BASE`], which do not belong to an
/// individual account.
pub fn community_to_steamid3(community_id: u64) -> Option<String> {
    let account = community_id.checked_sub(STEAMID64_BASE)?;
    Some(format!("[U:1:{}]", account))
}

/// Accepts either a SteamID3 or a community id and returns the SteamID3 form.
pub fn parse_participant(raw: &str) -> Option<String> {
    let raw = raw.trim();

    if let Some(account) = raw.strip_prefix("[U:1:").and_then(|r| r.strip_suffix(']')) {
        return account.parse::<u64>().ok().map(|_| raw.to_owned());
    }

    raw.parse::<u64>().ok().and_then(community_to_steamid3)
}
