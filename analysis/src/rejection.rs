use crate::roles::{Role, Team};

/// Why a single log was dropped. None of these abort a batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("missing field `{path}`")]
    SchemaMissingField { path: String },
    #[error("field `{path}` has an unexpected type")]
    MalformedField { path: String },
    #[error("log version is {found}, expected {expected}")]
    UnsupportedVersion { found: String, expected: i64 },
    #[error("{team} score {score} outside of 0..={max}")]
    ScoreOutOfRange { team: Team, score: i64, max: u8 },
    #[error("no gamemode prefix in map name {map:?}")]
    UnparsableMap { map: String },
    #[error("{found} participants instead of {expected}")]
    ParticipantCountMismatch { found: usize, expected: usize },
    #[error("participant {player} is not in the allowed population")]
    UnrecognizedParticipant { player: String },
    #[error("unknown team {team:?} for participant {player}")]
    UnrecognizedTeam { player: String, team: String },
    #[error("primary class {class:?} of participant {player} is not a sixes class")]
    UnrecognizedRole { player: String, class: String },
    #[error("participant {player} is missing `{field}`")]
    MissingStatField { player: String, field: &'static str },
    #[error("{found} {role} on {team} instead of {expected}")]
    BucketCardinalityMismatch {
        team: Team,
        role: Role,
        expected: usize,
        found: usize,
    },
    #[error("incomplete name mapping ({names} names){}", unnamed_suffix(.player))]
    NameCompletenessMismatch { names: usize, player: Option<String> },
    #[error("fetching log failed: {reason}")]
    FetchFailed { reason: String },
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    SchemaMissingField,
    MalformedField,
    UnsupportedVersion,
    ScoreOutOfRange,
    UnparsableMap,
    ParticipantCountMismatch,
    UnrecognizedParticipant,
    UnrecognizedTeam,
    UnrecognizedRole,
    MissingStatField,
    BucketCardinalityMismatch,
    NameCompletenessMismatch,
    FetchFailed,
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::SchemaMissingField { .. } => RejectionKind::SchemaMissingField,
            Self::MalformedField { .. } => RejectionKind::MalformedField,
            Self::UnsupportedVersion { .. } => RejectionKind::UnsupportedVersion,
            Self::ScoreOutOfRange { .. } => RejectionKind::ScoreOutOfRange,
            Self::UnparsableMap { .. } => RejectionKind::UnparsableMap,
            Self::ParticipantCountMismatch { .. } => RejectionKind::ParticipantCountMismatch,
            Self::UnrecognizedParticipant { .. } => RejectionKind::UnrecognizedParticipant,
            Self::UnrecognizedTeam { .. } => RejectionKind::UnrecognizedTeam,
            Self::UnrecognizedRole { .. } => RejectionKind::UnrecognizedRole,
            Self::MissingStatField { .. } => RejectionKind::MissingStatField,
            Self::BucketCardinalityMismatch { .. } => RejectionKind::BucketCardinalityMismatch,
            Self::NameCompletenessMismatch { .. } => RejectionKind::NameCompletenessMismatch,
            Self::FetchFailed { .. } => RejectionKind::FetchFailed,
        }
    }
}

impl RejectionKind {
    /// Stable label used as the tally key in batch summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SchemaMissingField => "schema_missing_field",
            Self::MalformedField => "malformed_field",
            Self::UnsupportedVersion => "unsupported_version",
            Self::ScoreOutOfRange => "score_out_of_range",
            Self::UnparsableMap => "unparsable_map",
            Self::ParticipantCountMismatch => "participant_count_mismatch",
            Self::UnrecognizedParticipant => "unrecognized_participant",
            Self::UnrecognizedTeam => "unrecognized_team",
            Self::UnrecognizedRole => "unrecognized_role",
            Self::MissingStatField => "missing_stat_field",
            Self::BucketCardinalityMismatch => "bucket_cardinality_mismatch",
            Self::NameCompletenessMismatch => "name_completeness_mismatch",
            Self::FetchFailed => "fetch_failed",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn unnamed_suffix(player: &Option<String>) -> String {
    match player {
        Some(player) => format!(", no name for {}", player),
        None => String::new(),
    }
}

pub(crate) fn malformed(path: impl Into<String>) -> Rejection {
    Rejection::MalformedField { path: path.into() }
}
