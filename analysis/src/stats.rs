use serde_json::Value;

use crate::rejection::{malformed, Rejection};
use crate::roles::Role;

/// Fields every class reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CombatStats {
    pub kills: i64,
    pub assists: i64,
    pub deaths: i64,
    pub damage: i64,
    pub damage_taken: i64,
}

/// Medic only fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SupportStats {
    pub heals: i64,
    pub ubers: i64,
    pub drops: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlayerStats {
    Combat(CombatStats),
    Support {
        combat: CombatStats,
        support: SupportStats,
    },
}

impl PlayerStats {
    pub fn combat(&self) -> &CombatStats {
        match self {
            Self::Combat(c) => c,
            Self::Support { combat, .. } => combat,
        }
    }

    /// Appends the fields in table order: kills, assists, deaths, damage,
    /// damage taken and, for medics, heals, ubers and drops.
    pub fn append_to(&self, out: &mut Vec<i64>) {
        let combat = self.combat();
        out.extend([
            combat.kills,
            combat.assists,
            combat.deaths,
            combat.damage,
            combat.damage_taken,
        ]);

        if let Self::Support { support, .. } = self {
            out.extend([support.heals, support.ubers, support.drops]);
        }
    }
}

/// Pulls the per-player numbers for a participant already classified as
/// `role`. Missing fields are never filled in with zeros.
pub fn extract(player_id: &str, role: Role, player: &Value) -> Result<PlayerStats, Rejection> {
    let number = |field: &'static str| -> Result<i64, Rejection> {
        let value = player.get(field).ok_or_else(|| Rejection::MissingStatField {
            player: player_id.to_owned(),
            field,
        })?;

        value
            .as_i64()
            .ok_or_else(|| malformed(format!("players.{}.{}", player_id, field)))
    };

    let combat = CombatStats {
        kills: number("kills")?,
        assists: number("assists")?,
        deaths: number("deaths")?,
        damage: number("dmg")?,
        damage_taken: number("dt")?,
    };

    if !role.is_support() {
        return Ok(PlayerStats::Combat(combat));
    }

    Ok(PlayerStats::Support {
        combat,
        support: SupportStats {
            heals: number("heal")?,
            ubers: number("ubers")?,
            drops: number("drops")?,
        },
    })
}
