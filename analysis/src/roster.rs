use common::tables::PLAYER_COUNT;

use crate::rejection::Rejection;
use crate::roles::{Role, Team};
use crate::stats::PlayerStats;

const BUCKETS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub team: Team,
    pub role: Role,
    pub player: String,
    pub stats: PlayerStats,
}

/// Participants sorted into their team/class buckets, in the order they were
/// inserted within each bucket.
#[derive(Debug, Default)]
pub struct Roster {
    buckets: [Vec<RosterEntry>; BUCKETS],
}

fn bucket_index(team: Team, role: Role) -> usize {
    let team = match team {
        Team::Red => 0,
        Team::Blue => 1,
    };
    let role = match role {
        Role::Scout => 0,
        Role::Soldier => 1,
        Role::Demoman => 2,
        Role::Medic => 3,
    };

    team * Role::ALL.len() + role
}

impl Roster {
    pub fn insert(&mut self, team: Team, role: Role, player: String, stats: PlayerStats) {
        self.buckets[bucket_index(team, role)].push(RosterEntry {
            team,
            role,
            player,
            stats,
        });
    }

    pub fn count(&self, team: Team, role: Role) -> usize {
        self.buckets[bucket_index(team, role)].len()
    }

    /// Checks every bucket holds exactly its class's slot count and lays the
    /// players out as Red scouts, soldiers, demoman, medic and then Blue in
    /// the same order.
    pub fn finish(self) -> Result<[RosterEntry; PLAYER_COUNT], Rejection> {
        for team in Team::ALL {
            for role in Role::ALL {
                let found = self.count(team, role);
                if found != role.slots() {
                    return Err(Rejection::BucketCardinalityMismatch {
                        team,
                        role,
                        expected: role.slots(),
                        found,
                    });
                }
            }
        }

        let entries: Vec<RosterEntry> = self.buckets.into_iter().flatten().collect();
        entries
            .try_into()
            .map_err(|entries: Vec<RosterEntry>| Rejection::ParticipantCountMismatch {
                found: entries.len(),
                expected: PLAYER_COUNT,
            })
    }
}
