use analysis::roles::{Role, Team};
use analysis::roster::Roster;
use analysis::stats::{CombatStats, PlayerStats, SupportStats};
use analysis::Rejection;
use pretty_assertions::assert_eq;

fn combat(kills: i64) -> PlayerStats {
    PlayerStats::Combat(CombatStats {
        kills,
        ..Default::default()
    })
}

fn medic(kills: i64) -> PlayerStats {
    PlayerStats::Support {
        combat: CombatStats {
            kills,
            ..Default::default()
        },
        support: SupportStats::default(),
    }
}

fn full_team(roster: &mut Roster, team: Team, offset: i64) {
    roster.insert(team, Role::Medic, format!("{}-medic", team), medic(offset + 6));
    roster.insert(team, Role::Soldier, format!("{}-soldier-a", team), combat(offset + 3));
    roster.insert(team, Role::Scout, format!("{}-scout-a", team), combat(offset + 1));
    roster.insert(team, Role::Demoman, format!("{}-demo", team), combat(offset + 5));
    roster.insert(team, Role::Soldier, format!("{}-soldier-b", team), combat(offset + 4));
    roster.insert(team, Role::Scout, format!("{}-scout-b", team), combat(offset + 2));
}

#[test]
fn fixed_layout() {
    let mut roster = Roster::default();
    full_team(&mut roster, Team::Blue, 6);
    full_team(&mut roster, Team::Red, 0);

    let lineup = roster.finish().unwrap();

    let players: Vec<_> = lineup.iter().map(|e| e.player.as_str()).collect();
    assert_eq!(
        vec![
            "Red-scout-a",
            "Red-scout-b",
            "Red-soldier-a",
            "Red-soldier-b",
            "Red-demo",
            "Red-medic",
            "Blue-scout-a",
            "Blue-scout-b",
            "Blue-soldier-a",
            "Blue-soldier-b",
            "Blue-demo",
            "Blue-medic",
        ],
        players
    );

    let kills: Vec<_> = lineup.iter().map(|e| e.stats.combat().kills).collect();
    assert_eq!((1..=12).collect::<Vec<i64>>(), kills);
}

#[test]
fn missing_medic() {
    let mut roster = Roster::default();
    full_team(&mut roster, Team::Red, 0);
    roster.insert(Team::Blue, Role::Scout, "b1".to_owned(), combat(0));
    roster.insert(Team::Blue, Role::Scout, "b2".to_owned(), combat(0));
    roster.insert(Team::Blue, Role::Soldier, "b3".to_owned(), combat(0));
    roster.insert(Team::Blue, Role::Soldier, "b4".to_owned(), combat(0));
    roster.insert(Team::Blue, Role::Demoman, "b5".to_owned(), combat(0));
    roster.insert(Team::Blue, Role::Demoman, "b6".to_owned(), combat(0));

    assert_eq!(2, roster.count(Team::Blue, Role::Demoman));
    assert_eq!(
        Err(Rejection::BucketCardinalityMismatch {
            team: Team::Blue,
            role: Role::Demoman,
            expected: 1,
            found: 2
        }),
        roster.finish().map(|_| ())
    );
}
