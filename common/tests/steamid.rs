use common::steamid::{community_to_steamid3, parse_participant, STEAMID64_BASE};
use pretty_assertions::assert_eq;

#[test]
fn community_ids() {
    assert_eq!(
        Some("[U:1:1002]".to_owned()),
        community_to_steamid3(76561197960266730)
    );
    assert_eq!(Some("[U:1:0]".to_owned()), community_to_steamid3(STEAMID64_BASE));
    assert_eq!(None, community_to_steamid3(1234));
}

#[test]
fn either_form() {
    assert_eq!(Some("[U:1:77]".to_owned()), parse_participant(" [U:1:77] "));
    assert_eq!(
        Some("[U:1:1002]".to_owned()),
        parse_participant("76561197960266730")
    );
    assert_eq!(None, parse_participant("[U:1:]"));
    assert_eq!(None, parse_participant("STEAM_0:1:1"));
}
