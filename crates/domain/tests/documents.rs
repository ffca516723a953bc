//! End-to-end document handling: decode, resolve, order, re-encode, share.

use clocktower_domain::{
    Alignment, DocumentError, Edition, EntryKind, Night, Roster, Script, SpecialName, Team,
    SHARE_BASE_URL,
};

const ROSTER: &str = include_str!("fixtures/trouble_brewing.json");
const SCRIPT: &str = include_str!("fixtures/homebrew_script.json");

fn resolved_script() -> (Script, Vec<String>) {
    let roster = Roster::from_json(ROSTER).unwrap();
    let mut script = Script::from_json(SCRIPT).unwrap();
    let missing = script.populate_index(&roster);
    (script, missing)
}

mod roster {
    use super::*;

    #[test]
    fn decodes_fixture() {
        let roster = Roster::from_json(ROSTER).unwrap();

        assert_eq!(roster.name(), "Trouble Brewing");
        assert_eq!(roster.len(), 6);
        assert!(roster.contains("scapegoat"));

        let baron = roster.get("baron").unwrap();
        assert!(baron.alters_setup);
        assert_eq!(baron.setup_text(), Some("+2 Outsiders"));
        assert_eq!(baron.ability_text(), "There are extra Outsiders in play.");
        assert_eq!(baron.special[0].name, Some(SpecialName::BagDuplicate));

        let imp = roster.get("imp").unwrap();
        assert_eq!(imp.edition, Edition::Tb);
        assert_eq!(imp.team, Team::Demon);
        assert!(!imp.first_night.acts());
        let spy_jinx = imp.jinxes.get("spy").map(String::as_str);
        assert_eq!(spy_jinx, Some("If the Spy is in play, the Imp learns it."));
    }

    #[test]
    fn traveller_images_follow_requested_alignment() {
        let roster = Roster::from_json(ROSTER).unwrap();
        let scapegoat = roster.get("scapegoat").unwrap();

        assert_eq!(scapegoat.alignment(), Alignment::Either);
        assert!(scapegoat
            .image_url(Alignment::Good)
            .unwrap()
            .ends_with("scapegoat_g.webp"));
        assert!(scapegoat
            .image_url(Alignment::Evil)
            .unwrap()
            .ends_with("scapegoat_e.webp"));
        assert!(scapegoat
            .image_url(Alignment::Either)
            .unwrap()
            .ends_with("scapegoat.webp"));
    }

    #[test]
    fn canonical_encoding_is_a_fixed_point() {
        let roster = Roster::from_json(ROSTER).unwrap();
        let once = roster.to_json();
        let twice = Roster::from_json(&once).unwrap().to_json();
        assert_eq!(once, twice);
        assert_eq!(Roster::from_json(&once).unwrap(), roster);
    }
}

mod script {
    use super::*;

    #[test]
    fn decodes_fixture() {
        let script = Script::from_json(SCRIPT).unwrap();

        assert_eq!(script.name(), "Brewing Trouble");
        assert_eq!(script.author(), "A Storyteller");
        assert_eq!(script.meta().first_night.len(), 5);
        assert_eq!(
            script.original_character_ids(),
            &[
                "washerwoman",
                "fortuneteller",
                "baron",
                "poisoner",
                "imp",
                "lunatic",
            ]
        );

        let alchemist = &script.custom_characters()[0];
        assert_eq!(alchemist.id, "alchemist");
        assert_eq!(alchemist.edition, Edition::Carousel);
        assert_eq!(alchemist.special[0].time, None);
        let ability = alchemist.special[0].string_value();
        assert_eq!(ability, Some("You have this ability"));
    }

    #[test]
    fn unknown_reference_is_reported_not_fatal() {
        let (script, missing) = resolved_script();

        assert_eq!(missing, vec!["lunatic".to_string()]);
        assert!(script.get("lunatic").is_none());
        assert!(script.get("washerwoman").is_some());
        assert_eq!(script.index().len(), 6);
        assert_eq!(script.characters().len(), 6);
    }

    #[test]
    fn first_night_order() {
        let (script, _) = resolved_script();
        let ids: Vec<&str> = script.first_night().iter().map(|e| e.id).collect();

        assert_eq!(
            ids,
            vec![
                "dusk",
                "alchemist",
                "poisoner",
                "minioninfo",
                "demoninfo",
                "washerwoman",
                "fortuneteller",
                "dawn"
            ]
        );
    }

    #[test]
    fn other_night_order() {
        let (script, _) = resolved_script();
        let entries = script.night_order(Night::Other);
        let ids: Vec<&str> = entries.iter().map(|e| e.id).collect();

        let expected = vec!["dusk", "poisoner", "imp", "fortuneteller", "dawn"];
        assert_eq!(ids, expected);
        assert_eq!(
            entries.iter().filter(|e| e.kind == EntryKind::Event).count(),
            2
        );
    }

    #[test]
    fn canonical_encoding_is_a_fixed_point() {
        let script = Script::from_json(SCRIPT).unwrap();
        let once = script.to_json();
        let decoded = Script::from_json(&once).unwrap();
        assert_eq!(decoded, script);
        assert_eq!(decoded.to_json(), once);
    }

    #[test]
    fn share_link_carries_the_canonical_form() {
        let script = Script::from_json(SCRIPT).unwrap();
        let link = script.share_url().unwrap();

        assert!(link.starts_with(SHARE_BASE_URL));
        let decoded = clocktower_domain::decode_share_url(&link).unwrap();
        assert_eq!(decoded, script.to_json());
        assert_eq!(Script::from_share_url(&link).unwrap(), script);
    }

    #[test]
    fn invalid_custom_character_names_the_field() {
        let broken = SCRIPT.replace("\"carousel\"", "\"kickstarter\"");
        let err = Script::from_json(&broken).unwrap_err();
        match err {
            DocumentError::InvalidEnumValue { key, value, permitted } => {
                assert_eq!(key, "edition");
                assert_eq!(value, "kickstarter");
                assert_eq!(permitted.len(), 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
