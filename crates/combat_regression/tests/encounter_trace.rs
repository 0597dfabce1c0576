use combat_regression::{recruit, scripted_session};
use combat_session::{EncounterOutcome, Opponent};

// Attack, swap to the rifle, attack, heal with the stim, attack.
const SCRIPT: &str = "1\n4\n2\n1\n2\n1\n1\n";

#[test]
fn drone_encounter_trace() {
    let mut drone = Opponent::new("Drone", 40, 14, 30);
    let mut session = scripted_session(recruit(), SCRIPT);
    let record = session.run_encounter(&mut drone).unwrap();

    assert_eq!(EncounterOutcome::Victory { bounty: 30 }, record.outcome);
    assert_eq!(5, record.rounds);
    assert_eq!(67, session.combatant().hp());
    assert_eq!(230, session.combatant().money());
    assert!(session.display().contains("Drone has 5 HP left"));

    let journal = session.journal();
    insta::assert_json_snapshot!("drone_encounter", journal);
}
