use crate::Scenario;

use std::str::FromStr;

#[test]
fn test_scenario_as_str_round_trips_through_from_str() {
    for scenario in Scenario::ALL {
        assert_eq!(Scenario::from_str(scenario.as_str()).unwrap(), scenario);
    }
}

#[test]
fn test_scenario_list_has_nine_entries() {
    assert_eq!(Scenario::ALL.len(), 9);
}

#[test]
fn test_scenario_from_str_rejects_unknown_label() {
    assert!(Scenario::from_str("Select a scenario...").is_err());
    assert!(Scenario::from_str("fire").is_err());
}

#[test]
fn test_scenario_serde_uses_display_label() {
    let json = serde_json::to_string(&Scenario::BurstPipe).unwrap();
    assert_eq!(json, "\"Burst Pipe / Interior Water Leak\"");

    let parsed: Scenario = serde_json::from_str("\"Fire\"").unwrap();
    assert_eq!(parsed, Scenario::Fire);
}
