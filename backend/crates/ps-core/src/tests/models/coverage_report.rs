use crate::CoverageReport;

fn report_with_gaps(gaps: &[&str]) -> CoverageReport {
    CoverageReport {
        covered_items: vec![],
        not_covered_items: vec![],
        deductible: Some(1000.0),
        total_out_of_pocket: Some(1500.0),
        gap_alerts: gaps.iter().map(|g| g.to_string()).collect(),
        recommendations: vec![],
        plain_summary: "summary".to_string(),
    }
}

#[test]
fn test_health_score_deducts_twenty_per_gap() {
    assert_eq!(report_with_gaps(&[]).health_score(), 100);
    assert_eq!(report_with_gaps(&["flood"]).health_score(), 80);
    assert_eq!(report_with_gaps(&["a", "b", "c"]).health_score(), 40);
}

#[test]
fn test_health_score_floors_at_zero() {
    let gaps = ["a", "b", "c", "d", "e", "f", "g"];
    assert_eq!(report_with_gaps(&gaps).health_score(), 0);
}

#[test]
fn test_report_parses_full_contract() {
    let json = r#"{
        "covered_items": [
            {"item": "Drywall", "est_replacement_cost": 2000, "depreciation_pct": 10, "acv_payout": 1800}
        ],
        "not_covered_items": ["Mold remediation"],
        "deductible": 1000,
        "total_out_of_pocket": 1500,
        "gap_alerts": ["Flood not covered"],
        "recommendations": ["Add a flood rider"],
        "plain_summary": "Mostly covered."
    }"#;

    let report: CoverageReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.covered_items.len(), 1);
    assert_eq!(report.covered_items[0].acv_payout, 1800.0);
    assert_eq!(report.deductible, Some(1000.0));
    assert_eq!(report.total_out_of_pocket, Some(1500.0));
    assert_eq!(report.health_score(), 80);
}

#[test]
fn test_report_tolerates_unknown_deductible() {
    let json = r#"{
        "covered_items": [],
        "not_covered_items": [],
        "deductible": "unknown",
        "total_out_of_pocket": null,
        "gap_alerts": [],
        "recommendations": [],
        "plain_summary": ""
    }"#;

    let report: CoverageReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.deductible, None);
    assert_eq!(report.total_out_of_pocket, None);
}

#[test]
fn test_report_rejects_missing_required_keys() {
    // No gap_alerts array: a malformed payload, not an empty report.
    let json = r#"{
        "covered_items": [],
        "not_covered_items": [],
        "deductible": 500,
        "total_out_of_pocket": 0,
        "recommendations": [],
        "plain_summary": ""
    }"#;

    assert!(serde_json::from_str::<CoverageReport>(json).is_err());
}
