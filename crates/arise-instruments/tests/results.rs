use std::collections::BTreeMap;

use arise_core::Locale;
use arise_core::models::assessment::{AssessmentKind, AssessmentResult, Scores};
use arise_instruments::scoring::Band;
use arise_instruments::summary::{ResultSummary, feedback360_results, summarize, wellness_summary};
use arise_instruments::tables;
use uuid::Uuid;

fn pillars(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn wellness_splits_strengths_and_growth() {
    let scores = pillars(&[("sleep", 22.0), ("nutrition", 10.0)]);

    let en = wellness_summary(&scores, Locale::En);
    assert_eq!(en.strengths.len(), 1);
    assert_eq!(en.growth_areas.len(), 1);

    let sleep = &en.strengths[0];
    assert_eq!(sleep.key, "sleep");
    assert_eq!(sleep.band, Some(Band::Strong));
    let expected = tables::wellness::table().get("sleep", 22.0).unwrap();
    assert_eq!(sleep.analysis, expected.analysis);

    let nutrition = &en.growth_areas[0];
    assert_eq!(nutrition.key, "nutrition");
    assert_eq!(nutrition.band, Some(Band::Critical));
    assert_eq!(nutrition.color_code, "#FFC7CE");

    let fr = wellness_summary(&scores, Locale::Fr);
    let expected = tables::wellness::table().get("nutrition", 10.0).unwrap();
    assert_eq!(Some(fr.growth_areas[0].analysis.as_str()), expected.analysis_fr.as_deref());
    assert_eq!(fr.strengths[0].name, "Sommeil");
}

#[test]
fn wellness_threshold_is_sixteen() {
    let scores = pillar_edge();
    let summary = wellness_summary(&scores, Locale::En);
    let strengths: Vec<&str> = summary.strengths.iter().map(|r| r.key.as_str()).collect();
    let growth: Vec<&str> = summary.growth_areas.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(strengths, vec!["social_connection", "movement"]);
    assert_eq!(growth, vec!["stress_management", "sleep"]);
}

fn pillar_edge() -> BTreeMap<String, f64> {
    pillars(&[
        ("movement", 16.0),
        ("sleep", 15.0),
        ("Social Connection", 25.0),
        ("stress", 5.0),
    ])
}

#[test]
fn capability_cards_follow_catalog_order() {
    let scores = pillars(&[
        ("change_management", 4.5),
        ("communication", 2.0),
        ("empathy", 3.0),
        ("team_culture", 3.2),
    ]);
    let cards = feedback360_results(&scores, Locale::En);
    let keys: Vec<&str> = cards.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["communication", "team_culture", "change_management", "empathy"]);

    assert_eq!(cards[0].color_code, "#FFC7CE");
    assert_eq!(cards[1].band, Some(Band::Developing));
    assert_eq!(cards[2].progress, 0.9);
    assert_eq!(cards[3].analysis, "Your empathy score is 3 out of 5");
}

#[test]
fn summarize_dispatches_on_kind() {
    let result = AssessmentResult {
        assessment_id: Uuid::nil(),
        kind: AssessmentKind::Wellness,
        scores: Scores {
            pillar_scores: Some(pillars(&[("sleep", 20.0)])),
            ..Scores::default()
        },
        insights: serde_json::Value::Null,
        recommendations: vec![],
    };
    match summarize(&result, Locale::En).unwrap() {
        ResultSummary::Wellness(w) => assert_eq!(w.strengths[0].key, "sleep"),
        other => panic!("unexpected summary {other:?}"),
    }

    let empty = AssessmentResult {
        kind: AssessmentKind::Feedback360,
        scores: Scores::default(),
        ..result
    };
    assert!(summarize(&empty, Locale::En).is_err());
}
