use arise_instruments::scoring::{Band, RATING_SCALE};
use arise_instruments::{get_insight, get_insight_with_locale, score_to_color, tables};

#[test]
fn seed_tables_validate_clean() {
    assert_eq!(tables::feedback360::table().validate(), vec![]);
    assert_eq!(tables::wellness::table().validate(), vec![]);
}

#[test]
fn every_seed_record_resolves_across_its_band() {
    let table = tables::feedback360::table();
    for record in table.records() {
        let (lo, hi) = RATING_SCALE.bounds(record.band);
        let mut score = lo;
        while score <= hi {
            let found = get_insight(&record.capability, score)
                .unwrap_or_else(|| panic!("no insight for {} at {score}", record.capability));
            assert_eq!(found, record);
            assert!(RATING_SCALE.contains(found.band, score));
            score += 1.0;
        }
    }
}

#[test]
fn low_scores_never_resolve_to_higher_bands() {
    for capability in tables::feedback360::table().keys() {
        for score in [1.0, 2.0] {
            let insight = get_insight(capability, score).unwrap();
            assert_eq!(insight.band, Band::Critical, "{capability} at {score}");
        }
    }
}

#[test]
fn french_text_when_present() {
    let en = get_insight("communication", 4.0).unwrap();
    let fr = get_insight_with_locale("communication", 4.0, "fr").unwrap();
    assert_eq!(Some(fr.analysis.as_str()), en.analysis_fr.as_deref());
    assert_eq!(Some(fr.recommendation.as_str()), en.recommendation_fr.as_deref());
    assert_eq!(fr.color_code, "#C6EFCE");
    assert_eq!(fr.score_range, "4-5");
}

#[test]
fn unknown_locale_gets_english() {
    let en = get_insight("team culture", 3.0).unwrap();
    let resolved = get_insight_with_locale("team culture", 3.0, "de").unwrap();
    assert_eq!(resolved.analysis, en.analysis);
    assert_eq!(resolved.recommendation, en.recommendation);
}

#[test]
fn aliases_tolerate_naming_drift() {
    let canonical = get_insight("problem_solving", 2.0).unwrap();
    let drifted = get_insight("Problem Solving and Decision Making", 2.0).unwrap();
    assert_eq!(canonical, drifted);
}

#[test]
fn partial_names_do_not_match() {
    assert!(get_insight("team", 4.0).is_none());
    assert!(get_insight("management", 4.0).is_none());
    assert!(get_insight("communication", 0.0).is_none());
    assert!(get_insight("communication", 6.0).is_none());
}

#[test]
fn colors_follow_the_same_bands_as_lookups() {
    assert_eq!(score_to_color(4.0), "#C6EFCE");
    assert_eq!(score_to_color(3.0), "#FFEB9C");
    assert_eq!(score_to_color(2.0), "#FFC7CE");
    assert_eq!(score_to_color(5.0), "#C6EFCE");
    assert_eq!(score_to_color(1.0), "#FFC7CE");
    for score in [1.0, 2.0, 3.0, 4.0, 5.0] {
        let insight = get_insight("leadership_style", score).unwrap();
        assert_eq!(insight.color_code(), score_to_color(score));
    }
}
