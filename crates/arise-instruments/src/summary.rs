//! Result interpretation for each assessment kind.
//!
//! These functions turn backend scores into what the results pages show:
//! strengths and growth areas, capability cards, ranked conflict modes and
//! an MBTI profile. Missing insights never fail a summary; the entry gets
//! a templated fallback sentence instead.

use std::collections::BTreeMap;

use arise_core::Locale;
use arise_core::models::assessment::{AssessmentKind, AssessmentResult, Scores};
use serde::Serialize;
use ts_rs::TS;

use crate::Instrument;
use crate::error::InstrumentError;
use crate::insights::{InsightTable, normalize_key};
use crate::instruments::feedback360::Feedback360;
use crate::instruments::mbti::{Dichotomy, MbtiType, preference_clarity};
use crate::instruments::tki::{ConflictMode, MAX_MODE_SCORE};
use crate::instruments::wellness::Wellness;
use crate::scoring::{Band, PILLAR_SCALE};
use crate::tables;

/// Pillar totals at or above this are strengths.
pub const STRENGTH_THRESHOLD: f64 = PILLAR_SCALE.strong_from;

/// One pillar or capability with its locale-resolved text.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DimensionResult {
    pub key: String,
    pub name: String,
    pub score: f64,
    pub max: f64,
    /// `score / max`, clamped to `0.0..=1.0`, for progress bars.
    pub progress: f64,
    pub band: Option<Band>,
    pub color_code: String,
    pub analysis: String,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct WellnessSummary {
    /// Highest score first.
    pub strengths: Vec<DimensionResult>,
    /// Lowest score first.
    pub growth_areas: Vec<DimensionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ModeResult {
    pub mode: ConflictMode,
    pub name: String,
    pub score: f64,
    pub share: f64,
    pub description: String,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct TkiSummary {
    pub dominant: ConflictMode,
    /// All five modes, highest score first; ties keep catalog order.
    pub modes: Vec<ModeResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PreferenceView {
    pub dichotomy: Dichotomy,
    pub letter: char,
    pub name: String,
    pub clarity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MbtiSummary {
    pub code: String,
    pub nickname: Option<String>,
    pub summary: Option<String>,
    pub preferences: Vec<PreferenceView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ResultSummary {
    Mbti(MbtiSummary),
    Tki(TkiSummary),
    Wellness(WellnessSummary),
    #[serde(rename = "feedback_360")]
    Feedback360 { capabilities: Vec<DimensionResult> },
}

/// Interpret a fetched result according to its kind.
pub fn summarize(result: &AssessmentResult, locale: Locale) -> Result<ResultSummary, InstrumentError> {
    let scores = &result.scores;
    Ok(match result.kind {
        AssessmentKind::Mbti => ResultSummary::Mbti(mbti_summary(scores, locale)?),
        AssessmentKind::Tki => ResultSummary::Tki(tki_summary(scores, locale)?),
        AssessmentKind::Wellness => {
            let pillars = scores
                .pillar_scores
                .as_ref()
                .ok_or(InstrumentError::MissingScores("pillar_scores"))?;
            ResultSummary::Wellness(wellness_summary(pillars, locale))
        }
        AssessmentKind::Feedback360 => {
            let capabilities = scores
                .capability_scores
                .as_ref()
                .ok_or(InstrumentError::MissingScores("capability_scores"))?;
            ResultSummary::Feedback360 {
                capabilities: feedback360_results(capabilities, locale),
            }
        }
    })
}

pub fn wellness_summary(pillar_scores: &BTreeMap<String, f64>, locale: Locale) -> WellnessSummary {
    let table = tables::wellness::table();
    let (mut strengths, mut growth_areas): (Vec<_>, Vec<_>) = pillar_scores
        .iter()
        .map(|(pillar, score)| dimension_result(table, &Wellness, pillar, *score, locale))
        .partition(|r| r.score >= STRENGTH_THRESHOLD);

    strengths.sort_by(|a, b| b.score.total_cmp(&a.score));
    growth_areas.sort_by(|a, b| a.score.total_cmp(&b.score));

    WellnessSummary {
        strengths,
        growth_areas,
    }
}

/// One card per capability: catalog capabilities first in catalog order,
/// then any unrecognised keys alphabetically.
pub fn feedback360_results(capability_scores: &BTreeMap<String, f64>, locale: Locale) -> Vec<DimensionResult> {
    let table = tables::feedback360::table();
    let order: Vec<&str> = Feedback360.dimensions().iter().map(|d| d.id.as_str()).collect();

    let mut results: Vec<DimensionResult> = capability_scores
        .iter()
        .map(|(capability, score)| dimension_result(table, &Feedback360, capability, *score, locale))
        .collect();
    results.sort_by_key(|r| {
        let pos = order.iter().position(|k| *k == r.key).unwrap_or(order.len());
        (pos, r.key.clone())
    });
    results
}

pub fn tki_summary(scores: &Scores, locale: Locale) -> Result<TkiSummary, InstrumentError> {
    let raw = scores
        .mode_scores
        .as_ref()
        .ok_or(InstrumentError::MissingScores("mode_scores"))?;

    let mut by_mode: BTreeMap<ConflictMode, f64> = BTreeMap::new();
    for (key, score) in raw {
        match key.parse::<ConflictMode>() {
            Ok(mode) => {
                by_mode.insert(mode, *score);
            }
            Err(_) => tracing::warn!(mode = %key, "ignoring unknown conflict mode in scores"),
        }
    }

    let mut modes: Vec<ModeResult> = ConflictMode::ALL
        .iter()
        .map(|mode| {
            let profile = mode.profile();
            let score = by_mode.get(mode).copied().unwrap_or(0.0);
            ModeResult {
                mode: *mode,
                name: profile.name_for(locale).to_string(),
                score,
                share: (score / MAX_MODE_SCORE).clamp(0.0, 1.0),
                description: profile.description_for(locale).to_string(),
                tip: profile.tip_for(locale).to_string(),
            }
        })
        .collect();
    // Stable sort keeps catalog order on ties.
    modes.sort_by(|a, b| b.score.total_cmp(&a.score));

    let dominant = scores
        .dominant_mode
        .as_deref()
        .and_then(|m| m.parse::<ConflictMode>().ok())
        .unwrap_or(modes[0].mode);

    Ok(TkiSummary { dominant, modes })
}

pub fn mbti_summary(scores: &Scores, locale: Locale) -> Result<MbtiSummary, InstrumentError> {
    let code = scores
        .mbti_type
        .as_deref()
        .ok_or(InstrumentError::MissingScores("mbti_type"))?;
    let ty: MbtiType = code.parse()?;
    let clarity = scores
        .dimension_preferences
        .as_ref()
        .map(preference_clarity)
        .unwrap_or_default();

    let preferences = Dichotomy::ALL
        .iter()
        .map(|d| {
            let letter = ty.preference(*d);
            PreferenceView {
                dichotomy: *d,
                letter,
                name: Dichotomy::pole_name(letter, locale)
                    .unwrap_or_default()
                    .to_string(),
                clarity: clarity
                    .iter()
                    .find(|c| c.dichotomy == *d && c.letter == letter)
                    .map(|c| c.clarity),
            }
        })
        .collect();

    let profile = ty.profile();
    Ok(MbtiSummary {
        code: ty.to_string(),
        nickname: profile.map(|p| p.nickname_for(locale).to_string()),
        summary: profile.map(|p| p.summary_for(locale).to_string()),
        preferences,
    })
}

fn dimension_result(
    table: &InsightTable,
    instrument: &dyn Instrument,
    raw_key: &str,
    score: f64,
    locale: Locale,
) -> DimensionResult {
    let scale = table.scale();
    let key = table.canonical_key(raw_key).unwrap_or_else(|| normalize_key(raw_key));
    let name = instrument
        .dimensions()
        .iter()
        .find(|d| d.id == key)
        .map(|d| d.name_for(locale).to_string())
        .unwrap_or_else(|| raw_key.to_string());
    let resolved = table.get_with_locale(&key, score, locale);

    let (analysis, recommendation) = match resolved {
        Some(r) => (r.analysis, Some(r.recommendation)),
        None => (fallback_text(&name, score, scale.max, locale), None),
    };

    DimensionResult {
        key,
        name,
        score,
        max: scale.max,
        progress: (score / scale.max).clamp(0.0, 1.0),
        band: scale.band(score),
        color_code: scale.classify(score).color().to_string(),
        analysis,
        recommendation,
    }
}

/// Sentence shown when no insight matches.
pub fn fallback_text(name: &str, score: f64, max: f64, locale: Locale) -> String {
    let (score, max) = (format_score(score), format_score(max));
    match locale {
        Locale::En => format!("Your {name} score is {score} out of {max}"),
        Locale::Fr => format!("Votre score {name} est de {score} sur {max}"),
    }
}

fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
