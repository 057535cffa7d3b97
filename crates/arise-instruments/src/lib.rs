//! arise-instruments
//!
//! Assessment instrument definitions and result interpretation. Pure data
//! and rules, no I/O: question catalogs, score bands, bilingual insight
//! tables, the insight resolver and per-assessment result summaries.
//! Raw answers are never aggregated here; scores arrive from the backend.

pub mod error;
pub mod insights;
pub mod instruments;
pub mod scale;
pub mod scoring;
pub mod summary;
pub mod tables;

use std::collections::BTreeMap;

use arise_core::Locale;
use arise_core::models::answer::{Answer, LIKERT_MAX, LIKERT_MIN};
use arise_core::models::assessment::AssessmentKind;
use arise_core::session::Session;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use insights::{CapabilityInsight, ResolvedInsight};
use scale::ScaleKind;
use scoring::AnswerIssue;

/// A scored dimension: a wellness pillar, a 360° capability, a conflict
/// mode or an MBTI dichotomy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimension {
    pub id: String,
    pub name: String,
    pub name_fr: String,
    pub description: Option<String>,
}

impl Dimension {
    pub fn name_for(&self, locale: Locale) -> &str {
        locale.pick(&self.name, Some(&self.name_fr))
    }
}

/// How an instrument's questions are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "scale", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerFormat {
    ForcedChoice,
    Likert(ScaleKind),
}

/// Trait implemented by each assessment instrument.
pub trait Instrument: Send + Sync {
    fn kind(&self) -> AssessmentKind;

    /// Unique identifier (e.g., "tki", "wellness").
    fn id(&self) -> &str {
        self.kind().as_str()
    }

    /// Human-readable name.
    fn name(&self) -> &str;

    fn dimensions(&self) -> &[Dimension];

    /// Question ids in presentation order. Empty for imported instruments.
    fn question_ids(&self) -> Vec<&str>;

    fn question_count(&self) -> usize {
        self.question_ids().len()
    }

    /// `None` when the instrument is imported rather than taken in-app.
    fn answer_format(&self) -> Option<AnswerFormat>;

    /// Check a set of answers against this instrument's questions.
    fn validate_answers(&self, answers: &BTreeMap<String, Answer>) -> Vec<AnswerIssue> {
        let ids = self.question_ids();
        let format = self.answer_format();
        let mut issues = Vec::new();

        for (question_id, answer) in answers {
            let problem = if !ids.contains(&question_id.as_str()) {
                Some(format!("{}: unknown question '{question_id}'", self.name()))
            } else {
                match (format, answer) {
                    (None, _) => Some(format!("{} does not accept answers", self.name())),
                    (Some(AnswerFormat::ForcedChoice), Answer::Scale(v)) => {
                        Some(format!("{question_id}: expected A or B, got {v}"))
                    }
                    (Some(AnswerFormat::Likert(_)), Answer::Choice(_)) => {
                        Some(format!("{question_id}: expected a rating, got {answer}"))
                    }
                    (Some(AnswerFormat::Likert(_)), Answer::Scale(v))
                        if !(LIKERT_MIN..=LIKERT_MAX).contains(v) =>
                    {
                        Some(format!(
                            "{question_id}: rating {v} is outside {LIKERT_MIN}-{LIKERT_MAX}"
                        ))
                    }
                    _ => None,
                }
            };
            if let Some(message) = problem {
                issues.push(AnswerIssue {
                    question_id: question_id.clone(),
                    message,
                });
            }
        }
        issues
    }

    /// A fresh session over this instrument's questions.
    fn new_session(&self) -> Session {
        Session::new(self.question_ids())
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::mbti::Mbti),
        Box::new(instruments::tki::Tki),
        Box::new(instruments::wellness::Wellness),
        Box::new(instruments::feedback360::Feedback360),
    ]
}

/// Look up an instrument by kind.
pub fn get_instrument(kind: AssessmentKind) -> Box<dyn Instrument> {
    match kind {
        AssessmentKind::Mbti => Box::new(instruments::mbti::Mbti),
        AssessmentKind::Tki => Box::new(instruments::tki::Tki),
        AssessmentKind::Wellness => Box::new(instruments::wellness::Wellness),
        AssessmentKind::Feedback360 => Box::new(instruments::feedback360::Feedback360),
    }
}

/// Resolve a 360° capability insight for a 1–5 score.
pub fn get_insight(capability: &str, score: f64) -> Option<&'static CapabilityInsight> {
    tables::feedback360::table().get(capability, score)
}

/// Locale-aware variant of [`get_insight`]. The locale is the raw path
/// segment; unknown values fall back to English.
pub fn get_insight_with_locale(capability: &str, score: f64, locale: &str) -> Option<ResolvedInsight> {
    tables::feedback360::table().get_with_locale(capability, score, Locale::parse(locale))
}

pub use scoring::score_to_color;
