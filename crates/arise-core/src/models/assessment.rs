use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The four assessment families offered by ARISE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentKind {
    Mbti,
    Tki,
    Wellness,
    #[serde(rename = "feedback_360")]
    Feedback360,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 4] = [
        AssessmentKind::Mbti,
        AssessmentKind::Tki,
        AssessmentKind::Wellness,
        AssessmentKind::Feedback360,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::Mbti => "mbti",
            AssessmentKind::Tki => "tki",
            AssessmentKind::Wellness => "wellness",
            AssessmentKind::Feedback360 => "feedback_360",
        }
    }

    /// Path segment of the frontend pages for this kind.
    pub fn page_slug(&self) -> &'static str {
        match self {
            AssessmentKind::Mbti => "mbti",
            AssessmentKind::Tki => "tki",
            AssessmentKind::Wellness => "wellness",
            AssessmentKind::Feedback360 => "360-feedback",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mbti" => Ok(AssessmentKind::Mbti),
            "tki" => Ok(AssessmentKind::Tki),
            "wellness" => Ok(AssessmentKind::Wellness),
            "feedback_360" | "360_feedback" | "360-feedback" | "360" => {
                Ok(AssessmentKind::Feedback360)
            }
            other => Err(CoreError::InvalidKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStatus {
    Draft,
    InProgress,
    Completed,
}

/// Remote assessment record, created when the user presses "Start".
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub kind: AssessmentKind,
    pub status: AssessmentStatus,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub completed_at: Option<jiff::Timestamp>,
}

/// Scores produced by the backend's aggregation. Which fields are present
/// depends on the assessment kind; this crate never computes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scores {
    /// Wellness: pillar key → total on the 5–25 pillar scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar_scores: Option<BTreeMap<String, f64>>,
    /// 360° feedback: capability key → mean rating on the 1–5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_scores: Option<BTreeMap<String, f64>>,
    /// MBTI: preference letter → clarity percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_preferences: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbti_type: Option<String>,
    /// TKI: conflict mode → number of times chosen (0–12).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_scores: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_mode: Option<String>,
}

/// Read-only result document fetched from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub assessment_id: Uuid,
    pub kind: AssessmentKind,
    #[serde(default)]
    pub scores: Scores,
    #[serde(default)]
    pub insights: serde_json::Value,
    #[serde(default)]
    pub recommendations: Vec<serde_json::Value>,
}
