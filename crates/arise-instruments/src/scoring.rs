use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Qualitative tier of a score. Every colour and every insight lookup is
/// derived from [`BandScale::band`]; nothing else classifies scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Band {
    Critical,
    Developing,
    Strong,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Critical, Band::Developing, Band::Strong];

    /// Cell colour used for cards and progress bars.
    pub fn color(&self) -> &'static str {
        match self {
            Band::Critical => "#FFC7CE",
            Band::Developing => "#FFEB9C",
            Band::Strong => "#C6EFCE",
        }
    }

    /// The band's range on the 1–5 rating scale. Insight records are keyed
    /// on this label whatever scale their table uses.
    pub fn score_range(&self) -> &'static str {
        match self {
            Band::Critical => "1-2",
            Band::Developing => "3",
            Band::Strong => "4-5",
        }
    }

    pub fn from_score_range(label: &str) -> Option<Band> {
        let label = label.trim();
        Band::ALL.into_iter().find(|b| b.score_range() == label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Critical => "critical",
            Band::Developing => "developing",
            Band::Strong => "strong",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score scale split into three contiguous bands.
///
/// `developing_from` and `strong_from` are the lower thresholds of the
/// middle and top bands. On integer scores the 1–5 rating scale yields
/// the familiar `1-2`, `3`, `4-5` ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandScale {
    pub min: f64,
    pub max: f64,
    pub developing_from: f64,
    pub strong_from: f64,
}

/// Likert rating scale used by the 360° insight table.
pub const RATING_SCALE: BandScale = BandScale {
    min: 1.0,
    max: 5.0,
    developing_from: 3.0,
    strong_from: 4.0,
};

/// Wellness pillar totals: five items rated 1–5 per pillar.
pub const PILLAR_SCALE: BandScale = BandScale {
    min: 5.0,
    max: 25.0,
    developing_from: 13.0,
    strong_from: 16.0,
};

impl BandScale {
    /// Band containing `score`, or `None` when the score is off the scale.
    pub fn band(&self, score: f64) -> Option<Band> {
        if !(self.min..=self.max).contains(&score) {
            return None;
        }
        Some(self.classify(score))
    }

    /// Band by threshold alone, without checking the scale bounds.
    pub fn classify(&self, score: f64) -> Band {
        if score >= self.strong_from {
            Band::Strong
        } else if score >= self.developing_from {
            Band::Developing
        } else {
            Band::Critical
        }
    }

    /// Inclusive integer bounds of a band.
    pub fn bounds(&self, band: Band) -> (f64, f64) {
        match band {
            Band::Critical => (self.min, self.developing_from - 1.0),
            Band::Developing => (self.developing_from, self.strong_from - 1.0),
            Band::Strong => (self.strong_from, self.max),
        }
    }

    /// Range label such as `"1-2"` or `"3"`.
    pub fn range_label(&self, band: Band) -> String {
        let (lo, hi) = self.bounds(band);
        if lo == hi {
            format!("{lo}")
        } else {
            format!("{lo}-{hi}")
        }
    }

    pub fn contains(&self, band: Band, score: f64) -> bool {
        self.band(score) == Some(band)
    }
}

/// Progress-bar tint for a 1–5 rating. Total over all inputs: anything
/// below 3 (including off-scale values) is red.
pub fn score_to_color(score: f64) -> &'static str {
    RATING_SCALE.classify(score).color()
}

/// A problem with one submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerIssue {
    pub question_id: String,
    pub message: String,
}
