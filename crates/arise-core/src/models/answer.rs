use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Lowest and highest values of a Likert answer.
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Side picked on a forced-choice item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Choice {
    A,
    B,
}

/// A single answer: either a forced choice or a 1–5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Answer {
    Choice(Choice),
    Scale(u8),
}

impl Answer {
    /// Build a Likert answer, rejecting values outside 1–5.
    pub fn likert(value: u8) -> Result<Self, CoreError> {
        if (LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            Ok(Answer::Scale(value))
        } else {
            Err(CoreError::InvalidAnswer(format!(
                "rating {value} is outside {LIKERT_MIN}-{LIKERT_MAX}"
            )))
        }
    }

    pub fn as_choice(&self) -> Option<Choice> {
        match self {
            Answer::Choice(c) => Some(*c),
            Answer::Scale(_) => None,
        }
    }

    pub fn as_scale(&self) -> Option<u8> {
        match self {
            Answer::Scale(v) => Some(*v),
            Answer::Choice(_) => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Choice(Choice::A) => f.write_str("A"),
            Answer::Choice(Choice::B) => f.write_str("B"),
            Answer::Scale(v) => write!(f, "{v}"),
        }
    }
}

/// Wire shape of one answer in a submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSubmission {
    pub question_id: String,
    pub answer_value: Answer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likert_rejects_out_of_range() {
        assert!(Answer::likert(0).is_err());
        assert!(Answer::likert(6).is_err());
        assert_eq!(Answer::likert(3).unwrap(), Answer::Scale(3));
    }

    #[test]
    fn answers_serialize_as_bare_values() {
        let choice = serde_json::to_string(&Answer::Choice(Choice::B)).unwrap();
        let scale = serde_json::to_string(&Answer::Scale(4)).unwrap();
        assert_eq!(choice, "\"B\"");
        assert_eq!(scale, "4");

        let parsed: Answer = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(parsed, Answer::Choice(Choice::A));
        let parsed: Answer = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Answer::Scale(2));
    }

    #[test]
    fn submission_uses_backend_field_names() {
        let s = AnswerSubmission {
            question_id: "tki_01".to_string(),
            answer_value: Answer::Choice(Choice::A),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["question_id"], "tki_01");
        assert_eq!(json["answer_value"], "A");
    }
}
