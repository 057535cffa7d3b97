use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Choice;
use crate::Locale;

/// A learning resource attached to a question (article, video, worksheet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub url: String,
    pub text: String,
}

/// A Likert-rated question belonging to one pillar or capability.
///
/// Question order inside a catalog is significant: it drives sequential
/// navigation and the progress bar.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    /// Pillar (wellness) or capability (360° feedback) key, snake_case.
    pub dimension: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_fr: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
}

impl Question {
    pub fn prompt_for(&self, locale: Locale) -> &str {
        locale.pick(&self.prompt, self.prompt_fr.as_deref())
    }
}

/// One side of a forced-choice item, tagged with the mode it expresses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_fr: Option<String>,
    pub mode: String,
}

impl ChoiceOption {
    pub fn text_for(&self, locale: Locale) -> &str {
        locale.pick(&self.text, self.text_fr.as_deref())
    }
}

/// A forced-choice (A/B) item, as used by the conflict-style quiz.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForcedChoiceQuestion {
    pub id: String,
    pub a: ChoiceOption,
    pub b: ChoiceOption,
}

impl ForcedChoiceQuestion {
    pub fn option(&self, choice: Choice) -> &ChoiceOption {
        match choice {
            Choice::A => &self.a,
            Choice::B => &self.b,
        }
    }
}
