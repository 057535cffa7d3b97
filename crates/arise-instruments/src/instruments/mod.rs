pub mod feedback360;
pub mod mbti;
pub mod tki;
pub mod wellness;

use arise_core::models::question::Question;

use crate::Dimension;

pub(crate) fn dimension(id: &str, name: &str, name_fr: &str, description: Option<&str>) -> Dimension {
    Dimension {
        id: id.to_string(),
        name: name.to_string(),
        name_fr: name_fr.to_string(),
        description: description.map(str::to_string),
    }
}

/// Build numbered Likert questions (`{prefix}_01`, `{prefix}_02`, …) from
/// `(dimension, prompt, prompt_fr)` rows.
pub(crate) fn likert_questions(prefix: &str, rows: &[(&str, &str, &str)]) -> Vec<Question> {
    rows.iter()
        .enumerate()
        .map(|(i, (dimension, prompt, prompt_fr))| Question {
            id: format!("{prefix}_{:02}", i + 1),
            dimension: dimension.to_string(),
            prompt: prompt.to_string(),
            prompt_fr: Some(prompt_fr.to_string()),
            resources: Vec::new(),
        })
        .collect()
}
