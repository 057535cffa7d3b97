//! Five-point rating scales shown under Likert questions.

use arise_core::Locale;
use arise_core::models::scale::ScaleOption;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleKind {
    /// "Strongly disagree" … "Strongly agree" (360° feedback).
    Agreement,
    /// "Never" … "Always" (wellness survey).
    Frequency,
}

const AGREEMENT_EN: [&str; 5] = [
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];
const AGREEMENT_FR: [&str; 5] = [
    "Pas du tout d'accord",
    "Pas d'accord",
    "Neutre",
    "D'accord",
    "Tout à fait d'accord",
];
const FREQUENCY_EN: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Always"];
const FREQUENCY_FR: [&str; 5] = ["Jamais", "Rarement", "Parfois", "Souvent", "Toujours"];

pub fn scale_options(kind: ScaleKind, locale: Locale) -> Vec<ScaleOption> {
    let labels = match (kind, locale) {
        (ScaleKind::Agreement, Locale::En) => AGREEMENT_EN,
        (ScaleKind::Agreement, Locale::Fr) => AGREEMENT_FR,
        (ScaleKind::Frequency, Locale::En) => FREQUENCY_EN,
        (ScaleKind::Frequency, Locale::Fr) => FREQUENCY_FR,
    };
    labels
        .iter()
        .zip(1u8..)
        .map(|(label, value)| ScaleOption {
            value,
            label: label.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_ascending_options_per_locale() {
        for kind in [ScaleKind::Agreement, ScaleKind::Frequency] {
            for locale in [Locale::En, Locale::Fr] {
                let options = scale_options(kind, locale);
                let values: Vec<u8> = options.iter().map(|o| o.value).collect();
                assert_eq!(values, vec![1, 2, 3, 4, 5]);
            }
        }
        assert_eq!(scale_options(ScaleKind::Frequency, Locale::Fr)[4].label, "Toujours");
    }
}
