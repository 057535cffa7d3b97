use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use arise_core::Locale;
use arise_core::models::assessment::AssessmentKind;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dimension;
use crate::error::InstrumentError;
use crate::{AnswerFormat, Dimension, Instrument};

/// MBTI results are imported from an external report, not taken in-app.
/// The catalog only knows the dichotomies and the sixteen type profiles.
pub struct Mbti;

/// One of the four preference pairs, with its two poles in type order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Dichotomy {
    #[serde(rename = "EI")]
    EI,
    #[serde(rename = "SN")]
    SN,
    #[serde(rename = "TF")]
    TF,
    #[serde(rename = "JP")]
    JP,
}

impl Dichotomy {
    pub const ALL: [Dichotomy; 4] = [Dichotomy::EI, Dichotomy::SN, Dichotomy::TF, Dichotomy::JP];

    pub fn poles(&self) -> (char, char) {
        match self {
            Dichotomy::EI => ('E', 'I'),
            Dichotomy::SN => ('S', 'N'),
            Dichotomy::TF => ('T', 'F'),
            Dichotomy::JP => ('J', 'P'),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dichotomy::EI => "EI",
            Dichotomy::SN => "SN",
            Dichotomy::TF => "TF",
            Dichotomy::JP => "JP",
        }
    }

    pub fn pole_name(letter: char, locale: Locale) -> Option<&'static str> {
        let (en, fr) = match letter.to_ascii_uppercase() {
            'E' => ("Extraversion", "Extraversion"),
            'I' => ("Introversion", "Introversion"),
            'S' => ("Sensing", "Sensation"),
            'N' => ("Intuition", "Intuition"),
            'T' => ("Thinking", "Pensée"),
            'F' => ("Feeling", "Sentiment"),
            'J' => ("Judging", "Jugement"),
            'P' => ("Perceiving", "Perception"),
            _ => return None,
        };
        Some(locale.pick(en, Some(fr)))
    }
}

/// A validated four-letter type code, stored upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MbtiType([char; 4]);

impl MbtiType {
    pub fn letters(&self) -> [char; 4] {
        self.0
    }

    /// Preferred letter for a dichotomy.
    pub fn preference(&self, dichotomy: Dichotomy) -> char {
        let i = Dichotomy::ALL
            .iter()
            .position(|d| *d == dichotomy)
            .unwrap_or_default();
        self.0[i]
    }

    pub fn profile(&self) -> Option<&'static TypeProfile> {
        let code = self.to_string();
        PROFILES.iter().find(|p| p.code == code)
    }
}

impl FromStr for MbtiType {
    type Err = InstrumentError;

    /// Accepts `intj`, `INTJ`, and the `INTJ-A` / `INTJ-T` identity suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let core = trimmed.split(['-', ' ']).next().unwrap_or_default();
        let letters: Vec<char> = core.chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() != 4 {
            return Err(InstrumentError::InvalidMbtiType(s.to_string()));
        }
        let mut out = ['?'; 4];
        for (i, dichotomy) in Dichotomy::ALL.iter().enumerate() {
            let (a, b) = dichotomy.poles();
            if letters[i] != a && letters[i] != b {
                return Err(InstrumentError::InvalidMbtiType(s.to_string()));
            }
            out[i] = letters[i];
        }
        Ok(MbtiType(out))
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl Serialize for MbtiType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Bilingual summary of one of the sixteen types.
#[derive(Debug, Clone, Serialize)]
pub struct TypeProfile {
    pub code: &'static str,
    pub nickname: &'static str,
    pub nickname_fr: &'static str,
    pub summary: &'static str,
    pub summary_fr: &'static str,
}

impl TypeProfile {
    pub fn nickname_for(&self, locale: Locale) -> &'static str {
        locale.pick(self.nickname, Some(self.nickname_fr))
    }

    pub fn summary_for(&self, locale: Locale) -> &'static str {
        locale.pick(self.summary, Some(self.summary_fr))
    }
}

macro_rules! profile {
    ($code:literal, $nick:literal, $nick_fr:literal, $summary:literal, $summary_fr:literal) => {
        TypeProfile {
            code: $code,
            nickname: $nick,
            nickname_fr: $nick_fr,
            summary: $summary,
            summary_fr: $summary_fr,
        }
    };
}

pub static PROFILES: [TypeProfile; 16] = [
    profile!("ISTJ", "The Inspector", "L'Inspecteur",
        "Dependable and thorough; leads through structure, accountability and follow-through.",
        "Fiable et rigoureux ; dirige par la structure, la responsabilité et le suivi."),
    profile!("ISFJ", "The Protector", "Le Protecteur",
        "Loyal and attentive; leads by supporting people and keeping commitments.",
        "Loyal et attentionné ; dirige en soutenant les personnes et en tenant ses engagements."),
    profile!("INFJ", "The Counselor", "Le Conseiller",
        "Insightful and principled; leads through a clear vision of what people can become.",
        "Perspicace et attaché à ses principes ; dirige par une vision claire du potentiel des personnes."),
    profile!("INTJ", "The Architect", "L'Architecte",
        "Strategic and independent; leads by designing long-term plans and raising standards.",
        "Stratège et indépendant ; dirige en concevant des plans à long terme et en élevant les exigences."),
    profile!("ISTP", "The Craftsperson", "L'Artisan",
        "Practical and composed; leads by solving concrete problems calmly under pressure.",
        "Pragmatique et posé ; dirige en résolvant calmement des problèmes concrets sous pression."),
    profile!("ISFP", "The Composer", "Le Compositeur",
        "Gentle and adaptable; leads by example and by respecting individual values.",
        "Doux et adaptable ; dirige par l'exemple et dans le respect des valeurs de chacun."),
    profile!("INFP", "The Healer", "Le Médiateur",
        "Idealistic and empathetic; leads by aligning work with meaning and values.",
        "Idéaliste et empathique ; dirige en donnant du sens et en s'appuyant sur les valeurs."),
    profile!("INTP", "The Thinker", "Le Penseur",
        "Analytical and curious; leads by questioning assumptions and building clear models.",
        "Analytique et curieux ; dirige en questionnant les hypothèses et en construisant des modèles clairs."),
    profile!("ESTP", "The Dynamo", "Le Dynamique",
        "Energetic and pragmatic; leads by acting fast and adapting on the fly.",
        "Énergique et pragmatique ; dirige en agissant vite et en s'adaptant en chemin."),
    profile!("ESFP", "The Performer", "L'Animateur",
        "Spontaneous and warm; leads by creating energy and engagement in the team.",
        "Spontané et chaleureux ; dirige en créant de l'énergie et de l'engagement dans l'équipe."),
    profile!("ENFP", "The Champion", "Le Champion",
        "Enthusiastic and imaginative; leads by inspiring people toward new possibilities.",
        "Enthousiaste et imaginatif ; dirige en inspirant les autres vers de nouvelles possibilités."),
    profile!("ENTP", "The Visionary", "Le Visionnaire",
        "Inventive and outspoken; leads by challenging the status quo and generating options.",
        "Inventif et direct ; dirige en remettant en cause le statu quo et en générant des options."),
    profile!("ESTJ", "The Supervisor", "Le Superviseur",
        "Organised and decisive; leads by setting clear expectations and driving execution.",
        "Organisé et décidé ; dirige en fixant des attentes claires et en pilotant l'exécution."),
    profile!("ESFJ", "The Provider", "Le Pourvoyeur",
        "Caring and sociable; leads by building harmony and looking after the team.",
        "Bienveillant et sociable ; dirige en créant l'harmonie et en prenant soin de l'équipe."),
    profile!("ENFJ", "The Teacher", "Le Mentor",
        "Charismatic and supportive; leads by developing people and rallying them to a cause.",
        "Charismatique et soutenant ; dirige en développant les personnes et en les mobilisant autour d'une cause."),
    profile!("ENTJ", "The Commander", "Le Commandant",
        "Bold and strategic; leads by organising people and resources toward ambitious goals.",
        "Audacieux et stratège ; dirige en organisant personnes et ressources vers des objectifs ambitieux."),
];

/// Strength of a preference on one dichotomy, as reported by the import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PreferenceClarity {
    pub dichotomy: Dichotomy,
    pub letter: char,
    /// Percentage toward `letter`, 50–100.
    pub clarity: f64,
}

/// Read `dimension_preferences` (letter → percentage) into one entry per
/// dichotomy. When both poles are present the higher wins; when only one
/// is present it is taken as is. Dichotomies with no data are omitted.
pub fn preference_clarity(preferences: &BTreeMap<String, f64>) -> Vec<PreferenceClarity> {
    let lookup = |c: char| {
        preferences
            .iter()
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(&c.to_string()))
            .map(|(_, v)| *v)
    };

    Dichotomy::ALL
        .iter()
        .filter_map(|d| {
            let (a, b) = d.poles();
            let (letter, clarity) = match (lookup(a), lookup(b)) {
                (Some(x), Some(y)) if y > x => (b, y),
                (Some(x), _) => (a, x),
                (None, Some(y)) => (b, y),
                (None, None) => return None,
            };
            Some(PreferenceClarity {
                dichotomy: *d,
                letter,
                clarity,
            })
        })
        .collect()
}

static DIMENSIONS: LazyLock<Vec<Dimension>> = LazyLock::new(|| {
    vec![
        dimension("EI", "Extraversion / Introversion", "Extraversion / Introversion", Some("Where you direct your energy")),
        dimension("SN", "Sensing / Intuition", "Sensation / Intuition", Some("How you take in information")),
        dimension("TF", "Thinking / Feeling", "Pensée / Sentiment", Some("How you make decisions")),
        dimension("JP", "Judging / Perceiving", "Jugement / Perception", Some("How you approach the outside world")),
    ]
});

impl Instrument for Mbti {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Mbti
    }

    fn name(&self) -> &str {
        "Myers-Briggs Type Indicator"
    }

    fn dimensions(&self) -> &[Dimension] {
        &DIMENSIONS
    }

    fn question_ids(&self) -> Vec<&str> {
        Vec::new()
    }

    fn answer_format(&self) -> Option<AnswerFormat> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_suffixes() {
        let t: MbtiType = "intj-A".parse().unwrap();
        assert_eq!(t.to_string(), "INTJ");
        assert_eq!(t.preference(Dichotomy::TF), 'T');
        assert!("IXTJ".parse::<MbtiType>().is_err());
        assert!("INT".parse::<MbtiType>().is_err());
        assert!("NITJ".parse::<MbtiType>().is_err());
    }

    #[test]
    fn every_valid_code_has_a_profile() {
        for e in ['E', 'I'] {
            for s in ['S', 'N'] {
                for t in ['T', 'F'] {
                    for j in ['J', 'P'] {
                        let code: String = [e, s, t, j].iter().collect();
                        let ty: MbtiType = code.parse().unwrap();
                        assert!(ty.profile().is_some(), "no profile for {code}");
                    }
                }
            }
        }
    }

    #[test]
    fn clarity_picks_the_stronger_pole() {
        let prefs = BTreeMap::from([
            ("E".to_string(), 35.0),
            ("I".to_string(), 65.0),
            ("n".to_string(), 70.0),
            ("T".to_string(), 55.0),
        ]);
        let clarity = preference_clarity(&prefs);
        assert_eq!(clarity.len(), 3);
        assert_eq!(clarity[0].letter, 'I');
        assert_eq!(clarity[0].clarity, 65.0);
        assert_eq!(clarity[1].letter, 'N');
        assert_eq!(clarity[2].dichotomy, Dichotomy::TF);
    }
}
