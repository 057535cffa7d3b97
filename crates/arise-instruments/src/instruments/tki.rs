use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use arise_core::Locale;
use arise_core::models::assessment::AssessmentKind;
use arise_core::models::question::{ChoiceOption, ForcedChoiceQuestion};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dimension;
use crate::error::InstrumentError;
use crate::insights::normalize_key;
use crate::{AnswerFormat, Dimension, Instrument};

/// Conflict-style quiz: 30 forced-choice items. Each of the ten pairings of
/// the five conflict modes appears three times, so every mode is offered
/// on twelve options. Mode scores (0–12) come back from the backend.
pub struct Tki;

/// Highest possible score for one mode.
pub const MAX_MODE_SCORE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConflictMode {
    Competing,
    Collaborating,
    Compromising,
    Avoiding,
    Accommodating,
}

impl ConflictMode {
    pub const ALL: [ConflictMode; 5] = [
        ConflictMode::Competing,
        ConflictMode::Collaborating,
        ConflictMode::Compromising,
        ConflictMode::Avoiding,
        ConflictMode::Accommodating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictMode::Competing => "competing",
            ConflictMode::Collaborating => "collaborating",
            ConflictMode::Compromising => "compromising",
            ConflictMode::Avoiding => "avoiding",
            ConflictMode::Accommodating => "accommodating",
        }
    }

    fn index(&self) -> usize {
        match self {
            ConflictMode::Competing => 0,
            ConflictMode::Collaborating => 1,
            ConflictMode::Compromising => 2,
            ConflictMode::Avoiding => 3,
            ConflictMode::Accommodating => 4,
        }
    }

    pub fn profile(&self) -> &'static ModeProfile {
        &PROFILES[self.index()]
    }
}

impl fmt::Display for ConflictMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictMode {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        ConflictMode::ALL
            .into_iter()
            .find(|m| m.as_str() == key || m.as_str().trim_end_matches("ing") == key)
            .ok_or_else(|| InstrumentError::UnknownMode(s.to_string()))
    }
}

/// Bilingual description of a conflict mode.
#[derive(Debug, Clone, Serialize)]
pub struct ModeProfile {
    pub mode: ConflictMode,
    pub name: &'static str,
    pub name_fr: &'static str,
    pub description: &'static str,
    pub description_fr: &'static str,
    pub tip: &'static str,
    pub tip_fr: &'static str,
}

impl ModeProfile {
    pub fn name_for(&self, locale: Locale) -> &'static str {
        locale.pick(self.name, Some(self.name_fr))
    }

    pub fn description_for(&self, locale: Locale) -> &'static str {
        locale.pick(self.description, Some(self.description_fr))
    }

    pub fn tip_for(&self, locale: Locale) -> &'static str {
        locale.pick(self.tip, Some(self.tip_fr))
    }
}

static PROFILES: [ModeProfile; 5] = [
    ModeProfile {
        mode: ConflictMode::Competing,
        name: "Competing",
        name_fr: "Compétition",
        description: "Assertive and uncooperative: you pursue your own concerns, using whatever influence is needed to win.",
        description_fr: "Affirmé et peu coopératif : vous défendez vos propres intérêts en utilisant l'influence nécessaire pour l'emporter.",
        tip: "Useful in emergencies and for unpopular but necessary decisions. Check whether others feel heard.",
        tip_fr: "Utile en situation d'urgence et pour des décisions impopulaires mais nécessaires. Vérifiez que les autres se sentent entendus.",
    },
    ModeProfile {
        mode: ConflictMode::Collaborating,
        name: "Collaborating",
        name_fr: "Collaboration",
        description: "Assertive and cooperative: you work with others to find a solution that fully satisfies everyone.",
        description_fr: "Affirmé et coopératif : vous travaillez avec les autres pour trouver une solution qui satisfasse pleinement chacun.",
        tip: "Best when the stakes are high and there is time. Not every issue deserves the investment.",
        tip_fr: "Idéal quand les enjeux sont importants et le temps disponible. Tous les sujets ne méritent pas cet investissement.",
    },
    ModeProfile {
        mode: ConflictMode::Compromising,
        name: "Compromising",
        name_fr: "Compromis",
        description: "Intermediate on both dimensions: you look for an expedient, mutually acceptable middle ground.",
        description_fr: "Intermédiaire sur les deux dimensions : vous cherchez un terrain d'entente rapide et acceptable pour tous.",
        tip: "Good for temporary settlements under time pressure. Watch for solutions nobody really believes in.",
        tip_fr: "Adapté aux accords temporaires sous contrainte de temps. Méfiez-vous des solutions auxquelles personne ne croit vraiment.",
    },
    ModeProfile {
        mode: ConflictMode::Avoiding,
        name: "Avoiding",
        name_fr: "Évitement",
        description: "Unassertive and uncooperative: you sidestep or postpone the issue rather than address it.",
        description_fr: "Peu affirmé et peu coopératif : vous esquivez ou reportez le problème plutôt que de l'aborder.",
        tip: "Helpful when an issue is trivial or emotions need to cool. Important issues left alone tend to grow.",
        tip_fr: "Utile quand le sujet est mineur ou que les émotions doivent retomber. Les sujets importants laissés de côté ont tendance à grossir.",
    },
    ModeProfile {
        mode: ConflictMode::Accommodating,
        name: "Accommodating",
        name_fr: "Accommodation",
        description: "Unassertive and cooperative: you set aside your own concerns to satisfy the other person.",
        description_fr: "Peu affirmé et coopératif : vous mettez de côté vos propres intérêts pour satisfaire l'autre.",
        tip: "Builds goodwill when the issue matters more to others. Overuse can leave your ideas unheard.",
        tip_fr: "Crée de la bienveillance quand le sujet compte davantage pour les autres. Utilisé à l'excès, vos idées risquent de ne pas être entendues.",
    },
];

/// Twelve statements per mode, in the order they are used.
const STATEMENTS: [[(&str, &str); 12]; 5] = [
    [
        ("I make my position clear and push for it.", "J'affirme clairement ma position et je la défends."),
        ("I try to win my case.", "J'essaie d'avoir gain de cause."),
        ("I am firm in pursuing my goals.", "Je suis ferme dans la poursuite de mes objectifs."),
        ("I argue to show the merits of my view.", "J'argumente pour montrer le bien-fondé de mon point de vue."),
        ("I press to get my points made.", "J'insiste pour faire valoir mes arguments."),
        ("I assert my wishes.", "J'exprime fermement mes souhaits."),
        ("I stand my ground when I know I am right.", "Je tiens bon quand je sais avoir raison."),
        ("I take charge of the decision when time is short.", "Je prends la décision en main quand le temps presse."),
        ("I convince the other person to accept my solution.", "Je convaincs l'autre d'accepter ma solution."),
        ("I hold to my position under pressure.", "Je maintiens ma position sous la pression."),
        ("I make sure my interests are met.", "Je veille à ce que mes intérêts soient satisfaits."),
        ("I use my authority to settle the issue.", "J'utilise mon autorité pour trancher."),
    ],
    [
        ("I put all concerns on the table to work them through.", "Je mets toutes les préoccupations sur la table pour les traiter ensemble."),
        ("I look for a solution that fully satisfies both of us.", "Je cherche une solution qui nous satisfasse pleinement tous les deux."),
        ("I share my ideas and ask for theirs.", "Je partage mes idées et demande les leurs."),
        ("I try to get to the underlying needs on both sides.", "J'essaie d'identifier les besoins profonds de chacun."),
        ("I explore the disagreement to learn from it.", "J'explore le désaccord pour en tirer des enseignements."),
        ("I seek the other person's help in working out a solution.", "Je sollicite l'aide de l'autre pour trouver une solution."),
        ("I combine our insights into a new option.", "Je combine nos idées pour créer une nouvelle option."),
        ("I work through differences until we both agree.", "Je travaille sur nos différences jusqu'à un accord commun."),
        ("I take time to understand the issue together.", "Je prends le temps de comprendre le problème ensemble."),
        ("I address the problem openly and directly.", "J'aborde le problème ouvertement et directement."),
        ("I aim for a result where nobody has to give anything up.", "Je vise un résultat où personne ne renonce à rien."),
        ("I invite others to help design the solution.", "J'invite les autres à concevoir la solution avec moi."),
    ],
    [
        ("I look for a middle ground.", "Je cherche un terrain d'entente."),
        ("I give up some points in exchange for others.", "Je cède sur certains points en échange d'autres."),
        ("I propose a fair split.", "Je propose un partage équitable."),
        ("I try to find a quick, acceptable deal.", "J'essaie de trouver rapidement un accord acceptable."),
        ("I meet the other person halfway.", "Je fais la moitié du chemin."),
        ("I suggest we each give a little.", "Je propose que chacun fasse un effort."),
        ("I settle for a partial gain.", "Je me contente d'un gain partiel."),
        ("I trade concessions to reach agreement.", "J'échange des concessions pour parvenir à un accord."),
        ("I look for a temporary solution we can both accept.", "Je cherche une solution temporaire acceptable pour tous."),
        ("I balance gains and losses on both sides.", "J'équilibre les gains et les pertes de chaque côté."),
        ("I let them have some of their positions if they let me have some of mine.", "Je laisse l'autre obtenir une partie de ses demandes s'il m'accorde une partie des miennes."),
        ("I split the difference.", "Je coupe la poire en deux."),
    ],
    [
        ("I avoid creating unpleasantness for myself.", "J'évite de créer des tensions inutiles."),
        ("I postpone the issue until I have had time to think.", "Je reporte la question jusqu'à avoir eu le temps de réfléchir."),
        ("I let others take responsibility for solving the problem.", "Je laisse les autres prendre la responsabilité de résoudre le problème."),
        ("I avoid taking positions that would create controversy.", "J'évite de prendre des positions controversées."),
        ("I keep my views to myself.", "Je garde mes opinions pour moi."),
        ("I sidestep the topic.", "J'esquive le sujet."),
        ("I wait for tensions to settle.", "J'attends que les tensions retombent."),
        ("I feel differences are not always worth worrying about.", "J'estime que les divergences ne valent pas toujours qu'on s'en préoccupe."),
        ("I withdraw from the discussion.", "Je me retire de la discussion."),
        ("I leave the decision to someone else.", "Je laisse la décision à quelqu'un d'autre."),
        ("I avoid meetings where the conflict will come up.", "J'évite les réunions où le conflit sera abordé."),
        ("I change the subject when things get heated.", "Je change de sujet quand le ton monte."),
    ],
    [
        ("I try to soothe the other person's feelings.", "J'essaie d'apaiser les sentiments de l'autre."),
        ("I go along with the other person's wishes.", "Je me range aux souhaits de l'autre."),
        ("I put the relationship first.", "Je fais passer la relation en premier."),
        ("I give in to keep the peace.", "Je cède pour préserver la paix."),
        ("I sacrifice my own wishes for theirs.", "Je sacrifie mes propres souhaits au profit des siens."),
        ("I emphasise what we agree on.", "Je mets l'accent sur nos points d'accord."),
        ("I let the other person have their way.", "Je laisse l'autre faire à sa façon."),
        ("I support their solution even when I have doubts.", "Je soutiens sa solution même si j'ai des doutes."),
        ("I try not to hurt the other person's feelings.", "J'essaie de ne pas blesser l'autre."),
        ("I yield when the issue matters more to them.", "Je cède quand le sujet compte plus pour l'autre."),
        ("I help them reach their goal.", "Je l'aide à atteindre son objectif."),
        ("I concede the point.", "Je concède le point."),
    ],
];

static QUESTIONS: LazyLock<Vec<ForcedChoiceQuestion>> = LazyLock::new(|| {
    let pairs: Vec<(ConflictMode, ConflictMode)> = ConflictMode::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, a)| ConflictMode::ALL[i + 1..].iter().map(move |b| (*a, *b)))
        .collect();

    let mut used = [0usize; 5];
    let mut take = |mode: ConflictMode| {
        let (text, text_fr) = STATEMENTS[mode.index()][used[mode.index()]];
        used[mode.index()] += 1;
        ChoiceOption {
            text: text.to_string(),
            text_fr: Some(text_fr.to_string()),
            mode: mode.as_str().to_string(),
        }
    };

    let mut questions = Vec::with_capacity(30);
    for round in 0..3 {
        for (first, second) in &pairs {
            let n = questions.len() + 1;
            // Alternate sides so no mode is always option A.
            let (a, b) = if (n + round) % 2 == 0 {
                (*second, *first)
            } else {
                (*first, *second)
            };
            questions.push(ForcedChoiceQuestion {
                id: format!("tki_{n:02}"),
                a: take(a),
                b: take(b),
            });
        }
    }
    questions
});

static DIMENSIONS: LazyLock<Vec<Dimension>> = LazyLock::new(|| {
    PROFILES
        .iter()
        .map(|p| dimension(p.mode.as_str(), p.name, p.name_fr, Some(p.description)))
        .collect()
});

pub fn questions() -> &'static [ForcedChoiceQuestion] {
    &QUESTIONS
}

impl Instrument for Tki {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Tki
    }

    fn name(&self) -> &str {
        "Thomas-Kilmann Conflict Mode Instrument"
    }

    fn dimensions(&self) -> &[Dimension] {
        &DIMENSIONS
    }

    fn question_ids(&self) -> Vec<&str> {
        QUESTIONS.iter().map(|q| q.id.as_str()).collect()
    }

    fn answer_format(&self) -> Option<AnswerFormat> {
        Some(AnswerFormat::ForcedChoice)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn thirty_items_with_twelve_options_per_mode() {
        let qs = questions();
        assert_eq!(qs.len(), 30);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for q in qs {
            assert_ne!(q.a.mode, q.b.mode, "{} pairs a mode with itself", q.id);
            *counts.entry(q.a.mode.as_str()).or_default() += 1;
            *counts.entry(q.b.mode.as_str()).or_default() += 1;
        }
        for mode in ConflictMode::ALL {
            assert_eq!(counts[mode.as_str()], 12, "{mode}");
        }
    }

    #[test]
    fn statements_are_not_reused() {
        let mut texts: Vec<&str> = questions()
            .iter()
            .flat_map(|q| [q.a.text.as_str(), q.b.text.as_str()])
            .collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 60);
    }

    #[test]
    fn modes_parse_loosely() {
        assert_eq!("Competing".parse::<ConflictMode>().unwrap(), ConflictMode::Competing);
        assert_eq!("avoid".parse::<ConflictMode>().unwrap(), ConflictMode::Avoiding);
        assert!("fighting".parse::<ConflictMode>().is_err());
    }
}
