use std::sync::LazyLock;

use arise_core::models::assessment::AssessmentKind;
use arise_core::models::question::{Question, Resource};

use super::{dimension, likert_questions};
use crate::scale::ScaleKind;
use crate::{AnswerFormat, Dimension, Instrument};

/// 360° feedback: 30 agreement-rated statements about the person being
/// assessed, five per leadership capability. Capability scores are mean
/// ratings (1–5) across evaluators.
pub struct Feedback360;

const ROWS: &[(&str, &str, &str)] = &[
    ("communication", "Communicates expectations clearly.", "Communique clairement ses attentes."),
    ("communication", "Listens actively without interrupting.", "Écoute activement sans interrompre."),
    ("communication", "Shares information in a timely way.", "Partage l'information en temps utile."),
    ("communication", "Adapts the message to the audience.", "Adapte son message à son public."),
    ("communication", "Gives constructive feedback regularly.", "Donne régulièrement un retour constructif."),
    ("leadership_style", "Sets a clear direction for the team.", "Fixe une direction claire pour l'équipe."),
    ("leadership_style", "Delegates responsibility with appropriate trust.", "Délègue les responsabilités avec une confiance appropriée."),
    ("leadership_style", "Adapts leadership style to the situation.", "Adapte son style de leadership à la situation."),
    ("leadership_style", "Leads by example.", "Montre l'exemple."),
    ("leadership_style", "Supports the development of team members.", "Soutient le développement des membres de l'équipe."),
    ("team_culture", "Builds trust within the team.", "Instaure la confiance au sein de l'équipe."),
    ("team_culture", "Encourages collaboration across the team.", "Encourage la collaboration dans l'équipe."),
    ("team_culture", "Recognises the contributions of others.", "Reconnaît les contributions des autres."),
    ("team_culture", "Addresses conflict constructively.", "Traite les conflits de manière constructive."),
    ("team_culture", "Makes it safe to raise concerns or disagree.", "Permet d'exprimer des inquiétudes ou un désaccord en toute sécurité."),
    ("problem_solving", "Analyses problems before acting.", "Analyse les problèmes avant d'agir."),
    ("problem_solving", "Makes timely decisions.", "Prend des décisions en temps opportun."),
    ("problem_solving", "Considers several options before deciding.", "Envisage plusieurs options avant de décider."),
    ("problem_solving", "Involves the right people in decisions.", "Implique les bonnes personnes dans les décisions."),
    ("problem_solving", "Learns from mistakes and adjusts.", "Tire les leçons de ses erreurs et s'ajuste."),
    ("stress_management", "Stays calm under pressure.", "Reste calme sous pression."),
    ("stress_management", "Manages workload without passing stress onto others.", "Gère sa charge de travail sans reporter son stress sur les autres."),
    ("stress_management", "Maintains a healthy work-life balance.", "Maintient un bon équilibre entre vie professionnelle et personnelle."),
    ("stress_management", "Recovers quickly from setbacks.", "Se remet rapidement des revers."),
    ("stress_management", "Notices signs of stress in the team.", "Remarque les signes de stress dans l'équipe."),
    ("change_management", "Explains the reasons for change.", "Explique les raisons du changement."),
    ("change_management", "Involves people in shaping change.", "Implique les personnes dans la conception du changement."),
    ("change_management", "Supports people through uncertainty.", "Accompagne les personnes dans l'incertitude."),
    ("change_management", "Adapts quickly to new circumstances.", "S'adapte rapidement aux nouvelles circonstances."),
    ("change_management", "Follows through on change until it sticks.", "Assure le suivi du changement jusqu'à son ancrage."),
];

/// Learning resources attached to individual statements, by question id.
const RESOURCES: &[(&str, &str, &str)] = &[
    ("feedback360_02", "/resources/communication/active-listening", "Active listening in practice"),
    ("feedback360_05", "/resources/communication/feedback-models", "Giving feedback: the SBI model"),
    ("feedback360_07", "/resources/leadership/delegation", "Delegation levels"),
    ("feedback360_14", "/resources/team/conflict", "Turning conflict into progress"),
    ("feedback360_15", "/resources/team/psychological-safety", "Building psychological safety"),
    ("feedback360_16", "/resources/decisions/root-cause", "Root-cause analysis"),
    ("feedback360_21", "/resources/wellbeing/pressure", "Staying composed under pressure"),
    ("feedback360_26", "/resources/change/why", "Communicating the why of change"),
];

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    let mut questions = likert_questions("feedback360", ROWS);
    for q in &mut questions {
        q.resources = RESOURCES
            .iter()
            .filter(|(id, _, _)| *id == q.id)
            .map(|(_, url, text)| Resource {
                url: url.to_string(),
                text: text.to_string(),
            })
            .collect();
    }
    questions
});

static DIMENSIONS: LazyLock<Vec<Dimension>> = LazyLock::new(|| {
    vec![
        dimension("communication", "Communication", "Communication", None),
        dimension("leadership_style", "Leadership Style", "Style de leadership", None),
        dimension("team_culture", "Team Culture", "Culture d'équipe", None),
        dimension(
            "problem_solving",
            "Problem-Solving & Decision-Making",
            "Résolution de problèmes et prise de décision",
            None,
        ),
        dimension("stress_management", "Stress Management", "Gestion du stress", None),
        dimension("change_management", "Change Management", "Conduite du changement", None),
    ]
});

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

impl Instrument for Feedback360 {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Feedback360
    }

    fn name(&self) -> &str {
        "360° Feedback"
    }

    fn dimensions(&self) -> &[Dimension] {
        &DIMENSIONS
    }

    fn question_ids(&self) -> Vec<&str> {
        QUESTIONS.iter().map(|q| q.id.as_str()).collect()
    }

    fn answer_format(&self) -> Option<AnswerFormat> {
        Some(AnswerFormat::Likert(ScaleKind::Agreement))
    }
}
