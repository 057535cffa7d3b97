use std::sync::LazyLock;

use arise_core::models::assessment::AssessmentKind;
use arise_core::models::question::Question;

use super::{dimension, likert_questions};
use crate::scale::ScaleKind;
use crate::{AnswerFormat, Dimension, Instrument};

/// Wellness survey: 30 frequency-rated items, five per pillar. A pillar
/// score is the sum of its five ratings (5–25).
pub struct Wellness;

/// Items per pillar.
pub const ITEMS_PER_PILLAR: usize = 5;

const ROWS: &[(&str, &str, &str)] = &[
    ("sleep", "I sleep seven to nine hours a night.", "Je dors entre sept et neuf heures par nuit."),
    ("sleep", "I go to bed and wake up at roughly the same time every day.", "Je me couche et me lève à peu près à la même heure chaque jour."),
    ("sleep", "I wake up feeling rested.", "Je me réveille en me sentant reposé."),
    ("sleep", "I avoid screens in the hour before going to sleep.", "J'évite les écrans dans l'heure qui précède le coucher."),
    ("sleep", "I fall asleep easily without relying on sleep aids.", "Je m'endors facilement sans recourir à des somnifères."),
    ("nutrition", "I eat at least five portions of fruit and vegetables a day.", "Je mange au moins cinq portions de fruits et légumes par jour."),
    ("nutrition", "I eat regular meals rather than skipping them.", "Je prends des repas réguliers plutôt que d'en sauter."),
    ("nutrition", "I choose whole foods over processed foods.", "Je privilégie les aliments bruts aux aliments transformés."),
    ("nutrition", "I drink enough water throughout the day.", "Je bois suffisamment d'eau tout au long de la journée."),
    ("nutrition", "I limit sugary snacks and drinks.", "Je limite les collations et boissons sucrées."),
    ("movement", "I do at least 150 minutes of moderate activity a week.", "Je pratique au moins 150 minutes d'activité modérée par semaine."),
    ("movement", "I break up long periods of sitting.", "J'interromps les longues périodes assises."),
    ("movement", "I include strength or mobility exercises in my week.", "J'intègre des exercices de renforcement ou de mobilité à ma semaine."),
    ("movement", "I walk or cycle for short trips when I can.", "Je marche ou prends le vélo pour les petits trajets quand je le peux."),
    ("movement", "I enjoy the physical activity I do.", "J'apprécie l'activité physique que je pratique."),
    ("substance_avoidance", "I keep alcohol within recommended limits.", "Je maintiens ma consommation d'alcool dans les limites recommandées."),
    ("substance_avoidance", "I avoid tobacco and nicotine products.", "J'évite le tabac et les produits à base de nicotine."),
    ("substance_avoidance", "I do not rely on substances to relax or unwind.", "Je ne dépends pas de substances pour me détendre."),
    ("substance_avoidance", "I keep caffeine to moderate amounts.", "Je consomme de la caféine avec modération."),
    ("substance_avoidance", "I have alcohol-free days every week.", "J'ai des jours sans alcool chaque semaine."),
    ("stress_management", "I notice early signs of stress in myself.", "Je remarque les premiers signes de stress chez moi."),
    ("stress_management", "I take short breaks to recover during the workday.", "Je fais de courtes pauses pour récupérer pendant la journée."),
    ("stress_management", "I use a relaxation technique such as breathing or meditation.", "J'utilise une technique de relaxation comme la respiration ou la méditation."),
    ("stress_management", "I can switch off from work in the evening.", "J'arrive à décrocher du travail le soir."),
    ("stress_management", "I feel in control of my workload.", "Je me sens maître de ma charge de travail."),
    ("social_connection", "I spend quality time with friends or family each week.", "Je passe du temps de qualité avec mes amis ou ma famille chaque semaine."),
    ("social_connection", "I have someone I can talk to when things are hard.", "J'ai quelqu'un à qui parler quand les choses sont difficiles."),
    ("social_connection", "I feel a sense of belonging at work.", "Je ressens un sentiment d'appartenance au travail."),
    ("social_connection", "I take part in community or group activities.", "Je participe à des activités collectives ou associatives."),
    ("social_connection", "I make time to reconnect with people I have lost touch with.", "Je prends le temps de renouer avec des personnes perdues de vue."),
];

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| likert_questions("wellness", ROWS));

static DIMENSIONS: LazyLock<Vec<Dimension>> = LazyLock::new(|| {
    vec![
        dimension("sleep", "Sleep", "Sommeil", Some("Duration, regularity and quality of sleep")),
        dimension("nutrition", "Nutrition", "Nutrition", Some("Regular, balanced eating and hydration")),
        dimension("movement", "Movement", "Mouvement", Some("Physical activity and time spent sedentary")),
        dimension(
            "substance_avoidance",
            "Substance Avoidance",
            "Évitement des substances",
            Some("Alcohol, nicotine and other risky substances"),
        ),
        dimension(
            "stress_management",
            "Stress Management",
            "Gestion du stress",
            Some("Recognising stress and recovering from it"),
        ),
        dimension(
            "social_connection",
            "Social Connection",
            "Lien social",
            Some("Supportive relationships and belonging"),
        ),
    ]
});

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

impl Instrument for Wellness {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Wellness
    }

    fn name(&self) -> &str {
        "Wellness Survey"
    }

    fn dimensions(&self) -> &[Dimension] {
        &DIMENSIONS
    }

    fn question_ids(&self) -> Vec<&str> {
        QUESTIONS.iter().map(|q| q.id.as_str()).collect()
    }

    fn answer_format(&self) -> Option<AnswerFormat> {
        Some(AnswerFormat::Likert(ScaleKind::Frequency))
    }
}
