use std::sync::LazyLock;

use super::{Seed, into_records};
use crate::insights::InsightTable;
use crate::scoring::{Band, PILLAR_SCALE};

const ALIASES: &[(&str, &str)] = &[
    ("restorative_sleep", "sleep"),
    ("diet", "nutrition"),
    ("physical_activity", "movement"),
    ("exercise", "movement"),
    ("substances", "substance_avoidance"),
    ("avoidance_of_risky_substances", "substance_avoidance"),
    ("stress", "stress_management"),
    ("social_connections", "social_connection"),
    ("relationships", "social_connection"),
];

const SEEDS: &[Seed] = &[
    // sleep
    Seed {
        capability: "sleep",
        band: Band::Critical,
        analysis: "Your answers point to insufficient or irregular sleep, which affects focus, mood and decision quality.",
        analysis_fr: Some("Vos réponses indiquent un sommeil insuffisant ou irrégulier, ce qui affecte la concentration, l'humeur et la qualité des décisions."),
        recommendation: "Fix a consistent wake-up time, stop screens an hour before bed, and talk to a professional if poor sleep persists.",
        recommendation_fr: Some("Fixez une heure de réveil régulière, arrêtez les écrans une heure avant le coucher et consultez un professionnel si le mauvais sommeil persiste."),
    },
    Seed {
        capability: "sleep",
        band: Band::Developing,
        analysis: "Your sleep is adequate most nights but becomes irregular during busy periods.",
        analysis_fr: Some("Votre sommeil est suffisant la plupart des nuits mais devient irrégulier pendant les périodes chargées."),
        recommendation: "Protect a wind-down routine even on demanding days and keep caffeine to the morning.",
        recommendation_fr: Some("Préservez une routine de détente même les jours exigeants et limitez la caféine au matin."),
    },
    Seed {
        capability: "sleep",
        band: Band::Strong,
        analysis: "You maintain healthy, restorative sleep habits.",
        analysis_fr: Some("Vous entretenez des habitudes de sommeil saines et réparatrices."),
        recommendation: "Keep your routine steady during travel and high-pressure periods.",
        recommendation_fr: Some("Maintenez votre routine lors des déplacements et des périodes de forte pression."),
    },
    // nutrition
    Seed {
        capability: "nutrition",
        band: Band::Critical,
        analysis: "Meals appear irregular or low in whole foods, which can drain energy through the day.",
        analysis_fr: Some("Vos repas semblent irréguliers ou pauvres en aliments bruts, ce qui peut réduire votre énergie au fil de la journée."),
        recommendation: "Start with one change: a vegetable at every lunch, or a planned breakfast. Drink water before reaching for snacks.",
        recommendation_fr: Some("Commencez par un seul changement : un légume à chaque déjeuner ou un petit-déjeuner planifié. Buvez de l'eau avant de grignoter."),
    },
    Seed {
        capability: "nutrition",
        band: Band::Developing,
        analysis: "Your eating habits are balanced on most days, with room to improve consistency.",
        analysis_fr: Some("Vos habitudes alimentaires sont équilibrées la plupart du temps, avec une marge de progrès sur la régularité."),
        recommendation: "Plan meals for your busiest days in advance so convenience food is not the default.",
        recommendation_fr: Some("Planifiez à l'avance les repas de vos journées les plus chargées pour ne pas dépendre des plats tout prêts."),
    },
    Seed {
        capability: "nutrition",
        band: Band::Strong,
        analysis: "You eat regularly and favour whole, varied foods.",
        analysis_fr: Some("Vous mangez régulièrement et privilégiez des aliments bruts et variés."),
        recommendation: "Keep it up and pay attention to hydration during long meetings and travel.",
        recommendation_fr: Some("Continuez ainsi et veillez à bien vous hydrater lors des longues réunions et des déplacements."),
    },
    // movement
    Seed {
        capability: "movement",
        band: Band::Critical,
        analysis: "Your days involve little physical activity and long sedentary stretches.",
        analysis_fr: Some("Vos journées comportent peu d'activité physique et de longues périodes assises."),
        recommendation: "Add a ten-minute walk after lunch and stand up every hour. Build up gradually toward 150 minutes a week.",
        recommendation_fr: Some("Ajoutez une marche de dix minutes après le déjeuner et levez-vous toutes les heures. Progressez vers 150 minutes par semaine."),
    },
    Seed {
        capability: "movement",
        band: Band::Developing,
        analysis: "You move regularly but not yet consistently enough to feel the full benefit.",
        analysis_fr: Some("Vous bougez régulièrement, mais pas encore assez pour en ressentir tous les bienfaits."),
        recommendation: "Schedule exercise like a meeting and add one session of strength or mobility work each week.",
        recommendation_fr: Some("Planifiez l'exercice comme une réunion et ajoutez chaque semaine une séance de renforcement ou de mobilité."),
    },
    Seed {
        capability: "movement",
        band: Band::Strong,
        analysis: "Physical activity is a stable part of your routine.",
        analysis_fr: Some("L'activité physique fait partie intégrante de votre routine."),
        recommendation: "Vary your activities to avoid plateaus and consider walking meetings with your team.",
        recommendation_fr: Some("Variez vos activités pour éviter la stagnation et essayez les réunions en marchant avec votre équipe."),
    },
    // substance_avoidance
    Seed {
        capability: "substance_avoidance",
        band: Band::Critical,
        analysis: "Your answers suggest regular reliance on alcohol, nicotine or other substances to cope or unwind.",
        analysis_fr: Some("Vos réponses suggèrent un recours régulier à l'alcool, à la nicotine ou à d'autres substances pour faire face ou décompresser."),
        recommendation: "Track consumption for two weeks and set alcohol-free days. Confidential support services can help if cutting back is difficult.",
        recommendation_fr: Some("Notez votre consommation pendant deux semaines et fixez des jours sans alcool. Des services d'aide confidentiels peuvent vous accompagner."),
    },
    Seed {
        capability: "substance_avoidance",
        band: Band::Developing,
        analysis: "Your use of substances is moderate but rises during stressful periods.",
        analysis_fr: Some("Votre consommation de substances est modérée mais augmente lors des périodes de stress."),
        recommendation: "Replace one habitual drink or cigarette with another way to unwind, such as a walk or a call with a friend.",
        recommendation_fr: Some("Remplacez une consommation habituelle par une autre façon de décompresser, comme une marche ou un appel à un ami."),
    },
    Seed {
        capability: "substance_avoidance",
        band: Band::Strong,
        analysis: "You avoid or strictly limit risky substances.",
        analysis_fr: Some("Vous évitez ou limitez strictement les substances à risque."),
        recommendation: "Keep these habits during social and work events.",
        recommendation_fr: Some("Conservez ces habitudes lors des événements sociaux et professionnels."),
    },
    // stress_management
    Seed {
        capability: "stress_management",
        band: Band::Critical,
        analysis: "Stress is frequent and you rarely have time to recover, which raises the risk of exhaustion.",
        analysis_fr: Some("Le stress est fréquent et vous avez rarement le temps de récupérer, ce qui augmente le risque d'épuisement."),
        recommendation: "Try a daily breathing or mindfulness practice of five minutes and discuss workload priorities with your manager.",
        recommendation_fr: Some("Essayez une pratique quotidienne de respiration ou de pleine conscience de cinq minutes et discutez des priorités avec votre responsable."),
    },
    Seed {
        capability: "stress_management",
        band: Band::Developing,
        analysis: "You have some ways to manage stress, but they slip when pressure builds.",
        analysis_fr: Some("Vous disposez de quelques moyens de gérer le stress, mais ils s'effacent quand la pression monte."),
        recommendation: "Write down the early signs that you are overloaded and agree with yourself what you will drop when they appear.",
        recommendation_fr: Some("Notez les premiers signes de surcharge et décidez à l'avance de ce que vous abandonnerez lorsqu'ils apparaissent."),
    },
    Seed {
        capability: "stress_management",
        band: Band::Strong,
        analysis: "You recognise stress early and recover well.",
        analysis_fr: Some("Vous repérez le stress tôt et récupérez bien."),
        recommendation: "Share your techniques with your team and protect them during peak periods.",
        recommendation_fr: Some("Partagez vos techniques avec votre équipe et préservez-les pendant les périodes de pointe."),
    },
    // social_connection
    Seed {
        capability: "social_connection",
        band: Band::Critical,
        analysis: "You report feeling isolated and have few people to turn to for support.",
        analysis_fr: Some("Vous déclarez vous sentir isolé et avoir peu de personnes vers qui vous tourner."),
        recommendation: "Reach out to one person this week you have lost touch with, and join a group built around an interest you enjoy.",
        recommendation_fr: Some("Recontactez cette semaine une personne que vous avez perdue de vue et rejoignez un groupe autour d'un centre d'intérêt."),
    },
    Seed {
        capability: "social_connection",
        band: Band::Developing,
        analysis: "You have supportive relationships but limited time for them.",
        analysis_fr: Some("Vous avez des relations de soutien mais peu de temps à leur consacrer."),
        recommendation: "Put regular time with friends and family in your calendar and treat it as non-negotiable.",
        recommendation_fr: Some("Inscrivez dans votre agenda des moments réguliers avec vos proches et considérez-les comme non négociables."),
    },
    Seed {
        capability: "social_connection",
        band: Band::Strong,
        analysis: "You are well connected and draw on a strong support network.",
        analysis_fr: Some("Vous êtes bien entouré et pouvez compter sur un solide réseau de soutien."),
        recommendation: "Keep investing in these relationships and offer the same support to colleagues.",
        recommendation_fr: Some("Continuez à entretenir ces relations et offrez le même soutien à vos collègues."),
    },
];

static TABLE: LazyLock<InsightTable> =
    LazyLock::new(|| InsightTable::new(PILLAR_SCALE, into_records(SEEDS), ALIASES));

/// Pillar insights for the wellness survey, keyed on the 5–25 pillar scale.
pub fn table() -> &'static InsightTable {
    &TABLE
}
