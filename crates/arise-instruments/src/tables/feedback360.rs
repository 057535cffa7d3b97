use std::sync::LazyLock;

use super::{Seed, into_records};
use crate::insights::InsightTable;
use crate::scoring::{Band, RATING_SCALE};

/// Names the backend and older question sets use for the same capability.
const ALIASES: &[(&str, &str)] = &[
    ("problem_solving_and_decision_making", "problem_solving"),
    ("decision_making", "problem_solving"),
    ("communication_skills", "communication"),
    ("leadership", "leadership_style"),
    ("team_building", "team_culture"),
    ("stress", "stress_management"),
    ("change", "change_management"),
    ("change_leadership", "change_management"),
];

const SEEDS: &[Seed] = &[
    // communication
    Seed {
        capability: "communication",
        band: Band::Critical,
        analysis: "Evaluators report that your messages are often unclear or arrive too late. Team members may be missing context they need to act.",
        analysis_fr: Some("Les évaluateurs indiquent que vos messages sont souvent peu clairs ou arrivent trop tard. Votre équipe manque peut-être du contexte nécessaire pour agir."),
        recommendation: "Set a weekly update ritual with your team and confirm understanding by asking people to restate key decisions in their own words.",
        recommendation_fr: Some("Instaurez un point hebdomadaire avec votre équipe et vérifiez la compréhension en demandant de reformuler les décisions clés."),
    },
    Seed {
        capability: "communication",
        band: Band::Developing,
        analysis: "Your communication is generally understood, but evaluators see inconsistency across audiences and in difficult conversations.",
        analysis_fr: Some("Votre communication est généralement comprise, mais les évaluateurs constatent des écarts selon les publics et lors des conversations difficiles."),
        recommendation: "Prepare high-stakes conversations with a short outline: the message, the evidence, and the ask. Request feedback right after.",
        recommendation_fr: Some("Préparez les conversations importantes avec un plan court : le message, les faits et la demande. Sollicitez un retour juste après."),
    },
    Seed {
        capability: "communication",
        band: Band::Strong,
        analysis: "Evaluators describe you as clear, timely and approachable. People know what is expected of them and feel heard.",
        analysis_fr: Some("Les évaluateurs vous décrivent comme clair, réactif et accessible. Chacun sait ce qu'on attend de lui et se sent écouté."),
        recommendation: "Use this strength to coach others: share your meeting and update templates, and mentor a colleague on structured messaging.",
        recommendation_fr: Some("Mettez cette force au service des autres : partagez vos modèles de réunion et accompagnez un collègue sur la structuration de ses messages."),
    },
    // leadership_style
    Seed {
        capability: "leadership_style",
        band: Band::Critical,
        analysis: "Your leadership approach is perceived as either too directive or too distant. Evaluators are unsure how decisions are made.",
        analysis_fr: Some("Votre style de leadership est perçu comme trop directif ou trop distant. Les évaluateurs ne savent pas comment les décisions sont prises."),
        recommendation: "Make your decision process explicit: say when you are deciding alone, consulting, or delegating, and why.",
        recommendation_fr: Some("Rendez votre processus de décision explicite : précisez quand vous décidez seul, consultez ou déléguez, et pourquoi."),
    },
    Seed {
        capability: "leadership_style",
        band: Band::Developing,
        analysis: "You adapt your style in some situations, but evaluators would like more delegation and more visible trust.",
        analysis_fr: Some("Vous adaptez votre style dans certaines situations, mais les évaluateurs souhaitent davantage de délégation et de confiance visible."),
        recommendation: "Pick one recurring responsibility to delegate fully this quarter and agree on check-in points up front.",
        recommendation_fr: Some("Choisissez une responsabilité récurrente à déléguer entièrement ce trimestre et convenez dès le départ des points de suivi."),
    },
    Seed {
        capability: "leadership_style",
        band: Band::Strong,
        analysis: "Evaluators see you as a leader who adapts to people and context, balancing direction with autonomy.",
        analysis_fr: Some("Les évaluateurs vous voient comme un leader qui s'adapte aux personnes et au contexte, en équilibrant direction et autonomie."),
        recommendation: "Take on a stretch role that widens your scope, such as leading a cross-functional initiative.",
        recommendation_fr: Some("Acceptez un rôle stimulant qui élargit votre périmètre, par exemple piloter une initiative transverse."),
    },
    // team_culture
    Seed {
        capability: "team_culture",
        band: Band::Critical,
        analysis: "Evaluators describe low trust and limited collaboration. Conflicts may be avoided rather than resolved.",
        analysis_fr: Some("Les évaluateurs décrivent un faible niveau de confiance et peu de collaboration. Les conflits sont peut-être évités plutôt que résolus."),
        recommendation: "Hold a team session to agree on working norms and revisit them monthly. Recognise collaborative behaviour publicly.",
        recommendation_fr: Some("Organisez une séance d'équipe pour définir des règles de fonctionnement et revoyez-les chaque mois. Valorisez publiquement la collaboration."),
    },
    Seed {
        capability: "team_culture",
        band: Band::Developing,
        analysis: "The team works well day to day, but evaluators see room for more psychological safety and shared ownership.",
        analysis_fr: Some("L'équipe fonctionne bien au quotidien, mais les évaluateurs voient une marge de progrès en sécurité psychologique et en responsabilité partagée."),
        recommendation: "Invite dissent explicitly in meetings and rotate facilitation so more voices shape decisions.",
        recommendation_fr: Some("Sollicitez explicitement les avis divergents en réunion et faites tourner l'animation pour que davantage de voix comptent."),
    },
    Seed {
        capability: "team_culture",
        band: Band::Strong,
        analysis: "You have built a team where people trust each other, share credit and raise issues early.",
        analysis_fr: Some("Vous avez bâti une équipe où chacun fait confiance aux autres, partage les succès et signale les problèmes tôt."),
        recommendation: "Document what makes your team work and share it with peer managers during onboarding.",
        recommendation_fr: Some("Formalisez ce qui fait fonctionner votre équipe et partagez-le avec vos pairs managers lors de leur intégration."),
    },
    // problem_solving
    Seed {
        capability: "problem_solving",
        band: Band::Critical,
        analysis: "Evaluators observe decisions that are delayed or made without enough analysis, and recurring problems that are not addressed at the root.",
        analysis_fr: Some("Les évaluateurs observent des décisions retardées ou prises sans analyse suffisante, et des problèmes récurrents non traités à la racine."),
        recommendation: "Use a simple root-cause method (such as the five whys) on the next recurring issue and share the findings with your team.",
        recommendation_fr: Some("Appliquez une méthode simple d'analyse des causes (comme les cinq pourquoi) au prochain problème récurrent et partagez les conclusions."),
    },
    Seed {
        capability: "problem_solving",
        band: Band::Developing,
        analysis: "You solve problems effectively when the path is clear, but evaluators see hesitation when information is incomplete.",
        analysis_fr: Some("Vous résolvez efficacement les problèmes quand la voie est claire, mais les évaluateurs notent une hésitation face à l'information incomplète."),
        recommendation: "Set a decision deadline for ambiguous issues and state the assumptions you are making so they can be revisited.",
        recommendation_fr: Some("Fixez une échéance de décision pour les sujets ambigus et énoncez vos hypothèses afin de pouvoir les réexaminer."),
    },
    Seed {
        capability: "problem_solving",
        band: Band::Strong,
        analysis: "Evaluators trust your judgement: you frame problems well, weigh options and decide at the right pace.",
        analysis_fr: Some("Les évaluateurs font confiance à votre jugement : vous cadrez bien les problèmes, pesez les options et décidez au bon rythme."),
        recommendation: "Involve team members in your reasoning so they build the same capability, and delegate more decisions to them.",
        recommendation_fr: Some("Associez votre équipe à votre raisonnement pour qu'elle développe la même capacité, et déléguez-lui davantage de décisions."),
    },
    // stress_management
    Seed {
        capability: "stress_management",
        band: Band::Critical,
        analysis: "Under pressure, evaluators notice visible tension that affects the team's climate and your decisions.",
        analysis_fr: Some("Sous pression, les évaluateurs remarquent une tension visible qui affecte le climat de l'équipe et vos décisions."),
        recommendation: "Identify your top three stress triggers and plan a concrete response for each. Protect recovery time in your calendar.",
        recommendation_fr: Some("Identifiez vos trois principaux déclencheurs de stress et prévoyez une réponse concrète pour chacun. Protégez des temps de récupération dans votre agenda."),
    },
    Seed {
        capability: "stress_management",
        band: Band::Developing,
        analysis: "You usually stay composed, but prolonged pressure shows in shorter patience and reduced availability.",
        analysis_fr: Some("Vous restez généralement calme, mais une pression prolongée se traduit par moins de patience et une disponibilité réduite."),
        recommendation: "Build short resets into intense periods and tell your team how you prefer to be supported when workload peaks.",
        recommendation_fr: Some("Intégrez de courtes pauses pendant les périodes intenses et indiquez à votre équipe comment vous soutenir lors des pics de charge."),
    },
    Seed {
        capability: "stress_management",
        band: Band::Strong,
        analysis: "Evaluators see you as a calming presence who keeps perspective and protects the team during difficult periods.",
        analysis_fr: Some("Les évaluateurs vous perçoivent comme une présence apaisante qui garde du recul et protège l'équipe dans les périodes difficiles."),
        recommendation: "Share the habits that keep you steady and watch for signs of strain in others.",
        recommendation_fr: Some("Partagez les habitudes qui vous aident à rester serein et soyez attentif aux signes de tension chez les autres."),
    },
    // change_management
    Seed {
        capability: "change_management",
        band: Band::Critical,
        analysis: "Changes you lead are experienced as abrupt or poorly explained, and evaluators see resistance that is not addressed.",
        analysis_fr: Some("Les changements que vous menez sont vécus comme brusques ou mal expliqués, et les évaluateurs constatent des résistances non traitées."),
        recommendation: "Before the next change, explain the why, what stays the same and what support people will get. Hold a follow-up two weeks later.",
        recommendation_fr: Some("Avant le prochain changement, expliquez le pourquoi, ce qui ne change pas et le soutien prévu. Organisez un suivi deux semaines après."),
    },
    Seed {
        capability: "change_management",
        band: Band::Developing,
        analysis: "You communicate change clearly, but evaluators would like more involvement in shaping how it is implemented.",
        analysis_fr: Some("Vous communiquez clairement sur le changement, mais les évaluateurs aimeraient être davantage associés à sa mise en œuvre."),
        recommendation: "Involve early adopters in designing the rollout and give them a visible role in supporting their peers.",
        recommendation_fr: Some("Impliquez les premiers volontaires dans la conception du déploiement et donnez-leur un rôle visible auprès de leurs pairs."),
    },
    Seed {
        capability: "change_management",
        band: Band::Strong,
        analysis: "Evaluators see you as a credible change leader who builds momentum while acknowledging what people lose.",
        analysis_fr: Some("Les évaluateurs vous voient comme un leader du changement crédible, qui crée une dynamique tout en reconnaissant ce que les gens perdent."),
        recommendation: "Volunteer to sponsor an organisation-wide change and mentor managers who are leading change for the first time.",
        recommendation_fr: Some("Proposez-vous comme sponsor d'un changement à l'échelle de l'organisation et accompagnez les managers qui mènent leur premier changement."),
    },
];

static TABLE: LazyLock<InsightTable> =
    LazyLock::new(|| InsightTable::new(RATING_SCALE, into_records(SEEDS), ALIASES));

/// Capability insights for 360° feedback, keyed on the 1–5 rating scale.
pub fn table() -> &'static InsightTable {
    &TABLE
}
