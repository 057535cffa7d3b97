//! Inviting 360° evaluators and resolving invitation links.

use arise_core::links;
use arise_core::locale::Locale;
use arise_core::models::evaluator::{
    Evaluator, EvaluatorInvitation, EvaluatorProgress, validate_invitations,
};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::Backend;
use crate::error::ClientError;

/// A created evaluator with the link to send them.
#[derive(Debug, Clone, Serialize)]
pub struct SentInvitation {
    pub evaluator: Evaluator,
    pub link: String,
}

/// Validate invitations locally, send them, and build each evaluator's link.
///
/// Nothing is sent if any invitation is invalid.
pub async fn invite<B: Backend>(
    backend: &B,
    assessment_id: Uuid,
    invitations: &[EvaluatorInvitation],
    origin: &str,
    locale: Locale,
) -> Result<Vec<SentInvitation>, ClientError> {
    validate_invitations(invitations)?;

    let evaluators = backend.invite_evaluators(assessment_id, invitations).await?;
    tracing::info!(%assessment_id, count = evaluators.len(), "invited evaluators");

    Ok(evaluators
        .into_iter()
        .map(|evaluator| {
            let link = links::localized_invitation_link(origin, locale, &evaluator.invitation_token);
            SentInvitation { evaluator, link }
        })
        .collect())
}

/// Status counts for the evaluators of an assessment.
pub async fn progress<B: Backend>(
    backend: &B,
    assessment_id: Uuid,
) -> Result<EvaluatorProgress, ClientError> {
    let evaluators = backend.list_evaluators(assessment_id).await?;
    Ok(EvaluatorProgress::tally(&evaluators))
}

/// Resolve the evaluator behind an invitation link.
pub async fn open_link<B: Backend>(backend: &B, link: &str) -> Result<Evaluator, ClientError> {
    let token = links::token_from_link(link)
        .map_err(|e| ClientError::NotFound(e.to_string()))?;
    backend.fetch_evaluator(&token).await
}
