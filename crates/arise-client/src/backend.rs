use std::future::Future;

use arise_core::models::answer::AnswerSubmission;
use arise_core::models::assessment::{Assessment, AssessmentKind, AssessmentResult};
use arise_core::models::evaluator::{Evaluator, EvaluatorInvitation};
use uuid::Uuid;

use crate::error::ClientError;

/// Remote operations the assessment flow depends on.
///
/// [`crate::http::HttpBackend`] is the production implementation; tests
/// swap in an in-memory one.
pub trait Backend: Send + Sync {
    fn create_assessment(
        &self,
        kind: AssessmentKind,
    ) -> impl Future<Output = Result<Assessment, ClientError>> + Send;

    /// Answers already saved for an assessment, used to resume.
    fn load_answers(
        &self,
        assessment_id: Uuid,
    ) -> impl Future<Output = Result<Vec<AnswerSubmission>, ClientError>> + Send;

    fn save_answer(
        &self,
        assessment_id: Uuid,
        answer: &AnswerSubmission,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn submit(
        &self,
        assessment_id: Uuid,
        answers: &[AnswerSubmission],
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Scored results. `NotFound` while the backend is still scoring.
    fn fetch_results(
        &self,
        assessment_id: Uuid,
    ) -> impl Future<Output = Result<AssessmentResult, ClientError>> + Send;

    fn invite_evaluators(
        &self,
        assessment_id: Uuid,
        invitations: &[EvaluatorInvitation],
    ) -> impl Future<Output = Result<Vec<Evaluator>, ClientError>> + Send;

    fn list_evaluators(
        &self,
        assessment_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Evaluator>, ClientError>> + Send;

    fn fetch_evaluator(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Evaluator, ClientError>> + Send;
}
