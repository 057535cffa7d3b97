#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use arise_client::{Backend, ClientError};
use arise_core::models::answer::AnswerSubmission;
use arise_core::models::assessment::{
    Assessment, AssessmentKind, AssessmentResult, AssessmentStatus, Scores,
};
use arise_core::models::evaluator::{Evaluator, EvaluatorInvitation, EvaluatorStatus};
use uuid::Uuid;

#[derive(Default)]
pub struct State {
    pub created: Vec<Assessment>,
    pub saved: Vec<AnswerSubmission>,
    pub stored_answers: Vec<AnswerSubmission>,
    pub submitted: Option<Vec<AnswerSubmission>>,
    pub fail_saves: bool,
    pub fail_submit: bool,
    /// `fetch_results` answers NotFound this many times before succeeding.
    pub pending_results: u32,
    pub result_calls: u32,
    pub scores: Scores,
    pub evaluators: Vec<Evaluator>,
}

/// In-memory backend recording every call.
#[derive(Default)]
pub struct FakeBackend {
    pub state: Mutex<State>,
}

impl FakeBackend {
    pub fn with(f: impl FnOnce(&mut State)) -> Self {
        let backend = Self::default();
        f(&mut backend.state.lock().unwrap());
        backend
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

impl Backend for FakeBackend {
    async fn create_assessment(&self, kind: AssessmentKind) -> Result<Assessment, ClientError> {
        let assessment = Assessment {
            id: Uuid::new_v4(),
            kind,
            status: AssessmentStatus::Draft,
            created_at: jiff::Timestamp::now(),
            completed_at: None,
        };
        self.state().created.push(assessment.clone());
        Ok(assessment)
    }

    async fn load_answers(&self, _: Uuid) -> Result<Vec<AnswerSubmission>, ClientError> {
        Ok(self.state().stored_answers.clone())
    }

    async fn save_answer(&self, _: Uuid, answer: &AnswerSubmission) -> Result<(), ClientError> {
        let mut state = self.state();
        if state.fail_saves {
            return Err(ClientError::Api {
                status: 503,
                message: "Service unavailable".to_string(),
            });
        }
        state.saved.push(answer.clone());
        Ok(())
    }

    async fn submit(&self, _: Uuid, answers: &[AnswerSubmission]) -> Result<(), ClientError> {
        let mut state = self.state();
        if state.fail_submit {
            return Err(ClientError::Api {
                status: 422,
                message: "answers: incomplete".to_string(),
            });
        }
        state.submitted = Some(answers.to_vec());
        Ok(())
    }

    async fn fetch_results(&self, assessment_id: Uuid) -> Result<AssessmentResult, ClientError> {
        let mut state = self.state();
        state.result_calls += 1;
        if state.pending_results > 0 {
            state.pending_results -= 1;
            return Err(ClientError::NotFound("Results not ready".to_string()));
        }
        let kind = state
            .created
            .last()
            .map(|a| a.kind)
            .unwrap_or(AssessmentKind::Tki);
        Ok(AssessmentResult {
            assessment_id,
            kind,
            scores: state.scores.clone(),
            insights: serde_json::Value::Null,
            recommendations: Vec::new(),
        })
    }

    async fn invite_evaluators(
        &self,
        assessment_id: Uuid,
        invitations: &[EvaluatorInvitation],
    ) -> Result<Vec<Evaluator>, ClientError> {
        let created: Vec<Evaluator> = invitations
            .iter()
            .enumerate()
            .map(|(i, inv)| Evaluator {
                id: Uuid::new_v4(),
                assessment_id,
                name: inv.name.clone(),
                email: inv.email.clone(),
                role: inv.role,
                status: EvaluatorStatus::NotStarted,
                invitation_token: format!("tok {i}"),
            })
            .collect();
        self.state().evaluators.extend(created.clone());
        Ok(created)
    }

    async fn list_evaluators(&self, _: Uuid) -> Result<Vec<Evaluator>, ClientError> {
        Ok(self.state().evaluators.clone())
    }

    async fn fetch_evaluator(&self, token: &str) -> Result<Evaluator, ClientError> {
        self.state()
            .evaluators
            .iter()
            .find(|e| e.invitation_token == token)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("no evaluator for {token}")))
    }
}

pub fn tki_scores() -> Scores {
    Scores {
        mode_scores: Some(BTreeMap::from([
            ("competing".to_string(), 3.0),
            ("collaborating".to_string(), 9.0),
            ("compromising".to_string(), 7.0),
            ("avoiding".to_string(), 5.0),
            ("accommodating".to_string(), 6.0),
        ])),
        dominant_mode: Some("collaborating".to_string()),
        ..Scores::default()
    }
}
