//! Couples the pure [`Session`] state machine to a [`Backend`].
//!
//! Every remote call races the driver's cancellation token. Once the token
//! fires, outcomes are dropped instead of being applied to the session.

use std::collections::BTreeMap;
use std::future::Future;

use arise_core::models::answer::{Answer, AnswerSubmission};
use arise_core::models::assessment::{AssessmentKind, AssessmentResult};
use arise_core::session::{Event, Phase, Session};
use arise_instruments::{Instrument, get_instrument};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::backend::Backend;
use crate::config::RetryPolicy;
use crate::error::ClientError;
use crate::retry::fetch_results_with_retry;

pub struct SessionDriver<B> {
    backend: B,
    instrument: Box<dyn Instrument>,
    session: Session,
    cancel: CancellationToken,
}

impl<B: Backend> SessionDriver<B> {
    pub fn new(backend: B, kind: AssessmentKind) -> Self {
        let instrument = get_instrument(kind);
        let session = instrument.new_session();
        Self {
            backend,
            instrument,
            session,
            cancel: CancellationToken::new(),
        }
    }

    /// Share a parent token, e.g. one owned by the view hosting the flow.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn kind(&self) -> AssessmentKind {
        self.instrument.kind()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Abandon all in-flight and future remote calls.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Create the remote record and leave the intro screen.
    pub async fn start(&mut self) -> Result<Uuid, ClientError> {
        let kind = self.kind();
        let assessment = self.guarded(self.backend.create_assessment(kind)).await?;
        tracing::info!(assessment_id = %assessment.id, %kind, "assessment started");
        self.apply(Event::Start {
            assessment_id: assessment.id,
        });
        Ok(assessment.id)
    }

    /// Continue an existing assessment from its saved answers.
    pub async fn resume(&mut self, assessment_id: Uuid) -> Result<(), ClientError> {
        let saved = self.guarded(self.backend.load_answers(assessment_id)).await?;
        let answers: BTreeMap<String, Answer> = saved
            .into_iter()
            .map(|s| (s.question_id, s.answer_value))
            .collect();
        tracing::info!(%assessment_id, saved = answers.len(), "assessment resumed");
        self.apply(Event::Resume {
            assessment_id,
            answers,
        });
        Ok(())
    }

    /// Record an answer for the current question and save it.
    ///
    /// The answer is kept locally even when saving fails; the failure shows
    /// as the session's error banner and does not block navigation.
    pub async fn select(&mut self, answer: Answer) -> Result<(), ClientError> {
        match self.session.phase() {
            Phase::InProgress => {}
            Phase::Completed => return Err(ClientError::AlreadySubmitted),
            Phase::Intro => return Err(ClientError::NotStarted),
        }
        let (Some(assessment_id), Some(question_id)) = (
            self.session.assessment_id(),
            self.session.current_question_id().map(str::to_string),
        ) else {
            return Err(ClientError::NotStarted);
        };

        let candidate = BTreeMap::from([(question_id.clone(), answer)]);
        if let Some(issue) = self.instrument.validate_answers(&candidate).into_iter().next() {
            return Err(ClientError::InvalidAnswer(issue.message));
        }

        self.apply(Event::Select(answer));

        let submission = AnswerSubmission {
            question_id,
            answer_value: answer,
        };
        match self
            .guarded(self.backend.save_answer(assessment_id, &submission))
            .await
        {
            Ok(()) => Ok(()),
            Err(ClientError::Cancelled) => Err(ClientError::Cancelled),
            Err(e) => {
                tracing::warn!(%assessment_id, question_id = %submission.question_id, error = %e, "failed to save answer");
                self.apply(Event::SaveFailed(e.user_message()));
                Ok(())
            }
        }
    }

    pub fn next(&mut self) {
        self.apply(Event::Next);
    }

    pub fn back(&mut self) {
        self.apply(Event::Back);
    }

    pub fn dismiss_error(&mut self) {
        self.apply(Event::DismissError);
    }

    /// Submit every answer. The session completes only if the backend
    /// accepts the submission.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let Some(assessment_id) = self.session.assessment_id() else {
            return Err(ClientError::NotStarted);
        };
        if !self.session.can_submit() {
            return Err(ClientError::Incomplete {
                answered: self.session.answers().len(),
                total: self.session.question_count(),
            });
        }

        let answers = self.submissions();
        self.apply(Event::SubmitStarted);
        match self.guarded(self.backend.submit(assessment_id, &answers)).await {
            Ok(()) => {
                tracing::info!(%assessment_id, answers = answers.len(), "assessment submitted");
                self.apply(Event::SubmitSucceeded);
                Ok(())
            }
            Err(ClientError::Cancelled) => {
                self.apply(Event::SubmitFailed(ClientError::Cancelled.user_message()));
                Err(ClientError::Cancelled)
            }
            Err(e) => {
                tracing::warn!(%assessment_id, error = %e, "submission failed");
                self.apply(Event::SubmitFailed(e.user_message()));
                Err(e)
            }
        }
    }

    /// Fetch results for the completed assessment, retrying while the
    /// backend finishes scoring.
    pub async fn results(&self, policy: &RetryPolicy) -> Result<AssessmentResult, ClientError> {
        let assessment_id = self.session.assessment_id().ok_or(ClientError::NotStarted)?;
        fetch_results_with_retry(&self.backend, assessment_id, policy, &self.cancel).await
    }

    /// Answers in question order, as the backend expects them.
    fn submissions(&self) -> Vec<AnswerSubmission> {
        let answers = self.session.answers();
        self.instrument
            .question_ids()
            .into_iter()
            .filter_map(|id| {
                answers.get(id).map(|answer| AnswerSubmission {
                    question_id: id.to_string(),
                    answer_value: *answer,
                })
            })
            .collect()
    }

    fn apply(&mut self, event: Event) {
        self.session = self.session.clone().apply(event);
    }

    async fn guarded<T>(
        &self,
        call: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ClientError> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ClientError::Cancelled),
            outcome = call => outcome,
        }
    }
}
