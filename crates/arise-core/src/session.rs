//! Assessment-taking state machine.
//!
//! A [`Session`] is a plain value; every transition is
//! `Session::apply(self, Event) -> Session`. Remote calls happen outside
//! (see `arise-client`), which feeds their outcome back in as events.
//! Events that do not make sense in the current phase leave the session
//! unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::answer::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Intro,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The remote assessment record was created.
    Start { assessment_id: Uuid },
    /// An existing record was loaded with previously saved answers.
    Resume {
        assessment_id: Uuid,
        answers: BTreeMap<String, Answer>,
    },
    Select(Answer),
    SaveFailed(String),
    Next,
    Back,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
    DismissError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    question_ids: Vec<String>,
    phase: Phase,
    assessment_id: Option<Uuid>,
    current: usize,
    answers: BTreeMap<String, Answer>,
    error: Option<String>,
    submitting: bool,
}

impl Session {
    /// A fresh session on the intro screen for the given ordered questions.
    pub fn new<I, S>(question_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question_ids: question_ids.into_iter().map(Into::into).collect(),
            phase: Phase::Intro,
            assessment_id: None,
            current: 0,
            answers: BTreeMap::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn apply(mut self, event: Event) -> Self {
        match (self.phase, event) {
            (Phase::Intro, Event::Start { assessment_id }) => {
                self.phase = Phase::InProgress;
                self.assessment_id = Some(assessment_id);
                self.current = 0;
                self.error = None;
            }
            (Phase::Intro, Event::Resume { assessment_id, answers }) => {
                self.answers = answers
                    .into_iter()
                    .filter(|(id, _)| self.question_ids.contains(id))
                    .collect();
                self.phase = Phase::InProgress;
                self.assessment_id = Some(assessment_id);
                self.current = self.first_unanswered().unwrap_or(self.last_index());
                self.error = None;
            }
            (Phase::InProgress, Event::Select(answer)) => {
                if let Some(id) = self.question_ids.get(self.current) {
                    self.answers.insert(id.clone(), answer);
                    self.error = None;
                }
            }
            (Phase::InProgress, Event::SaveFailed(message)) => {
                self.error = Some(message);
            }
            (Phase::InProgress, Event::Next) => {
                if self.current + 1 < self.question_ids.len() {
                    self.current += 1;
                }
            }
            (Phase::InProgress, Event::Back) => {
                self.current = self.current.saturating_sub(1);
            }
            (Phase::InProgress, Event::SubmitStarted) => {
                if self.can_submit() {
                    self.submitting = true;
                    self.error = None;
                }
            }
            (Phase::InProgress, Event::SubmitSucceeded) => {
                if self.is_last() && self.all_answered() {
                    self.phase = Phase::Completed;
                    self.submitting = false;
                    self.error = None;
                }
            }
            (Phase::InProgress, Event::SubmitFailed(message)) => {
                self.submitting = false;
                self.error = Some(message);
            }
            (_, Event::DismissError) => {
                self.error = None;
            }
            _ => {}
        }
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn assessment_id(&self) -> Option<Uuid> {
        self.assessment_id
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question_id(&self) -> Option<&str> {
        self.question_ids.get(self.current).map(String::as_str)
    }

    /// Answer already recorded for the question on screen.
    pub fn selected(&self) -> Option<Answer> {
        self.current_question_id()
            .and_then(|id| self.answers.get(id))
            .copied()
    }

    pub fn answers(&self) -> &BTreeMap<String, Answer> {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        self.question_ids.len()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Fraction of questions answered, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.question_ids.is_empty() {
            return 0.0;
        }
        self.answers.len() as f64 / self.question_ids.len() as f64
    }

    pub fn all_answered(&self) -> bool {
        !self.question_ids.is_empty()
            && self.question_ids.iter().all(|id| self.answers.contains_key(id))
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last_index()
    }

    /// "Next" turns into "Submit" on the last question; it is enabled only
    /// once every question has an answer.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::InProgress && self.is_last() && self.all_answered() && !self.submitting
    }

    fn last_index(&self) -> usize {
        self.question_ids.len().saturating_sub(1)
    }

    fn first_unanswered(&self) -> Option<usize> {
        self.question_ids
            .iter()
            .position(|id| !self.answers.contains_key(id))
    }
}
