use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Most evaluators a single 360° assessment can invite.
pub const MAX_EVALUATORS: usize = 20;

/// Progress of an invited evaluator. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluatorStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl EvaluatorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluatorStatus::NotStarted => "not_started",
            EvaluatorStatus::InProgress => "in_progress",
            EvaluatorStatus::Completed => "completed",
        }
    }
}

/// Relationship of the evaluator to the person being assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluatorRole {
    Manager,
    Peer,
    DirectReport,
    Client,
    Other,
}

/// A third party rating the user in the 360° flow.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluator {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: EvaluatorRole,
    pub status: EvaluatorStatus,
    pub invitation_token: String,
}

impl Evaluator {
    /// Move the evaluator to `to`. Re-applying the current status is a
    /// no-op; going backwards is rejected.
    pub fn advance(&mut self, to: EvaluatorStatus) -> Result<(), CoreError> {
        if to < self.status {
            return Err(CoreError::StatusRegression {
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}

/// Request body for inviting one evaluator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluatorInvitation {
    pub name: String,
    pub email: String,
    pub role: EvaluatorRole,
}

/// First problem found in a batch of invitations. The message is shown to
/// the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvitationError {
    #[error("Add at least one evaluator")]
    Empty,

    #[error("You can invite at most {} evaluators", MAX_EVALUATORS)]
    TooMany,

    #[error("Evaluator #{index} needs a name")]
    MissingName { index: usize },

    #[error("Evaluator #{index} has an invalid email address: {email}")]
    InvalidEmail { index: usize, email: String },

    #[error("{email} is listed more than once")]
    DuplicateEmail { email: String },
}

/// Validate a batch of invitations, stopping at the first violation.
/// Indices in messages are 1-based, matching the form rows.
pub fn validate_invitations(invitations: &[EvaluatorInvitation]) -> Result<(), InvitationError> {
    if invitations.is_empty() {
        return Err(InvitationError::Empty);
    }
    if invitations.len() > MAX_EVALUATORS {
        return Err(InvitationError::TooMany);
    }

    let mut seen = HashSet::new();
    for (i, inv) in invitations.iter().enumerate() {
        let index = i + 1;
        if inv.name.trim().is_empty() {
            return Err(InvitationError::MissingName { index });
        }
        let email = inv.email.trim();
        if !EMAIL.is_match(email) {
            return Err(InvitationError::InvalidEmail {
                index,
                email: email.to_string(),
            });
        }
        if !seen.insert(email.to_ascii_lowercase()) {
            return Err(InvitationError::DuplicateEmail {
                email: email.to_string(),
            });
        }
    }
    Ok(())
}

/// Per-status counts shown on the 360° dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluatorProgress {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl EvaluatorProgress {
    pub fn tally(evaluators: &[Evaluator]) -> Self {
        evaluators.iter().fold(Self::default(), |mut acc, e| {
            acc.total += 1;
            match e.status {
                EvaluatorStatus::NotStarted => acc.not_started += 1,
                EvaluatorStatus::InProgress => acc.in_progress += 1,
                EvaluatorStatus::Completed => acc.completed += 1,
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invite(name: &str, email: &str) -> EvaluatorInvitation {
        EvaluatorInvitation {
            name: name.to_string(),
            email: email.to_string(),
            role: EvaluatorRole::Peer,
        }
    }

    fn evaluator(status: EvaluatorStatus) -> Evaluator {
        Evaluator {
            id: Uuid::new_v4(),
            assessment_id: Uuid::new_v4(),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            role: EvaluatorRole::Manager,
            status,
            invitation_token: "tok".to_string(),
        }
    }

    #[test]
    fn first_violation_wins() {
        let batch = vec![
            invite("Ana", "ana@example.com"),
            invite("", "not-an-email"),
            invite("Ben", "ana@example.com"),
        ];
        assert_eq!(
            validate_invitations(&batch),
            Err(InvitationError::MissingName { index: 2 })
        );
    }

    #[test]
    fn duplicate_emails_are_case_insensitive() {
        let batch = vec![invite("Ana", "ana@example.com"), invite("Ben", "ANA@example.com")];
        assert!(matches!(
            validate_invitations(&batch),
            Err(InvitationError::DuplicateEmail { .. })
        ));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert_eq!(validate_invitations(&[]), Err(InvitationError::Empty));
        assert!(matches!(
            validate_invitations(&[invite("Ana", "ana@example")]),
            Err(InvitationError::InvalidEmail { index: 1, .. })
        ));
        assert!(validate_invitations(&[invite("Ana", " ana@example.com ")]).is_ok());
    }

    #[test]
    fn status_only_moves_forward() {
        let mut e = evaluator(EvaluatorStatus::InProgress);
        assert!(e.advance(EvaluatorStatus::InProgress).is_ok());
        assert!(e.advance(EvaluatorStatus::NotStarted).is_err());
        assert!(e.advance(EvaluatorStatus::Completed).is_ok());
        assert_eq!(e.status, EvaluatorStatus::Completed);
    }

    #[test]
    fn tally_counts_each_status() {
        let list = vec![
            evaluator(EvaluatorStatus::Completed),
            evaluator(EvaluatorStatus::Completed),
            evaluator(EvaluatorStatus::NotStarted),
        ];
        let p = EvaluatorProgress::tally(&list);
        assert_eq!(p.total, 3);
        assert_eq!(p.completed, 2);
        assert_eq!(p.not_started, 1);
        assert_eq!(p.in_progress, 0);
    }
}
