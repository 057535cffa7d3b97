mod common;

use arise_client::ClientError;
use arise_client::evaluators::{invite, open_link, progress};
use arise_core::Locale;
use arise_core::models::evaluator::{EvaluatorInvitation, EvaluatorRole, InvitationError};
use common::FakeBackend;
use uuid::Uuid;

fn invitation(name: &str, email: &str) -> EvaluatorInvitation {
    EvaluatorInvitation {
        name: name.to_string(),
        email: email.to_string(),
        role: EvaluatorRole::Peer,
    }
}

#[tokio::test]
async fn invalid_batch_sends_nothing() {
    let backend = FakeBackend::default();
    let batch = [
        invitation("Ana", "ana@example.com"),
        invitation("Ben", "ANA@example.com"),
    ];

    let err = invite(&backend, Uuid::new_v4(), &batch, "https://app.arise.io", Locale::En)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Invitation(InvitationError::DuplicateEmail { .. })));
    assert!(backend.state().evaluators.is_empty());
}

#[tokio::test]
async fn invitations_come_back_with_links() {
    let backend = FakeBackend::default();
    let id = Uuid::new_v4();
    let batch = [
        invitation("Ana", "ana@example.com"),
        invitation("Ben", "ben@example.com"),
    ];

    let sent = invite(&backend, id, &batch, "https://app.arise.io/", Locale::Fr)
        .await
        .unwrap();

    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].link, "https://app.arise.io/fr/360-evaluator/tok%200");

    let evaluator = open_link(&backend, &sent[1].link).await.unwrap();
    assert_eq!(evaluator.name, "Ben");

    let tally = progress(&backend, id).await.unwrap();
    assert_eq!(tally.total, 2);
    assert_eq!(tally.not_started, 2);
}

#[tokio::test]
async fn foreign_links_are_rejected() {
    let backend = FakeBackend::default();
    let err = open_link(&backend, "https://app.arise.io/results/42")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}
