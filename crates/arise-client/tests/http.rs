use std::time::Duration;

use arise_client::http::HttpBackend;
use arise_client::{Backend, ClientConfig, ClientError, RetryPolicy};
use arise_core::models::answer::{Answer, AnswerSubmission, Choice};
use arise_core::models::assessment::AssessmentKind;
use mockito::Matcher;
use serde_json::json;
use uuid::Uuid;

fn backend(server: &mockito::ServerGuard) -> HttpBackend {
    let config = ClientConfig {
        base_url: server.url(),
        token: Some("secret".to_string()),
        timeout: Duration::from_secs(5),
        retry: RetryPolicy::default(),
    };
    HttpBackend::new(&config).unwrap()
}

#[tokio::test]
async fn creates_assessment_with_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let id = Uuid::new_v4();
    let mock = server
        .mock("POST", "/api/v1/assessments")
        .match_header("authorization", "Bearer secret")
        .match_body(Matcher::Json(json!({"kind": "feedback_360"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": id,
                "kind": "feedback_360",
                "status": "draft",
                "created_at": "2026-03-01T09:30:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let assessment = backend(&server)
        .create_assessment(AssessmentKind::Feedback360)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(assessment.id, id);
    assert_eq!(assessment.kind, AssessmentKind::Feedback360);
    assert!(assessment.completed_at.is_none());
}

#[tokio::test]
async fn submits_answers_as_flat_list() {
    let mut server = mockito::Server::new_async().await;
    let id = Uuid::new_v4();
    let mock = server
        .mock("POST", format!("/api/v1/assessments/{id}/submit").as_str())
        .match_body(Matcher::Json(json!([
            {"question_id": "tki_01", "answer_value": "A"},
            {"question_id": "wellness_01", "answer_value": 4}
        ])))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let answers = [
        AnswerSubmission {
            question_id: "tki_01".to_string(),
            answer_value: Answer::Choice(Choice::A),
        },
        AnswerSubmission {
            question_id: "wellness_01".to_string(),
            answer_value: Answer::Scale(4),
        },
    ];
    backend(&server).submit(id, &answers).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn validation_errors_become_readable_text() {
    let mut server = mockito::Server::new_async().await;
    let id = Uuid::new_v4();
    server
        .mock("POST", format!("/api/v1/assessments/{id}/answers").as_str())
        .with_status(422)
        .with_body(
            json!({"detail": [{"loc": ["body", "answer_value"], "msg": "must be between 1 and 5"}]})
                .to_string(),
        )
        .create_async()
        .await;

    let submission = AnswerSubmission {
        question_id: "wellness_01".to_string(),
        answer_value: Answer::Scale(3),
    };
    let err = backend(&server).save_answer(id, &submission).await.unwrap_err();

    match &err {
        ClientError::Api { status, message } => {
            assert_eq!(*status, 422);
            assert_eq!(message, "answer_value: must be between 1 and 5");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "answer_value: must be between 1 and 5");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn missing_results_are_not_found() {
    let mut server = mockito::Server::new_async().await;
    let id = Uuid::new_v4();
    server
        .mock("GET", format!("/api/v1/assessments/{id}/results").as_str())
        .with_status(404)
        .with_body(r#"{"detail":"Results not ready"}"#)
        .create_async()
        .await;

    let err = backend(&server).fetch_results(id).await.unwrap_err();
    assert!(matches!(&err, ClientError::NotFound(m) if m == "Results not ready"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn parses_partial_results() {
    let mut server = mockito::Server::new_async().await;
    let id = Uuid::new_v4();
    server
        .mock("GET", format!("/api/v1/assessments/{id}/results").as_str())
        .with_status(200)
        .with_body(
            json!({
                "assessment_id": id,
                "kind": "wellness",
                "scores": {"pillar_scores": {"sleep": 22, "nutrition": 10}}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = backend(&server).fetch_results(id).await.unwrap();
    let pillars = result.scores.pillar_scores.unwrap();
    assert_eq!(pillars["sleep"], 22.0);
    assert!(result.recommendations.is_empty());
}

#[tokio::test]
async fn evaluator_lookup_encodes_token() {
    let mut server = mockito::Server::new_async().await;
    let assessment_id = Uuid::new_v4();
    let mock = server
        .mock(
            "GET",
            Matcher::Regex(r"^/api/v1/evaluators/a%2[Bb]b%3[Dd]$".to_string()),
        )
        .with_status(200)
        .with_body(
            json!({
                "id": Uuid::new_v4(),
                "assessment_id": assessment_id,
                "name": "Dana",
                "email": "dana@example.com",
                "role": "direct_report",
                "status": "in_progress",
                "invitation_token": "a+b="
            })
            .to_string(),
        )
        .create_async()
        .await;

    let evaluator = backend(&server).fetch_evaluator("a+b=").await.unwrap();
    mock.assert_async().await;
    assert_eq!(evaluator.assessment_id, assessment_id);
    assert_eq!(evaluator.invitation_token, "a+b=");
}

#[tokio::test]
async fn non_json_error_body_is_used_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/v1/assessments")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = backend(&server)
        .create_assessment(AssessmentKind::Mbti)
        .await
        .unwrap_err();
    assert!(matches!(&err, ClientError::Api { status: 502, message } if message == "Bad Gateway"));
    assert!(err.is_retryable());
}
