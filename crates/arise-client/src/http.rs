use arise_core::api_paths;
use arise_core::message;
use arise_core::models::answer::AnswerSubmission;
use arise_core::models::assessment::{Assessment, AssessmentKind, AssessmentResult};
use arise_core::models::evaluator::{Evaluator, EvaluatorInvitation};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::backend::Backend;
use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Serialize)]
struct CreateAssessment {
    kind: AssessmentKind,
}

/// [`Backend`] over the REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, "API request");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = check(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        check(builder.send().await?).await?;
        Ok(())
    }
}

/// Map non-2xx responses to [`ClientError`], extracting a readable message
/// from whatever error body the backend produced.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = message::error_text_from_body(&body);
    tracing::warn!(status = status.as_u16(), %url, %message, "API error");

    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(message));
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

impl Backend for HttpBackend {
    async fn create_assessment(&self, kind: AssessmentKind) -> Result<Assessment, ClientError> {
        let builder = self
            .request(Method::POST, &api_paths::assessments())
            .json(&CreateAssessment { kind });
        self.send_json(builder).await
    }

    async fn load_answers(&self, assessment_id: Uuid) -> Result<Vec<AnswerSubmission>, ClientError> {
        let builder = self.request(Method::GET, &api_paths::answers(assessment_id));
        self.send_json(builder).await
    }

    async fn save_answer(
        &self,
        assessment_id: Uuid,
        answer: &AnswerSubmission,
    ) -> Result<(), ClientError> {
        let builder = self
            .request(Method::POST, &api_paths::answers(assessment_id))
            .json(answer);
        self.send(builder).await
    }

    async fn submit(
        &self,
        assessment_id: Uuid,
        answers: &[AnswerSubmission],
    ) -> Result<(), ClientError> {
        let builder = self
            .request(Method::POST, &api_paths::submit(assessment_id))
            .json(answers);
        self.send(builder).await
    }

    async fn fetch_results(&self, assessment_id: Uuid) -> Result<AssessmentResult, ClientError> {
        let builder = self.request(Method::GET, &api_paths::results(assessment_id));
        self.send_json(builder).await
    }

    async fn invite_evaluators(
        &self,
        assessment_id: Uuid,
        invitations: &[EvaluatorInvitation],
    ) -> Result<Vec<Evaluator>, ClientError> {
        let builder = self
            .request(Method::POST, &api_paths::evaluators(assessment_id))
            .json(invitations);
        self.send_json(builder).await
    }

    async fn list_evaluators(&self, assessment_id: Uuid) -> Result<Vec<Evaluator>, ClientError> {
        let builder = self.request(Method::GET, &api_paths::evaluators(assessment_id));
        self.send_json(builder).await
    }

    async fn fetch_evaluator(&self, token: &str) -> Result<Evaluator, ClientError> {
        let builder = self.request(Method::GET, &api_paths::evaluator_by_token(token));
        self.send_json(builder).await
    }
}
