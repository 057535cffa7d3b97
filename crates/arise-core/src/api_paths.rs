//! Backend URL conventions.
//!
//! Pure string functions. These define the REST paths the client calls;
//! the backend itself is an external service.

use uuid::Uuid;

pub const API_PREFIX: &str = "/api/v1";

pub fn assessments() -> String {
    format!("{API_PREFIX}/assessments")
}

pub fn assessment(id: Uuid) -> String {
    format!("{API_PREFIX}/assessments/{id}")
}

pub fn answers(id: Uuid) -> String {
    format!("{API_PREFIX}/assessments/{id}/answers")
}

pub fn submit(id: Uuid) -> String {
    format!("{API_PREFIX}/assessments/{id}/submit")
}

pub fn results(id: Uuid) -> String {
    format!("{API_PREFIX}/assessments/{id}/results")
}

pub fn evaluators(id: Uuid) -> String {
    format!("{API_PREFIX}/assessments/{id}/evaluators")
}

pub fn evaluator_by_token(token: &str) -> String {
    format!("{API_PREFIX}/evaluators/{}", urlencoding::encode(token))
}
