pub mod answer;
pub mod assessment;
pub mod evaluator;
pub mod question;
pub mod scale;
