use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One point on a five-point rating scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleOption {
    pub value: u8,
    pub label: String,
}
