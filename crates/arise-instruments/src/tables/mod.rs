//! Seed insight tables.

pub mod feedback360;
pub mod wellness;

use crate::insights::CapabilityInsight;
use crate::scoring::Band;

/// Static form of a table row.
pub(crate) struct Seed {
    pub capability: &'static str,
    pub band: Band,
    pub analysis: &'static str,
    pub analysis_fr: Option<&'static str>,
    pub recommendation: &'static str,
    pub recommendation_fr: Option<&'static str>,
}

pub(crate) fn into_records(seeds: &[Seed]) -> Vec<CapabilityInsight> {
    seeds
        .iter()
        .map(|s| CapabilityInsight {
            capability: s.capability.to_string(),
            band: s.band,
            analysis: s.analysis.to_string(),
            analysis_fr: s.analysis_fr.map(str::to_string),
            recommendation: s.recommendation.to_string(),
            recommendation_fr: s.recommendation_fr.map(str::to_string),
        })
        .collect()
}
