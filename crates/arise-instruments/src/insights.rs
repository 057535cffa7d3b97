//! Insight tables and the resolver.
//!
//! A table maps `(dimension, band)` to a bilingual analysis and
//! recommendation. Lookups normalise the dimension name, resolve it
//! through the table's alias map, and then require an exact key match.

use std::collections::{BTreeMap, HashMap};

use arise_core::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::scoring::{Band, BandScale};

/// One row of an insight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapabilityInsight {
    /// Capability or pillar key, snake_case.
    pub capability: String,
    #[serde(rename = "score_range", with = "score_range")]
    #[ts(type = "\"1-2\" | \"3\" | \"4-5\"")]
    pub band: Band,
    pub analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_fr: Option<String>,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_fr: Option<String>,
}

impl CapabilityInsight {
    pub fn color_code(&self) -> &'static str {
        self.band.color()
    }

    pub fn analysis_for(&self, locale: Locale) -> &str {
        locale.pick(&self.analysis, self.analysis_fr.as_deref())
    }

    pub fn recommendation_for(&self, locale: Locale) -> &str {
        locale.pick(&self.recommendation, self.recommendation_fr.as_deref())
    }
}

/// Serialises a [`Band`] as its `"1-2"` / `"3"` / `"4-5"` label.
mod score_range {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::scoring::Band;

    pub fn serialize<S: Serializer>(band: &Band, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(band.score_range())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Band, D::Error> {
        let label = String::deserialize(deserializer)?;
        Band::from_score_range(&label)
            .ok_or_else(|| D::Error::custom(format!("unknown score range '{label}'")))
    }
}

/// Insight text picked for a locale. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedInsight {
    pub analysis: String,
    pub recommendation: String,
    pub color_code: String,
    pub band: Band,
    pub score_range: String,
}

/// A structural problem in a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIssue {
    #[error("duplicate entry for '{capability}' in band {band}")]
    DuplicateEntry { capability: String, band: Band },

    #[error("'{capability}' has no entry for band {band}")]
    MissingBand { capability: String, band: Band },

    #[error("key '{capability}' is not in normalised form")]
    UnnormalizedKey { capability: String },

    #[error("alias '{alias}' points to unknown key '{target}'")]
    DanglingAlias { alias: String, target: String },

    #[error("alias '{alias}' shadows an existing key")]
    AliasShadowsKey { alias: String },
}

/// Lower-case, trim, and turn runs of whitespace or hyphens into `_`.
pub fn normalize_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_sep = true;
            continue;
        }
        if pending_sep && !out.is_empty() {
            out.push('_');
        }
        pending_sep = false;
        out.extend(ch.to_lowercase());
    }
    out
}

#[derive(Debug, Clone)]
pub struct InsightTable {
    scale: BandScale,
    records: Vec<CapabilityInsight>,
    aliases: BTreeMap<String, String>,
    index: HashMap<(String, Band), usize>,
}

impl InsightTable {
    /// Build a table. When two records share a key the first one is
    /// indexed; [`InsightTable::validate`] reports the duplicate.
    pub fn new(scale: BandScale, records: Vec<CapabilityInsight>, aliases: &[(&str, &str)]) -> Self {
        let mut index = HashMap::new();
        for (i, r) in records.iter().enumerate() {
            index.entry((normalize_key(&r.capability), r.band)).or_insert(i);
        }
        let aliases = aliases
            .iter()
            .map(|(alias, target)| (normalize_key(alias), normalize_key(target)))
            .collect();
        Self {
            scale,
            records,
            aliases,
            index,
        }
    }

    pub fn scale(&self) -> BandScale {
        self.scale
    }

    pub fn records(&self) -> &[CapabilityInsight] {
        &self.records
    }

    /// Distinct keys in table order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for r in &self.records {
            if !keys.contains(&r.capability.as_str()) {
                keys.push(&r.capability);
            }
        }
        keys
    }

    /// Canonical key for a user- or backend-supplied name, if the table
    /// knows it.
    pub fn canonical_key(&self, name: &str) -> Option<String> {
        let normalized = normalize_key(name);
        let key = self.aliases.get(&normalized).cloned().unwrap_or(normalized);
        Band::ALL
            .iter()
            .any(|b| self.index.contains_key(&(key.clone(), *b)))
            .then_some(key)
    }

    pub fn get(&self, capability: &str, score: f64) -> Option<&CapabilityInsight> {
        let band = self.scale.band(score)?;
        let key = self.canonical_key(capability)?;
        self.index.get(&(key, band)).map(|&i| &self.records[i])
    }

    pub fn get_with_locale(
        &self,
        capability: &str,
        score: f64,
        locale: Locale,
    ) -> Option<ResolvedInsight> {
        let insight = self.get(capability, score)?;
        Some(ResolvedInsight {
            analysis: insight.analysis_for(locale).to_string(),
            recommendation: insight.recommendation_for(locale).to_string(),
            color_code: insight.color_code().to_string(),
            band: insight.band,
            score_range: self.scale.range_label(insight.band),
        })
    }

    pub fn validate(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<(String, Band), usize> = HashMap::new();

        for r in &self.records {
            let key = normalize_key(&r.capability);
            if key != r.capability {
                issues.push(TableIssue::UnnormalizedKey {
                    capability: r.capability.clone(),
                });
            }
            let count = seen.entry((key, r.band)).or_default();
            *count += 1;
            if *count == 2 {
                issues.push(TableIssue::DuplicateEntry {
                    capability: r.capability.clone(),
                    band: r.band,
                });
            }
        }

        for key in self.keys() {
            let key = normalize_key(key);
            for band in Band::ALL {
                if !seen.contains_key(&(key.clone(), band)) {
                    issues.push(TableIssue::MissingBand {
                        capability: key.clone(),
                        band,
                    });
                }
            }
        }

        for (alias, target) in &self.aliases {
            let known = |k: &str| Band::ALL.iter().any(|b| seen.contains_key(&(k.to_string(), *b)));
            if known(alias) {
                issues.push(TableIssue::AliasShadowsKey {
                    alias: alias.clone(),
                });
            }
            if !known(target) {
                issues.push(TableIssue::DanglingAlias {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }

        issues
    }
}
