use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// UI language. The locale travels in the URL path (`/fr/...`) and is
/// threaded into every lookup as a plain string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Anything starting with `fr` is French; everything else, including an
    /// empty or unrecognised tag, falls back to English.
    pub fn parse(tag: &str) -> Self {
        let prefix = tag.trim().get(..2);
        if prefix.is_some_and(|p| p.eq_ignore_ascii_case("fr")) {
            Locale::Fr
        } else {
            Locale::En
        }
    }

    /// Parse an optional tag, defaulting to English when absent.
    pub fn from_optional(tag: Option<&str>) -> Self {
        tag.map(Self::parse).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn is_french(&self) -> bool {
        matches!(self, Locale::Fr)
    }

    /// Pick the French variant when this locale is French and the variant
    /// exists, else the English text.
    pub fn pick<'a>(&self, en: &'a str, fr: Option<&'a str>) -> &'a str {
        match (self, fr) {
            (Locale::Fr, Some(fr)) => fr,
            _ => en,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
