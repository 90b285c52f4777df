//! Core domain types for profile queries and the statistics they return

use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Text shown for any statistic the platform did not report
pub const NOT_AVAILABLE: &str = "N/A";

// ─────────────────────────────────────────────────────────────────────────────
// Platform
// ─────────────────────────────────────────────────────────────────────────────

/// Coding platform supported by the statistics API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LeetCode,
    CodeChef,
    CodeForces,
}

impl Platform {
    /// All platforms, in selector order
    pub const ALL: [Platform; 3] = [Platform::LeetCode, Platform::CodeChef, Platform::CodeForces];

    /// Identifier sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LeetCode => "leetcode",
            Platform::CodeChef => "codechef",
            Platform::CodeForces => "codeforces",
        }
    }

    /// Name shown in the platform selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::LeetCode => "LeetCode",
            Platform::CodeChef => "CodeChef",
            Platform::CodeForces => "CodeForces",
        }
    }

    /// Identifier with only its first letter upper-cased ("Leetcode"),
    /// used for the stats card title
    pub fn capitalized(&self) -> String {
        let id = self.as_str();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Next platform in selector order (wraps)
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous platform in selector order (wraps)
    pub fn previous(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leetcode" => Ok(Platform::LeetCode),
            "codechef" => Ok(Platform::CodeChef),
            "codeforces" => Ok(Platform::CodeForces),
            other => Err(format!(
                "unknown platform '{}' (expected leetcode, codechef or codeforces)",
                other
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Query
// ─────────────────────────────────────────────────────────────────────────────

/// A validated profile lookup: the JSON body of `POST /api/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    platform: Platform,
    username: String,
}

impl Query {
    /// Build a query from form input.
    ///
    /// Fails when no platform is selected or the username is empty. The
    /// username is sent exactly as typed.
    pub fn new(platform: Option<Platform>, username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let platform = platform.ok_or_else(|| Error::invalid_query("no platform selected"))?;
        if username.is_empty() {
            return Err(Error::invalid_query("username is empty"));
        }
        Ok(Self { platform, username })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Statistics
// ─────────────────────────────────────────────────────────────────────────────

/// A scalar statistic as reported by a platform.
///
/// Platforms report ratings and ranks either as numbers or as text
/// ("Expert", "1800", "N/A").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl StatValue {
    /// Format an optional statistic, falling back to "N/A" when it is
    /// missing, null, or already "N/A"
    pub fn display(value: Option<&StatValue>) -> String {
        match value {
            None => NOT_AVAILABLE.to_string(),
            Some(StatValue::Text(text)) if text == NOT_AVAILABLE => NOT_AVAILABLE.to_string(),
            Some(StatValue::Text(text)) => text.clone(),
            Some(StatValue::Number(n)) => format_json_number(n),
            Some(StatValue::Other(serde_json::Value::Null)) => NOT_AVAILABLE.to_string(),
            Some(StatValue::Other(other)) => other.to_string(),
        }
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Number(value.into())
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

/// Solved-problem count for one programming language
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCount {
    pub name: String,
    /// Coerced count; NaN when the server sent something non-numeric
    pub value: f64,
}

/// Per-language solve counts, in the order the server sent them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LanguageStats(Vec<LanguageCount>);

impl LanguageStats {
    pub fn new(entries: Vec<LanguageCount>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for LanguageStats {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| LanguageCount {
                    name: name.into(),
                    value,
                })
                .collect(),
        )
    }
}

/// Coerce a JSON value to a count the way a loosely-typed client would:
/// numeric strings parse, null/false are zero, true is one, anything else
/// is NaN.
pub fn coerce_count(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        serde_json::Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        serde_json::Value::Null => 0.0,
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => f64::NAN,
    }
}

struct LanguageStatsVisitor;

impl<'de> Visitor<'de> for LanguageStatsVisitor {
    type Value = LanguageStats;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of language name to solved count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, raw)) = map.next_entry::<String, serde_json::Value>()? {
            entries.push(LanguageCount {
                name,
                value: coerce_count(&raw),
            });
        }
        Ok(LanguageStats(entries))
    }

    /// Arrays are keyed by position ("0", "1", ...)
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(raw) = seq.next_element::<serde_json::Value>()? {
            entries.push(LanguageCount {
                name: entries.len().to_string(),
                value: coerce_count(&raw),
            });
        }
        Ok(LanguageStats(entries))
    }

    // Scalars carry no languages

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
        Ok(LanguageStats::default())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
        Ok(LanguageStats::default())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
        Ok(LanguageStats::default())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
        Ok(LanguageStats::default())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<Self::Value, E> {
        Ok(LanguageStats::default())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(LanguageStats::default())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(LanguageStats::default())
    }
}

impl<'de> Deserialize<'de> for LanguageStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(LanguageStatsVisitor)
    }
}

impl Serialize for LanguageStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.end()
    }
}

/// Profile statistics returned by `POST /api/profile`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    /// Usually text, but shown as-is whatever the platform sends
    #[serde(default)]
    pub username: Option<StatValue>,

    #[serde(default)]
    pub rating: Option<StatValue>,

    #[serde(default)]
    pub solved: Option<StatValue>,

    #[serde(default)]
    pub rank: Option<StatValue>,

    #[serde(default)]
    pub language_stats: LanguageStats,
}

impl ProfileStats {
    /// Username as sent; blank when missing
    pub fn username_display(&self) -> String {
        match &self.username {
            None | Some(StatValue::Other(serde_json::Value::Null)) => String::new(),
            Some(StatValue::Text(name)) => name.clone(),
            Some(value) => StatValue::display(Some(value)),
        }
    }

    pub fn rating_display(&self) -> String {
        StatValue::display(self.rating.as_ref())
    }

    pub fn solved_display(&self) -> String {
        StatValue::display(self.solved.as_ref())
    }

    pub fn rank_display(&self) -> String {
        StatValue::display(self.rank.as_ref())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Number formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Format a number without a trailing ".0" for whole values (80, not 80.0)
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

fn format_json_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        n.to_string()
    } else {
        n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
    }
}
