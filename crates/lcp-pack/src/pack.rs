//! # Content Pack Model
//!
//! Typed view of one market's pack document. Required-vs-defaulted is stated
//! here once:
//!
//! - Top-level fields and the three citation fields of a [`RegulatoryRef`]
//!   are [`Field`] tri-states; the validator reports them when absent.
//! - Nested lists and numbers (`watchers`, `sla_days`, `summary`,
//!   `forbidden_claims`) are `Option`s. Absent and null both take the
//!   documented default (empty list, zero).
//!
//! Fields the validator only checks for presence hold raw
//! [`serde_json::Value`]s, so `version: 3` or `units: {length: metric}` load
//! rather than failing on a type nothing inspects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::Field;

/// Top-level keys every pack must carry, in reporting order.
pub const REQUIRED_TOP_LEVEL_FIELDS: [&str; 10] = [
    "country",
    "version",
    "updated_at",
    "currency",
    "units",
    "tone",
    "regulatory_refs",
    "freshness",
    "rewrite_rules",
    "guardrails",
];

/// One market's localization content pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPack {
    /// Market identifier, e.g. `IN`.
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub country: Field<Value>,
    /// Opaque version token.
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub version: Field<Value>,
    /// Last review time; must start with `YYYY-MM-DDT`.
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub updated_at: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub currency: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub units: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub tone: Field<Value>,
    /// Official citations backing the pack's claims.
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub regulatory_refs: Field<Vec<RegulatoryRef>>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub freshness: Field<FreshnessPolicy>,
    /// Localized content variants.
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub rewrite_rules: Field<Vec<RewriteRule>>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub guardrails: Field<Guardrails>,
}

impl ContentPack {
    /// Each required top-level key paired with whether the document has it.
    pub fn presence(&self) -> impl Iterator<Item = (&'static str, bool)> {
        let present = [
            self.country.is_present(),
            self.version.is_present(),
            self.updated_at.is_present(),
            self.currency.is_present(),
            self.units.is_present(),
            self.tone.is_present(),
            self.regulatory_refs.is_present(),
            self.freshness.is_present(),
            self.rewrite_rules.is_present(),
            self.guardrails.is_present(),
        ];
        REQUIRED_TOP_LEVEL_FIELDS.into_iter().zip(present)
    }

    /// Market identifier, if given.
    pub fn country(&self) -> Option<&str> {
        self.country.value().and_then(Value::as_str)
    }

    /// `updated_at` text, if given as a string.
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.value().and_then(Value::as_str)
    }

    pub fn regulatory_refs(&self) -> &[RegulatoryRef] {
        self.regulatory_refs
            .value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn rewrite_rules(&self) -> &[RewriteRule] {
        self.rewrite_rules
            .value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Declared freshness SLA in days, zero when not given.
    pub fn sla_days(&self) -> i64 {
        self.freshness.value().map_or(0, FreshnessPolicy::sla_days)
    }

    pub fn watchers(&self) -> &[Value] {
        self.freshness
            .value()
            .map(FreshnessPolicy::watchers)
            .unwrap_or_default()
    }

    /// Forbidden claims exactly as written in the pack.
    pub fn forbidden_claims(&self) -> &[String] {
        self.guardrails
            .value()
            .map(Guardrails::forbidden_claims)
            .unwrap_or_default()
    }
}

/// One official citation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatoryRef {
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub name: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub url: Field<Value>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub disclaimer: Field<Value>,
}

impl RegulatoryRef {
    /// Citation keys paired with whether this ref has them.
    pub fn presence(&self) -> [(&'static str, bool); 3] {
        [
            ("name", self.name.is_present()),
            ("url", self.url.is_present()),
            ("disclaimer", self.disclaimer.is_present()),
        ]
    }
}

/// How long a pack may go unreviewed, and who reviews it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessPolicy {
    pub sla_days: Option<i64>,
    /// Responsible parties. A pack with none is unmaintained.
    pub watchers: Option<Vec<Value>>,
}

impl FreshnessPolicy {
    pub fn sla_days(&self) -> i64 {
        self.sla_days.unwrap_or(0)
    }

    pub fn watchers(&self) -> &[Value] {
        self.watchers.as_deref().unwrap_or(&[])
    }
}

/// A localized content variant.
///
/// Only `summary` is inspected. The other display fields are carried as-is
/// for consumers that render the pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteRule {
    /// Market-facing claims, scanned against the pack's guardrails.
    pub summary: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callouts: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_note: Option<Value>,
    /// Any other keys, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl RewriteRule {
    pub fn summary(&self) -> &[String] {
        self.summary.as_deref().unwrap_or(&[])
    }
}

/// Pack-wide content-safety policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Guardrails {
    /// Case-insensitive substrings that must not appear in any summary
    /// bullet.
    pub forbidden_claims: Option<Vec<String>>,
}

impl Guardrails {
    pub fn forbidden_claims(&self) -> &[String] {
        self.forbidden_claims.as_deref().unwrap_or(&[])
    }
}
