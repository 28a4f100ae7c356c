//! # lcp-pack — Localization Content Packs
//!
//! A content pack is a per-market YAML document carrying localized rewrite
//! rules, the regulatory citations that back them, a freshness SLA, and the
//! guardrails that keep unsafe claims out of rendered content. This crate
//! gates packs before they reach production:
//!
//! - **Loader** ([`parser`]): syntax to structure. Turns a file into a
//!   [`ContentPack`] or a single [`PackError`]. No schema checks.
//!
//! - **Validator** ([`validation`]): an ordered, exhaustive battery of
//!   completeness, format, freshness and guardrail checks producing
//!   human-readable violation messages. An empty list means the pack is
//!   valid.
//!
//! - **Reports** ([`report`]): per-pack outcomes and the batch aggregate a
//!   driver turns into an exit status.
//!
//! ## Data Format
//!
//! Packs are YAML (JSON documents load too). Top-level fields are
//! [`Field`] tri-states so that "key absent" and "key present but empty"
//! stay distinguishable for the completeness check.
//!
//! ## Crate Policy
//!
//! - Depends only on `lcp-core` internally.
//! - Validation never fails or panics; violations are data.
//! - Violation order is fixed so output is stable across runs.

pub mod error;
pub mod field;
pub mod pack;
pub mod parser;
pub mod report;
pub mod validation;

// Re-export primary types.
pub use error::{PackError, PackResult};
pub use field::Field;
pub use pack::{
    ContentPack, FreshnessPolicy, Guardrails, RegulatoryRef, RewriteRule,
    REQUIRED_TOP_LEVEL_FIELDS,
};
pub use parser::{load_pack, parse_pack};
pub use report::{BatchReport, PackOutcome, PackReport};
pub use validation::{validate, validate_pack};
