//! # Pack Validation Rules
//!
//! Runs an ordered battery of checks against a loaded [`ContentPack`] and
//! returns every violation found, as human-readable messages.
//!
//! ## Validation Layers
//!
//! 1. **Completeness**: every required top-level key exists.
//! 2. **Timestamp format**: `updated_at` starts with `YYYY-MM-DDT`.
//! 3. **Regulatory references**: at least one, each with `name`, `url`
//!    and `disclaimer`.
//! 4. **Freshness**: `sla_days` within the policy ceiling, at least one
//!    watcher.
//! 5. **Rewrite rules**: at least one.
//! 6. **Guardrails**: no forbidden claim appears in any summary bullet.
//!
//! Checks never short-circuit: an author gets the whole worklist in one
//! run. Order is fixed so repeated runs produce identical output.

use chrono::NaiveDate;
use lcp_core::{has_iso8601_date_prefix, ValidationPolicy};

use crate::pack::ContentPack;

/// Message for an `updated_at` that lacks the `YYYY-MM-DDT` prefix.
pub const UPDATED_AT_FORMAT_VIOLATION: &str =
    "`updated_at` must be ISO-8601 e.g., 2025-08-12T00:00:00Z";

/// Validate a pack against the default policy.
pub fn validate(pack: &ContentPack) -> Vec<String> {
    validate_pack(pack, &ValidationPolicy::default())
}

/// Validate a pack against `policy`. An empty result means the pack is
/// valid.
pub fn validate_pack(pack: &ContentPack, policy: &ValidationPolicy) -> Vec<String> {
    let mut errors = Vec::new();

    check_required_fields(pack, &mut errors);
    check_updated_at(pack, &mut errors);
    check_regulatory_refs(pack, &mut errors);
    check_freshness(pack, policy, &mut errors);
    check_rewrite_rules(pack, &mut errors);
    check_guardrails(pack, &mut errors);

    tracing::debug!(
        country = pack.country().unwrap_or("?"),
        violations = errors.len(),
        "validated content pack"
    );
    errors
}

fn check_required_fields(pack: &ContentPack, errors: &mut Vec<String>) {
    for (field, present) in pack.presence() {
        if !present {
            errors.push(format!("missing `{field}`"));
        }
    }
}

fn check_updated_at(pack: &ContentPack, errors: &mut Vec<String>) {
    if !pack.updated_at().is_some_and(has_iso8601_date_prefix) {
        errors.push(UPDATED_AT_FORMAT_VIOLATION.to_string());
    }
}

fn check_regulatory_refs(pack: &ContentPack, errors: &mut Vec<String>) {
    let refs = pack.regulatory_refs();
    if refs.is_empty() {
        errors.push("no regulatory_refs[]".to_string());
        return;
    }
    for (i, r) in refs.iter().enumerate() {
        for (field, present) in r.presence() {
            if !present {
                errors.push(format!("regulatory_refs[{i}] missing `{field}`"));
            }
        }
    }
}

fn check_freshness(pack: &ContentPack, policy: &ValidationPolicy, errors: &mut Vec<String>) {
    if pack.sla_days() > policy.max_sla_days {
        errors.push(format!(
            "freshness.sla_days > {} (too high for demo SLA)",
            policy.max_sla_days
        ));
    }
    if pack.watchers().is_empty() {
        errors.push("freshness.watchers[] required".to_string());
    }
}

fn check_rewrite_rules(pack: &ContentPack, errors: &mut Vec<String>) {
    if pack.rewrite_rules().is_empty() {
        errors.push("no rewrite_rules[]".to_string());
    }
}

fn check_guardrails(pack: &ContentPack, errors: &mut Vec<String>) {
    let forbidden = normalized_forbidden_claims(pack);
    if forbidden.is_empty() {
        return;
    }
    for rule in pack.rewrite_rules() {
        for bullet in rule.summary() {
            let bullet = bullet.to_lowercase();
            for claim in &forbidden {
                if bullet.contains(claim.as_str()) {
                    errors.push(format!("forbidden claim found in summary: '{claim}'"));
                }
            }
        }
    }
}

/// Lower-cased forbidden claims with empties dropped and duplicates
/// removed, in first-declared order.
pub fn normalized_forbidden_claims(pack: &ContentPack) -> Vec<String> {
    let mut claims: Vec<String> = Vec::new();
    for claim in pack.forbidden_claims() {
        let claim = claim.to_lowercase();
        if !claim.is_empty() && !claims.contains(&claim) {
            claims.push(claim);
        }
    }
    claims
}

/// Non-fatal freshness warnings for a pack as of `as_of`.
///
/// Only packs that declare `freshness.sla_days` and carry a readable
/// `updated_at` are assessed. Warnings never count as violations.
pub fn freshness_warnings(pack: &ContentPack, as_of: NaiveDate) -> Vec<String> {
    let Some(sla_days) = pack.freshness.value().and_then(|f| f.sla_days) else {
        return Vec::new();
    };
    let Some(updated_at) = pack.updated_at() else {
        return Vec::new();
    };
    match lcp_core::staleness(updated_at, sla_days, as_of) {
        Ok(Some(stale)) => vec![stale.to_string()],
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::debug!(error = %e, "cannot assess pack age");
            Vec::new()
        }
    }
}
