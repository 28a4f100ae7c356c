//! # Temporal Checks — `updated_at` Handling
//!
//! Two levels of strictness, used for different purposes:
//!
//! - [`has_iso8601_date_prefix`] is the structural gate the validator
//!   applies. It only requires `YYYY-MM-DDT` at the start of the string, so
//!   `9999-99-99T` passes. It never consults a calendar.
//!
//! - [`parse_updated_date`] and [`staleness`] interpret the value as a real
//!   date to compute how long a pack has gone unreviewed. A value that passes
//!   the structural gate can still fail here; callers treat that as "age
//!   unknown", not as a violation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::CoreError;

/// Returns `true` if `s` starts with four digits, `-`, two digits, `-`,
/// two digits and a literal `T`.
///
/// Only ASCII digits count.
pub fn has_iso8601_date_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 11 {
        return false;
    }
    let digits = |range: std::ops::Range<usize>| b[range].iter().all(u8::is_ascii_digit);
    digits(0..4) && b[4] == b'-' && digits(5..7) && b[7] == b'-' && digits(8..10) && b[10] == b'T'
}

/// Resolve an `updated_at` value to a UTC calendar date.
///
/// Full RFC 3339 values are converted to UTC before taking the date, so
/// `2025-08-12T23:00:00-05:00` lands on 2025-08-13. Anything else must at
/// least carry a valid `YYYY-MM-DDT` prefix, and its date portion is used
/// as-is.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimestamp`] if no calendar date can be read.
pub fn parse_updated_date(s: &str) -> Result<NaiveDate, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    if !has_iso8601_date_prefix(s) {
        return Err(CoreError::InvalidTimestamp {
            value: s.to_string(),
            reason: "expected a YYYY-MM-DDT prefix".to_string(),
        });
    }
    // The prefix check guarantees the first ten bytes are ASCII.
    NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d").map_err(|e| CoreError::InvalidTimestamp {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

/// A pack whose last update is older than its declared SLA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Staleness {
    /// Whole days between `updated_at` and the reference date.
    pub age_days: i64,
    /// The pack's declared `freshness.sla_days`.
    pub sla_days: i64,
}

impl std::fmt::Display for Staleness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pack is stale: last updated {} days ago (SLA {} days)",
            self.age_days, self.sla_days
        )
    }
}

/// Compare a pack's age against its SLA as of a reference date.
///
/// Returns `Ok(None)` while the pack is within its SLA (including packs
/// dated in the future).
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimestamp`] if `updated_at` has no readable
/// calendar date.
pub fn staleness(
    updated_at: &str,
    sla_days: i64,
    as_of: NaiveDate,
) -> Result<Option<Staleness>, CoreError> {
    let updated = parse_updated_date(updated_at)?;
    let age_days = (as_of - updated).num_days();
    if age_days > sla_days {
        Ok(Some(Staleness { age_days, sla_days }))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ---- has_iso8601_date_prefix ----

    #[test]
    fn test_prefix_accepts_full_timestamp() {
        assert!(has_iso8601_date_prefix("2025-08-12T00:00:00Z"));
    }

    #[test]
    fn test_prefix_accepts_bare_t() {
        assert!(has_iso8601_date_prefix("2025-01-01T"));
    }

    #[test]
    fn test_prefix_is_not_a_calendar_check() {
        assert!(has_iso8601_date_prefix("9999-99-99T"));
    }

    #[test]
    fn test_prefix_rejects_slashes() {
        assert!(!has_iso8601_date_prefix("2025/08/12"));
    }

    #[test]
    fn test_prefix_rejects_empty() {
        assert!(!has_iso8601_date_prefix(""));
    }

    #[test]
    fn test_prefix_rejects_date_without_t() {
        assert!(!has_iso8601_date_prefix("2025-08-12"));
        assert!(!has_iso8601_date_prefix("2025-08-12 00:00:00"));
    }

    #[test]
    fn test_prefix_rejects_non_digits() {
        assert!(!has_iso8601_date_prefix("20x5-08-12T00:00:00Z"));
        assert!(!has_iso8601_date_prefix("2025-0a-12T"));
    }

    #[test]
    fn test_prefix_rejects_leading_whitespace() {
        assert!(!has_iso8601_date_prefix(" 2025-08-12T00:00:00Z"));
    }

    #[test]
    fn test_prefix_rejects_non_ascii_digits() {
        // Arabic-Indic digits are digits, but not ASCII ones.
        assert!(!has_iso8601_date_prefix("٢٠٢٥-08-12T"));
    }

    // ---- parse_updated_date ----

    #[test]
    fn test_parse_rfc3339_utc() {
        assert_eq!(
            parse_updated_date("2025-08-12T00:00:00Z").unwrap(),
            date(2025, 8, 12)
        );
    }

    #[test]
    fn test_parse_rfc3339_offset_converted_to_utc() {
        assert_eq!(
            parse_updated_date("2025-08-12T23:00:00-05:00").unwrap(),
            date(2025, 8, 13)
        );
    }

    #[test]
    fn test_parse_prefix_only() {
        assert_eq!(parse_updated_date("2025-01-01T").unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_parse_impossible_calendar_date() {
        assert!(parse_updated_date("9999-99-99T").is_err());
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert!(parse_updated_date("2025/08/12").is_err());
    }

    // ---- staleness ----

    #[test]
    fn test_within_sla() {
        let result = staleness("2025-08-12T00:00:00Z", 30, date(2025, 9, 11)).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_exactly_at_sla_is_not_stale() {
        let result = staleness("2025-08-12T00:00:00Z", 30, date(2025, 9, 11)).unwrap();
        assert!(result.is_none());
        let result = staleness("2025-08-12T00:00:00Z", 31, date(2025, 9, 12)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_past_sla_is_stale() {
        let result = staleness("2025-08-12T00:00:00Z", 30, date(2025, 9, 12)).unwrap();
        assert_eq!(
            result,
            Some(Staleness {
                age_days: 31,
                sla_days: 30
            })
        );
    }

    #[test]
    fn test_future_date_is_not_stale() {
        let result = staleness("2026-01-01T00:00:00Z", 0, date(2025, 1, 1)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_staleness_display() {
        let s = Staleness {
            age_days: 45,
            sla_days: 30,
        };
        assert_eq!(
            s.to_string(),
            "pack is stale: last updated 45 days ago (SLA 30 days)"
        );
    }

    #[test]
    fn test_staleness_unreadable_date() {
        assert!(staleness("yesterday", 30, date(2025, 1, 1)).is_err());
    }
}
