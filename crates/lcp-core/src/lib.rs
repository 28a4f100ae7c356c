//! # lcp-core — Foundational Types for Localization Content Packs
//!
//! Leaf crate of the workspace. Holds the pieces of policy and date
//! handling that the pack validator and the CLI share, with no knowledge of
//! the pack document shape itself.
//!
//! ## Key Design Principles
//!
//! 1. **Policy constants live in one place.** The freshness SLA ceiling is a
//!    deployment policy, not a per-pack setting. [`ValidationPolicy`] carries
//!    it with a documented default; operators change it through
//!    configuration, never by editing a pack.
//!
//! 2. **Cheap structural date checks.** [`has_iso8601_date_prefix`] only
//!    checks the `YYYY-MM-DDT` shape. Calendar validity is a separate,
//!    optional concern handled by [`temporal::staleness`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lcp-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod policy;
pub mod temporal;

pub use error::CoreError;
pub use policy::{ValidationPolicy, DEFAULT_MAX_SLA_DAYS};
pub use temporal::{has_iso8601_date_prefix, staleness, Staleness};
