//! Pipeline stages for transcript cleaning.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! change one (e.g. widen the artifact allow-list) without touching the
//! others.
//!
//! ## Data Flow
//!
//! ```text
//! raw text ──▶ split ──▶ clean ──▶ verify
//!            (markers)  (regex)   (report)
//! ```
//!
//! 1. [`split`]  — optional: segment on `--- Page N ---` marker lines
//! 2. [`clean`]  — four ordered regex passes: header/footer removal,
//!    page-number stripping, artifact filtering, whitespace normalisation
//! 3. [`verify`] — count residual anomalies; purely informational
//!
//! The driver in [`crate::process`] wires these to the filesystem.

pub mod clean;
pub mod split;
pub mod verify;
