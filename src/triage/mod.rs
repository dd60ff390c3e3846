//! Verification triage: tier classification and domain detection.

pub mod domain;
pub mod tier;

pub use domain::{DomainMatch, detect_domain};
pub use tier::{Tier, TierResult, TriageOptions, classify};
