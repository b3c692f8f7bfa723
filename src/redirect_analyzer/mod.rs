//! Core analysis engine for redirect mappings.
//!
//! Takes an ordered list of old-URL/new-URL pairs, canonicalizes each
//! source URL, groups mappings by canonical key, classifies duplicates
//! and conflicts, and generates `RedirectMatch` rule strings along with
//! wildcard consolidation suggestions for hierarchical path families.
//!
//! Everything in this module is pure and synchronous: no I/O, no shared
//! state, no failure modes. File loading, rule writing, and console
//! reporting live in the surrounding layer.

pub mod analyzer;
pub mod normalizer;
pub mod pattern;
pub mod wildcard;


pub use analyzer::{AnalysisResult, NormalizedRedirect, RedirectAnalyzer, RedirectRecord};
pub use normalizer::normalize_url;
pub use pattern::generate_redirect_match;
