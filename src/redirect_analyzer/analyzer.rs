use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

use super::normalizer::normalize_url;
use super::pattern::generate_redirect_match;
use super::wildcard::{suggest_wildcard, DEFAULT_MARKER_SEGMENT};

/// Raw redirect mapping as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectRecord {
    /// Source path or URL to redirect from
    #[serde(rename = "Old_URL")]
    pub old_url: String,

    /// Destination URL to redirect to
    #[serde(rename = "New_URL")]
    pub new_url: String,
}

/// A processed mapping: canonical source key, verbatim destination, and
/// the generated rule string.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRedirect {
    /// Canonicalized source key
    #[serde(rename = "Old_URL")]
    pub old_url: String,

    /// Destination URL, copied verbatim from the input
    #[serde(rename = "New_URL")]
    pub new_url: String,

    /// Emitted `RedirectMatch` rule for this mapping
    #[serde(rename = "Pattern")]
    pub pattern: String,
}

/// Results of analyzing a sequence of redirect mappings.
///
/// All sequences preserve input order: `processed` is one entry per
/// input record, `duplicates` and `conflicts` keys appear in
/// first-occurrence order, and `wildcard_suggestions` in the order
/// their families were first seen.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub processed: Vec<NormalizedRedirect>,
    pub duplicates: Vec<String>,
    pub conflicts: IndexMap<String, Vec<String>>,
    pub wildcard_suggestions: Vec<String>,
}

/// Analyzer for redirect mappings.
///
/// Groups mappings by canonical old URL, classifies duplicates versus
/// conflicts, and proposes wildcard consolidations for hierarchical
/// path families. Carries no ambient state: every `analyze` call is a
/// pure function over the records passed in.
#[derive(Debug, Clone)]
pub struct RedirectAnalyzer {
    /// When a conflicting key's distinct destinations include this URL,
    /// the conflict collapses to it
    priority_url: Option<String>,

    /// Path segment marking a hierarchical family
    marker_segment: String,
}

impl Default for RedirectAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RedirectAnalyzer {
    pub fn new() -> Self {
        Self {
            priority_url: None,
            marker_segment: DEFAULT_MARKER_SEGMENT.to_string(),
        }
    }

    /// Prefer this destination when resolving conflicting mappings.
    pub fn with_priority_url(mut self, url: impl Into<String>) -> Self {
        self.priority_url = Some(url.into());
        self
    }

    /// Use a different hierarchical marker segment for wildcard
    /// suggestions.
    pub fn with_marker_segment(mut self, marker: impl Into<String>) -> Self {
        self.marker_segment = marker.into();
        self
    }

    /// Analyzes an ordered sequence of redirect mappings.
    ///
    /// This performs the following steps:
    /// 1. Normalizes each old URL and generates its rule string
    /// 2. Groups destinations by canonical old URL, in input order
    /// 3. Classifies keys seen more than once as duplicates
    /// 4. Classifies duplicates with more than one distinct destination
    ///    as conflicts, applying the priority override if one is set
    /// 5. Proposes deduplicated wildcard rules for marker families
    ///
    /// Duplicates and conflicts are computed as two independent passes
    /// over the grouping: the priority override never changes which
    /// keys count as duplicates.
    pub fn analyze(&self, records: &[RedirectRecord]) -> AnalysisResult {
        info!("Analyzing {} redirect mappings", records.len());

        let mut processed = Vec::with_capacity(records.len());
        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();

        for record in records {
            let old_url = normalize_url(&record.old_url);
            let pattern = generate_redirect_match(&old_url, &record.new_url);
            debug!("Normalized {} -> {}", record.old_url, old_url);

            grouped
                .entry(old_url.clone())
                .or_default()
                .push(record.new_url.clone());

            processed.push(NormalizedRedirect {
                old_url,
                new_url: record.new_url.clone(),
                pattern,
            });
        }

        let duplicates: Vec<String> = grouped
            .iter()
            .filter(|(_, destinations)| destinations.len() > 1)
            .map(|(key, _)| key.clone())
            .collect();

        let mut conflicts = IndexMap::new();
        for (key, destinations) in &grouped {
            if destinations.len() < 2 {
                continue;
            }
            let distinct = distinct_in_order(destinations);
            if distinct.len() < 2 {
                continue;
            }
            let resolved = match &self.priority_url {
                Some(priority) if distinct.iter().any(|url| url == priority) => {
                    debug!("Conflict on {} resolved by priority URL", key);
                    vec![priority.clone()]
                }
                _ => distinct,
            };
            conflicts.insert(key.clone(), resolved);
        }

        let mut wildcard_suggestions: Vec<String> = Vec::new();
        for key in grouped.keys() {
            if let Some(suggestion) = suggest_wildcard(key, &self.marker_segment) {
                if !wildcard_suggestions.contains(&suggestion) {
                    wildcard_suggestions.push(suggestion);
                }
            }
        }

        info!(
            "Analysis complete: {} processed, {} duplicates, {} conflicts, {} wildcard suggestions",
            processed.len(),
            duplicates.len(),
            conflicts.len(),
            wildcard_suggestions.len()
        );

        AnalysisResult {
            processed,
            duplicates,
            conflicts,
            wildcard_suggestions,
        }
    }
}

/// Deduplicates destinations preserving first-seen order.
fn distinct_in_order(destinations: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    destinations
        .iter()
        .filter(|destination| seen.insert(destination.as_str()))
        .cloned()
        .collect()
}
