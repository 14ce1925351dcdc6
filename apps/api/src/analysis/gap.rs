//! Gap analysis — extracted skills vs a role's target skill list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Matched/missing partition of the target skills plus coverage percentage.
///
/// `matched ∪ missing` equals the lowercased target set and the two never overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// 0.0 – 100.0, two decimal places. 0.0 for an empty target.
    pub match_percentage: f64,
}

/// Compares `extracted` against `target` case-insensitively.
/// Both output lists are sorted lexicographically.
pub fn analyze_gap<E, T>(extracted: &[E], target: &[T]) -> GapResult
where
    E: AsRef<str>,
    T: AsRef<str>,
{
    let resume: BTreeSet<String> = extracted.iter().map(|s| s.as_ref().to_lowercase()).collect();
    let wanted: BTreeSet<String> = target.iter().map(|s| s.as_ref().to_lowercase()).collect();

    let matched_skills: Vec<String> = wanted.intersection(&resume).cloned().collect();
    let missing_skills: Vec<String> = wanted.difference(&resume).cloned().collect();

    let match_percentage = if wanted.is_empty() {
        0.0
    } else {
        round2(matched_skills.len() as f64 / wanted.len() as f64 * 100.0)
    };

    GapResult {
        matched_skills,
        missing_skills,
        match_percentage,
    }
}

/// Rounds the exact binary value to two decimals, ties to even (3.125 → 3.12).
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
