// Resume analysis engine.
// Implements: normalization, skill extraction, gap analysis, heuristic scoring, tips.
// Everything here is a pure function over its inputs; I/O lives in `document`,
// `vocabulary::SkillDataset::load` and the handlers.

pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod scoring;
pub mod tips;
pub mod vocabulary;

use tracing::debug;

use crate::analysis::extractor::extract_skills;
use crate::analysis::gap::analyze_gap;
use crate::analysis::models::{AnalysisReport, ScoreBreakdown};
use crate::analysis::normalizer::normalize;
use crate::analysis::scoring::{score_ats, score_content, score_skills, score_structure, score_tone};
use crate::analysis::tips::{improvement_tips, overall_score};
use crate::analysis::vocabulary::{AliasMap, SkillVocabulary};

/// Runs the full pipeline for one resume against one role's target skills.
///
/// Skill detection sees the normalized text; every heuristic scorer sees `raw_text`.
pub fn analyze(
    raw_text: &str,
    job_role: &str,
    target_skills: &[String],
    vocabulary: &SkillVocabulary,
    aliases: &AliasMap,
) -> AnalysisReport {
    let normalized = normalize(raw_text);
    let extracted = extract_skills(&normalized, vocabulary, aliases);
    let gap = analyze_gap(extracted.as_slice(), target_skills);

    debug!(
        extracted = extracted.len(),
        matched = gap.matched_skills.len(),
        missing = gap.missing_skills.len(),
        match_percentage = gap.match_percentage,
        "Skill gap computed"
    );

    let tone = score_tone(raw_text);
    let content = score_content(extracted.len(), raw_text);
    let structure = score_structure(raw_text);
    let skills = score_skills(gap.match_percentage);
    let ats_score = score_ats(gap.matched_skills.len(), raw_text);

    let improvement_tips = improvement_tips(&tone, &content, &structure, &gap.missing_skills);

    let scores = ScoreBreakdown {
        tone_and_style: tone,
        content,
        structure,
        skills,
    };

    AnalysisReport {
        job_role: job_role.to_string(),
        overall_score: overall_score(&scores),
        scores,
        ats_score,
        skills_analysis: gap,
        improvement_tips,
        extracted_skills: extracted,
    }
}
