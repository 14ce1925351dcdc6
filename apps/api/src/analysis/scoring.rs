//! Heuristic scorers — tone, content, structure, ATS compatibility, skills.
//!
//! Each scorer starts from a fixed base, adds fixed increments when a text signal
//! crosses a threshold, clamps to 100 and maps the result to a status label.
//! Scores never decrease from their base. All inputs are the RAW resume text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{AtsScore, ScoreStatus, SubScore};

const MAX_SCORE: u32 = 100;

const ACTION_VERBS: &[&str] = &[
    "developed",
    "created",
    "managed",
    "led",
    "designed",
    "implemented",
    "achieved",
    "improved",
    "optimized",
    "built",
    "launched",
];

const PROJECT_KEYWORDS: &[&str] = &["project", "developed", "built", "created"];

const SECTION_HEADERS: &[&str] = &["education", "experience", "skills", "projects"];

/// Inclusive word-count window considered an appropriate resume length.
const IDEAL_WORDS: std::ops::RangeInclusive<usize> = 400..=800;

static QUANTIFIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\d+\+").expect("quantifiable pattern is valid"));

/// Word characters are letters, numbers of any kind and `_`. Combining marks
/// count as special, as do connector punctuation other than `_`.
static ATS_UNSAFE_CHAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\-.,@()]").expect("special-character pattern is valid")
});

/// Number of distinct `needles` present as substrings of `haystack`.
fn distinct_hits(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|n| haystack.contains(*n)).count()
}

// ────────────────────────────────────────────────────────────────────────────
// Tone & style
// ────────────────────────────────────────────────────────────────────────────

/// Base 70. Action verbs: ≥5 → +15, ≥3 → +10. Metrics (`N%` / `N+`): ≥3 → +15.
pub fn score_tone(text: &str) -> SubScore {
    let lower = text.to_lowercase();
    let mut score = 70;
    let mut feedback = Vec::new();

    let action_count = distinct_hits(&lower, ACTION_VERBS);
    if action_count >= 5 {
        score += 15;
        feedback.push("Strong use of action verbs".to_string());
    } else if action_count >= 3 {
        score += 10;
    } else {
        feedback.push("Add more action-oriented language".to_string());
    }

    let metrics = QUANTIFIABLE_RE.find_iter(text).count();
    if metrics >= 3 {
        score += 15;
        feedback.push("Good use of quantifiable metrics".to_string());
    } else {
        feedback.push("Include more quantifiable achievements".to_string());
    }

    let score = score.min(MAX_SCORE);
    SubScore {
        score,
        feedback,
        status: tone_status(score),
    }
}

pub fn tone_status(score: u32) -> ScoreStatus {
    if score >= 80 {
        ScoreStatus::Strong
    } else if score < 60 {
        ScoreStatus::NeedsWork
    } else {
        ScoreStatus::Good
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content
// ────────────────────────────────────────────────────────────────────────────

/// Base 60. Extracted skills: ≥10 → +20, ≥5 → +10. Project keywords: ≥3 → +20.
pub fn score_content(extracted_skill_count: usize, text: &str) -> SubScore {
    let lower = text.to_lowercase();
    let mut score = 60;
    let mut feedback = Vec::new();

    if extracted_skill_count >= 10 {
        score += 20;
        feedback.push("Comprehensive skill coverage".to_string());
    } else if extracted_skill_count >= 5 {
        score += 10;
    } else {
        feedback.push("Add more relevant skills".to_string());
    }

    if distinct_hits(&lower, PROJECT_KEYWORDS) >= 3 {
        score += 20;
        feedback.push("Strong project descriptions".to_string());
    } else {
        feedback.push("Include more project details".to_string());
    }

    let score = score.min(MAX_SCORE);
    SubScore {
        score,
        feedback,
        status: content_status(score),
    }
}

pub fn content_status(score: u32) -> ScoreStatus {
    if score >= 75 {
        ScoreStatus::Strong
    } else if score < 60 {
        ScoreStatus::NeedsWork
    } else {
        ScoreStatus::Good
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Structure
// ────────────────────────────────────────────────────────────────────────────

/// Base 75. ≥3 standard sections → +15. Word count in 400..=800 → +10.
pub fn score_structure(text: &str) -> SubScore {
    let lower = text.to_lowercase();
    let mut score = 75;
    let mut feedback = Vec::new();

    if distinct_hits(&lower, SECTION_HEADERS) >= 3 {
        score += 15;
        feedback.push("Well-organized sections".to_string());
    } else {
        feedback.push("Add standard resume sections".to_string());
    }

    let word_count = text.split_whitespace().count();
    if IDEAL_WORDS.contains(&word_count) {
        score += 10;
        feedback.push("Appropriate length".to_string());
    } else if word_count < *IDEAL_WORDS.start() {
        feedback.push("Resume may be too brief".to_string());
    } else {
        feedback.push("Consider condensing content".to_string());
    }

    let score = score.min(MAX_SCORE);
    SubScore {
        score,
        feedback,
        status: structure_status(score),
    }
}

pub fn structure_status(score: u32) -> ScoreStatus {
    if score >= 80 {
        ScoreStatus::Strong
    } else if score < 65 {
        ScoreStatus::NeedsWork
    } else {
        ScoreStatus::Good
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ATS compatibility
// ────────────────────────────────────────────────────────────────────────────

/// Base 60. Matched skills: ≥5 → +20, ≥3 → +10. Fewer than 10 / 20 characters
/// outside `[\p{L}\p{N}_\s\-.,@()]` → +15 / +10. Both "experience" and "education" → +5.
pub fn score_ats(matched_skill_count: usize, text: &str) -> AtsScore {
    let lower = text.to_lowercase();
    let mut score = 60;

    if matched_skill_count >= 5 {
        score += 20;
    } else if matched_skill_count >= 3 {
        score += 10;
    }

    let special_chars = ATS_UNSAFE_CHAR_RE.find_iter(text).count();
    if special_chars < 10 {
        score += 15;
    } else if special_chars < 20 {
        score += 10;
    }

    if lower.contains("experience") && lower.contains("education") {
        score += 5;
    }

    let score = score.min(MAX_SCORE);
    AtsScore {
        score,
        status: ats_status(score),
    }
}

pub fn ats_status(score: u32) -> ScoreStatus {
    if score >= 80 {
        ScoreStatus::Excellent
    } else if score >= 65 {
        ScoreStatus::Good
    } else {
        ScoreStatus::NeedsImprovement
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Skills sub-score: the gap match percentage truncated to an integer.
pub fn score_skills(match_percentage: f64) -> SubScore {
    let score = (match_percentage.clamp(0.0, 100.0) as u32).min(MAX_SCORE);
    SubScore {
        score,
        feedback: Vec::new(),
        status: skills_status(match_percentage),
    }
}

/// First match wins: ≥70 Strong, then <50 Needs Work, otherwise Good.
/// Evaluated on the untruncated percentage.
pub fn skills_status(match_percentage: f64) -> ScoreStatus {
    if match_percentage >= 70.0 {
        ScoreStatus::Strong
    } else if match_percentage < 50.0 {
        ScoreStatus::NeedsWork
    } else {
        ScoreStatus::Good
    }
}
