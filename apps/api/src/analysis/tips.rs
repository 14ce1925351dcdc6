//! Score aggregation and improvement-tip generation.

use crate::analysis::models::{ImprovementTip, ScoreBreakdown, SubScore, TipPriority};

const TONE_WEIGHT: f64 = 0.20;
const CONTENT_WEIGHT: f64 = 0.25;
const STRUCTURE_WEIGHT: f64 = 0.20;
const SKILLS_WEIGHT: f64 = 0.35;

/// Number of missing skills turned into tips.
const MAX_SKILL_TIPS: usize = 3;

/// Weighted sum of the four sub-scores, truncated toward zero.
pub fn overall_score(scores: &ScoreBreakdown) -> u32 {
    let weighted = f64::from(scores.tone_and_style.score) * TONE_WEIGHT
        + f64::from(scores.content.score) * CONTENT_WEIGHT
        + f64::from(scores.structure.score) * STRUCTURE_WEIGHT
        + f64::from(scores.skills.score) * SKILLS_WEIGHT;
    weighted as u32
}

/// Tips in fixed order: tone, content, structure, then up to three missing skills.
/// A category only contributes when its score is below that category's bar.
pub fn improvement_tips(
    tone: &SubScore,
    content: &SubScore,
    structure: &SubScore,
    missing_skills: &[String],
) -> Vec<ImprovementTip> {
    let mut tips = Vec::new();

    if tone.score < 80 {
        tips.extend(feedback_tips(tone, "Tone & Style", TipPriority::Medium));
    }
    if content.score < 75 {
        tips.extend(feedback_tips(content, "Content", TipPriority::High));
    }
    if structure.score < 80 {
        tips.extend(feedback_tips(structure, "Structure", TipPriority::Medium));
    }

    tips.extend(
        missing_skills
            .iter()
            .take(MAX_SKILL_TIPS)
            .map(|skill| ImprovementTip {
                category: "Skills".to_string(),
                tip: format!("Add '{skill}' to your skillset - highly demanded for this role"),
                priority: TipPriority::High,
            }),
    );

    tips
}

fn feedback_tips<'a>(
    sub: &'a SubScore,
    category: &'a str,
    priority: TipPriority,
) -> impl Iterator<Item = ImprovementTip> + 'a {
    sub.feedback.iter().map(move |fb| ImprovementTip {
        category: category.to_string(),
        tip: fb.clone(),
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::ScoreStatus;

    fn sub(score: u32, feedback: &[&str]) -> SubScore {
        SubScore {
            score,
            feedback: feedback.iter().map(|s| s.to_string()).collect(),
            status: ScoreStatus::Good,
        }
    }

    #[test]
    fn test_overall_score_weights() {
        // 70*0.2 + 60*0.25 + 75*0.2 + 33*0.35 = 14 + 15 + 15 + 11.55 = 55.55
        let scores = ScoreBreakdown {
            tone_and_style: sub(70, &[]),
            content: sub(60, &[]),
            structure: sub(75, &[]),
            skills: sub(33, &[]),
        };
        assert_eq!(overall_score(&scores), 55);
    }

    #[test]
    fn test_overall_score_truncates_fraction() {
        // 85*0.2 + 80*0.25 + 85*0.2 + 66*0.35 = 17 + 20 + 17 + 23.1 = 77.1
        let scores = ScoreBreakdown {
            tone_and_style: sub(85, &[]),
            content: sub(80, &[]),
            structure: sub(85, &[]),
            skills: sub(66, &[]),
        };
        assert_eq!(overall_score(&scores), 77);
    }

    #[test]
    fn test_tips_follow_fixed_category_order() {
        let tips = improvement_tips(
            &sub(70, &["tone a", "tone b"]),
            &sub(60, &["content a"]),
            &sub(75, &["structure a"]),
            &["excel".to_string()],
        );
        let categories: Vec<&str> = tips.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Tone & Style", "Tone & Style", "Content", "Structure", "Skills"]
        );
        assert_eq!(tips[0].priority, TipPriority::Medium);
        assert_eq!(tips[2].priority, TipPriority::High);
        assert_eq!(tips[3].priority, TipPriority::Medium);
        assert_eq!(
            tips[4].tip,
            "Add 'excel' to your skillset - highly demanded for this role"
        );
        assert_eq!(tips[4].priority, TipPriority::High);
    }

    #[test]
    fn test_scores_at_bar_emit_no_feedback_tips() {
        let tips = improvement_tips(
            &sub(80, &["Strong use of action verbs"]),
            &sub(75, &["Strong project descriptions"]),
            &sub(80, &["Appropriate length"]),
            &[],
        );
        assert!(tips.is_empty());
    }

    #[test]
    fn test_at_most_three_skill_tips_in_given_order() {
        let missing: Vec<String> = ["aws", "docker", "git", "sql"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tips = improvement_tips(&sub(90, &[]), &sub(90, &[]), &sub(90, &[]), &missing);
        assert_eq!(tips.len(), 3);
        assert!(tips[0].tip.contains("'aws'"));
        assert!(tips[1].tip.contains("'docker'"));
        assert!(tips[2].tip.contains("'git'"));
    }
}
