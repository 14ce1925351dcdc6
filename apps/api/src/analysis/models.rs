use serde::{Deserialize, Serialize};

use crate::analysis::extractor::ExtractedSkills;
use crate::analysis::gap::GapResult;

/// Qualitative label attached to every score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreStatus {
    Excellent,
    Strong,
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

/// One heuristic score with its feedback lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubScore {
    pub score: u32, // 0 – 100
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<String>,
    pub status: ScoreStatus,
}

/// ATS compatibility carries no feedback list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtsScore {
    pub score: u32,
    pub status: ScoreStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub tone_and_style: SubScore,
    pub content: SubScore,
    pub structure: SubScore,
    pub skills: SubScore,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TipPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImprovementTip {
    pub category: String,
    pub tip: String,
    pub priority: TipPriority,
}

/// Full analysis returned to the request layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub job_role: String,
    pub overall_score: u32,
    pub scores: ScoreBreakdown,
    pub ats_score: AtsScore,
    pub skills_analysis: GapResult,
    pub improvement_tips: Vec<ImprovementTip>,
    pub extracted_skills: ExtractedSkills,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_labels_serialize_with_spaces() {
        assert_eq!(
            serde_json::to_value(ScoreStatus::NeedsWork).unwrap(),
            json!("Needs Work")
        );
        assert_eq!(
            serde_json::to_value(ScoreStatus::NeedsImprovement).unwrap(),
            json!("Needs Improvement")
        );
        assert_eq!(serde_json::to_value(ScoreStatus::Excellent).unwrap(), json!("Excellent"));
    }

    #[test]
    fn test_priority_is_lowercase() {
        assert_eq!(serde_json::to_value(TipPriority::High).unwrap(), json!("high"));
        assert_eq!(serde_json::to_value(TipPriority::Medium).unwrap(), json!("medium"));
    }

    #[test]
    fn test_empty_feedback_is_omitted() {
        let skills = SubScore {
            score: 33,
            feedback: vec![],
            status: ScoreStatus::NeedsWork,
        };
        assert_eq!(
            serde_json::to_value(&skills).unwrap(),
            json!({"score": 33, "status": "Needs Work"})
        );
    }
}
