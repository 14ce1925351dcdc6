//! Skill extractor — vocabulary and alias hits in normalized text.
//!
//! Matching is unanchored substring containment: a short skill such as "go"
//! also hits inside "google". Tightening this to word boundaries would change
//! which skills a resume reports, so the policy is kept as is.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::vocabulary::{AliasMap, SkillVocabulary};

/// Sorted, deduplicated canonical skills found in one resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedSkills(Vec<String>);

impl ExtractedSkills {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExtractedSkills {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let set: BTreeSet<String> = iter.into_iter().map(Into::into).collect();
        ExtractedSkills(set.into_iter().collect())
    }
}

/// Scans `normalized_text` for every vocabulary entry and every alias.
/// An alias hit contributes its lowercased canonical target.
pub fn extract_skills(
    normalized_text: &str,
    vocabulary: &SkillVocabulary,
    aliases: &AliasMap,
) -> ExtractedSkills {
    if normalized_text.is_empty() {
        return ExtractedSkills::default();
    }

    let vocabulary_hits = vocabulary
        .iter()
        .filter(|skill| normalized_text.contains(*skill))
        .map(str::to_string);

    let alias_hits = aliases
        .iter()
        .filter(|(alias, _)| {
            let alias = alias.to_lowercase();
            !alias.is_empty() && normalized_text.contains(alias.as_str())
        })
        .map(|(_, canonical)| canonical.to_lowercase());

    vocabulary_hits.chain(alias_hits).collect()
}
