#![allow(dead_code)]

//! Skill vocabulary loader — role dataset + alias table → in-memory lookup values.
//!
//! Loading is all-or-nothing: a missing or malformed file is a `DatasetMissing`
//! error, never an empty default. The resulting `SkillDataset` is a plain value
//! handed to the engine; nothing here is cached globally.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;

/// One role record as stored in `job_skills.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub role_name: String,
    #[serde(default)]
    pub core_skills: Vec<String>,
    #[serde(default)]
    pub optional_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RoleFile {
    roles: Vec<RoleRecord>,
}

/// Union of every role's core and optional skills, lowercased and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillVocabulary(BTreeSet<String>);

impl SkillVocabulary {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillVocabulary(
            iter.into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .filter(|s| !s.trim().is_empty())
                .collect(),
        )
    }
}

/// Alias (any case) → canonical skill. Kept as loaded; keys are lowercased at
/// lookup time by the extractor. Targets need not be vocabulary members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AliasMap(BTreeMap<String, String>);

impl AliasMap {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AliasMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A single role's target skills: core followed by optional, as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSkillSet {
    pub role_name: String,
    pub skills: Vec<String>,
}

/// Both backing datasets, loaded together.
#[derive(Debug, Clone, Default)]
pub struct SkillDataset {
    roles: Vec<RoleRecord>,
    aliases: AliasMap,
}

impl SkillDataset {
    /// Builds a dataset from already-parsed records, rejecting duplicate role names.
    pub fn new(roles: Vec<RoleRecord>, aliases: AliasMap) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for role in &roles {
            if !seen.insert(role.role_name.to_lowercase()) {
                return Err(AppError::DatasetMissing(format!(
                    "duplicate role '{}' in job skills dataset",
                    role.role_name
                )));
            }
        }
        Ok(Self { roles, aliases })
    }

    /// Reads `job_skills.json` and `job_alias.json` from disk.
    pub async fn load(skills_path: &Path, aliases_path: &Path) -> Result<Self, AppError> {
        let role_file: RoleFile = read_json(skills_path).await?;
        let aliases: AliasMap = read_json(aliases_path).await?;

        info!(
            roles = role_file.roles.len(),
            aliases = aliases.len(),
            "Skill dataset loaded"
        );

        Self::new(role_file.roles, aliases)
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    /// Flattened vocabulary across every role.
    pub fn vocabulary(&self) -> SkillVocabulary {
        self.roles
            .iter()
            .flat_map(|r| r.core_skills.iter().chain(r.optional_skills.iter()))
            .collect()
    }

    /// Role names in dataset order.
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.role_name.clone()).collect()
    }

    /// Case-insensitive exact lookup. `None` means the role does not exist;
    /// a role with no skills yields `Some` with an empty list.
    pub fn role_skills(&self, role_name: &str) -> Option<RoleSkillSet> {
        let wanted = role_name.to_lowercase();
        self.roles
            .iter()
            .find(|r| r.role_name.to_lowercase() == wanted)
            .map(|r| RoleSkillSet {
                role_name: r.role_name.clone(),
                skills: r
                    .core_skills
                    .iter()
                    .chain(r.optional_skills.iter())
                    .cloned()
                    .collect(),
            })
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    debug!(path = %path.display(), "Reading dataset file");

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::DatasetMissing(format!("cannot read {}: {e}", path.display()))
    })?;

    serde_json::from_str(&raw)
        .map_err(|e| AppError::DatasetMissing(format!("cannot parse {}: {e}", path.display())))
}
