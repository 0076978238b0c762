//! Configuration for droidlint projects.
//!
//! The config is a markdown file whose YAML frontmatter declares heading
//! groups, per-category rule sets, and the documents to check. Anything
//! after the frontmatter is free-form notes for humans.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::registry::{DocumentRef, FsSource, Registration, Registry};
use crate::rule::{document_name, Placeholders, RuleSet};

pub mod defaults;
pub mod rules;

pub use defaults::*;
pub use rules::*;

/// Default config location, relative to the working directory.
pub const CONFIG_PATH: &str = ".droidlint/config.md";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    /// Named lists of equivalent headings, referenced by `section:` rules.
    #[serde(default)]
    pub headings: BTreeMap<String, Vec<String>>,
    pub categories: BTreeMap<String, CategoryConfig>,
    #[serde(default)]
    pub documents: Vec<DocumentConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: String,
    /// Directory document paths are relative to.
    #[serde(default = "default_root")]
    pub root: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Directory under the project root holding this category's documents.
    #[serde(default)]
    pub dir: Option<String>,
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentConfig {
    pub id: String,
    pub category: String,
    /// Explicit path; defaults to `<category dir>/<name>.md`.
    #[serde(default)]
    pub path: Option<String>,
    /// Value of `{title}`; defaults to the name in title case.
    #[serde(default)]
    pub title: Option<String>,
    /// Id of the droid this document invokes, for `{droid}` and `{droid_title}`.
    #[serde(default)]
    pub droid: Option<String>,
    /// Rules checked after the category's.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Config {
    /// Load the config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.ok_or(ConfigError::MissingFrontmatter)?;

        let config: Config =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;

        config.validate()?;

        Ok(config)
    }

    /// Check everything that can be checked without reading documents.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry().map(|_| ())
    }

    /// Rule sets for every category, with `section:` references expanded.
    pub fn rule_sets(&self) -> Result<Vec<RuleSet>, ConfigError> {
        self.categories
            .iter()
            .map(|(category, cfg)| {
                let owner = format!("category '{}'", category);
                let rules = cfg
                    .rules
                    .iter()
                    .map(|r| r.to_rule(&owner, &self.headings))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(RuleSet::new(category.clone(), rules))
            })
            .collect()
    }

    /// Build the document registry this config describes.
    pub fn registry(&self) -> Result<Registry, ConfigError> {
        let rule_sets = self.rule_sets()?;

        let placeholders: HashMap<&str, Placeholders> = self
            .documents
            .iter()
            .map(|doc| {
                let p = Placeholders::new(&doc.id);
                let p = match &doc.title {
                    Some(title) => p.with_title(title),
                    None => p,
                };
                (doc.id.as_str(), p)
            })
            .collect();

        let mut seen = HashSet::new();
        let mut documents = Vec::with_capacity(self.documents.len());
        for doc in &self.documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(ConfigError::DuplicateDocument(doc.id.clone()));
            }
            let category = self.categories.get(&doc.category).ok_or_else(|| {
                ConfigError::UnmappedCategory {
                    id: doc.id.clone(),
                    category: doc.category.clone(),
                }
            })?;

            let path = match (&doc.path, &category.dir) {
                (Some(path), _) => path.clone(),
                (None, Some(dir)) => format!("{}/{}.md", dir, document_name(&doc.id)),
                (None, None) => return Err(ConfigError::NoPath(doc.id.clone())),
            };

            let owner = format!("document '{}'", doc.id);
            let extra = doc
                .rules
                .iter()
                .map(|r| r.to_rule(&owner, &self.headings))
                .collect::<Result<Vec<_>, _>>()?;

            let mut bound = placeholders
                .get(doc.id.as_str())
                .cloned()
                .unwrap_or_else(|| Placeholders::new(&doc.id));
            if let Some(droid) = &doc.droid {
                let paired = placeholders
                    .get(droid.as_str())
                    .ok_or_else(|| ConfigError::UnknownDroid {
                        id: doc.id.clone(),
                        droid: droid.clone(),
                    })?;
                bound = bound.with_droid(droid, paired.title());
            }

            documents.push(
                Registration::new(DocumentRef::new(&doc.id, path, &doc.category))
                    .with_placeholders(bound)
                    .with_rules(extra),
            );
        }

        Registry::from_registrations(rule_sets, documents)
    }

    /// Directory document paths resolve against, relative to `base`.
    pub fn root_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.project.root)
    }

    /// Filesystem source rooted at this project's document directory.
    pub fn source(&self, base: &Path) -> FsSource {
        FsSource::new(self.root_dir(base))
    }
}

/// Split a markdown file into its YAML frontmatter and body.
///
/// Returns `None` for the frontmatter when the file does not open with a
/// `---` block.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
