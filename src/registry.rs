//! Document registry: which documents exist, where they live, and which
//! rule set governs each of them.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ConfigError, DocumentNotFound, RegistryError};
use crate::rule::{Placeholders, Rule, RuleSet};

/// One document to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRef {
    pub id: String,
    pub path: String,
    pub category: String,
}

impl DocumentRef {
    pub fn new(id: impl Into<String>, path: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            category: category.into(),
        }
    }
}

/// Read access to document text.
///
/// Implementations return `None` for anything that cannot be read; the
/// registry turns that into [`DocumentNotFound`].
pub trait DocumentSource: Send + Sync {
    fn read(&self, path: &str) -> Option<String>;
}

/// Documents on local disk, with paths relative to `root`.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for FsSource {
    fn read(&self, path: &str) -> Option<String> {
        let full = self.root.join(path);
        match fs::read_to_string(&full) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!(path = %full.display(), error = %e, "document unreadable");
                None
            }
        }
    }
}

/// In-memory documents keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, path: &str) -> Option<String> {
        self.files.get(path).cloned()
    }
}

/// A document plus what specialises its category's rule set for it.
#[derive(Debug, Clone)]
pub struct Registration {
    pub doc: DocumentRef,
    pub placeholders: Placeholders,
    /// Evaluated after the category's rules.
    pub rules: Vec<Rule>,
}

impl Registration {
    pub fn new(doc: DocumentRef) -> Self {
        Self {
            placeholders: Placeholders::new(&doc.id),
            doc,
            rules: Vec::new(),
        }
    }

    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }
}

#[derive(Debug, Clone)]
struct Entry {
    doc: DocumentRef,
    rules: RuleSet,
}

/// Documents in declaration order, each bound to its rule set.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    rule_sets: BTreeMap<String, RuleSet>,
}

impl Registry {
    /// Build a registry where every document uses its category's rule set as is.
    pub fn new(rule_sets: Vec<RuleSet>, documents: Vec<DocumentRef>) -> Result<Self, ConfigError> {
        Self::from_registrations(
            rule_sets,
            documents.into_iter().map(Registration::new).collect(),
        )
    }

    /// Build a registry from documents that may carry placeholders and rules
    /// of their own.
    pub fn from_registrations(
        rule_sets: Vec<RuleSet>,
        registrations: Vec<Registration>,
    ) -> Result<Self, ConfigError> {
        let mut sets = BTreeMap::new();
        for set in rule_sets {
            if set.is_empty() {
                return Err(ConfigError::EmptyRuleSet(set.category().to_string()));
            }
            if sets.contains_key(set.category()) {
                return Err(ConfigError::DuplicateRuleSet(set.category().to_string()));
            }
            sets.insert(set.category().to_string(), set);
        }

        let mut entries = Vec::with_capacity(registrations.len());
        let mut index = HashMap::new();
        let mut seen = HashSet::new();

        for Registration {
            doc,
            placeholders,
            rules: extra,
        } in registrations
        {
            if !seen.insert(doc.id.clone()) {
                return Err(ConfigError::DuplicateDocument(doc.id));
            }
            let set = sets
                .get(&doc.category)
                .ok_or_else(|| ConfigError::UnmappedCategory {
                    id: doc.id.clone(),
                    category: doc.category.clone(),
                })?;
            let rules = set.bind(&placeholders, &extra)?;
            index.insert(doc.id.clone(), entries.len());
            entries.push(Entry { doc, rules });
        }

        Ok(Self {
            entries,
            index,
            rule_sets: sets,
        })
    }

    /// Look up a document by id.
    pub fn resolve(&self, id: &str) -> Result<&DocumentRef, RegistryError> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i].doc)
            .ok_or_else(|| RegistryError::UnknownDocument(id.to_string()))
    }

    /// Fetch a document's text through `source`.
    pub fn read(
        &self,
        doc: &DocumentRef,
        source: &dyn DocumentSource,
    ) -> Result<String, DocumentNotFound> {
        source.read(&doc.path).ok_or_else(|| DocumentNotFound {
            path: doc.path.clone(),
        })
    }

    /// The rule set bound to a registered document.
    pub fn rule_set_for(&self, id: &str) -> Result<&RuleSet, RegistryError> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i].rules)
            .ok_or_else(|| RegistryError::UnknownDocument(id.to_string()))
    }

    /// All documents in declaration order.
    pub fn documents(&self) -> impl Iterator<Item = &DocumentRef> {
        self.entries.iter().map(|e| &e.doc)
    }

    pub fn categories(&self) -> impl Iterator<Item = &RuleSet> {
        self.rule_sets.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
