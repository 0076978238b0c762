use thiserror::Error;

/// Problems with the configuration itself. These abort a run before any
/// document is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config has no frontmatter block")]
    MissingFrontmatter,

    #[error("document '{id}' uses category '{category}' which has no rule set")]
    UnmappedCategory { id: String, category: String },

    #[error("category '{0}' has an empty rule set")]
    EmptyRuleSet(String),

    #[error("category '{0}' has more than one rule set")]
    DuplicateRuleSet(String),

    #[error("duplicate document id '{0}'")]
    DuplicateDocument(String),

    #[error("rule '{rule}' in {owner} references unknown heading group '{group}'")]
    UnknownHeadingGroup {
        owner: String,
        rule: String,
        group: String,
    },

    #[error("rule '{rule}' in {owner} must set exactly one of contains_all, contains_any, section, starts_with, min_length")]
    AmbiguousRule { owner: String, rule: String },

    #[error("rule '{rule}' in {owner} has an empty needle list")]
    EmptyNeedles { owner: String, rule: String },

    #[error("document '{0}' has no path and its category has no dir")]
    NoPath(String),

    #[error("document '{id}' is paired with unknown droid '{droid}'")]
    UnknownDroid { id: String, droid: String },

    #[error("rule '{rule}' uses {placeholder} but document '{id}' has no paired droid")]
    UnboundPlaceholder {
        id: String,
        rule: String,
        placeholder: String,
    },
}

/// Lookups against the document registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown document '{0}'")]
    UnknownDocument(String),
}

/// A registered document whose file could not be read.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("document not found: {path}")]
pub struct DocumentNotFound {
    pub path: String,
}
