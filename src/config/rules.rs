//! Rule entries as written in the config file.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::rule::{Rule, RuleKind};

/// One rule entry. Exactly one of the kind fields must be set.
///
/// ```yaml
/// - name: process
///   section: process
/// - name: substantial
///   min_length: 500
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub name: String,
    #[serde(default)]
    pub contains_all: Option<Vec<String>>,
    #[serde(default)]
    pub contains_any: Option<Vec<String>>,
    /// Name of a heading group; any heading of the group satisfies the rule.
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub starts_with: Option<String>,
    #[serde(default)]
    pub min_length: Option<usize>,
}

impl RuleConfig {
    /// Turn this entry into a [`Rule`], resolving `section` against `headings`.
    ///
    /// `owner` names where the entry came from, for error messages.
    pub fn to_rule(
        &self,
        owner: &str,
        headings: &BTreeMap<String, Vec<String>>,
    ) -> Result<Rule, ConfigError> {
        let set = [
            self.contains_all.is_some(),
            self.contains_any.is_some(),
            self.section.is_some(),
            self.starts_with.is_some(),
            self.min_length.is_some(),
        ]
        .iter()
        .filter(|s| **s)
        .count();

        if set != 1 {
            return Err(ConfigError::AmbiguousRule {
                owner: owner.to_string(),
                rule: self.name.clone(),
            });
        }

        let kind = if let Some(needles) = &self.contains_all {
            RuleKind::ContainsAll(self.non_empty(owner, needles)?)
        } else if let Some(needles) = &self.contains_any {
            RuleKind::ContainsAny(self.non_empty(owner, needles)?)
        } else if let Some(group) = &self.section {
            let alternatives =
                headings
                    .get(group)
                    .ok_or_else(|| ConfigError::UnknownHeadingGroup {
                        owner: owner.to_string(),
                        rule: self.name.clone(),
                        group: group.clone(),
                    })?;
            RuleKind::ContainsAny(self.non_empty(owner, alternatives)?)
        } else if let Some(marker) = &self.starts_with {
            if marker.is_empty() {
                return Err(self.empty(owner));
            }
            RuleKind::StartsWith(marker.clone())
        } else {
            RuleKind::MinLength(self.min_length.unwrap_or_default())
        };

        Ok(Rule::new(self.name.clone(), kind))
    }

    fn non_empty(&self, owner: &str, needles: &[String]) -> Result<Vec<String>, ConfigError> {
        if needles.is_empty() || needles.iter().any(|n| n.is_empty()) {
            return Err(self.empty(owner));
        }
        Ok(needles.to_vec())
    }

    fn empty(&self, owner: &str) -> ConfigError {
        ConfigError::EmptyNeedles {
            owner: owner.to_string(),
            rule: self.name.clone(),
        }
    }
}
