//! Rules and rule sets: the predicates a document's text is checked against.
//!
//! Every rule is a pure function of the document text. Matching is literal
//! and case-sensitive; nothing here understands markdown or YAML.

use serde::Serialize;

use crate::error::ConfigError;

/// Character offset after which a leading marker must reappear for the
/// block it opens to count as closed.
pub const CLOSING_MARKER_OFFSET: usize = 10;

/// What a rule checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum RuleKind {
    /// Every needle must appear in the text.
    ContainsAll(Vec<String>),
    /// At least one needle must appear in the text.
    ContainsAny(Vec<String>),
    /// The text must open with the marker and repeat it later on.
    StartsWith(String),
    /// The trimmed text must be at least this many characters long.
    MinLength(usize),
}

/// A named, immutable predicate over document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    name: String,
    kind: RuleKind,
}

/// Result of evaluating a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub detail: String,
}

impl Outcome {
    fn pass(detail: impl Into<String>) -> Self {
        Self {
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(detail: impl Into<String>) -> Self {
        Self {
            passed: false,
            detail: detail.into(),
        }
    }
}

impl Rule {
    pub fn new(name: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn contains_all<I, S>(name: impl Into<String>, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            RuleKind::ContainsAll(needles.into_iter().map(Into::into).collect()),
        )
    }

    pub fn contains_any<I, S>(name: impl Into<String>, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            RuleKind::ContainsAny(needles.into_iter().map(Into::into).collect()),
        )
    }

    pub fn starts_with(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::new(name, RuleKind::StartsWith(marker.into()))
    }

    pub fn min_length(name: impl Into<String>, min: usize) -> Self {
        Self::new(name, RuleKind::MinLength(min))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Evaluate this rule against `text`.
    pub fn evaluate(&self, text: &str) -> Outcome {
        evaluate(&self.kind, text)
    }

    /// Return a copy with placeholders expanded in every needle.
    pub fn bind(&self, placeholders: &Placeholders) -> Result<Self, ConfigError> {
        let expand = |s: &String| placeholders.expand(&self.name, s);

        let kind = match &self.kind {
            RuleKind::ContainsAll(needles) => {
                RuleKind::ContainsAll(needles.iter().map(expand).collect::<Result<_, _>>()?)
            }
            RuleKind::ContainsAny(needles) => {
                RuleKind::ContainsAny(needles.iter().map(expand).collect::<Result<_, _>>()?)
            }
            RuleKind::StartsWith(marker) => RuleKind::StartsWith(expand(marker)?),
            RuleKind::MinLength(n) => RuleKind::MinLength(*n),
        };

        Ok(Self {
            name: self.name.clone(),
            kind,
        })
    }
}

/// Values substituted into needles when a rule set is bound to a document.
///
/// - `{id}`: the document id
/// - `{name}`: the id without any `ns/` prefix
/// - `{title}`: the configured title, or `{name}` in title case
/// - `{droid}` / `{droid_title}`: id and title of the paired droid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    id: String,
    title: String,
    droid: Option<(String, String)>,
}

impl Placeholders {
    pub fn new(document_id: &str) -> Self {
        Self {
            id: document_id.to_string(),
            title: title_case(document_name(document_id)),
            droid: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_droid(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.droid = Some((id.into(), title.into()));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn expand(&self, rule: &str, needle: &str) -> Result<String, ConfigError> {
        let out = needle
            .replace("{id}", &self.id)
            .replace("{name}", document_name(&self.id))
            .replace("{title}", &self.title);

        match &self.droid {
            Some((id, title)) => Ok(out.replace("{droid_title}", title).replace("{droid}", id)),
            None => match DROID_PLACEHOLDERS.iter().find(|p| out.contains(*p)) {
                Some(placeholder) => Err(ConfigError::UnboundPlaceholder {
                    id: self.id.clone(),
                    rule: rule.to_string(),
                    placeholder: placeholder.to_string(),
                }),
                None => Ok(out),
            },
        }
    }
}

const DROID_PLACEHOLDERS: [&str; 2] = ["{droid_title}", "{droid}"];

/// Evaluate a rule kind against document text.
pub fn evaluate(kind: &RuleKind, text: &str) -> Outcome {
    match kind {
        RuleKind::ContainsAll(needles) => match needles.iter().find(|n| !text.contains(n.as_str())) {
            Some(missing) => Outcome::fail(format!("missing '{}'", missing)),
            None => Outcome::pass(format!("found all {} required entries", needles.len())),
        },
        RuleKind::ContainsAny(needles) => match needles.iter().find(|n| text.contains(n.as_str())) {
            Some(found) => Outcome::pass(format!("found '{}'", found)),
            None => Outcome::fail(format!(
                "none of {} found",
                needles
                    .iter()
                    .map(|n| format!("'{}'", n))
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        },
        RuleKind::StartsWith(marker) => {
            if !text.starts_with(marker.as_str()) {
                return Outcome::fail(format!("does not open with '{}'", marker));
            }
            let offset = text
                .char_indices()
                .nth(CLOSING_MARKER_OFFSET)
                .map_or(text.len(), |(i, _)| i);
            let closed = text[offset..].contains(marker.as_str());
            if closed {
                Outcome::pass(format!("opens and closes with '{}'", marker))
            } else {
                Outcome::fail(format!("opening '{}' is never closed", marker))
            }
        }
        RuleKind::MinLength(min) => {
            let len = text.trim().chars().count();
            if len >= *min {
                Outcome::pass(format!("{} characters (minimum {})", len, min))
            } else {
                Outcome::fail(format!("only {} characters (minimum {})", len, min))
            }
        }
    }
}

/// `commands/tdd` -> `tdd`
pub fn document_name(document_id: &str) -> &str {
    document_id.rsplit('/').next().unwrap_or(document_id)
}

/// `root-cause-tracing` -> `Root Cause Tracing`
pub fn title_case(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The ordered rules that define the schema for one document category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    category: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(category: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            category: category.into(),
            rules,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Specialise this rule set for one document: expand placeholders and
    /// append the document's own rules after the category's.
    pub fn bind(&self, placeholders: &Placeholders, extra: &[Rule]) -> Result<RuleSet, ConfigError> {
        Ok(RuleSet {
            category: self.category.clone(),
            rules: self
                .rules
                .iter()
                .chain(extra.iter())
                .map(|r| r.bind(placeholders))
                .collect::<Result<_, _>>()?,
        })
    }
}
