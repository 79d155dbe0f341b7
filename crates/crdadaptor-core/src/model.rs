//! In-memory policy model.
//!
//! Layout: section (`"p"` / `"g"`) -> policy type (`"p"`, `"p2"`, `"g"`, ...) ->
//! ordered rules. Policy types are kept in a `BTreeMap` so iteration (and thus
//! serialization) is lexicographic by type name. Rules keep insertion order
//! and are never deduplicated.

use std::collections::BTreeMap;

/// Section holding authorization rules.
pub const SECTION_POLICY: &str = "p";
/// Section holding role / grouping rules.
pub const SECTION_GROUPING: &str = "g";

/// One rule: ordered string fields, arity defined by its policy type.
pub type Rule = Vec<String>;

/// Build a rule from borrowed fields.
pub fn to_rule(fields: &[&str]) -> Rule {
    fields.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyModel {
    sections: BTreeMap<String, BTreeMap<String, Vec<Rule>>>,
}

impl PolicyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rule` under `sec`/`ptype`, creating both on first use.
    pub fn add_rule(&mut self, sec: &str, ptype: &str, rule: Rule) {
        self.sections
            .entry(sec.to_string())
            .or_default()
            .entry(ptype.to_string())
            .or_default()
            .push(rule);
    }

    /// Rules stored under `sec`/`ptype` (empty when absent).
    pub fn rules(&self, sec: &str, ptype: &str) -> &[Rule] {
        self.sections
            .get(sec)
            .and_then(|types| types.get(ptype))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate `(policy type, rules)` of one section in model order.
    pub fn section(&self, sec: &str) -> impl Iterator<Item = (&str, &[Rule])> {
        self.sections
            .get(sec)
            .into_iter()
            .flat_map(|types| types.iter().map(|(k, v)| (k.as_str(), v.as_slice())))
    }

    /// Total number of rules across all sections.
    pub fn len(&self) -> usize {
        self.sections
            .values()
            .flat_map(|types| types.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
