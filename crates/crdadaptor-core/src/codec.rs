//! Policy document codec.
//!
//! Document format: one rule per line, `<ptype>,<field1>,...,<fieldN>`.
//! - Blank lines and `#` comment lines are ignored on read.
//! - A trailing `\r` is stripped; fields are otherwise kept byte for byte.
//! - No escaping: fields must not contain `,` or a newline.
//!
//! Parsing is panic-free: a bad line surfaces as `AdaptorError::Malformed`.

use crate::error::{AdaptorError, Result};
use crate::model::{PolicyModel, Rule, SECTION_GROUPING, SECTION_POLICY};

/// Sections written by `serialize`, in document order.
const SECTIONS: [&str; 2] = [SECTION_POLICY, SECTION_GROUPING];

/// One parsed document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyLine {
    /// Section inferred from the policy type's first character.
    pub section: &'static str,
    pub ptype: String,
    pub rule: Rule,
}

/// Outcome of feeding a whole document into a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Serialize every `p` and `g` rule of `model` into a document.
pub fn serialize(model: &PolicyModel) -> String {
    let mut out = String::new();
    for sec in SECTIONS {
        for (ptype, rules) in model.section(sec) {
            for rule in rules {
                if rule.is_empty() {
                    tracing::warn!(ptype = %ptype, "skipping empty rule");
                    continue;
                }
                out.push_str(ptype);
                for field in rule {
                    out.push(',');
                    out.push_str(field);
                }
                out.push('\n');
            }
        }
    }
    out
}

/// Parse a single line. `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<PolicyLine>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let head = line.trim_start();
    if head.is_empty() || head.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split(',');
    // split always yields at least one token
    let ptype = tokens.next().unwrap_or_default();
    let section = section_of(ptype)
        .ok_or_else(|| AdaptorError::Malformed(format!("unknown policy type: {ptype:?}")))?;

    let rule: Rule = tokens.map(str::to_string).collect();
    if rule.is_empty() {
        return Err(AdaptorError::Malformed(format!(
            "policy type {ptype} has no fields"
        )));
    }

    Ok(Some(PolicyLine {
        section,
        ptype: ptype.to_string(),
        rule,
    }))
}

/// Parse `line` and append its rule to `model`.
pub fn load_policy_line(line: &str, model: &mut PolicyModel) -> Result<()> {
    if let Some(parsed) = parse_line(line)? {
        model.add_rule(parsed.section, &parsed.ptype, parsed.rule);
    }
    Ok(())
}

/// Feed every line of `doc` into `model`.
///
/// Malformed lines are skipped with a warning; the rest are still applied.
/// Existing model content is kept.
pub fn load_document(doc: &str, model: &mut PolicyModel) -> LoadSummary {
    let mut summary = LoadSummary::default();
    for (idx, line) in doc.split('\n').enumerate() {
        match parse_line(line) {
            Ok(Some(parsed)) => {
                model.add_rule(parsed.section, &parsed.ptype, parsed.rule);
                summary.loaded += 1;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "skipping policy line");
                summary.skipped += 1;
            }
        }
    }
    summary
}

fn section_of(ptype: &str) -> Option<&'static str> {
    match ptype.chars().next() {
        Some('p') => Some(SECTION_POLICY),
        Some('g') => Some(SECTION_GROUPING),
        _ => None,
    }
}
