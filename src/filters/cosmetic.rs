//! Representation of element-hiding (cosmetic) rules: the `sites##selectors`
//! form of a filter-list line.

use thiserror::Error;

/// Possible failure reasons when parsing a cosmetic rule line.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("line lacks the `##` cosmetic delimiter: {0:?}")]
    MalformedLine(String),
}

/// A parsed cosmetic filter rule.
///
/// `hostnames` is empty for rules that apply on every site. Hostnames and
/// selectors are kept verbatim apart from `~` removal; surrounding whitespace
/// is deliberately preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct CosmeticFilter {
    pub hostnames: Vec<String>,
    pub selectors: Vec<String>,
}

impl CosmeticFilter {
    /// Parse the rule in `line` into a `CosmeticFilter`.
    ///
    /// The line is split at the first `##` only; any later `##` stays inside
    /// the selector part. Upstream marks negated sites with `~`; the marker is
    /// stripped but the negation itself is not modeled, so those sites are
    /// treated as plain targets.
    pub fn parse(line: &str) -> Result<CosmeticFilter, FilterError> {
        let (site_spec, selector_spec) = line
            .split_once("##")
            .ok_or_else(|| FilterError::MalformedLine(line.to_string()))?;

        let hostnames = if site_spec.is_empty() {
            Vec::new()
        } else {
            site_spec
                .split(',')
                .map(|site| site.replace('~', ""))
                .collect()
        };

        let selectors = selector_spec.split(',').map(str::to_string).collect();

        Ok(CosmeticFilter {
            hostnames,
            selectors,
        })
    }

    /// True when the rule carries no site restriction.
    pub fn is_independent(&self) -> bool {
        self.hostnames.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/cosmetic.rs"]
mod unit_tests;
