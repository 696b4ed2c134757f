//! The accumulating output document: CSS selectors grouped per site, plus the
//! site-independent set.

use indexmap::IndexMap;
use serde::Serialize;

use crate::filters::cosmetic::{CosmeticFilter, FilterError};
use crate::lists::{detect_line_type, LineType};

/// Selectors grouped by the sites they apply to, with unrestricted selectors
/// collected separately.
///
/// Serialized field order is `independent` then `sites`. Site keys keep
/// insertion order and per-site selectors keep append order, so output is
/// deterministic across runs. Duplicates are preserved as encountered.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct HideDocument {
    pub independent: Vec<String>,
    pub sites: IndexMap<String, Vec<String>>,
}

impl HideDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed rule into the document.
    ///
    /// A rule listing multiple sites appends every one of its selectors to
    /// every listed site, not one selector per site.
    pub fn push(&mut self, filter: CosmeticFilter) {
        if filter.is_independent() {
            self.independent.extend(filter.selectors);
        } else {
            for site in filter.hostnames {
                self.sites
                    .entry(site)
                    .or_default()
                    .extend(filter.selectors.iter().cloned());
            }
        }
    }

    /// Build a document from filter-list lines (terminators already stripped)
    /// in a single pass, stopping at the script-blocking sentinel.
    ///
    /// Pure with respect to IO; the caller owns reading the list. The only
    /// error is [`FilterError::MalformedLine`], which classification rules out
    /// before parsing, so in practice this never fails.
    pub fn from_lines<I>(lines: I) -> Result<Self, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut document = HideDocument::new();
        for line in lines {
            let line = line.as_ref();
            match detect_line_type(line) {
                LineType::StopAll => {
                    tracing::debug!("script-blocking section reached, ignoring remainder");
                    break;
                }
                LineType::Ignore => continue,
                LineType::Cosmetic => document.push(CosmeticFilter::parse(line)?),
            }
        }
        Ok(document)
    }
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod unit_tests;
