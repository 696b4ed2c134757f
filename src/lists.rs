/// Marks the start of the script-blocking section of a filter list. Cosmetic
/// rules never appear past it, so scanning stops there.
pub const SCRIPT_BLOCKING_SENTINEL: &str = "! SCRIPT BLOCKING";

/// Characters that open a comment, metadata header, exception rule, or a
/// non-cosmetic rule. Lines starting with any of these are skipped.
const SKIP_MARKERS: &[char] = &['!', '[', '@', '|', '/'];

#[derive(Debug, PartialEq)]
pub enum LineType {
    /// Comment, metadata, exception/network rule, or a line without `##`.
    Ignore,
    /// The script-blocking sentinel; this line and everything after it belong
    /// to a different filter category and are not processed.
    StopAll,
    Cosmetic,
}

/**
 * Given a single line (string, line terminator already stripped), checks
 * whether it is an eligible cosmetic filter, the end-of-section sentinel, or
 * something to skip. This check is performed before calling
 * `CosmeticFilter::parse` on the line.
 */
pub fn detect_line_type(line: &str) -> LineType {
    // The sentinel starts with '!' and would otherwise look like a comment,
    // so it has to be checked first.
    if line.starts_with(SCRIPT_BLOCKING_SENTINEL) {
        return LineType::StopAll;
    }

    if line.is_empty() || line.starts_with(SKIP_MARKERS) {
        return LineType::Ignore;
    }

    // Only element-hiding rules carry the `##` delimiter
    if !line.contains("##") {
        return LineType::Ignore;
    }

    LineType::Cosmetic
}

#[cfg(test)]
#[path = "../tests/unit/lists.rs"]
mod unit_tests;
