//! Transcodes a cosmetic filter list (ad-blocking style element-hiding rules)
//! into a JSON document grouping CSS selectors by target site, plus the set of
//! selectors applied on every site.

pub mod document;
pub mod filters;
pub mod lists;
pub mod transcoder;

pub use document::HideDocument;
pub use transcoder::{transcode_file, TranscodeError};
