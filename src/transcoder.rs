//! File-level transcoding: read a filter list, build a [`HideDocument`], and
//! write it out as a JSON document.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::document::HideDocument;
use crate::filters::cosmetic::FilterError;

/// Possible failure reasons when transcoding a filter-list file.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("filter list not readable at {path}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write JSON output at {path}")]
    SinkWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    MalformedLine(#[from] FilterError),
}

/// Read the filter list at `source` and write the grouped-selector JSON to
/// `sink`, replacing any previous contents.
///
/// The JSON goes to a temporary file next to `sink` first and is renamed into
/// place on success, so a failed run never leaves a partial file behind.
pub fn transcode_file(source: &Path, sink: &Path) -> Result<(), TranscodeError> {
    let source_err = |e: io::Error| TranscodeError::SourceNotFound {
        path: source.to_path_buf(),
        source: e,
    };

    let reader = BufReader::new(File::open(source).map_err(source_err)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        // `lines()` strips `\n` and `\r\n`; a last line without a terminator
        // comes through intact rather than losing its final character.
        lines.push(line.map_err(source_err)?);
    }

    let document = HideDocument::from_lines(&lines)?;
    info!(
        independent = document.independent.len(),
        sites = document.sites.len(),
        "filter list transcoded"
    );

    write_json(&document, sink)
}

fn write_json(document: &HideDocument, sink: &Path) -> Result<(), TranscodeError> {
    let sink_err = |e: io::Error| TranscodeError::SinkWriteError {
        path: sink.to_path_buf(),
        source: e,
    };

    let tmp = sink.with_extension("json.tmp");
    let mut writer = BufWriter::new(File::create(&tmp).map_err(sink_err)?);

    let written = serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| sink_err(e.into()))
        .and_then(|()| writer.flush().map_err(sink_err));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    drop(writer);

    fs::rename(&tmp, sink).map_err(sink_err)
}
