//! No-argument binary entry point. Paths are fixed by convention: the filter
//! list is read from `res/list.txt` and the JSON is written to
//! `res/list.json`, both relative to the executable's directory.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hidelist::transcode_file;

const SOURCE_NAME: &str = "res/list.txt";
const SINK_NAME: &str = "res/list.json";

/// Directory the conventional `res/` paths are resolved against: the
/// executable's own directory, or the working directory if that cannot be
/// determined.
fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base = base_dir();
    let source = base.join(SOURCE_NAME);
    let sink = base.join(SINK_NAME);

    transcode_file(&source, &sink)
        .with_context(|| format!("transcoding {} -> {}", source.display(), sink.display()))
}
