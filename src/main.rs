//! ringtoy viewer.
//!
//! Usage: `ringtoy [SNAPSHOT.json]`
//!
//! With a snapshot path, the toy restores from that file if it exists and
//! saves back to it while running. Set `RUST_LOG=ringtoy=debug` to trace
//! slider and pool activity.

use ringtoy::SceneConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let snapshot_path = std::env::args_os().nth(1).map(PathBuf::from);
    ringtoy::viewer::run(SceneConfig::default(), snapshot_path)
}
