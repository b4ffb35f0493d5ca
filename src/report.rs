use crate::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output directory for one run, named after the run's local start time.
pub struct Report {
    dir: PathBuf,
}

impl Report {
    /// Create the report directory under `root`, recursively. This happens
    /// before any fetch work so a filesystem failure aborts the run with
    /// nothing in flight.
    pub async fn create(root: impl AsRef<Path>) -> Result<Self> {
        let stamp = Local::now().format("%Y/%m/%d %H:%M:%S").to_string();
        Self::create_named(root, &stamp).await
    }

    async fn create_named(root: impl AsRef<Path>, stamp: &str) -> Result<Self> {
        let dir = root.as_ref().join(sanitize(stamp));
        tokio::fs::create_dir_all(&dir).await?;
        info!("Report directory ready: {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, contents).await?;
        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

/// Timestamps carry path separators and colons; both are replaced before the
/// stamp becomes a directory name.
fn sanitize(stamp: &str) -> String {
    stamp.replace([':', '/'], "-")
}
