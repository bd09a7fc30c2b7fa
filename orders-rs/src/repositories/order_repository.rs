use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use crate::models::RepositoryResult;

/// Trait defining the interface for the order line store
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Append one pre-rendered order line; the trailing newline is added
    /// here. Creates the backing file if it does not exist yet.
    async fn append_line(&self, line: &str) -> RepositoryResult<()>;

    /// Read every stored line, trailing newlines preserved. Returns `None`
    /// when the backing file does not exist.
    async fn read_all(&self) -> RepositoryResult<Option<Vec<String>>>;
}

/// Flat-file implementation of the order store: one order per line,
/// append-only.
///
/// Appends are a single unguarded `write_all` on a file opened in append
/// mode. Concurrent writers interleave at whatever granularity the OS
/// append primitive provides; there is deliberately no lock above it.
pub struct FileOrderRepository {
    path: PathBuf,
}

impl FileOrderRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OrderRepository for FileOrderRepository {
    #[instrument(skip(self, line), fields(path = %self.path.display()))]
    async fn append_line(&self, line: &str) -> RepositoryResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(format!("{}\n", line).as_bytes()).await?;

        debug!("Appended one order line");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn read_all(&self) -> RepositoryResult<Option<Vec<String>>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("Backing file does not exist yet");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let lines = contents
            .split_inclusive('\n')
            .map(str::to_string)
            .collect();

        Ok(Some(lines))
    }
}
