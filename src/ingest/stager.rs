//! Content Stager: turns a unit's identifying string into staged content

use crate::ingest::content::ContentHandle;
use crate::ingest::counter::RunCounter;
use crate::ingest::error::{StageError, StageResult};
use crate::ingest::table::StagingTable;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

/// Result of staging one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// Registered in the staging table
    Staged,
    /// Another unit with the same identity was already staged
    Duplicate,
}

/// Stages units into a shared table and counts them
///
/// Cheap to clone; clones share the same table and counter.
#[derive(Debug, Clone)]
pub struct ContentStager {
    table: Arc<StagingTable>,
    counter: Arc<RunCounter>,
}

/// Errors meaning the unit is not a path at all
///
/// Query text routinely produces these: no such entry, a name too long for
/// the filesystem, interior NUL bytes, or a non-directory used as a parent.
fn names_nothing_on_disk(error: &std::io::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::NotFound
            | ErrorKind::InvalidInput
            | ErrorKind::InvalidFilename
            | ErrorKind::NotADirectory
    )
}

impl ContentStager {
    pub fn new(table: Arc<StagingTable>, counter: Arc<RunCounter>) -> Self {
        Self { table, counter }
    }

    /// Materialize a unit's content
    ///
    /// A unit naming an existing regular file is read from disk. A unit that
    /// names nothing on disk, or a directory, is taken as literal query text.
    /// Any other filesystem error means the path exists but cannot be used,
    /// and is a staging failure.
    pub async fn load(unit_id: &str) -> StageResult<ContentHandle> {
        let path = Path::new(unit_id);
        let read_error = |source: std::io::Error| StageError::Read {
            path: path.to_path_buf(),
            source,
        };

        match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.is_file() => {
                let bytes = tokio::fs::read(path).await.map_err(read_error)?;
                log::debug!("Read {} bytes from '{}'", bytes.len(), path.display());
                Ok(ContentHandle::from_file(unit_id, path, bytes))
            }
            Ok(_) => Ok(ContentHandle::from_literal(unit_id)),
            Err(e) if names_nothing_on_disk(&e) => Ok(ContentHandle::from_literal(unit_id)),
            Err(e) => Err(read_error(e)),
        }
    }

    /// Load a unit, register it in the staging table and count it
    pub async fn stage(&self, unit_id: &str) -> StageResult<StageOutcome> {
        let handle = Self::load(unit_id).await?;

        let rejected = self
            .table
            .insert(handle)
            .map_err(|e| StageError::Registration {
                message: e.to_string(),
            })?;
        self.counter.increment();

        match rejected {
            Some(duplicate) => {
                log::debug!(
                    "Unit '{}' is already staged; keeping the first copy",
                    duplicate.unit_id()
                );
                duplicate.close();
                Ok(StageOutcome::Duplicate)
            }
            None => {
                log::debug!("Staged unit '{}'", unit_id);
                Ok(StageOutcome::Staged)
            }
        }
    }
}
