//! Public API for query ingestion and dispatch

pub use crate::ingest::content::{
    decode_single_byte, encode_single_byte, split_lines, ContentHandle, ContentReader,
    ContentSource,
};
pub use crate::ingest::counter::RunCounter;
pub use crate::ingest::error::{
    DispatchError, IngestError, IngestResult, StageError, StageResult, UnitFailure,
};
pub use crate::ingest::processor::{RunReport, SqlProcessor};
pub use crate::ingest::splitter::{split_batch, split_units, UNIT_DELIMITER};
pub use crate::ingest::stager::{ContentStager, StageOutcome};
pub use crate::ingest::table::StagingTable;
