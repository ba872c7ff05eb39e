//! CSV output: fixed header, one row per accepted post, overwrite mode.

use crate::error::ScrapeError;
use crate::record::{PostRecord, CSV_HEADER};
use std::fs::File;
use std::path::Path;

/// Owns the output file for the duration of a run. The header is written on
/// creation so an empty run still yields a valid CSV. Dropping the writer
/// flushes whatever rows were accepted so far.
pub struct PostCsvWriter {
    inner: csv::Writer<File>,
    rows: u64,
}

impl PostCsvWriter {
    pub fn create(path: &Path, buf_bytes: usize) -> Result<Self, ScrapeError> {
        // File::create truncates: a re-run replaces the previous output.
        // Rows end in CRLF, one terminator per record.
        let f = File::create(path)?;
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .buffer_capacity(buf_bytes.max(8 * 1024))
            .from_writer(f);
        inner.write_record(CSV_HEADER)?;
        tracing::debug!(path = %path.display(), "created output file");
        Ok(Self { inner, rows: 0 })
    }

    #[inline]
    pub fn write(&mut self, record: &PostRecord) -> Result<(), ScrapeError> {
        self.inner.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Flush buffered rows to disk and close the file.
    pub fn finish(mut self) -> Result<u64, ScrapeError> {
        self.inner.flush()?;
        Ok(self.rows)
    }
}
