//! Fixed-size chunking of CSV data rows.
//!
//! [`split_records`] streams records from a reader and hands each full chunk to a [`ChunkSink`],
//! so at most `chunk_size` rows are buffered at any time. [`plan_chunks`] computes the same ranges
//! from a row count alone.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::error::{ConvertError, ConvertResult};
use crate::export::create_csv_writer;

/// Rows per output file used when no size is given.
pub const DEFAULT_CHUNK_SIZE: usize = 850;

/// Inclusive, 1-based range of data rows held by one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    /// Number of rows in the range.
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Output file name for this range: `<start>-<end>-reviews.csv`.
    pub fn file_name(&self) -> String {
        format!("{}-{}-reviews.csv", self.start, self.end)
    }
}

/// Ranges covering `total_rows` rows in chunks of at most `chunk_size`.
///
/// Returns no ranges for zero rows; the last range holds the remainder.
pub fn plan_chunks(total_rows: usize, chunk_size: usize) -> ConvertResult<Vec<ChunkRange>> {
    if chunk_size == 0 {
        return Err(ConvertError::InvalidChunkSize);
    }
    let mut ranges = Vec::with_capacity(total_rows.div_ceil(chunk_size));
    let mut start = 1;
    while start <= total_rows {
        let end = (start + chunk_size - 1).min(total_rows);
        ranges.push(ChunkRange { start, end });
        start = end + 1;
    }
    Ok(ranges)
}

/// A chunk ready to be written: the original header plus its rows.
#[derive(Debug)]
pub struct Chunk<'a> {
    pub range: ChunkRange,
    pub header: &'a StringRecord,
    pub rows: &'a [StringRecord],
}

/// Destination for completed chunks.
pub trait ChunkSink {
    /// Persist one chunk. Called in row order, once per chunk.
    fn write_chunk(&mut self, chunk: &Chunk<'_>) -> ConvertResult<()>;
}

/// Totals from a finished split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Data rows read (header excluded).
    pub rows: usize,
    /// Ranges written, in order.
    pub chunks: Vec<ChunkRange>,
}

/// Stream the records of `rdr` into chunks of at most `chunk_size` rows.
///
/// The header row is required; an input with no header at all is [`ConvertError::EmptyHeaders`].
/// Rows are opaque and may have any length. Blank lines are skipped by the reader and are neither
/// counted nor written.
pub fn split_records<R: io::Read, S: ChunkSink>(
    rdr: &mut csv::Reader<R>,
    chunk_size: usize,
    sink: &mut S,
) -> ConvertResult<SplitSummary> {
    if chunk_size == 0 {
        return Err(ConvertError::InvalidChunkSize);
    }
    let header = rdr.headers()?.clone();
    if header.is_empty() {
        return Err(ConvertError::EmptyHeaders {
            path: PathBuf::new(),
        });
    }

    let mut summary = SplitSummary::default();
    let mut buffer: Vec<StringRecord> = Vec::with_capacity(chunk_size);
    let mut start = 1;

    for result in rdr.records() {
        buffer.push(result?);
        summary.rows += 1;
        if buffer.len() == chunk_size {
            start = flush(&header, &mut buffer, start, sink, &mut summary)?;
        }
    }
    if !buffer.is_empty() {
        flush(&header, &mut buffer, start, sink, &mut summary)?;
    }

    Ok(summary)
}

fn flush<S: ChunkSink>(
    header: &StringRecord,
    buffer: &mut Vec<StringRecord>,
    start: usize,
    sink: &mut S,
    summary: &mut SplitSummary,
) -> ConvertResult<usize> {
    let range = ChunkRange {
        start,
        end: start + buffer.len() - 1,
    };
    sink.write_chunk(&Chunk {
        range,
        header,
        rows: buffer.as_slice(),
    })?;
    tracing::debug!(start = range.start, end = range.end, "chunk written");
    summary.chunks.push(range);
    buffer.clear();
    Ok(range.end + 1)
}

/// Writes each chunk to `<dir>/<start>-<end>-reviews.csv`.
///
/// The directory must already exist.
pub struct DirectorySink<'a> {
    dir: PathBuf,
    written: Vec<PathBuf>,
    on_created: Option<Box<dyn FnMut(&Path, usize) + 'a>>,
}

impl<'a> DirectorySink<'a> {
    /// Create a sink writing into `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
            on_created: None,
        }
    }

    /// Call `f(path, rows)` after each file is written.
    pub fn on_created(mut self, f: impl FnMut(&Path, usize) + 'a) -> Self {
        self.on_created = Some(Box::new(f));
        self
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Consume the sink, returning the paths written.
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl fmt::Debug for DirectorySink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectorySink")
            .field("dir", &self.dir)
            .field("written", &self.written.len())
            .field("on_created_set", &self.on_created.is_some())
            .finish()
    }
}

impl ChunkSink for DirectorySink<'_> {
    fn write_chunk(&mut self, chunk: &Chunk<'_>) -> ConvertResult<()> {
        let path = self.dir.join(chunk.range.file_name());
        write_chunk_file(&path, chunk).map_err(|e| e.writing(&path))?;
        if let Some(f) = self.on_created.as_mut() {
            f(&path, chunk.rows.len());
        }
        self.written.push(path);
        Ok(())
    }
}

fn write_chunk_file(path: &Path, chunk: &Chunk<'_>) -> ConvertResult<()> {
    let mut wtr: csv::Writer<File> = create_csv_writer(path)?;
    wtr.write_record(chunk.header)?;
    for row in chunk.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
