//! CSV table writer.

use crate::error::CsvPopulateError;
use crate::source::RowSource;
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from one table generation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes one table's rows to a CSV file, replacing any previous file.
pub struct CsvTableWriter {
    path: PathBuf,
    include_header: bool,
}

impl CsvTableWriter {
    /// Create a writer targeting `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            include_header: false,
        }
    }

    /// Set whether to emit a header row before the data rows.
    ///
    /// The seeding format has no header, so the default is off.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Drain `source` into the target file.
    ///
    /// Any pre-existing file of the same name is deleted first; a failed
    /// write leaves whatever was flushed (no cleanup).
    pub fn write<S: RowSource>(&self, source: &mut S) -> Result<PopulateMetrics, CsvPopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let count = source.row_count();

        info!(
            "Generating CSV file '{}' with {} rows",
            self.path.display(),
            count
        );

        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }

        let file = File::create(&self.path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        if self.include_header {
            writer.write_record(source.columns())?;
        }

        for _ in 0..count {
            let record = source.next_row()?;
            writer.write_record(&record)?;
            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CsvPopulateError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(&self.path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Fixed-content source for writer tests.
    struct StaticRows {
        rows: u64,
        emitted: u64,
    }

    impl RowSource for StaticRows {
        fn columns(&self) -> &'static [&'static str] {
            &["id", "value"]
        }

        fn row_count(&self) -> u64 {
            self.rows
        }

        fn next_row(&mut self) -> Result<Vec<String>, CsvPopulateError> {
            self.emitted += 1;
            Ok(vec![self.emitted.to_string(), format!("v{}", self.emitted)])
        }
    }

    #[test]
    fn test_write_emits_exact_row_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("static.csv");

        let metrics = CsvTableWriter::new(&path)
            .write(&mut StaticRows { rows: 5, emitted: 0 })
            .unwrap();

        assert_eq!(metrics.rows_written, 5);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1,v1");
    }

    #[test]
    fn test_write_with_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("static.csv");

        CsvTableWriter::new(&path)
            .with_header(true)
            .write(&mut StaticRows { rows: 3, emitted: 0 })
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4); // 1 header + 3 data rows
        assert_eq!(lines[0], "id,value");
    }

    #[test]
    fn test_rewrite_replaces_file_instead_of_appending() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("static.csv");
        let writer = CsvTableWriter::new(&path);

        writer.write(&mut StaticRows { rows: 8, emitted: 0 }).unwrap();
        writer.write(&mut StaticRows { rows: 3, emitted: 0 }).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_metrics_rows_per_second() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100000,
        };
        assert_eq!(metrics.rows_per_second(), 100.0);
    }
}
