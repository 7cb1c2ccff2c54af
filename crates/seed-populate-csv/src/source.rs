//! Row source abstraction consumed by the CSV writer.

use crate::error::CsvPopulateError;

/// Produces the rows of one output table.
///
/// A source owns its RNG and any per-task uniqueness state; the writer
/// calls [`RowSource::next_row`] exactly [`RowSource::row_count`] times.
pub trait RowSource {
    /// Column names, in output order.
    fn columns(&self) -> &'static [&'static str];

    /// Number of rows this source emits.
    fn row_count(&self) -> u64;

    /// Assemble the next row as CSV field strings.
    fn next_row(&mut self) -> Result<Vec<String>, CsvPopulateError>;
}
