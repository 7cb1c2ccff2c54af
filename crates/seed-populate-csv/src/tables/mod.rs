//! Row sources for the six output tables, plus the dispatch entry point.

mod artists;
mod exhibitions;
mod museums;
mod paintings;
mod profiles;
mod users;

pub use artists::ArtistRows;
pub use exhibitions::ExhibitionRows;
pub use museums::MuseumRows;
pub use paintings::PaintingRows;
pub use profiles::UserProfileRows;
pub use users::UserRows;

use crate::error::CsvPopulateError;
use crate::writer::{CsvTableWriter, PopulateMetrics};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::{SeedConfig, Table};
use std::path::Path;

/// Generate one table's CSV file in `output_dir`.
///
/// The worker owns the seeded RNG and all per-task state; nothing is shared
/// with other tables.
pub fn populate_table(
    table: Table,
    config: &SeedConfig,
    output_dir: &Path,
    seed: u64,
) -> Result<PopulateMetrics, CsvPopulateError> {
    let rng = StdRng::seed_from_u64(seed);
    let writer = CsvTableWriter::new(output_dir.join(table.file_name()));

    match table {
        Table::Users => writer.write(&mut UserRows::new(config, rng)),
        Table::UserProfiles => writer.write(&mut UserProfileRows::new(config, rng)),
        Table::Artists => writer.write(&mut ArtistRows::new(config, rng)),
        Table::Paintings => writer.write(&mut PaintingRows::new(config, rng)),
        Table::Museums => writer.write(&mut MuseumRows::new(config, rng)),
        Table::Exhibitions => writer.write(&mut ExhibitionRows::new(config, rng)?),
    }
}
