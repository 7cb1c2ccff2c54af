//! Registry of output tables.

use std::fmt;
use std::str::FromStr;

/// One output table of the seed run.
///
/// Each table maps to exactly one CSV file and one worker task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    UserProfiles,
    Artists,
    Paintings,
    Museums,
    Exhibitions,
}

impl Table {
    /// All tables, in generation order.
    pub const ALL: [Table; 6] = [
        Table::Users,
        Table::UserProfiles,
        Table::Artists,
        Table::Paintings,
        Table::Museums,
        Table::Exhibitions,
    ];

    /// Table name as used on the CLI and in log output.
    pub fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::UserProfiles => "user_profiles",
            Table::Artists => "artists",
            Table::Paintings => "paintings",
            Table::Museums => "museums",
            Table::Exhibitions => "exhibitions",
        }
    }

    /// Output file name for this table.
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Stable position of this table in [`Table::ALL`].
    ///
    /// Used to derive a distinct per-worker RNG seed from the base seed.
    pub fn index(self) -> u64 {
        Table::ALL
            .iter()
            .position(|t| *t == self)
            .expect("table is listed in Table::ALL") as u64
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown table '{s}' (expected one of: users, user_profiles, artists, paintings, museums, exhibitions)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(Table::Users.file_name(), "users.csv");
        assert_eq!(Table::UserProfiles.file_name(), "user_profiles.csv");
        assert_eq!(Table::Exhibitions.file_name(), "exhibitions.csv");
    }

    #[test]
    fn test_parse_round_trip() {
        for table in Table::ALL {
            let parsed: Table = table.name().parse().unwrap();
            assert_eq!(parsed, table);
        }
    }

    #[test]
    fn test_parse_unknown_table() {
        assert!("sculptures".parse::<Table>().is_err());
    }

    #[test]
    fn test_indices_are_distinct() {
        for (i, table) in Table::ALL.iter().enumerate() {
            assert_eq!(table.index(), i as u64);
        }
    }
}
