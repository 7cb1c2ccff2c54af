//! Categorical field types with fixed integer encodings.
//!
//! The seeded database stores these fields as integers, so the encodings
//! here must not change: downstream consumers depend on the exact values.

use serde::{Deserialize, Serialize};

/// Gender of a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// All variants, in encoding order.
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Other];

    /// Integer encoding stored in the CSV output.
    pub fn code(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
            Gender::Other => 2,
        }
    }
}

/// Marital status of a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Widowed,
    Separated,
    Divorced,
}

impl MaritalStatus {
    /// All variants, in encoding order.
    pub const ALL: [MaritalStatus; 5] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Widowed,
        MaritalStatus::Separated,
        MaritalStatus::Divorced,
    ];

    /// Integer encoding stored in the CSV output.
    pub fn code(self) -> u8 {
        match self {
            MaritalStatus::Single => 0,
            MaritalStatus::Married => 1,
            MaritalStatus::Widowed => 2,
            MaritalStatus::Separated => 3,
            MaritalStatus::Divorced => 4,
        }
    }
}

/// Access level assigned to every generated user.
///
/// Unlike [`Gender`] and [`MaritalStatus`] this is not randomized per row;
/// one configured level is shared by the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Unconfirmed,
    Regular,
    Moderator,
    Admin,
}

impl AccessLevel {
    /// Integer encoding stored in the CSV output.
    pub fn code(self) -> u8 {
        match self {
            AccessLevel::Unconfirmed => 0,
            AccessLevel::Regular => 1,
            AccessLevel::Moderator => 2,
            AccessLevel::Admin => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Female.code(), 0);
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::Other.code(), 2);
    }

    #[test]
    fn test_marital_status_codes() {
        assert_eq!(MaritalStatus::Single.code(), 0);
        assert_eq!(MaritalStatus::Married.code(), 1);
        assert_eq!(MaritalStatus::Widowed.code(), 2);
        assert_eq!(MaritalStatus::Separated.code(), 3);
        assert_eq!(MaritalStatus::Divorced.code(), 4);
    }

    #[test]
    fn test_access_level_codes() {
        assert_eq!(AccessLevel::Unconfirmed.code(), 0);
        assert_eq!(AccessLevel::Regular.code(), 1);
        assert_eq!(AccessLevel::Moderator.code(), 2);
        assert_eq!(AccessLevel::Admin.code(), 3);
    }

    #[test]
    fn test_all_variant_tables_match_encoding_order() {
        for (i, g) in Gender::ALL.iter().enumerate() {
            assert_eq!(g.code() as usize, i);
        }
        for (i, m) in MaritalStatus::ALL.iter().enumerate() {
            assert_eq!(m.code() as usize, i);
        }
    }

    #[test]
    fn test_access_level_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&AccessLevel::Regular).unwrap();
        assert_eq!(yaml.trim(), "regular");
        let parsed: AccessLevel = serde_yaml::from_str("moderator").unwrap();
        assert_eq!(parsed, AccessLevel::Moderator);
    }
}
