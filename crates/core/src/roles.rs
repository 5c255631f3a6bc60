//! User role values.
//!
//! These must match the `role` CHECK constraint in
//! `0001_create_camp_schema.sql`.

use serde::{Deserialize, Serialize};

/// Role assigned to a staff user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Counselor,
    CamperCare,
    UnitHead,
    Admin,
}

impl UserRole {
    /// Return the role name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Counselor => "COUNSELOR",
            Self::CamperCare => "CAMPER_CARE",
            Self::UnitHead => "UNIT_HEAD",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse a stored role name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "COUNSELOR" => Some(Self::Counselor),
            "CAMPER_CARE" => Some(Self::CamperCare),
            "UNIT_HEAD" => Some(Self::UnitHead),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// All valid role values.
    pub const ALL: &'static [&'static str] = &["COUNSELOR", "CAMPER_CARE", "UNIT_HEAD", "ADMIN"];
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_role_parses_back() {
        for name in UserRole::ALL {
            let role = UserRole::from_str(name).unwrap();
            assert_eq!(role.as_str(), *name);
        }
    }

    #[test]
    fn unknown_role_is_none() {
        assert_eq!(UserRole::from_str("unit_head"), None);
        assert_eq!(UserRole::from_str(""), None);
    }

    #[test]
    fn default_role_is_counselor() {
        assert_eq!(UserRole::default(), UserRole::Counselor);
    }

    #[test]
    fn serde_uses_stored_names() {
        let json = serde_json::to_string(&UserRole::CamperCare).unwrap();
        assert_eq!(json, "\"CAMPER_CARE\"");
    }
}
