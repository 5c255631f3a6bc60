//! Row-level import error taxonomy.
//!
//! Every variant here is caught at the per-record boundary and turned into
//! an entry of the run's error list. Failures that must abort a whole run
//! live in the pipeline crate instead.

use serde::Serialize;

/// The kind of entity a row-level error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Cabin,
    Unit,
    Camper,
    Session,
    Bunk,
    BunkAssignment,
}

impl EntityKind {
    /// Capitalised singular label used at the start of messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cabin => "Cabin",
            Self::Unit => "Unit",
            Self::Camper => "Camper",
            Self::Session => "Session",
            Self::Bunk => "Bunk",
            Self::BunkAssignment => "Bunk assignment",
        }
    }

    /// Lowercase plural, as in "Multiple cabins found".
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Cabin => "cabins",
            Self::Unit => "units",
            Self::Camper => "campers",
            Self::Session => "sessions",
            Self::Bunk => "bunks",
            Self::BunkAssignment => "bunk assignments",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pseudo-field naming the camper name pair on assignment rows.
pub const FIELD_CAMPER_NAME: &str = "camper_name";

/// Pseudo-field naming the cabin/session pair on assignment rows.
pub const FIELD_CABIN_AND_SESSION: &str = "cabin_and_session";

/// A data-level failure for a single CSV record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// A required column is absent or empty.
    #[error("{}", missing_field_message(*entity, field))]
    MissingField {
        entity: EntityKind,
        field: &'static str,
    },

    /// A column is present but has the wrong shape.
    #[error("Invalid {field} '{value}': expected {expected}")]
    TypeConversion {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A referenced entity does not exist.
    #[error("{}", not_found_message(*entity, identifier))]
    ReferenceNotFound {
        entity: EntityKind,
        identifier: String,
    },

    /// A lookup expected to be unique matched more than one entity.
    #[error("{}", ambiguous_message(*entity, identifier))]
    AmbiguousReference {
        entity: EntityKind,
        identifier: String,
    },

    /// The store refused the row's data.
    #[error("{0}")]
    Persistence(String),
}

impl ImportError {
    /// Short machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::TypeConversion { .. } => "type_conversion",
            Self::ReferenceNotFound { .. } => "reference_not_found",
            Self::AmbiguousReference { .. } => "ambiguous_reference",
            Self::Persistence(_) => "persistence",
        }
    }
}

/// Identifier used for bunk lookups, which are keyed by a cabin/session pair.
pub fn bunk_identifier(cabin_name: &str, session_name: &str) -> String {
    format!("cabin '{cabin_name}' and session '{session_name}'")
}

fn missing_field_message(entity: EntityKind, field: &str) -> String {
    match (entity, field) {
        (EntityKind::Camper, "first_name") => "First name is required".to_string(),
        (EntityKind::Camper, "last_name") => "Last name is required".to_string(),
        (EntityKind::BunkAssignment, FIELD_CAMPER_NAME) => {
            "Camper first and last name are required".to_string()
        }
        (EntityKind::BunkAssignment, FIELD_CABIN_AND_SESSION) => {
            "Both cabin name and session name are required".to_string()
        }
        (entity, field) => format!("{} {} is required", entity.label(), field.replace('_', " ")),
    }
}

fn not_found_message(entity: EntityKind, identifier: &str) -> String {
    match entity {
        EntityKind::Bunk => format!("Bunk with {identifier} not found"),
        other => format!("{} '{identifier}' not found", other.label()),
    }
}

fn ambiguous_message(entity: EntityKind, identifier: &str) -> String {
    match entity {
        EntityKind::Camper => format!("Multiple campers found with name {identifier}"),
        EntityKind::Bunk => format!("Multiple bunks found with {identifier}"),
        other => format!("Multiple {} found with name '{identifier}'", other.plural()),
    }
}
