//! Resolving the names on a row to stored records.

use bunklogs_core::import::camper::CamperFields;
use bunklogs_core::import::unit::UnitHeadRef;
use bunklogs_core::import::{EntityKind, ImportError};
use bunklogs_core::roles::UserRole;
use bunklogs_db::models::camper::{Camper, CamperInput};
use bunklogs_db::models::user::User;

use crate::store::{CampStore, StoreResult};

/// Exactly one match, or the matching not-found / ambiguous error.
pub(crate) fn exactly_one<T>(
    mut matches: Vec<T>,
    entity: EntityKind,
    identifier: impl Into<String>,
) -> Result<T, ImportError> {
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(ImportError::ReferenceNotFound {
            entity,
            identifier: identifier.into(),
        }),
        _ => Err(ImportError::AmbiguousReference {
            entity,
            identifier: identifier.into(),
        }),
    }
}

/// At most one match; more is ambiguous.
pub(crate) fn at_most_one<T>(
    mut matches: Vec<T>,
    entity: EntityKind,
    identifier: impl Into<String>,
) -> Result<Option<T>, ImportError> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => Err(ImportError::AmbiguousReference {
            entity,
            identifier: identifier.into(),
        }),
    }
}

/// The first user with the `UNIT_HEAD` role matching the identifier.
pub(crate) async fn unit_head<S>(store: &mut S, head: &UnitHeadRef) -> StoreResult<Option<User>>
where
    S: CampStore + ?Sized,
{
    match head {
        UnitHeadRef::Email(email) => store.find_user_by_email(email, UserRole::UnitHead).await,
        UnitHeadRef::Username(username) => {
            store
                .find_user_by_username(username, UserRole::UnitHead)
                .await
        }
    }
}

/// How the camper named on an assignment row was resolved.
#[derive(Debug)]
pub(crate) enum CamperMatch {
    Existing(Camper),
    Created(Camper),
    /// Unknown camper on a dry run, where nothing is created.
    WouldCreate,
}

impl CamperMatch {
    pub fn into_camper(self) -> Option<Camper> {
        match self {
            Self::Existing(camper) | Self::Created(camper) => Some(camper),
            Self::WouldCreate => None,
        }
    }
}

/// Find the camper by case-insensitive name, creating a name-only camper
/// when there is none and this is not a dry run.
pub(crate) async fn camper_or_create<S>(
    store: &mut S,
    first_name: &str,
    last_name: &str,
    dry_run: bool,
) -> Result<CamperMatch, crate::runner::RowError>
where
    S: CampStore + ?Sized,
{
    let fields = CamperFields::minimal(first_name, last_name);
    let matches = store.find_campers_by_name(first_name, last_name).await?;
    if let Some(camper) = at_most_one(matches, EntityKind::Camper, fields.display_name())? {
        return Ok(CamperMatch::Existing(camper));
    }
    if dry_run {
        return Ok(CamperMatch::WouldCreate);
    }

    let camper = store.create_camper(&CamperInput::from(fields)).await?;
    tracing::info!(
        camper_id = camper.id,
        first_name,
        last_name,
        "Created camper from assignment row"
    );
    Ok(CamperMatch::Created(camper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn exactly_one_distinguishes_none_and_many() {
        assert_eq!(exactly_one(vec![7], EntityKind::Cabin, "Oak").unwrap(), 7);
        assert_matches!(
            exactly_one(Vec::<i32>::new(), EntityKind::Cabin, "Oak"),
            Err(ImportError::ReferenceNotFound { .. })
        );
        assert_matches!(
            exactly_one(vec![1, 2], EntityKind::Cabin, "Oak"),
            Err(ImportError::AmbiguousReference { .. })
        );
    }

    #[test]
    fn at_most_one_allows_none() {
        let none = at_most_one(Vec::<i32>::new(), EntityKind::Camper, "Ada Lovelace").unwrap();
        assert_eq!(none, None);
        assert_eq!(
            at_most_one(vec![1, 2], EntityKind::Camper, "Ada Lovelace")
                .unwrap_err()
                .to_string(),
            "Multiple campers found with name Ada Lovelace"
        );
    }
}
