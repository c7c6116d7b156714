//! Artifact operations.
//!
//! Artifacts are only renamed when they are both magical and older than
//! [`RENAME_MIN_AGE`] years.

use crate::{
    entities::{Artifact, records::artifact},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, Set, prelude::*};
use tracing::{info, instrument};

/// Age an artifact must exceed before it may be renamed.
pub const RENAME_MIN_AGE: i32 = 250;

/// Inserts an artifact and returns `"The artifact {name} is {age} years old!"`.
pub async fn create_artifact<C: ConnectionTrait>(
    db: &C,
    name: &str,
    origin: &str,
    age: i32,
    description: &str,
    is_magical: bool,
) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::validation("Artifact name cannot be empty"));
    }
    if age < 0 {
        return Err(Error::validation(format!("Artifact age cannot be negative: {age}")));
    }

    let artifact = artifact::ActiveModel {
        name: Set(name.to_string()),
        origin: Set(origin.to_string()),
        age: Set(age),
        description: Set(description.to_string()),
        is_magical: Set(is_magical),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(format!(
        "The artifact {} is {} years old!",
        artifact.name, artifact.age
    ))
}

/// Renames a magical artifact older than [`RENAME_MIN_AGE`].
///
/// Any other artifact is returned unchanged without touching the database.
pub async fn rename_artifact(
    db: &DatabaseConnection,
    artifact: artifact::Model,
    new_name: &str,
) -> Result<artifact::Model> {
    if !(artifact.is_magical && artifact.age > RENAME_MIN_AGE) {
        return Ok(artifact);
    }

    let mut active: artifact::ActiveModel = artifact.into();
    active.name = Set(new_name.to_string());
    active.update(db).await.map_err(Into::into)
}

/// Deletes every artifact, returning the number of removed rows.
#[instrument(skip(db))]
pub async fn delete_all_artifacts(db: &DatabaseConnection) -> Result<u64> {
    let result = Artifact::delete_many().exec(db).await?;
    info!(deleted = result.rows_affected, "Artifacts deleted");
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_artifact, setup_test_db};

    #[tokio::test]
    async fn test_create_artifact_message() -> Result<()> {
        let db = setup_test_db().await?;
        let message =
            create_artifact(&db, "Ancient Sword", "Lost Kingdom", 500, "A legendary sword", true)
                .await?;
        assert_eq!(message, "The artifact Ancient Sword is 500 years old!");
        Ok(())
    }

    #[tokio::test]
    async fn test_rename_only_old_magical_artifacts() -> Result<()> {
        let db = setup_test_db().await?;
        let old_magic = create_test_artifact(&db, "Orb", 300, true).await?;
        let young_magic = create_test_artifact(&db, "Wand", 250, true).await?;
        let old_plain = create_test_artifact(&db, "Vase", 900, false).await?;

        let renamed = rename_artifact(&db, old_magic, "Orb of Ages").await?;
        assert_eq!(renamed.name, "Orb of Ages");

        let kept = rename_artifact(&db, young_magic, "Wand of Ages").await?;
        assert_eq!(kept.name, "Wand");
        let kept = rename_artifact(&db, old_plain, "Vase of Ages").await?;
        assert_eq!(kept.name, "Vase");

        let stored = Artifact::find_by_id(renamed.id).one(&db).await?.unwrap();
        assert_eq!(stored.name, "Orb of Ages");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_all_artifacts() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_artifact(&db, "One", 1, false).await?;
        create_test_artifact(&db, "Two", 2, true).await?;

        assert_eq!(delete_all_artifacts(&db).await?, 2);
        assert_eq!(Artifact::find().count(&db).await?, 0);
        Ok(())
    }
}
