//! Pet operations.

use crate::{
    entities::records::pet,
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, Set, prelude::*};
use tracing::debug;

/// Inserts a pet and returns the greeting `"{name} is a very cute {species}!"`.
pub async fn create_pet<C: ConnectionTrait>(db: &C, name: &str, species: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::validation("Pet name cannot be empty"));
    }

    let pet = pet::ActiveModel {
        name: Set(name.to_string()),
        species: Set(species.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!(id = pet.id, "Pet created");

    Ok(format!("{} is a very cute {}!", pet.name, pet.species))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{entities::Pet, test_utils::setup_test_db};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_pet_returns_greeting() -> Result<()> {
        let db = setup_test_db().await?;

        let message = create_pet(&db, "Buddy", "Dog").await?;
        assert_eq!(message, "Buddy is a very cute Dog!");

        let pets = Pet::find().all(&db).await?;
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].species, "Dog");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_pet_rejects_blank_name() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        let result = create_pet(&db, "  ", "Cat").await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
    }
}
