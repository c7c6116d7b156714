//! Owner, car and registration operations.
//!
//! A car belongs to at most one owner and carries at most one registration.

use crate::{
    entities::{
        Owner, Registration, RegistryCar,
        relations::{owner, registration, registry_car},
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*, sea_query::Query};
use tracing::{info, instrument};

/// Inserts an owner.
pub async fn create_owner<C: ConnectionTrait>(db: &C, name: &str) -> Result<owner::Model> {
    if name.trim().is_empty() {
        return Err(Error::validation("Owner name cannot be empty"));
    }

    owner::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a car, optionally already owned.
pub async fn create_registry_car<C: ConnectionTrait>(
    db: &C,
    model: &str,
    year: i32,
    owner_id: Option<i64>,
) -> Result<registry_car::Model> {
    if model.trim().is_empty() {
        return Err(Error::validation("Car model cannot be empty"));
    }
    if year < 0 {
        return Err(Error::validation(format!("Year cannot be negative: {year}")));
    }

    registry_car::ActiveModel {
        model: Set(model.to_string()),
        year: Set(year),
        owner_id: Set(owner_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts an unassigned registration.
pub async fn create_registration<C: ConnectionTrait>(
    db: &C,
    registration_number: &str,
) -> Result<registration::Model> {
    if registration_number.trim().is_empty() {
        return Err(Error::validation("Registration number cannot be empty"));
    }

    registration::ActiveModel {
        registration_number: Set(registration_number.to_string()),
        registration_date: Set(None),
        car_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Registers the first unregistered car to `owner` using the first free registration.
///
/// The registration is stamped with today's local date. Fails with
/// [`Error::NotFound`] when no free registration or no unregistered car is left.
#[instrument(skip(db, owner), fields(owner = %owner.name))]
pub async fn register_car_by_owner(db: &DatabaseConnection, owner: &owner::Model) -> Result<String> {
    let today = chrono::Local::now().date_naive();
    let txn = db.begin().await?;

    let free_registration = Registration::find()
        .filter(registration::Column::CarId.is_null())
        .order_by_asc(registration::Column::Id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("Registration", "without car"))?;

    let unregistered_car = RegistryCar::find()
        .filter(
            registry_car::Column::Id.not_in_subquery(
                Query::select()
                    .column(registration::Column::CarId)
                    .from(Registration)
                    .and_where(registration::Column::CarId.is_not_null())
                    .to_owned(),
            ),
        )
        .order_by_asc(registry_car::Column::Id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("Car", "without registration"))?;

    let model = unregistered_car.model.clone();
    let mut car: registry_car::ActiveModel = unregistered_car.into();
    car.owner_id = Set(Some(owner.id));
    let car = car.update(&txn).await?;

    let mut registration: registration::ActiveModel = free_registration.into();
    registration.registration_date = Set(Some(today));
    registration.car_id = Set(Some(car.id));
    let registration = registration.update(&txn).await?;

    txn.commit().await?;
    info!(car = car.id, number = %registration.registration_number, "Car registered");

    Ok(format!(
        "Successfully registered {model} to {} with registration number {}.",
        owner.name, registration.registration_number
    ))
}

/// Finds an owner by id.
pub async fn get_owner_by_id(db: &DatabaseConnection, owner_id: i64) -> Result<owner::Model> {
    Owner::find_by_id(owner_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Owner", owner_id))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_register_car_by_owner() -> Result<()> {
        let db = setup_test_db().await?;
        let owner = create_owner(&db, "Ivelin Milchev").await?;
        let taken = create_registry_car(&db, "Citroen C5", 2004, None).await?;
        create_registry_car(&db, "Honda Civic", 2021, None).await?;

        let used = create_registration(&db, "TX0044XA").await?;
        create_registration(&db, "CB1234CB").await?;

        // occupy the first car with the first registration by hand
        let mut used: registration::ActiveModel = used.into();
        used.car_id = Set(Some(taken.id));
        used.update(&db).await?;

        let message = register_car_by_owner(&db, &owner).await?;
        assert_eq!(
            message,
            "Successfully registered Honda Civic to Ivelin Milchev with registration number CB1234CB."
        );

        let honda = RegistryCar::find()
            .filter(registry_car::Column::Model.eq("Honda Civic"))
            .one(&db)
            .await?
            .unwrap();
        assert_eq!(honda.owner_id, Some(owner.id));

        let stamped = Registration::find()
            .filter(registration::Column::CarId.eq(honda.id))
            .one(&db)
            .await?
            .unwrap();
        assert_eq!(stamped.registration_number, "CB1234CB");
        assert_eq!(
            stamped.registration_date,
            Some(chrono::Local::now().date_naive())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_register_without_free_registration() -> Result<()> {
        let db = setup_test_db().await?;
        let owner = create_owner(&db, "Nobody").await?;
        create_registry_car(&db, "Lada", 1980, None).await?;

        let result = register_car_by_owner(&db, &owner).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Registration",
                ..
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_register_without_free_car() -> Result<()> {
        let db = setup_test_db().await?;
        let owner = create_owner(&db, "Nobody").await?;
        create_registration(&db, "AA0000AA").await?;

        let result = register_car_by_owner(&db, &owner).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "Car", .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_owner_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let owner = create_owner(&db, "Someone").await?;
        assert_eq!(get_owner_by_id(&db, owner.id).await?, owner);
        assert!(get_owner_by_id(&db, owner.id + 1).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_registry_car_rejects_negative_year() -> Result<()> {
        // Validation fails before any query is issued
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_registry_car(&db, "Honda Civic", -2021, None).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        Ok(())
    }
}
