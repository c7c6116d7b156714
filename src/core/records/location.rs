//! Location operations: listing, capitals, and pruning the oldest entry.

use crate::{
    entities::{Location, records::location},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{info, instrument};

/// Inserts a location.
pub async fn create_location<C: ConnectionTrait>(
    db: &C,
    name: &str,
    region: &str,
    population: i32,
    description: &str,
    is_capital: bool,
) -> Result<location::Model> {
    if name.trim().is_empty() {
        return Err(Error::validation("Location name cannot be empty"));
    }
    if population < 0 {
        return Err(Error::validation(format!(
            "Population cannot be negative: {population}"
        )));
    }

    location::ActiveModel {
        name: Set(name.to_string()),
        region: Set(region.to_string()),
        population: Set(population),
        description: Set(description.to_string()),
        is_capital: Set(is_capital),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

async fn first_location(db: &DatabaseConnection) -> Result<Option<location::Model>> {
    Location::find()
        .order_by_asc(location::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists every location, newest first, one per line.
pub async fn show_all_locations(db: &DatabaseConnection) -> Result<String> {
    let locations = Location::find()
        .order_by_desc(location::Column::Id)
        .all(db)
        .await?;

    Ok(locations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Marks the first stored location as a capital.
#[instrument(skip(db))]
pub async fn new_capital(db: &DatabaseConnection) -> Result<location::Model> {
    let location = first_location(db)
        .await?
        .ok_or_else(|| Error::not_found("Location", "first"))?;

    let mut active: location::ActiveModel = location.into();
    active.is_capital = Set(true);
    let updated = active.update(db).await?;
    info!(name = %updated.name, "Location promoted to capital");
    Ok(updated)
}

/// Returns the names of all capital locations.
pub async fn get_capitals(db: &DatabaseConnection) -> Result<Vec<String>> {
    Location::find()
        .select_only()
        .column(location::Column::Name)
        .filter(location::Column::IsCapital.eq(true))
        .order_by_asc(location::Column::Id)
        .into_tuple::<String>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes the first stored location, if there is one.
pub async fn delete_first_location(db: &DatabaseConnection) -> Result<()> {
    if let Some(location) = first_location(db).await? {
        location.delete(db).await?;
    }
    Ok(())
}
