//! Catalogue car operations: year-based discounts and recent models.

use crate::{
    entities::{Car, records::car},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Cars produced after this year count as recent.
pub const RECENT_AFTER_YEAR: i32 = 2020;

/// Model name and discounted price of a car.
#[derive(Debug, Clone, PartialEq)]
pub struct CarPrice {
    /// Car model name
    pub model: String,
    /// Price after the discount
    pub price_with_discount: f64,
}

/// Inserts a car; the discounted price starts at zero until [`apply_discount`] runs.
pub async fn create_car<C: ConnectionTrait>(
    db: &C,
    model: &str,
    year: i32,
    color: &str,
    price: f64,
) -> Result<car::Model> {
    if model.trim().is_empty() {
        return Err(Error::validation("Car model cannot be empty"));
    }
    if year < 0 {
        return Err(Error::validation(format!("Year cannot be negative: {year}")));
    }
    if price < 0.0 || !price.is_finite() {
        return Err(Error::validation(format!("Invalid price: {price}")));
    }

    car::ActiveModel {
        model: Set(model.to_string()),
        year: Set(year),
        color: Set(color.to_string()),
        price: Set(price),
        price_with_discount: Set(0.0),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Discount rate for a production year: the sum of its digits as a percentage.
#[must_use]
pub fn discount_rate(year: i32) -> f64 {
    let digit_sum: u32 = year
        .unsigned_abs()
        .to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .sum();
    f64::from(digit_sum) / 100.0
}

/// Price after the year-based discount, rounded to cents.
#[must_use]
pub fn discounted_price(price: f64, year: i32) -> f64 {
    let discounted = price - price * discount_rate(year);
    (discounted * 100.0).round() / 100.0
}

/// Recomputes the discounted price of every car.
#[instrument(skip(db))]
pub async fn apply_discount(db: &DatabaseConnection) -> Result<()> {
    let cars = Car::find().all(db).await?;
    let count = cars.len();

    for car in cars {
        let price_with_discount = discounted_price(car.price, car.year);
        debug!(id = car.id, price_with_discount, "Applying discount");

        let mut active: car::ActiveModel = car.into();
        active.price_with_discount = Set(price_with_discount);
        active.update(db).await?;
    }

    info!(count, "Discounts applied");
    Ok(())
}

/// Lists model and discounted price of cars newer than [`RECENT_AFTER_YEAR`].
pub async fn get_recent_cars(db: &DatabaseConnection) -> Result<Vec<CarPrice>> {
    let rows = Car::find()
        .select_only()
        .column(car::Column::Model)
        .column(car::Column::PriceWithDiscount)
        .filter(car::Column::Year.gt(RECENT_AFTER_YEAR))
        .order_by_asc(car::Column::Id)
        .into_tuple::<(String, f64)>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(model, price_with_discount)| CarPrice {
            model,
            price_with_discount,
        })
        .collect())
}

/// Deletes the most recently stored car, if there is one.
pub async fn delete_last_car(db: &DatabaseConnection) -> Result<()> {
    let last = Car::find().order_by_desc(car::Column::Id).one(db).await?;
    if let Some(car) = last {
        car.delete(db).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[test]
    fn test_discount_rate_is_digit_sum_percent() {
        assert_eq!(discount_rate(2014), 0.07);
        assert_eq!(discount_rate(2022), 0.06);
        assert_eq!(discount_rate(1999), 0.28);
    }

    #[test]
    fn test_discounted_price_rounds_to_cents() {
        assert_eq!(discounted_price(100_000.0, 2014), 93_000.0);
        assert_eq!(discounted_price(33.33, 2022), 31.33);
    }

    #[tokio::test]
    async fn test_apply_discount_and_recent_cars() -> Result<()> {
        let db = setup_test_db().await?;
        create_car(&db, "Mercedes C63 AMG", 2019, "white", 120_000.0).await?;
        create_car(&db, "Audi Q7 S line", 2023, "black", 183_900.0).await?;
        create_car(&db, "Chevrolet Corvette", 2021, "dark grey", 199_999.0).await?;

        apply_discount(&db).await?;
        let recent = get_recent_cars(&db).await?;

        assert_eq!(
            recent,
            vec![
                CarPrice {
                    model: "Audi Q7 S line".to_string(),
                    price_with_discount: 171_027.0,
                },
                CarPrice {
                    model: "Chevrolet Corvette".to_string(),
                    price_with_discount: 189_999.05,
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_recent_cars_exclude_2020() -> Result<()> {
        let db = setup_test_db().await?;
        create_car(&db, "Borderline", 2020, "red", 1_000.0).await?;
        create_car(&db, "Fresh", 2021, "blue", 1_000.0).await?;

        let models: Vec<String> = get_recent_cars(&db)
            .await?
            .into_iter()
            .map(|car| car.model)
            .collect();
        assert_eq!(models, vec!["Fresh".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_last_car() -> Result<()> {
        let db = setup_test_db().await?;
        delete_last_car(&db).await?;

        create_car(&db, "First", 2000, "red", 1.0).await?;
        create_car(&db, "Second", 2001, "blue", 2.0).await?;
        delete_last_car(&db).await?;

        let cars = Car::find().all(&db).await?;
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].model, "First");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_car_rejects_bad_price() -> Result<()> {
        let db = setup_test_db().await?;
        let result = create_car(&db, "Broken", 2020, "red", f64::NAN).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        Ok(())
    }
}
