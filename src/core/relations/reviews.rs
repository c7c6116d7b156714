//! Product and review operations, including the rating aggregate.

use crate::{
    entities::{
        Product, Review,
        relations::{product, review},
    },
    errors::{Error, Result},
};
use sea_orm::{
    ConnectionTrait, QueryOrder, QuerySelect, Set,
    prelude::*,
    sea_query::{Expr, Func, Query, SelectStatement, SimpleExpr},
};
use tracing::{info, instrument};

/// Inserts a product; names are unique.
pub async fn create_product<C: ConnectionTrait>(db: &C, name: &str) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::validation("Product name cannot be empty"));
    }

    product::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a review of `product_id`; ratings cannot be negative.
pub async fn create_review<C: ConnectionTrait>(
    db: &C,
    description: &str,
    rating: i32,
    product_id: i64,
) -> Result<review::Model> {
    if rating < 0 {
        return Err(Error::validation(format!(
            "Rating cannot be negative: {rating}"
        )));
    }

    review::ActiveModel {
        description: Set(description.to_string()),
        rating: Set(rating),
        product_id: Set(product_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

fn reviewed_product_ids() -> SelectStatement {
    Query::select()
        .column(review::Column::ProductId)
        .from(Review)
        .to_owned()
}

/// Average rating of the named product, or `None` when it has no reviews.
pub async fn calculate_average_rating_for_product_by_name(
    db: &DatabaseConnection,
    product_name: &str,
) -> Result<Option<f64>> {
    let product = Product::find()
        .filter(product::Column::Name.eq(product_name))
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Product", product_name))?;

    let average = Review::find()
        .select_only()
        .column_as(
            SimpleExpr::from(Func::avg(Expr::col(review::Column::Rating))),
            "avg_rating",
        )
        .filter(review::Column::ProductId.eq(product.id))
        .into_tuple::<Option<f64>>()
        .one(db)
        .await?;

    Ok(average.flatten())
}

/// Reviews rated at least `threshold`.
pub async fn get_reviews_with_high_ratings(
    db: &DatabaseConnection,
    threshold: i32,
) -> Result<Vec<review::Model>> {
    Review::find()
        .filter(review::Column::Rating.gte(threshold))
        .order_by_asc(review::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Products nobody has reviewed, ordered by name descending.
pub async fn get_products_with_no_reviews(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::Id.not_in_subquery(reviewed_product_ids()))
        .order_by_desc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes every product nobody has reviewed.
#[instrument(skip(db))]
pub async fn delete_products_without_reviews(db: &DatabaseConnection) -> Result<u64> {
    let result = Product::delete_many()
        .filter(product::Column::Id.not_in_subquery(reviewed_product_ids()))
        .exec(db)
        .await?;
    info!(deleted = result.rows_affected, "Unreviewed products deleted");
    Ok(result.rows_affected)
}
