//! Author and book operations (one-to-many).

use crate::{
    entities::{
        Author, Book,
        relations::{author, book},
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*, sea_query::Query};
use tracing::{info, instrument};

/// Inserts an author.
pub async fn create_author<C: ConnectionTrait>(db: &C, name: &str) -> Result<author::Model> {
    if name.trim().is_empty() {
        return Err(Error::validation("Author name cannot be empty"));
    }

    author::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a book written by `author_id`.
pub async fn create_book<C: ConnectionTrait>(
    db: &C,
    title: &str,
    price: f64,
    author_id: i64,
) -> Result<book::Model> {
    if title.trim().is_empty() {
        return Err(Error::validation("Book title cannot be empty"));
    }
    if price < 0.0 || !price.is_finite() {
        return Err(Error::validation(format!("Invalid book price: {price}")));
    }

    book::ActiveModel {
        title: Set(title.to_string()),
        price: Set(price),
        author_id: Set(author_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// One line per author with books: `"{name} has written - {titles}!"`.
pub async fn show_all_authors_with_their_books(db: &DatabaseConnection) -> Result<String> {
    let authors = Author::find()
        .find_with_related(Book)
        .order_by_asc(author::Column::Id)
        .order_by_asc(book::Column::Id)
        .all(db)
        .await?;

    Ok(authors
        .into_iter()
        .filter(|(_, books)| !books.is_empty())
        .map(|(author, books)| {
            let titles = books
                .iter()
                .map(|b| b.title.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} has written - {titles}!", author.name)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Deletes every author who has not written a book.
#[instrument(skip(db))]
pub async fn delete_all_authors_without_books(db: &DatabaseConnection) -> Result<u64> {
    let result = Author::delete_many()
        .filter(
            author::Column::Id.not_in_subquery(
                Query::select()
                    .column(book::Column::AuthorId)
                    .from(Book)
                    .to_owned(),
            ),
        )
        .exec(db)
        .await?;
    info!(deleted = result.rows_affected, "Authors without books deleted");
    Ok(result.rows_affected)
}
