//! Task operations: listing unfinished work, bulk completion, and encoded descriptions.

use crate::{
    entities::{Task, records::task},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*, sea_query::Expr};
use tracing::{info, instrument};

/// Code point distance applied by [`encode`].
const ENCODE_SHIFT: u32 = 3;

/// Inserts a task.
pub async fn create_task<C: ConnectionTrait>(
    db: &C,
    title: &str,
    description: &str,
    due_date: Date,
    is_finished: bool,
) -> Result<task::Model> {
    if title.trim().is_empty() {
        return Err(Error::validation("Task title cannot be empty"));
    }

    task::ActiveModel {
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        due_date: Set(due_date),
        is_finished: Set(is_finished),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Lists unfinished tasks, one per line.
pub async fn show_unfinished_tasks(db: &DatabaseConnection) -> Result<String> {
    let tasks = Task::find()
        .filter(task::Column::IsFinished.eq(false))
        .order_by_asc(task::Column::Id)
        .all(db)
        .await?;

    Ok(tasks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Marks every unfinished task with an odd id as finished.
#[instrument(skip(db))]
pub async fn complete_odd_tasks(db: &DatabaseConnection) -> Result<u64> {
    let result = Task::update_many()
        .col_expr(task::Column::IsFinished, Expr::value(true))
        .filter(task::Column::IsFinished.eq(false))
        .filter(Expr::cust("id % 2 = 1"))
        .exec(db)
        .await?;
    info!(updated = result.rows_affected, "Odd tasks completed");
    Ok(result.rows_affected)
}

/// Shifts every character three code points down.
///
/// Characters that cannot be shifted to a valid scalar value are kept unchanged.
#[must_use]
pub fn encode(text: &str) -> String {
    text.chars()
        .map(|ch| {
            u32::from(ch)
                .checked_sub(ENCODE_SHIFT)
                .and_then(char::from_u32)
                .unwrap_or(ch)
        })
        .collect()
}

/// Replaces the description of every task titled `task_title` with the encoded `text`.
#[instrument(skip(db, text))]
pub async fn encode_and_replace(
    db: &DatabaseConnection,
    text: &str,
    task_title: &str,
) -> Result<u64> {
    let result = Task::update_many()
        .col_expr(task::Column::Description, Expr::value(encode(text)))
        .filter(task::Column::Title.eq(task_title))
        .exec(db)
        .await?;
    info!(updated = result.rows_affected, "Task descriptions replaced");
    Ok(result.rows_affected)
}
