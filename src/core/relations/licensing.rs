//! Driver and driving license operations (one-to-one).

use crate::{
    entities::{
        Driver, DrivingLicense,
        relations::{driver, driving_license},
    },
    errors::{Error, Result},
};
use chrono::Duration;
use sea_orm::{ConnectionTrait, JoinType, QueryOrder, QuerySelect, Set, prelude::*};

/// Days a license stays valid after issue.
pub const LICENSE_VALIDITY_DAYS: i64 = 365;

/// Inserts a driver.
pub async fn create_driver<C: ConnectionTrait>(
    db: &C,
    first_name: &str,
    last_name: &str,
) -> Result<driver::Model> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(Error::validation("Driver names cannot be empty"));
    }

    driver::ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Issues a license to `driver_id`; a driver can hold only one.
pub async fn create_license<C: ConnectionTrait>(
    db: &C,
    license_number: &str,
    issue_date: Date,
    driver_id: i64,
) -> Result<driving_license::Model> {
    if license_number.trim().is_empty() {
        return Err(Error::validation("License number cannot be empty"));
    }

    driving_license::ActiveModel {
        license_number: Set(license_number.to_string()),
        issue_date: Set(issue_date),
        driver_id: Set(driver_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Day on which a license issued on `issue_date` expires.
#[must_use]
pub fn expiration_date(issue_date: Date) -> Date {
    issue_date + Duration::days(LICENSE_VALIDITY_DAYS)
}

/// One line per license, highest license number first.
pub async fn calculate_licenses_expiration_dates(db: &DatabaseConnection) -> Result<String> {
    let licenses = DrivingLicense::find()
        .order_by_desc(driving_license::Column::LicenseNumber)
        .all(db)
        .await?;

    Ok(licenses
        .iter()
        .map(|license| {
            format!(
                "License with number: {} expires on {}!",
                license.license_number,
                expiration_date(license.issue_date)
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Drivers whose license was issued after `due_date` minus the validity period.
pub async fn get_drivers_with_expired_licenses(
    db: &DatabaseConnection,
    due_date: Date,
) -> Result<Vec<driver::Model>> {
    let start_date = due_date - Duration::days(LICENSE_VALIDITY_DAYS);

    Driver::find()
        .join(JoinType::InnerJoin, driver::Relation::License.def())
        .filter(driving_license::Column::IssueDate.gt(start_date))
        .order_by_asc(driver::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
