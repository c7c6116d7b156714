//! Hotel room operations: deluxe listings, capacity accretion, reservations.

use crate::{
    entities::{
        HotelRoom,
        records::hotel_room::{self, RoomType},
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{debug, info, instrument};

/// Inserts a hotel room.
pub async fn create_hotel_room<C: ConnectionTrait>(
    db: &C,
    room_number: i32,
    room_type: RoomType,
    capacity: i32,
    amenities: &str,
    price_per_night: f64,
    is_reserved: bool,
) -> Result<hotel_room::Model> {
    if room_number < 0 || capacity < 0 {
        return Err(Error::validation(format!(
            "Room number and capacity must be non-negative: {room_number}, {capacity}"
        )));
    }
    if price_per_night < 0.0 || !price_per_night.is_finite() {
        return Err(Error::validation(format!(
            "Invalid price per night: {price_per_night}"
        )));
    }

    hotel_room::ActiveModel {
        room_number: Set(room_number),
        room_type: Set(room_type),
        capacity: Set(capacity),
        amenities: Set(amenities.to_string()),
        price_per_night: Set(price_per_night),
        is_reserved: Set(is_reserved),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Lists Deluxe rooms with an even id, one per line.
pub async fn get_deluxe_rooms(db: &DatabaseConnection) -> Result<String> {
    let rooms = HotelRoom::find()
        .filter(hotel_room::Column::RoomType.eq(RoomType::Deluxe))
        .filter(Expr::cust("id % 2 = 0"))
        .order_by_asc(hotel_room::Column::Id)
        .all(db)
        .await?;

    Ok(rooms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Grows the capacity of every reserved room.
///
/// Rooms are walked in id order. The first room, when reserved, grows by its own
/// id; any later reserved room grows by the capacity of the room before it, as
/// that room stands after its own update. An overflowing capacity aborts the
/// whole walk and leaves every room untouched.
#[instrument(skip(db))]
pub async fn increase_room_capacity(db: &DatabaseConnection) -> Result<()> {
    let txn = db.begin().await?;
    let rooms = HotelRoom::find()
        .order_by_asc(hotel_room::Column::Id)
        .all(&txn)
        .await?;

    let mut previous_capacity: Option<i32> = None;
    let mut updated = 0_usize;

    for room in rooms {
        let mut capacity = room.capacity;

        if room.is_reserved {
            let growth = match previous_capacity {
                None => i32::try_from(room.id).map_err(|_| {
                    Error::validation(format!("Room id {} does not fit a capacity", room.id))
                })?,
                Some(previous) => previous,
            };
            capacity = capacity.checked_add(growth).ok_or_else(|| {
                Error::validation(format!(
                    "Capacity of room {} overflows: {capacity} + {growth}",
                    room.room_number
                ))
            })?;
            debug!(id = room.id, capacity, "Room capacity increased");

            let mut active: hotel_room::ActiveModel = room.into();
            active.capacity = Set(capacity);
            active.update(&txn).await?;
            updated += 1;
        }

        previous_capacity = Some(capacity);
    }
    txn.commit().await?;

    info!(updated, "Room capacities increased");
    Ok(())
}

/// Reserves the first unreserved room, if any.
pub async fn reserve_first_room(db: &DatabaseConnection) -> Result<()> {
    let first_free = HotelRoom::find()
        .filter(hotel_room::Column::IsReserved.eq(false))
        .order_by_asc(hotel_room::Column::Id)
        .one(db)
        .await?;

    if let Some(room) = first_free {
        let mut active: hotel_room::ActiveModel = room.into();
        active.is_reserved = Set(true);
        active.update(db).await?;
    }
    Ok(())
}

/// Deletes the last stored room unless it is reserved.
pub async fn delete_last_room(db: &DatabaseConnection) -> Result<()> {
    let last = HotelRoom::find()
        .order_by_desc(hotel_room::Column::Id)
        .one(db)
        .await?;

    if let Some(room) = last.filter(|room| !room.is_reserved) {
        room.delete(db).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_room, setup_test_db};

    async fn capacities(db: &DatabaseConnection) -> Result<Vec<i32>> {
        Ok(HotelRoom::find()
            .order_by_asc(hotel_room::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|room| room.capacity)
            .collect())
    }

    #[tokio::test]
    async fn test_get_deluxe_rooms_even_ids_only() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 101, RoomType::Deluxe, 2, false).await?;
        create_test_room(&db, 102, RoomType::Deluxe, 2, false).await?;
        create_test_room(&db, 103, RoomType::Standard, 2, false).await?;
        create_test_room(&db, 104, RoomType::Deluxe, 3, true).await?;

        assert_eq!(
            get_deluxe_rooms(&db).await?,
            "Deluxe room with number 102 costs 100.00$ per night!\n\
             Deluxe room with number 104 costs 100.00$ per night!"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_increase_room_capacity_chains_previous() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 101, RoomType::Standard, 2, true).await?;
        create_test_room(&db, 102, RoomType::Deluxe, 3, false).await?;
        create_test_room(&db, 103, RoomType::Suite, 4, true).await?;
        create_test_room(&db, 104, RoomType::Suite, 5, true).await?;

        increase_room_capacity(&db).await?;

        // 2 + id 1, untouched 3, 4 + 3, 5 + 7
        assert_eq!(capacities(&db).await?, vec![3, 3, 7, 12]);
        Ok(())
    }

    #[tokio::test]
    async fn test_reserve_first_room() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 101, RoomType::Standard, 2, true).await?;
        create_test_room(&db, 102, RoomType::Standard, 2, false).await?;
        create_test_room(&db, 103, RoomType::Standard, 2, false).await?;

        reserve_first_room(&db).await?;

        let reserved: Vec<bool> = HotelRoom::find()
            .order_by_asc(hotel_room::Column::Id)
            .all(&db)
            .await?
            .into_iter()
            .map(|room| room.is_reserved)
            .collect();
        assert_eq!(reserved, vec![true, true, false]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_last_room_keeps_reserved() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 101, RoomType::Standard, 2, false).await?;
        create_test_room(&db, 102, RoomType::Standard, 2, true).await?;

        delete_last_room(&db).await?;
        assert_eq!(HotelRoom::find().count(&db).await?, 2);

        reserve_first_room(&db).await?;
        create_test_room(&db, 103, RoomType::Suite, 4, false).await?;
        delete_last_room(&db).await?;
        assert_eq!(HotelRoom::find().count(&db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_increase_room_capacity_starts_after_free_room() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 101, RoomType::Standard, 5, false).await?;
        create_test_room(&db, 102, RoomType::Deluxe, 2, true).await?;
        create_test_room(&db, 103, RoomType::Suite, 4, false).await?;
        create_test_room(&db, 104, RoomType::Suite, 1, true).await?;

        increase_room_capacity(&db).await?;

        // untouched 5, 2 + 5, untouched 4, 1 + 4
        assert_eq!(capacities(&db).await?, vec![5, 7, 4, 5]);
        Ok(())
    }

    #[tokio::test]
    async fn test_increase_room_capacity_rejects_overflow() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_room(&db, 101, RoomType::Standard, 1_500_000_000, true).await?;
        create_test_room(&db, 102, RoomType::Standard, 1_500_000_000, true).await?;

        let result = increase_room_capacity(&db).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        assert_eq!(capacities(&db).await?, vec![1_500_000_000, 1_500_000_000]);
        Ok(())
    }
}
