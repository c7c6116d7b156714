//! Character operations: class-wide stat adjustments, fusion, and bulk resets.

use crate::{
    entities::{
        Character,
        records::character::{self, CharacterClass},
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{info, instrument};

/// Inventory given to Assassins and Scouts by [`update_characters`].
pub const EMPTY_INVENTORY: &str = "The inventory is empty";

const ARCANE_INVENTORY: &str = "Bow of the Elven Lords, Amulet of Eternal Wisdom";
const MARTIAL_INVENTORY: &str = "Dragon Scale Armor, Excalibur";

/// Field values for a new character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    /// Character name
    pub name: String,
    /// Character class
    pub class_name: CharacterClass,
    /// Experience level
    pub level: i32,
    /// Strength stat
    pub strength: i32,
    /// Dexterity stat
    pub dexterity: i32,
    /// Intelligence stat
    pub intelligence: i32,
    /// Hit points
    pub hit_points: i32,
    /// Inventory description
    pub inventory: String,
}

impl NewCharacter {
    fn into_active_model(self) -> character::ActiveModel {
        character::ActiveModel {
            name: Set(self.name),
            class_name: Set(self.class_name),
            level: Set(self.level),
            strength: Set(self.strength),
            dexterity: Set(self.dexterity),
            intelligence: Set(self.intelligence),
            hit_points: Set(self.hit_points),
            inventory: Set(self.inventory),
            ..Default::default()
        }
    }
}

/// Inserts a character.
pub async fn create_character<C: ConnectionTrait>(
    db: &C,
    new_character: NewCharacter,
) -> Result<character::Model> {
    if new_character.name.trim().is_empty() {
        return Err(Error::validation("Character name cannot be empty"));
    }
    let stats = [
        ("level", new_character.level),
        ("strength", new_character.strength),
        ("dexterity", new_character.dexterity),
        ("intelligence", new_character.intelligence),
        ("hit points", new_character.hit_points),
    ];
    if let Some((stat, value)) = stats.into_iter().find(|(_, value)| *value < 0) {
        return Err(Error::validation(format!(
            "Character {stat} must be non-negative: {value}"
        )));
    }

    new_character
        .into_active_model()
        .insert(db)
        .await
        .map_err(Into::into)
}

/// Applies the per-class adjustments.
///
/// Mages gain 3 levels and lose 7 intelligence, Warriors lose half their hit
/// points and gain 4 dexterity, Assassins and Scouts have their inventory emptied.
#[instrument(skip(db))]
pub async fn update_characters(db: &DatabaseConnection) -> Result<()> {
    let mages = Character::update_many()
        .col_expr(
            character::Column::Level,
            Expr::col(character::Column::Level).add(3),
        )
        .col_expr(
            character::Column::Intelligence,
            Expr::col(character::Column::Intelligence).sub(7),
        )
        .filter(character::Column::ClassName.eq(CharacterClass::Mage))
        .exec(db)
        .await?;

    // Both operands are integers, so the division truncates.
    let warriors = Character::update_many()
        .col_expr(
            character::Column::HitPoints,
            Expr::col(character::Column::HitPoints).div(2),
        )
        .col_expr(
            character::Column::Dexterity,
            Expr::col(character::Column::Dexterity).add(4),
        )
        .filter(character::Column::ClassName.eq(CharacterClass::Warrior))
        .exec(db)
        .await?;

    let emptied = Character::update_many()
        .col_expr(character::Column::Inventory, Expr::value(EMPTY_INVENTORY))
        .filter(
            character::Column::ClassName.is_in([CharacterClass::Assassin, CharacterClass::Scout]),
        )
        .exec(db)
        .await?;

    info!(
        mages = mages.rows_affected,
        warriors = warriors.rows_affected,
        emptied = emptied.rows_affected,
        "Characters updated"
    );
    Ok(())
}

fn combined(stat: &str, a: i32, b: i32) -> Result<i32> {
    a.checked_add(b)
        .ok_or_else(|| Error::validation(format!("Fused {stat} overflows: {a} + {b}")))
}

#[allow(clippy::cast_possible_truncation)]
fn scaled(stat: &str, a: i32, b: i32, factor: f64) -> Result<i32> {
    let value = (f64::from(combined(stat, a, b)?) * factor).trunc();
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(Error::validation(format!(
            "Fused {stat} overflows: ({a} + {b}) * {factor}"
        )));
    }
    Ok(value as i32)
}

/// Computes the character produced by fusing `first` with `second`.
///
/// Stats scale by fixed factors and truncate toward zero; the inventory depends
/// only on the class of `first`. A stat that no longer fits an `i32` is a
/// validation error.
pub fn fusion_of(first: &character::Model, second: &character::Model) -> Result<NewCharacter> {
    let inventory = match first.class_name {
        CharacterClass::Mage | CharacterClass::Scout => ARCANE_INVENTORY,
        _ => MARTIAL_INVENTORY,
    };

    Ok(NewCharacter {
        name: format!("{} {}", first.name, second.name),
        class_name: CharacterClass::Fusion,
        level: combined("level", first.level, second.level)?.div_euclid(2),
        strength: scaled("strength", first.strength, second.strength, 1.2)?,
        dexterity: scaled("dexterity", first.dexterity, second.dexterity, 1.4)?,
        intelligence: scaled("intelligence", first.intelligence, second.intelligence, 1.5)?,
        hit_points: combined("hit points", first.hit_points, second.hit_points)?,
        inventory: inventory.to_string(),
    })
}

/// Replaces two characters with their fusion in a single transaction.
#[instrument(skip(db, first, second), fields(first = first.id, second = second.id))]
pub async fn fuse_characters(
    db: &DatabaseConnection,
    first: character::Model,
    second: character::Model,
) -> Result<character::Model> {
    let fused = fusion_of(&first, &second)?;

    let txn = db.begin().await?;
    let created = fused.into_active_model().insert(&txn).await?;
    first.delete(&txn).await?;
    second.delete(&txn).await?;
    txn.commit().await?;

    info!(id = created.id, name = %created.name, "Characters fused");
    Ok(created)
}

async fn set_for_all(db: &DatabaseConnection, column: character::Column, value: i32) -> Result<u64> {
    let result = Character::update_many()
        .col_expr(column, Expr::value(value))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Sets every character's dexterity to 30.
pub async fn grand_dexterity(db: &DatabaseConnection) -> Result<u64> {
    set_for_all(db, character::Column::Dexterity, 30).await
}

/// Sets every character's intelligence to 40.
pub async fn grand_intelligence(db: &DatabaseConnection) -> Result<u64> {
    set_for_all(db, character::Column::Intelligence, 40).await
}

/// Sets every character's strength to 50.
pub async fn grand_strength(db: &DatabaseConnection) -> Result<u64> {
    set_for_all(db, character::Column::Strength, 50).await
}

/// Deletes characters whose inventory was emptied.
#[instrument(skip(db))]
pub async fn delete_characters(db: &DatabaseConnection) -> Result<u64> {
    let result = Character::delete_many()
        .filter(character::Column::Inventory.eq(EMPTY_INVENTORY))
        .exec(db)
        .await?;
    info!(deleted = result.rows_affected, "Characters deleted");
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_character, setup_test_db};
    use sea_orm::{DatabaseBackend, MockDatabase, QueryOrder};

    async fn by_id(db: &DatabaseConnection, id: i64) -> Result<character::Model> {
        Ok(Character::find_by_id(id).one(db).await?.unwrap())
    }

    #[tokio::test]
    async fn test_update_characters_per_class() -> Result<()> {
        let db = setup_test_db().await?;
        let mage = create_test_character(&db, "Gandalf", CharacterClass::Mage).await?;
        let warrior = create_test_character(&db, "Conan", CharacterClass::Warrior).await?;
        let assassin = create_test_character(&db, "Ezio", CharacterClass::Assassin).await?;
        let scout = create_test_character(&db, "Legolas", CharacterClass::Scout).await?;

        update_characters(&db).await?;

        let mage = by_id(&db, mage.id).await?;
        assert_eq!((mage.level, mage.intelligence), (13, 33));

        let warrior = by_id(&db, warrior.id).await?;
        assert_eq!((warrior.hit_points, warrior.dexterity), (50, 34));

        assert_eq!(by_id(&db, assassin.id).await?.inventory, EMPTY_INVENTORY);
        assert_eq!(by_id(&db, scout.id).await?.inventory, EMPTY_INVENTORY);
        Ok(())
    }

    #[tokio::test]
    async fn test_warrior_hit_points_truncate() -> Result<()> {
        let db = setup_test_db().await?;
        let warrior = create_character(
            &db,
            NewCharacter {
                name: "Odd".to_string(),
                class_name: CharacterClass::Warrior,
                level: 1,
                strength: 1,
                dexterity: 1,
                intelligence: 1,
                hit_points: 7,
                inventory: String::new(),
            },
        )
        .await?;

        update_characters(&db).await?;
        assert_eq!(by_id(&db, warrior.id).await?.hit_points, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_fuse_characters() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_test_character(&db, "Merlin", CharacterClass::Mage).await?;
        let second = create_test_character(&db, "Arthur", CharacterClass::Warrior).await?;

        let fused = fuse_characters(&db, first, second).await?;

        assert_eq!(fused.name, "Merlin Arthur");
        assert_eq!(fused.class_name, CharacterClass::Fusion);
        assert_eq!(fused.level, 10);
        assert_eq!(fused.strength, 48);
        assert_eq!(fused.dexterity, 84);
        assert_eq!(fused.intelligence, 120);
        assert_eq!(fused.hit_points, 200);
        assert_eq!(fused.inventory, ARCANE_INVENTORY);

        let remaining = Character::find()
            .order_by_asc(character::Column::Id)
            .all(&db)
            .await?;
        assert_eq!(remaining, vec![fused]);
        Ok(())
    }

    #[tokio::test]
    async fn test_fusion_inventory_depends_on_first_class() -> Result<()> {
        let db = setup_test_db().await?;
        let warrior = create_test_character(&db, "A", CharacterClass::Warrior).await?;
        let scout = create_test_character(&db, "B", CharacterClass::Scout).await?;

        assert_eq!(fusion_of(&warrior, &scout)?.inventory, MARTIAL_INVENTORY);
        assert_eq!(fusion_of(&scout, &warrior)?.inventory, ARCANE_INVENTORY);
        Ok(())
    }

    #[tokio::test]
    async fn test_grand_stats_and_delete() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_character(&db, "Ezio", CharacterClass::Assassin).await?;
        let mage = create_test_character(&db, "Gandalf", CharacterClass::Mage).await?;

        assert_eq!(grand_dexterity(&db).await?, 2);
        grand_intelligence(&db).await?;
        grand_strength(&db).await?;

        let stored = by_id(&db, mage.id).await?;
        assert_eq!(
            (stored.dexterity, stored.intelligence, stored.strength),
            (30, 40, 50)
        );

        update_characters(&db).await?;
        assert_eq!(delete_characters(&db).await?, 1);
        assert_eq!(Character::find().count(&db).await?, 1);
        Ok(())
    }

    fn sturdy(name: &str) -> NewCharacter {
        NewCharacter {
            name: name.to_string(),
            class_name: CharacterClass::Warrior,
            level: 1,
            strength: 1,
            dexterity: 1,
            intelligence: 1,
            hit_points: 1,
            inventory: String::new(),
        }
    }

    #[tokio::test]
    async fn test_fuse_characters_rejects_overflow() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_character(
            &db,
            NewCharacter {
                hit_points: i32::MAX,
                ..sturdy("Titan")
            },
        )
        .await?;
        let second = create_character(&db, sturdy("Golem")).await?;

        let result = fuse_characters(&db, first, second).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        // nothing was fused or deleted
        assert_eq!(Character::find().count(&db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_fusion_of_checks_every_stat() -> Result<()> {
        let db = setup_test_db().await?;
        let base = create_character(&db, sturdy("Base")).await?;
        let overflowing = [
            NewCharacter {
                level: i32::MAX,
                ..sturdy("Level")
            },
            NewCharacter {
                // sum fits, scaled value does not
                strength: 1_800_000_000,
                ..sturdy("Strength")
            },
            NewCharacter {
                dexterity: i32::MAX,
                ..sturdy("Dexterity")
            },
            NewCharacter {
                intelligence: 1_500_000_000,
                ..sturdy("Intelligence")
            },
        ];

        for new_character in overflowing {
            let big = create_character(&db, new_character).await?;
            let result = fusion_of(&big, &base);
            assert!(
                matches!(result, Err(Error::Validation { .. })),
                "{} should overflow",
                big.name
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_create_character_rejects_negative_stats() -> Result<()> {
        // Validation fails before any query is issued
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_character(
            &db,
            NewCharacter {
                hit_points: -7,
                ..sturdy("Cursed")
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result = create_character(
            &db,
            NewCharacter {
                level: -1,
                ..sturdy("Cursed")
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        Ok(())
    }
}
