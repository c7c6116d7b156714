//! Artist entity - performs many songs through the `artists_songs` junction.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Artist database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    /// Unique identifier for the artist
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Artist name, unique across artists
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Junction rows linking this artist to songs
    #[sea_orm(has_many = "super::artist_song::Entity")]
    ArtistSongs,
}

impl Related<super::artist_song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistSongs.def()
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_song::Relation::Song.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_song::Relation::Artist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
