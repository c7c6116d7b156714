//! Song entity - may be performed by many artists.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Song database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    /// Unique identifier for the song
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Song title, unique across songs
    #[sea_orm(unique)]
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Junction rows linking this song to artists
    #[sea_orm(has_many = "super::artist_song::Entity")]
    ArtistSongs,
}

impl Related<super::artist_song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistSongs.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_song::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_song::Relation::Song.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
