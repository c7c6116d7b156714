//! Junction entity for the artist/song many-to-many link.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One artist performing one song
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists_songs")]
pub struct Model {
    /// Performing artist
    #[sea_orm(primary_key, auto_increment = false)]
    pub artist_id: i64,
    /// Performed song
    #[sea_orm(primary_key, auto_increment = false)]
    pub song_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Link side pointing at the artist
    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id",
        on_delete = "Cascade"
    )]
    Artist,
    /// Link side pointing at the song
    #[sea_orm(
        belongs_to = "super::song::Entity",
        from = "Column::SongId",
        to = "super::song::Column::Id",
        on_delete = "Cascade"
    )]
    Song,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Song.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
