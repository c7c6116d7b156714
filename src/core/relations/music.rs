//! Artist and song operations (many-to-many through `artists_songs`).

use crate::{
    entities::{
        Artist, ArtistSong, Song,
        relations::{artist, artist_song, song},
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Inserts an artist; names are unique.
pub async fn create_artist<C: ConnectionTrait>(db: &C, name: &str) -> Result<artist::Model> {
    if name.trim().is_empty() {
        return Err(Error::validation("Artist name cannot be empty"));
    }

    artist::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a song; titles are unique.
pub async fn create_song<C: ConnectionTrait>(db: &C, title: &str) -> Result<song::Model> {
    if title.trim().is_empty() {
        return Err(Error::validation("Song title cannot be empty"));
    }

    song::ActiveModel {
        title: Set(title.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

async fn artist_by_name<C: ConnectionTrait>(db: &C, artist_name: &str) -> Result<artist::Model> {
    Artist::find()
        .filter(artist::Column::Name.eq(artist_name))
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Artist", artist_name))
}

async fn song_by_title<C: ConnectionTrait>(db: &C, song_title: &str) -> Result<song::Model> {
    Song::find()
        .filter(song::Column::Title.eq(song_title))
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Song", song_title))
}

/// Links a song to an artist. Linking an already linked pair is a no-op.
#[instrument(skip(db))]
pub async fn add_song_to_artist<C: ConnectionTrait>(
    db: &C,
    artist_name: &str,
    song_title: &str,
) -> Result<()> {
    let artist = artist_by_name(db, artist_name).await?;
    let song = song_by_title(db, song_title).await?;

    if ArtistSong::find_by_id((artist.id, song.id))
        .one(db)
        .await?
        .is_some()
    {
        debug!("Song already linked");
        return Ok(());
    }

    artist_song::ActiveModel {
        artist_id: Set(artist.id),
        song_id: Set(song.id),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Songs linked to the artist, most recently stored first.
pub async fn get_songs_by_artist(
    db: &DatabaseConnection,
    artist_name: &str,
) -> Result<Vec<song::Model>> {
    let artist = artist_by_name(db, artist_name).await?;

    artist
        .find_related(Song)
        .order_by_desc(song::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Unlinks a song from an artist. Unlinking a pair that is not linked is a no-op.
#[instrument(skip(db))]
pub async fn remove_song_from_artist(
    db: &DatabaseConnection,
    artist_name: &str,
    song_title: &str,
) -> Result<()> {
    let artist = artist_by_name(db, artist_name).await?;
    let song = song_by_title(db, song_title).await?;

    let result = ArtistSong::delete_by_id((artist.id, song.id)).exec(db).await?;
    debug!(removed = result.rows_affected, "Song unlinked");
    Ok(())
}
