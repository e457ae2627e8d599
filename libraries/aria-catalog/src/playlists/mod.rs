use aria_core::{error::Result, types::*, AriaError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

fn map_row(row: &SqliteRow) -> Result<Playlist> {
    Ok(Playlist {
        id: row.get("id"),
        name: row.get("name"),
        artwork_path: row.get("artwork_path"),
        created_at: chrono::DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
            .ok_or_else(|| AriaError::storage("Invalid timestamp"))?,
    })
}

/// Create a new playlist
pub async fn create(
    pool: &SqlitePool,
    name: &str,
    artwork_path: Option<&str>,
) -> Result<Playlist> {
    let result = sqlx::query("INSERT INTO playlists (name, artwork_path, created_at) VALUES (?, ?, ?)")
        .bind(name)
        .bind(artwork_path)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| AriaError::storage("Failed to retrieve created playlist"))
}

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Playlist>> {
    let row = sqlx::query("SELECT id, name, artwork_path, created_at FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(map_row).transpose()
}

/// Get all playlists, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        "SELECT id, name, artwork_path, created_at FROM playlists ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(map_row).collect()
}

/// Rename a playlist
pub async fn rename(pool: &SqlitePool, id: i64, name: &str) -> Result<()> {
    let result = sqlx::query("UPDATE playlists SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AriaError::not_found("Playlist", id.to_string()));
    }

    Ok(())
}

/// Delete a playlist
///
/// Membership rows cascade.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AriaError::not_found("Playlist", id.to_string()));
    }

    Ok(())
}

/// Append a media item to a playlist
///
/// The item lands at `MAX(position) + 1`: positions grow monotonically and
/// are never reused, even after removals left gaps.
pub async fn add_media(pool: &SqlitePool, playlist_id: i64, media_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let playlist_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM playlists WHERE id = ?")
        .bind(playlist_id)
        .fetch_one(&mut *tx)
        .await?;
    if playlist_exists == 0 {
        return Err(AriaError::not_found("Playlist", playlist_id.to_string()));
    }

    let media_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM media WHERE id = ?")
        .bind(media_id)
        .fetch_one(&mut *tx)
        .await?;
    if media_exists == 0 {
        return Err(AriaError::not_found("Media", media_id.to_string()));
    }

    let next_position: i64 = sqlx::query_scalar(
        "SELECT COALESCE(MAX(position) + 1, 0) FROM playlist_items WHERE playlist_id = ?",
    )
    .bind(playlist_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO playlist_items (playlist_id, media_id, position) VALUES (?, ?, ?)")
        .bind(playlist_id)
        .bind(media_id)
        .bind(next_position)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Remove a media item from a playlist
///
/// Deletes the membership row only; remaining positions are NOT renumbered,
/// so gaps are permitted.
pub async fn remove_media(pool: &SqlitePool, playlist_id: i64, media_id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlist_items WHERE playlist_id = ? AND media_id = ?")
        .bind(playlist_id)
        .bind(media_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AriaError::not_found(
            "Playlist entry",
            format!("{}/{}", playlist_id, media_id),
        ));
    }

    Ok(())
}

/// Membership rows of a playlist, in position order
pub async fn entries(pool: &SqlitePool, playlist_id: i64) -> Result<Vec<PlaylistEntry>> {
    let rows = sqlx::query(
        "SELECT playlist_id, media_id, position FROM playlist_items
         WHERE playlist_id = ? ORDER BY position",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| PlaylistEntry {
            playlist_id: row.get("playlist_id"),
            media_id: row.get("media_id"),
            position: row.get("position"),
        })
        .collect())
}

/// Media items of a playlist, in position order
pub async fn media_for(pool: &SqlitePool, playlist_id: i64) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(
        "SELECT m.id, m.title, m.artist, m.album, m.path, m.kind, m.duration_ms,
                m.artwork_path, m.date_added, m.play_count, m.is_favorite
         FROM playlist_items pi
         INNER JOIN media m ON m.id = pi.media_id
         WHERE pi.playlist_id = ?
         ORDER BY pi.position",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let kind_str = row.get::<String, _>("kind");
            let kind = MediaKind::parse(&kind_str)
                .ok_or_else(|| AriaError::storage(format!("Invalid media kind: {}", kind_str)))?;

            Ok(MediaItem {
                id: row.get("id"),
                title: row.get("title"),
                artist: row.get("artist"),
                album: row.get("album"),
                path: row.get("path"),
                kind,
                duration_ms: row.get("duration_ms"),
                artwork_path: row.get("artwork_path"),
                date_added: chrono::DateTime::from_timestamp(row.get::<i64, _>("date_added"), 0)
                    .ok_or_else(|| AriaError::storage("Invalid timestamp"))?,
                play_count: row.get("play_count"),
                is_favorite: row.get::<i64, _>("is_favorite") != 0,
            })
        })
        .collect()
}
