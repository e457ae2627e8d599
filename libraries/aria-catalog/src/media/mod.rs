use aria_core::{error::Result, types::*, AriaError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const MEDIA_COLUMNS: &str = "id, title, artist, album, path, kind, duration_ms, artwork_path, date_added, play_count, is_favorite";

fn map_row(row: &SqliteRow) -> Result<MediaItem> {
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
}

fn map_rows(rows: Vec<SqliteRow>) -> Result<Vec<MediaItem>> {
    rows.iter().map(map_row).collect()
}

/// Insert a draft, or replace the existing row with the same path
///
/// Replacement is an overwrite, not a merge: play count, favorite flag and
/// date added are all reset to the draft's values. The row id is preserved,
/// so playlist membership and history rows keep pointing at the item.
pub async fn upsert(pool: &SqlitePool, draft: &MediaDraft) -> Result<MediaItem> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO media (title, artist, album, path, kind, duration_ms, artwork_path, date_added, play_count, is_favorite)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, 0)
         ON CONFLICT(path) DO UPDATE SET
             title = excluded.title,
             artist = excluded.artist,
             album = excluded.album,
             kind = excluded.kind,
             duration_ms = excluded.duration_ms,
             artwork_path = excluded.artwork_path,
             date_added = excluded.date_added,
             play_count = excluded.play_count,
             is_favorite = excluded.is_favorite",
    )
    .bind(&draft.title)
    .bind(&draft.artist)
    .bind(&draft.album)
    .bind(&draft.path)
    .bind(draft.kind.as_str())
    .bind(draft.duration_ms)
    .bind(&draft.artwork_path)
    .bind(now)
    .execute(pool)
    .await?;

    get_by_path(pool, &draft.path)
        .await?
        .ok_or_else(|| AriaError::storage("Failed to retrieve upserted media"))
}

/// Get a media item by id
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<MediaItem>> {
    let row = sqlx::query(&format!("SELECT {MEDIA_COLUMNS} FROM media WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(map_row).transpose()
}

/// Get a media item by path (the natural key)
pub async fn get_by_path(pool: &SqlitePool, path: &str) -> Result<Option<MediaItem>> {
    let row = sqlx::query(&format!("SELECT {MEDIA_COLUMNS} FROM media WHERE path = ?"))
        .bind(path)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(map_row).transpose()
}

/// Get all media items, ordered by title
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(&format!("SELECT {MEDIA_COLUMNS} FROM media ORDER BY title"))
        .fetch_all(pool)
        .await?;

    map_rows(rows)
}

/// Get media items of one kind (songs or videos), ordered by title
pub async fn get_by_kind(pool: &SqlitePool, kind: MediaKind) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(&format!(
        "SELECT {MEDIA_COLUMNS} FROM media WHERE kind = ? ORDER BY title"
    ))
    .bind(kind.as_str())
    .fetch_all(pool)
    .await?;

    map_rows(rows)
}

/// Get media items by exact artist name
pub async fn get_by_artist(pool: &SqlitePool, artist: &str) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(&format!(
        "SELECT {MEDIA_COLUMNS} FROM media WHERE artist = ? ORDER BY title, album"
    ))
    .bind(artist)
    .fetch_all(pool)
    .await?;

    map_rows(rows)
}

/// Get media items by exact album name
pub async fn get_by_album(pool: &SqlitePool, album: &str) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(&format!(
        "SELECT {MEDIA_COLUMNS} FROM media WHERE album = ? ORDER BY title"
    ))
    .bind(album)
    .fetch_all(pool)
    .await?;

    map_rows(rows)
}

/// Get favorite media items
pub async fn get_favorites(pool: &SqlitePool) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(&format!(
        "SELECT {MEDIA_COLUMNS} FROM media WHERE is_favorite = 1 ORDER BY title, album"
    ))
    .fetch_all(pool)
    .await?;

    map_rows(rows)
}

/// Get the most recently added media items
pub async fn recently_added(pool: &SqlitePool, limit: i64) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(&format!(
        "SELECT {MEDIA_COLUMNS} FROM media ORDER BY date_added DESC, id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    map_rows(rows)
}

/// Get the most played media items
///
/// Items that have never been played are excluded.
pub async fn most_played(pool: &SqlitePool, limit: i64) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(&format!(
        "SELECT {MEDIA_COLUMNS} FROM media WHERE play_count > 0 ORDER BY play_count DESC, title LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    map_rows(rows)
}

/// Search media by case-insensitive substring on title, artist or album
///
/// An empty (or whitespace-only) query returns an empty result, not the
/// whole catalog.
pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<MediaItem>> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let search_pattern = format!("%{}%", query);

    let rows = sqlx::query(&format!(
        "SELECT {MEDIA_COLUMNS} FROM media
         WHERE title LIKE ? OR artist LIKE ? OR album LIKE ?
         ORDER BY title"
    ))
    .bind(&search_pattern)
    .bind(&search_pattern)
    .bind(&search_pattern)
    .fetch_all(pool)
    .await?;

    map_rows(rows)
}

/// Set the favorite flag on a media item
pub async fn set_favorite(pool: &SqlitePool, id: i64, value: bool) -> Result<()> {
    let result = sqlx::query("UPDATE media SET is_favorite = ? WHERE id = ?")
        .bind(i64::from(value))
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AriaError::not_found("Media", id.to_string()));
    }

    Ok(())
}

/// Increment the play count of a media item
pub async fn increment_play_count(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("UPDATE media SET play_count = play_count + 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AriaError::not_found("Media", id.to_string()));
    }

    Ok(())
}

/// Delete a media item
///
/// Playlist membership and history rows cascade.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM media WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AriaError::not_found("Media", id.to_string()));
    }

    Ok(())
}

/// Distinct artist names, sorted
pub async fn distinct_artists(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows = sqlx::query("SELECT DISTINCT artist FROM media ORDER BY artist")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(|row| row.get("artist")).collect())
}

/// Distinct album names, sorted
pub async fn distinct_albums(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows = sqlx::query("SELECT DISTINCT album FROM media ORDER BY album")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(|row| row.get("album")).collect())
}

/// Total number of catalogued items
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM media")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
