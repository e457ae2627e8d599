use aria_core::{error::Result, types::*, AriaError};
use sqlx::{Row, SqlitePool};

/// Record a play of a media item
///
/// Appends a history entry and trims the log to the 100 most recent rows
/// in the same transaction, evicting the oldest first.
pub async fn record_play(pool: &SqlitePool, media_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM media WHERE id = ?")
        .bind(media_id)
        .fetch_one(&mut *tx)
        .await?;

    if exists == 0 {
        return Err(AriaError::not_found("Media", media_id.to_string()));
    }

    sqlx::query("INSERT INTO recently_played (media_id, played_at) VALUES (?, ?)")
        .bind(media_id)
        .bind(chrono::Utc::now().timestamp())
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        "DELETE FROM recently_played WHERE id NOT IN (
             SELECT id FROM recently_played ORDER BY played_at DESC, id DESC LIMIT ?
         )",
    )
    .bind(PLAY_HISTORY_CAP as i64)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Recently played media, most recent first
///
/// Joins the history log to the catalog; an item played several times
/// appears once per retained history row.
pub async fn recently_played(pool: &SqlitePool, limit: i64) -> Result<Vec<MediaItem>> {
    let rows = sqlx::query(
        "SELECT m.id, m.title, m.artist, m.album, m.path, m.kind, m.duration_ms,
                m.artwork_path, m.date_added, m.play_count, m.is_favorite
         FROM recently_played rp
         INNER JOIN media m ON m.id = rp.media_id
         ORDER BY rp.played_at DESC, rp.id DESC
         LIMIT ?",
    )
    .bind(limit)
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

/// Raw history entries, most recent first
pub async fn entries(pool: &SqlitePool, limit: i64) -> Result<Vec<PlayHistoryEntry>> {
    let rows = sqlx::query(
        "SELECT id, media_id, played_at FROM recently_played
         ORDER BY played_at DESC, id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(PlayHistoryEntry {
                id: row.get("id"),
                media_id: row.get("media_id"),
                played_at: chrono::DateTime::from_timestamp(row.get::<i64, _>("played_at"), 0)
                    .ok_or_else(|| AriaError::storage("Invalid timestamp"))?,
            })
        })
        .collect()
}

/// Number of retained history rows
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recently_played")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Clear the whole history log
pub async fn clear(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM recently_played")
        .execute(pool)
        .await?;

    Ok(())
}
