//! Aria Player Catalog
//!
//! `SQLite` persistence layer for Aria Player: the durable catalog of media
//! items, playlists, playlist membership, a bounded play-history log, and
//! user settings.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//!   (`media`, `playlists`, `history`, `settings`)
//! - **Path as natural key**: inserting a media row whose path already
//!   exists replaces the row wholesale (overwrite, not merge)
//! - **Bounded history**: the `recently_played` log never exceeds 100 rows
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_catalog::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://aria.db").await?;
//! run_migrations(&pool).await?;
//!
//! let items = aria_catalog::media::get_all(&pool).await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod history;
pub mod media;
pub mod playlists;
pub mod settings;

pub use error::CatalogError;

use sqlx::sqlite::SqlitePool;

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), CatalogError> {
    // Embedded migrations for reliability across different execution contexts
    const MIGRATIONS: &[&str] = &[
        include_str!("../migrations/0001_create_media.sql"),
        include_str!("../migrations/0002_create_playlists.sql"),
        include_str!("../migrations/0003_create_playlist_items.sql"),
        include_str!("../migrations/0004_create_recently_played.sql"),
        include_str!("../migrations/0005_create_settings.sql"),
    ];

    for migration in MIGRATIONS {
        sqlx::raw_sql(migration)
            .execute(pool)
            .await
            .map_err(|e| CatalogError::Migration(e.to_string()))?;
    }

    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://aria.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("creating pool for {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // WAL mode for better concurrency
        .foreign_keys(true) // Cascades depend on enforced foreign keys
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
