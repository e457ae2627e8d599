//! User settings management
//!
//! Persistent storage for user preferences as key-value pairs with
//! JSON-serialized values. Typed accessors clamp out-of-range values on
//! write, so the catalog never holds an invalid preference.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_catalog::settings;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! // Set a theme preference
//! settings::set_setting(pool, settings::SETTING_THEME, &serde_json::json!("dark")).await?;
//!
//! // Get the theme preference
//! let theme = settings::get_setting(pool, settings::SETTING_THEME).await?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::{Row, SqlitePool};

use crate::error::CatalogError;

pub type Result<T> = std::result::Result<T, CatalogError>;

// Setting key constants
/// UI theme setting (e.g., "light", "dark", "system")
pub const SETTING_THEME: &str = "ui.theme";

/// Equalizer preset name (e.g., "flat", "rock", "custom")
pub const SETTING_EQ_PRESET: &str = "audio.eq.preset";

/// Equalizer band gains in dB (10 bands, each in [-12, 12])
pub const SETTING_EQ_BANDS: &str = "audio.eq.bands";

/// Bass boost level (0.0 - 1.0)
pub const SETTING_BASS_BOOST: &str = "audio.bass_boost";

/// Virtualizer level (0.0 - 1.0)
pub const SETTING_VIRTUALIZER: &str = "audio.virtualizer";

/// Crossfade duration in seconds (0 - 10)
pub const SETTING_CROSSFADE_SECONDS: &str = "playback.crossfade_seconds";

/// Sleep timer in minutes (absent when disabled)
pub const SETTING_SLEEP_TIMER_MINUTES: &str = "playback.sleep_timer_minutes";

/// Volume normalization enabled
pub const SETTING_VOLUME_NORMALIZATION: &str = "audio.volume_normalization";

/// Last folder picked for a manual scan
pub const SETTING_LAST_SCAN_FOLDER: &str = "library.last_scan_folder";

/// Number of equalizer bands
pub const EQ_BAND_COUNT: usize = 10;

/// Per-band gain range in dB
pub const EQ_GAIN_MIN_DB: f64 = -12.0;
/// Per-band gain range in dB
pub const EQ_GAIN_MAX_DB: f64 = 12.0;

/// Maximum crossfade duration in seconds
pub const CROSSFADE_MAX_SECONDS: f64 = 10.0;

/// Setting entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    /// Setting key
    pub key: String,
    /// Setting value (JSON)
    pub value: serde_json::Value,
}

/// Get a single setting value
///
/// Returns `Ok(Some(value))` if the setting exists, `Ok(None)` if not found
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<serde_json::Value>> {
    let result = sqlx::query("SELECT value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match result {
        Some(row) => {
            let raw: String = row.get("value");
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| CatalogError::SerializationError(e.to_string()))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Set a setting value
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &serde_json::Value) -> Result<()> {
    let value_str = serde_json::to_string(value)
        .map_err(|e| CatalogError::SerializationError(e.to_string()))?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO settings (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value_str)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get all settings
pub async fn get_all_settings(pool: &SqlitePool) -> Result<Vec<Setting>> {
    let rows = sqlx::query("SELECT key, value FROM settings ORDER BY key")
        .fetch_all(pool)
        .await?;

    rows.into_iter()
        .map(|row| {
            let raw: String = row.get("value");
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| CatalogError::SerializationError(e.to_string()))?;
            Ok(Setting {
                key: row.get("key"),
                value,
            })
        })
        .collect()
}

/// Delete a setting
///
/// Returns `Ok(true)` if a setting was deleted, `Ok(false)` if not found
pub async fn delete_setting(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM settings WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Typed accessors. All clamp on write.

/// Set the equalizer preset and band gains; each gain is clamped to [-12, 12] dB
pub async fn set_equalizer(pool: &SqlitePool, preset: &str, gains: &[f64]) -> Result<()> {
    let mut clamped: Vec<f64> = gains
        .iter()
        .map(|g| g.clamp(EQ_GAIN_MIN_DB, EQ_GAIN_MAX_DB))
        .collect();
    clamped.resize(EQ_BAND_COUNT, 0.0);

    set_setting(pool, SETTING_EQ_PRESET, &json!(preset)).await?;
    set_setting(pool, SETTING_EQ_BANDS, &json!(clamped)).await
}

/// Get the equalizer preset and band gains
pub async fn equalizer(pool: &SqlitePool) -> Result<Option<(String, Vec<f64>)>> {
    let Some(preset) = get_setting(pool, SETTING_EQ_PRESET).await? else {
        return Ok(None);
    };
    let Some(bands) = get_setting(pool, SETTING_EQ_BANDS).await? else {
        return Ok(None);
    };

    let preset: String = serde_json::from_value(preset)
        .map_err(|e| CatalogError::SerializationError(e.to_string()))?;
    let bands: Vec<f64> = serde_json::from_value(bands)
        .map_err(|e| CatalogError::SerializationError(e.to_string()))?;

    Ok(Some((preset, bands)))
}

/// Set the bass boost level, clamped to [0, 1]
pub async fn set_bass_boost(pool: &SqlitePool, level: f64) -> Result<()> {
    set_setting(pool, SETTING_BASS_BOOST, &json!(level.clamp(0.0, 1.0))).await
}

/// Set the virtualizer level, clamped to [0, 1]
pub async fn set_virtualizer(pool: &SqlitePool, level: f64) -> Result<()> {
    set_setting(pool, SETTING_VIRTUALIZER, &json!(level.clamp(0.0, 1.0))).await
}

/// Set the crossfade duration, clamped to [0, 10] seconds
pub async fn set_crossfade_seconds(pool: &SqlitePool, seconds: f64) -> Result<()> {
    set_setting(
        pool,
        SETTING_CROSSFADE_SECONDS,
        &json!(seconds.clamp(0.0, CROSSFADE_MAX_SECONDS)),
    )
    .await
}

/// Set or clear the sleep timer
pub async fn set_sleep_timer_minutes(pool: &SqlitePool, minutes: Option<u32>) -> Result<()> {
    match minutes {
        Some(m) => set_setting(pool, SETTING_SLEEP_TIMER_MINUTES, &json!(m)).await,
        None => {
            delete_setting(pool, SETTING_SLEEP_TIMER_MINUTES).await?;
            Ok(())
        }
    }
}

/// Enable or disable volume normalization
pub async fn set_volume_normalization(pool: &SqlitePool, enabled: bool) -> Result<()> {
    set_setting(pool, SETTING_VOLUME_NORMALIZATION, &json!(enabled)).await
}

/// Remember the last folder picked for a manual scan
pub async fn set_last_scan_folder(pool: &SqlitePool, folder: &str) -> Result<()> {
    set_setting(pool, SETTING_LAST_SCAN_FOLDER, &json!(folder)).await
}
