//! Integration tests for the media vertical slice
//!
//! Tests catalog media operations including:
//! - Path-keyed upsert (overwrite, not merge)
//! - Ordered queries and derived views
//! - Search semantics (empty query, case-insensitivity)
//! - Atomic single-row mutations


use aria_core::types::MediaKind;
use aria_core::AriaError;
use test_helpers::*;

#[tokio::test]
async fn test_upsert_assigns_id_and_defaults() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let item = aria_catalog::media::upsert(pool, &audio_draft("Song", "Artist", "Album", "/music/song.mp3"))
        .await
        .expect("Failed to upsert");

    assert!(item.id > 0);
    assert_eq!(item.title, "Song");
    assert_eq!(item.play_count, 0);
    assert!(!item.is_favorite);
    assert_eq!(item.kind, MediaKind::Audio);
}

#[tokio::test]
async fn test_upsert_overwrites_existing_path() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let v1 = aria_catalog::media::upsert(pool, &audio_draft("Old Title", "Old Artist", "Old Album", "/music/a.mp3"))
        .await
        .unwrap();

    // Accumulate state that an overwrite must reset
    aria_catalog::media::set_favorite(pool, v1.id, true).await.unwrap();
    aria_catalog::media::increment_play_count(pool, v1.id).await.unwrap();

    let mut draft = audio_draft("New Title", "New Artist", "New Album", "/music/a.mp3");
    draft.duration_ms = 99_000;
    let v2 = aria_catalog::media::upsert(pool, &draft).await.unwrap();

    // Same row, fully replaced: overwrite, not merge
    assert_eq!(v2.id, v1.id);
    assert_eq!(v2.title, "New Title");
    assert_eq!(v2.artist, "New Artist");
    assert_eq!(v2.album, "New Album");
    assert_eq!(v2.duration_ms, 99_000);
    assert_eq!(v2.play_count, 0);
    assert!(!v2.is_favorite);

    let all = aria_catalog::media::get_all(pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_get_all_ordered_by_title() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_media(pool, "Charlie", "/m/c.mp3").await;
    create_test_media(pool, "Alpha", "/m/a.mp3").await;
    create_test_media(pool, "Bravo", "/m/b.mp3").await;

    let all = aria_catalog::media::get_all(pool).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);
}

#[tokio::test]
async fn test_get_by_kind_partitions() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    aria_catalog::media::upsert(pool, &audio_draft("Song", "A", "B", "/m/song.mp3"))
        .await
        .unwrap();
    aria_catalog::media::upsert(pool, &video_draft("Clip", "/m/clip.mp4"))
        .await
        .unwrap();

    let songs = aria_catalog::media::get_by_kind(pool, MediaKind::Audio).await.unwrap();
    let videos = aria_catalog::media::get_by_kind(pool, MediaKind::Video).await.unwrap();

    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].title, "Song");
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].title, "Clip");
}

#[tokio::test]
async fn test_get_by_artist_and_album() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    aria_catalog::media::upsert(pool, &audio_draft("One", "Muse", "Showbiz", "/m/1.mp3"))
        .await
        .unwrap();
    aria_catalog::media::upsert(pool, &audio_draft("Two", "Muse", "Absolution", "/m/2.mp3"))
        .await
        .unwrap();
    aria_catalog::media::upsert(pool, &audio_draft("Three", "Other", "Showbiz", "/m/3.mp3"))
        .await
        .unwrap();

    let by_artist = aria_catalog::media::get_by_artist(pool, "Muse").await.unwrap();
    assert_eq!(by_artist.len(), 2);
    assert!(by_artist.iter().all(|m| m.artist == "Muse"));

    let by_album = aria_catalog::media::get_by_album(pool, "Showbiz").await.unwrap();
    assert_eq!(by_album.len(), 2);
    assert!(by_album.iter().all(|m| m.album == "Showbiz"));
}

#[tokio::test]
async fn test_search_empty_query_returns_nothing() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_media(pool, "Song", "/m/song.mp3").await;

    let results = aria_catalog::media::search(pool, "").await.unwrap();
    assert!(results.is_empty());

    let results = aria_catalog::media::search(pool, "   ").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_case_insensitive_across_fields() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    aria_catalog::media::upsert(pool, &audio_draft("Foobar Song", "Somebody", "Nothing", "/m/1.mp3"))
        .await
        .unwrap();
    aria_catalog::media::upsert(pool, &audio_draft("Other", "The Foo Fighters", "Nothing", "/m/2.mp3"))
        .await
        .unwrap();
    aria_catalog::media::upsert(pool, &audio_draft("Third", "Somebody", "Foolish Album", "/m/3.mp3"))
        .await
        .unwrap();
    aria_catalog::media::upsert(pool, &audio_draft("Unrelated", "Somebody", "Nothing", "/m/4.mp3"))
        .await
        .unwrap();

    let results = aria_catalog::media::search(pool, "FOO").await.unwrap();
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_toggle_favorite_is_involutive() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_media(pool, "Song", "/m/song.mp3").await;

    aria_catalog::media::set_favorite(pool, id, true).await.unwrap();
    let item = aria_catalog::media::get_by_id(pool, id).await.unwrap().unwrap();
    assert!(item.is_favorite);

    aria_catalog::media::set_favorite(pool, id, false).await.unwrap();
    let item = aria_catalog::media::get_by_id(pool, id).await.unwrap().unwrap();
    assert!(!item.is_favorite);
}

#[tokio::test]
async fn test_favorites_view() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let a = create_test_media(pool, "Alpha", "/m/a.mp3").await;
    create_test_media(pool, "Bravo", "/m/b.mp3").await;

    aria_catalog::media::set_favorite(pool, a, true).await.unwrap();

    let favorites = aria_catalog::media::get_favorites(pool).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].title, "Alpha");
}

#[tokio::test]
async fn test_most_played_excludes_unplayed_and_orders_by_count() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let a = create_test_media(pool, "A", "/m/a.mp3").await;
    let b = create_test_media(pool, "B", "/m/b.mp3").await;

    for _ in 0..5 {
        aria_catalog::media::increment_play_count(pool, b).await.unwrap();
    }

    // A has never been played: excluded
    let most = aria_catalog::media::most_played(pool, 10).await.unwrap();
    assert_eq!(most.len(), 1);
    assert_eq!(most[0].id, b);

    for _ in 0..3 {
        aria_catalog::media::increment_play_count(pool, a).await.unwrap();
    }

    let most = aria_catalog::media::most_played(pool, 10).await.unwrap();
    let ids: Vec<i64> = most.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![b, a]);
    assert_eq!(most[0].play_count, 5);
    assert_eq!(most[1].play_count, 3);
}

#[tokio::test]
async fn test_recently_added_newest_first_with_limit() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_media(pool, "First", "/m/1.mp3").await;
    create_test_media(pool, "Second", "/m/2.mp3").await;
    create_test_media(pool, "Third", "/m/3.mp3").await;

    let recent = aria_catalog::media::recently_added(pool, 2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].title, "Third");
    assert_eq!(recent[1].title, "Second");
}

#[tokio::test]
async fn test_mutations_on_missing_id_fail_with_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = aria_catalog::media::set_favorite(pool, 9999, true).await.unwrap_err();
    assert!(matches!(err, AriaError::NotFound { .. }));

    let err = aria_catalog::media::increment_play_count(pool, 9999).await.unwrap_err();
    assert!(matches!(err, AriaError::NotFound { .. }));

    let err = aria_catalog::media::delete(pool, 9999).await.unwrap_err();
    assert!(matches!(err, AriaError::NotFound { .. }));
}

#[tokio::test]
async fn test_distinct_artists_and_albums() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    aria_catalog::media::upsert(pool, &audio_draft("1", "Zeta", "Omega", "/m/1.mp3"))
        .await
        .unwrap();
    aria_catalog::media::upsert(pool, &audio_draft("2", "Alpha", "Omega", "/m/2.mp3"))
        .await
        .unwrap();
    aria_catalog::media::upsert(pool, &audio_draft("3", "Alpha", "Theta", "/m/3.mp3"))
        .await
        .unwrap();

    let artists = aria_catalog::media::distinct_artists(pool).await.unwrap();
    assert_eq!(artists, vec!["Alpha".to_string(), "Zeta".to_string()]);

    let albums = aria_catalog::media::distinct_albums(pool).await.unwrap();
    assert_eq!(albums, vec!["Omega".to_string(), "Theta".to_string()]);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_media(pool, "Song", "/m/song.mp3").await;
    aria_catalog::media::delete(pool, id).await.unwrap();

    assert!(aria_catalog::media::get_by_id(pool, id).await.unwrap().is_none());
    assert_eq!(aria_catalog::media::count(pool).await.unwrap(), 0);
}
