use crate::types::{AlbumImage, ExternalUrls, SpotifyTrack, TrackAlbum, TrackArtist};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    artist: &'static str,
    album: &'static str,
    cover: &'static str,
    release_date: &'static str,
    popularity: u32,
    duration_ms: u64,
}

const CATALOG: [CatalogEntry; 2] = [
    CatalogEntry {
        id: "4iV5W9uYEdYUVa79Axb7Rh",
        name: "Bohemian Rhapsody",
        artist: "Queen",
        album: "A Night at the Opera",
        cover: "https://i.scdn.co/image/ab67616d0000b273ce4f1737bc8a646c8c4bd25a",
        release_date: "1975-11-21",
        popularity: 87,
        duration_ms: 355000,
    },
    CatalogEntry {
        id: "5CQ30WqJwcep0pYcV4AMNc",
        name: "Stairway to Heaven",
        artist: "Led Zeppelin",
        album: "Led Zeppelin IV",
        cover: "https://i.scdn.co/image/ab67616d0000b273c8a11e48c91a982d086afc69",
        release_date: "1971-11-08",
        popularity: 80,
        duration_ms: 482000,
    },
];

const PLACEHOLDER: CatalogEntry = CatalogEntry {
    id: "",
    name: "Unknown Track",
    artist: "Unknown Artist",
    album: "Unknown Album",
    cover: PLACEHOLDER_IMAGE,
    release_date: "2000-01-01",
    popularity: 50,
    duration_ms: 180000,
};

fn build_track(id: &str, entry: &CatalogEntry) -> SpotifyTrack {
    SpotifyTrack {
        id: id.to_string(),
        name: entry.name.to_string(),
        artists: vec![TrackArtist {
            name: entry.artist.to_string(),
        }],
        album: TrackAlbum {
            name: entry.album.to_string(),
            images: vec![AlbumImage {
                url: entry.cover.to_string(),
            }],
            release_date: Some(entry.release_date.to_string()),
        },
        external_urls: ExternalUrls {
            spotify: super::track_url(id),
        },
        popularity: entry.popularity,
        duration_ms: entry.duration_ms,
    }
}

fn to_track(entry: &CatalogEntry) -> SpotifyTrack {
    build_track(entry.id, entry)
}

pub fn catalog() -> Vec<SpotifyTrack> {
    CATALOG.iter().map(to_track).collect()
}

/// Stand-in for fetching a single track; unknown ids get a placeholder record.
pub async fn lookup_track(track_id: &str) -> SpotifyTrack {
    match CATALOG.iter().find(|entry| entry.id == track_id) {
        Some(entry) => to_track(entry),
        None => build_track(track_id, &PLACEHOLDER),
    }
}

/// Case-insensitive substring match on track name or primary artist.
pub async fn search_tracks(query: &str) -> Vec<SpotifyTrack> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(&needle)
                || entry.artist.to_lowercase().contains(&needle)
        })
        .map(to_track)
        .collect()
}
