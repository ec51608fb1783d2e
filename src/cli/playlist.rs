use crate::{
    error, info,
    management::{self, AppStore},
    success,
};

use super::clipboard::copy_to_clipboard;

pub async fn playlist(url: Option<String>) {
    let mut store = AppStore::load().await;

    if let Some(url) = url {
        match management::save_playlist_url(&mut store, &url).await {
            Ok(_) => success!("Playlist URL saved!"),
            Err(e) => error!("{}", e),
        }
    }

    let state = store.state();
    match &state.spotify_playlist_url {
        Some(url) => {
            info!("Playlist: {}", url);
            info!(
                "{} of {} recommendations have Spotify links",
                management::spotify_track_count(&state.recommendations),
                state.recommendations.len()
            );
        }
        None => info!("No playlist saved yet. Use --url https://open.spotify.com/playlist/..."),
    }
}

pub async fn playlist_tracks(copy: bool) {
    let store = AppStore::load().await;
    let recommendations = &store.state().recommendations;

    let track_list = match management::generate_track_list(recommendations) {
        Ok(list) => list,
        Err(e) => error!("{}", e),
    };
    let count = management::spotify_track_count(recommendations);

    if copy {
        if copy_to_clipboard(&track_list) {
            success!(
                "Track list copied to clipboard! {} tracks ready for your Spotify playlist.",
                count
            );
        }
        return;
    }

    println!("{}\n", track_list);
    success!("{} tracks ready for your Spotify playlist.", count);
}
