use rand::Rng;
use tabled::{Table, Tabled};

use crate::{
    info,
    management::{self, AppStore},
};

#[derive(Tabled)]
struct StatRow {
    stat: &'static str,
    value: String,
}

pub async fn stats() {
    let store = AppStore::load().await;
    let state = store.state();

    // demo figure, there is no play tracking behind it
    let plays_this_week: u32 = rand::rng().random_range(0..1000);

    let rows = vec![
        StatRow {
            stat: "Total Recommendations",
            value: state.recommendations.len().to_string(),
        },
        StatRow {
            stat: "Calendar Subscribers",
            value: state.subscribers.len().to_string(),
        },
        StatRow {
            stat: "This Week's Plays",
            value: plays_this_week.to_string(),
        },
        StatRow {
            stat: "With Spotify Links",
            value: management::spotify_track_count(&state.recommendations).to_string(),
        },
    ];

    println!("{}", Table::new(rows));
    info!("State file: {}", store.path().display());
}
