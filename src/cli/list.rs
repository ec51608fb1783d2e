use chrono::Utc;
use tabled::Table;

use crate::{info, management::AppStore, types::Recommendation, utils};

pub async fn list(upcoming_only: bool, past_only: bool) {
    let store = AppStore::load().await;
    let partition = utils::partition_recommendations(&store.state().recommendations, Utc::now());

    if !past_only {
        print_section(
            "Upcoming Recommendations",
            &partition.upcoming,
            "No upcoming recommendations scheduled.",
        );
    }

    if !upcoming_only {
        print_section(
            "Recommendation History",
            &partition.past,
            "No published recommendations yet.",
        );
    }
}

fn print_section(heading: &str, recommendations: &[&Recommendation], empty: &str) {
    println!("{} ({})", heading, recommendations.len());
    if recommendations.is_empty() {
        info!("{}", empty);
        println!();
        return;
    }

    let table = Table::new(utils::build_table_rows(recommendations));
    println!("{}\n", table);
}
