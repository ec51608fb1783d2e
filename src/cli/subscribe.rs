use crate::{
    config, error, info,
    management::{self, AppStore},
    success,
};

use super::clipboard::copy_to_clipboard;

const CALENDAR_INSTRUCTIONS: [(&str, &str); 4] = [
    (
        "iPhone/iPad",
        "Settings → Calendar → Accounts → Add Account → Other → Add Subscribed Calendar",
    ),
    (
        "Google Calendar",
        "Left sidebar → Other calendars → + → From URL",
    ),
    (
        "Outlook",
        "File → Account Settings → Internet Calendars → New",
    ),
    ("Mac Calendar", "File → New Calendar Subscription"),
];

pub async fn subscribe(copy: bool) {
    let calendar_url = config::calendar_url();

    println!("Get Weekly Music Discoveries\n");
    println!("1. Copy the calendar link below");
    println!("   {}\n", calendar_url);
    println!("2. Add to your calendar app:");
    for (platform, steps) in CALENDAR_INSTRUCTIONS {
        println!("   {}: {}", platform, steps);
    }
    println!("\n3. Enjoy weekly discoveries!");
    println!("   New recommendations appear automatically every Friday at 7 AM PT\n");

    if copy && copy_to_clipboard(&calendar_url) {
        success!("Calendar URL copied to clipboard!");
    }
}

pub async fn preview_email(to: String) {
    let store = AppStore::load().await;
    match management::email_preview(&store.state().recommendations, &to) {
        Ok(preview) => {
            info!("Test email would be sent to: {}", preview.to);
            println!("Subject: {}\n\n{}\n", preview.subject, preview.body);
            success!("Test email preview generated for {}.", preview.to);
        }
        Err(e) => error!("{}", e),
    }
}
