use crate::api::Dashboard;
use crate::domain::ResourceKind;
use crate::search_view::SearchView;

/// One-shot user notification, the console counterpart of an alert dialog.
pub fn notify(message: &str) {
    println!("🔔 {}", message);
}

pub fn render_results(view: &SearchView, kind: ResourceKind) {
    let (icon, title) = match kind {
        ResourceKind::Hospital => ("🏥", "Nearby Hospitals"),
        ResourceKind::Ambulance => ("🚑", "Nearby Ambulances"),
    };

    let results = view.visible(kind);
    if results.is_empty() {
        println!("No nearby {}s found.", kind);
        return;
    }

    println!("{}", title);
    for result in results {
        println!("{} {}\n   {}\n   📍 {}", icon, result.name, result.vicinity, result.map_link());
    }
}

pub fn render_dashboard(dashboard: &Dashboard) {
    println!("Total Users: {}", dashboard.users.len());
    println!("Contact Requests: {}", dashboard.contacts.len());
    println!("Callback Requests: {}", dashboard.callbacks.len());
    println!("SOS Alerts: {}", dashboard.sos.len());

    println!("\nRecent Users");
    let recent = dashboard.recent_users(5);
    if recent.is_empty() {
        println!("No users yet.");
    }
    for user in recent {
        println!(
            "  {} <{}> {}",
            user.name.as_deref().unwrap_or("—"),
            user.email.as_deref().unwrap_or("—"),
            format_timestamp(user.created_at)
        );
    }

    if !dashboard.sos.is_empty() {
        println!("\nSOS Alerts");
    }
    for alert in &dashboard.sos {
        let coordinates = alert.coordinates();
        println!(
            "  {}, {} {} {}",
            coordinates.latitude,
            coordinates.longitude,
            format_timestamp(alert.created_at),
            alert.map_link()
        );
    }
}

fn format_timestamp(timestamp: Option<chrono::DateTime<chrono::Utc>>) -> String {
    timestamp
        .map(|t| t.with_timezone(&chrono::Local).format("%d/%m/%Y, %H:%M:%S").to_string())
        .unwrap_or_else(|| "—".to_string())
}
