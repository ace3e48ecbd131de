//! End-to-end wiring demo: hydrate (or log in), then print the rooms,
//! the first room's available timeslots, and this month's calendar
//! with booked days marked.
//!
//! Configuration comes from the environment:
//!
//! ```text
//! SLOTBOOK_API       base URL of the booking API (default http://localhost:3000)
//! SLOTBOOK_EMAIL     login email, used when no persisted session exists
//! SLOTBOOK_PASSWORD  login password
//! ```
//!
//! The bearer token is persisted under `.slotbook/`, so a second run
//! hydrates without logging in again.

use std::sync::Arc;

use chrono::Datelike;
use slotbook::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("SLOTBOOK_API")
        .unwrap_or_else(|_| "http://localhost:3000".into());

    let credentials = Arc::new(FileCredentialStore::new(".slotbook"));
    let gateway = BookingGateway::new(&base_url, Arc::clone(&credentials));
    let mut session = SessionStore::new(gateway.clone(), credentials);

    session.hydrate().await;

    if !session.is_authenticated() {
        let (Ok(email), Ok(password)) = (
            std::env::var("SLOTBOOK_EMAIL"),
            std::env::var("SLOTBOOK_PASSWORD"),
        ) else {
            eprintln!(
                "no persisted session — set SLOTBOOK_EMAIL and SLOTBOOK_PASSWORD to log in"
            );
            std::process::exit(1);
        };
        if let Err(err) = session.login(&email, &password).await {
            eprintln!("login failed: {err}");
            std::process::exit(1);
        }
    }

    let Some(identity) = session.identity() else {
        eprintln!("no identity after login");
        std::process::exit(1);
    };
    let admin_tag = if session.is_administrator() {
        " (administrator)"
    } else {
        ""
    };
    println!("Hello, {} <{}>{admin_tag}", identity.name, identity.email);
    println!();

    // The route guard in action, for show.
    let decision = slotbook::decide(session.phase(), Screen::Calendar);
    assert_eq!(decision, RouteDecision::Allow);

    // Rooms and the first room's availability.
    let mut panel = SlotPanel::new(gateway.clone());
    panel.load_rooms().await;

    println!("Rooms:");
    for room in panel.rooms() {
        let marker = if Some(room.room_id) == panel.selected_room() {
            "*"
        } else {
            " "
        };
        println!("  {marker} {} (capacity {})", room.name, room.capacity);
    }

    println!();
    println!("Available timeslots in the selected room:");
    if let Some(notice) = panel.notice() {
        println!("  [{}]", notice.message());
    }
    if panel.timeslots().is_empty() {
        println!("  (none)");
    }
    for slot in panel.timeslots() {
        println!(
            "  {}  {} – {}",
            slot.timeslot_id,
            slot.start_time.format("%Y-%m-%d %H:%M"),
            slot.end_time.format("%H:%M"),
        );
    }

    // This month's calendar, booked days marked with '*'.
    let today = chrono::Local::now().date_naive();
    let mut calendar = MonthView::new(gateway.clone(), today);
    calendar.refresh(session.user_id()).await;

    println!();
    println!(
        "Bookings in {} {}:",
        calendar.reference().format("%B"),
        calendar.reference().year()
    );
    if let Some(error) = calendar.error() {
        println!("  [{error}]");
    }
    println!("   Mo   Tu   We   Th   Fr   Sa   Su");
    for row in calendar.grid() {
        let line: String = row
            .iter()
            .map(|cell| {
                if !cell.in_displayed_month {
                    "    .".to_string()
                } else if calendar.has_booking_on(cell.date) {
                    format!("  {:>2}*", cell.date.day())
                } else {
                    format!("  {:>2} ", cell.date.day())
                }
            })
            .collect();
        println!("{line}");
    }

    for booking in calendar.bookings_on_selected_day() {
        let room = booking.room_name.as_deref().unwrap_or("room");
        println!(
            "  today: {} in {room} ({})",
            booking.booking_id, booking.status
        );
    }
}
