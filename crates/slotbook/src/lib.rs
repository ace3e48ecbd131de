//! # Slotbook
//!
//! Client-side session and booking-state management for a room/timeslot
//! booking front-end. The remote HTTP API owns all data of record; this
//! workspace owns how the client holds it — the auth lifecycle, the
//! typed gateway, the calendar derivations, and the
//! mutate-then-refetch booking state.
//!
//! This meta-crate adds the last leaf consumer, the [route
//! guard](guard), and re-exports the whole surface through
//! [`prelude`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use slotbook::prelude::*;
//!
//! # async fn run() {
//! let credentials = Arc::new(MemoryCredentialStore::new());
//! let gateway = BookingGateway::new("http://localhost:3000", Arc::clone(&credentials));
//!
//! let mut session = SessionStore::new(gateway.clone(), credentials);
//! session.hydrate().await;
//!
//! match decide(session.phase(), Screen::Calendar) {
//!     RouteDecision::Allow => { /* render the calendar */ }
//!     RouteDecision::RedirectToLogin => { /* go to /login */ }
//!     _ => {}
//! }
//! # }
//! ```

mod guard;

pub use guard::{RouteDecision, Screen, decide};

pub mod prelude {
    //! Everything a consumer of the full stack needs, in one import.

    pub use slotbook_booking::{
        BookingPanel, Generation, MonthView, Notice, RequestFence, SlotPanel,
    };
    pub use slotbook_calendar::{
        DayCell, HourCell, StartsAt, display_hours, has_item_on,
        items_on_day, month_grid, slots_at, start_of_week, week_days,
        week_grid,
    };
    pub use slotbook_client::{
        AuthApi, BookingApi, BookingGateway, CredentialStore,
        FileCredentialStore, MemoryCredentialStore,
    };
    pub use slotbook_session::{AuthPhase, SessionStore, is_administrator};
    pub use slotbook_types::{
        ApiError, Booking, BookingId, BookingLog, Identity, Role, RoleId,
        Room, RoomId, Slot, Timeslot, TimeslotId, UserId,
    };

    pub use crate::{RouteDecision, Screen, decide};
}
