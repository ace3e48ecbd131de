//! The dashboard month calendar: a month grid with the user's bookings
//! marked on it, and a selected day's bookings listed underneath.

use chrono::{Datelike, Months, NaiveDate};
use slotbook_calendar::{DayCell, has_item_on, items_on_day, month_grid};
use slotbook_client::BookingApi;
use slotbook_types::{ApiError, Booking, UserId};

use crate::{Generation, RequestFence};

const LOAD_FALLBACK: &str = "Could not load your bookings.";

/// View state for the dashboard calendar.
///
/// The grid itself is a pure derivation of the displayed month (see
/// [`slotbook_calendar::month_grid`]); this container owns the moving
/// parts around it — which month is shown, which day is selected, and
/// the fetched booking list the highlights are computed from.
pub struct MonthView<B> {
    api: B,
    /// First day of the displayed month.
    reference: NaiveDate,
    selected: NaiveDate,
    bookings: Vec<Booking>,
    loading: bool,
    error: Option<String>,
    fence: RequestFence,
}

impl<B: BookingApi> MonthView<B> {
    /// Creates a view showing `today`'s month with `today` selected.
    /// The caller supplies "today" — this type never reads a clock.
    pub fn new(api: B, today: NaiveDate) -> Self {
        Self {
            api,
            reference: first_of_month(today),
            selected: today,
            bookings: Vec::new(),
            loading: false,
            error: None,
            fence: RequestFence::new(),
        }
    }

    /// First day of the displayed month.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The month grid for the displayed month. Recomputed on demand —
    /// it is a pure function of the reference date.
    pub fn grid(&self) -> Vec<Vec<DayCell>> {
        month_grid(self.reference)
    }

    /// Shows the previous month. The selection stays put — it just may
    /// no longer be in the displayed month.
    pub fn prev_month(&mut self) {
        self.reference = self.reference - Months::new(1);
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        self.reference = self.reference + Months::new(1);
    }

    /// Selects a day. Out-of-month padding cells are not selectable —
    /// a date outside the displayed month is ignored.
    pub fn select_date(&mut self, date: NaiveDate) {
        if date.year() == self.reference.year()
            && date.month() == self.reference.month()
        {
            self.selected = date;
        }
    }

    /// The no-user edge case: with no id to fetch for, the booking list
    /// is simply empty — not fetched, not an error.
    pub fn clear_bookings(&mut self) {
        self.bookings.clear();
        self.error = None;
    }

    /// Stamps a new booking fetch.
    pub fn begin_fetch(&mut self) -> Generation {
        self.loading = true;
        self.error = None;
        self.fence.issue()
    }

    /// Applies a booking-list response, unless superseded.
    ///
    /// Unlike the mutation panels, a load failure here shows a fixed
    /// message — there is no user action to explain, the calendar just
    /// couldn't load.
    pub fn apply_fetch(
        &mut self,
        generation: Generation,
        result: Result<Vec<Booking>, ApiError>,
    ) {
        if !self.fence.admits(generation) {
            tracing::debug!("discarding stale calendar booking response");
            return;
        }
        self.loading = false;
        match result {
            Ok(bookings) => self.bookings = bookings,
            Err(err) => {
                tracing::warn!(%err, "could not load calendar bookings");
                self.error = Some(LOAD_FALLBACK.to_string());
            }
        }
    }

    /// Fetches the user's bookings end to end; with no user id, clears
    /// the list instead of calling the server.
    pub async fn refresh(&mut self, user: Option<UserId>) {
        let Some(user) = user else {
            self.clear_bookings();
            return;
        };
        let generation = self.begin_fetch();
        let result = self.api.user_bookings(user).await;
        self.apply_fetch(generation, result);
    }

    /// The bookings starting on the selected day (local time).
    pub fn bookings_on_selected_day(&self) -> Vec<&Booking> {
        items_on_day(&self.bookings, self.selected)
    }

    /// Whether any booking starts on `day` — drives cell highlighting.
    pub fn has_booking_on(&self, day: NaiveDate) -> bool {
        has_item_on(&self.bookings, day)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("every month has a day 1")
}

// =========================================================================
// Tests
// =========================================================================
