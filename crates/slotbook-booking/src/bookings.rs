//! The user's booking list and the "cancel" action.

use slotbook_client::BookingApi;
use slotbook_types::{ApiError, Booking, BookingId, UserId};

use crate::{Generation, Notice, RequestFence};

const CANCELLED_MESSAGE: &str = "Booking cancelled.";
const CANCEL_FALLBACK: &str = "Could not cancel the booking.";
const LOAD_FALLBACK: &str = "Could not load your bookings.";

/// View state for the "my bookings" screen.
///
/// Same discipline as the slot panel: the displayed list is whatever
/// the server last answered. A cancel never edits the list locally —
/// the status change (or disappearance) arrives with the refetch.
pub struct BookingPanel<B> {
    api: B,
    bookings: Vec<Booking>,
    loading: bool,
    notice: Option<Notice>,
    fence: RequestFence,
}

impl<B: BookingApi> BookingPanel<B> {
    pub fn new(api: B) -> Self {
        Self {
            api,
            bookings: Vec::new(),
            loading: false,
            notice: None,
            fence: RequestFence::new(),
        }
    }

    /// The user's bookings as last reported by the server.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Stamps a new booking-list fetch. Clears a lingering error
    /// notice; a success notice from a just-made cancel survives the
    /// refetch that follows it.
    pub fn begin_refresh(&mut self) -> Generation {
        self.loading = true;
        if matches!(self.notice, Some(Notice::Error(_))) {
            self.notice = None;
        }
        self.fence.issue()
    }

    /// Applies a booking-list response, unless superseded.
    pub fn apply_refresh(
        &mut self,
        generation: Generation,
        result: Result<Vec<Booking>, ApiError>,
    ) {
        if !self.fence.admits(generation) {
            tracing::debug!("discarding stale booking-list response");
            return;
        }
        self.loading = false;
        match result {
            Ok(bookings) => self.bookings = bookings,
            Err(err) => {
                tracing::warn!(%err, "could not load bookings");
                self.notice = Some(Notice::from_failure(&err, LOAD_FALLBACK));
            }
        }
    }

    /// Fetches the user's booking list end to end.
    pub async fn refresh(&mut self, user: UserId) {
        let generation = self.begin_refresh();
        let result = self.api.user_bookings(user).await;
        self.apply_refresh(generation, result);
    }

    /// Cancels a booking.
    ///
    /// Success: a success notice, then a refetch of the user's list so
    /// the rendered status is the server's, not a locally patched copy.
    /// Failure: an error notice (server message when present), and the
    /// list stays exactly as it was.
    pub async fn cancel(&mut self, user: UserId, booking: BookingId) {
        self.notice = None;
        match self.api.cancel_booking(booking).await {
            Ok(confirmation) => {
                tracing::info!(%booking, %confirmation, "booking cancelled");
                self.notice = Some(Notice::Success(CANCELLED_MESSAGE.into()));
                let generation = self.begin_refresh();
                let result = self.api.user_bookings(user).await;
                self.apply_refresh(generation, result);
            }
            Err(err) => {
                self.notice = Some(Notice::from_failure(&err, CANCEL_FALLBACK));
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
