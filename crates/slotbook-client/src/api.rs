//! The gateway traits: what the layers above are allowed to ask for.
//!
//! The session and booking layers never name [`reqwest`] or a URL —
//! they consume these two traits. [`crate::BookingGateway`] is the real
//! implementation; tests substitute mocks with canned results and call
//! counters.
//!
//! Split in two because the consumers are disjoint: the session store
//! needs [`AuthApi`] only, the booking containers need [`BookingApi`]
//! only. A type that does both (the gateway) implements both.

use chrono::{DateTime, Utc};
use slotbook_types::{
    ApiError, Booking, BookingId, BookingLog, Identity, Role, Room, RoomId,
    Slot, Timeslot, TimeslotId, UserId,
};

/// Authentication and account operations.
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a bearer token plus the base identity
    /// (no roles yet — those are a separate fetch).
    ///
    /// # Errors
    /// - [`ApiError::Authentication`] — the server rejected the
    ///   credentials (message preserved for inline display)
    /// - [`ApiError::Network`] — transport failure
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, Identity), ApiError>;

    /// Asks the server who the current bearer token belongs to.
    async fn check_session(&self) -> Result<UserId, ApiError>;

    /// Fetches a user's base profile.
    async fn fetch_user(&self, id: UserId) -> Result<Identity, ApiError>;

    /// Fetches a user's role set.
    async fn fetch_roles(&self, id: UserId) -> Result<Vec<Role>, ApiError>;

    /// Creates a new account. Does NOT log the new user in.
    ///
    /// # Errors
    /// - [`ApiError::Conflict`] — the email is already registered
    /// - [`ApiError::Validation`] — the server rejected the input
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError>;

    /// Tells the server to invalidate the current token. Callers treat
    /// this as best-effort; the local credential is already gone by the
    /// time this is sent.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Room, timeslot, and booking operations.
///
/// Absence of a credential is not an error at this layer — the server
/// enforces authorization and a 401/403 comes back as
/// [`ApiError::Authorization`].
pub trait BookingApi: Send + Sync {
    /// Lists every room.
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError>;

    /// Lists every timeslot of a room, booked or not.
    async fn room_timeslots(
        &self,
        room: RoomId,
    ) -> Result<Vec<Timeslot>, ApiError>;

    /// Lists the server-filtered subset of a room's timeslots that are
    /// still bookable.
    async fn room_available_timeslots(
        &self,
        room: RoomId,
    ) -> Result<Vec<Timeslot>, ApiError>;

    /// Books a timeslot for a user. Returns the created booking.
    async fn create_booking(
        &self,
        user: UserId,
        timeslot: TimeslotId,
    ) -> Result<Booking, ApiError>;

    /// Lists a user's bookings, newest first (server order preserved).
    async fn user_bookings(
        &self,
        user: UserId,
    ) -> Result<Vec<Booking>, ApiError>;

    /// Cancels a booking. Returns the server's confirmation message.
    async fn cancel_booking(
        &self,
        booking: BookingId,
    ) -> Result<String, ApiError>;

    /// Lists every booking in the system (administrators).
    async fn all_bookings(&self) -> Result<Vec<Booking>, ApiError>;

    /// Lists the booking-operations audit trail (administrators).
    async fn booking_logs(&self) -> Result<Vec<BookingLog>, ApiError>;

    /// Lists generic slots for a resource inside a time window — the
    /// feed the weekly hour-grid renders.
    async fn list_slots(
        &self,
        resource_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Slot>, ApiError>;
}
