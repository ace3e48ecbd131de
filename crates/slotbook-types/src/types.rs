//! Domain records: the data the booking screens are built from.
//!
//! Everything here is a plain value type. Records are read-only from the
//! client's perspective — the remote API owns the data of record; this
//! side only fetches, displays, and asks for changes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identifier newtypes
// ---------------------------------------------------------------------------

/// A unique identifier for a user account.
///
/// This is a "newtype wrapper" — a named struct around a primitive. The
/// remote API hands out plain numbers for every kind of id, and wrapping
/// each in its own type means a `RoomId` can never be passed where a
/// `UserId` is expected, even though both are `i64` underneath.
///
/// `#[serde(transparent)]` keeps the wire format a bare number: a
/// `UserId(42)` serializes as `42`, not `{ "0": 42 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

/// A unique identifier for a bookable room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub i64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

/// A unique identifier for a room's bookable time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeslotId(pub i64);

impl fmt::Display for TimeslotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T-{}", self.0)
    }
}

/// A unique identifier for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub i64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B-{}", self.0)
    }
}

/// A unique identifier for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub i64);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RL-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identity and roles
// ---------------------------------------------------------------------------

/// A role attached to a user, as served by `GET /users/{id}/roles`.
///
/// Immutable once fetched. Order within a role set is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: RoleId,
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_desc: Option<String>,
}

/// The authenticated user: base profile plus the resolved role set.
///
/// Owned exclusively by the session store. `roles` starts empty and is
/// authoritative only after an explicit roles fetch completes — callers
/// gating on roles must treat an empty set as "unknown", not "no roles"
/// (fail closed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

// ---------------------------------------------------------------------------
// Rooms and timeslots
// ---------------------------------------------------------------------------

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub created_at: DateTime<Utc>,
}

/// A bookable interval belonging to a room.
///
/// "Available" timeslots are a server-filtered subset of these — the
/// client never computes availability itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeslot {
    pub timeslot_id: TimeslotId,
    pub room_id: RoomId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

/// A user's reservation of a timeslot.
///
/// `status` is the server's string verbatim. The server defines the set
/// ("booked", "cancelled", possibly more later); the client only ever
/// branches on the one active value, via [`Booking::is_active`].
/// The trailing fields are denormalized by the server for display and
/// may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub timeslot_id: TimeslotId,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
}

impl Booking {
    /// The status string the server uses for a live booking.
    pub const STATUS_BOOKED: &'static str = "booked";

    /// Returns `true` if this booking is still live (cancellable).
    pub fn is_active(&self) -> bool {
        self.status == Self::STATUS_BOOKED
    }
}

/// One row of the booking-operations audit trail (`GET /booking-logs`,
/// administrators only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingLog {
    pub id: i64,
    pub booking_id: BookingId,
    pub operation: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Generic slots (weekly calendar feed)
// ---------------------------------------------------------------------------

/// A generic bookable slot from `GET /slots`, used by the weekly
/// hour-grid view. Unlike [`Timeslot`] it carries its own capacity and
/// current head count, so fullness is decidable client-side for display.
///
/// This endpoint speaks camelCase, hence the rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_name: Option<String>,
    pub capacity: u32,
    pub booked_count: u32,
}

impl Slot {
    /// A slot is full iff its head count has reached capacity.
    ///
    /// Full slots stay visible in the grid — they render as
    /// non-bookable, they don't disappear.
    pub fn is_full(&self) -> bool {
        self.booked_count >= self.capacity
    }
}

// =========================================================================
// Tests
// =========================================================================
