//! Shared types for Slotbook.
//!
//! This crate defines everything the other layers talk in:
//!
//! 1. **Domain records** — rooms, timeslots, bookings, identities
//!    ([`types`])
//! 2. **Wire shapes** — the exact JSON envelopes the remote API sends
//!    ([`wire`])
//! 3. **Error taxonomy** — every failure, normalized ([`ApiError`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Session / Booking layers (above)  ← consume domain records
//!     ↕
//! Gateway layer  ← translates wire shapes into domain records
//!     ↕
//! Types layer (this crate)  ← owns both vocabularies
//! ```

mod error;
mod types;
pub mod wire;

pub use error::ApiError;
pub use types::{
    Booking, BookingId, BookingLog, Identity, Role, RoleId, Room, RoomId,
    Slot, Timeslot, TimeslotId, UserId,
};
