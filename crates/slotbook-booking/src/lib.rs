//! Booking view-state and mutation coordination for Slotbook.
//!
//! This crate owns the stateful middle of the booking screens:
//!
//! 1. **Fencing** — the request-generation discipline that keeps a
//!    stale response from overwriting newer state ([`RequestFence`])
//! 2. **Notices** — the transient success/error message slot
//!    ([`Notice`]): one slot, so the two are mutually exclusive
//! 3. **Containers** — per-screen state: the room/timeslot picker
//!    ([`SlotPanel`]), the user's booking list ([`BookingPanel`]), and
//!    the dashboard month calendar ([`MonthView`])
//!
//! The mutation pattern is the same everywhere: clear notices, call the
//! gateway, and on success re-fetch the authoritative collection — the
//! source of truth is always the post-mutation refetch, never an
//! optimistic local edit. On failure the collection is left untouched
//! and the server's message (or a generic fallback) is shown inline.
//!
//! # Concurrency note
//!
//! Containers are plain owned state driven from one task. The async
//! convenience methods (`select_room`, `book`, `refresh`, ...) run a
//! whole fetch sequentially; the public `begin_*`/`apply_*` halves
//! exist so a caller juggling overlapping fetches — or a test — can
//! interleave them and rely on the fence to discard the stale one.
//! A dropped container simply never applies a late response.

mod bookings;
mod fence;
mod month_view;
mod notice;
mod slots;

pub use bookings::BookingPanel;
pub use fence::{Generation, RequestFence};
pub use month_view::MonthView;
pub use notice::Notice;
pub use slots::SlotPanel;
