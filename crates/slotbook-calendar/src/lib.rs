//! Calendar derivations for Slotbook.
//!
//! Everything in this crate is a pure function: same inputs, same grid,
//! no I/O, no hidden state. The booking layer feeds it fetched
//! collections and a reference date; it answers with render-ready
//! structure:
//!
//! 1. **Month view** — a Monday-start rectangular grid of day cells
//!    covering a whole month ([`month_grid`]), plus same-local-day
//!    filtering ([`items_on_day`], [`has_item_on`])
//! 2. **Week view** — an hour-by-day grid for a single week
//!    ([`week_grid`]), collecting slots per (day, hour) cell
//!
//! Timestamps arrive from the wire in UTC; "same day" always means the
//! viewer's local calendar day, so the [`StartsAt`] trait converts
//! through [`chrono::Local`] once, at the seam.

mod month;
mod week;

pub use month::{DayCell, StartsAt, has_item_on, items_on_day, month_grid, to_local_naive};
pub use week::{
    FIRST_DISPLAY_HOUR, HourCell, LAST_DISPLAY_HOUR, display_hours,
    slots_at, start_of_week, week_days, week_grid,
};
