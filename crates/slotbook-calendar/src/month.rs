//! Month grid construction and same-day filtering.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, Utc};
use slotbook_types::{Booking, Slot, Timeslot};

// ---------------------------------------------------------------------------
// DayCell
// ---------------------------------------------------------------------------

/// One cell of the month grid.
///
/// Derived, never persisted — the grid is recomputed from the reference
/// date on every period change. Cells padded in from the adjacent
/// months carry `in_displayed_month: false` and are not selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_displayed_month: bool,
}

/// Builds the month grid for the month containing `reference`.
///
/// The grid is rectangular: rows of exactly 7 cells, starting on
/// Monday, padded at both ends with adjacent-month days so the whole
/// month is covered. A 28-day February starting on a Monday yields 4
/// rows with no padding; a 31-day month starting on a Saturday yields
/// 6.
///
/// Pure function of the reference date — any day of a month produces
/// that month's grid.
pub fn month_grid(reference: NaiveDate) -> Vec<Vec<DayCell>> {
    let first = reference
        .with_day(1)
        .expect("every month has a day 1");
    let last = last_day_of_month(reference);

    // Walk back to the Monday on or before the 1st.
    let lead = u64::from(first.weekday().num_days_from_monday());
    let mut current = first - Days::new(lead);

    let mut cells = Vec::new();
    while current <= last || cells.len() % 7 != 0 {
        cells.push(DayCell {
            date: current,
            in_displayed_month: current.month() == reference.month()
                && current.year() == reference.year(),
        });
        current = current
            .succ_opt()
            .expect("calendar range is nowhere near the date limits");
    }

    cells.chunks(7).map(<[DayCell]>::to_vec).collect()
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of a month is always valid");
    first_of_next
        .pred_opt()
        .expect("the day before a month start exists")
}

// ---------------------------------------------------------------------------
// Same-day filtering
// ---------------------------------------------------------------------------

/// Converts a wire timestamp (UTC) into the viewer's local wall-clock
/// time. All "which day is this on" questions are asked of the result.
pub fn to_local_naive(timestamp: DateTime<Utc>) -> NaiveDateTime {
    timestamp.with_timezone(&Local).naive_local()
}

/// Anything with a (possibly missing) start timestamp, expressed in
/// local wall-clock time.
///
/// Records without a start — a booking whose denormalized times were
/// omitted — answer `None` and simply never match a day.
pub trait StartsAt {
    fn starts_at(&self) -> Option<NaiveDateTime>;
}

impl StartsAt for Booking {
    fn starts_at(&self) -> Option<NaiveDateTime> {
        self.start_time.map(to_local_naive)
    }
}

impl StartsAt for Timeslot {
    fn starts_at(&self) -> Option<NaiveDateTime> {
        Some(to_local_naive(self.start_time))
    }
}

impl StartsAt for Slot {
    fn starts_at(&self) -> Option<NaiveDateTime> {
        Some(to_local_naive(self.start))
    }
}

/// The subset of `items` whose start falls on `day` — year/month/day
/// equality in local time, nothing fancier.
pub fn items_on_day<T: StartsAt>(items: &[T], day: NaiveDate) -> Vec<&T> {
    items
        .iter()
        .filter(|item| item.starts_at().is_some_and(|start| start.date() == day))
        .collect()
}

/// Returns `true` if any item starts on `day`. Drives the per-cell
/// highlight in the month grid.
pub fn has_item_on<T: StartsAt>(items: &[T], day: NaiveDate) -> bool {
    items
        .iter()
        .any(|item| item.starts_at().is_some_and(|start| start.date() == day))
}

// =========================================================================
// Tests
// =========================================================================
