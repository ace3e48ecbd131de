//! Week view: an hour-by-day grid for a single displayed week.

use chrono::{Datelike, Days, NaiveDate, Timelike};
use slotbook_types::Slot;

use crate::month::StartsAt;

/// First hour row of the display window (06:00).
pub const FIRST_DISPLAY_HOUR: u32 = 6;

/// Last hour row of the display window (21:00), inclusive — a slot
/// starting at 21:45 still lands in this row.
pub const LAST_DISPLAY_HOUR: u32 = 21;

/// The display window's hour rows, in order.
pub fn display_hours() -> impl Iterator<Item = u32> {
    FIRST_DISPLAY_HOUR..=LAST_DISPLAY_HOUR
}

/// The Monday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// The seven days of the week containing `reference`, Monday first.
pub fn week_days(reference: NaiveDate) -> [NaiveDate; 7] {
    let monday = start_of_week(reference);
    std::array::from_fn(|offset| monday + Days::new(offset as u64))
}

/// One cell of the week grid: every slot starting on `day` during
/// `hour`. Multiple slots can share a cell; full slots are kept —
/// rendering shows them as non-bookable, it doesn't hide them.
#[derive(Debug, Clone)]
pub struct HourCell<'a> {
    pub day: NaiveDate,
    pub hour: u32,
    pub slots: Vec<&'a Slot>,
}

/// The slots whose local start date is `day` and local start hour is
/// `hour`.
pub fn slots_at(slots: &[Slot], day: NaiveDate, hour: u32) -> Vec<&Slot> {
    slots
        .iter()
        .filter(|slot| {
            slot.starts_at().is_some_and(|start| {
                start.date() == day && start.time().hour() == hour
            })
        })
        .collect()
}

/// Builds the hour × day grid for the week containing `reference`:
/// one row per display hour, each row holding seven [`HourCell`]s in
/// Monday-first order.
pub fn week_grid(reference: NaiveDate, slots: &[Slot]) -> Vec<Vec<HourCell<'_>>> {
    let days = week_days(reference);
    display_hours()
        .map(|hour| {
            days.iter()
                .map(|&day| HourCell {
                    day,
                    hour,
                    slots: slots_at(slots, day, hour),
                })
                .collect()
        })
        .collect()
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone, Weekday};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Builds a slot whose LOCAL start is the given wall-clock time, so
    /// grid placement assertions hold on any test machine timezone.
    fn slot_at(id: &str, d: NaiveDate, hour: u32, minute: u32) -> Slot {
        let local = d.and_hms_opt(hour, minute, 0).unwrap();
        let start = Local
            .from_local_datetime(&local)
            .single()
            .expect("display-window hours are never inside a DST gap")
            .to_utc();
        Slot {
            id: id.into(),
            start,
            end: start + chrono::Duration::hours(1),
            title: None,
            trainer_name: None,
            capacity: 10,
            booked_count: 0,
        }
    }

    // -- Week boundaries --------------------------------------------------

    #[test]
    fn test_start_of_week_is_monday() {
        // 2025-03-12 is a Wednesday.
        assert_eq!(start_of_week(date(2025, 3, 12)), date(2025, 3, 10));
        // Monday maps to itself.
        assert_eq!(start_of_week(date(2025, 3, 10)), date(2025, 3, 10));
        // Sunday belongs to the week that STARTED six days earlier.
        assert_eq!(start_of_week(date(2025, 3, 16)), date(2025, 3, 10));
    }

    #[test]
    fn test_week_days_are_consecutive_from_monday() {
        let days = week_days(date(2025, 3, 12));
        assert_eq!(days[0], date(2025, 3, 10));
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6], date(2025, 3, 16));
        for pair in days.windows(2) {
            assert_eq!(pair[1], pair[0] + Days::new(1));
        }
    }

    // -- Grid shape and placement -----------------------------------------

    #[test]
    fn test_week_grid_dimensions() {
        let grid = week_grid(date(2025, 3, 12), &[]);
        assert_eq!(grid.len(), 16, "06:00 through 21:00 inclusive");
        for row in &grid {
            assert_eq!(row.len(), 7);
        }
        assert_eq!(grid[0][0].hour, FIRST_DISPLAY_HOUR);
        assert_eq!(grid[15][0].hour, LAST_DISPLAY_HOUR);
    }

    #[test]
    fn test_week_grid_places_slot_by_day_and_hour() {
        let wednesday = date(2025, 3, 12);
        let slots = [slot_at("s-1", wednesday, 6, 0)];

        let grid = week_grid(wednesday, &slots);

        // 06:00 row, Wednesday column (index 2).
        let cell = &grid[0][2];
        assert_eq!(cell.slots.len(), 1);
        assert_eq!(cell.slots[0].id, "s-1");

        let placed: usize = grid
            .iter()
            .flatten()
            .map(|cell| cell.slots.len())
            .sum();
        assert_eq!(placed, 1, "the slot appears in exactly one cell");
    }

    #[test]
    fn test_week_grid_last_hour_row_catches_late_starts() {
        let friday = date(2025, 3, 14);
        let slots = [slot_at("late", friday, 21, 45)];

        let grid = week_grid(friday, &slots);

        let cell = &grid[15][4];
        assert_eq!(cell.hour, 21);
        assert_eq!(cell.slots.len(), 1);
    }

    #[test]
    fn test_week_grid_multiple_slots_share_a_cell() {
        let monday = date(2025, 3, 10);
        let slots = [
            slot_at("a", monday, 10, 0),
            slot_at("b", monday, 10, 30),
        ];

        let grid = week_grid(monday, &slots);

        let cell = &grid[4][0]; // 10:00 row, Monday column
        assert_eq!(cell.slots.len(), 2);
    }

    #[test]
    fn test_week_grid_keeps_full_slots_visible() {
        let monday = date(2025, 3, 10);
        let mut full = slot_at("full", monday, 9, 0);
        full.booked_count = full.capacity;
        let slots = [full];

        let grid = week_grid(monday, &slots);

        let cell = &grid[3][0];
        assert_eq!(cell.slots.len(), 1, "full slots stay in the grid");
        assert!(cell.slots[0].is_full());
    }

    #[test]
    fn test_slots_at_ignores_other_days_and_hours() {
        let monday = date(2025, 3, 10);
        let slots = [slot_at("a", monday, 10, 0)];

        assert!(slots_at(&slots, monday, 11).is_empty());
        assert!(slots_at(&slots, date(2025, 3, 11), 10).is_empty());
    }
}
