//! The room/timeslot picker: rooms on the left, a room's available
//! slots on the right, and the "book" action.

use slotbook_client::BookingApi;
use slotbook_types::{ApiError, Room, RoomId, Timeslot, TimeslotId, UserId};

use crate::{Generation, Notice, RequestFence};

const BOOKED_MESSAGE: &str = "Booking confirmed.";
const CREATE_FALLBACK: &str = "Could not create the booking.";
const LOAD_SLOTS_FALLBACK: &str = "Could not load the available timeslots.";

/// View state for the booking screen.
///
/// The displayed timeslot list is ALWAYS whatever the server last said
/// for the selected room — a successful booking triggers a re-fetch
/// rather than a local edit, and a superseded fetch (room switched
/// mid-flight) is discarded by the fence.
pub struct SlotPanel<B> {
    api: B,
    rooms: Vec<Room>,
    selected_room: Option<RoomId>,
    timeslots: Vec<Timeslot>,
    loading: bool,
    notice: Option<Notice>,
    fence: RequestFence,
}

impl<B: BookingApi> SlotPanel<B> {
    pub fn new(api: B) -> Self {
        Self {
            api,
            rooms: Vec::new(),
            selected_room: None,
            timeslots: Vec::new(),
            loading: false,
            notice: None,
            fence: RequestFence::new(),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn selected_room(&self) -> Option<RoomId> {
        self.selected_room
    }

    /// The available timeslots of the selected room, as last reported
    /// by the server.
    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Loads the room list and auto-selects the first room (which
    /// fetches its available slots). A failure here is logged, not
    /// shown — the screen just renders an empty room list.
    pub async fn load_rooms(&mut self) {
        match self.api.list_rooms().await {
            Ok(rooms) => {
                let first = rooms.first().map(|room| room.room_id);
                self.rooms = rooms;
                if self.selected_room.is_none() {
                    if let Some(room) = first {
                        self.select_room(room).await;
                    }
                }
            }
            Err(err) => {
                tracing::warn!(%err, "could not load rooms");
            }
        }
    }

    /// Marks `room` selected and stamps a new availability fetch.
    /// A lingering error notice is cleared (a fresh fetch is a fresh
    /// chance); a success notice from a just-made booking survives the
    /// refresh that follows it.
    pub fn begin_slot_fetch(&mut self, room: RoomId) -> Generation {
        self.selected_room = Some(room);
        self.loading = true;
        if matches!(self.notice, Some(Notice::Error(_))) {
            self.notice = None;
        }
        self.fence.issue()
    }

    /// Applies an availability response — unless a newer fetch has been
    /// stamped since, in which case the response is dropped on the
    /// floor and the newer fetch's outcome wins.
    pub fn apply_slot_fetch(
        &mut self,
        generation: Generation,
        result: Result<Vec<Timeslot>, ApiError>,
    ) {
        if !self.fence.admits(generation) {
            tracing::debug!("discarding stale timeslot response");
            return;
        }
        self.loading = false;
        match result {
            Ok(timeslots) => self.timeslots = timeslots,
            Err(err) => {
                tracing::warn!(%err, "could not load timeslots");
                self.notice =
                    Some(Notice::from_failure(&err, LOAD_SLOTS_FALLBACK));
            }
        }
    }

    /// Selects a room and fetches its available slots end to end.
    pub async fn select_room(&mut self, room: RoomId) {
        let generation = self.begin_slot_fetch(room);
        let result = self.api.room_available_timeslots(room).await;
        self.apply_slot_fetch(generation, result);
    }

    /// Books a timeslot for `user`.
    ///
    /// Success: a success notice, then an unconditional re-fetch of the
    /// selected room's availability so the screen shows the server's
    /// truth (the booked slot disappears because the SERVER no longer
    /// lists it). Failure: an error notice carrying the server's
    /// message when present, and the displayed list stays exactly as it
    /// was — no premature removal.
    pub async fn book(&mut self, user: UserId, timeslot: TimeslotId) {
        self.notice = None;
        match self.api.create_booking(user, timeslot).await {
            Ok(booking) => {
                tracing::info!(booking = %booking.booking_id, "booking created");
                self.notice = Some(Notice::Success(BOOKED_MESSAGE.into()));
                if let Some(room) = self.selected_room {
                    let generation = self.begin_slot_fetch(room);
                    let result =
                        self.api.room_available_timeslots(room).await;
                    self.apply_slot_fetch(generation, result);
                }
            }
            Err(err) => {
                self.notice = Some(Notice::from_failure(&err, CREATE_FALLBACK));
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for the slot panel against a scripted mock gateway.
    //!
    //! The mock serves availability responses from a queue, so a test
    //! can script "first fetch returns X, the refetch returns Y" and
    //! assert the panel displays exactly what the server last said.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};
    use slotbook_types::{Booking, BookingId, BookingLog, Slot};

    use super::*;

    // -- Mock -------------------------------------------------------------

    struct MockBooking {
        rooms: Result<Vec<Room>, ApiError>,
        available: Mutex<VecDeque<Result<Vec<Timeslot>, ApiError>>>,
        create: Result<Booking, ApiError>,
    }

    impl MockBooking {
        fn new() -> Self {
            Self {
                rooms: Ok(vec![room(1, "Studio A"), room(2, "Studio B")]),
                available: Mutex::new(VecDeque::new()),
                create: Ok(booking(31)),
            }
        }

        fn queue_available(&self, result: Result<Vec<Timeslot>, ApiError>) {
            self.available
                .lock()
                .expect("queue lock poisoned")
                .push_back(result);
        }
    }

    impl BookingApi for MockBooking {
        async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
            self.rooms.clone()
        }

        async fn room_timeslots(
            &self,
            _room: RoomId,
        ) -> Result<Vec<Timeslot>, ApiError> {
            unimplemented!("not exercised by the slot panel")
        }

        async fn room_available_timeslots(
            &self,
            _room: RoomId,
        ) -> Result<Vec<Timeslot>, ApiError> {
            self.available
                .lock()
                .expect("queue lock poisoned")
                .pop_front()
                .expect("test forgot to queue an availability response")
        }

        async fn create_booking(
            &self,
            _user: UserId,
            _timeslot: TimeslotId,
        ) -> Result<Booking, ApiError> {
            self.create.clone()
        }

        async fn user_bookings(
            &self,
            _user: UserId,
        ) -> Result<Vec<Booking>, ApiError> {
            unimplemented!("not exercised by the slot panel")
        }

        async fn cancel_booking(
            &self,
            _booking: BookingId,
        ) -> Result<String, ApiError> {
            unimplemented!("not exercised by the slot panel")
        }

        async fn all_bookings(&self) -> Result<Vec<Booking>, ApiError> {
            unimplemented!("not exercised by the slot panel")
        }

        async fn booking_logs(&self) -> Result<Vec<BookingLog>, ApiError> {
            unimplemented!("not exercised by the slot panel")
        }

        async fn list_slots(
            &self,
            _resource_id: &str,
            _from: chrono::DateTime<Utc>,
            _to: chrono::DateTime<Utc>,
        ) -> Result<Vec<Slot>, ApiError> {
            unimplemented!("not exercised by the slot panel")
        }
    }

    // -- Fixtures ---------------------------------------------------------

    fn room(id: i64, name: &str) -> Room {
        Room {
            room_id: RoomId(id),
            name: name.into(),
            capacity: 20,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn timeslot(id: i64, room: i64) -> Timeslot {
        Timeslot {
            timeslot_id: TimeslotId(id),
            room_id: RoomId(room),
            start_time: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap(),
            created_at: None,
        }
    }

    fn booking(id: i64) -> Booking {
        Booking {
            booking_id: BookingId(id),
            user_id: UserId(5),
            timeslot_id: TimeslotId(7),
            status: "booked".into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
            start_time: None,
            end_time: None,
            room_name: None,
        }
    }

    fn remote(message: &str) -> ApiError {
        ApiError::Remote {
            status: 500,
            message: message.into(),
        }
    }

    // =====================================================================
    // load_rooms() / select_room()
    // =====================================================================

    #[tokio::test]
    async fn test_load_rooms_selects_first_room_and_fetches_its_slots() {
        let api = MockBooking::new();
        api.queue_available(Ok(vec![timeslot(10, 1)]));
        let mut panel = SlotPanel::new(api);

        panel.load_rooms().await;

        assert_eq!(panel.rooms().len(), 2);
        assert_eq!(panel.selected_room(), Some(RoomId(1)));
        assert_eq!(panel.timeslots().len(), 1);
        assert!(!panel.loading());
    }

    #[tokio::test]
    async fn test_load_rooms_failure_stays_quiet() {
        let mut api = MockBooking::new();
        api.rooms = Err(remote("db down"));
        let mut panel = SlotPanel::new(api);

        panel.load_rooms().await;

        assert!(panel.rooms().is_empty());
        assert!(panel.notice().is_none(), "room-list load has no inline error");
        assert_eq!(panel.selected_room(), None);
    }

    #[tokio::test]
    async fn test_select_room_failure_shows_server_message_keeps_slots() {
        let api = MockBooking::new();
        api.queue_available(Ok(vec![timeslot(10, 1)]));
        api.queue_available(Err(remote("room is closed")));
        let mut panel = SlotPanel::new(api);

        panel.select_room(RoomId(1)).await;
        panel.select_room(RoomId(2)).await;

        let notice = panel.notice().expect("error notice set");
        assert!(notice.is_error());
        assert_eq!(notice.message(), "room is closed");
        // The previously displayed list is left as-is.
        assert_eq!(panel.timeslots().len(), 1);
    }

    // =====================================================================
    // Fencing: the room-switch race
    // =====================================================================

    #[tokio::test]
    async fn test_stale_room_response_does_not_overwrite_newer_room() {
        // Fetch for room A is issued, then the user switches to room B.
        // Room B's response arrives FIRST; room A's arrives late. The
        // late response must be discarded.
        let api = MockBooking::new();
        let mut panel = SlotPanel::new(api);

        let gen_a = panel.begin_slot_fetch(RoomId(1));
        let gen_b = panel.begin_slot_fetch(RoomId(2));

        panel.apply_slot_fetch(gen_b, Ok(vec![timeslot(20, 2)]));
        panel.apply_slot_fetch(gen_a, Ok(vec![timeslot(10, 1)]));

        assert_eq!(panel.selected_room(), Some(RoomId(2)));
        assert_eq!(panel.timeslots().len(), 1);
        assert_eq!(
            panel.timeslots()[0].room_id,
            RoomId(2),
            "room A's stale slots must not win"
        );
        assert!(!panel.loading());
    }

    #[tokio::test]
    async fn test_stale_error_response_is_discarded_too() {
        let api = MockBooking::new();
        let mut panel = SlotPanel::new(api);

        let gen_a = panel.begin_slot_fetch(RoomId(1));
        let gen_b = panel.begin_slot_fetch(RoomId(2));

        panel.apply_slot_fetch(gen_b, Ok(vec![timeslot(20, 2)]));
        panel.apply_slot_fetch(gen_a, Err(remote("room A exploded")));

        assert!(panel.notice().is_none(), "stale failure must not surface");
        assert_eq!(panel.timeslots()[0].room_id, RoomId(2));
    }

    // =====================================================================
    // book()
    // =====================================================================

    #[tokio::test]
    async fn test_book_success_refetches_authoritative_availability() {
        let api = MockBooking::new();
        // Initial fetch: two free slots. Refetch after booking: the
        // server no longer lists the booked one.
        api.queue_available(Ok(vec![timeslot(10, 1), timeslot(11, 1)]));
        api.queue_available(Ok(vec![timeslot(11, 1)]));
        let mut panel = SlotPanel::new(api);
        panel.select_room(RoomId(1)).await;

        panel.book(UserId(5), TimeslotId(10)).await;

        let notice = panel.notice().expect("success notice set");
        assert!(notice.is_success());
        // Displayed state is the refetch, not a local removal.
        assert_eq!(panel.timeslots().len(), 1);
        assert_eq!(panel.timeslots()[0].timeslot_id, TimeslotId(11));
    }

    #[tokio::test]
    async fn test_book_failure_keeps_slot_list_and_shows_server_message() {
        let mut api = MockBooking::new();
        api.create = Err(remote("Timeslot already full"));
        api.queue_available(Ok(vec![timeslot(10, 1), timeslot(11, 1)]));
        let mut panel = SlotPanel::new(api);
        panel.select_room(RoomId(1)).await;

        panel.book(UserId(5), TimeslotId(10)).await;

        let notice = panel.notice().expect("error notice set");
        assert!(notice.is_error());
        assert_eq!(notice.message(), "Timeslot already full");
        // No refetch happened (nothing queued for one) and the list is
        // untouched — the slot is not prematurely removed.
        assert_eq!(panel.timeslots().len(), 2);
    }

    #[tokio::test]
    async fn test_book_failure_without_server_message_uses_fallback() {
        let mut api = MockBooking::new();
        api.create = Err(ApiError::Network("connection reset".into()));
        api.queue_available(Ok(vec![timeslot(10, 1)]));
        let mut panel = SlotPanel::new(api);
        panel.select_room(RoomId(1)).await;

        panel.book(UserId(5), TimeslotId(10)).await;

        assert_eq!(
            panel.notice().expect("error notice").message(),
            CREATE_FALLBACK
        );
    }

    #[tokio::test]
    async fn test_book_clears_previous_notice_before_each_attempt() {
        let api = MockBooking::new();
        api.queue_available(Ok(vec![timeslot(10, 1)]));
        api.queue_available(Ok(vec![]));
        let mut panel = SlotPanel::new(api);
        panel.select_room(RoomId(1)).await;

        panel.book(UserId(5), TimeslotId(10)).await;
        assert!(panel.notice().expect("first outcome").is_success());

        // Second attempt fails: only the error must remain.
        // (Success and error can never coexist — single slot.)
        let mut api = MockBooking::new();
        api.create = Err(remote("Timeslot already full"));
        api.queue_available(Ok(vec![timeslot(10, 1)]));
        let mut panel = SlotPanel::new(api);
        panel.select_room(RoomId(1)).await;
        panel.notice = Some(Notice::Success("stale success".into()));

        panel.book(UserId(5), TimeslotId(10)).await;

        let notice = panel.notice().expect("error notice");
        assert!(notice.is_error());
        assert_ne!(notice.message(), "stale success");
    }
}

